use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    Method,
};

pub const BASE_URL: &str = "https://trends.google.com";

/// The endpoints behind the public operations.
///
/// `RelatedQueries` is listed for completeness; the related-queries
/// operation is synthesized client-side and never calls it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Endpoint {
    DailyTrends,
    Autocomplete,
    Explore,
    InterestByRegion,
    RelatedTopics,
    RelatedQueries,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Self::DailyTrends => "/_/TrendsUi/data/batchexecute",
            Self::Autocomplete => "/trends/api/autocomplete",
            Self::Explore => "/trends/api/explore",
            Self::InterestByRegion => "/trends/api/widgetdata/comparedgeo",
            Self::RelatedTopics => "/trends/api/widgetdata/relatedtopics",
            Self::RelatedQueries => "/trends/api/widgetdata/relatedqueries",
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Self::DailyTrends => Method::POST,
            _ => Method::GET,
        }
    }

    pub fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        match self {
            Self::DailyTrends => {
                headers.insert(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/x-www-form-urlencoded;charset=UTF-8"),
                );
            }
            Self::Autocomplete => {
                headers.insert(
                    header::ACCEPT,
                    HeaderValue::from_static("application/json, text/plain, */*"),
                );
            }
            _ => {}
        }
        headers
    }
}
