use bon::Builder;
use chrono::{Local, NaiveDate, NaiveDateTime, Offset, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::instrument;

use crate::{
    api::explore::ExploreQuery,
    client::GoogleTrends,
    endpoints::Endpoint,
    error::{ParseError, TrendsError},
    http::TrendsRequest,
    parse::strip_envelope,
};

const GEO_MAP_WIDGET: &str = "GEO_MAP";

/// Geographic granularity of the comparedgeo breakdown.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Resolution {
    #[default]
    Region,
    Country,
    City,
    Dma,
}

fn default_start_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2004, 1, 1)
        .expect("valid date")
        .and_hms_opt(0, 0, 0)
        .expect("valid time")
}

fn local_offset_minutes() -> i32 {
    Local::now().offset().fix().local_minus_utc() / 60
}

#[derive(Debug, Builder)]
pub struct InterestByRegionQuery {
    #[builder(into)]
    pub(crate) keyword: String,
    #[builder(default = default_start_time())]
    pub(crate) start_time: NaiveDateTime,
    #[builder(default = Utc::now().naive_utc())]
    pub(crate) end_time: NaiveDateTime,
    #[builder(into, default = String::from("US"))]
    pub(crate) geo: String,
    #[builder(default)]
    pub(crate) resolution: Resolution,
    #[builder(into, default = String::from("en-US"))]
    pub(crate) hl: String,
    /// UTC offset in minutes, forwarded as the `tz` parameter.
    #[builder(default = local_offset_minutes())]
    pub(crate) timezone: i32,
    #[builder(default)]
    pub(crate) category: u32,
}

/// "day before <date> .. <date>" window, the shape the explore endpoint
/// expects for each end of the interest range.
fn day_range(date: NaiveDateTime) -> String {
    let day_before = date - chrono::Duration::days(1);
    format!(
        "{} {}",
        day_before.format("%Y-%m-%dT%H:%M:%S"),
        date.format("%Y-%m-%dT%H:%M:%S")
    )
}

impl GoogleTrends {
    /// Interest-by-region breakdown for a keyword.
    ///
    /// Chains through explore to obtain the `GEO_MAP` widget token, then
    /// fetches the comparedgeo data. Returns the decoded response as-is;
    /// [`crate::models::InterestByRegionData::from_response`] offers a typed
    /// view.
    #[instrument(skip(self, query), fields(keyword = %query.keyword, geo = %query.geo))]
    pub async fn interest_by_region(
        &self,
        query: InterestByRegionQuery,
    ) -> Result<Value, TrendsError> {
        let explore_time = format!(
            "{} {}",
            day_range(query.start_time),
            day_range(query.end_time)
        );

        let widgets = self
            .explore(
                ExploreQuery::builder()
                    .keyword(query.keyword.clone())
                    .geo(query.geo.clone())
                    .time(explore_time)
                    .category(query.category)
                    .hl(query.hl.clone())
                    .build(),
            )
            .await?;

        let widget = widgets
            .iter()
            .find(|widget| widget.id == GEO_MAP_WIDGET)
            .ok_or(ParseError::MissingWidget(GEO_MAP_WIDGET))?;

        let req = json!({
            "geo": {"country": query.geo},
            "comparisonItem": [{
                "time": format!(
                    "{} {}",
                    query.start_time.format("%Y-%m-%d"),
                    query.end_time.format("%Y-%m-%d")
                ),
                "complexKeywordsRestriction": {
                    "keyword": [{"type": "BROAD", "value": query.keyword}],
                },
            }],
            "resolution": query.resolution.to_string(),
            "locale": query.hl,
            "requestOptions": {
                "property": "",
                "backend": "CM",
                "category": query.category,
            },
            "userConfig": {"userType": "USER_TYPE_LEGIT_USER"},
        });

        let request = TrendsRequest::new(self.base_url(), Endpoint::InterestByRegion)
            .query_param("hl", &query.hl)
            .query_param("tz", query.timezone.to_string())
            .query_param("req", req.to_string())
            .query_param("token", widget.token.clone().unwrap_or_default());

        let response = self.send(request).await?;
        Ok(serde_json::from_str(strip_envelope(response.text()))?)
    }
}
