use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    client::GoogleTrends,
    endpoints::Endpoint,
    error::{ParseError, TrendsError},
    http::TrendsRequest,
    parse::strip_envelope,
};

/// A sub-result block from the explore endpoint. Each widget carries the
/// short-lived token authorizing its follow-up data endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub request: Value,
}

impl Widget {
    /// Whether this widget's embedded keyword restriction targets `keyword`.
    pub(crate) fn restricts_keyword(&self, keyword: &str) -> bool {
        self.request
            .pointer("/restriction/complexKeywordsRestriction/keyword/0/value")
            .and_then(Value::as_str)
            == Some(keyword)
    }
}

#[derive(Debug, Builder)]
pub struct ExploreQuery {
    #[builder(into, default)]
    pub(crate) keyword: String,
    #[builder(into, default = String::from("US"))]
    pub(crate) geo: String,
    #[builder(into, default = String::from("now 1-d"))]
    pub(crate) time: String,
    #[builder(default)]
    pub(crate) category: u32,
    #[builder(into, default)]
    pub(crate) property: String,
    #[builder(into, default = String::from("en-US"))]
    pub(crate) hl: String,
}

impl GoogleTrends {
    /// Widget list for a keyword; the token-bearing step behind
    /// `interest_by_region` and `related_topics`.
    pub async fn explore(&self, query: ExploreQuery) -> Result<Vec<Widget>, TrendsError> {
        let req = json!({
            "comparisonItem": [{
                "keyword": query.keyword,
                "geo": query.geo,
                "time": query.time,
            }],
            "category": query.category,
            "property": query.property,
        });

        let request = TrendsRequest::new(self.base_url(), Endpoint::Explore)
            .query_param("hl", &query.hl)
            .query_param("tz", "240")
            .query_param("req", req.to_string());

        let response = self.send(request).await?;
        let text = response.text();

        // Blocked or malformed requests come back as an HTML error page.
        if text.contains("<html") || text.contains("<!DOCTYPE") {
            return Err(ParseError::HtmlResponse.into());
        }

        let data: Value = serde_json::from_str(strip_envelope(text))?;
        let widgets = match data.as_array().and_then(|elements| elements.first()) {
            Some(payload @ Value::Array(_)) => {
                serde_json::from_value(payload.clone()).map_err(ParseError::Json)?
            }
            _ => Vec::new(),
        };

        Ok(widgets)
    }
}
