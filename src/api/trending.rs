use bon::Builder;
use serde_json::json;
use serde_repr::{Deserialize_repr, Serialize_repr};
use tracing::debug;

use crate::{
    client::GoogleTrends,
    endpoints::Endpoint,
    error::TrendsError,
    http::{RequestBody, TrendsRequest},
    models::DailyTrendingTopics,
    parse::parse_trending_response,
};

/// Window sizes the real-time trends endpoint accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u16)]
pub enum TrendingHours {
    #[default]
    FourHours = 4,
    OneDay = 24,
    TwoDays = 48,
    SevenDays = 168,
}

#[derive(Debug, Builder)]
pub struct DailyTrendsQuery {
    #[builder(into, default = String::from("US"))]
    pub(crate) geo: String,
    #[builder(into, default = String::from("en"))]
    pub(crate) lang: String,
}

#[derive(Debug, Builder)]
pub struct RealtimeTrendsQuery {
    #[builder(into, default = String::from("US"))]
    pub(crate) geo: String,
    #[builder(default)]
    pub(crate) trending_hours: TrendingHours,
}

/// Body for the batchexecute RPC: the argument list is itself JSON-encoded
/// into a string inside the outer envelope.
fn batch_payload(geo: &str, lang: &str, hours: u16) -> String {
    let args = json!([null, null, geo, 0, lang, hours, 1]).to_string();
    json!([[["i0OFE", args, null, "generic"]]]).to_string()
}

impl GoogleTrends {
    /// Daily trending topics for a region. Always queries a 24-hour window.
    pub async fn daily_trends(
        &self,
        query: DailyTrendsQuery,
    ) -> Result<DailyTrendingTopics, TrendsError> {
        self.fetch_trending(batch_payload(&query.geo, &query.lang, 24))
            .await
    }

    /// Real-time trending topics. The window is one of the fixed
    /// [`TrendingHours`] sizes; the endpoint only serves this family in
    /// English.
    pub async fn realtime_trends(
        &self,
        query: RealtimeTrendsQuery,
    ) -> Result<DailyTrendingTopics, TrendsError> {
        self.fetch_trending(batch_payload(&query.geo, "en", query.trending_hours as u16))
            .await
    }

    async fn fetch_trending(&self, payload: String) -> Result<DailyTrendingTopics, TrendsError> {
        let request = TrendsRequest::new(self.base_url(), Endpoint::DailyTrends)
            .body(RequestBody::Form(vec![("f.req", payload)]));

        let response = self.send(request).await?;
        let topics = parse_trending_response(response.text())?;
        debug!(stories = topics.len(), "decoded trending response");
        Ok(topics)
    }
}
