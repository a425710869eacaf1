use bon::Builder;
use serde_json::Value;

use crate::{
    client::GoogleTrends,
    endpoints::Endpoint,
    error::TrendsError,
    http::TrendsRequest,
    parse::strip_envelope,
};

#[derive(Debug, Builder)]
pub struct AutocompleteQuery {
    #[builder(into)]
    pub(crate) keyword: String,
    #[builder(into, default = String::from("en-US"))]
    pub(crate) hl: String,
}

impl GoogleTrends {
    /// Suggestion titles for a keyword.
    ///
    /// An empty keyword short-circuits to an empty list without touching the
    /// network.
    pub async fn autocomplete(
        &self,
        query: AutocompleteQuery,
    ) -> Result<Vec<String>, TrendsError> {
        if query.keyword.is_empty() {
            return Ok(Vec::new());
        }

        let request = TrendsRequest::new(self.base_url(), Endpoint::Autocomplete)
            .path_segment(&urlencoding::encode(&query.keyword))
            .query_param("hl", &query.hl)
            .query_param("tz", "240");

        let response = self.send(request).await?;
        let data: Value = serde_json::from_str(strip_envelope(response.text()))?;

        let titles = data
            .pointer("/default/topics")
            .and_then(Value::as_array)
            .map(|topics| {
                topics
                    .iter()
                    .filter_map(|topic| topic.get("title").and_then(Value::as_str))
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default();

        Ok(titles)
    }
}
