use bon::Builder;
use serde_json::{json, Value};
use tracing::{debug, instrument};

use crate::{
    api::{
        autocomplete::AutocompleteQuery,
        explore::{ExploreQuery, Widget},
    },
    client::GoogleTrends,
    endpoints::Endpoint,
    error::{ParseError, TrendsError},
    http::TrendsRequest,
    models::{
        RankedKeywordLists, RankedKeywords, RankedListContainer, RelatedData, RelatedQueriesData,
        RelatedQuery, RelatedTopic, RelatedTopicsData, TopicDescriptor,
    },
    parse::strip_envelope,
};

const RELATED_TOPICS_WIDGET: &str = "RELATED_TOPICS";

/// At most this many autocomplete suggestions feed the synthesized
/// related-queries ranking.
const MAX_SYNTHESIZED_SUGGESTIONS: usize = 10;

#[derive(Debug, Clone, Builder)]
pub struct RelatedSearchQuery {
    #[builder(into)]
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

fn ensure_keyword(keyword: &str) -> Result<(), TrendsError> {
    if keyword.trim().is_empty() {
        return Err(TrendsError::invalid_request("keyword is required"));
    }
    Ok(())
}

/// Descending score for the synthesized ranking: 100, 90, ... down the
/// suggestion list.
fn ranked_value(index: usize) -> i64 {
    100 - 10 * index as i64
}

fn explore_link(suggestion: &str, time: &str, geo: &str) -> String {
    format!(
        "/trends/explore?q={}&date={}&geo={}",
        urlencoding::encode(suggestion),
        time,
        geo
    )
}

/// Prefer the widget advertised as RELATED_TOPICS, then one whose keyword
/// restriction matches the query, then the first.
fn select_related_widget<'a>(widgets: &'a [Widget], keyword: &str) -> Option<&'a Widget> {
    widgets
        .iter()
        .find(|widget| widget.id == RELATED_TOPICS_WIDGET || widget.restricts_keyword(keyword))
        .or_else(|| widgets.first())
}

impl GoogleTrends {
    /// Related topics for a keyword, via the explore token chain.
    #[instrument(skip(self, query), fields(keyword = %query.keyword))]
    pub async fn related_topics(
        &self,
        query: RelatedSearchQuery,
    ) -> Result<RelatedTopicsData, TrendsError> {
        ensure_keyword(&query.keyword)?;

        let widgets = self
            .explore(
                ExploreQuery::builder()
                    .keyword(query.keyword.clone())
                    .geo(query.geo.clone())
                    .time(query.time.clone())
                    .category(query.category)
                    .property(query.property.clone())
                    .hl(query.hl.clone())
                    .build(),
            )
            .await?;

        let widget = select_related_widget(&widgets, &query.keyword).ok_or_else(|| {
            ParseError::unexpected_structure("no widgets in explore response")
        })?;
        debug!(widget_id = %widget.id, "selected related-topics widget");

        let language = query.hl.split('-').next().unwrap_or(&query.hl);
        let req = json!({
            "restriction": {
                "geo": {"country": query.geo},
                "time": query.time,
                "originalTimeRangeForExploreUrl": query.time,
                "complexKeywordsRestriction": {
                    "keyword": [{"type": "BROAD", "value": query.keyword}],
                },
            },
            "keywordType": "ENTITY",
            "metric": ["TOP", "RISING"],
            "trendinessSettings": {"compareTime": query.time},
            "requestOptions": {
                "property": query.property,
                "backend": "CM",
                "category": query.category,
            },
            "language": language,
            "userCountryCode": query.geo,
            "userConfig": {"userType": "USER_TYPE_LEGIT_USER"},
        });

        let mut request = TrendsRequest::new(self.base_url(), Endpoint::RelatedTopics)
            .query_param("hl", &query.hl)
            .query_param("tz", "240")
            .query_param("req", req.to_string());
        if let Some(token) = &widget.token {
            request = request.query_param("token", token);
        }

        let response = self.send(request).await?;
        let data: Value = serde_json::from_str(strip_envelope(response.text()))?;
        let ranked_list = data
            .pointer("/default/rankedList")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        Ok(RelatedTopicsData {
            default: RankedListContainer { ranked_list },
        })
    }

    /// Related queries, synthesized client-side from autocomplete
    /// suggestions (there is no live endpoint for this operation).
    pub async fn related_queries(
        &self,
        query: RelatedSearchQuery,
    ) -> Result<RelatedQueriesData, TrendsError> {
        ensure_keyword(&query.keyword)?;
        let suggestions = self.suggestions_for(&query).await?;

        let ranked_keyword = suggestions
            .iter()
            .enumerate()
            .map(|(index, suggestion)| synthesize_query(index, suggestion, &query))
            .collect();

        Ok(RelatedQueriesData {
            default: RankedKeywordLists {
                ranked_list: vec![RankedKeywords { ranked_keyword }],
            },
        })
    }

    /// Combined related topics and queries, both synthesized from the same
    /// suggestion list in the same order.
    pub async fn related_data(
        &self,
        query: RelatedSearchQuery,
    ) -> Result<RelatedData, TrendsError> {
        ensure_keyword(&query.keyword)?;
        let suggestions = self.suggestions_for(&query).await?;

        let mut topics = Vec::with_capacity(suggestions.len());
        let mut queries = Vec::with_capacity(suggestions.len());

        for (index, suggestion) in suggestions.iter().enumerate() {
            topics.push(RelatedTopic {
                topic: TopicDescriptor {
                    mid: format!("/m/{index}"),
                    title: suggestion.clone(),
                    kind: "Topic".to_string(),
                },
                value: ranked_value(index),
                formatted_value: ranked_value(index).to_string(),
                has_data: true,
                link: explore_link(suggestion, &query.time, &query.geo),
            });
            queries.push(synthesize_query(index, suggestion, &query));
        }

        Ok(RelatedData { topics, queries })
    }

    async fn suggestions_for(
        &self,
        query: &RelatedSearchQuery,
    ) -> Result<Vec<String>, TrendsError> {
        let mut suggestions = self
            .autocomplete(
                AutocompleteQuery::builder()
                    .keyword(query.keyword.clone())
                    .hl(query.hl.clone())
                    .build(),
            )
            .await?;
        suggestions.truncate(MAX_SYNTHESIZED_SUGGESTIONS);
        Ok(suggestions)
    }
}

fn synthesize_query(index: usize, suggestion: &str, query: &RelatedSearchQuery) -> RelatedQuery {
    RelatedQuery {
        query: suggestion.to_string(),
        value: ranked_value(index),
        formatted_value: ranked_value(index).to_string(),
        has_data: true,
        link: explore_link(suggestion, &query.time, &query.geo),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn widget(id: &str, token: Option<&str>) -> Widget {
        Widget {
            id: id.to_string(),
            token: token.map(str::to_string),
            request: Value::Null,
        }
    }

    #[test]
    fn prefers_the_related_topics_widget_over_the_first() {
        let widgets = vec![
            widget("TIMESERIES", None),
            widget(RELATED_TOPICS_WIDGET, Some("T1")),
        ];
        let selected = select_related_widget(&widgets, "bitcoin").unwrap();
        assert_eq!(selected.token.as_deref(), Some("T1"));
    }

    #[test]
    fn falls_back_to_keyword_restriction_then_first() {
        let mut restricted = widget("TIMESERIES", Some("T2"));
        restricted.request = serde_json::json!({
            "restriction": {
                "complexKeywordsRestriction": {
                    "keyword": [{"type": "BROAD", "value": "bitcoin"}]
                }
            }
        });
        let widgets = vec![widget("GEO_MAP", Some("T0")), restricted];
        let selected = select_related_widget(&widgets, "bitcoin").unwrap();
        assert_eq!(selected.token.as_deref(), Some("T2"));

        let selected = select_related_widget(&widgets, "ethereum").unwrap();
        assert_eq!(selected.token.as_deref(), Some("T0"));

        assert!(select_related_widget(&[], "bitcoin").is_none());
    }

    #[test]
    fn ranked_values_descend_by_ten() {
        assert_eq!(ranked_value(0), 100);
        assert_eq!(ranked_value(9), 10);
    }

    #[test]
    fn explore_link_encodes_the_suggestion() {
        assert_eq!(
            explore_link("bitcoin price", "now 1-d", "US"),
            "/trends/explore?q=bitcoin%20price&date=now 1-d&geo=US"
        );
    }
}
