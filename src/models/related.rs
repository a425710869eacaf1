use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Entity descriptor attached to a related topic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicDescriptor {
    pub mid: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedTopic {
    pub topic: TopicDescriptor,
    pub value: i64,
    pub formatted_value: String,
    pub has_data: bool,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedQuery {
    pub query: String,
    pub value: i64,
    pub formatted_value: String,
    pub has_data: bool,
    pub link: String,
}

/// `{default: {rankedList}}` as returned by the live related-topics widget
/// endpoint. The ranked-list entries keep the service's shape untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedTopicsData {
    pub default: RankedListContainer,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedListContainer {
    #[serde(default)]
    pub ranked_list: Vec<Value>,
}

/// Ranked list synthesized from autocomplete suggestions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedQueriesData {
    pub default: RankedKeywordLists,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedKeywordLists {
    pub ranked_list: Vec<RankedKeywords>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedKeywords {
    pub ranked_keyword: Vec<RelatedQuery>,
}

/// Combined topics + queries synthesis, both lists built from the same
/// autocomplete suggestions in the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedData {
    pub topics: Vec<RelatedTopic>,
    pub queries: Vec<RelatedQuery>,
}
