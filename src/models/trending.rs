use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingArticle {
    pub title: String,
    pub url: String,
    pub source: String,
    pub time: String,
    pub snippet: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingImage {
    pub news_url: String,
    pub source: String,
    pub image_url: String,
}

/// One trending story as decoded from the batchexecute payload.
///
/// `traffic` is kept as the formatted string Google sends (`"200K+"` and the
/// like), not a number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingStory {
    pub title: String,
    pub traffic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<TrendingImage>,
    pub articles: Vec<TrendingArticle>,
    pub share_url: String,
}

/// Reduced projection of a [`TrendingStory`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingTopic {
    pub title: String,
    pub traffic: String,
    pub articles: Vec<TrendingArticle>,
}

impl From<&TrendingStory> for TrendingTopic {
    fn from(story: &TrendingStory) -> Self {
        Self {
            title: story.title.clone(),
            traffic: story.traffic.clone(),
            articles: story.articles.clone(),
        }
    }
}

/// The result of the daily/real-time trends family.
///
/// `all_trending_stories` and `summary` are built in one parse pass and stay
/// index-aligned: `summary[i]` is the projection of `all_trending_stories[i]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTrendingTopics {
    pub all_trending_stories: Vec<TrendingStory>,
    pub summary: Vec<TrendingTopic>,
}

impl DailyTrendingTopics {
    pub fn len(&self) -> usize {
        self.all_trending_stories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_trending_stories.is_empty()
    }
}
