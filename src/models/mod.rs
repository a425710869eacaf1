pub mod region;
pub mod related;
pub mod trending;

pub use region::{Coordinates, InterestByRegionData};
pub use related::{
    RankedKeywordLists, RankedKeywords, RankedListContainer, RelatedData, RelatedQueriesData,
    RelatedQuery, RelatedTopic, RelatedTopicsData, TopicDescriptor,
};
pub use trending::{
    DailyTrendingTopics, TrendingArticle, TrendingImage, TrendingStory, TrendingTopic,
};
