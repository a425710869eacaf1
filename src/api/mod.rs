pub mod autocomplete;
pub mod explore;
pub mod region;
pub mod related;
pub mod trending;

pub use autocomplete::AutocompleteQuery;
pub use explore::{ExploreQuery, Widget};
pub use region::{InterestByRegionQuery, Resolution};
pub use related::RelatedSearchQuery;
pub use trending::{DailyTrendsQuery, RealtimeTrendsQuery, TrendingHours};
