pub mod api;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod parse;
pub mod session;

mod http;

pub mod prelude {
    pub use crate::api::{
        AutocompleteQuery, DailyTrendsQuery, ExploreQuery, InterestByRegionQuery,
        RealtimeTrendsQuery, RelatedSearchQuery, Resolution, TrendingHours,
    };
    pub use crate::client::GoogleTrends;
    pub use crate::error::{ErrorKind, TrendsError};
    pub use crate::models::*;
}
