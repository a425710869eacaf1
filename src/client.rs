use std::time::Duration;

use bon::Builder;

use crate::{endpoints, session::Session};

fn default_http_client() -> reqwest::Client {
    reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(30))
        .build()
        .expect("Failed to build HTTP client")
}

/// Client for the unofficial Google Trends web API.
///
/// Clones share the underlying connection pool and session cookie;
/// independent instances get independent sessions.
///
/// ```no_run
/// use gtrends::prelude::*;
///
/// # async fn run() -> Result<(), gtrends::error::TrendsError> {
/// let client = GoogleTrends::new();
/// let trends = client.daily_trends(DailyTrendsQuery::builder().geo("GB").build()).await?;
/// println!("{} stories", trends.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Builder)]
pub struct GoogleTrends {
    #[builder(into, default = String::from(endpoints::BASE_URL))]
    base_url: String,
    /// Ceiling on transparent 429 retries before giving up with
    /// `TrendsError::RateLimited`.
    #[builder(default = 3)]
    max_rate_limit_retries: u32,
    #[builder(skip = default_http_client())]
    http_client: reqwest::Client,
    #[builder(skip = Session::new())]
    session: Session,
}

impl GoogleTrends {
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Clear the stored session cookie.
    pub fn reset_session(&self) {
        self.session.clear();
    }

    pub(crate) fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }

    pub(crate) fn max_rate_limit_retries(&self) -> u32 {
        self.max_rate_limit_retries
    }
}

impl Default for GoogleTrends {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GoogleTrends {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleTrends")
            .field("base_url", &self.base_url)
            .field("max_rate_limit_retries", &self.max_rate_limit_retries)
            .finish_non_exhaustive()
    }
}
