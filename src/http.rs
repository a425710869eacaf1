use std::time::Duration;

use reqwest::{
    header::{self, HeaderMap},
    Method, StatusCode,
};
use tracing::{debug, warn};

use crate::{client::GoogleTrends, endpoints::Endpoint, error::TrendsError};

pub(crate) enum RequestBody {
    /// Passed through untouched; content type comes from the endpoint headers.
    Raw(String),
    /// URL-encoded `key=value&...` pairs.
    Form(Vec<(&'static str, String)>),
    Json(serde_json::Value),
}

pub(crate) struct TrendsRequest {
    url: String,
    method: Method,
    headers: HeaderMap,
    query: Vec<(&'static str, String)>,
    body: Option<RequestBody>,
}

impl TrendsRequest {
    pub fn new(base_url: &str, endpoint: Endpoint) -> Self {
        Self {
            url: format!("{base_url}{}", endpoint.path()),
            method: endpoint.method(),
            headers: endpoint.headers(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Append an already-encoded segment to the request path.
    pub fn path_segment(mut self, segment: &str) -> Self {
        self.url.push('/');
        self.url.push_str(segment);
        self
    }

    pub fn query_param(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.query.push((key, value.into()));
        self
    }

    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }
}

pub(crate) struct RawResponse {
    status: StatusCode,
    body: String,
}

impl RawResponse {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn text(&self) -> &str {
        &self.body
    }
}

impl GoogleTrends {
    /// Execute one request, transparently handling the 429
    /// cookie-acquire-and-retry protocol.
    ///
    /// A 429 carrying `Set-Cookie` stores the cookie in the session and
    /// re-issues the identical request after a short delay; the loop is
    /// bounded by `max_rate_limit_retries` and exhausting it yields
    /// [`TrendsError::RateLimited`]. A 429 without `Set-Cookie` is handed
    /// back to the caller unchanged, as are all other statuses.
    pub(crate) async fn send(&self, request: TrendsRequest) -> Result<RawResponse, TrendsError> {
        let mut attempts: u32 = 0;
        loop {
            let response = self.issue(&request).await?;
            attempts += 1;

            if response.status() != StatusCode::TOO_MANY_REQUESTS {
                return collect(response).await;
            }

            let Some(cookie) = first_set_cookie(response.headers()) else {
                debug!("got 429 without Set-Cookie, returning response as-is");
                return collect(response).await;
            };

            self.session().set_cookie(cookie);

            if attempts > self.max_rate_limit_retries() {
                warn!(attempts, "rate-limit retries exhausted");
                return Err(TrendsError::RateLimited {
                    status: response.status(),
                    attempts,
                });
            }

            let delay = backoff_delay(attempts);
            debug!(attempt = attempts, ?delay, "rate limited, retrying with fresh cookie");
            tokio::time::sleep(delay).await;
        }
    }

    async fn issue(&self, request: &TrendsRequest) -> Result<reqwest::Response, TrendsError> {
        let mut builder = self
            .http_client()
            .request(request.method.clone(), &request.url)
            .headers(request.headers.clone());

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        if let Some(cookie) = self.session().cookie() {
            builder = builder.header(header::COOKIE, cookie);
        }

        match &request.body {
            None => {}
            Some(RequestBody::Raw(text)) => {
                builder = builder.body(text.clone());
            }
            Some(RequestBody::Form(pairs)) => {
                let encoded = serde_urlencoded::to_string(pairs)
                    .map_err(|err| TrendsError::unknown(format!("form encoding: {err}")))?;
                if !request.headers.contains_key(header::CONTENT_TYPE) {
                    builder = builder.header(
                        header::CONTENT_TYPE,
                        mime::APPLICATION_WWW_FORM_URLENCODED.to_string(),
                    );
                }
                builder = builder.body(encoded);
            }
            Some(RequestBody::Json(value)) => {
                builder = builder.json(value);
            }
        }

        Ok(builder.send().await?)
    }
}

async fn collect(response: reqwest::Response) -> Result<RawResponse, TrendsError> {
    let status = response.status();
    let body = response.text().await?;
    Ok(RawResponse { status, body })
}

/// First `Set-Cookie` value, truncated at the attribute separator.
fn first_set_cookie(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(header::SET_COOKIE)?.to_str().ok()?;
    let value = raw.split(';').next()?.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn backoff_delay(attempt: u32) -> Duration {
    Duration::from_millis(250u64.saturating_mul(1u64 << attempt.min(4)))
}
