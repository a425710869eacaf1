use reqwest::StatusCode;
use thiserror::Error;

/// The five-way error taxonomy exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidRequest,
    Network,
    Parse,
    RateLimit,
    Unknown,
}

#[derive(Debug, Error)]
pub enum TrendsError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Response parsing failed: {0}")]
    Parse(#[from] ParseError),

    #[error("Rate limited: still HTTP {status} after {attempts} attempts")]
    RateLimited { status: StatusCode, attempts: u32 },

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl TrendsError {
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self::InvalidRequest(reason.into())
    }

    pub fn unknown(reason: impl Into<String>) -> Self {
        Self::Unknown(reason.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidRequest(_) => ErrorKind::InvalidRequest,
            Self::Network(_) => ErrorKind::Network,
            Self::Parse(_) => ErrorKind::Parse,
            Self::RateLimited { .. } => ErrorKind::RateLimit,
            Self::Unknown(_) => ErrorKind::Unknown,
        }
    }

    /// The HTTP status code associated with this error, when one is known.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Network(err) => err.status(),
            Self::RateLimited { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for TrendsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(ParseError::Json(err))
    }
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected response structure: {0}")]
    UnexpectedStructure(String),

    #[error("Response is an HTML document, not JSON")]
    HtmlResponse,

    #[error("No {0} widget in explore response")]
    MissingWidget(&'static str),
}

impl ParseError {
    pub fn unexpected_structure(description: impl Into<String>) -> Self {
        Self::UnexpectedStructure(description.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_match_variants() {
        assert_eq!(
            TrendsError::invalid_request("keyword is required").kind(),
            ErrorKind::InvalidRequest
        );
        assert_eq!(
            TrendsError::from(ParseError::HtmlResponse).kind(),
            ErrorKind::Parse
        );
        let rate_limited = TrendsError::RateLimited {
            status: StatusCode::TOO_MANY_REQUESTS,
            attempts: 4,
        };
        assert_eq!(rate_limited.kind(), ErrorKind::RateLimit);
        assert_eq!(rate_limited.status(), Some(StatusCode::TOO_MANY_REQUESTS));
    }
}
