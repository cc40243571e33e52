use std::time::Duration;

use thiserror::Error;

/// Possible errors when interacting with the TruckersMP API.
///
/// This is a deliberately closed set: every failure a call can produce
/// maps to exactly one of these kinds, so callers can branch on the kind
/// (retry on [`Connect`](ErrorKind::Connect), give up on
/// [`NotFound`](ErrorKind::NotFound), and so on) instead of inspecting
/// transport-specific status codes.
#[derive(Error, Debug)]
pub enum ErrorKind {
    /// Network failure or timeout while reaching the API.
    ///
    /// Transient; retrying later is reasonable.
    #[error("network error while connecting to the API")]
    Connect(#[source] Option<reqwest::Error>),

    /// The requested resource does not exist. Not retryable.
    #[error("resource not found: {0}")]
    NotFound(String),

    /// The API reported throttling despite pre-emptive rate limiting.
    ///
    /// The local budget was already reconciled against the server's
    /// headers when this surfaced; back off for longer than the
    /// limiter's own window before retrying.
    #[error("the API reported a rate limit")]
    RateLimit {
        /// Server-advised wait before the next attempt, when provided.
        retry_after: Option<Duration>,
    },

    /// The API failed on its side (HTTP 5xx). Transient; backoff is the
    /// caller's responsibility.
    #[error("the API returned a server error: {0}")]
    Server(http::StatusCode),

    /// The response body did not have the expected structure. Indicates
    /// an API contract change; not retryable without a library update.
    #[error("unexpected response format: {0}")]
    Format(String),

    /// A low-level dispatch via [`TruckersMP::execute`] failed. The
    /// underlying kind is preserved as the source.
    ///
    /// [`TruckersMP::execute`]: crate::TruckersMP::execute
    #[error("low-level dispatch failed")]
    Execute(#[source] Box<ErrorKind>),

    /// The client configuration is invalid. Raised at construction time,
    /// never during a call.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for ErrorKind {
    fn from(e: serde_json::Error) -> Self {
        Self::Format(e.to_string())
    }
}

impl ErrorKind {
    /// Whether retrying the same call later could succeed.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Connect(_) | Self::RateLimit { .. } | Self::Server(_) => true,
            Self::Execute(source) => source.is_transient(),
            Self::NotFound(_) | Self::Format(_) | Self::InvalidConfig(_) => false,
        }
    }
}
