//! The HTTP exchange capability consumed by the dispatcher.
//!
//! The dispatcher treats the transport as an opaque capability: any
//! conforming implementation is acceptable, whether the production
//! [`HttpTransport`] over `reqwest` or a scripted test double.

use async_trait::async_trait;
use http::{HeaderMap, StatusCode};
use url::Url;

use crate::types::{ErrorKind, Result};

/// Outcome of a single HTTP exchange, reduced to what error
/// classification needs. `reqwest::Response` itself cannot be cloned or
/// constructed by test doubles, hence this intermediate form.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status of the exchange.
    pub status: StatusCode,
    /// Response headers, including any rate-limit metadata.
    pub headers: HeaderMap,
    /// Raw response body.
    pub body: String,
}

/// Performs the actual HTTP exchange for the dispatcher.
#[async_trait]
pub trait Transport: std::fmt::Debug + Send + Sync {
    /// Perform one GET exchange against the API.
    ///
    /// # Errors
    ///
    /// Implementations return [`ErrorKind::Connect`] for failures below
    /// the HTTP layer (DNS, refused connections, interrupted bodies).
    /// A response with a non-success status is not an error at this
    /// level; classification happens in the dispatcher.
    async fn send(&self, path: &str, query: &[(String, String)]) -> Result<TransportResponse>;
}

/// Production transport over a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    /// Wrap a configured `reqwest` client rooted at `base_url`.
    #[must_use]
    pub fn new(client: reqwest::Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    fn endpoint_url(&self, path: &str) -> Result<Url> {
        // The base URL keeps its trailing slash so joining never
        // discards its final path segment.
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| {
                ErrorKind::InvalidConfig(format!("cannot build URL for endpoint `{path}`: {e}"))
            })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, path: &str, query: &[(String, String)]) -> Result<TransportResponse> {
        let url = self.endpoint_url(path)?;
        let mut request = self.client.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ErrorKind::Connect(Some(e)))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .text()
            .await
            .map_err(|e| ErrorKind::Connect(Some(e)))?;

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}
