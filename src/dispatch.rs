//! The single choke point every API call passes through.
//!
//! The dispatcher composes the response cache, the rate limiter, the
//! transport and error classification for one logical call: cache
//! lookup, pre-emptive `acquire()`, the HTTP exchange, classification
//! of the outcome into success or a typed error, and a cache store on
//! success. It never retries: the limiter's pre-emptive delay is the
//! sole defense against 429s, and a 429 that slips through surfaces as
//! [`ErrorKind::RateLimit`] so a limiter miscalibration is visible
//! rather than masked.

use std::sync::Arc;
use std::time::Duration;

use http::StatusCode;
use serde_json::Value;

use crate::cache::ResponseCache;
use crate::ratelimit::{self, RateLimiter};
use crate::transport::{Transport, TransportResponse};
use crate::types::{ApiResponse, ErrorKind, RequestDescriptor, Result};

/// Construction-time options for a [`Dispatcher`], validated eagerly.
#[derive(Debug, Clone)]
pub(crate) struct DispatchConfig {
    /// Calls allowed per rate-limit window. Must be greater than zero.
    pub(crate) rate_limit: u32,
    /// Length of the rate-limit window.
    pub(crate) rate_limit_window: Duration,
    /// Freshness window for cached responses unless a descriptor
    /// overrides it.
    pub(crate) default_ttl: Duration,
    /// When `false`, the response cache is a permanent-miss no-op.
    pub(crate) cache_enabled: bool,
    /// Bounds wait-for-slot plus transfer time per call.
    pub(crate) timeout: Option<Duration>,
}

/// Orchestrates limiter, cache, transport and error mapping for a
/// single logical call. Owns exactly one rate limiter and one response
/// cache, created at construction; independent dispatchers never share
/// budget.
#[derive(Debug)]
pub(crate) struct Dispatcher {
    transport: Arc<dyn Transport>,
    limiter: RateLimiter,
    cache: ResponseCache,
    default_ttl: Duration,
    timeout: Option<Duration>,
}

impl Dispatcher {
    pub(crate) fn new(transport: Arc<dyn Transport>, config: DispatchConfig) -> Result<Self> {
        Ok(Self {
            transport,
            limiter: RateLimiter::new(config.rate_limit, config.rate_limit_window)?,
            cache: ResponseCache::new(config.cache_enabled),
            default_ttl: config.default_ttl,
            timeout: config.timeout,
        })
    }

    /// Execute one logical call.
    ///
    /// A cache hit returns immediately and consumes no rate budget. On
    /// a miss the call waits for a rate-limit slot, performs the
    /// exchange, and stores the classified payload under the
    /// descriptor's TTL. Errors are never cached.
    ///
    /// # Errors
    ///
    /// Returns exactly one of the semantic error kinds; see
    /// [`ErrorKind`].
    pub(crate) async fn execute(&self, descriptor: &RequestDescriptor) -> Result<ApiResponse> {
        let key = descriptor.cacheable.then(|| descriptor.cache_key());

        if let Some(key) = &key {
            if let Some(payload) = self.cache.lookup(key) {
                log::debug!("cache hit for {}", descriptor.path);
                return Ok(ApiResponse::cached(payload));
            }
        }

        let exchange = async {
            self.limiter.acquire().await;
            self.transport.send(&descriptor.path, &descriptor.query).await
        };
        let response = match self.timeout {
            // A timeout bounds the whole of wait-for-slot plus transfer
            // and surfaces as Connect, not a kind of its own.
            Some(limit) => tokio::time::timeout(limit, exchange)
                .await
                .map_err(|_| ErrorKind::Connect(None))??,
            None => exchange.await?,
        };

        let payload = self.classify(descriptor, response)?;

        if let Some(key) = key {
            let ttl = descriptor.ttl_override.unwrap_or(self.default_ttl);
            self.cache.store(key, payload.clone(), ttl);
        }
        Ok(ApiResponse::fetched(payload))
    }

    /// Collapse a transport outcome into a payload or a typed error.
    /// Rules are checked in order; the first match wins.
    fn classify(
        &self,
        descriptor: &RequestDescriptor,
        response: TransportResponse,
    ) -> Result<Value> {
        let status = response.status;

        if status == StatusCode::NOT_FOUND {
            return Err(ErrorKind::NotFound(descriptor.path.clone()));
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            // Reconcile before surfacing so the next window already
            // reflects the server's accounting.
            self.limiter.observe(&response.headers);
            return Err(ErrorKind::RateLimit {
                retry_after: ratelimit::parse_retry_after(&response.headers),
            });
        }
        if status.is_server_error() {
            return Err(ErrorKind::Server(status));
        }
        if !status.is_success() {
            log::warn!("unexpected status {status} from {}", descriptor.path);
            return Err(ErrorKind::Connect(None));
        }

        self.limiter.observe(&response.headers);

        let payload: Value = serde_json::from_str(&response.body)
            .map_err(|e| ErrorKind::Format(format!("response is not valid JSON: {e}")))?;

        if payload.get("error").and_then(Value::as_bool) == Some(true) {
            // The API signals failures for nested resources inside a
            // 200 envelope; a throttle notice takes precedence over a
            // plain not-found.
            let detail = payload
                .get("response")
                .and_then(Value::as_str)
                .unwrap_or_default();
            if detail.to_ascii_lowercase().contains("rate limit") {
                return Err(ErrorKind::RateLimit {
                    retry_after: ratelimit::parse_retry_after(&response.headers),
                });
            }
            return Err(ErrorKind::NotFound(descriptor.path.clone()));
        }

        Ok(payload)
    }

    /// Evict the cached result for a descriptor, forcing the next
    /// execution to fetch.
    pub(crate) fn invalidate(&self, descriptor: &RequestDescriptor) {
        self.cache.invalidate(&descriptor.cache_key());
    }

    /// Evict every cached result.
    pub(crate) fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    #[cfg(test)]
    pub(crate) fn cache_len(&self) -> usize {
        self.cache.len()
    }
}
