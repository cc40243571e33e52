use std::time::Duration;

/// Fingerprint of a logical API request, used as the cache key.
///
/// Derived from the normalized path and the sorted query parameters, so
/// two logically identical requests produce the same key regardless of
/// the order their parameters were added in.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct CacheKey {
    path: String,
    query: Vec<(String, String)>,
}

/// Describes a single logical API call before it is dispatched.
///
/// A descriptor is owned by one call and dropped afterwards; the
/// endpoint methods construct one per invocation and hand it to the
/// dispatcher.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    /// Path below the API base URL, e.g. `/player/42`.
    pub path: String,
    /// Query parameters in the order they were added.
    pub query: Vec<(String, String)>,
    /// Whether a fresh result may be served from (and stored into) the
    /// response cache.
    pub cacheable: bool,
    /// Freshness window for this call's result, overriding the client's
    /// default TTL.
    pub ttl_override: Option<Duration>,
}

impl RequestDescriptor {
    /// Create a cacheable descriptor for the given path with no query
    /// parameters and the default TTL.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
            cacheable: true,
            ttl_override: None,
        }
    }

    /// Append a query parameter.
    #[must_use]
    pub fn query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// Mark this call as non-cacheable. The dispatcher will neither
    /// consult nor populate the response cache for it.
    #[must_use]
    pub fn no_cache(mut self) -> Self {
        self.cacheable = false;
        self
    }

    /// Override the freshness window for this call's cached result.
    #[must_use]
    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl_override = Some(ttl);
        self
    }

    /// Compute the cache fingerprint for this descriptor.
    #[must_use]
    pub fn cache_key(&self) -> CacheKey {
        let path = match self.path.trim_end_matches('/') {
            "" => "/".to_string(),
            trimmed => trimmed.to_string(),
        };
        let mut query = self.query.clone();
        query.sort();
        CacheKey { path, query }
    }
}
