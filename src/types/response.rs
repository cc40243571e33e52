use serde_json::Value;

/// Result of a successful dispatch: the decoded payload plus where it
/// came from.
///
/// There is no partial state: a call either yields a fully populated
/// `ApiResponse` or a typed [`ErrorKind`](crate::ErrorKind).
#[derive(Debug, Clone)]
pub struct ApiResponse {
    payload: Value,
    from_cache: bool,
}

impl ApiResponse {
    pub(crate) fn fetched(payload: Value) -> Self {
        Self {
            payload,
            from_cache: false,
        }
    }

    pub(crate) fn cached(payload: Value) -> Self {
        Self {
            payload,
            from_cache: true,
        }
    }

    /// The decoded JSON payload as returned by the API.
    #[must_use]
    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// Consume the response, yielding its payload.
    #[must_use]
    pub fn into_payload(self) -> Value {
        self.payload
    }

    /// Whether the payload was served from the response cache rather
    /// than a network exchange.
    #[must_use]
    pub fn from_cache(&self) -> bool {
        self.from_cache
    }
}
