//! Pre-emptive rate limiting for API calls.
//!
//! The TruckersMP API enforces a call quota per client. Instead of
//! letting the server answer 429, the limiter tracks a local
//! fixed-window [`RateBudget`] and delays callers before they would
//! exceed it. Response headers carry the server's own accounting and
//! are fed back through [`RateLimiter::observe`] so local and remote
//! never drift apart.

mod budget;
mod headers;

pub use budget::{RateBudget, RateLimiter};

pub(crate) use headers::parse_retry_after;
