//! Parsing of the rate-limit metadata the API attaches to responses.
//!
//! The header names are not standardised, but there is an
//! [IETF draft](https://datatracker.ietf.org/doc/draft-ietf-httpapi-ratelimit-headers/)
//! and most services use one of a handful of spellings.

use std::time::Duration;

use http::HeaderMap;

/// Extract the server's authoritative remaining-call count, if present.
pub(crate) fn parse_remaining(headers: &HeaderMap) -> Option<u32> {
    parse_header_value(
        headers,
        &[
            "x-ratelimit-remaining",
            "x-rate-limit-remaining",
            "ratelimit-remaining",
        ],
    )
}

/// Parse the `Retry-After` header as delay-seconds.
///
/// The HTTP-date form also allowed by RFC 7231 is not produced by this
/// API and is ignored.
pub(crate) fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
    let value = headers.get("retry-after")?;
    let seconds = value.to_str().ok()?.parse::<u64>().ok()?;
    Some(Duration::from_secs(seconds))
}

/// Helper to parse a numeric header under any of the given names.
fn parse_header_value(headers: &HeaderMap, header_names: &[&str]) -> Option<u32> {
    for header_name in header_names {
        if let Some(value) = headers.get(*header_name) {
            if let Ok(value_str) = value.to_str() {
                if let Ok(number) = value_str.parse::<u32>() {
                    return Some(number);
                }
            }
        }
    }
    None
}
