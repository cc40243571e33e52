use std::sync::Mutex;
use std::time::Duration;

use http::HeaderMap;
use tokio::time::Instant;

use crate::types::{ErrorKind, Result};

use super::headers;

/// Call budget for the current rate-limit window.
///
/// Invariant: `0 <= remaining <= limit`. Mutated only behind the
/// limiter's mutex; a reset restores `remaining` to `limit` and advances
/// `window_reset_at` past the present moment.
#[derive(Debug, Clone, Copy)]
pub struct RateBudget {
    /// Calls allowed per window.
    pub limit: u32,
    /// Calls left in the current window.
    pub remaining: u32,
    /// When the current window ends and the budget replenishes.
    pub window_reset_at: Instant,
}

/// Pre-emptive fixed-window rate limiter.
///
/// Guarantees the remote service's quota is never exceeded by delaying
/// callers instead of letting the server reject them: [`acquire`]
/// suspends the calling task until a slot is free and never returns a
/// denial.
///
/// [`acquire`]: RateLimiter::acquire
#[derive(Debug)]
pub struct RateLimiter {
    limit: u32,
    window: Duration,
    budget: Mutex<RateBudget>,
}

impl RateLimiter {
    /// Create a limiter allowing `limit` calls per `window`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidConfig`] if `limit` is zero or the
    /// window is empty.
    pub fn new(limit: u32, window: Duration) -> Result<Self> {
        if limit == 0 {
            return Err(ErrorKind::InvalidConfig(
                "rate limit must be greater than zero".into(),
            ));
        }
        if window.is_zero() {
            return Err(ErrorKind::InvalidConfig(
                "rate limit window must be non-empty".into(),
            ));
        }
        Ok(Self {
            limit,
            window,
            budget: Mutex::new(RateBudget {
                limit,
                remaining: limit,
                window_reset_at: Instant::now() + window,
            }),
        })
    }

    /// Wait until a call slot is available, then consume it.
    ///
    /// Suspends the calling task while the budget is exhausted; other
    /// tasks keep running. Waiters are not granted in FIFO order, but
    /// every waiter is eventually granted once a window resets.
    /// Cancelling a caller that is still waiting consumes nothing.
    ///
    /// # Panics
    ///
    /// Panics if the budget mutex is poisoned.
    pub async fn acquire(&self) {
        loop {
            let wait = {
                let mut budget = self.budget.lock().unwrap();
                let now = Instant::now();
                // An expired reset instant also covers the clock-skew
                // case: remaining == 0 with a reset time in the past
                // must replenish instead of blocking forever.
                if budget.window_reset_at <= now {
                    budget.window_reset_at = next_reset(budget.window_reset_at, now, self.window);
                    budget.remaining = self.limit;
                }
                if budget.remaining > 0 {
                    budget.remaining -= 1;
                    return;
                }
                budget.window_reset_at - now
            };
            log::debug!(
                "rate budget exhausted; delaying call by {}ms until the window resets",
                wait.as_millis()
            );
            tokio::time::sleep(wait).await;
        }
    }

    /// Reconcile the local budget against the server's own accounting.
    ///
    /// Takes the more conservative (smaller) remaining count so local
    /// and remote never drift towards over-spending, and pushes the
    /// reset out by `Retry-After` when the server advises one.
    ///
    /// # Panics
    ///
    /// Panics if the budget mutex is poisoned.
    pub fn observe(&self, headers: &HeaderMap) {
        let mut budget = self.budget.lock().unwrap();
        if let Some(remote) = headers::parse_remaining(headers) {
            if remote < budget.remaining {
                log::debug!(
                    "reconciling local budget: {} -> {} (authoritative)",
                    budget.remaining,
                    remote
                );
                budget.remaining = remote;
            }
        }
        if let Some(retry_after) = headers::parse_retry_after(headers) {
            let advised = Instant::now() + retry_after;
            if advised > budget.window_reset_at {
                budget.window_reset_at = advised;
            }
        }
    }

    /// Snapshot of the current budget.
    ///
    /// # Panics
    ///
    /// Panics if the budget mutex is poisoned.
    #[must_use]
    pub fn budget(&self) -> RateBudget {
        *self.budget.lock().unwrap()
    }
}

/// First window boundary after `now`, keeping the window phase anchored
/// at `expired` so idle time never accumulates extra budget.
fn next_reset(expired: Instant, now: Instant, window: Duration) -> Instant {
    let behind = now.duration_since(expired);
    let into_window = behind.as_nanos() % window.as_nanos();
    // into_window < window, so the cast cannot truncate
    now + window - Duration::from_nanos(into_window as u64)
}
