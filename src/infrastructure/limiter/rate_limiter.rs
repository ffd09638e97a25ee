use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use dashmap::DashMap;

/// Outcome of a single rate-limit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateDecision {
    pub allowed: bool,
    /// Requests left in the current window after this one.
    pub remaining: u32,
    /// Time until the current window resets.
    pub retry_after: Duration,
}

/// Injected store seam for the contact pipeline, so a single-instance
/// deployment can use process memory while a multi-instance one swaps in a
/// shared backend.
pub trait RateLimitStore: Send + Sync {
    /// Atomically check-and-count one request for `key`.
    fn check(&self, key: &str) -> RateDecision;

    /// Drop entries whose window has already reset. Returns how many were
    /// removed.
    fn sweep_expired(&self) -> usize;
}

#[derive(Debug)]
struct WindowEntry {
    count: u32,
    reset_at: Instant,
}

/// In-memory fixed-window counters keyed by caller identifier.
#[derive(Clone)]
pub struct FixedWindowLimiter {
    inner: Arc<LimiterInner>,
}

struct LimiterInner {
    limit: u32,
    window: Duration,
    entries: DashMap<String, WindowEntry>,
}

impl FixedWindowLimiter {
    pub fn new(limit: u32, window: Duration) -> Self {
        Self {
            inner: Arc::new(LimiterInner {
                limit,
                window,
                entries: DashMap::new(),
            }),
        }
    }
}

impl RateLimitStore for FixedWindowLimiter {
    fn check(&self, key: &str) -> RateDecision {
        let now = Instant::now();
        // The entry guard holds the shard lock for the whole compare-and-
        // increment, so two requests at count = limit-1 cannot both pass.
        let mut entry = self
            .inner
            .entries
            .entry(key.to_string())
            .or_insert_with(|| WindowEntry {
                count: 0,
                reset_at: now + self.inner.window,
            });

        // Lazy expiry: the window is only ever reset on access.
        if now > entry.reset_at {
            entry.count = 0;
            entry.reset_at = now + self.inner.window;
        }

        let retry_after = entry.reset_at.saturating_duration_since(now);

        if entry.count >= self.inner.limit {
            return RateDecision {
                allowed: false,
                remaining: 0,
                retry_after,
            };
        }

        entry.count += 1;
        RateDecision {
            allowed: true,
            remaining: self.inner.limit - entry.count,
            retry_after,
        }
    }

    fn sweep_expired(&self) -> usize {
        let before = self.inner.entries.len();
        self.inner.entries.retain(|_, entry| Instant::now() <= entry.reset_at);
        before.saturating_sub(self.inner.entries.len())
    }
}
