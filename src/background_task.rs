use tokio::time::{interval, Duration};

use crate::limiter::rate_limiter::{FixedWindowLimiter, RateLimitStore};

/// Periodically drops rate-limit entries whose window has reset, so the map
/// stays bounded even though expiry is otherwise lazy.
pub async fn start_sweep_task(store: FixedWindowLimiter) {
    let mut interval = interval(Duration::from_secs(60 * 10));

    loop {
        interval.tick().await;

        let removed = store.sweep_expired();
        if removed > 0 {
            tracing::info!("Swept {} expired rate-limit entries", removed);
        }
    }
}
