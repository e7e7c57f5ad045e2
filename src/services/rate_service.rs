use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::api::RateFetcher;

/// Clock seam so cache-expiry tests can control time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Default)]
struct CacheState {
    rate: Option<f64>,
    fetched_at: Option<DateTime<Utc>>,
}

/// Cached AED to INR rate with a one hour TTL.
///
/// `get_rate` never fails: a fetch error falls back to the last known rate,
/// stale or not, and to the configured default when nothing has ever been
/// fetched. A stale rate beats blocking a transaction on a flaky feed.
pub struct RateCache {
    fetcher: Arc<dyn RateFetcher>,
    clock: Arc<dyn Clock>,
    default_rate: f64,
    ttl: Duration,
    state: Mutex<CacheState>,
}

impl RateCache {
    const TTL_SECS: i64 = 60 * 60;

    pub fn new(fetcher: Arc<dyn RateFetcher>, clock: Arc<dyn Clock>, default_rate: f64) -> Self {
        Self {
            fetcher,
            clock,
            default_rate,
            ttl: Duration::seconds(Self::TTL_SECS),
            state: Mutex::new(CacheState::default()),
        }
    }

    /// Current AED to INR rate.
    ///
    /// The lock is held across the refresh, so concurrent callers seeing a
    /// stale cache line up behind one fetch instead of issuing their own.
    pub async fn get_rate(&self) -> f64 {
        let mut state = self.state.lock().await;
        let now = self.clock.now();

        if let (Some(rate), Some(fetched_at)) = (state.rate, state.fetched_at) {
            if now - fetched_at < self.ttl {
                return rate;
            }
        }

        match self.fetcher.fetch_rate().await {
            Ok(rate) => {
                debug!("Fetched AED/INR rate: {}", rate);
                state.rate = Some(rate);
                state.fetched_at = Some(now);
                rate
            }
            Err(e) => {
                warn!("Failed to fetch exchange rate: {}", e);
                // No state update on failure; stale value stays usable
                state.rate.unwrap_or(self.default_rate)
            }
        }
    }
}
