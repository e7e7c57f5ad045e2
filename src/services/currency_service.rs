use tracing::warn;

use crate::services::rate_service::RateCache;

/// Currency all amounts are normalized into
pub const REFERENCE_CURRENCY: &str = "INR";
/// The one currency we convert from
pub const SOURCE_CURRENCY: &str = "AED";

/// Amount normalized into INR, plus the rate that was applied
#[derive(Debug, PartialEq)]
pub struct Converted {
    pub amount_inr: f64,
    pub rate: f64,
}

/// Normalize an amount into INR.
///
/// Codes other than INR and AED are converted as if they were AED. The
/// extraction prompt pins the model to those two codes, so anything else is
/// a model slip; it gets logged rather than rejected so the transaction
/// still lands.
pub async fn convert(cache: &RateCache, amount: f64, currency_code: &str) -> Converted {
    let code = currency_code.to_uppercase();

    if code == REFERENCE_CURRENCY {
        return Converted {
            amount_inr: amount,
            rate: 1.0,
        };
    }

    if code != SOURCE_CURRENCY {
        warn!(
            "Unknown currency '{}', converting as {}",
            currency_code, SOURCE_CURRENCY
        );
    }

    let rate = cache.get_rate().await;
    Converted {
        amount_inr: amount * rate,
        rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, RateFetcher};
    use crate::services::rate_service::SystemClock;
    use async_trait::async_trait;
    use std::sync::Arc;

    struct FixedFetcher(f64);

    #[async_trait]
    impl RateFetcher for FixedFetcher {
        async fn fetch_rate(&self) -> Result<f64, ApiError> {
            Ok(self.0)
        }
    }

    fn cache_with_rate(rate: f64) -> RateCache {
        RateCache::new(Arc::new(FixedFetcher(rate)), Arc::new(SystemClock), rate)
    }

    #[tokio::test]
    async fn test_inr_passes_through_at_rate_one() {
        let cache = cache_with_rate(22.5);

        let converted = convert(&cache, 5000.0, "INR").await;
        assert_eq!(
            converted,
            Converted {
                amount_inr: 5000.0,
                rate: 1.0
            }
        );
    }

    #[tokio::test]
    async fn test_inr_is_case_insensitive() {
        let cache = cache_with_rate(22.5);

        let converted = convert(&cache, 100.0, "inr").await;
        assert_eq!(converted.rate, 1.0);
    }

    #[tokio::test]
    async fn test_aed_is_multiplied_by_the_cached_rate() {
        let cache = cache_with_rate(22.5);

        let converted = convert(&cache, 100.0, "AED").await;
        assert_eq!(
            converted,
            Converted {
                amount_inr: 2250.0,
                rate: 22.5
            }
        );
    }

    #[tokio::test]
    async fn test_unknown_code_is_converted_as_aed() {
        let cache = cache_with_rate(22.5);

        let converted = convert(&cache, 10.0, "USD").await;
        assert_eq!(converted.amount_inr, 225.0);
        assert_eq!(converted.rate, 22.5);
    }
}
