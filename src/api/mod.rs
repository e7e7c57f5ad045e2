//! Clients for the external HTTP boundaries: the chat-completions model
//! and the public exchange-rate feed.

pub mod openrouter;
pub mod rates;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the external HTTP boundaries
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure (DNS, connect, timeout)
    #[error("Request failed: {0}")]
    Request(String),
    /// Non-success HTTP status
    #[error("HTTP {0}: {1}")]
    Status(u16, String),
    /// Response body did not have the expected shape
    #[error("Malformed response: {0}")]
    Malformed(String),
}

/// Narrow seam over the chat-completions call.
///
/// One system instruction plus one user message in, raw completion text out.
/// Both the extractor and the report generator go through this, and tests
/// substitute a canned implementation.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, system: &str, user: &str) -> Result<String, ApiError>;
}

/// Seam over the exchange-rate feed, so the cache can be tested with a
/// deterministic fetcher
#[async_trait]
pub trait RateFetcher: Send + Sync {
    /// Current AED to INR spot rate
    async fn fetch_rate(&self) -> Result<f64, ApiError>;
}
