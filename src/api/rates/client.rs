use async_trait::async_trait;
use reqwest::Client as HttpClient;

use crate::api::{ApiError, RateFetcher};

/// Client for the fawazahmed0 currency-api CDN feed.
///
/// `GET {base}/currencies/aed.json` returns `{"date": "...", "aed": {"inr":
/// 22.5, ...}}`; anything without a numeric `aed.inr` is treated as
/// malformed.
pub struct RateFeedClient {
    http_client: HttpClient,
    base_url: String,
}

impl RateFeedClient {
    pub const DEFAULT_BASE_URL: &'static str =
        "https://cdn.jsdelivr.net/npm/@fawazahmed0/currency-api@latest/v1";

    pub fn new() -> Self {
        Self::with_base_url(Self::DEFAULT_BASE_URL.to_string())
    }

    /// Create a new client with custom base URL (for testing)
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url,
        }
    }
}

impl Default for RateFeedClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RateFetcher for RateFeedClient {
    async fn fetch_rate(&self) -> Result<f64, ApiError> {
        let url = format!("{}/currencies/aed.json", self.base_url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Request(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body_text = response.text().await.unwrap_or_default();
            return Err(ApiError::Status(status, body_text));
        }

        let body = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| ApiError::Malformed(format!("Failed to parse response: {}", e)))?;

        body.get("aed")
            .and_then(|aed| aed.get("inr"))
            .and_then(|inr| inr.as_f64())
            .ok_or_else(|| ApiError::Malformed("missing aed.inr rate".to_string()))
    }
}
