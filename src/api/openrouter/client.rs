use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client as HttpClient;
use tracing::warn;

use super::models::{ChatMessage, ChatRequest, ChatResponse};
use crate::api::{ApiError, ChatModel};

/// OpenRouter chat-completions client (OpenAI wire shape)
pub struct OpenRouterClient {
    http_client: HttpClient,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenRouterClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://openrouter.ai/api/v1";

    /// Create a new client against the default OpenRouter endpoint
    pub fn new(api_key: String, model: String) -> Self {
        Self::with_base_url(api_key, model, Self::DEFAULT_BASE_URL.to_string())
    }

    /// Create a new client with custom base URL (for testing)
    pub fn with_base_url(api_key: String, model: String, base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            base_url,
            model,
        }
    }

    /// Create default headers with authorization
    fn create_headers(&self) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let auth_value = HeaderValue::from_str(&format!("Bearer {}", self.api_key))
            .map_err(|e| ApiError::Request(format!("Failed to create auth header: {}", e)))?;
        headers.insert(AUTHORIZATION, auth_value);

        Ok(headers)
    }
}

#[async_trait]
impl ChatModel for OpenRouterClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, ApiError> {
        let url = format!("{}/chat/completions", self.base_url);
        let headers = self.create_headers()?;

        let body = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: user.to_string(),
                },
            ],
        };

        let response = self
            .http_client
            .post(&url)
            .headers(headers)
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::Request(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body_text = response.text().await.unwrap_or_default();
            warn!("OpenRouter returned {}: {}", status, body_text);
            return Err(ApiError::Status(status, body_text));
        }

        let parsed = response
            .json::<ChatResponse>()
            .await
            .map_err(|e| ApiError::Malformed(format!("Failed to parse response: {}", e)))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| ApiError::Malformed("completion had no content".to_string()))
    }
}
