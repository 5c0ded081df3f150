//! Gemini API client.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use tourguide_protocols::ServiceError;

use crate::types::*;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini API client.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a new Gemini client.
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        connect_timeout: Duration,
        timeout: Duration,
    ) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(timeout)
            .build()
            .map_err(|e| ServiceError::unavailable(format!("Failed to build HTTP client: {}", e)))?;

        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            client,
            api_key,
            base_url,
        })
    }

    /// Generate content (non-streaming).
    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ServiceError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, model);

        debug!("Gemini generate_content: model={}", model);

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(request)
            .send()
            .await
            .map_err(|e| ServiceError::network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ServiceError::network(e.to_string()))?;

        if !status.is_success() {
            let error: Result<GeminiError, _> = serde_json::from_str(&body);
            return match error {
                Ok(e) => Err(ServiceError::from_status(status.as_u16(), e.error.message)),
                Err(_) => Err(ServiceError::from_status(status.as_u16(), body)),
            };
        }

        serde_json::from_str(&body)
            .map_err(|e| ServiceError::unavailable(format!("Failed to parse response: {}", e)))
    }
}
