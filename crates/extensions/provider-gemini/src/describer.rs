//! [`DescriptionService`] backed by Gemini.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, error};

use tourguide_protocols::{
    Coordinates, DescribeError, DescriptionService, ImageDataUrl, ServiceError,
};

use crate::client::GeminiClient;
use crate::prompts::{DESCRIBE_INSTRUCTION, NO_SUGGESTIONS_SENTINEL, SYSTEM_PROMPT, suggestions_prompt};
use crate::types::*;

pub struct GeminiDescriber {
    client: GeminiClient,
    model: String,
}

impl GeminiDescriber {
    pub fn new(client: GeminiClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Build a describer with its own client.
    pub fn connect(
        api_key: String,
        model: impl Into<String>,
        base_url: Option<String>,
        connect_timeout: Duration,
        timeout: Duration,
    ) -> Result<Self, ServiceError> {
        let client = GeminiClient::new(api_key, base_url, connect_timeout, timeout)?;
        Ok(Self::new(client, model))
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl DescriptionService for GeminiDescriber {
    async fn describe_image(&self, image: &ImageDataUrl) -> Result<String, DescribeError> {
        let parts = image.parts().ok_or(ServiceError::InvalidImage)?;

        let request = GenerateContentRequest {
            contents: vec![Content::user(vec![
                Part::inline_data(parts.mime_type, parts.data),
                Part::text(DESCRIBE_INSTRUCTION),
            ])],
            system_instruction: Some(Content::system(SYSTEM_PROMPT)),
        };

        let response = self
            .client
            .generate_content(&self.model, &request)
            .await
            .inspect_err(|e| error!("Error calling Gemini API: {}", e.detail().unwrap_or_default()))?;

        match response.text() {
            Some(text) => Ok(text),
            None => {
                debug!("Gemini returned no text for image");
                Err(DescribeError::NotIdentified)
            }
        }
    }

    async fn nearby_suggestions(&self, position: Coordinates) -> Result<Vec<String>, ServiceError> {
        let request = GenerateContentRequest {
            contents: vec![Content::user(vec![Part::text(suggestions_prompt(
                position.latitude,
                position.longitude,
            ))])],
            system_instruction: None,
        };

        let response = self
            .client
            .generate_content(&self.model, &request)
            .await
            .inspect_err(|e| {
                error!(
                    "Error calling Gemini API for suggestions: {}",
                    e.detail().unwrap_or_default()
                )
            })?;

        Ok(response.text().map(|t| parse_suggestions(&t)).unwrap_or_default())
    }
}

/// Split a suggestions reply into names. Empty when the reply carries the sentinel.
pub fn parse_suggestions(text: &str) -> Vec<String> {
    if text.contains(NO_SUGGESTIONS_SENTINEL) {
        return Vec::new();
    }
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
#[path = "describer_tests.rs"]
mod tests;
