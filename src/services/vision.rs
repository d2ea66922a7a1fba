//! Boundary to the external vision-language service.
//!
//! The analyzer only needs one operation: send a system prompt plus one
//! image and get the raw text reply back. Keeping that behind a trait means
//! the parsing and persistence around it never touch the network in tests.

use async_trait::async_trait;
use serde_json::json;
use thiserror::Error;

use crate::utils::config::Config;
use crate::utils::http_client::create_http_client;

#[derive(Debug, Error)]
pub enum VisionError {
    #[error("vision API key is not configured")]
    NotConfigured,
    #[error("vision API request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("vision API returned status {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("vision API reply has no message content")]
    MissingContent,
}

#[async_trait]
pub trait VisionClient: Send + Sync {
    /// Send one image with an instruction and return the model's text reply.
    async fn complete(
        &self,
        system_prompt: &str,
        image_data_url: &str,
        instruction: &str,
    ) -> Result<String, VisionError>;
}

/// Client for any OpenAI-compatible chat completions endpoint.
pub struct OpenAiVisionClient {
    api_base: String,
    api_key: Option<String>,
    model: String,
}

impl OpenAiVisionClient {
    pub fn new(config: &Config) -> Self {
        Self {
            api_base: config.vision_api_base.trim_end_matches('/').to_string(),
            api_key: config.vision_api_key.clone(),
            model: config.vision_model.clone(),
        }
    }
}

#[async_trait]
impl VisionClient for OpenAiVisionClient {
    async fn complete(
        &self,
        system_prompt: &str,
        image_data_url: &str,
        instruction: &str,
    ) -> Result<String, VisionError> {
        let api_key = self.api_key.as_deref().ok_or(VisionError::NotConfigured)?;

        let body = json!({
            "model": self.model,
            "messages": [
                {
                    "role": "system",
                    "content": system_prompt,
                },
                {
                    "role": "user",
                    "content": [
                        {
                            "type": "image_url",
                            "image_url": { "url": image_data_url },
                        },
                        {
                            "type": "text",
                            "text": instruction,
                        },
                    ],
                },
            ],
        });

        let client = create_http_client();
        let response = client
            .post(format!("{}/chat/completions", self.api_base))
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(VisionError::Api { status, body });
        }

        let reply: serde_json::Value = response.json().await?;

        reply
            .get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .map(|content| content.to_string())
            .ok_or(VisionError::MissingContent)
    }
}
