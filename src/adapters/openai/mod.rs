//! OpenAI-compatible gateway adapter.
//!
//! Talks to the `/chat/completions` and `/embeddings` endpoints of any
//! OpenAI-compatible server (OpenAI, Azure OpenAI, local inference servers)
//! over HTTP with Bearer authentication. Constructed once and shared as
//! `Arc<dyn Gateway>` into every component.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::GatewayConfig;
use crate::domain::ports::Gateway;

pub mod error;

pub use error::GatewayApiError;

/// HTTP gateway for OpenAI-compatible completion and embedding APIs.
pub struct OpenAiGateway {
    config: GatewayConfig,
    api_key: String,
    client: reqwest::Client,
}

impl OpenAiGateway {
    /// Build a gateway from configuration.
    ///
    /// Fails when no API key is configured (config value or the
    /// `OPENAI_API_KEY` environment variable) or the HTTP client cannot be
    /// constructed. The key is held here alone and never logged.
    pub fn new(config: GatewayConfig) -> DomainResult<Self> {
        let api_key = config.resolve_api_key().ok_or_else(|| {
            DomainError::InvalidConfig(
                "OpenAI API key not set. Set OPENAI_API_KEY env var or configure gateway.api_key."
                    .to_string(),
            )
        })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                DomainError::InvalidConfig(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            config,
            api_key,
            client,
        })
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, GatewayApiError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.config.base_url, path);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read response body".to_string());
            return Err(GatewayApiError::from_status(status, body));
        }

        response
            .json()
            .await
            .map_err(|e| GatewayApiError::MalformedResponse(e.to_string()))
    }
}

#[async_trait]
impl Gateway for OpenAiGateway {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn complete(
        &self,
        system_prompt: Option<&str>,
        user_prompt: &str,
        temperature: f32,
    ) -> DomainResult<String> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = system_prompt {
            messages.push(ChatMessage {
                role: "system".to_string(),
                content: system.to_string(),
            });
        }
        messages.push(ChatMessage {
            role: "user".to_string(),
            content: user_prompt.to_string(),
        });

        let request = ChatCompletionRequest {
            model: self.config.completion_model.clone(),
            messages,
            temperature,
        };

        let response: ChatCompletionResponse =
            self.post_json("/chat/completions", &request).await?;

        let choice = response.choices.into_iter().next().ok_or_else(|| {
            GatewayApiError::MalformedResponse("completion response contained no choices".to_string())
        })?;

        Ok(choice.message.content)
    }

    async fn embed(&self, text: &str) -> DomainResult<Vec<f32>> {
        let request = EmbeddingsRequest {
            model: self.config.embedding_model.clone(),
            input: text.to_string(),
            encoding_format: "float".to_string(),
        };

        let response: EmbeddingsResponse = self.post_json("/embeddings", &request).await?;

        // Sort by index to maintain input order
        let mut data = response.data;
        data.sort_by_key(|d| d.index);

        data.into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| {
                GatewayApiError::MalformedResponse("empty embedding response".to_string()).into()
            })
    }
}

// -- OpenAI API request/response types --

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Serialize)]
struct EmbeddingsRequest {
    model: String,
    input: String,
    encoding_format: String,
}

#[derive(Debug, Deserialize)]
struct EmbeddingsResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
    index: usize,
}
