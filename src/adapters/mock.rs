//! Mock gateway for testing and offline runs.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::Gateway;

/// A recorded call made against the mock gateway.
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayCall {
    Complete {
        system_prompt: Option<String>,
        user_prompt: String,
        temperature: f32,
    },
    Embed {
        text: String,
    },
}

type EmbeddingRule = (String, Result<Vec<f32>, String>);

/// Mock gateway with scripted completions and keyword-matched embeddings.
///
/// Completions are consumed from a FIFO queue; when the queue is empty the
/// default completion is returned. Embeddings are resolved by scanning the
/// rule list in insertion order and returning the first rule whose keyword
/// appears in the input text, falling back to the default vector. Every call
/// is recorded for later inspection.
pub struct MockGateway {
    default_completion: String,
    completions: Arc<RwLock<VecDeque<Result<String, String>>>>,
    embedding_rules: Arc<RwLock<Vec<EmbeddingRule>>>,
    default_embedding: Arc<RwLock<Vec<f32>>>,
    calls: Arc<RwLock<Vec<GatewayCall>>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self {
            default_completion: "Mock completion.".to_string(),
            completions: Arc::new(RwLock::new(VecDeque::new())),
            embedding_rules: Arc::new(RwLock::new(Vec::new())),
            default_embedding: Arc::new(RwLock::new(vec![0.0, 0.0, 1.0])),
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn with_default_completion(completion: impl Into<String>) -> Self {
        Self {
            default_completion: completion.into(),
            ..Self::new()
        }
    }

    /// Queue a completion to be returned by the next `complete` call.
    pub async fn push_completion(&self, completion: impl Into<String>) {
        let mut completions = self.completions.write().await;
        completions.push_back(Ok(completion.into()));
    }

    /// Queue a completion failure.
    pub async fn push_completion_failure(&self, error: impl Into<String>) {
        let mut completions = self.completions.write().await;
        completions.push_back(Err(error.into()));
    }

    /// Return `embedding` whenever the embedded text contains `keyword`.
    pub async fn map_embedding(&self, keyword: impl Into<String>, embedding: Vec<f32>) {
        let mut rules = self.embedding_rules.write().await;
        rules.push((keyword.into(), Ok(embedding)));
    }

    /// Fail the embed call whenever the embedded text contains `keyword`.
    pub async fn map_embedding_failure(&self, keyword: impl Into<String>, error: impl Into<String>) {
        let mut rules = self.embedding_rules.write().await;
        rules.push((keyword.into(), Err(error.into())));
    }

    pub async fn set_default_embedding(&self, embedding: Vec<f32>) {
        let mut default = self.default_embedding.write().await;
        *default = embedding;
    }

    /// All calls made so far, in order.
    pub async fn calls(&self) -> Vec<GatewayCall> {
        let calls = self.calls.read().await;
        calls.clone()
    }
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Gateway for MockGateway {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn complete(
        &self,
        system_prompt: Option<&str>,
        user_prompt: &str,
        temperature: f32,
    ) -> DomainResult<String> {
        let mut calls = self.calls.write().await;
        calls.push(GatewayCall::Complete {
            system_prompt: system_prompt.map(ToString::to_string),
            user_prompt: user_prompt.to_string(),
            temperature,
        });
        drop(calls);

        let mut completions = self.completions.write().await;
        match completions.pop_front() {
            Some(Ok(completion)) => Ok(completion),
            Some(Err(error)) => Err(DomainError::Gateway(error)),
            None => Ok(self.default_completion.clone()),
        }
    }

    async fn embed(&self, text: &str) -> DomainResult<Vec<f32>> {
        let mut calls = self.calls.write().await;
        calls.push(GatewayCall::Embed {
            text: text.to_string(),
        });
        drop(calls);

        let rules = self.embedding_rules.read().await;
        for (keyword, result) in rules.iter() {
            if text.contains(keyword.as_str()) {
                return match result {
                    Ok(embedding) => Ok(embedding.clone()),
                    Err(error) => Err(DomainError::Gateway(error.clone())),
                };
            }
        }
        drop(rules);

        let default = self.default_embedding.read().await;
        Ok(default.clone())
    }
}
