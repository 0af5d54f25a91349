//! Prompt responders: pass-through, persona, and knowledge-bounded.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::{Gateway, Responder};

use super::DETERMINISTIC_TEMPERATURE;

/// Responder that forwards the input to the gateway with no system prompt.
pub struct DirectResponder {
    gateway: Arc<dyn Gateway>,
}

impl DirectResponder {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl Responder for DirectResponder {
    async fn respond(&self, input: &str) -> DomainResult<String> {
        self.gateway
            .complete(None, input, DETERMINISTIC_TEMPERATURE)
            .await
    }
}

/// Responder that answers in the voice of a fixed persona.
pub struct PersonaResponder {
    gateway: Arc<dyn Gateway>,
    system_prompt: String,
}

impl PersonaResponder {
    pub fn new(gateway: Arc<dyn Gateway>, persona: impl Into<String>) -> DomainResult<Self> {
        let persona = persona.into();
        if persona.trim().is_empty() {
            return Err(DomainError::InvalidConfig(
                "Persona must not be empty".to_string(),
            ));
        }

        Ok(Self {
            gateway,
            system_prompt: format!("You are {persona}. Forget all previous context."),
        })
    }
}

#[async_trait]
impl Responder for PersonaResponder {
    async fn respond(&self, input: &str) -> DomainResult<String> {
        self.gateway
            .complete(Some(&self.system_prompt), input, DETERMINISTIC_TEMPERATURE)
            .await
    }
}

/// Responder constrained to answer from a supplied knowledge text.
///
/// The knowledge is embedded verbatim in the system prompt, so the model is
/// told to ignore its own training data for the answer.
pub struct KnowledgeResponder {
    gateway: Arc<dyn Gateway>,
    system_prompt: String,
}

impl KnowledgeResponder {
    pub fn new(
        gateway: Arc<dyn Gateway>,
        persona: impl Into<String>,
        knowledge: impl Into<String>,
    ) -> DomainResult<Self> {
        let persona = persona.into();
        if persona.trim().is_empty() {
            return Err(DomainError::InvalidConfig(
                "Persona must not be empty".to_string(),
            ));
        }
        let knowledge = knowledge.into();

        Ok(Self {
            gateway,
            system_prompt: format!(
                "You are {persona}, a knowledge-based assistant. Forget all previous context. \
                 Use only the following knowledge to answer, do not use your own knowledge: \
                 {knowledge} Answer the prompt based on this knowledge, not your own."
            ),
        })
    }
}

#[async_trait]
impl Responder for KnowledgeResponder {
    async fn respond(&self, input: &str) -> DomainResult<String> {
        self.gateway
            .complete(Some(&self.system_prompt), input, DETERMINISTIC_TEMPERATURE)
            .await
    }
}
