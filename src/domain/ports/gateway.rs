//! Language model gateway port.
//!
//! The gateway is the single external collaborator of the engine: a stateless
//! request/response service offering chat completions and text embeddings.
//! It is constructed once and shared (`Arc<dyn Gateway>`) into every
//! component; no component owns its own connection setup.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;

/// Trait for language model gateways (completions + embeddings).
///
/// Implementations must support system-instruction-free calls (the
/// pass-through responder sends none) and temperature 0 for deterministic
/// sampling. Transport failures surface as `DomainError::Gateway` and are
/// never retried here; semantic retries belong to the refinement evaluator.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Provider name (e.g., "openai", "mock").
    fn name(&self) -> &'static str;

    /// Issue a single chat completion and return the response text.
    async fn complete(
        &self,
        system_prompt: Option<&str>,
        user_prompt: &str,
        temperature: f32,
    ) -> DomainResult<String>;

    /// Compute the embedding vector for a text.
    async fn embed(&self, text: &str) -> DomainResult<Vec<f32>>;
}
