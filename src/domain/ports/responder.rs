//! Responder port — the capability every specialist exposes.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;

/// Anything that can turn an input prompt into a response text.
///
/// Implemented by the prompt responders in [`crate::agents::responder`], by
/// the retrieval responder, and by the refinement evaluator (which answers
/// with its validated final response). Router registries hold handlers
/// through this trait, never through concrete types.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Produce a response for `input`.
    async fn respond(&self, input: &str) -> DomainResult<String>;
}
