//! Semantic router: picks the best specialist for an input by embedding
//! similarity and invokes it.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::errors::DomainResult;
use crate::domain::models::{cosine_similarity, RouteEntry};
use crate::domain::ports::Gateway;

/// Returned when no registration could be scored against the input.
pub const NO_SUITABLE_AGENT: &str = "Sorry, no suitable agent could be selected.";

/// Routes inputs to the registered specialist whose description is most
/// similar to the input in embedding space.
pub struct SemanticRouter {
    gateway: Arc<dyn Gateway>,
    registry: Vec<RouteEntry>,
}

impl SemanticRouter {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self {
            gateway,
            registry: Vec::new(),
        }
    }

    pub fn with_registry(gateway: Arc<dyn Gateway>, registry: Vec<RouteEntry>) -> Self {
        Self { gateway, registry }
    }

    /// Replace the whole registry. Entries are never mutated in place.
    pub fn set_registry(&mut self, registry: Vec<RouteEntry>) {
        self.registry = registry;
    }

    pub fn registry(&self) -> &[RouteEntry] {
        &self.registry
    }

    /// Route `input` to the best-matching specialist and return its response.
    ///
    /// The input embedding is mandatory: a failure there propagates. A
    /// description that fails to embed only removes that entry from the
    /// running (logged as a warning). Ties keep the first-seen entry. When no
    /// entry could be scored the sentinel text is returned instead of an
    /// error.
    pub async fn route(&self, input: &str) -> DomainResult<String> {
        let input_embedding = self.gateway.embed(input).await?;

        let mut best_score = f64::NEG_INFINITY;
        let mut best_entry: Option<&RouteEntry> = None;

        for entry in &self.registry {
            let description_embedding = match self.gateway.embed(&entry.description).await {
                Ok(embedding) => embedding,
                Err(e) => {
                    warn!(agent = %entry.name, error = %e, "Skipping agent: description embedding failed");
                    continue;
                }
            };

            let similarity = cosine_similarity(&input_embedding, &description_embedding);
            debug!(agent = %entry.name, similarity, "Scored agent");

            if similarity > best_score {
                best_score = similarity;
                best_entry = Some(entry);
            }
        }

        let Some(entry) = best_entry else {
            warn!("No suitable agent for input");
            return Ok(NO_SUITABLE_AGENT.to_string());
        };

        info!(agent = %entry.name, score = best_score, "Routed input");
        entry.handler.respond(input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockGateway;
    use crate::domain::errors::{DomainError, DomainResult};
    use crate::domain::ports::Responder;
    use async_trait::async_trait;

    struct FixedResponder(&'static str);

    #[async_trait]
    impl Responder for FixedResponder {
        async fn respond(&self, _input: &str) -> DomainResult<String> {
            Ok(self.0.to_string())
        }
    }

    struct EchoResponder;

    #[async_trait]
    impl Responder for EchoResponder {
        async fn respond(&self, input: &str) -> DomainResult<String> {
            Ok(format!("echo: {input}"))
        }
    }

    fn entry(name: &str, description: &str, output: &'static str) -> RouteEntry {
        RouteEntry::new(name, description, Arc::new(FixedResponder(output)))
    }

    #[tokio::test]
    async fn test_routes_to_most_similar_agent() {
        let mock = Arc::new(MockGateway::new());
        mock.map_embedding("sum of two numbers", vec![1.0, 0.0, 0.0]).await;
        mock.map_embedding("math questions", vec![0.9, 0.1, 0.0]).await;
        mock.map_embedding("geography questions", vec![0.0, 1.0, 0.0]).await;

        let router = SemanticRouter::with_registry(
            mock,
            vec![
                entry("math", "math questions", "math answer"),
                entry("geo", "geography questions", "geo answer"),
            ],
        );

        let output = router.route("what is the sum of two numbers").await.unwrap();
        assert_eq!(output, "math answer");
    }

    #[tokio::test]
    async fn test_tie_keeps_first_entry() {
        let mock = Arc::new(MockGateway::new());
        mock.set_default_embedding(vec![1.0, 0.0]).await;

        let router = SemanticRouter::with_registry(
            mock,
            vec![
                entry("first", "identical description", "first wins"),
                entry("second", "identical description", "second wins"),
            ],
        );

        let output = router.route("anything").await.unwrap();
        assert_eq!(output, "first wins");
    }

    #[tokio::test]
    async fn test_empty_registry_returns_sentinel() {
        let router = SemanticRouter::new(Arc::new(MockGateway::new()));
        let output = router.route("anything").await.unwrap();
        assert_eq!(output, NO_SUITABLE_AGENT);
    }

    #[tokio::test]
    async fn test_all_descriptions_failing_returns_sentinel() {
        let mock = Arc::new(MockGateway::new());
        mock.map_embedding_failure("unreachable", "embed down").await;

        let router = SemanticRouter::with_registry(
            mock,
            vec![entry("broken", "unreachable topic", "never")],
        );

        let output = router.route("anything").await.unwrap();
        assert_eq!(output, NO_SUITABLE_AGENT);
    }

    #[tokio::test]
    async fn test_failed_description_skipped_not_fatal() {
        let mock = Arc::new(MockGateway::new());
        mock.map_embedding_failure("unreachable", "embed down").await;
        mock.map_embedding("weather", vec![1.0, 0.0]).await;

        let router = SemanticRouter::with_registry(
            mock,
            vec![
                entry("broken", "unreachable topic", "never"),
                entry("weather", "weather forecasts", "sunny"),
            ],
        );

        let output = router.route("weather tomorrow").await.unwrap();
        assert_eq!(output, "sunny");
    }

    #[tokio::test]
    async fn test_input_embedding_failure_propagates() {
        let mock = Arc::new(MockGateway::new());
        mock.map_embedding_failure("poison", "embed down").await;

        let router = SemanticRouter::with_registry(
            mock,
            vec![entry("any", "any topic", "any answer")],
        );

        let result = router.route("poison input").await;
        assert!(matches!(result, Err(DomainError::Gateway(_))));
    }

    #[tokio::test]
    async fn test_handler_receives_original_input() {
        let mock = Arc::new(MockGateway::new());
        let router = SemanticRouter::with_registry(
            mock,
            vec![RouteEntry::new("echo", "everything", Arc::new(EchoResponder))],
        );

        let output = router.route("  raw input untouched  ").await.unwrap();
        assert_eq!(output, "echo:   raw input untouched  ");
    }

    #[tokio::test]
    async fn test_mismatched_dimensions_score_zero() {
        let mock = Arc::new(MockGateway::new());
        mock.map_embedding("input text", vec![1.0, 0.0, 0.0]).await;
        mock.map_embedding("short", vec![1.0]).await;
        mock.map_embedding("aligned", vec![0.1, 0.0, 0.0]).await;

        let router = SemanticRouter::with_registry(
            mock,
            vec![
                entry("short", "short", "short wins"),
                entry("aligned", "aligned", "aligned wins"),
            ],
        );

        // The dimension-mismatched entry scores 0.0 and loses to any
        // positive similarity.
        let output = router.route("input text").await.unwrap();
        assert_eq!(output, "aligned wins");
    }
}
