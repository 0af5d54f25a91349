//! Domain errors for the adjutant workflow engine.

use thiserror::Error;

/// Domain-level errors that can occur while planning, routing, or refining.
///
/// Only gateway transport failures propagate out of the core components;
/// everything else (empty registries, exhausted refinement budgets, list-less
/// planner output) degrades to a well-typed result instead of an error.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The language model gateway call failed (network, auth, rate limit,
    /// or an unparseable payload). Never retried by the core.
    #[error("Gateway request failed: {0}")]
    Gateway(String),

    /// Configuration rejected at construction time.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience alias used throughout the crate.
pub type DomainResult<T> = Result<T, DomainError>;
