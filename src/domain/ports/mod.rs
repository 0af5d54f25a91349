//! Port trait definitions.
//!
//! Async trait interfaces that adapters and agents implement:
//! - `Gateway`: language model completions and embeddings
//! - `Responder`: the respond(input) -> text capability of every specialist
//!
//! These contracts keep the planning/routing/refinement logic independent of
//! any concrete LLM provider.

pub mod gateway;
pub mod responder;

pub use gateway::Gateway;
pub use responder::Responder;
