//! Agent implementations: responders, planner, router, evaluator, retrieval.

pub mod evaluator;
pub mod planner;
pub mod responder;
pub mod retrieval;
pub mod router;

pub use evaluator::RefinementEvaluator;
pub use planner::ActionPlanner;
pub use responder::{DirectResponder, KnowledgeResponder, PersonaResponder};
pub use retrieval::{ChunkConfig, RetrievalResponder};
pub use router::SemanticRouter;

/// Sampling temperature used by every agent completion call.
pub(crate) const DETERMINISTIC_TEMPERATURE: f32 = 0.0;
