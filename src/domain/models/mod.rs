//! Domain models: configuration, route registry records, evaluation results,
//! and embedding similarity math.

pub mod config;
pub mod evaluation;
pub mod registry;
pub mod similarity;

pub use config::{Config, EvaluationConfig, GatewayConfig, LoggingConfig, WorkflowConfig};
pub use evaluation::{verdict_accepts, EvaluationResult};
pub use registry::RouteEntry;
pub use similarity::cosine_similarity;
