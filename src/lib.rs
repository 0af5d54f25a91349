//! Adjutant - Agentic Workflow Engine
//!
//! Adjutant plans a goal into ordered steps, routes each step to the most
//! semantically similar specialist, and refines every specialist answer
//! through a judge/revise loop until it meets its acceptance criteria.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Ports, models, and errors shared by everything
//! - **Agents Layer** (`agents`): Responders, planner, router, evaluator, retrieval
//! - **Workflow Layer** (`workflow`): The engine composing planner and router
//! - **Adapters Layer** (`adapters`): Gateway implementations (OpenAI-compatible, mock)
//! - **Infrastructure Layer** (`infrastructure`): Configuration loading
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use adjutant::adapters::build_gateway;
//! use adjutant::agents::{ActionPlanner, SemanticRouter};
//! use adjutant::workflow::{WorkflowEngine, ACTION_PLANNING_KNOWLEDGE};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = adjutant::infrastructure::config::ConfigLoader::load()?;
//!     let gateway = build_gateway(&config.gateway)?;
//!     let planner = ActionPlanner::new(gateway.clone(), ACTION_PLANNING_KNOWLEDGE);
//!     let router = SemanticRouter::new(gateway);
//!     let report = WorkflowEngine::new(planner, router).run("Ship the feature").await?;
//!     println!("{:?}", report.final_output());
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod agents;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod workflow;

// Re-export commonly used types for convenience
pub use agents::{
    ActionPlanner, ChunkConfig, DirectResponder, KnowledgeResponder, PersonaResponder,
    RefinementEvaluator, RetrievalResponder, SemanticRouter,
};
pub use domain::models::{
    Config, EvaluationConfig, EvaluationResult, GatewayConfig, LoggingConfig, RouteEntry,
    WorkflowConfig,
};
pub use domain::ports::{Gateway, Responder};
pub use domain::{DomainError, DomainResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use workflow::{WorkflowEngine, WorkflowReport};
