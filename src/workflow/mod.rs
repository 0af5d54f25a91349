//! Workflow orchestration: the run engine and the specialist team wiring.

pub mod engine;
pub mod specialists;

pub use engine::{StepOutcome, WorkflowEngine, WorkflowReport};
pub use specialists::{product_planning_registry, ACTION_PLANNING_KNOWLEDGE};
