//! Workflow engine: plan a goal, route every step, collect a report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use crate::agents::{ActionPlanner, SemanticRouter};
use crate::domain::errors::DomainResult;

/// Result of routing one planned step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepOutcome {
    /// The planned step text, as extracted by the planner.
    pub step: String,
    /// The routed specialist's response, or an error description.
    pub output: String,
    /// False when routing this step failed and `output` carries the error.
    pub routed: bool,
}

/// Full record of one workflow run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowReport {
    pub run_id: Uuid,
    pub goal: String,
    /// The extracted plan, in execution order.
    pub steps: Vec<String>,
    /// One outcome per step, same order as `steps`.
    pub outcomes: Vec<StepOutcome>,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

impl WorkflowReport {
    /// The last step's output — the conventional "result" of the run.
    pub fn final_output(&self) -> Option<&str> {
        self.outcomes.last().map(|outcome| outcome.output.as_str())
    }
}

/// Drives a full run: extract the plan, route each step in order, record
/// every outcome.
pub struct WorkflowEngine {
    planner: ActionPlanner,
    router: SemanticRouter,
}

impl WorkflowEngine {
    pub fn new(planner: ActionPlanner, router: SemanticRouter) -> Self {
        Self { planner, router }
    }

    /// Execute the workflow for `goal`.
    ///
    /// A planner failure aborts the run (there is nothing to execute). A
    /// failure while routing a single step is recorded in that step's
    /// outcome and the run continues with the next step. An empty plan
    /// produces a report with zero outcomes.
    pub async fn run(&self, goal: &str) -> DomainResult<WorkflowReport> {
        let run_id = Uuid::new_v4();
        let started_at = Utc::now();
        info!(%run_id, goal, "Workflow started");

        let steps = self.planner.extract_steps(goal).await?;
        info!(%run_id, step_count = steps.len(), "Plan extracted");

        let mut outcomes = Vec::with_capacity(steps.len());
        for (i, step) in steps.iter().enumerate() {
            info!(%run_id, step = i + 1, total = steps.len(), "Executing step");
            match self.router.route(step).await {
                Ok(output) => {
                    outcomes.push(StepOutcome {
                        step: step.clone(),
                        output,
                        routed: true,
                    });
                }
                Err(e) => {
                    error!(%run_id, step = i + 1, error = %e, "Step failed");
                    outcomes.push(StepOutcome {
                        step: step.clone(),
                        output: format!("Error: {e}"),
                        routed: false,
                    });
                }
            }
        }

        let report = WorkflowReport {
            run_id,
            goal: goal.to_string(),
            steps,
            outcomes,
            started_at,
            completed_at: Utc::now(),
        };
        info!(%run_id, outcomes = report.outcomes.len(), "Workflow completed");
        Ok(report)
    }
}
