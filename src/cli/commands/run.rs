//! Implementation of the `adjutant run` command.

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use std::path::PathBuf;
use tokio::fs;

use crate::adapters::build_gateway;
use crate::agents::{ActionPlanner, SemanticRouter};
use crate::cli::output::progress::{start_spinner, SpinnerExt};
use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::domain::models::Config;
use crate::workflow::{
    product_planning_registry, StepOutcome, WorkflowEngine, ACTION_PLANNING_KNOWLEDGE,
};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Goal to plan and execute
    #[arg(short, long)]
    pub goal: String,

    /// Product specification file the specialist team works from
    #[arg(short, long)]
    pub spec_file: PathBuf,
}

#[derive(Debug, serde::Serialize)]
pub struct RunOutput {
    pub run_id: String,
    pub goal: String,
    pub steps: Vec<String>,
    pub outcomes: Vec<StepOutcome>,
    pub final_output: Option<String>,
}

impl CommandOutput for RunOutput {
    fn to_human(&self) -> String {
        let mut sections = vec![format!("Workflow {} for: {}", self.run_id, self.goal)];

        if self.outcomes.is_empty() {
            sections.push("No steps were executed.".to_string());
        } else {
            sections.push(TableFormatter::new().format_outcomes(&self.outcomes));
        }

        if let Some(final_output) = &self.final_output {
            sections.push(format!("{}\n{final_output}", style("Final output:").bold()));
        }

        sections.join("\n\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(args: RunArgs, config: Config, json_mode: bool) -> Result<()> {
    let product_spec = fs::read_to_string(&args.spec_file)
        .await
        .with_context(|| format!("Failed to read product spec {:?}", args.spec_file))?;

    let gateway = build_gateway(&config.gateway)?;

    let knowledge = config
        .workflow
        .planner_knowledge
        .unwrap_or_else(|| ACTION_PLANNING_KNOWLEDGE.to_string());
    let planner = ActionPlanner::new(gateway.clone(), knowledge);

    let registry = product_planning_registry(
        &gateway,
        &product_spec,
        config.evaluation.max_interactions,
    )?;
    let router = SemanticRouter::with_registry(gateway, registry);

    let engine = WorkflowEngine::new(planner, router);

    let spinner = (!json_mode).then(|| start_spinner("Executing workflow"));

    let result = engine.run(&args.goal).await;
    if let Some(spinner) = &spinner {
        match &result {
            Ok(report) => {
                let failed = report.outcomes.iter().filter(|o| !o.routed).count();
                if failed == 0 {
                    spinner.succeed(format!(
                        "Workflow completed: {} step(s)",
                        report.outcomes.len()
                    ));
                } else {
                    spinner.warn(format!("Workflow completed with {failed} failed step(s)"));
                }
            }
            Err(_) => spinner.fail("Workflow failed"),
        }
    }
    let report = result?;

    let final_output = report.final_output().map(ToString::to_string);
    let out = RunOutput {
        run_id: report.run_id.to_string(),
        goal: report.goal,
        steps: report.steps,
        outcomes: report.outcomes,
        final_output,
    };
    output(&out, json_mode);
    Ok(())
}
