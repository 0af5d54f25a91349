//! Implementation of the `adjutant plan` command.

use anyhow::Result;
use clap::Args;

use crate::adapters::build_gateway;
use crate::agents::ActionPlanner;
use crate::cli::output::progress::{start_spinner, SpinnerExt};
use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::domain::models::Config;
use crate::workflow::ACTION_PLANNING_KNOWLEDGE;

#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Goal to break into workflow steps
    #[arg(short, long)]
    pub goal: String,
}

#[derive(Debug, serde::Serialize)]
pub struct PlanOutput {
    pub goal: String,
    pub steps: Vec<String>,
}

impl CommandOutput for PlanOutput {
    fn to_human(&self) -> String {
        if self.steps.is_empty() {
            return format!("No steps extracted for: {}", self.goal);
        }

        format!(
            "Plan for: {}\n{}",
            self.goal,
            TableFormatter::new().format_plan(&self.steps)
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(args: PlanArgs, config: Config, json_mode: bool) -> Result<()> {
    let gateway = build_gateway(&config.gateway)?;

    let knowledge = config
        .workflow
        .planner_knowledge
        .unwrap_or_else(|| ACTION_PLANNING_KNOWLEDGE.to_string());
    let planner = ActionPlanner::new(gateway, knowledge);

    let spinner = (!json_mode).then(|| start_spinner("Extracting workflow steps"));

    let result = planner.extract_steps(&args.goal).await;
    if let Some(spinner) = &spinner {
        match &result {
            Ok(steps) => spinner.succeed(format!("Extracted {} step(s)", steps.len())),
            Err(_) => spinner.fail("Planning failed"),
        }
    }
    let steps = result?;

    let out = PlanOutput {
        goal: args.goal,
        steps,
    };
    output(&out, json_mode);
    Ok(())
}
