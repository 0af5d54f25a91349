//! Implementation of the `adjutant route` command.

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use std::path::PathBuf;
use tokio::fs;

use crate::adapters::build_gateway;
use crate::agents::SemanticRouter;
use crate::cli::output::progress::{start_spinner, SpinnerExt};
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Config;
use crate::workflow::product_planning_registry;

#[derive(Args, Debug)]
pub struct RouteArgs {
    /// Input text to route to the best-matching specialist
    #[arg(short, long)]
    pub input: String,

    /// Product specification file the specialist team works from
    #[arg(short, long)]
    pub spec_file: PathBuf,
}

#[derive(Debug, serde::Serialize)]
pub struct RouteOutput {
    pub input: String,
    pub response: String,
}

impl CommandOutput for RouteOutput {
    fn to_human(&self) -> String {
        format!("{}\n{}", style("Response:").bold(), self.response)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(args: RouteArgs, config: Config, json_mode: bool) -> Result<()> {
    let product_spec = fs::read_to_string(&args.spec_file)
        .await
        .with_context(|| format!("Failed to read product spec {:?}", args.spec_file))?;

    let gateway = build_gateway(&config.gateway)?;

    let registry = product_planning_registry(
        &gateway,
        &product_spec,
        config.evaluation.max_interactions,
    )?;
    let router = SemanticRouter::with_registry(gateway, registry);

    let spinner = (!json_mode).then(|| start_spinner("Routing input"));

    let result = router.route(&args.input).await;
    if let Some(spinner) = &spinner {
        match &result {
            Ok(_) => spinner.succeed("Input routed"),
            Err(_) => spinner.fail("Routing failed"),
        }
    }
    let response = result?;

    let out = RouteOutput {
        input: args.input,
        response,
    };
    output(&out, json_mode);
    Ok(())
}
