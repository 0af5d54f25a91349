//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::commands::ask::AskArgs;
use crate::cli::commands::plan::PlanArgs;
use crate::cli::commands::route::RouteArgs;
use crate::cli::commands::run::RunArgs;

#[derive(Parser)]
#[command(name = "adjutant")]
#[command(about = "Adjutant - Agentic Workflow Engine", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Path to a configuration file (defaults to adjutant.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Plan a goal and execute every step against the specialist team
    Run(RunArgs),

    /// Extract the workflow steps for a goal without executing them
    Plan(PlanArgs),

    /// Route a single input to the best-matching specialist
    Route(RouteArgs),

    /// Send a one-off prompt to the gateway
    Ask(AskArgs),
}
