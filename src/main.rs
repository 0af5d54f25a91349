//! Adjutant CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use adjutant::cli::{Cli, Commands};
use adjutant::domain::models::LoggingConfig;
use adjutant::infrastructure::config::ConfigLoader;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(err) => adjutant::cli::handle_error(err, cli.json),
    };

    init_tracing(&config.logging);

    let result = match cli.command {
        Commands::Run(args) => adjutant::cli::commands::run::execute(args, config, cli.json).await,
        Commands::Plan(args) => {
            adjutant::cli::commands::plan::execute(args, config, cli.json).await
        }
        Commands::Route(args) => {
            adjutant::cli::commands::route::execute(args, config, cli.json).await
        }
        Commands::Ask(args) => adjutant::cli::commands::ask::execute(args, config, cli.json).await,
    };

    if let Err(err) = result {
        adjutant::cli::handle_error(err, cli.json);
    }
}

/// Install the global tracing subscriber. `RUST_LOG` overrides the
/// configured level when set.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    if logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
