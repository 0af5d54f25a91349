pub mod commands;
pub mod output;
pub mod types;

pub use types::{Cli, Commands};

// Re-export commonly used items
pub use output::progress::{start_spinner, SpinnerExt};

/// Print a command error and terminate with a non-zero exit code.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let payload = serde_json::json!({
            "success": false,
            "error": format!("{err:#}"),
        });
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&payload).unwrap_or_default()
        );
    } else {
        eprintln!("{} {err:#}", console::style("✗").red().bold());
    }
    std::process::exit(1);
}
