//! Spinner feedback for in-flight gateway calls
//!
//! Completions and embeddings have no measurable progress, so commands
//! show an elapsed-time spinner on stderr while a request is pending
//! and replace it with a status glyph once the call resolves. Drawing
//! to stderr keeps stdout clean for piped or JSON output.

use console::style;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

const TICK_FRAMES: &[&str] = &["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷", "·"];
const TICK_INTERVAL: Duration = Duration::from_millis(120);

/// Start a spinner on stderr carrying the given status message.
///
/// # Example
/// ```
/// use adjutant::cli::output::progress::{start_spinner, SpinnerExt};
///
/// let spinner = start_spinner("Waiting for gateway");
/// // do work
/// spinner.succeed("Response received");
/// ```
pub fn start_spinner(message: impl Into<String>) -> ProgressBar {
    let spinner = ProgressBar::new_spinner().with_message(message.into());
    spinner.set_draw_target(ProgressDrawTarget::stderr());
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg} ({elapsed})")
            .expect("static spinner template")
            .tick_strings(TICK_FRAMES),
    );
    spinner.enable_steady_tick(TICK_INTERVAL);
    spinner
}

/// Resolution helpers that swap the spinner for a final status line.
pub trait SpinnerExt {
    /// Stop with a green check and the given message.
    fn succeed(&self, message: impl Into<String>);

    /// Stop with a red cross and the given message.
    fn fail(&self, message: impl Into<String>);

    /// Stop with a yellow bang and the given message.
    fn warn(&self, message: impl Into<String>);
}

impl SpinnerExt for ProgressBar {
    fn succeed(&self, message: impl Into<String>) {
        self.finish_with_message(format!("{} {}", style("✓").green(), message.into()));
    }

    fn fail(&self, message: impl Into<String>) {
        self.finish_with_message(format!("{} {}", style("✗").red(), message.into()));
    }

    fn warn(&self, message: impl Into<String>) {
        self.finish_with_message(format!("{} {}", style("!").yellow(), message.into()));
    }
}
