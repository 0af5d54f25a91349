//! Table output formatting for CLI commands
//!
//! Renders plans and workflow step outcomes using comfy-table.
//! Supports color-coded cells, automatic column sizing, and accessibility features.

use crate::workflow::StepOutcome;
use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};
use std::env;

/// Table formatter for CLI output
pub struct TableFormatter {
    /// Whether to use colors in output
    use_colors: bool,
    /// Maximum width for tables (None = auto)
    max_width: Option<usize>,
}

impl TableFormatter {
    /// Create a new table formatter
    pub fn new() -> Self {
        Self {
            use_colors: supports_color(),
            max_width: None,
        }
    }

    /// Create a new table formatter with custom settings
    pub fn with_config(use_colors: bool, max_width: Option<usize>) -> Self {
        Self {
            use_colors,
            max_width,
        }
    }

    /// Format a plan as a numbered table of steps
    pub fn format_plan(&self, steps: &[String]) -> String {
        let mut table = self.create_base_table();

        table.set_header(vec![
            Cell::new("#").add_attribute(Attribute::Bold),
            Cell::new("Step").add_attribute(Attribute::Bold),
        ]);

        for (i, step) in steps.iter().enumerate() {
            table.add_row(vec![Cell::new((i + 1).to_string()), Cell::new(step)]);
        }

        table.to_string()
    }

    /// Format workflow step outcomes as a table
    pub fn format_outcomes(&self, outcomes: &[StepOutcome]) -> String {
        let mut table = self.create_base_table();

        table.set_header(vec![
            Cell::new("#").add_attribute(Attribute::Bold),
            Cell::new("Step").add_attribute(Attribute::Bold),
            Cell::new("Status").add_attribute(Attribute::Bold),
            Cell::new("Output").add_attribute(Attribute::Bold),
        ]);

        for (i, outcome) in outcomes.iter().enumerate() {
            let status = outcome_status(outcome);

            let status_cell = if self.use_colors {
                Cell::new(status).fg(outcome_color(outcome))
            } else {
                Cell::new(format!("{} {}", outcome_icon(outcome), status))
            };

            table.add_row(vec![
                Cell::new((i + 1).to_string()),
                Cell::new(truncate_text(&outcome.step, 40)),
                status_cell,
                Cell::new(truncate_text(&outcome.output, 60)),
            ]);
        }

        table.to_string()
    }

    /// Create a base table with common settings
    fn create_base_table(&self) -> Table {
        let mut table = Table::new();

        // Use UTF-8 preset for nice borders
        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        // Apply max width if set
        if let Some(width) = self.max_width {
            table.set_width(width as u16);
        }

        table
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if color output is supported
fn supports_color() -> bool {
    // Respect NO_COLOR environment variable
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check for dumb terminal
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    true
}

/// Map a step outcome to a status label
fn outcome_status(outcome: &StepOutcome) -> &'static str {
    if outcome.routed {
        "completed"
    } else {
        "failed"
    }
}

/// Map a step outcome to a color
fn outcome_color(outcome: &StepOutcome) -> Color {
    if outcome.routed {
        Color::Green
    } else {
        Color::Red
    }
}

/// Map a step outcome to an icon
fn outcome_icon(outcome: &StepOutcome) -> &'static str {
    if outcome.routed {
        "✓"
    } else {
        "✗"
    }
}

/// Truncate text to max length with ellipsis
///
/// Counts characters rather than bytes so gateway output containing
/// multi-byte characters cannot split a code point.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}
