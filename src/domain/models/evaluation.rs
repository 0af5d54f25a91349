//! Evaluation result model and verdict interpretation.

use serde::{Deserialize, Serialize};

/// Outcome of one refinement evaluation run.
///
/// Produced exactly once per `evaluate` call and immutable after return.
/// `iterations_used` counts the generate rounds actually executed, so it is
/// always between 1 and the configured maximum. Exhausting the budget is not
/// an error: callers that need to detect an unmet criterion compare
/// `iterations_used` against their configured maximum, or check
/// [`EvaluationResult::accepted`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// The worker's last response (validated if `accepted`).
    pub final_response: String,
    /// The judge's verbatim verdict for that response.
    pub verdict: String,
    /// Number of generate rounds executed (1-based).
    pub iterations_used: u32,
}

impl EvaluationResult {
    /// Whether the verdict accepts the response.
    pub fn accepted(&self) -> bool {
        verdict_accepts(&self.verdict)
    }
}

/// Accept rule for judge verdicts: the trimmed verdict starts with "yes",
/// case-insensitively. Deliberately lenient — "Yes, but only partially"
/// counts as accepting, matching the is-the-first-word-yes contract the
/// evaluation prompt asks the model to honor.
pub fn verdict_accepts(verdict: &str) -> bool {
    verdict.trim().to_lowercase().starts_with("yes")
}
