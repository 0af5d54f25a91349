//! Action planner: turns a goal into an ordered list of steps.

use std::sync::Arc;

use tracing::debug;

use crate::domain::errors::DomainResult;
use crate::domain::ports::Gateway;

use super::DETERMINISTIC_TEMPERATURE;

/// Extracts the steps needed to complete a goal, constrained to a supplied
/// planning knowledge text.
pub struct ActionPlanner {
    gateway: Arc<dyn Gateway>,
    system_prompt: String,
}

impl ActionPlanner {
    pub fn new(gateway: Arc<dyn Gateway>, knowledge: impl Into<String>) -> Self {
        let knowledge = knowledge.into();
        Self {
            gateway,
            system_prompt: format!(
                "You are an action planning agent. Using your knowledge, you extract from the \
                 user prompt the steps requested to complete the action the user is asking for. \
                 You return the steps as a list. Only return the steps in your knowledge. \
                 Forget any previous context. This is your knowledge: {knowledge}"
            ),
        }
    }

    /// Extract an ordered plan for `goal`.
    ///
    /// One completion call; the response is split on line boundaries, each
    /// line trimmed, and blank lines dropped. Order is preserved and
    /// duplicate steps are kept. A response without line breaks becomes a
    /// single-step plan.
    pub async fn extract_steps(&self, goal: &str) -> DomainResult<Vec<String>> {
        let response = self
            .gateway
            .complete(Some(&self.system_prompt), goal, DETERMINISTIC_TEMPERATURE)
            .await?;

        let steps = clean_steps(&response);
        debug!(step_count = steps.len(), "Extracted plan");
        Ok(steps)
    }
}

/// Split a raw plan response into trimmed, non-empty step lines.
pub fn clean_steps(response: &str) -> Vec<String> {
    response
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{GatewayCall, MockGateway};

    #[test]
    fn test_clean_steps_trims_and_drops_blanks() {
        let response = "  1. Gather requirements  \n\n2. Define user stories\n   \n3. Ship\n";
        let steps = clean_steps(response);
        assert_eq!(
            steps,
            vec!["1. Gather requirements", "2. Define user stories", "3. Ship"]
        );
    }

    #[test]
    fn test_clean_steps_preserves_order_and_duplicates() {
        let steps = clean_steps("check\nbuild\ncheck");
        assert_eq!(steps, vec!["check", "build", "check"]);
    }

    #[test]
    fn test_clean_steps_no_newlines_is_single_step() {
        let steps = clean_steps("Boil the eggs for six minutes");
        assert_eq!(steps, vec!["Boil the eggs for six minutes"]);
    }

    #[test]
    fn test_clean_steps_all_blank_is_empty_plan() {
        assert!(clean_steps("\n  \n\t\n").is_empty());
    }

    #[tokio::test]
    async fn test_extract_steps_sends_knowledge_in_system_prompt() {
        let mock = Arc::new(MockGateway::new());
        mock.push_completion("1. Fill a pot with water\n2. Boil the water\n3. Add the eggs")
            .await;
        let planner = ActionPlanner::new(mock.clone(), "Steps for boiling eggs: fill, boil, add.");

        let steps = planner.extract_steps("How do I boil an egg?").await.unwrap();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0], "1. Fill a pot with water");

        let calls = mock.calls().await;
        match &calls[0] {
            GatewayCall::Complete {
                system_prompt,
                user_prompt,
                temperature,
            } => {
                let system = system_prompt.as_deref().unwrap();
                assert!(system.starts_with("You are an action planning agent."));
                assert!(system.contains("Steps for boiling eggs: fill, boil, add."));
                assert_eq!(user_prompt, "How do I boil an egg?");
                assert_eq!(*temperature, 0.0);
            }
            other => panic!("expected a completion call, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_extract_steps_propagates_gateway_error() {
        let mock = Arc::new(MockGateway::new());
        mock.push_completion_failure("connection reset").await;
        let planner = ActionPlanner::new(mock, "knowledge");

        assert!(planner.extract_steps("goal").await.is_err());
    }
}
