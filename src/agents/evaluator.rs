//! Refinement evaluator: judges worker responses against criteria and feeds
//! correction instructions back until accepted or the budget runs out.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::domain::errors::DomainResult;
use crate::domain::models::{verdict_accepts, EvaluationResult};
use crate::domain::ports::{Gateway, Responder};

use super::DETERMINISTIC_TEMPERATURE;

/// Quality gate around a worker responder.
///
/// Each round the worker generates, the judge issues a Yes/No verdict against
/// the criteria, and a rejected response triggers a correction-instruction
/// call whose output is folded into the next worker prompt. The correction
/// call is skipped on the final round since no further generation can use it.
pub struct RefinementEvaluator {
    gateway: Arc<dyn Gateway>,
    persona: String,
    criteria: String,
    worker: Arc<dyn Responder>,
    max_interactions: u32,
}

impl RefinementEvaluator {
    /// Create an evaluator with an interaction budget.
    ///
    /// A budget of 0 is clamped to 1: the loop must always run at least one
    /// generate/judge round to produce a result.
    pub fn new(
        gateway: Arc<dyn Gateway>,
        persona: impl Into<String>,
        criteria: impl Into<String>,
        worker: Arc<dyn Responder>,
        max_interactions: u32,
    ) -> Self {
        let max_interactions = if max_interactions == 0 {
            warn!("max_interactions of 0 clamped to 1");
            1
        } else {
            max_interactions
        };

        Self {
            gateway,
            persona: persona.into(),
            criteria: criteria.into(),
            worker,
            max_interactions,
        }
    }

    pub fn max_interactions(&self) -> u32 {
        self.max_interactions
    }

    /// Run the refinement loop for `initial_prompt`.
    ///
    /// Exhausting the budget is not an error: the last response and verdict
    /// are returned with `iterations_used == max_interactions`. Gateway and
    /// worker failures abort the loop and propagate.
    pub async fn evaluate(&self, initial_prompt: &str) -> DomainResult<EvaluationResult> {
        let mut prompt_to_evaluate = initial_prompt.to_string();
        let mut round: u32 = 1;

        loop {
            debug!(round, max = self.max_interactions, "Worker generating response");
            let worker_output = self.worker.respond(&prompt_to_evaluate).await?;

            let judge_prompt = format!(
                "Does the following answer: {worker_output}\nMeet this criteria: {criteria} \
                 Respond Yes or No, and the reason why it does or doesn't meet the criteria.",
                criteria = self.criteria
            );
            let verdict = self
                .gateway
                .complete(Some(&self.persona), &judge_prompt, DETERMINISTIC_TEMPERATURE)
                .await?
                .trim()
                .to_string();
            debug!(round, verdict = %verdict, "Judge verdict");

            if verdict_accepts(&verdict) {
                info!(round, "Response accepted");
                return Ok(EvaluationResult {
                    final_response: worker_output,
                    verdict,
                    iterations_used: round,
                });
            }

            if round >= self.max_interactions {
                warn!(rounds = self.max_interactions, "Interaction budget exhausted");
                return Ok(EvaluationResult {
                    final_response: worker_output,
                    verdict,
                    iterations_used: self.max_interactions,
                });
            }

            let instruction_prompt = format!(
                "Provide instructions to fix an answer based on these reasons why it is \
                 incorrect: {verdict}"
            );
            let instructions = self
                .gateway
                .complete(Some(&self.persona), &instruction_prompt, DETERMINISTIC_TEMPERATURE)
                .await?
                .trim()
                .to_string();

            prompt_to_evaluate = format!(
                "The original prompt was: {initial_prompt}\n\
                 The response to that prompt was: {worker_output}\n\
                 It has been evaluated as incorrect.\n\
                 Make only these corrections, do not alter content validity: {instructions}"
            );
            round += 1;
        }
    }
}

#[async_trait]
impl Responder for RefinementEvaluator {
    /// Run the refinement loop and answer with the validated final response.
    async fn respond(&self, input: &str) -> DomainResult<String> {
        let result = self.evaluate(input).await?;
        Ok(result.final_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{GatewayCall, MockGateway};
    use crate::agents::responder::DirectResponder;

    fn evaluator(mock: &Arc<MockGateway>, max_interactions: u32) -> RefinementEvaluator {
        let worker = Arc::new(DirectResponder::new(mock.clone()));
        RefinementEvaluator::new(
            mock.clone(),
            "You are an evaluation agent that checks the answers of other worker agents.",
            "The answer should be a single word.",
            worker,
            max_interactions,
        )
    }

    #[tokio::test]
    async fn test_accepts_on_first_round() {
        let mock = Arc::new(MockGateway::new());
        mock.push_completion("Paris").await; // worker
        mock.push_completion("Yes, a single word.").await; // judge

        let result = evaluator(&mock, 5).evaluate("Capital of France?").await.unwrap();

        assert_eq!(result.final_response, "Paris");
        assert_eq!(result.iterations_used, 1);
        assert!(result.accepted());
        // One generate plus one judge call, nothing else.
        assert_eq!(mock.calls().await.len(), 2);
    }

    #[tokio::test]
    async fn test_rejected_then_accepted_uses_two_rounds() {
        let mock = Arc::new(MockGateway::new());
        mock.push_completion("The capital of France is Paris.").await; // worker round 1
        mock.push_completion("No, it is a sentence.").await; // judge round 1
        mock.push_completion("Reply with only the city name.").await; // correction
        mock.push_completion("Paris").await; // worker round 2
        mock.push_completion("Yes.").await; // judge round 2

        let result = evaluator(&mock, 5).evaluate("Capital of France?").await.unwrap();

        assert_eq!(result.final_response, "Paris");
        assert_eq!(result.iterations_used, 2);
        assert!(result.accepted());
    }

    #[tokio::test]
    async fn test_revision_prompt_carries_original_prompt_and_instructions() {
        let mock = Arc::new(MockGateway::new());
        mock.push_completion("A long sentence.").await;
        mock.push_completion("No, too long.").await;
        mock.push_completion("Use one word.").await;
        mock.push_completion("Paris").await;
        mock.push_completion("Yes.").await;

        evaluator(&mock, 5).evaluate("Capital of France?").await.unwrap();

        let calls = mock.calls().await;
        // Call order: worker, judge, correction, worker, judge.
        let GatewayCall::Complete { user_prompt, .. } = &calls[3] else {
            panic!("expected a completion call");
        };
        assert!(user_prompt.contains("The original prompt was: Capital of France?"));
        assert!(user_prompt.contains("The response to that prompt was: A long sentence."));
        assert!(user_prompt.contains("It has been evaluated as incorrect."));
        assert!(user_prompt.contains("Make only these corrections, do not alter content validity: Use one word."));
    }

    #[tokio::test]
    async fn test_exhaustion_skips_final_correction_call() {
        let mock = Arc::new(MockGateway::new());
        mock.push_completion("wrong answer").await; // worker
        mock.push_completion("No, still wrong.").await; // judge

        let result = evaluator(&mock, 1).evaluate("prompt").await.unwrap();

        assert_eq!(result.final_response, "wrong answer");
        assert_eq!(result.iterations_used, 1);
        assert!(!result.accepted());
        // Budget of 1: exactly one generate and one judge call. No
        // correction call is made when no round can use its output.
        assert_eq!(mock.calls().await.len(), 2);
    }

    #[tokio::test]
    async fn test_exhaustion_returns_last_output_and_verdict() {
        let mock = Arc::new(MockGateway::new());
        mock.push_completion("attempt one").await;
        mock.push_completion("No, reason A.").await;
        mock.push_completion("fix it like this").await;
        mock.push_completion("attempt two").await;
        mock.push_completion("No, reason B.").await;

        let result = evaluator(&mock, 2).evaluate("prompt").await.unwrap();

        assert_eq!(result.final_response, "attempt two");
        assert_eq!(result.verdict, "No, reason B.");
        assert_eq!(result.iterations_used, 2);
    }

    #[tokio::test]
    async fn test_zero_budget_clamped_to_one() {
        let mock = Arc::new(MockGateway::new());
        mock.push_completion("answer").await;
        mock.push_completion("Yes.").await;

        let evaluator = evaluator(&mock, 0);
        assert_eq!(evaluator.max_interactions(), 1);

        let result = evaluator.evaluate("prompt").await.unwrap();
        assert_eq!(result.iterations_used, 1);
    }

    #[tokio::test]
    async fn test_judge_failure_propagates() {
        let mock = Arc::new(MockGateway::new());
        mock.push_completion("answer").await; // worker
        mock.push_completion_failure("judge down").await; // judge

        let result = evaluator(&mock, 3).evaluate("prompt").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_responder_impl_returns_final_response() {
        let mock = Arc::new(MockGateway::new());
        mock.push_completion("Paris").await;
        mock.push_completion("Yes.").await;

        let evaluator = evaluator(&mock, 3);
        let response = evaluator.respond("Capital of France?").await.unwrap();
        assert_eq!(response, "Paris");
    }

    #[tokio::test]
    async fn test_judge_prompt_embeds_worker_output_and_criteria() {
        let mock = Arc::new(MockGateway::new());
        mock.push_completion("Paris").await;
        mock.push_completion("Yes.").await;

        evaluator(&mock, 3).evaluate("Capital of France?").await.unwrap();

        let calls = mock.calls().await;
        let GatewayCall::Complete {
            system_prompt,
            user_prompt,
            temperature,
        } = &calls[1]
        else {
            panic!("expected a completion call");
        };
        assert_eq!(
            system_prompt.as_deref(),
            Some("You are an evaluation agent that checks the answers of other worker agents.")
        );
        assert!(user_prompt.starts_with("Does the following answer: Paris\n"));
        assert!(user_prompt.contains("Meet this criteria: The answer should be a single word."));
        assert_eq!(*temperature, 0.0);
    }
}
