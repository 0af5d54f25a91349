//! Product-planning specialist team: Product Manager, Program Manager, and
//! Development Engineer, each a knowledge responder gated by a refinement
//! evaluator.

use std::sync::Arc;

use crate::agents::{KnowledgeResponder, RefinementEvaluator};
use crate::domain::errors::DomainResult;
use crate::domain::models::RouteEntry;
use crate::domain::ports::Gateway;

/// Default planning knowledge: how stories, features, and tasks relate.
pub const ACTION_PLANNING_KNOWLEDGE: &str = "Stories are defined from a product spec by \
     identifying a persona, an action, and a desired outcome for each story. Each story \
     represents a specific functionality of the product described in the specification. \n\
     Features are defined by grouping related user stories. \n\
     Tasks are defined for each story and represent the engineering work required to develop \
     the product. \nA development Plan for a product contains all these components";

const EVALUATOR_PERSONA: &str =
    "You are an evaluation agent that checks the answers of other worker agents.";

const PRODUCT_MANAGER_PERSONA: &str =
    "You are a Product Manager, you are responsible for defining the user stories for a product.";

const PRODUCT_MANAGER_CRITERIA: &str = "The answer should be stories that follow the following \
     structure: As a [type of user], I want [an action or feature] so that [benefit/value].";

const PROGRAM_MANAGER_PERSONA: &str =
    "You are a Program Manager, you are responsible for defining the features for a product.";

const PROGRAM_MANAGER_KNOWLEDGE: &str =
    "Features of a product are defined by organizing similar user stories into cohesive groups.";

const PROGRAM_MANAGER_CRITERIA: &str = "The answer should be product features that follow the \
     following structure: Feature Name: A clear, concise title that identifies the capability\n\
     Description: A brief explanation of what the feature does and its purpose\n\
     Key Functionality: The specific capabilities or actions the feature provides\n\
     User Benefit: How this feature creates value for the user";

const DEV_ENGINEER_PERSONA: &str = "You are a Development Engineer, you are responsible for \
     defining the development tasks for a product.";

const DEV_ENGINEER_KNOWLEDGE: &str =
    "Development tasks are defined by identifying what needs to be built to implement each user story.";

const DEV_ENGINEER_CRITERIA: &str = "The answer should be tasks following this exact structure: \
     Task ID: A unique identifier for tracking purposes\n\
     Task Title: Brief description of the specific development work\n\
     Related User Story: Reference to the parent user story\n\
     Description: Detailed explanation of the technical work required\n\
     Acceptance Criteria: Specific requirements that must be met for completion\n\
     Estimated Effort: Time or complexity estimation\n\
     Dependencies: Any tasks that must be completed first";

/// Build the product-planning route registry for a product specification.
///
/// Three routes, in a fixed order: Product Manager (user stories), Program
/// Manager (features), Development Engineer (tasks). Each handler answers
/// from role knowledge and is refined by an evaluator with role-specific
/// acceptance criteria. The product specification text is folded into the
/// Product Manager's knowledge.
pub fn product_planning_registry(
    gateway: &Arc<dyn Gateway>,
    product_spec: &str,
    max_interactions: u32,
) -> DomainResult<Vec<RouteEntry>> {
    let product_manager_knowledge = format!(
        "Stories are defined by writing sentences with a persona, an action, and a desired \
         outcome. The sentences always start with: As a Write several stories for the product \
         spec below, where the personas are the different users of the product. {product_spec}"
    );

    let product_manager = RefinementEvaluator::new(
        gateway.clone(),
        EVALUATOR_PERSONA,
        PRODUCT_MANAGER_CRITERIA,
        Arc::new(KnowledgeResponder::new(
            gateway.clone(),
            PRODUCT_MANAGER_PERSONA,
            product_manager_knowledge,
        )?),
        max_interactions,
    );

    let program_manager = RefinementEvaluator::new(
        gateway.clone(),
        EVALUATOR_PERSONA,
        PROGRAM_MANAGER_CRITERIA,
        Arc::new(KnowledgeResponder::new(
            gateway.clone(),
            PROGRAM_MANAGER_PERSONA,
            PROGRAM_MANAGER_KNOWLEDGE,
        )?),
        max_interactions,
    );

    let development_engineer = RefinementEvaluator::new(
        gateway.clone(),
        EVALUATOR_PERSONA,
        DEV_ENGINEER_CRITERIA,
        Arc::new(KnowledgeResponder::new(
            gateway.clone(),
            DEV_ENGINEER_PERSONA,
            DEV_ENGINEER_KNOWLEDGE,
        )?),
        max_interactions,
    );

    Ok(vec![
        RouteEntry::new(
            "Product Manager",
            "Responsible for defining product personas and user stories only. Does not define \
             features or tasks. Does not group stories",
            Arc::new(product_manager),
        ),
        RouteEntry::new(
            "Program Manager",
            "Responsible for defining product features by organizing and grouping related user \
             stories into cohesive capabilities",
            Arc::new(program_manager),
        ),
        RouteEntry::new(
            "Development Engineer",
            "Responsible for defining detailed development tasks and technical implementation \
             work required for user stories and features",
            Arc::new(development_engineer),
        ),
    ])
}
