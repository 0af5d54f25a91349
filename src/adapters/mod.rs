//! Infrastructure adapters for external systems.

pub mod mock;
pub mod openai;

pub use mock::{GatewayCall, MockGateway};
pub use openai::OpenAiGateway;

use std::sync::Arc;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::GatewayConfig;
use crate::domain::ports::Gateway;

/// Create a gateway from configuration.
pub fn build_gateway(config: &GatewayConfig) -> DomainResult<Arc<dyn Gateway>> {
    match config.provider.as_str() {
        "openai" => Ok(Arc::new(OpenAiGateway::new(config.clone())?)),
        "mock" => Ok(Arc::new(MockGateway::new())),
        other => Err(DomainError::InvalidConfig(format!(
            "Unknown gateway provider '{other}'. Available: openai, mock"
        ))),
    }
}
