use reqwest::StatusCode;
use thiserror::Error;

use crate::domain::errors::DomainError;

/// Errors that can occur when talking to an OpenAI-compatible API.
#[derive(Debug, Error)]
pub enum GatewayApiError {
    /// Invalid request parameters (HTTP 400)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid or missing API key (HTTP 401)
    #[error("Invalid API key - authentication failed")]
    InvalidApiKey,

    /// Forbidden - permission denied (HTTP 403)
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Resource not found, usually a bad model name (HTTP 404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Rate limit exceeded (HTTP 429)
    #[error("Rate limit exceeded - too many requests")]
    RateLimitExceeded,

    /// Server error from the API (HTTP 5xx)
    #[error("Server error ({0}): {1}")]
    ServerError(StatusCode, String),

    /// Network or connection error
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// Response body did not match the expected shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Unknown or unexpected error
    #[error("Unknown error ({0}): {1}")]
    UnknownError(StatusCode, String),
}

impl GatewayApiError {
    /// True when a later identical request could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            GatewayApiError::RateLimitExceeded
                | GatewayApiError::ServerError(_, _)
                | GatewayApiError::NetworkError(_)
        )
    }

    /// Classify an HTTP error status into an error variant.
    pub fn from_status(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::BAD_REQUEST => GatewayApiError::InvalidRequest(body),
            StatusCode::UNAUTHORIZED => GatewayApiError::InvalidApiKey,
            StatusCode::FORBIDDEN => GatewayApiError::Forbidden(body),
            StatusCode::NOT_FOUND => GatewayApiError::NotFound(body),
            StatusCode::TOO_MANY_REQUESTS => GatewayApiError::RateLimitExceeded,
            status if status.is_server_error() => GatewayApiError::ServerError(status, body),
            status => GatewayApiError::UnknownError(status, body),
        }
    }
}

impl From<GatewayApiError> for DomainError {
    fn from(err: GatewayApiError) -> Self {
        DomainError::Gateway(err.to_string())
    }
}
