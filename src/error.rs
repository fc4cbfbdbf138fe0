//! Service error taxonomy.
//!
//! Every error is converted to a JSON [`ErrorResponse`] at the request
//! boundary; none of them terminates the serving process.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Errors produced by the embedding service and the gateway.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Malformed or missing fields in a request body.
    #[error("{0}")]
    InvalidPayload(String),

    /// The pseudo-random generator failed its startup self-check.
    ///
    /// This is a deployment problem, not something a client can fix.
    #[error("environment precondition failed: {0}")]
    EnvironmentPrecondition(String),

    /// The gateway could not reach the embedding service.
    #[error("upstream unreachable: {0}")]
    UpstreamUnreachable(String),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ServiceError {
    /// HTTP status code reported to clients.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            ServiceError::UpstreamUnreachable(_) => StatusCode::BAD_GATEWAY,
            ServiceError::EnvironmentPrecondition(_) | ServiceError::InvalidConfig(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::InvalidPayload(_) => "INVALID_PAYLOAD",
            ServiceError::EnvironmentPrecondition(_) => "ENVIRONMENT_PRECONDITION",
            ServiceError::UpstreamUnreachable(_) => "UPSTREAM_UNREACHABLE",
            ServiceError::InvalidConfig(_) => "INVALID_CONFIG",
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
            code: Some(self.code().to_string()),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
