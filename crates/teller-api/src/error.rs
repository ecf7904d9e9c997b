//! HTTP error mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use teller_core::DomainError;
use thiserror::Error;
use tracing::error;

use crate::response::ApiResponse;

pub const INVALID_SESSION_MESSAGE: &str = "Invalid session";

#[derive(Error, Debug)]
pub enum ApiError {
    /// Deliberately uninformative: callers cannot tell expired from forged or missing.
    #[error("Invalid session")]
    Unauthorized,

    #[error("{1}")]
    InvalidBody(StatusCode, String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidSession => ApiError::Unauthorized,
            DomainError::TokenGenerationError(msg) => ApiError::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                ApiResponse::failure("UNAUTHORIZED", INVALID_SESSION_MESSAGE),
            ),
            ApiError::InvalidBody(status, msg) => (status, ApiResponse::failure("VALIDATION_ERROR", msg)),
            ApiError::Internal(msg) => {
                error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::failure("INTERNAL_ERROR", "Internal server error"),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
