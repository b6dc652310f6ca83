//! services/api/src/error.rs
//!
//! Defines the primary error type for the entire API service and how it is
//! rendered as an HTTP response.

use crate::config::ConfigError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use trivia_core::ports::PortError;
use tracing::{debug, error};
use utoipa::ToSchema;

/// The primary error type for the `api` service.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested page, search, category or route has no matching data.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The request is well-formed but semantically invalid.
    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    /// The request is structurally malformed.
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Represents an error that propagated up from the store port.
    #[error("Service Port Error: {0}")]
    Port(#[from] PortError),

    /// Represents an error from the underlying database library.
    #[error("Database Error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration Error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    /// Represents a standard Input/Output error (e.g., binding to a network socket).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A catch-all for any other unexpected errors.
    #[error("An unexpected internal error occurred: {0}")]
    Internal(String),
}

/// The JSON envelope sent with every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub success: bool,
    #[schema(example = 404)]
    pub error: u16,
    #[schema(example = "resource not found")]
    pub message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) | ApiError::Port(PortError::NotFound(_)) => {
                StatusCode::NOT_FOUND
            }
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Config(_)
            | ApiError::Port(PortError::Unexpected(_))
            | ApiError::Database(_)
            | ApiError::Migrate(_)
            | ApiError::Io(_)
            | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// The client-facing message for a status. Causes stay in the logs.
fn public_message(status: StatusCode) -> &'static str {
    match status {
        StatusCode::NOT_FOUND => "resource not found",
        StatusCode::UNPROCESSABLE_ENTITY => "unprocessable",
        StatusCode::BAD_REQUEST => "bad request",
        StatusCode::METHOD_NOT_ALLOWED => "method not allowed",
        _ => "internal server error",
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self);
        } else {
            debug!("Request rejected: {}", self);
        }
        let body = ErrorBody {
            success: false,
            error: status.as_u16(),
            message: public_message(status).to_string(),
        };
        (status, Json(body)).into_response()
    }
}
