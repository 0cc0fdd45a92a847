// SPDX-License-Identifier: MIT
// Copyright 2026 Wanderly contributors

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Caller input rejected before any network call.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Credential grant against the activities auth endpoint failed.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Non-2xx status or connection failure.
    #[error("Upstream request failed: {0}")]
    Transport(String),

    /// Response body did not match the expected schema.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Whether this failure came from the token grant.
    ///
    /// Auth failures are shown to users as a modal alert; every other
    /// failure becomes an inline message.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, AppError::Auth(_))
    }
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "validation_error", Some(msg.clone()))
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", Some(msg.clone())),
            AppError::Auth(msg) => {
                tracing::warn!(error = %msg, "Upstream authentication failed");
                (StatusCode::BAD_GATEWAY, "auth_error", None)
            }
            AppError::Transport(msg) => {
                (StatusCode::BAD_GATEWAY, "upstream_error", Some(msg.clone()))
            }
            AppError::Decode(msg) => (StatusCode::BAD_GATEWAY, "decode_error", Some(msg.clone())),
            AppError::Database(msg) => {
                tracing::error!(error = %msg, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, "database_error", None)
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None)
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

/// Result type alias for handlers and clients
pub type Result<T> = std::result::Result<T, AppError>;
