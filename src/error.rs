// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
///
/// Every variant maps to a distinct status and error code so callers can
/// tell a capacity failure from a state-machine failure from a missing
/// entity. None of these are fatal to the process.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Authentication required")]
    Unauthorized,

    #[error("Insufficient privileges")]
    Forbidden,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Operation not valid for current state: {0}")]
    InvalidState(String),

    #[error("Insufficient seats available")]
    CapacityExceeded,

    #[error("Incompatible ride attributes: {0}")]
    Mismatch(String),

    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
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
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized", None),
            AppError::Forbidden => (StatusCode::FORBIDDEN, "forbidden", None),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", Some(msg.clone())),
            AppError::InvalidState(msg) => {
                (StatusCode::CONFLICT, "invalid_state", Some(msg.clone()))
            }
            AppError::CapacityExceeded => (StatusCode::CONFLICT, "capacity_exceeded", None),
            AppError::Mismatch(msg) => (StatusCode::CONFLICT, "mismatch", Some(msg.clone())),
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "validation_error", Some(msg.clone()))
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

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
