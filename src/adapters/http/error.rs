//! API error type and its JSON body.
//!
//! Every handler returns `Result<_, ApiError>`. Domain errors convert by
//! code; extractor rejections convert to `BAD_REQUEST` (or `NOT_FOUND` for
//! unparseable path ids, which never match a record).

use std::collections::BTreeMap;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Field-level messages for validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn validation(message: impl Into<String>, details: &BTreeMap<String, Vec<String>>) -> Self {
        Self {
            code: "VALIDATION_FAILED".to_string(),
            message: message.into(),
            details: serde_json::to_value(details).ok(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn request_timeout() -> Self {
        Self {
            code: "REQUEST_TIMEOUT".to_string(),
            message: "Request took too long to complete".to_string(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

/// API error type for all portfolio endpoints.
#[derive(Debug)]
pub enum ApiError {
    /// Missing or malformed query parameter or body (400)
    BadRequest(String),
    /// Field-level validation failure (400)
    Validation {
        message: String,
        details: BTreeMap<String, Vec<String>>,
    },
    /// Unknown record (404)
    NotFound(String),
    /// Request exceeded the configured timeout (408)
    Timeout,
    /// Storage or other internal failure (500, logged)
    Internal(String),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => ApiError::Validation {
                message: err.message,
                details: err.details,
            },
            ErrorCode::NotFound => ApiError::NotFound(err.message),
            ErrorCode::DatabaseError | ErrorCode::InternalError => ApiError::Internal(err.message),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::NotFound(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg)),
            ApiError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::validation(message, &details),
            ),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::not_found(msg)),
            ApiError::Timeout => (StatusCode::REQUEST_TIMEOUT, ErrorResponse::request_timeout()),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal("An internal error occurred"),
                )
            }
        };

        (status, Json(error)).into_response()
    }
}
