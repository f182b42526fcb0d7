//! Application error type mapping to HTTP status codes and the
//! `{"error": "..."}` envelope.
//!
//! Storage and provider failures are logged with their detail but answered
//! with a generic message so internals never reach the client. Ownership
//! failures surface as 404, never 403, so project existence does not leak.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use debugmate_types::error::ConversationError;
use debugmate_types::identity::IdentityError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Request failed validation (missing or malformed input).
    Validation(String),
    /// Authentication failure.
    Unauthorized,
    /// Resource missing or owned by another user.
    NotFound(String),
    /// Generic internal error.
    Internal(String),
}

impl From<ConversationError> for AppError {
    fn from(e: ConversationError) -> Self {
        match e {
            ConversationError::Validation(msg) => AppError::Validation(msg),
            ConversationError::NotFound(msg) => AppError::NotFound(msg),
            ConversationError::Repository(e) => AppError::Internal(e.to_string()),
            ConversationError::Provider(e) => AppError::Internal(e.to_string()),
        }
    }
}

impl From<IdentityError> for AppError {
    fn from(e: IdentityError) -> Self {
        match &e {
            IdentityError::Unauthenticated => {}
            IdentityError::Transport(detail) => {
                tracing::error!("identity verification transport failure: {detail}");
            }
            IdentityError::MalformedResponse(detail) => {
                tracing::error!("identity provider returned malformed response: {detail}");
            }
        }
        // Every identity failure answers the same way
        AppError::Unauthorized
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, "Unauthorized".to_string())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(detail) => {
                tracing::error!("internal error: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}
