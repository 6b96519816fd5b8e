//! Application error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::MessageResponse;

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors with HTTP status mapping.
///
/// Each variant carries the coarse client-facing message; failure detail
/// is logged at the point of failure and never surfaced to callers. The
/// response body is always `{"message": <text>}`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Required field missing on a write. The wire contract surfaces
    /// write failures generically, so this maps to 500 rather than 400.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Missing or malformed credential.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Well-formed credential that is not currently valid.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Store read/write failure.
    #[error("Store error: {0}")]
    Store(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(m) => (StatusCode::INTERNAL_SERVER_ERROR, m),
            AppError::Unauthorized(m) => (StatusCode::UNAUTHORIZED, m),
            AppError::Forbidden(m) => (StatusCode::FORBIDDEN, m),
            AppError::Store(m) => (StatusCode::INTERNAL_SERVER_ERROR, m),
        };
        (status, Json(MessageResponse { message })).into_response()
    }
}
