//! Admin gate — Bearer token extraction and session registry lookup.

use axum::http::header::AUTHORIZATION;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::AppState;
use crate::error::AppError;

/// Validated session token stored in request extensions.
///
/// Logout must revoke the token that authenticated the request, so the
/// gate passes the token through rather than just answering yes/no.
#[derive(Debug, Clone)]
pub struct AdminSession(pub String);

/// Axum middleware: extracts `Authorization: Bearer <token>`, checks it
/// against the session registry, and injects `AdminSession` into request
/// extensions.
///
/// A missing or malformed header is `401`; a well-formed token that the
/// registry does not recognize is `403`.
pub async fn require_admin(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Authorization token missing".into()))?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Authorization token missing".into()))?
        .to_string();

    if !state.sessions.is_valid(&token) {
        return Err(AppError::Forbidden("Invalid or expired token".into()));
    }

    request
        .extensions_mut()
        .insert(AdminSession(token));

    Ok(next.run(request).await)
}
