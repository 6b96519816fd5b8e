//! Admin authentication and listing handlers.

use axum::extract::State;
use axum::{Extension, Json};
use givebox_core::donations;
use tracing::{error, info, warn};

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::models::{DonationListResponse, LoginRequest, LoginResponse, MessageResponse};

/// `POST /api/admin/login` — exchange the admin password for a session
/// token.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    if body.password != state.config.admin_password {
        warn!("admin login rejected: wrong password");
        return Err(AppError::Unauthorized("Incorrect password".into()));
    }

    let token = state.sessions.issue();
    info!("admin session issued");
    Ok(Json(LoginResponse { token }))
}

/// `POST /api/admin/logout` — revoke the caller's session token.
pub async fn logout_handler(
    State(state): State<AppState>,
    Extension(session): Extension<AdminSession>,
) -> AppResult<Json<MessageResponse>> {
    state.sessions.revoke(&session.0);
    info!("admin session revoked");
    Ok(Json(MessageResponse {
        message: "Logged out successfully".into(),
    }))
}

/// `GET /api/admin/donations` — list every stored donation, newest
/// first.
pub async fn list_donations_handler(
    State(state): State<AppState>,
    Extension(_session): Extension<AdminSession>,
) -> AppResult<Json<DonationListResponse>> {
    let records = donations::list_all(&state.pool).await.map_err(|e| {
        error!(error = %e, "failed to fetch donations");
        AppError::Store("Error fetching records".into())
    })?;

    Ok(Json(DonationListResponse {
        donations: records.into_iter().map(Into::into).collect(),
    }))
}
