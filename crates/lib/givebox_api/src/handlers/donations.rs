//! Public donation intake handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use givebox_core::donations::{self, DonationError};
use tracing::error;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{DonationRequest, MessageResponse};

/// `POST /api/donations` — accept a donation form submission.
///
/// Both a rejected submission and a store failure surface as the same
/// generic `500`; the distinction is only logged.
pub async fn create_donation_handler(
    State(state): State<AppState>,
    Json(body): Json<DonationRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    match donations::create(&state.pool, body.into()).await {
        Ok(()) => Ok((
            StatusCode::CREATED,
            Json(MessageResponse {
                message: "Donation received".into(),
            }),
        )),
        Err(e) => {
            error!(error = %e, "failed to save donation");
            Err(match e {
                DonationError::MissingField(_) => {
                    AppError::Validation("Error saving donation".into())
                }
                DonationError::Db(_) => AppError::Store("Error saving donation".into()),
            })
        }
    }
}
