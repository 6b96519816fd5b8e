//! Liveness probe.

use axum::Json;

use crate::models::StatusResponse;

/// `GET /` — service status probe.
pub async fn status_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "live",
        message: "Givebox donation service is running",
    })
}
