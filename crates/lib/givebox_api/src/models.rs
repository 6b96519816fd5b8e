//! Wire models (request/response DTOs).
//!
//! Field names are camelCase on the wire, distinct from the snake_case
//! domain models in `givebox_core::models`.

use chrono::{DateTime, Utc};
use givebox_core::models::donation::{DonationRecord, DonationSubmission};
use serde::{Deserialize, Serialize};

/// Generic `{"message": ...}` body used by acknowledgments and errors.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// `GET /` response.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// `POST /api/donations` request body.
///
/// Every field is optional at the wire level; presence is enforced by
/// the domain validation so a rejected submission never reaches the
/// store.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationRequest {
    pub timestamp: Option<DateTime<Utc>>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub country: Option<String>,
    pub amount: Option<f64>,
    pub card_number: Option<String>,
    pub card_expiry: Option<String>,
    pub card_cvc: Option<String>,
}

impl From<DonationRequest> for DonationSubmission {
    fn from(req: DonationRequest) -> Self {
        Self {
            timestamp: req.timestamp,
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            address: req.address,
            country: req.country,
            amount: req.amount,
            card_number: req.card_number,
            card_expiry: req.card_expiry,
            card_cvc: req.card_cvc,
        }
    }
}

/// `POST /api/admin/login` request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Defaulted so an absent password compares unequal instead of
    /// failing body extraction.
    #[serde(default)]
    pub password: String,
}

/// `POST /api/admin/login` success response.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// One donation as returned by the admin listing.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationInfo {
    pub id: String,
    pub timestamp: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub country: String,
    pub amount: f64,
    pub card_number: String,
    pub card_expiry: String,
    pub card_cvc: String,
}

impl From<DonationRecord> for DonationInfo {
    fn from(record: DonationRecord) -> Self {
        Self {
            id: record.id.to_string(),
            timestamp: record.created_at.to_rfc3339(),
            first_name: record.first_name,
            last_name: record.last_name,
            email: record.email,
            address: record.address,
            country: record.country,
            amount: record.amount,
            card_number: record.card_number,
            card_expiry: record.card_expiry,
            card_cvc: record.card_cvc,
        }
    }
}

/// `GET /api/admin/donations` response.
#[derive(Debug, Serialize, Deserialize)]
pub struct DonationListResponse {
    pub donations: Vec<DonationInfo>,
}
