//! Donation domain models.
//!
//! These are internal domain models, distinct from the API wire DTOs
//! (which have `#[serde(rename_all = "camelCase")]` etc.).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A fully-validated donation as persisted in the store.
///
/// Card fields are stored exactly as submitted; no masking, no
/// validation. This is a simulated payment flow.
#[derive(Clone, Debug, FromRow, PartialEq, Serialize, Deserialize)]
pub struct DonationRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
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

/// An unvalidated donation submission.
///
/// Every field is optional at this stage; `donations::validate` turns a
/// submission into a `DonationRecord` or rejects it before any store
/// interaction. `timestamp` defaults to the submission time when absent.
#[derive(Clone, Debug, Default)]
pub struct DonationSubmission {
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
