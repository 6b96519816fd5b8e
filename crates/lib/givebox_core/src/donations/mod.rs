//! Donation intake and listing.
//!
//! Validation happens here, before any store interaction: a submission
//! either becomes a complete `DonationRecord` or is rejected with the
//! missing field named. No partial records reach the store.

pub mod queries;

use chrono::Utc;
use sqlx::PgPool;
use thiserror::Error;
use tracing::debug;

use crate::models::donation::{DonationRecord, DonationSubmission};
use crate::uuid::uuidv7;

/// Donation errors.
#[derive(Debug, Error)]
pub enum DonationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Require a text field to be present and non-empty.
///
/// Field names are the wire names, so rejections log what the caller
/// actually omitted.
fn require_text(field: &'static str, value: Option<String>) -> Result<String, DonationError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(DonationError::MissingField(field)),
    }
}

/// Validate a submission into a complete record.
///
/// Assigns a fresh UUIDv7 id and defaults the timestamp to the
/// submission time when the payload carries none.
pub fn validate(submission: DonationSubmission) -> Result<DonationRecord, DonationError> {
    let amount = submission
        .amount
        .ok_or(DonationError::MissingField("amount"))?;

    Ok(DonationRecord {
        id: uuidv7(),
        created_at: submission.timestamp.unwrap_or_else(Utc::now),
        first_name: require_text("firstName", submission.first_name)?,
        last_name: require_text("lastName", submission.last_name)?,
        email: require_text("email", submission.email)?,
        address: require_text("address", submission.address)?,
        country: require_text("country", submission.country)?,
        amount,
        card_number: require_text("cardNumber", submission.card_number)?,
        card_expiry: require_text("cardExpiry", submission.card_expiry)?,
        card_cvc: require_text("cardCvc", submission.card_cvc)?,
    })
}

/// Validate and persist one donation submission.
pub async fn create(pool: &PgPool, submission: DonationSubmission) -> Result<(), DonationError> {
    let record = validate(submission)?;
    queries::insert_donation(pool, &record).await?;
    debug!(id = %record.id, "donation stored");
    Ok(())
}

/// Return every stored donation, newest first. No pagination.
pub async fn list_all(pool: &PgPool) -> Result<Vec<DonationRecord>, DonationError> {
    queries::list_donations(pool).await
}
