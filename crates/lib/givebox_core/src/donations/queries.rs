//! Donation database queries.

use sqlx::PgPool;

use super::DonationError;
use crate::models::donation::DonationRecord;

/// Insert a complete donation record.
pub async fn insert_donation(pool: &PgPool, record: &DonationRecord) -> Result<(), DonationError> {
    sqlx::query(
        "INSERT INTO donations \
         (id, created_at, first_name, last_name, email, address, country, \
          amount, card_number, card_expiry, card_cvc) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
    )
    .bind(record.id)
    .bind(record.created_at)
    .bind(&record.first_name)
    .bind(&record.last_name)
    .bind(&record.email)
    .bind(&record.address)
    .bind(&record.country)
    .bind(record.amount)
    .bind(&record.card_number)
    .bind(&record.card_expiry)
    .bind(&record.card_cvc)
    .execute(pool)
    .await?;
    Ok(())
}

/// Fetch every donation, newest first.
pub async fn list_donations(pool: &PgPool) -> Result<Vec<DonationRecord>, DonationError> {
    let rows = sqlx::query_as::<_, DonationRecord>(
        "SELECT id, created_at, first_name, last_name, email, address, country, \
                amount, card_number, card_expiry, card_cvc \
         FROM donations \
         ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
