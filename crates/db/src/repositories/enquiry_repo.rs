//! Repository for the `enquiries` table.

use crate::models::enquiry::{CreateEnquiry, Enquiry};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, phone, email, rental_duration, vehicle_interest, message, created_at";

/// Provides persistence for contact-form enquiries.
pub struct EnquiryRepo;

impl EnquiryRepo {
    /// Insert a new enquiry, returning the created row.
    pub async fn create(pool: &DbPool, input: &CreateEnquiry) -> Result<Enquiry, sqlx::Error> {
        let query = format!(
            "INSERT INTO enquiries (name, phone, email, rental_duration, vehicle_interest, message)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enquiry>(&query)
            .bind(&input.name)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.rental_duration)
            .bind(&input.vehicle_interest)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// List all enquiries, newest first.
    pub async fn list(pool: &DbPool) -> Result<Vec<Enquiry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM enquiries ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Enquiry>(&query).fetch_all(pool).await
    }

    /// Total number of enquiries received.
    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM enquiries")
            .fetch_one(pool)
            .await
    }
}
