//! Contact-form enquiry model and DTO.
//!
//! Unlike cars, the enquiry wire format is snake_case; it matches what the
//! public contact form has always submitted.

use gcrental_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `enquiries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Enquiry {
    pub id: DbId,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub rental_duration: Option<String>,
    pub vehicle_interest: Option<String>,
    pub message: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for persisting a new enquiry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEnquiry {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub rental_duration: Option<String>,
    pub vehicle_interest: Option<String>,
    pub message: Option<String>,
}
