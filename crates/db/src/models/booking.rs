//! Booking entity model and DTOs.
//!
//! The `status` column is constrained by the migration CHECK and by the
//! transition rules in `gcrental_core::booking`; the row model keeps it as
//! text and leaves interpretation to the handlers.

use gcrental_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `bookings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: DbId,
    pub car_id: DbId,
    pub customer_name: String,
    pub customer_phone: String,
    pub start_date: String,
    pub end_date: String,
    pub total_cost: f64,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A booking enriched with the car it is for, as the admin console lists it.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingWithCar {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub booking: Booking,
    pub car_make: String,
    pub car_model: String,
}

/// DTO for inserting a new booking. `total_cost` is computed by the
/// handler from the car's weekly rate; bookings always start `pending`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBooking {
    pub car_id: DbId,
    pub customer_name: String,
    pub customer_phone: String,
    pub start_date: String,
    pub end_date: String,
    pub total_cost: f64,
}
