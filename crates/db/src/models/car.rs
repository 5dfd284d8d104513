//! Car entity model and DTOs.
//!
//! Wire names are camelCase (`weeklyRate`, `licensePlate`, ...) to match
//! what the marketing site and admin console consume; columns stay
//! snake_case. `available` is stored as SQLite 0/1 and is always a genuine
//! boolean by the time it leaves this crate.

use gcrental_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `cars` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: DbId,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub weekly_rate: f64,
    pub available: bool,
    pub license_plate: String,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new car.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCar {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub weekly_rate: f64,
    pub available: bool,
    pub license_plate: String,
    pub image_url: Option<String>,
}

/// DTO for a partial car update. Only non-`None` fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCar {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub weekly_rate: Option<f64>,
    pub available: Option<bool>,
    pub license_plate: Option<String>,
    pub image_url: Option<String>,
}
