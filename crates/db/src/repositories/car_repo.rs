//! Repository for the `cars` table.

use gcrental_core::types::DbId;

use crate::models::car::{Car, CreateCar, UpdateCar};
use crate::{DbPool, SQL_NOW};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, make, model, year, weekly_rate, available, \
                       license_plate, image_url, created_at, updated_at";

/// Provides CRUD operations for cars.
pub struct CarRepo;

impl CarRepo {
    /// Insert a new car, returning the created row.
    ///
    /// Fails with a unique violation when the license plate is already
    /// taken; callers classify that into a conflict response.
    pub async fn create(pool: &DbPool, input: &CreateCar) -> Result<Car, sqlx::Error> {
        let query = format!(
            "INSERT INTO cars (make, model, year, weekly_rate, available, license_plate, image_url)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Car>(&query)
            .bind(&input.make)
            .bind(&input.model)
            .bind(input.year)
            .bind(input.weekly_rate)
            .bind(input.available)
            .bind(&input.license_plate)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// Find a car by internal ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Car>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cars WHERE id = ?1");
        sqlx::query_as::<_, Car>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List cars, optionally filtered by availability.
    pub async fn list(pool: &DbPool, available: Option<bool>) -> Result<Vec<Car>, sqlx::Error> {
        match available {
            Some(flag) => {
                let query = format!("SELECT {COLUMNS} FROM cars WHERE available = ?1 ORDER BY id");
                sqlx::query_as::<_, Car>(&query)
                    .bind(flag)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM cars ORDER BY id");
                sqlx::query_as::<_, Car>(&query).fetch_all(pool).await
            }
        }
    }

    /// Total number of cars in the fleet.
    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM cars")
            .fetch_one(pool)
            .await
    }

    /// Number of cars currently marked available.
    pub async fn count_available(pool: &DbPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM cars WHERE available = 1")
            .fetch_one(pool)
            .await
    }

    /// Update a car. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateCar,
    ) -> Result<Option<Car>, sqlx::Error> {
        let query = format!(
            "UPDATE cars SET
                make = COALESCE(?2, make),
                model = COALESCE(?3, model),
                year = COALESCE(?4, year),
                weekly_rate = COALESCE(?5, weekly_rate),
                available = COALESCE(?6, available),
                license_plate = COALESCE(?7, license_plate),
                image_url = COALESCE(?8, image_url),
                updated_at = {SQL_NOW}
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Car>(&query)
            .bind(id)
            .bind(&input.make)
            .bind(&input.model)
            .bind(input.year)
            .bind(input.weekly_rate)
            .bind(input.available)
            .bind(&input.license_plate)
            .bind(&input.image_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a car. Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cars WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
