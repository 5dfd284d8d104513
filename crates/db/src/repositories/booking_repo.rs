//! Repository for the `bookings` table.

use gcrental_core::types::DbId;

use crate::models::booking::{Booking, BookingWithCar, CreateBooking};
use crate::{DbPool, SQL_NOW};

/// Column list for the `bookings` table.
const COLUMNS: &str = "id, car_id, customer_name, customer_phone, start_date, end_date, \
                       total_cost, status, created_at, updated_at";

/// Column list for bookings joined with the car they are for.
const JOINED_COLUMNS: &str = "b.id, b.car_id, b.customer_name, b.customer_phone, b.start_date, \
                              b.end_date, b.total_cost, b.status, b.created_at, b.updated_at, \
                              c.make AS car_make, c.model AS car_model";

/// Provides CRUD operations and fleet statistics for bookings.
pub struct BookingRepo;

impl BookingRepo {
    /// Insert a new booking in `pending` status, returning the created row.
    pub async fn create(pool: &DbPool, input: &CreateBooking) -> Result<Booking, sqlx::Error> {
        let query = format!(
            "INSERT INTO bookings (car_id, customer_name, customer_phone, start_date, end_date, total_cost)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(input.car_id)
            .bind(&input.customer_name)
            .bind(&input.customer_phone)
            .bind(&input.start_date)
            .bind(&input.end_date)
            .bind(input.total_cost)
            .fetch_one(pool)
            .await
    }

    /// Find a booking by internal ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = ?1");
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all bookings with their car, newest first.
    pub async fn list_with_car(pool: &DbPool) -> Result<Vec<BookingWithCar>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM bookings b
             JOIN cars c ON c.id = b.car_id
             ORDER BY b.created_at DESC, b.id DESC"
        );
        sqlx::query_as::<_, BookingWithCar>(&query)
            .fetch_all(pool)
            .await
    }

    /// List bookings in any of the given statuses, with their car.
    ///
    /// Used by the admin "rentals" view (`active` + `completed`).
    pub async fn list_with_car_by_statuses(
        pool: &DbPool,
        statuses: &[&str],
    ) -> Result<Vec<BookingWithCar>, sqlx::Error> {
        // SQLite has no array binds; build one placeholder per status.
        let placeholders: Vec<String> =
            (1..=statuses.len()).map(|n| format!("?{n}")).collect();
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM bookings b
             JOIN cars c ON c.id = b.car_id
             WHERE b.status IN ({})
             ORDER BY b.created_at DESC, b.id DESC",
            placeholders.join(", ")
        );
        let mut q = sqlx::query_as::<_, BookingWithCar>(&query);
        for status in statuses {
            q = q.bind(*status);
        }
        q.fetch_all(pool).await
    }

    /// Update a booking's status. Returns the updated row, or `None` when
    /// the id matches nothing. Transition legality is the caller's job.
    pub async fn set_status(
        pool: &DbPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!(
            "UPDATE bookings SET status = ?2, updated_at = {SQL_NOW}
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Number of bookings in the given status.
    pub async fn count_by_status(pool: &DbPool, status: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM bookings WHERE status = ?1")
            .bind(status)
            .fetch_one(pool)
            .await
    }

    /// Revenue realized from bookings that reached `active` or `completed`.
    pub async fn total_revenue(pool: &DbPool) -> Result<f64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COALESCE(SUM(total_cost), 0.0) FROM bookings
             WHERE status IN ('active', 'completed')",
        )
        .fetch_one(pool)
        .await
    }
}
