//! Handlers for the `/bookings` and `/rentals` resources.
//!
//! Anyone can request a booking; managing them is admin work. There is no
//! overlap/conflict resolution between bookings -- two customers can
//! request the same car for the same week and staff sort it out.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::NaiveDate;
use gcrental_core::booking::BookingStatus;
use gcrental_core::error::CoreError;
use gcrental_core::types::DbId;
use gcrental_core::validation::FieldIssue;
use gcrental_db::models::booking::CreateBooking;
use gcrental_db::repositories::{BookingRepo, CarRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /bookings`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub car_id: Option<DbId>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    /// ISO dates (`YYYY-MM-DD`).
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Request body for `PUT /bookings/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// Validated creation input: the car to book and the parsed date range.
struct ValidatedBooking {
    car_id: DbId,
    customer_name: String,
    customer_phone: String,
    start: NaiveDate,
    end: NaiveDate,
}

impl CreateBookingRequest {
    fn validated(self) -> Result<ValidatedBooking, AppError> {
        let mut issues = Vec::new();

        if self.car_id.is_none() {
            issues.push(FieldIssue::new("carId", "carId is required"));
        }
        for (field, value) in [
            ("customerName", &self.customer_name),
            ("customerPhone", &self.customer_phone),
        ] {
            match value {
                Some(v) if !v.trim().is_empty() => {}
                _ => issues.push(FieldIssue::new(field, format!("{field} is required"))),
            }
        }

        let start = parse_date(&mut issues, "startDate", self.start_date.as_deref());
        let end = parse_date(&mut issues, "endDate", self.end_date.as_deref());
        if let (Some(start), Some(end)) = (start, end) {
            if end <= start {
                issues.push(FieldIssue::new("endDate", "endDate must be after startDate"));
            }
        }

        match (self.car_id, self.customer_name, self.customer_phone, start, end) {
            (Some(car_id), Some(customer_name), Some(customer_phone), Some(start), Some(end))
                if issues.is_empty() =>
            {
                Ok(ValidatedBooking {
                    car_id,
                    customer_name,
                    customer_phone,
                    start,
                    end,
                })
            }
            _ => Err(AppError::validation("Invalid booking payload", issues)),
        }
    }
}

fn parse_date(issues: &mut Vec<FieldIssue>, field: &str, raw: Option<&str>) -> Option<NaiveDate> {
    match raw {
        None => {
            issues.push(FieldIssue::new(field, format!("{field} is required")));
            None
        }
        Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                issues.push(FieldIssue::new(
                    field,
                    format!("{field} must be an ISO date (YYYY-MM-DD)"),
                ));
                None
            }
        },
    }
}

/// Price a rental: whole weeks, rounded up, at the car's weekly rate.
fn rental_cost(weekly_rate: f64, start: NaiveDate, end: NaiveDate) -> f64 {
    let days = (end - start).num_days();
    let weeks = (days + 6) / 7;
    let weeks = weeks.max(1);
    weeks as f64 * weekly_rate
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/bookings
///
/// All bookings with their car, newest first.
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<impl IntoResponse> {
    let bookings = BookingRepo::list_with_car(&state.pool).await?;
    Ok(Json(bookings))
}

/// POST /api/bookings
///
/// Public booking request. The total cost is computed here from the
/// car's weekly rate; the booking starts in `pending`.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateBookingRequest>,
) -> AppResult<impl IntoResponse> {
    let validated = input.validated()?;

    let car = CarRepo::find_by_id(&state.pool, validated.car_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Car",
            id: validated.car_id,
        }))?;

    let dto = CreateBooking {
        car_id: car.id,
        customer_name: validated.customer_name,
        customer_phone: validated.customer_phone,
        start_date: validated.start.to_string(),
        end_date: validated.end.to_string(),
        total_cost: rental_cost(car.weekly_rate, validated.start, validated.end),
    };
    let booking = BookingRepo::create(&state.pool, &dto).await?;
    tracing::info!(booking_id = booking.id, car_id = car.id, "Booking requested");

    Ok((StatusCode::CREATED, Json(DataResponse { data: booking })))
}

/// PUT /api/bookings/{id}/status
///
/// Move a booking along its lifecycle. Unknown statuses are a 400;
/// transitions the state machine does not allow are a 409.
pub async fn update_status(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStatusRequest>,
) -> AppResult<impl IntoResponse> {
    let next = BookingStatus::parse(&input.status).ok_or_else(|| {
        AppError::validation(
            "Invalid booking status",
            vec![FieldIssue::new(
                "status",
                format!("unknown status: {:?}", input.status),
            )],
        )
    })?;

    let booking = BookingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))?;

    let current = BookingStatus::parse(&booking.status).ok_or_else(|| {
        AppError::InternalError(format!("corrupt booking status: {:?}", booking.status))
    })?;

    if !current.can_transition(next) {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Cannot move booking from {} to {}",
            current.as_str(),
            next.as_str()
        ))));
    }

    let updated = BookingRepo::set_status(&state.pool, id, next.as_str())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))?;
    Ok(Json(DataResponse { data: updated }))
}

/// GET /api/rentals/admin
///
/// The "rentals" view: bookings that have reached `active` or
/// `completed`.
pub async fn list_rentals(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<impl IntoResponse> {
    let rentals =
        BookingRepo::list_with_car_by_statuses(&state.pool, &["active", "completed"]).await?;
    Ok(Json(rentals))
}
