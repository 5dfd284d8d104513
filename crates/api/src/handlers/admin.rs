//! Handlers for the `/admin` resource (user management + fleet stats).
//!
//! Everything here requires the `admin` role via [`RequireAdmin`].

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use gcrental_core::error::CoreError;
use gcrental_core::roles::{ROLE_ADMIN, ROLE_USER};
use gcrental_core::types::DbId;
use gcrental_core::validation::FieldIssue;
use gcrental_db::models::booking::BookingWithCar;
use gcrental_db::models::user::UserResponse;
use gcrental_db::repositories::{BookingRepo, CarRepo, EnquiryRepo, UserRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// How many recent bookings the dashboard shows.
const RECENT_BOOKINGS: usize = 5;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `PUT /admin/users/{id}/role`.
#[derive(Debug, Deserialize)]
pub struct UpdateRoleRequest {
    pub role: String,
}

/// Dashboard statistics for the admin console.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetStats {
    pub total_cars: i64,
    pub available_cars: i64,
    pub active_bookings: i64,
    pub pending_bookings: i64,
    pub total_revenue: f64,
    pub total_enquiries: i64,
    pub recent_bookings: Vec<BookingWithCar>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/admin/users
///
/// List all users (password hashes never leave the repo layer).
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users.iter().map(UserResponse::from).collect()))
}

/// PUT /api/admin/users/{id}/role
///
/// Change a user's role. Only the known role names are accepted.
pub async fn update_role(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRoleRequest>,
) -> AppResult<impl IntoResponse> {
    if input.role != ROLE_ADMIN && input.role != ROLE_USER {
        return Err(AppError::validation(
            "Invalid role",
            vec![FieldIssue::new(
                "role",
                format!("unknown role: {:?}", input.role),
            )],
        ));
    }

    let user = UserRepo::update_role(&state.pool, id, &input.role)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    tracing::info!(user_id = user.id, role = %user.role, "User role changed");
    Ok(Json(UserResponse::from(&user)))
}

/// GET /api/admin/stats
///
/// Aggregate fleet statistics for the dashboard.
pub async fn stats(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<FleetStats>> {
    let total_cars = CarRepo::count(&state.pool).await?;
    let available_cars = CarRepo::count_available(&state.pool).await?;
    let active_bookings = BookingRepo::count_by_status(&state.pool, "active").await?;
    let pending_bookings = BookingRepo::count_by_status(&state.pool, "pending").await?;
    let total_revenue = BookingRepo::total_revenue(&state.pool).await?;
    let total_enquiries = EnquiryRepo::count(&state.pool).await?;

    let mut recent_bookings = BookingRepo::list_with_car(&state.pool).await?;
    recent_bookings.truncate(RECENT_BOOKINGS);

    Ok(Json(FleetStats {
        total_cars,
        available_cars,
        active_bookings,
        pending_bookings,
        total_revenue,
        total_enquiries,
        recent_bookings,
    }))
}
