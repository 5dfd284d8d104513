//! Route definitions for bookings and the rentals view.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::bookings;
use crate::state::AppState;

/// Routes mounted at `/bookings`.
///
/// ```text
/// GET  /              -> list (admin)
/// POST /              -> create (public)
/// PUT  /{id}/status   -> update_status (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(bookings::list).post(bookings::create))
        .route("/{id}/status", put(bookings::update_status))
}

/// Routes mounted at `/rentals`: the active/completed slice of bookings.
pub fn rentals_router() -> Router<AppState> {
    Router::new().route("/admin", get(bookings::list_rentals))
}
