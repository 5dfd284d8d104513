//! Route definitions for the car fleet.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::cars;
use crate::state::AppState;

/// Routes mounted at `/cars`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// PATCH  /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cars::list).post(cars::create))
        .route("/{id}", patch(cars::update).delete(cars::delete))
}
