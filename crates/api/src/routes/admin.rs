//! Route definitions for the admin console backend.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`. All of them require the admin role.
///
/// ```text
/// GET /users             -> list_users
/// PUT /users/{id}/role   -> update_role
/// GET /stats             -> stats
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(admin::list_users))
        .route("/users/{id}/role", put(admin::update_role))
        .route("/stats", get(admin::stats))
}
