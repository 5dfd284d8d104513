pub mod admin;
pub mod auth;
pub mod bookings;
pub mod cars;
pub mod enquiries;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /cars                      GET list (public, ?available=true|false)
///                            POST create (admin)
/// /cars/{id}                 PATCH partial update (admin)
///                            DELETE remove (admin)
///
/// /enquiries                 POST submit (public)
///                            GET list (admin)
///
/// /auth/login                POST login (public)
/// /auth/refresh              POST rotate refresh token (public)
/// /auth/logout               POST revoke sessions (requires auth)
///
/// /bookings                  GET list (admin)
///                            POST request booking (public)
/// /bookings/{id}/status      PUT transition status (admin)
/// /rentals/admin             GET active + completed bookings (admin)
///
/// /admin/users               GET list users (admin)
/// /admin/users/{id}/role     PUT change role (admin)
/// /admin/stats               GET dashboard statistics (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/cars", cars::router())
        .nest("/enquiries", enquiries::router())
        .nest("/auth", auth::router())
        .nest("/bookings", bookings::router())
        .nest("/rentals", bookings::rentals_router())
        .nest("/admin", admin::router())
}
