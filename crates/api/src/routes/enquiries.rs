//! Route definitions for contact-form enquiries.

use axum::routing::get;
use axum::Router;

use crate::handlers::enquiries;
use crate::state::AppState;

/// Routes mounted at `/enquiries`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(enquiries::list).post(enquiries::create))
}
