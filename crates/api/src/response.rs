//! Shared response envelope types for API handlers.

use gcrental_core::types::DbId;
use serde::Serialize;

/// `{ "count": N, "data": [...] }` envelope used by the car listing.
#[derive(Debug, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub count: usize,
    pub data: Vec<T>,
}

/// `{ "data": ... }` envelope for single-entity responses.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Confirmation payload for creations: a message plus the new row's id.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
    pub id: DbId,
}

/// Bare confirmation message (enquiries, updates).
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
