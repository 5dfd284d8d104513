//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// The car listing's tri-state availability filter (`?available=`).
///
/// Kept as the raw token so the handler can reject unrecognized values
/// with a field-level issue instead of a generic deserialization error.
#[derive(Debug, Deserialize)]
pub struct AvailabilityParams {
    pub available: Option<String>,
}
