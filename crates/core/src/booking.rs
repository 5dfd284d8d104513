//! Booking status lifecycle.
//!
//! A booking moves through an explicit state machine; the handler rejects
//! any transition not listed here with a conflict error. There is no
//! availability/overlap resolution between bookings.

use serde::{Deserialize, Serialize};

/// Status of a booking, stored as lowercase text in `bookings.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Active,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Active => "active",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "pending" => Some(BookingStatus::Pending),
            "confirmed" => Some(BookingStatus::Confirmed),
            "active" => Some(BookingStatus::Active),
            "completed" => Some(BookingStatus::Completed),
            "cancelled" => Some(BookingStatus::Cancelled),
            _ => None,
        }
    }

    /// Whether a booking may move from `self` to `next`.
    ///
    /// ```text
    /// pending   -> confirmed | cancelled
    /// confirmed -> active    | cancelled
    /// active    -> completed | cancelled
    /// completed -> (terminal)
    /// cancelled -> (terminal)
    /// ```
    pub fn can_transition(&self, next: BookingStatus) -> bool {
        use BookingStatus::*;
        matches!(
            (self, next),
            (Pending, Confirmed)
                | (Pending, Cancelled)
                | (Confirmed, Active)
                | (Confirmed, Cancelled)
                | (Active, Completed)
                | (Active, Cancelled)
        )
    }
}
