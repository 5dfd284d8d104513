//! Shared domain types for the gcrental workspace.
//!
//! Nothing in this crate touches the network or the database; it holds the
//! types both the server and the client library agree on.

pub mod booking;
pub mod error;
pub mod roles;
pub mod types;
pub mod validation;
