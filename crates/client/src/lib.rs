//! Client data-access layer for the gcrental API.
//!
//! Three pieces:
//! - [`http::ApiClient`] -- a thin wrapper over the HTTP verbs that always
//!   sends JSON and attaches a bearer token when asked to.
//! - [`store::TokenStore`] -- persistent storage for the token/user pair
//!   (a JSON file standing in for the browser's local storage).
//! - [`session::AuthSession`] -- the login/refresh/logout lifecycle on
//!   top of both.
//!
//! The wrapper deliberately does NOT retry, cache, or deduplicate
//! in-flight requests; a call either resolves or fails once.

pub mod error;
pub mod http;
pub mod session;
pub mod store;

pub use error::ClientError;
pub use http::{ApiClient, Auth};
pub use session::AuthSession;
pub use store::{FileTokenStore, MemoryTokenStore, StoredAuth, StoredUser, TokenStore};
