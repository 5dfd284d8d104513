//! Role names stored in `users.role` and carried in JWT claims.

/// Full access: fleet management, bookings, users, reports.
pub const ROLE_ADMIN: &str = "admin";

/// Default role for accounts with no elevated access.
pub const ROLE_USER: &str = "user";
