//! Repository for the `users` table.

use gcrental_core::types::{DbId, Timestamp};

use crate::models::user::{CreateUser, User};
use crate::{fmt_timestamp, DbPool, SQL_NOW};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, password_hash, role, is_active, \
                       last_login_at, failed_login_count, locked_until, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(pool: &DbPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (name, email, password_hash, role)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.role)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = ?1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email (case-sensitive).
    pub async fn find_by_email(pool: &DbPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = ?1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List all users, most recently created first.
    pub async fn list(pool: &DbPool) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, User>(&query).fetch_all(pool).await
    }

    /// Total number of user accounts.
    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await
    }

    /// Change a user's role. Returns the updated row, or `None` when the
    /// id matches nothing.
    pub async fn update_role(
        pool: &DbPool,
        id: DbId,
        role: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET role = ?2, updated_at = {SQL_NOW}
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(role)
            .fetch_optional(pool)
            .await
    }

    /// Record a successful login: reset the failure counter, clear any
    /// lock, stamp `last_login_at`.
    pub async fn record_successful_login(pool: &DbPool, id: DbId) -> Result<(), sqlx::Error> {
        let query = format!(
            "UPDATE users SET failed_login_count = 0, locked_until = NULL,
                last_login_at = {SQL_NOW}, updated_at = {SQL_NOW}
             WHERE id = ?1"
        );
        sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(())
    }

    /// Increment the consecutive-failure counter after a bad password.
    pub async fn increment_failed_login(pool: &DbPool, id: DbId) -> Result<(), sqlx::Error> {
        let query = format!(
            "UPDATE users SET failed_login_count = failed_login_count + 1,
                updated_at = {SQL_NOW}
             WHERE id = ?1"
        );
        sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(())
    }

    /// Lock the account until the given instant.
    pub async fn lock_account(
        pool: &DbPool,
        id: DbId,
        until: Timestamp,
    ) -> Result<(), sqlx::Error> {
        let query =
            format!("UPDATE users SET locked_until = ?2, updated_at = {SQL_NOW} WHERE id = ?1");
        sqlx::query(&query)
            .bind(id)
            .bind(fmt_timestamp(until))
            .execute(pool)
            .await?;
        Ok(())
    }
}
