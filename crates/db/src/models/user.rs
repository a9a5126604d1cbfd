//! User entity model and DTOs.

use readrate_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash and deliberately does not implement
/// `Serialize`, so it can never be written into a response body.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub password_hash: String,
    pub created_at: Timestamp,
    pub created_by: DbId,
    pub modified_at: Timestamp,
    pub modified_by: DbId,
}

/// DTO for registering a new user. The password must already be hashed.
#[derive(Debug)]
pub struct CreateUser {
    pub username: String,
    pub password_hash: String,
}
