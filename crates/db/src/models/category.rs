//! Category entity model and DTOs.

use readrate_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub created_by: DbId,
    pub modified_at: Timestamp,
    pub modified_by: DbId,
}

/// DTO for creating a category. `created_by` is the acting user.
#[derive(Debug)]
pub struct CreateCategory {
    pub name: String,
    pub created_by: DbId,
}

/// DTO for renaming a category. `modified_by` is the acting user.
#[derive(Debug)]
pub struct UpdateCategory {
    pub name: String,
    pub modified_by: DbId,
}
