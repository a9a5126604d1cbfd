//! Book entity model and DTOs.

use readrate_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `books` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Book {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub release_year: i32,
    pub price: i64,
    pub total_page: i32,
    /// Derived from `total_page`; see `readrate_core::book::derive_thickness`.
    pub thickness: String,
    pub category_id: DbId,
    pub created_at: Timestamp,
    pub created_by: DbId,
    pub modified_at: Timestamp,
    pub modified_by: DbId,
}

/// DTO for inserting a book. `thickness` must be derived by the caller.
#[derive(Debug)]
pub struct CreateBook {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub release_year: i32,
    pub price: i64,
    pub total_page: i32,
    pub thickness: String,
    pub category_id: DbId,
    pub created_by: DbId,
}

/// DTO for a full-record book update.
#[derive(Debug)]
pub struct UpdateBook {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub release_year: i32,
    pub price: i64,
    pub total_page: i32,
    pub thickness: String,
    pub category_id: DbId,
    pub modified_by: DbId,
}
