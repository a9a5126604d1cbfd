//! Review entity model and DTOs.

use readrate_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `reviews` table.
///
/// At most one review exists per `(book_id, user_id)` pair.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub id: DbId,
    pub book_id: DbId,
    pub user_id: DbId,
    pub rating: i32,
    pub comment: String,
    pub created_at: Timestamp,
    pub created_by: DbId,
    pub modified_at: Timestamp,
    pub modified_by: DbId,
}

/// DTO for inserting a review. The author is both `user_id` and creator.
#[derive(Debug)]
pub struct CreateReview {
    pub book_id: DbId,
    pub user_id: DbId,
    pub rating: i32,
    pub comment: String,
}

/// DTO for updating a review's rating and comment.
#[derive(Debug)]
pub struct UpdateReview {
    pub rating: i32,
    pub comment: String,
    pub modified_by: DbId,
}
