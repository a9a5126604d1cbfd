//! Repository for the `reviews` table.

use readrate_core::types::DbId;
use sqlx::PgPool;

use crate::models::review::{CreateReview, Review, UpdateReview};

const COLUMNS: &str = "id, book_id, user_id, rating, comment, \
                       created_at, created_by, modified_at, modified_by";

/// Provides CRUD operations for reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a new review, returning the created row.
    ///
    /// A second review by the same user on the same book fails with a
    /// unique violation on [`crate::UQ_REVIEWS_BOOK_USER`].
    pub async fn create(pool: &PgPool, input: &CreateReview) -> Result<Review, sqlx::Error> {
        let query = format!(
            "INSERT INTO reviews (book_id, user_id, rating, comment, created_by, modified_by)
             VALUES ($1, $2, $3, $4, $2, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(input.book_id)
            .bind(input.user_id)
            .bind(input.rating)
            .bind(&input.comment)
            .fetch_one(pool)
            .await
    }

    /// Find a review by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reviews WHERE id = $1");
        sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List reviews for a book, newest first.
    pub async fn list_by_book(pool: &PgPool, book_id: DbId) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reviews WHERE book_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(book_id)
            .fetch_all(pool)
            .await
    }

    /// List reviews written by a user, newest first.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reviews WHERE user_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a review's rating and comment and stamp `modified_at`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateReview,
    ) -> Result<Option<Review>, sqlx::Error> {
        let query = format!(
            "UPDATE reviews SET
                rating = $2,
                comment = $3,
                modified_by = $4,
                modified_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .bind(input.rating)
            .bind(&input.comment)
            .bind(input.modified_by)
            .fetch_optional(pool)
            .await
    }

    /// Delete a review. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
