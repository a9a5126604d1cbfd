//! Repository for the `books` table.

use readrate_core::types::DbId;
use sqlx::PgPool;

use crate::models::book::{Book, CreateBook, UpdateBook};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, image_url, release_year, price, total_page, \
                       thickness, category_id, created_at, created_by, modified_at, modified_by";

/// Provides CRUD operations for books.
pub struct BookRepo;

impl BookRepo {
    /// Insert a new book, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateBook) -> Result<Book, sqlx::Error> {
        let query = format!(
            "INSERT INTO books
                (title, description, image_url, release_year, price, total_page,
                 thickness, category_id, created_by, modified_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(input.release_year)
            .bind(input.price)
            .bind(input.total_page)
            .bind(&input.thickness)
            .bind(input.category_id)
            .bind(input.created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a book by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Book>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM books WHERE id = $1");
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all books in insertion order. Empty when none exist.
    pub async fn list(pool: &PgPool) -> Result<Vec<Book>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM books ORDER BY id");
        sqlx::query_as::<_, Book>(&query).fetch_all(pool).await
    }

    /// List the books filed under a category, in insertion order.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<Book>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM books WHERE category_id = $1 ORDER BY id");
        sqlx::query_as::<_, Book>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// Replace every mutable field of a book and stamp `modified_at`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBook,
    ) -> Result<Option<Book>, sqlx::Error> {
        let query = format!(
            "UPDATE books SET
                title = $2,
                description = $3,
                image_url = $4,
                release_year = $5,
                price = $6,
                total_page = $7,
                thickness = $8,
                category_id = $9,
                modified_by = $10,
                modified_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(input.release_year)
            .bind(input.price)
            .bind(input.total_page)
            .bind(&input.thickness)
            .bind(input.category_id)
            .bind(input.modified_by)
            .fetch_optional(pool)
            .await
    }

    /// Delete a book (its reviews cascade). Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
