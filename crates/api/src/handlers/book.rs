//! Handlers for the `/books` resource.
//!
//! `thickness` is derived from `total_page` on every write; any value the
//! client sends for it is ignored during deserialization.

use axum::extract::{Path, State};
use axum::Json;
use readrate_core::book::{derive_thickness, validate_release_year};
use readrate_core::error::CoreError;
use readrate_core::types::DbId;
use readrate_db::models::book::{Book, CreateBook, UpdateBook};
use readrate_db::repositories::BookRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{parse_id, JsonBody};
use crate::middleware::auth::AuthUser;
use crate::response::{ItemResponse, ItemsResponse, StatusResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /books` and `PUT /books/{id}`.
///
/// Omitted fields bind as zero values, so a missing `release_year` fails the
/// range check and a missing `total_page` derives `tipis`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BookRequest {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub release_year: i32,
    pub price: i64,
    pub total_page: i32,
    pub category_id: DbId,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /books
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ItemsResponse<Book>>> {
    let items = BookRepo::list(&state.pool).await?;
    Ok(Json(ItemsResponse { items }))
}

/// GET /books/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<ItemResponse<Book>>> {
    let id = parse_id(&raw_id, "book")?;
    let item = BookRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Book", id }))?;
    Ok(Json(ItemResponse { item }))
}

/// POST /books
pub async fn create(
    user: AuthUser,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<BookRequest>,
) -> AppResult<Json<StatusResponse>> {
    validate_release_year(input.release_year)?;

    let book = BookRepo::create(
        &state.pool,
        &CreateBook {
            thickness: derive_thickness(input.total_page).to_string(),
            title: input.title,
            description: input.description,
            image_url: input.image_url,
            release_year: input.release_year,
            price: input.price,
            total_page: input.total_page,
            category_id: input.category_id,
            created_by: user.user_id,
        },
    )
    .await?;

    tracing::info!(
        book_id = book.id,
        thickness = %book.thickness,
        user_id = user.user_id,
        "Book created",
    );

    Ok(Json(StatusResponse::success("Book created successfully")))
}

/// PUT /books/{id}
pub async fn update(
    user: AuthUser,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    JsonBody(input): JsonBody<BookRequest>,
) -> AppResult<Json<StatusResponse>> {
    let id = parse_id(&raw_id, "book")?;
    validate_release_year(input.release_year)?;

    BookRepo::update(
        &state.pool,
        id,
        &UpdateBook {
            thickness: derive_thickness(input.total_page).to_string(),
            title: input.title,
            description: input.description,
            image_url: input.image_url,
            release_year: input.release_year,
            price: input.price,
            total_page: input.total_page,
            category_id: input.category_id,
            modified_by: user.user_id,
        },
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound { entity: "Book", id }))?;

    tracing::info!(book_id = id, user_id = user.user_id, "Book updated");

    Ok(Json(StatusResponse::success("Book updated successfully")))
}

/// DELETE /books/{id}
pub async fn delete(
    user: AuthUser,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<StatusResponse>> {
    let id = parse_id(&raw_id, "book")?;

    if !BookRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "Book", id }));
    }

    tracing::info!(book_id = id, user_id = user.user_id, "Book deleted");

    Ok(Json(StatusResponse::success("Book deleted successfully")))
}
