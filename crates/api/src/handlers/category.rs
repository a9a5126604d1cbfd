//! Handlers for the `/categories` resource.

use axum::extract::{Path, State};
use axum::Json;
use readrate_core::error::CoreError;
use readrate_db::models::book::Book;
use readrate_db::models::category::{Category, CreateCategory, UpdateCategory};
use readrate_db::repositories::{BookRepo, CategoryRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{parse_id, JsonBody};
use crate::middleware::auth::AuthUser;
use crate::response::{ItemResponse, ItemsResponse, StatusResponse};
use crate::state::AppState;

/// Request body for `POST /categories` and `PUT /categories/{id}`.
#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    pub name: String,
}

/// GET /categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ItemsResponse<Category>>> {
    let items = CategoryRepo::list(&state.pool).await?;
    Ok(Json(ItemsResponse { items }))
}

/// GET /categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<ItemResponse<Category>>> {
    let id = parse_id(&raw_id, "category")?;
    let item = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;
    Ok(Json(ItemResponse { item }))
}

/// GET /categories/{id}/books
///
/// A category with no books answers 404 rather than an empty list.
pub async fn list_books(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<ItemsResponse<Book>>> {
    let id = parse_id(&raw_id, "category")?;

    let items = BookRepo::list_by_category(&state.pool, id).await?;
    if items.is_empty() {
        return Err(AppError::NotFound(format!(
            "no book found under category ID {id}"
        )));
    }

    Ok(Json(ItemsResponse { items }))
}

/// POST /categories
pub async fn create(
    user: AuthUser,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CategoryRequest>,
) -> AppResult<Json<StatusResponse>> {
    let category = CategoryRepo::create(
        &state.pool,
        &CreateCategory {
            name: input.name,
            created_by: user.user_id,
        },
    )
    .await?;

    tracing::info!(
        category_id = category.id,
        name = %category.name,
        user_id = user.user_id,
        "Category created",
    );

    Ok(Json(StatusResponse::success("Category created successfully")))
}

/// PUT /categories/{id}
pub async fn update(
    user: AuthUser,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    JsonBody(input): JsonBody<CategoryRequest>,
) -> AppResult<Json<StatusResponse>> {
    let id = parse_id(&raw_id, "category")?;

    CategoryRepo::update(
        &state.pool,
        id,
        &UpdateCategory {
            name: input.name,
            modified_by: user.user_id,
        },
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Category",
        id,
    }))?;

    tracing::info!(category_id = id, user_id = user.user_id, "Category updated");

    Ok(Json(StatusResponse::success("Category updated successfully")))
}

/// DELETE /categories/{id}
pub async fn delete(
    user: AuthUser,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<StatusResponse>> {
    let id = parse_id(&raw_id, "category")?;

    if !CategoryRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }));
    }

    tracing::info!(category_id = id, user_id = user.user_id, "Category deleted");

    Ok(Json(StatusResponse::success("Category deleted successfully")))
}
