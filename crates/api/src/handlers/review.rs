//! Handlers for book reviews.
//!
//! Any authenticated user may review a book once. Only the author of a
//! review may update or delete it; the ownership check runs against the
//! stored row before the mutation is issued.

use axum::extract::{Path, State};
use axum::Json;
use readrate_core::error::CoreError;
use readrate_core::review::validate_rating;
use readrate_core::types::DbId;
use readrate_db::models::review::{CreateReview, Review, UpdateReview};
use readrate_db::repositories::ReviewRepo;
use readrate_db::{DbPool, UQ_REVIEWS_BOOK_USER};
use serde::Deserialize;

use super::conflict_on;
use crate::error::{AppError, AppResult};
use crate::extract::{parse_id, JsonBody};
use crate::middleware::auth::AuthUser;
use crate::response::{ItemsResponse, StatusResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for creating or updating a review.
#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    pub rating: i32,
    #[serde(default)]
    pub comment: String,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn review_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Review",
        id,
    })
}

/// Load a review and confirm `user` wrote it.
///
/// Missing reviews are 404; reviews by someone else are 403 with a message
/// naming the attempted `action`.
async fn find_owned_review(
    pool: &DbPool,
    id: DbId,
    user: &AuthUser,
    action: &str,
) -> AppResult<Review> {
    let review = ReviewRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| review_not_found(id))?;

    if review.user_id != user.user_id {
        tracing::warn!(
            review_id = id,
            owner_id = review.user_id,
            user_id = user.user_id,
            "Review ownership check failed",
        );
        return Err(AppError::Core(CoreError::Forbidden(format!(
            "You are not authorized to {action} this review"
        ))));
    }

    Ok(review)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /books/{id}/reviews
///
/// List a book's reviews, newest first. A book with no reviews is a 404.
pub async fn list_for_book(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<ItemsResponse<Review>>> {
    let book_id = parse_id(&raw_id, "book")?;

    let items = ReviewRepo::list_by_book(&state.pool, book_id).await?;
    if items.is_empty() {
        return Err(AppError::NotFound(format!(
            "no reviews found for book ID {book_id}"
        )));
    }

    Ok(Json(ItemsResponse { items }))
}

/// POST /books/{id}/reviews
pub async fn create(
    user: AuthUser,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    JsonBody(input): JsonBody<ReviewRequest>,
) -> AppResult<Json<StatusResponse>> {
    let book_id = parse_id(&raw_id, "book")?;
    validate_rating(input.rating)?;

    let review = ReviewRepo::create(
        &state.pool,
        &CreateReview {
            book_id,
            user_id: user.user_id,
            rating: input.rating,
            comment: input.comment,
        },
    )
    .await
    .map_err(|e| {
        conflict_on(e, UQ_REVIEWS_BOOK_USER, || {
            format!(
                "user {} has already reviewed book {book_id}",
                user.user_id
            )
        })
    })?;

    tracing::info!(
        review_id = review.id,
        book_id,
        user_id = user.user_id,
        rating = review.rating,
        "Review created",
    );

    Ok(Json(StatusResponse::success("Review created successfully")))
}

/// PUT /reviews/{id}
pub async fn update(
    user: AuthUser,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    JsonBody(input): JsonBody<ReviewRequest>,
) -> AppResult<Json<StatusResponse>> {
    let id = parse_id(&raw_id, "review")?;
    validate_rating(input.rating)?;

    find_owned_review(&state.pool, id, &user, "update").await?;

    ReviewRepo::update(
        &state.pool,
        id,
        &UpdateReview {
            rating: input.rating,
            comment: input.comment,
            modified_by: user.user_id,
        },
    )
    .await?
    .ok_or_else(|| review_not_found(id))?;

    tracing::info!(review_id = id, user_id = user.user_id, "Review updated");

    Ok(Json(StatusResponse::success("Review updated successfully")))
}

/// DELETE /reviews/{id}
pub async fn delete(
    user: AuthUser,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<StatusResponse>> {
    let id = parse_id(&raw_id, "review")?;

    find_owned_review(&state.pool, id, &user, "delete").await?;

    if !ReviewRepo::delete(&state.pool, id).await? {
        return Err(review_not_found(id));
    }

    tracing::info!(review_id = id, user_id = user.user_id, "Review deleted");

    Ok(Json(StatusResponse::success("Review deleted successfully")))
}
