//! Handlers for user registration and per-user review listing.

use axum::extract::{Path, State};
use axum::Json;
use readrate_core::user::validate_registration;
use readrate_db::models::review::Review;
use readrate_db::models::user::CreateUser;
use readrate_db::repositories::{ReviewRepo, UserRepo};
use readrate_db::UQ_USERS_USERNAME;
use serde::Deserialize;

use super::conflict_on;
use crate::auth::password::hash_offloaded;
use crate::error::{AppError, AppResult};
use crate::extract::{parse_id, JsonBody};
use crate::response::{ItemsResponse, StatusResponse};
use crate::state::AppState;

/// Request body for `POST /register`. Missing fields bind as empty strings
/// so they fail the emptiness check with a 400.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// POST /register
///
/// Create a user. The password is hashed before it reaches the database and
/// is never echoed back.
pub async fn register(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<RegisterRequest>,
) -> AppResult<Json<StatusResponse>> {
    validate_registration(&input.username, &input.password)?;

    let password_hash = hash_offloaded(input.password).await?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: input.username,
            password_hash,
        },
    )
    .await
    .map_err(|e| conflict_on(e, UQ_USERS_USERNAME, || "username already exists".into()))?;

    tracing::info!(user_id = user.id, username = %user.username, "User registered");

    Ok(Json(StatusResponse::success("User registered successfully")))
}

/// GET /users/{user_id}/reviews
///
/// List a user's reviews, newest first. A user with no reviews is a 404.
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<ItemsResponse<Review>>> {
    let user_id = parse_id(&raw_id, "user")?;

    let items = ReviewRepo::list_by_user(&state.pool, user_id).await?;
    if items.is_empty() {
        return Err(AppError::NotFound(format!(
            "no reviews found by user ID {user_id}"
        )));
    }

    Ok(Json(ItemsResponse { items }))
}
