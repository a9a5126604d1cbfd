//! Route definitions for registration and user-scoped reads.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// ```text
/// POST /register                 -> register
/// GET  /users/{user_id}/reviews  -> list_reviews
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(user::register))
        .route("/users/{user_id}/reviews", get(user::list_reviews))
}
