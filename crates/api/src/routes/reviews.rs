//! Route definitions for reviews, mounted at `/reviews`.

use axum::routing::put;
use axum::Router;

use crate::handlers::review;
use crate::state::AppState;

/// ```text
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", put(review::update).delete(review::delete))
}
