//! Route definitions for books, mounted at `/books`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{book, review};
use crate::state::AppState;

/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete
/// GET    /{id}/reviews  -> review::list_for_book
/// POST   /{id}/reviews  -> review::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(book::list).post(book::create))
        .route(
            "/{id}",
            get(book::get_by_id).put(book::update).delete(book::delete),
        )
        .route(
            "/{id}/reviews",
            get(review::list_for_book).post(review::create),
        )
}
