//! Route definitions for categories, mounted at `/categories`.

use axum::routing::get;
use axum::Router;

use crate::handlers::category;
use crate::state::AppState;

/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete
/// GET    /{id}/books    -> list_books
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(category::list).post(category::create))
        .route(
            "/{id}",
            get(category::get_by_id)
                .put(category::update)
                .delete(category::delete),
        )
        .route("/{id}/books", get(category::list_books))
}
