pub mod books;
pub mod categories;
pub mod health;
pub mod reviews;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Read endpoints are public. Write endpoints take an
/// [`AuthUser`](crate::middleware::auth::AuthUser) extractor and reject
/// requests without valid Basic credentials.
///
/// ```text
/// POST   /register                     register (public)
/// GET    /users/{user_id}/reviews      reviews by user (public)
///
/// GET    /books                        list (public)
/// POST   /books                        create (auth)
/// GET    /books/{id}                   get (public)
/// PUT    /books/{id}                   update (auth)
/// DELETE /books/{id}                   delete (auth)
/// GET    /books/{id}/reviews           reviews for book (public)
/// POST   /books/{id}/reviews           create review (auth)
///
/// GET    /categories                   list (public)
/// POST   /categories                   create (auth)
/// GET    /categories/{id}              get (public)
/// PUT    /categories/{id}              update (auth)
/// DELETE /categories/{id}              delete (auth)
/// GET    /categories/{id}/books        books in category (public)
///
/// PUT    /reviews/{id}                 update own review (auth)
/// DELETE /reviews/{id}                 delete own review (auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(users::router())
        .nest("/books", books::router())
        .nest("/categories", categories::router())
        .nest("/reviews", reviews::router())
}
