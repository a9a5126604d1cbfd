//! Request-binding helpers that report failures in the `{detail}` envelope.
//!
//! Axum's stock `Json` and `Path` rejections answer with plain-text bodies
//! (and 422 for JSON data errors); these wrappers turn them into
//! [`AppError::BadRequest`] instead.

use axum::extract::{FromRequest, Request};
use axum::Json;
use readrate_core::types::DbId;
use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};

/// JSON request body whose rejection is a 400 with the parser's message.
///
/// ```ignore
/// async fn create(JsonBody(input): JsonBody<CategoryRequest>) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(JsonBody(value))
    }
}

/// Parse a raw path segment into a [`DbId`].
///
/// `entity` names the resource in the error, e.g. `Invalid book ID`.
pub fn parse_id(raw: &str, entity: &str) -> AppResult<DbId> {
    raw.parse::<DbId>()
        .map_err(|_| AppError::BadRequest(format!("Invalid {entity} ID")))
}
