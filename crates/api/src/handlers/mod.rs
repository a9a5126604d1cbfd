//! Request handlers, one module per resource.
//!
//! Handlers are the only layer that knows about HTTP status codes and
//! response envelopes. Field validation happens here, before any
//! repository call.

pub mod book;
pub mod category;
pub mod health;
pub mod review;
pub mod user;

use crate::error::AppError;
use readrate_core::error::CoreError;

/// Turn a unique violation on `constraint` into a 409 carrying `message`.
/// Every other error is passed through for generic classification.
pub(crate) fn conflict_on(
    err: sqlx::Error,
    constraint: &str,
    message: impl FnOnce() -> String,
) -> AppError {
    match readrate_db::unique_violation(&err) {
        Some(violated) if violated == constraint => {
            AppError::Core(CoreError::Conflict(message()))
        }
        _ => AppError::Database(err),
    }
}
