//! HTTP Basic authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use readrate_core::error::CoreError;
use readrate_core::types::DbId;
use readrate_db::repositories::UserRepo;

use crate::auth::basic::decode_basic;
use crate::auth::password::{verify_against_dummy, verify_offloaded};
use crate::error::AppError;
use crate::state::AppState;

/// Message for a request with no usable `Authorization` header.
const AUTH_REQUIRED: &str = "Authentication required";

/// Message for an unknown username or a wrong password. The two cases share
/// one message so responses do not reveal which usernames exist.
const INCORRECT_CREDENTIALS: &str = "Incorrect credentials";

/// Authenticated user resolved from an `Authorization: Basic` header.
///
/// Use this as an extractor parameter in any handler that requires authentication:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id.
    pub user_id: DbId,
    pub username: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let credentials = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(decode_basic)
            .ok_or_else(|| AppError::Core(CoreError::Unauthorized(AUTH_REQUIRED.into())))?;

        let Some(user) = UserRepo::find_by_username(&state.pool, &credentials.username).await?
        else {
            verify_against_dummy(credentials.password).await;
            tracing::warn!(username = %credentials.username, "Authentication failed: unknown user");
            return Err(incorrect_credentials());
        };

        let password_valid = verify_offloaded(credentials.password, user.password_hash).await?;

        if !password_valid {
            tracing::warn!(user_id = user.id, "Authentication failed: wrong password");
            return Err(incorrect_credentials());
        }

        Ok(AuthUser {
            user_id: user.id,
            username: user.username,
        })
    }
}

fn incorrect_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(INCORRECT_CREDENTIALS.into()))
}
