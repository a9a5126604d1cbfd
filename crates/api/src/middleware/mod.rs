//! Authentication extractors.
//!
//! - [`auth::AuthUser`] -- Resolves and verifies HTTP Basic credentials.

pub mod auth;
