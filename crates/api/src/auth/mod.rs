//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`basic`] -- HTTP Basic `Authorization` header decoding.

pub mod basic;
pub mod password;
