//! Argon2id password hashing and verification.
//!
//! All password hashes use the Argon2id variant with a cryptographically random
//! salt generated via [`OsRng`]. The PHC string format is used for storage so
//! that algorithm parameters and salt are embedded in the hash itself.
//!
//! Argon2 is CPU and memory heavy, so request paths go through
//! [`hash_offloaded`] and [`verify_offloaded`], which run the work on the
//! blocking thread pool instead of a runtime worker.

use std::sync::OnceLock;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::error::{AppError, AppResult};

/// Throwaway hash verified against when a username does not exist, so a
/// miss costs the same Argon2 work as a wrong password.
static DUMMY_HASH: OnceLock<String> = OnceLock::new();

/// Hash a plaintext password using Argon2id with a random salt.
///
/// Returns the PHC-formatted hash string (includes algorithm, params, salt, and hash).
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC-formatted Argon2id hash.
///
/// Returns `Ok(true)` if the password matches, `Ok(false)` if it does not.
/// Only a malformed stored hash produces `Err`.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Hash `password` on the blocking pool.
pub async fn hash_offloaded(password: String) -> AppResult<String> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {e}")))?
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))
}

/// Verify `password` against a stored PHC hash on the blocking pool.
pub async fn verify_offloaded(password: String, hash: String) -> AppResult<bool> {
    tokio::task::spawn_blocking(move || verify_password(&password, &hash))
        .await
        .map_err(|e| AppError::InternalError(format!("Password verification task failed: {e}")))?
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))
}

/// Spend one verification's worth of Argon2 work and discard the result.
///
/// Used on the unknown-username path to keep its latency in line with a
/// wrong-password attempt.
pub async fn verify_against_dummy(password: String) {
    let _ = tokio::task::spawn_blocking(move || {
        let hash = DUMMY_HASH.get_or_init(|| {
            hash_password("readrate-unknown-user").unwrap_or_default()
        });
        let _ = verify_password(&password, hash);
    })
    .await;
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("pw123").expect("hashing should succeed");

        assert!(
            hash.starts_with("$argon2id$"),
            "expected argon2id PHC prefix"
        );
        assert!(verify_password("pw123", &hash).expect("verify should succeed"));
    }

    #[test]
    fn test_wrong_password_fails() {
        let hash = hash_password("real-password").expect("hashing should succeed");
        let verified = verify_password("wrong-password", &hash).expect("verify should succeed");
        assert!(!verified, "wrong password should verify as false");
    }

    #[test]
    fn test_same_password_hashes_differently() {
        let a = hash_password("pw123").unwrap();
        let b = hash_password("pw123").unwrap();
        assert_ne!(a, b, "salts must differ between hashes");
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        assert!(verify_password("pw123", "not-a-phc-string").is_err());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn offloaded_verify_leaves_the_runtime_free() {
        let hash = hash_password("pw123").unwrap();

        let ticks = Arc::new(AtomicUsize::new(0));
        let ticker = {
            let ticks = Arc::clone(&ticks);
            tokio::spawn(async move {
                loop {
                    ticks.fetch_add(1, Ordering::Relaxed);
                    tokio::task::yield_now().await;
                }
            })
        };

        let verified = verify_offloaded("pw123".to_string(), hash).await.unwrap();
        ticker.abort();

        assert!(verified);
        assert!(
            ticks.load(Ordering::Relaxed) > 0,
            "other tasks must run while the hash is being checked"
        );
    }

    #[tokio::test]
    async fn offloaded_hash_round_trips() {
        let hash = hash_offloaded("hunter2".to_string()).await.unwrap();
        assert!(verify_offloaded("hunter2".to_string(), hash.clone()).await.unwrap());
        assert!(!verify_offloaded("hunter3".to_string(), hash).await.unwrap());
    }

    #[tokio::test]
    async fn dummy_verification_uses_a_real_argon2_hash() {
        verify_against_dummy("pw123".to_string()).await;

        let dummy = DUMMY_HASH.get().expect("dummy hash is built on first use");
        assert!(dummy.starts_with("$argon2id$"));
    }
}
