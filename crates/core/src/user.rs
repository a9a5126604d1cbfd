//! Registration input rules.

use crate::error::CoreError;

/// Reject registrations with an empty username or password.
pub fn validate_registration(username: &str, password: &str) -> Result<(), CoreError> {
    if username.is_empty() || password.is_empty() {
        return Err(CoreError::Validation(
            "Username and password cannot be empty".into(),
        ));
    }
    Ok(())
}
