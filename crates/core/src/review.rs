//! Review rating bounds.

use crate::error::CoreError;

/// Lowest accepted rating (inclusive).
pub const MIN_RATING: i32 = 1;

/// Highest accepted rating (inclusive).
pub const MAX_RATING: i32 = 5;

/// Validate that a rating is within [`MIN_RATING`]..=[`MAX_RATING`].
pub fn validate_rating(rating: i32) -> Result<(), CoreError> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn every_star_value_is_accepted() {
        for rating in MIN_RATING..=MAX_RATING {
            assert!(validate_rating(rating).is_ok(), "rating {rating} should pass");
        }
    }

    #[test]
    fn out_of_range_ratings_are_rejected() {
        assert_matches!(validate_rating(0), Err(CoreError::Validation(_)));
        assert_matches!(validate_rating(6), Err(CoreError::Validation(_)));
        assert_matches!(validate_rating(-3), Err(CoreError::Validation(_)));
    }
}
