//! Book field rules: release-year bounds and the derived thickness label.
//!
//! Thickness is never accepted from clients. Handlers call
//! [`derive_thickness`] on every create and update so the stored value
//! always reflects `total_page`.

use crate::error::CoreError;

/* --------------------------------------------------------------------------
Constants
-------------------------------------------------------------------------- */

/// Earliest accepted release year (inclusive).
pub const MIN_RELEASE_YEAR: i32 = 1980;

/// Latest accepted release year (inclusive).
pub const MAX_RELEASE_YEAR: i32 = 2025;

/// Books with more pages than this are labelled thick.
pub const THICK_PAGE_THRESHOLD: i32 = 100;

/// Label for books above [`THICK_PAGE_THRESHOLD`].
pub const THICKNESS_THICK: &str = "tebal";

/// Label for books at or below [`THICK_PAGE_THRESHOLD`].
pub const THICKNESS_THIN: &str = "tipis";

/* --------------------------------------------------------------------------
Rules
-------------------------------------------------------------------------- */

/// Validate that a release year falls within
/// [`MIN_RELEASE_YEAR`]..=[`MAX_RELEASE_YEAR`].
pub fn validate_release_year(year: i32) -> Result<(), CoreError> {
    if (MIN_RELEASE_YEAR..=MAX_RELEASE_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Release year must be within the range {MIN_RELEASE_YEAR}-{MAX_RELEASE_YEAR}"
        )))
    }
}

/// Compute the thickness label for a page count.
pub fn derive_thickness(total_page: i32) -> &'static str {
    if total_page > THICK_PAGE_THRESHOLD {
        THICKNESS_THICK
    } else {
        THICKNESS_THIN
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn release_year_bounds_are_inclusive() {
        assert!(validate_release_year(1980).is_ok());
        assert!(validate_release_year(2025).is_ok());
        assert!(validate_release_year(2000).is_ok());
    }

    #[test]
    fn release_year_outside_range_is_rejected() {
        assert_matches!(validate_release_year(1979), Err(CoreError::Validation(_)));
        assert_matches!(validate_release_year(2026), Err(CoreError::Validation(_)));
        assert_matches!(validate_release_year(0), Err(CoreError::Validation(_)));
    }

    #[test]
    fn release_year_error_names_the_range() {
        let err = validate_release_year(1900).unwrap_err();
        assert!(err.to_string().contains("1980-2025"));
    }

    #[test]
    fn thickness_threshold_is_exclusive() {
        assert_eq!(derive_thickness(100), THICKNESS_THIN);
        assert_eq!(derive_thickness(101), THICKNESS_THICK);
    }

    #[test]
    fn thickness_for_small_and_large_books() {
        assert_eq!(derive_thickness(0), "tipis");
        assert_eq!(derive_thickness(50), "tipis");
        assert_eq!(derive_thickness(850), "tebal");
    }
}
