//! Review constants and validation functions.
//!
//! Defines the accepted rating range, content length limits, and the paging
//! clamps shared by the DB and API layers.

use crate::error::CoreError;

/* --------------------------------------------------------------------------
Constants
-------------------------------------------------------------------------- */

/// Maximum length for a review's text content.
pub const MAX_REVIEW_LENGTH: usize = 2_000;

/// Lowest accepted star rating.
pub const MIN_RATING: i32 = 1;

/// Highest accepted star rating.
pub const MAX_RATING: i32 = 5;

/// Page size used when the caller does not specify one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Largest page size a caller may request.
pub const MAX_PAGE_SIZE: i64 = 100;

/* --------------------------------------------------------------------------
Validation functions
-------------------------------------------------------------------------- */

/// Validate a review's text content: non-blank and within the length limit.
pub fn validate_review_content(content: &str) -> Result<(), CoreError> {
    if content.trim().is_empty() {
        return Err(CoreError::Validation(
            "Review content must not be empty".to_string(),
        ));
    }

    if content.len() > MAX_REVIEW_LENGTH {
        return Err(CoreError::Validation(format!(
            "Review content exceeds the maximum length of {MAX_REVIEW_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Validate that a star rating lies in the accepted range.
pub fn validate_rating(rating: i32) -> Result<(), CoreError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(CoreError::Validation(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
        )));
    }

    Ok(())
}

/* --------------------------------------------------------------------------
Paging clamps
-------------------------------------------------------------------------- */

/// Clamp a requested page index to a non-negative value, defaulting to 0.
pub fn clamp_page(requested: Option<i64>) -> i64 {
    requested.unwrap_or(0).max(0)
}

/// Clamp a requested page size into `1..=MAX_PAGE_SIZE`, defaulting to
/// [`DEFAULT_PAGE_SIZE`].
pub fn clamp_page_size(requested: Option<i64>) -> i64 {
    requested
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_content() {
        assert!(validate_review_content("Great read").is_ok());
    }

    #[test]
    fn rejects_blank_content() {
        assert!(validate_review_content("").is_err());
        assert!(validate_review_content("   \n\t").is_err());
    }

    #[test]
    fn rejects_oversized_content() {
        let long = "x".repeat(MAX_REVIEW_LENGTH + 1);
        assert!(validate_review_content(&long).is_err());

        let at_limit = "x".repeat(MAX_REVIEW_LENGTH);
        assert!(validate_review_content(&at_limit).is_ok());
    }

    #[test]
    fn accepts_ratings_in_range() {
        for rating in MIN_RATING..=MAX_RATING {
            assert!(validate_rating(rating).is_ok());
        }
    }

    #[test]
    fn rejects_ratings_out_of_range() {
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
        assert!(validate_rating(-1).is_err());
    }

    #[test]
    fn page_defaults_to_zero_and_never_goes_negative() {
        assert_eq!(clamp_page(None), 0);
        assert_eq!(clamp_page(Some(-3)), 0);
        assert_eq!(clamp_page(Some(7)), 7);
    }

    #[test]
    fn page_size_defaults_and_clamps() {
        assert_eq!(clamp_page_size(None), DEFAULT_PAGE_SIZE);
        assert_eq!(clamp_page_size(Some(0)), 1);
        assert_eq!(clamp_page_size(Some(10_000)), MAX_PAGE_SIZE);
        assert_eq!(clamp_page_size(Some(25)), 25);
    }
}
