use crate::shared::errors::AppError;

/// Longest review the log stores, in characters.
pub const MAX_REVIEW_LENGTH: usize = 250;

pub struct Validator;

impl Validator {
    pub fn validate_user_rating(rating: i32) -> Result<(), AppError> {
        if !(1..=5).contains(&rating) {
            return Err(AppError::ValidationError(
                "Rating must be between 1 and 5".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_review(review: &str) -> Result<(), AppError> {
        if review.chars().count() > MAX_REVIEW_LENGTH {
            return Err(AppError::ValidationError(format!(
                "Review too long (max {} characters)",
                MAX_REVIEW_LENGTH
            )));
        }
        Ok(())
    }

    pub fn validate_search_title(title: &str) -> Result<(), AppError> {
        if title.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Search title cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_bounds() {
        assert!(Validator::validate_user_rating(1).is_ok());
        assert!(Validator::validate_user_rating(5).is_ok());
        assert!(Validator::validate_user_rating(0).is_err());
        assert!(Validator::validate_user_rating(6).is_err());
    }

    #[test]
    fn review_at_limit_is_accepted() {
        let review = "x".repeat(MAX_REVIEW_LENGTH);
        assert!(Validator::validate_review(&review).is_ok());
    }

    #[test]
    fn review_over_limit_is_rejected() {
        let review = "x".repeat(MAX_REVIEW_LENGTH + 1);
        assert!(Validator::validate_review(&review).is_err());
    }

    #[test]
    fn review_length_counts_chars_not_bytes() {
        // 250 multi-byte characters are still within the limit
        let review = "é".repeat(MAX_REVIEW_LENGTH);
        assert!(Validator::validate_review(&review).is_ok());
    }

    #[test]
    fn blank_search_title_is_rejected() {
        assert!(Validator::validate_search_title("  ").is_err());
        assert!(Validator::validate_search_title("Heat").is_ok());
    }
}
