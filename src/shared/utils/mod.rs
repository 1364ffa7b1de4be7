pub mod logger;
pub mod validation;

pub use validation::{Validator, MAX_REVIEW_LENGTH};
