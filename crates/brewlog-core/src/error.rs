use thiserror::Error;

/// Rejections raised before a submission has any side effect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("sweet_name must not be empty")]
    EmptySweetName,

    #[error("rating {0} is outside 1..=5")]
    RatingOutOfRange(u8),
}
