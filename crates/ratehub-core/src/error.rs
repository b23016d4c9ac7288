//! Domain error types.

use thiserror::Error;

/// Errors raised by domain type constructors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Rating value outside the allowed 1-5 range.
    #[error("rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(u8),
}
