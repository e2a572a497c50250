//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A rejected input.
///
/// One variant per rejectable field, so every failure carries a distinct
/// message naming the field it concerns. Validation is the only failure mode
/// in this domain; infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// The product name was empty or whitespace-only.
    #[error("invalid name: must be a non-empty string")]
    Name,

    /// The price was negative, NaN, or infinite.
    #[error("invalid price {0}: must be a non-negative finite number")]
    Price(f64),

    /// The category was empty or whitespace-only.
    #[error("invalid category: must be a non-empty string")]
    Category,
}
