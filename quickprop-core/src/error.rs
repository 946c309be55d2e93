//! Error types for quickprop property-based testing.

use thiserror::Error;

/// Main error type for quickprop.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuickpropError {
    /// An integer range was constructed or drawn with `min > max`.
    #[error("Invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: i64, max: i64 },

    /// The predicate returned `false` for some generated value.
    #[error("Property failed")]
    PropertyFailed,
}

/// Result type for quickprop operations.
pub type Result<T> = std::result::Result<T, QuickpropError>;
