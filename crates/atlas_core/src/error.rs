//! Error types for the dataset engine.

use thiserror::Error;

/// Result type for engine operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in dataset engine operations.
///
/// Every variant describes invalid input rejected before any mutation
/// takes place, so a failed operation always leaves the dataset
/// unchanged. A lookup that finds nothing is not an error: operations
/// with a "not found" outcome report it as an `Ok(None)` value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A required text input was empty after normalization.
    #[error("{field} must not be blank")]
    BlankField {
        /// Name of the offending input.
        field: &'static str,
    },

    /// A range filter was given inverted bounds.
    #[error("invalid range: min {min} is greater than max {max}")]
    InvertedRange {
        /// Lower bound as given.
        min: u64,
        /// Upper bound as given.
        max: u64,
    },

    /// A sort key string did not name a known key.
    #[error("invalid sort key {key:?}: expected name, population or area")]
    InvalidSortKey {
        /// The unrecognized key.
        key: String,
    },

    /// A field update carried no fields to apply.
    #[error("update specifies no fields")]
    EmptyUpdate,
}

impl CoreError {
    /// Creates a blank field error.
    pub fn blank_field(field: &'static str) -> Self {
        Self::BlankField { field }
    }

    /// Creates an inverted range error.
    pub fn inverted_range(min: u64, max: u64) -> Self {
        Self::InvertedRange { min, max }
    }

    /// Creates an invalid sort key error.
    pub fn invalid_sort_key(key: impl Into<String>) -> Self {
        Self::InvalidSortKey { key: key.into() }
    }
}
