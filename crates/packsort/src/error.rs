//! Error types for packsort

use thiserror::Error;

use crate::measure::Param;

/// Main error type for classification.
///
/// Every variant names the offending parameter so callers see `width`,
/// `height`, `length` or `mass` in the message, never a positional index.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SortError {
    /// An argument could not be read as a numeric value.
    #[error("{param} must be numeric; got {type_name}")]
    InvalidType {
        /// The parameter that failed validation.
        param: Param,
        /// The observed Rust type of the argument.
        type_name: &'static str,
    },

    /// An argument was NaN or infinite.
    #[error("{param} must be finite; got {value}")]
    NotFinite {
        /// The parameter that failed validation.
        param: Param,
        /// The offending value.
        value: f64,
    },

    /// An argument was below zero.
    #[error("{param} must be non-negative; got {value}")]
    Negative {
        /// The parameter that failed validation.
        param: Param,
        /// The offending value.
        value: f64,
    },
}

impl SortError {
    /// Returns the parameter this error reports on.
    pub fn param(&self) -> Param {
        match self {
            SortError::InvalidType { param, .. }
            | SortError::NotFinite { param, .. }
            | SortError::Negative { param, .. } => *param,
        }
    }
}

/// Result type alias for classification.
pub type Result<T> = std::result::Result<T, SortError>;
