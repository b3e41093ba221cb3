//! Error types for u-localopt.

use thiserror::Error;

/// Result type alias for u-localopt operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the optimizers, the search domain and the cover assigner.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A point does not have the dimensionality of the domain (or of the
    /// other point it is compared with).
    #[error("dimension mismatch: expected {expected} coordinates, got {got}")]
    DimensionMismatch {
        /// Expected number of coordinates.
        expected: usize,
        /// Actual number of coordinates.
        got: usize,
    },

    /// A bound pair is reversed or not finite.
    #[error("invalid bounds in dimension {dimension}: low ({low}) must be finite and <= high ({high})")]
    InvalidBounds {
        /// Index of the offending dimension.
        dimension: usize,
        /// Lower bound value.
        low: f64,
        /// Upper bound value.
        high: f64,
    },

    /// The domain has no dimensions.
    #[error("search domain must have at least one dimension")]
    EmptyDomain,

    /// A configuration value is out of range.
    #[error("invalid hyperparameter '{name}': {reason}")]
    InvalidHyperparameter {
        /// Name of the configuration field.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// The greedy assigner ran out of candidates covering the remaining items.
    #[error("no remaining candidate covers {}", uncovered.join(", "))]
    UncoverableSet {
        /// Items still uncovered when the assigner got stuck.
        uncovered: Vec<String>,
    },
}

impl Error {
    pub(crate) fn hyperparameter(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidHyperparameter {
            name,
            reason: reason.into(),
        }
    }
}
