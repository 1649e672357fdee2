//! Error types returned by the estimator and its validation/scoring collaborators.

use thiserror::Error;

/// Errors that can occur while fitting, predicting or scoring.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifierError {
    /// `predict`, `score` or an introspection accessor was called before `fit`.
    #[error("This {estimator} instance is not fitted yet. Call 'fit' with appropriate arguments before using this estimator.")]
    NotFitted { estimator: &'static str },

    /// Features or labels are malformed, mismatched in length, contain invalid
    /// values, or a query's feature count disagrees with the fitted one.
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Labels passed to `fit` are not a valid classification target.
    #[error("Invalid classification target: {reason}")]
    InvalidTarget { reason: String },
}

impl ClassifierError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        ClassifierError::InvalidInput { reason: reason.into() }
    }

    pub(crate) fn invalid_target(reason: impl Into<String>) -> Self {
        ClassifierError::InvalidTarget { reason: reason.into() }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ClassifierError>;
