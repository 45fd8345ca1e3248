//! Error types for the analysis domain.

use thiserror::Error;

/// Errors raised while validating analysis input.
///
/// All variants are fatal to the call that raised them: they describe
/// malformed input, so there is nothing transient to retry. Callers are
/// expected to translate them into a user-facing error response.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// The hierarchy descriptor itself is unusable (missing levels,
    /// empty item lists, missing matrix assignments).
    #[error("Hierarchy structure invalid: {reason}")]
    Structural { reason: String },

    /// A comparison matrix does not match the item count expected at
    /// its position in the hierarchy.
    #[error("Comparison matrix for {context} must be {expected}x{expected}, got {actual}x{actual}")]
    DimensionMismatch {
        context: String,
        expected: usize,
        actual: usize,
    },

    /// A supplied matrix is not a square array of finite numbers.
    #[error("Malformed comparison matrix: {reason}")]
    MalformedMatrix { reason: String },
}

impl AnalysisError {
    /// Creates a structural error.
    pub fn structural(reason: impl Into<String>) -> Self {
        AnalysisError::Structural {
            reason: reason.into(),
        }
    }

    /// Creates a dimension mismatch error.
    ///
    /// `context` names the hierarchy position at fault, e.g.
    /// `"criteria"` or `"level 2, parent 1 (Cost)"`.
    pub fn dimension_mismatch(context: impl Into<String>, expected: usize, actual: usize) -> Self {
        AnalysisError::DimensionMismatch {
            context: context.into(),
            expected,
            actual,
        }
    }

    /// Creates a malformed matrix error.
    pub fn malformed_matrix(reason: impl Into<String>) -> Self {
        AnalysisError::MalformedMatrix {
            reason: reason.into(),
        }
    }
}
