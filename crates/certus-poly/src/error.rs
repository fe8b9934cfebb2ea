//! Errors raised when constructing or combining polynomials.

use thiserror::Error;

/// Precondition violations on polynomial values.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// A dense polynomial needs at least its constant coefficient.
    #[error("polynomial has no coefficients")]
    Empty,

    /// Elementwise operations require equal degrees.
    #[error("degree mismatch: {lhs} vs {rhs}")]
    DegreeMismatch {
        /// Degree of the left operand.
        lhs: usize,
        /// Degree of the right operand.
        rhs: usize,
    },
}
