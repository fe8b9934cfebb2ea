//! Error types for certus-eval.

use certus_poly::PolyError;
use thiserror::Error;

/// Result type alias using certus-eval's Error.
pub type Result<T> = std::result::Result<T, EvalError>;

/// Errors reported by the evaluation schemes.
///
/// Evaluation itself never fails; these cover inputs for which a derived
/// quantity (condition number, error bound, exact reference) is undefined.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Invalid polynomial.
    #[error(transparent)]
    Poly(#[from] PolyError),

    /// The evaluation point is a root, or close enough to one that the
    /// requested quantity is not representable.
    #[error("ill-posed evaluation: {reason}")]
    IllPosed {
        /// What went wrong.
        reason: &'static str,
    },

    /// `k * u >= 1`: the gamma factor is undefined at this precision.
    #[error("gamma factor undefined for {operations} operations at this precision")]
    Domain {
        /// The operation count `k`.
        operations: usize,
    },

    /// NaN or infinity where an exact value is needed.
    #[error("non-finite {what} has no exact value")]
    NonFinite {
        /// Which input was non-finite.
        what: &'static str,
    },
}
