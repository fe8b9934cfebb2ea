//! Read access shared by the polynomial representations.

use certus_rings::Ring;

/// A univariate polynomial viewed as a coefficient sequence.
///
/// Evaluation schemes walk `coeff(degree())` down to `coeff(0)`; the order
/// matters for the rounding error, so implementors must report the same
/// coefficients regardless of how they store them.
pub trait Univariate<R: Ring> {
    /// The degree N; the polynomial has N + 1 coefficients.
    fn degree(&self) -> usize;

    /// The coefficient of x^i, zero when absent.
    fn coeff(&self, i: usize) -> R;
}
