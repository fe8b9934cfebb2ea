//! Numeric traits.
//!
//! This module defines the algebraic traits that the polynomial types and
//! the evaluation schemes are generic over. `Ring` is enough for plain
//! Horner evaluation; the error-free transformations need `Real`.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A ring is a set with addition and multiplication operations.
///
/// Floating-point types only satisfy the ring laws up to rounding, which is
/// exactly the discrepancy the rest of certus measures, so the trait asks
/// for `PartialEq` rather than `Eq`.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
pub trait Ring:
    Clone + PartialEq + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Computes self^n for non-negative n by repeated multiplication.
    ///
    /// The product is accumulated left to right, one rounding per step,
    /// which is what the naive power-sum evaluation is specified to do.
    fn pow(&self, n: u32) -> Self {
        let mut result = Self::one();
        for _ in 0..n {
            result = result * self.clone();
        }
        result
    }
}

/// A field is a ring where every non-zero element has a multiplicative inverse.
pub trait Field: Ring + Div<Output = Self> {
    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if the element is zero.
    fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(Self::one() / self.clone())
        }
    }
}

/// Marker trait for ordered rings.
pub trait OrderedRing: Ring + PartialOrd {
    /// Returns the absolute value.
    fn abs(&self) -> Self;

    /// Returns the sign: -1, 0, or 1.
    fn signum(&self) -> i8 {
        if self.is_zero() {
            0
        } else if *self > Self::zero() {
            1
        } else {
            -1
        }
    }
}

/// An ordered field with the rounding model of IEEE-754 arithmetic.
///
/// Implemented by `f32` and `f64`, and by the exact rationals, which behave
/// like a binary format with unlimited precision: their unit roundoff is
/// zero, their fused multiply-add is exact, and their split puts everything
/// into the high half. With those conventions every algorithm written
/// against `Real` also runs, unchanged and exactly, over the rationals.
pub trait Real: Field + OrderedRing {
    /// Distance from 1 to the next representable value.
    fn epsilon() -> Self;

    /// Unit roundoff `u`: the relative error bound of one rounded operation,
    /// half of `epsilon()` for round-to-nearest.
    fn unit_roundoff() -> Self;

    /// Converts a count to this type. Exact for counts below 2^p.
    fn from_usize(n: usize) -> Self;

    /// Computes `self * a + b` with a single rounding.
    #[must_use]
    fn mul_add(&self, a: &Self, b: &Self) -> Self;

    /// Splits `self` into `(hi, lo)` with `self == hi + lo` exactly and each
    /// half carrying at most half of the significand bits (Veltkamp).
    ///
    /// Overflows for magnitudes above [`split_limit`](Real::split_limit).
    fn split(&self) -> (Self, Self);

    /// Largest magnitude `split` handles, `None` when there is no limit.
    fn split_limit() -> Option<Self>;

    /// A power of two that brings every finite value below `split_limit`
    /// when divided by it.
    fn split_scale() -> Self;

    /// Smallest product magnitude whose rounding error is still
    /// representable: `MIN_POSITIVE / u` for a binary format, zero when
    /// products never underflow.
    fn underflow_threshold() -> Self;

    /// Returns true if the value is neither infinite nor NaN.
    fn is_finite(&self) -> bool;
}
