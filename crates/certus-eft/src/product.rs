//! Error-free transformations of a product.
//!
//! Two algorithms compute the same `(p, e)` pair with `a * b = p + e`:
//! one fused multiply-add, or Dekker's four partial products over
//! Veltkamp-split operands. Both are exact unless the product overflows or
//! `e` underflows. An operand too large to split is scaled down by a power
//! of two and the other one scaled up, which leaves the product unchanged.

use certus_rings::Real;

/// Algorithm used for the product step of the error-free transformations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ProductAlgorithm {
    /// `e = fma(a, b, -p)`.
    #[default]
    Fused,
    /// Dekker's product over split operands, for targets without a
    /// correctly rounded fused multiply-add.
    Split,
}

impl ProductAlgorithm {
    /// Computes `a * b` and its rounding error with this algorithm.
    #[inline]
    #[must_use]
    pub fn two_product<R: Real>(self, a: &R, b: &R) -> (R, R) {
        match self {
            Self::Fused => two_product_fma(a, b),
            Self::Split => two_product_split(a, b),
        }
    }
}

/// Computes `a * b` and its rounding error using a fused multiply-add.
#[inline]
#[must_use]
pub fn two_product_fma<R: Real>(a: &R, b: &R) -> (R, R) {
    let product = a.clone() * b.clone();
    let error = a.mul_add(b, &-product.clone());
    (product, error)
}

/// Computes `a * b` and its rounding error without a fused multiply-add.
#[inline]
#[must_use]
pub fn two_product_split<R: Real>(a: &R, b: &R) -> (R, R) {
    let product = a.clone() * b.clone();
    let limit = R::split_limit();
    let too_large = |v: &R| limit.as_ref().is_some_and(|l| v.abs() > *l);

    let error = if too_large(a) {
        let scale = R::split_scale();
        dekker_error(&(a.clone() / scale.clone()), &(b.clone() * scale), &product)
    } else if too_large(b) {
        let scale = R::split_scale();
        dekker_error(&(a.clone() * scale.clone()), &(b.clone() / scale), &product)
    } else {
        dekker_error(a, b, &product)
    };
    (product, error)
}

/// `a * b - product` from the four partial products of the split operands.
fn dekker_error<R: Real>(a: &R, b: &R, product: &R) -> R {
    let (a_hi, a_lo) = a.split();
    let (b_hi, b_lo) = b.split();
    ((a_hi.clone() * b_hi.clone() - product.clone()) + a_hi * b_lo.clone() + a_lo.clone() * b_hi)
        + a_lo * b_lo
}
