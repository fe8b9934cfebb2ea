//! Error-free transformation of a sum.

use certus_rings::Ring;

/// Computes `a + b` and its rounding error.
///
/// Returns `(s, e)` with `s = fl(a + b)` and `a + b = s + e` exactly, for
/// any finite `a` and `b` (Knuth's TwoSum; no ordering precondition, no
/// branches). With a NaN or infinite operand `e` carries no meaning.
#[inline]
#[must_use]
pub fn two_sum<R: Ring>(a: &R, b: &R) -> (R, R) {
    let sum = a.clone() + b.clone();
    let b_virtual = sum.clone() - a.clone();
    let a_virtual = sum.clone() - b_virtual.clone();
    let b_roundoff = b.clone() - b_virtual;
    let a_roundoff = a.clone() - a_virtual;
    (sum, a_roundoff + b_roundoff)
}
