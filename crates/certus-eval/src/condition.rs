//! Condition number of polynomial evaluation.

use certus_poly::Univariate;
use certus_rings::Real;

use crate::compensated::compensated_horner;
use crate::error::{EvalError, Result};
use crate::horner::{horner, Magnitudes};

/// Returns `sum |a_i| |x|^i / |p(x)|`, the relative condition number of
/// evaluating `poly` at `x`.
///
/// The numerator is evaluated with plain Horner (all terms are
/// non-negative, so it is accurate); the denominator with compensated
/// Horner. Plain Horner can be trusted to about `cond * u` relative error,
/// compensated Horner to about `u + cond * u^2`.
///
/// # Errors
///
/// Returns [`EvalError::IllPosed`] when `p(x)` evaluates to zero or the
/// ratio overflows, i.e. when `x` is a root or indistinguishable from one.
pub fn condition_number<R, P>(poly: &P, x: &R) -> Result<R>
where
    R: Real,
    P: Univariate<R> + ?Sized,
{
    let value = compensated_horner(poly, x).abs();
    if value.is_zero() {
        return Err(EvalError::IllPosed {
            reason: "polynomial vanishes at the evaluation point",
        });
    }

    let magnitude = horner(&Magnitudes(poly), &x.abs());
    let cond = magnitude / value;
    if !cond.is_finite() {
        return Err(EvalError::IllPosed {
            reason: "condition number overflows",
        });
    }
    Ok(cond)
}
