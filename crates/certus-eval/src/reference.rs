//! Exact reference evaluation.
//!
//! Every finite binary floating-point value is a rational number, so a
//! polynomial with float coefficients can be evaluated without any rounding
//! over [`Q`]. The result is the true value against which the rounded
//! schemes are measured.

use certus_poly::{DensePoly, Univariate};
use certus_rings::{OrderedRing, Real, Q};

use crate::error::{EvalError, Result};
use crate::horner::horner;

/// Numeric types with an exact rational value.
pub trait Exact: Real {
    /// Returns the exact value, or `None` if there is none (NaN, infinity).
    fn to_exact(&self) -> Option<Q>;
}

impl Exact for f64 {
    fn to_exact(&self) -> Option<Q> {
        Q::from_f64(*self)
    }
}

impl Exact for f32 {
    fn to_exact(&self) -> Option<Q> {
        Q::from_f32(*self)
    }
}

impl Exact for Q {
    fn to_exact(&self) -> Option<Q> {
        Some(self.clone())
    }
}

/// Lifts `poly` to the rationals, coefficient by coefficient.
///
/// # Errors
///
/// Returns [`EvalError::NonFinite`] if a coefficient is NaN or infinite.
pub fn to_exact_poly<R, P>(poly: &P) -> Result<DensePoly<Q>>
where
    R: Exact,
    P: Univariate<R> + ?Sized,
{
    let coeffs = (0..=poly.degree())
        .map(|i| {
            poly.coeff(i)
                .to_exact()
                .ok_or(EvalError::NonFinite { what: "coefficient" })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(DensePoly::new(coeffs)?)
}

/// Returns the exact value of `poly` at `x`.
///
/// # Errors
///
/// Returns [`EvalError::NonFinite`] if a coefficient or `x` is NaN or
/// infinite.
pub fn exact_value<R, P>(poly: &P, x: &R) -> Result<Q>
where
    R: Exact,
    P: Univariate<R> + ?Sized,
{
    let x = x
        .to_exact()
        .ok_or(EvalError::NonFinite { what: "evaluation point" })?;
    let exact = to_exact_poly(poly)?;
    Ok(horner(&exact, &x))
}

/// Returns the exact absolute error `|approx - p(x)|`.
///
/// # Errors
///
/// Returns [`EvalError::NonFinite`] if `approx`, a coefficient or `x` is
/// NaN or infinite.
pub fn exact_error<R, P>(approx: &R, poly: &P, x: &R) -> Result<Q>
where
    R: Exact,
    P: Univariate<R> + ?Sized,
{
    let approx = approx
        .to_exact()
        .ok_or(EvalError::NonFinite { what: "approximation" })?;
    let exact = exact_value(poly, x)?;
    Ok((approx - exact).abs())
}
