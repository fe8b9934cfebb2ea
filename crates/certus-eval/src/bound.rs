//! A-priori forward error bound for compensated Horner.
//!
//! With `res` the compensated value and `pi`, `sigma` the rounding errors of
//! the error-tracking pass,
//!
//! ```text
//! |p(x) - res| <= u|res| + gamma(4N + 2) * (|pi| + |sigma|)(|x|) + 2u^2|res|
//! ```
//!
//! where the middle term is itself evaluated with plain Horner. Underflow
//! makes the recorded rounding errors inexact; it is reported as
//! [`EvalError::IllPosed`] rather than bounded.

use certus_poly::Univariate;
use certus_rings::{Real, Ring};

use crate::eft_horner::{eft_horner, EftHorner};
use crate::error::{EvalError, Result};
use crate::horner::horner;
use crate::options::EvalOptions;

/// Returns `gamma(k) = k u / (1 - k u)`, the relative error accumulated
/// over `k` rounded operations.
///
/// # Errors
///
/// Returns [`EvalError::Domain`] when `k u >= 1`.
pub fn gamma<R: Real>(k: usize) -> Result<R> {
    let ku = R::from_usize(k) * R::unit_roundoff();
    if ku >= R::one() {
        return Err(EvalError::Domain { operations: k });
    }
    Ok(ku.clone() / (R::one() - ku))
}

/// A compensated value together with its certified error bound.
#[derive(Clone, Debug, PartialEq)]
pub struct Certified<R: Ring> {
    /// The compensated Horner value.
    pub value: R,
    /// Upper bound on `|p(x) - value|`.
    pub bound: R,
}

impl<R: Real> Certified<R> {
    /// Returns true if `exact` lies within `value ± bound`.
    #[must_use]
    pub fn contains(&self, exact: &R) -> bool {
        (exact.clone() - self.value.clone()).abs() <= self.bound
    }
}

/// Evaluates `poly` at `x` with compensated Horner and bounds the error,
/// from a single error-tracking pass.
///
/// # Errors
///
/// Returns [`EvalError::Domain`] when the degree is too large for the
/// precision of `R`, i.e. `(4N + 2) u >= 1`, and [`EvalError::IllPosed`]
/// when a product of the evaluation underflows.
pub fn certified_horner<R, P>(poly: &P, x: &R) -> Result<Certified<R>>
where
    R: Real,
    P: Univariate<R> + ?Sized,
{
    certified_horner_with(poly, x, &EvalOptions::default())
}

/// [`certified_horner`] with explicit options.
///
/// # Errors
///
/// See [`certified_horner`].
pub fn certified_horner_with<R, P>(
    poly: &P,
    x: &R,
    options: &EvalOptions,
) -> Result<Certified<R>>
where
    R: Real,
    P: Univariate<R> + ?Sized,
{
    let n = poly.degree();
    let operations = n.checked_mul(4).and_then(|k| k.checked_add(2));
    let g = gamma::<R>(operations.ok_or(EvalError::Domain {
        operations: usize::MAX,
    })?)?;

    let EftHorner {
        value,
        terms,
        underflow,
    } = eft_horner(poly, x, options);
    if underflow {
        return Err(EvalError::IllPosed {
            reason: "a rounding error underflows",
        });
    }
    let (value, tail) = match terms {
        Some(terms) => {
            let res = value + horner(&terms.combined(), x);
            let tail = g * horner(&terms.magnitudes(), &x.abs());
            (res, tail)
        }
        None => (value, R::zero()),
    };

    let u = R::unit_roundoff();
    let magnitude = value.abs();
    let two = R::one() + R::one();
    let bound = u.clone() * magnitude.clone() + tail + two * u.clone() * u * magnitude;

    Ok(Certified { value, bound })
}

/// Returns the certified bound on the error of
/// [`compensated_horner`](crate::compensated_horner) at `x`.
///
/// # Errors
///
/// See [`certified_horner`].
pub fn error_bound<R, P>(poly: &P, x: &R) -> Result<R>
where
    R: Real,
    P: Univariate<R> + ?Sized,
{
    certified_horner(poly, x).map(|c| c.bound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compensated::compensated_horner;
    use certus_poly::DensePoly;
    use certus_rings::Q;

    #[test]
    fn test_gamma() {
        let u = 2f64.powi(-53);
        let g: f64 = gamma(10).unwrap();
        assert!((g - 10.0 * u / (1.0 - 10.0 * u)).abs() <= f64::EPSILON * g);
        assert_eq!(gamma::<f64>(0), Ok(0.0));
    }

    #[test]
    fn test_gamma_domain() {
        // 2^24 * 2^-24 = 1
        assert_eq!(
            gamma::<f32>(1 << 24),
            Err(EvalError::Domain { operations: 1 << 24 })
        );
        assert!(gamma::<f32>((1 << 24) - 1).is_ok());
    }

    #[test]
    fn test_degree_too_large_for_precision() {
        // 4N + 2 >= 2^24 for N = 2^22
        let p = DensePoly::<f32>::zeros(1 << 22);
        assert!(matches!(
            certified_horner(&p, &0.5),
            Err(EvalError::Domain { .. })
        ));
    }

    #[test]
    fn test_value_matches_compensated() {
        let p = DensePoly::from_roots(&[0.5, 0.75, 1.25, 2.0]);
        let x = 0.8125 + 1e-9;
        let certified = certified_horner(&p, &x).unwrap();
        assert_eq!(certified.value, compensated_horner(&p, &x));
        assert!(certified.bound >= 0.0);
    }

    #[test]
    fn test_exact_terms_give_rounding_only() {
        // no product or sum is rounded, so only u|res| + 2u^2|res| remains
        let p = DensePoly::new(vec![2.0, -1.0, 5.0]).unwrap();
        let certified = certified_horner(&p, &3.0).unwrap();
        let u = 2f64.powi(-53);
        assert_eq!(certified.value, 44.0);
        assert_eq!(certified.bound, u * 44.0 + 2.0 * u * u * 44.0);
    }

    #[test]
    fn test_constant_bound() {
        let p = DensePoly::constant(-3.0f32);
        let certified = certified_horner(&p, &7.0).unwrap();
        assert_eq!(certified.value, -3.0);
        assert!(certified.contains(&-3.0));
    }

    #[test]
    fn test_underflow_is_reported() {
        let p = DensePoly::new(vec![0.0, 1e-200]).unwrap();
        assert!(matches!(
            certified_horner(&p, &1e-200),
            Err(EvalError::IllPosed { .. })
        ));
        assert!(error_bound(&p, &1e-200).is_err());

        // above the threshold the bound is returned
        let p = DensePoly::new(vec![0.0, 2f64.powi(-400)]).unwrap();
        let x = 3.0 * 2f64.powi(-500);
        let certified = certified_horner(&p, &x).unwrap();
        assert_eq!(certified.value, 3.0 * 2f64.powi(-900));
    }

    #[test]
    fn test_exact_bound_is_zero() {
        let p = DensePoly::from_roots(&[Q::new(1, 3), Q::new(2, 7)]);
        let bound = error_bound(&p, &Q::new(5, 11)).unwrap();
        assert!(bound.is_zero());
    }
}
