//! Error-tracking Horner evaluation.
//!
//! Runs the Horner recurrence with every product and sum replaced by its
//! error-free transformation. The rounded results follow exactly the path
//! of plain Horner; the errors are collected, step by step, into two
//! polynomials of degree N - 1:
//!
//! ```text
//! s_N = a_N
//! (p_i, pi_i)    = two_product(s_{i+1}, x)
//! (s_i, sigma_i) = two_sum(p_i, a_i)        for i = N-1, ..., 0
//! ```
//!
//! and `p(x) = s_0 + (pi + sigma)(x)` holds exactly.

use certus_eft::two_sum;
use certus_poly::{DensePoly, Univariate};
use certus_rings::{OrderedRing, Real, Ring};

use crate::options::EvalOptions;

/// The rounding errors of one error-tracking pass.
#[derive(Clone, Debug, PartialEq)]
pub struct ErrorTerms<R: Ring> {
    /// `pi[i]`: rounding error of the multiplication at step i.
    pub pi: DensePoly<R>,
    /// `sigma[i]`: rounding error of the addition at step i.
    pub sigma: DensePoly<R>,
}

impl<R: Ring> ErrorTerms<R> {
    /// Returns `pi + sigma`, the polynomial whose value at x is the
    /// first-order correction.
    #[must_use]
    pub fn combined(&self) -> DensePoly<R> {
        let mut sum = self.pi.clone();
        for (s, c) in sum.coeffs_mut().iter_mut().zip(self.sigma.coeffs()) {
            *s = s.clone() + c.clone();
        }
        sum
    }
}

impl<R: OrderedRing> ErrorTerms<R> {
    /// Returns `|pi| + |sigma|`, used to bound the error of the correction.
    #[must_use]
    pub fn magnitudes(&self) -> DensePoly<R> {
        let mut sum = self.pi.abs();
        for (s, c) in sum.coeffs_mut().iter_mut().zip(self.sigma.coeffs()) {
            *s = s.clone() + c.abs();
        }
        sum
    }
}

/// Result of [`eft_horner`].
#[derive(Clone, Debug, PartialEq)]
pub struct EftHorner<R: Ring> {
    /// The Horner value, bit-identical to [`horner`](crate::horner).
    pub value: R,
    /// The rounding errors; `None` for a constant, which has no steps.
    pub terms: Option<ErrorTerms<R>>,
    /// True if a non-zero product fell below
    /// [`Real::underflow_threshold`], so its recorded error may be inexact.
    pub underflow: bool,
}

/// Evaluates `poly` at `x`, recording the rounding error of every step.
#[must_use]
pub fn eft_horner<R, P>(poly: &P, x: &R, options: &EvalOptions) -> EftHorner<R>
where
    R: Real,
    P: Univariate<R> + ?Sized,
{
    let n = poly.degree();
    let mut s = poly.coeff(n);
    if n == 0 {
        return EftHorner {
            value: s,
            terms: None,
            underflow: false,
        };
    }

    let threshold = R::underflow_threshold();
    let mut underflow = false;
    let mut pi = DensePoly::zeros(n - 1);
    let mut sigma = DensePoly::zeros(n - 1);

    for i in (0..n).rev() {
        let (p, pi_i) = options.product.two_product(&s, x);
        underflow |= !s.is_zero() && !x.is_zero() && p.abs() < threshold;
        let (next, sigma_i) = two_sum(&p, &poly.coeff(i));
        s = next;
        pi[i] = pi_i;
        sigma[i] = sigma_i;
    }

    EftHorner {
        value: s,
        terms: Some(ErrorTerms { pi, sigma }),
        underflow,
    }
}
