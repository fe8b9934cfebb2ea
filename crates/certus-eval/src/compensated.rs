//! Compensated Horner evaluation.

use certus_poly::Univariate;
use certus_rings::Real;

use crate::eft_horner::{eft_horner, EftHorner};
use crate::horner::horner;
use crate::options::EvalOptions;

/// Evaluates `poly` at `x` with the compensated Horner scheme.
///
/// The result is as accurate as if Horner's scheme had been run in twice
/// the working precision and then rounded: for condition numbers below
/// about `1/u` it is within a few ulps of the true value.
#[must_use]
pub fn compensated_horner<R, P>(poly: &P, x: &R) -> R
where
    R: Real,
    P: Univariate<R> + ?Sized,
{
    compensated_horner_with(poly, x, &EvalOptions::default())
}

/// [`compensated_horner`] with explicit options.
#[must_use]
pub fn compensated_horner_with<R, P>(poly: &P, x: &R, options: &EvalOptions) -> R
where
    R: Real,
    P: Univariate<R> + ?Sized,
{
    let EftHorner { value, terms, .. } = eft_horner(poly, x, options);
    match terms {
        Some(terms) => value + horner(&terms.combined(), x),
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use certus_eft::ProductAlgorithm;
    use certus_poly::DensePoly;
    use certus_rings::Q;

    #[test]
    fn test_constant() {
        let p = DensePoly::constant(0.1);
        assert_eq!(compensated_horner(&p, &123.0), 0.1);
    }

    #[test]
    fn test_exactly_representable_result() {
        // 2 - x + 5x^2 at 3
        let p = DensePoly::new(vec![2.0, -1.0, 5.0]).unwrap();
        assert_eq!(compensated_horner(&p, &3.0), 44.0);
    }

    #[test]
    fn test_recovers_lost_digits() {
        // (x - 1)^2 = x^2 - 2x + 1 at 1 + 2^-30: exactly 2^-60.
        // Plain Horner loses everything to cancellation.
        let p = DensePoly::from_roots(&[1.0, 1.0]);
        let x = 1.0 + 2f64.powi(-30);
        assert_eq!(horner(&p, &x), 0.0);
        assert_eq!(compensated_horner(&p, &x), 2f64.powi(-60));
    }

    #[test]
    fn test_product_algorithms_agree() {
        let p = DensePoly::from_roots(&[0.9, 1.0, 1.1, 1.2]);
        let split = EvalOptions::default().with_product(ProductAlgorithm::Split);
        for x in [0.95, 1.0001, 1.15, 3.0] {
            assert_eq!(
                compensated_horner(&p, &x),
                compensated_horner_with(&p, &x, &split)
            );
        }
    }

    #[test]
    fn test_split_handles_large_operands() {
        // the leading coefficient is too large for a direct split
        let p = DensePoly::new(vec![0.0f64, 1e305]).unwrap();
        let x = 1e-5;
        let fused = compensated_horner(&p, &x);
        let native = compensated_horner_with(&p, &x, &EvalOptions::native());
        let split = compensated_horner_with(
            &p,
            &x,
            &EvalOptions::default().with_product(ProductAlgorithm::Split),
        );
        assert!(split.is_finite());
        assert_eq!(split, fused);
        assert_eq!(native, fused);
    }

    #[test]
    fn test_exact_type_matches_horner() {
        let p = DensePoly::from_roots(&[Q::new(1, 3), Q::new(1, 3), Q::new(-5, 2)]);
        let x = Q::new(7, 20);
        assert_eq!(compensated_horner(&p, &x), horner(&p, &x));
    }

    #[test]
    fn test_nan_propagates() {
        let p = DensePoly::new(vec![1.0, 1.0]).unwrap();
        assert!(compensated_horner(&p, &f64::NAN).is_nan());
    }
}
