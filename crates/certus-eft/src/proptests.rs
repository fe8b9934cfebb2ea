//! Property-based tests: the transformations are exact.
//!
//! Each property rebuilds both sides in exact rational arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use certus_integers::Rational;

    use crate::{two_product_fma, two_product_split, two_sum};

    fn exact(x: f64) -> Rational {
        Rational::from_f64(x).unwrap()
    }

    // Values spread over a wide exponent range, far enough from the
    // overflow and underflow thresholds that products stay exact.
    fn scaled() -> impl Strategy<Value = f64> {
        (-1.0f64..1.0, -300i32..300).prop_map(|(m, e)| m * 2f64.powi(e))
    }

    proptest! {
        #[test]
        fn two_sum_is_exact(a in scaled(), b in scaled()) {
            let (s, e) = two_sum(&a, &b);
            prop_assert_eq!(s, a + b);
            prop_assert_eq!(exact(a) + exact(b), exact(s) + exact(e));
        }

        #[test]
        fn two_sum_error_is_below_half_ulp(a in scaled(), b in scaled()) {
            let (s, e) = two_sum(&a, &b);
            prop_assert!(e.abs() <= s.abs() * f64::EPSILON / 2.0);
        }

        #[test]
        fn two_sum_f32_is_exact(a in -1e6f32..1e6f32, b in -1e-3f32..1e-3f32) {
            let (s, e) = two_sum(&a, &b);
            let lhs = Rational::from_f32(a).unwrap() + Rational::from_f32(b).unwrap();
            let rhs = Rational::from_f32(s).unwrap() + Rational::from_f32(e).unwrap();
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn two_product_fma_is_exact(a in scaled(), b in scaled()) {
            let (p, e) = two_product_fma(&a, &b);
            prop_assert_eq!(p, a * b);
            prop_assert_eq!(exact(a) * exact(b), exact(p) + exact(e));
        }

        #[test]
        fn two_product_split_is_exact(a in scaled(), b in scaled()) {
            let (p, e) = two_product_split(&a, &b);
            prop_assert_eq!(p, a * b);
            prop_assert_eq!(exact(a) * exact(b), exact(p) + exact(e));
        }

        #[test]
        fn product_algorithms_agree(a in scaled(), b in scaled()) {
            prop_assert_eq!(two_product_fma(&a, &b), two_product_split(&a, &b));
        }

        #[test]
        fn product_algorithms_agree_f32(a in -1e3f32..1e3f32, b in -1e3f32..1e3f32) {
            prop_assert_eq!(two_product_fma(&a, &b), two_product_split(&a, &b));
        }
    }
}
