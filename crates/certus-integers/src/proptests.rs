//! Property-based tests for exact arithmetic and float conversion.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Integer, Rational};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    // Any finite f64, including subnormals and the extremes.
    fn finite_f64() -> impl Strategy<Value = f64> {
        any::<f64>().prop_filter("value must be finite", |v| v.is_finite())
    }

    proptest! {
        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn rational_distributive(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int(),
            num_c in small_int(),
            den_c in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a);
            let b = Rational::from_i64(num_b, den_b);
            let c = Rational::from_i64(num_c, den_c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn rational_multiplicative_inverse(num in non_zero_int(), den in non_zero_int()) {
            use num_traits::One;
            let a = Rational::from_i64(num, den);
            let product = a.clone() * a.recip();
            prop_assert!(product.is_one());
        }

        // Conversion from floats

        #[test]
        fn from_f64_preserves_order(a in finite_f64(), b in finite_f64()) {
            let ra = Rational::from_f64(a).unwrap();
            let rb = Rational::from_f64(b).unwrap();
            prop_assert_eq!(a.partial_cmp(&b), Some(ra.cmp(&rb)));
        }

        #[test]
        fn from_f64_negation(a in finite_f64()) {
            let ra = Rational::from_f64(a).unwrap();
            prop_assert_eq!(Rational::from_f64(-a).unwrap(), -ra);
        }

        #[test]
        fn from_f64_denominator_is_power_of_two(a in finite_f64()) {
            let den = Rational::from_f64(a).unwrap().denominator();
            let exponent = u32::try_from(den.bit_len() - 1).unwrap();
            prop_assert_eq!(den, Integer::new(2).pow(exponent));
        }

        #[test]
        fn from_f64_exact_small_integers(n in -(1i64 << 53)..(1i64 << 53)) {
            #[allow(clippy::cast_precision_loss)]
            let f = n as f64;
            prop_assert_eq!(Rational::from_f64(f).unwrap(), Rational::from(n));
        }
    }
}
