//! Property-based tests for the polynomial representations.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::dense::DensePoly;
    use crate::sparse::SparsePoly;
    use certus_rings::{Ring, Q};

    // Small integer coefficients so sums stay exact in f64.
    fn small_coeff() -> impl Strategy<Value = f64> {
        (-100i32..100i32).prop_map(f64::from)
    }

    fn small_poly(len: usize) -> impl Strategy<Value = DensePoly<f64>> {
        proptest::collection::vec(small_coeff(), len)
            .prop_map(|c| DensePoly::new(c).unwrap())
    }

    fn small_root() -> impl Strategy<Value = Q> {
        (-20i64..20i64, 1i64..5i64).prop_map(|(n, d)| Q::new(n, d))
    }

    proptest! {
        #[test]
        fn dense_add_commutative(a in small_poly(5), b in small_poly(5)) {
            prop_assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
        }

        #[test]
        fn dense_add_keeps_degree(a in small_poly(6), b in small_poly(6)) {
            prop_assert_eq!(a.add(&b).unwrap().degree(), 5);
        }

        #[test]
        fn dense_abs_is_non_negative(a in small_poly(4)) {
            prop_assert!(a.abs().coeffs().iter().all(|c| *c >= 0.0));
        }

        #[test]
        fn sparse_add_matches_dense(a in small_poly(4), b in small_poly(4)) {
            let dense_sum = a.add(&b).unwrap();
            let sparse_sum = SparsePoly::from_dense(&a).add(&SparsePoly::from_dense(&b));
            for i in 0..=4 {
                prop_assert_eq!(sparse_sum.coeff(i), dense_sum.coeff(i));
            }
        }

        #[test]
        fn sparse_degree_is_highest_non_zero(a in small_poly(6)) {
            let sparse = SparsePoly::from_dense(&a);
            let expected = a.coeffs().iter().rposition(|c| *c != 0.0).unwrap_or(0);
            prop_assert_eq!(sparse.degree(), expected);
        }

        // (x - r_1)...(x - r_n) at 0 and 1

        #[test]
        fn from_roots_constant_term(roots in proptest::collection::vec(small_root(), 0..6)) {
            let p = DensePoly::from_roots(&roots);
            let expected = roots
                .iter()
                .fold(Q::one(), |acc, r| acc * -r.clone());
            prop_assert_eq!(p.coeff(0), expected);
        }

        #[test]
        fn from_roots_value_at_one(roots in proptest::collection::vec(small_root(), 0..6)) {
            let p = DensePoly::from_roots(&roots);
            let coeff_sum = p.coeffs().iter().cloned().fold(Q::zero(), |acc, c| acc + c);
            let expected = roots
                .iter()
                .fold(Q::one(), |acc, r| acc * (Q::one() - r.clone()));
            prop_assert_eq!(coeff_sum, expected);
            prop_assert!(p.leading_coeff().is_one());
        }
    }
}
