//! Property-based tests for the evaluation schemes.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::reference::{exact_error, exact_value, to_exact_poly};
    use crate::{certified_horner_with, eft_horner, horner, EvalOptions};
    use certus_eft::ProductAlgorithm;
    use certus_poly::DensePoly;
    use certus_rings::{Ring, Q};

    fn poly() -> impl Strategy<Value = DensePoly<f64>> {
        proptest::collection::vec(-1e3..1e3f64, 2..12).prop_map(|c| DensePoly::new(c).unwrap())
    }

    fn product() -> impl Strategy<Value = ProductAlgorithm> {
        prop_oneof![Just(ProductAlgorithm::Fused), Just(ProductAlgorithm::Split)]
    }

    proptest! {
        #[test]
        fn eft_horner_is_exact(p in poly(), x in -2.0..2.0f64, product in product()) {
            let options = EvalOptions::default().with_product(product);
            let out = eft_horner(&p, &x, &options);
            let terms = out.terms.unwrap();

            let qx = Q::from_f64(x).unwrap();
            let pi = horner(&to_exact_poly(&terms.pi).unwrap(), &qx);
            let sigma = horner(&to_exact_poly(&terms.sigma).unwrap(), &qx);
            let value = Q::from_f64(out.value).unwrap();

            prop_assert_eq!(value + pi + sigma, exact_value(&p, &x).unwrap());
        }

        #[test]
        fn certified_bound_holds(p in poly(), x in -2.0..2.0f64, product in product()) {
            let options = EvalOptions::default().with_product(product);
            let certified = certified_horner_with(&p, &x, &options).unwrap();
            let err = exact_error(&certified.value, &p, &x).unwrap();
            prop_assert!(err <= Q::from_f64(certified.bound).unwrap());
        }

        #[test]
        fn exact_roots_evaluate_to_zero(
            roots in proptest::collection::vec((-50i32..50i32).prop_map(f64::from), 1..6),
            pick in any::<prop::sample::Index>(),
        ) {
            // integer roots: the expansion and every evaluation step are exact
            let p = DensePoly::from_roots(&roots);
            let x = roots[pick.index(roots.len())];
            prop_assert!(exact_value(&p, &x).unwrap().is_zero());
        }
    }
}
