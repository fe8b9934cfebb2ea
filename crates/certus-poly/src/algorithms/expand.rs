//! Expansion of a product of linear factors.

use certus_rings::Ring;

/// Coefficients of the monic polynomial `(x - r_1)(x - r_2)...(x - r_n)`.
///
/// Index 0 holds the constant term. Each root multiplies the running
/// product by `(x - r)` in place, from the highest coefficient down.
#[must_use]
pub fn monic_from_roots<R: Ring>(roots: &[R]) -> Vec<R> {
    let n = roots.len();
    let mut coeffs = vec![R::zero(); n + 1];
    coeffs[0] = R::one();

    for r in roots {
        for j in (1..=n).rev() {
            coeffs[j] = coeffs[j - 1].clone() - r.clone() * coeffs[j].clone();
        }
        coeffs[0] = coeffs[0].clone() * -r.clone();
    }

    coeffs
}
