//! Uncompensated evaluation.

use certus_poly::Univariate;
use certus_rings::{OrderedRing, Ring};

/// Evaluates `poly` at `x` with Horner's scheme.
///
/// The accumulator starts at the leading coefficient and is updated as
/// `acc * x + a_i` for `i = N-1, ..., 0`, with the product and the sum
/// rounded separately. A degree-0 polynomial yields its coefficient.
#[must_use]
pub fn horner<R, P>(poly: &P, x: &R) -> R
where
    R: Ring,
    P: Univariate<R> + ?Sized,
{
    let n = poly.degree();
    let mut acc = poly.coeff(n);
    for i in (0..n).rev() {
        acc = acc * x.clone() + poly.coeff(i);
    }
    acc
}

/// Evaluates `poly` at `x` as `sum a_i * x^i`, each power formed by
/// repeated multiplication. The least accurate baseline.
#[must_use]
pub fn naive_eval<R, P>(poly: &P, x: &R) -> R
where
    R: Ring,
    P: Univariate<R> + ?Sized,
{
    let mut sum = R::zero();
    for i in 0..=poly.degree() {
        #[allow(clippy::cast_possible_truncation)]
        let power = x.pow(i as u32);
        sum = sum + poly.coeff(i) * power;
    }
    sum
}

/// Coefficient magnitudes of a borrowed polynomial, `sum |a_i| x^i`.
pub(crate) struct Magnitudes<'a, P: ?Sized>(pub(crate) &'a P);

impl<R, P> Univariate<R> for Magnitudes<'_, P>
where
    R: OrderedRing,
    P: Univariate<R> + ?Sized,
{
    fn degree(&self) -> usize {
        self.0.degree()
    }

    fn coeff(&self, i: usize) -> R {
        self.0.coeff(i).abs()
    }
}
