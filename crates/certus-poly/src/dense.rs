//! Dense univariate polynomials.
//!
//! A dense polynomial of degree N stores all N + 1 coefficients
//! contiguously, in ascending degree order.

use std::ops::{Index, IndexMut};

use certus_rings::{OrderedRing, Ring};

use crate::algorithms::monic_from_roots;
use crate::error::PolyError;
use crate::traits::Univariate;

/// A dense univariate polynomial with a fixed degree.
///
/// Unlike a normalized representation, trailing zero coefficients are
/// kept: the degree is whatever it was at construction. The auxiliary
/// error polynomials of compensated evaluation rely on this, since their
/// leading entries are frequently zero.
#[derive(Clone, PartialEq, Debug)]
pub struct DensePoly<R: Ring> {
    /// Coefficients in ascending degree order, never empty.
    coeffs: Vec<R>,
}

impl<R: Ring> DensePoly<R> {
    /// Creates a polynomial of degree `coeffs.len() - 1`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::Empty`] when `coeffs` is empty.
    pub fn new(coeffs: Vec<R>) -> Result<Self, PolyError> {
        if coeffs.is_empty() {
            return Err(PolyError::Empty);
        }
        Ok(Self { coeffs })
    }

    /// Creates the polynomial of the given degree with all coefficients zero.
    #[must_use]
    pub fn zeros(degree: usize) -> Self {
        Self {
            coeffs: vec![R::zero(); degree + 1],
        }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: R) -> Self {
        Self { coeffs: vec![c] }
    }

    /// Creates the monic polynomial whose roots are `roots`, with
    /// multiplicity. The degree is `roots.len()`.
    #[must_use]
    pub fn from_roots(roots: &[R]) -> Self {
        Self {
            coeffs: monic_from_roots(roots),
        }
    }

    /// Returns the degree of the polynomial.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns the leading coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> &R {
        &self.coeffs[self.degree()]
    }

    /// Returns the coefficient of x^i, zero beyond the degree.
    #[must_use]
    pub fn coeff(&self, i: usize) -> R {
        self.coeffs.get(i).cloned().unwrap_or_else(R::zero)
    }

    /// Returns all coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[R] {
        &self.coeffs
    }

    /// Returns mutable access to coefficients. The degree cannot change.
    pub fn coeffs_mut(&mut self) -> &mut [R] {
        &mut self.coeffs
    }

    /// Consumes the polynomial, returning its coefficients.
    #[must_use]
    pub fn into_coeffs(self) -> Vec<R> {
        self.coeffs
    }

    /// Adds two polynomials of the same degree, coefficient by coefficient.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DegreeMismatch`] when the degrees differ.
    pub fn add(&self, other: &Self) -> Result<Self, PolyError> {
        if self.degree() != other.degree() {
            return Err(PolyError::DegreeMismatch {
                lhs: self.degree(),
                rhs: other.degree(),
            });
        }

        let coeffs = self
            .coeffs
            .iter()
            .zip(&other.coeffs)
            .map(|(a, b)| a.clone() + b.clone())
            .collect();
        Ok(Self { coeffs })
    }

    /// Applies `f` to every coefficient, keeping the degree.
    #[must_use]
    pub fn map<S: Ring>(&self, f: impl FnMut(&R) -> S) -> DensePoly<S> {
        DensePoly {
            coeffs: self.coeffs.iter().map(f).collect(),
        }
    }
}

impl<R: OrderedRing> DensePoly<R> {
    /// Returns the polynomial of absolute values `sum |a_i| x^i`.
    #[must_use]
    pub fn abs(&self) -> Self {
        self.map(R::abs)
    }
}

impl<R: Ring> Univariate<R> for DensePoly<R> {
    fn degree(&self) -> usize {
        DensePoly::degree(self)
    }

    fn coeff(&self, i: usize) -> R {
        DensePoly::coeff(self, i)
    }
}

impl<R: Ring> Index<usize> for DensePoly<R> {
    type Output = R;

    fn index(&self, i: usize) -> &R {
        &self.coeffs[i]
    }
}

impl<R: Ring> IndexMut<usize> for DensePoly<R> {
    fn index_mut(&mut self, i: usize) -> &mut R {
        &mut self.coeffs[i]
    }
}
