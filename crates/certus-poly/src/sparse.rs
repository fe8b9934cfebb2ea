//! Sparse univariate polynomials.
//!
//! This module provides a degree → coefficient map for polynomials with
//! few non-zero terms.

use std::collections::BTreeMap;

use certus_rings::{Real, Ring};

use crate::dense::DensePoly;
use crate::traits::Univariate;

/// A sparse univariate polynomial.
///
/// Terms are kept in a `BTreeMap` keyed by degree, so iteration runs in
/// ascending degree. The degree is never stored; see [`SparsePoly::degree`].
#[derive(Clone, PartialEq, Debug, Default)]
pub struct SparsePoly<R: Ring> {
    terms: BTreeMap<usize, R>,
}

impl<R: Ring> SparsePoly<R> {
    /// Creates the zero polynomial (no terms).
    #[must_use]
    pub fn new() -> Self {
        Self {
            terms: BTreeMap::new(),
        }
    }

    /// Creates a polynomial from `(degree, coefficient)` pairs.
    ///
    /// A repeated degree replaces the earlier coefficient, as with [`insert`].
    ///
    /// [`insert`]: SparsePoly::insert
    #[must_use]
    pub fn from_terms(terms: impl IntoIterator<Item = (usize, R)>) -> Self {
        Self {
            terms: terms.into_iter().collect(),
        }
    }

    /// Creates a sparse polynomial holding the non-zero coefficients of `dense`.
    #[must_use]
    pub fn from_dense(dense: &DensePoly<R>) -> Self {
        Self::from_terms(
            dense
                .coeffs()
                .iter()
                .enumerate()
                .filter(|(_, c)| !c.is_zero())
                .map(|(i, c)| (i, c.clone())),
        )
    }

    /// Sets the coefficient of x^degree, returning the previous one.
    pub fn insert(&mut self, degree: usize, coeff: R) -> Option<R> {
        self.terms.insert(degree, coeff)
    }

    /// Returns the coefficient of x^degree, zero when absent.
    #[must_use]
    pub fn coeff(&self, degree: usize) -> R {
        self.terms.get(&degree).cloned().unwrap_or_else(R::zero)
    }

    /// Returns true if a term of this degree is stored.
    #[must_use]
    pub fn contains_degree(&self, degree: usize) -> bool {
        self.terms.contains_key(&degree)
    }

    /// Returns the number of stored terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no stored terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterates over stored terms in ascending degree.
    pub fn terms(&self) -> impl DoubleEndedIterator<Item = (usize, &R)> + '_ {
        self.terms.iter().map(|(d, c)| (*d, c))
    }

    /// Adds two polynomials: the union of their terms, with coefficients
    /// summed where both have one.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let mut terms = self.terms.clone();
        for (d, c) in &other.terms {
            terms
                .entry(*d)
                .and_modify(|a| *a = a.clone() + c.clone())
                .or_insert_with(|| c.clone());
        }
        Self { terms }
    }
}

impl<R: Real> SparsePoly<R> {
    /// Returns the degree: the highest stored degree whose coefficient
    /// exceeds machine epsilon in magnitude, or 0 if there is none.
    ///
    /// Recomputed on every call.
    #[must_use]
    pub fn degree(&self) -> usize {
        let eps = R::epsilon();
        self.terms
            .iter()
            .rev()
            .find(|(_, c)| c.abs() > eps)
            .map_or(0, |(d, _)| *d)
    }

    /// Expands into a dense polynomial of degree [`degree`](Self::degree).
    ///
    /// Terms above the degree are negligible by definition and dropped.
    #[must_use]
    pub fn to_dense(&self) -> DensePoly<R> {
        let mut dense = DensePoly::zeros(self.degree());
        let degree = dense.degree();
        for (d, c) in self.terms.range(..=degree) {
            dense[*d] = c.clone();
        }
        dense
    }
}

impl<R: Real> Univariate<R> for SparsePoly<R> {
    fn degree(&self) -> usize {
        SparsePoly::degree(self)
    }

    fn coeff(&self, i: usize) -> R {
        SparsePoly::coeff(self, i)
    }
}
