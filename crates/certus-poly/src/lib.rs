//! # certus-poly
//!
//! Univariate polynomial value types for certus.
//!
//! This crate provides:
//! - Dense polynomials with a degree fixed at construction
//! - Sparse polynomials as a degree → coefficient map
//! - The `Univariate` trait the evaluation schemes are written against
//! - Expansion of roots into monic coefficients
//!
//! Both representations are plain values: evaluation borrows them and
//! never mutates them.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod dense;
pub mod error;
pub mod sparse;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use dense::DensePoly;
pub use error::PolyError;
pub use sparse::SparsePoly;
pub use traits::Univariate;
