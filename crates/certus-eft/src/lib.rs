//! # certus-eft
//!
//! Error-free transformations (EFT) of floating-point operations.
//!
//! Each transformation returns the rounded result of an operation together
//! with the exact rounding error, computed in the same working precision:
//!
//! - [`two_sum`]: `a + b = s + e`
//! - [`two_product_fma`] and [`two_product_split`]: `a * b = p + e`
//!
//! The functions are generic over [`certus_rings::Real`]. Over the exact
//! rationals every error term is zero.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod product;
pub mod sum;

#[cfg(test)]
mod proptests;

pub use product::{two_product_fma, two_product_split, ProductAlgorithm};
pub use sum::two_sum;
