//! # certus-integers
//!
//! Arbitrary precision integer and rational arithmetic for certus.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Arbitrary precision rationals (`Rational`), with exact conversion
//!   from finite `f32` and `f64` values
//!
//! Rationals serve as the exact reference when measuring how far a
//! floating-point evaluation strayed from the true value.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use rational::Rational;
