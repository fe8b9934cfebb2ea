//! # certus-eval
//!
//! Accurate evaluation of univariate polynomials.
//!
//! This crate provides:
//! - Plain Horner and naive power-sum evaluation
//! - Error-tracking Horner, which recovers every rounding error exactly
//! - Compensated Horner, as accurate as Horner in twice the precision
//! - Condition numbers and a certified a-priori error bound
//! - Exact reference evaluation over the rationals
//! - Batch evaluation with rayon
//!
//! # Example
//!
//! ```
//! use certus_eval::{certified_horner, horner};
//! use certus_poly::DensePoly;
//!
//! // (x - 1)^5 near its root
//! let p = DensePoly::from_roots(&[1.0; 5]);
//! let x = 0.999_374_655_6;
//!
//! let plain = horner(&p, &x);
//! let certified = certified_horner(&p, &x).unwrap();
//!
//! assert_eq!(plain, 0.0);
//! assert!(certified.value < 0.0);
//! assert!(certified.bound < 1e-29);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bound;
pub mod compensated;
pub mod condition;
pub mod eft_horner;
pub mod error;
pub mod horner;
pub mod options;
pub mod parallel;
pub mod reference;

#[cfg(test)]
mod proptests;

pub use bound::{certified_horner, certified_horner_with, error_bound, gamma, Certified};
pub use compensated::{compensated_horner, compensated_horner_with};
pub use condition::condition_number;
pub use eft_horner::{eft_horner, EftHorner, ErrorTerms};
pub use error::{EvalError, Result};
pub use horner::{horner, naive_eval};
pub use options::EvalOptions;
