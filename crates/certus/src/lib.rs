//! # Certus
//!
//! Accurate evaluation of univariate polynomials in floating-point
//! arithmetic.
//!
//! Certus evaluates polynomials with compensated Horner: error-free
//! transformations recover the rounding error of every step, and a second
//! pass folds that error back in. The result is as accurate as if the
//! evaluation had been carried out in twice the working precision, and it
//! comes with a certified bound on the remaining error.
//!
//! ## Features
//!
//! - **Error-Free Transformations**: `two_sum`, and `two_product` via FMA or
//!   Dekker's split
//! - **Evaluation Schemes**: plain, error-tracking and compensated Horner
//! - **Certified Bounds**: an a-priori forward error bound and condition
//!   numbers
//! - **Exact Reference**: every scheme also runs over exact rationals
//! - **Polynomials**: dense with a fixed degree, sparse as a degree map
//!
//! ## Quick Start
//!
//! ```rust
//! use certus::prelude::*;
//!
//! let p = DensePoly::from_roots(&[1.0; 5]);
//! let x = 0.999_999_999;
//!
//! let certified = certified_horner(&p, &x).unwrap();
//! let err = exact_error(&certified.value, &p, &x).unwrap();
//! assert!(err <= Q::from_f64(certified.bound).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use certus_eft as eft;
pub use certus_eval as eval;
pub use certus_integers as integers;
pub use certus_poly as poly;
pub use certus_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use certus_eft::{two_product_fma, two_product_split, two_sum, ProductAlgorithm};
    pub use certus_eval::reference::{exact_error, exact_value};
    pub use certus_eval::{
        certified_horner, compensated_horner, condition_number, error_bound, horner,
        Certified, EvalError, EvalOptions,
    };
    pub use certus_integers::{Integer, Rational};
    pub use certus_poly::{DensePoly, SparsePoly, Univariate};
    pub use certus_rings::{Field, OrderedRing, Real, Ring, Q};
}
