//! # certus-rings
//!
//! Numeric traits for certus.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `Field`, `OrderedRing`, `Real`
//! - Implementations for `f32` and `f64` (IEEE-754 binary formats)
//! - The exact rational field `Q`, a drop-in `Real` with no rounding
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  ├── Field ────────┐
//!  └── OrderedRing ──┴── Real
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod floats;
pub mod rationals;
pub mod traits;

pub use rationals::Q;
pub use traits::{Field, OrderedRing, Real, Ring};
