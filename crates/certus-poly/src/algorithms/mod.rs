//! Polynomial algorithms.

pub mod expand;

pub use expand::monic_from_roots;
