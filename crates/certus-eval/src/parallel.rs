//! Batch evaluation over many points.
//!
//! Points are independent, so large batches are spread over the rayon
//! thread pool. Small batches run sequentially.

use rayon::prelude::*;

use certus_poly::Univariate;
use certus_rings::Real;

use crate::bound::{certified_horner_with, Certified};
use crate::compensated::compensated_horner_with;
use crate::error::Result;
use crate::options::EvalOptions;

/// Configuration for batch evaluation.
#[derive(Clone, Debug)]
pub struct ParallelConfig {
    /// Minimum number of points to enable parallelism.
    pub parallel_threshold: usize,
    /// Options passed to every evaluation.
    pub options: EvalOptions,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 1024,
            options: EvalOptions::default(),
        }
    }
}

/// Evaluates `poly` at every point with compensated Horner.
///
/// Results are in the order of `points`.
pub fn compensated_many<R, P>(poly: &P, points: &[R], config: &ParallelConfig) -> Vec<R>
where
    R: Real + Send + Sync,
    P: Univariate<R> + Sync + ?Sized,
{
    let eval = |x: &R| compensated_horner_with(poly, x, &config.options);
    if points.len() < config.parallel_threshold {
        points.iter().map(eval).collect()
    } else {
        points.par_iter().map(eval).collect()
    }
}

/// Evaluates `poly` at every point with [`certified_horner`], in the order
/// of `points`.
///
/// # Errors
///
/// Returns the first error [`certified_horner`] reports for any point.
///
/// [`certified_horner`]: crate::certified_horner
pub fn certified_many<R, P>(
    poly: &P,
    points: &[R],
    config: &ParallelConfig,
) -> Result<Vec<Certified<R>>>
where
    R: Real + Send + Sync,
    P: Univariate<R> + Sync + ?Sized,
{
    let eval = |x: &R| certified_horner_with(poly, x, &config.options);
    if points.len() < config.parallel_threshold {
        points.iter().map(eval).collect()
    } else {
        points.par_iter().map(eval).collect()
    }
}
