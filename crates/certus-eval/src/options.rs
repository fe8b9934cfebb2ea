//! Evaluation options.

use certus_eft::ProductAlgorithm;

/// Configuration shared by the error-tracking schemes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EvalOptions {
    /// How the rounding error of each multiplication is recovered.
    pub product: ProductAlgorithm,
}

impl EvalOptions {
    /// Options suited to the compilation target.
    ///
    /// `mul_add` is always correctly rounded, but without a hardware FMA it
    /// goes through a slow software routine; Dekker's product is then the
    /// faster way to the same result.
    #[must_use]
    pub fn native() -> Self {
        let product = if cfg!(target_feature = "fma") {
            ProductAlgorithm::Fused
        } else {
            ProductAlgorithm::Split
        };
        Self { product }
    }

    /// Returns these options with a different product algorithm.
    #[must_use]
    pub fn with_product(mut self, product: ProductAlgorithm) -> Self {
        self.product = product;
        self
    }
}
