//! IEEE-754 binary floating-point types.
//!
//! `f32` and `f64` implement the numeric traits by delegating to
//! `num_traits::Float`. The split factor is `2^ceil(p/2) + 1` where `p` is
//! the number of significand digits (24 and 53).

use num_traits::Float;

use crate::traits::{Field, OrderedRing, Real, Ring};

macro_rules! impl_binary_float {
    ($t:ty, $digits:expr, $max_exp:expr) => {
        impl Ring for $t {
            fn zero() -> Self {
                0.0
            }

            fn one() -> Self {
                1.0
            }

            fn is_zero(&self) -> bool {
                *self == 0.0
            }

            fn is_one(&self) -> bool {
                *self == 1.0
            }
        }

        impl Field for $t {}

        impl OrderedRing for $t {
            fn abs(&self) -> Self {
                Float::abs(*self)
            }
        }

        impl Real for $t {
            fn epsilon() -> Self {
                <$t as Float>::epsilon()
            }

            fn unit_roundoff() -> Self {
                <$t as Float>::epsilon() / 2.0
            }

            #[allow(clippy::cast_precision_loss)]
            fn from_usize(n: usize) -> Self {
                n as $t
            }

            fn mul_add(&self, a: &Self, b: &Self) -> Self {
                Float::mul_add(*self, *a, *b)
            }

            fn split(&self) -> (Self, Self) {
                #[allow(clippy::cast_precision_loss)]
                const FACTOR: $t = ((1u64 << (($digits + 1) / 2)) + 1) as $t;
                let c = FACTOR * *self;
                let hi = c - (c - *self);
                (hi, *self - hi)
            }

            // FACTOR * x stays finite for |x| <= 2^(MAX_EXP - SHIFT).
            #[allow(clippy::cast_possible_wrap)]
            fn split_limit() -> Option<Self> {
                const SHIFT: i32 = (($digits + 1) / 2 + 1) as i32;
                Some(Float::powi(2.0 as $t, $max_exp - SHIFT))
            }

            #[allow(clippy::cast_possible_wrap)]
            fn split_scale() -> Self {
                const SHIFT: i32 = (($digits + 1) / 2 + 1) as i32;
                Float::powi(2.0 as $t, SHIFT)
            }

            fn underflow_threshold() -> Self {
                <$t as Float>::min_positive_value() / <Self as Real>::unit_roundoff()
            }

            fn is_finite(&self) -> bool {
                Float::is_finite(*self)
            }
        }
    };
}

impl_binary_float!(f32, f32::MANTISSA_DIGITS, f32::MAX_EXP);
impl_binary_float!(f64, f64::MANTISSA_DIGITS, f64::MAX_EXP);
