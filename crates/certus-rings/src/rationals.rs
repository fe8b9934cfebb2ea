//! The field of rational numbers Q.
//!
//! `Q` implements `Real` as a format with unlimited precision, which lets
//! any evaluation scheme run over exact arithmetic for reference values.

use certus_integers::Rational;
use num_traits::{One, Zero};

use crate::traits::{Field, OrderedRing, Real, Ring};

/// The field of rational numbers.
///
/// This is a wrapper around `certus_integers::Rational` that implements
/// the numeric traits.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Q(pub Rational);

impl Q {
    /// Creates a new rational from numerator and denominator.
    #[must_use]
    pub fn new(num: i64, den: i64) -> Self {
        Self(Rational::from_i64(num, den))
    }

    /// Creates a rational from an integer.
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self(Rational::from(n))
    }

    /// Converts a finite `f64` exactly. Returns `None` for NaN and infinities.
    #[must_use]
    pub fn from_f64(value: f64) -> Option<Self> {
        Rational::from_f64(value).map(Self)
    }

    /// Converts a finite `f32` exactly. Returns `None` for NaN and infinities.
    #[must_use]
    pub fn from_f32(value: f32) -> Option<Self> {
        Rational::from_f32(value).map(Self)
    }

    /// Returns the inner Rational.
    #[must_use]
    pub fn into_inner(self) -> Rational {
        self.0
    }

    /// Returns a reference to the inner Rational.
    #[must_use]
    pub fn as_inner(&self) -> &Rational {
        &self.0
    }
}

impl Ring for Q {
    fn zero() -> Self {
        Self(Rational::zero())
    }

    fn one() -> Self {
        Self(Rational::one())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn is_one(&self) -> bool {
        self.0.is_one()
    }

    fn pow(&self, n: u32) -> Self {
        Self(self.0.pow(n))
    }
}

impl Field for Q {
    fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(Self(self.0.recip()))
        }
    }
}

impl OrderedRing for Q {
    fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    fn signum(&self) -> i8 {
        self.0.signum()
    }
}

impl Real for Q {
    fn epsilon() -> Self {
        Self::zero()
    }

    fn unit_roundoff() -> Self {
        Self::zero()
    }

    fn from_usize(n: usize) -> Self {
        Self(Rational::from(n as u64))
    }

    fn mul_add(&self, a: &Self, b: &Self) -> Self {
        Self(&(&self.0 * &a.0) + &b.0)
    }

    fn split(&self) -> (Self, Self) {
        (self.clone(), Self::zero())
    }

    fn split_limit() -> Option<Self> {
        None
    }

    fn split_scale() -> Self {
        Self::one()
    }

    fn underflow_threshold() -> Self {
        Self::zero()
    }

    fn is_finite(&self) -> bool {
        true
    }
}

impl std::ops::Add for Q {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Q {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl std::ops::Mul for Q {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl std::ops::Div for Q {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self(self.0 / rhs.0)
    }
}

impl std::ops::Neg for Q {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Q {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<Rational> for Q {
    fn from(value: Rational) -> Self {
        Self(value)
    }
}
