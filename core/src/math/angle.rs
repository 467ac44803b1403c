//! Angular quantities.

use core::f32::consts::PI;
use core::fmt::{self, Debug, Display};
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use super::approx::ApproxEq;
use super::float::fp;

/// A scalar angular quantity.
///
/// Prevents confusion between degrees and radians by requiring the use of
/// one of the named constructors to create an `Angle`, as well as one of
/// the named getter methods to obtain the angle as a raw `f32` value.
#[derive(Copy, Clone, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Angle(f32);

/// Returns an angle of `a` radians.
pub const fn rads(a: f32) -> Angle {
    Angle(a)
}

/// Returns an angle of `a` degrees.
pub const fn degs(a: f32) -> Angle {
    Angle(a * RADS_PER_DEG)
}

const RADS_PER_DEG: f32 = PI / 180.0;

impl Angle {
    /// A zero degree angle.
    pub const ZERO: Self = Self(0.0);

    /// Returns the value of `self` in radians.
    /// # Examples
    /// ```
    /// # use lumibox_core::{assert_approx_eq, math::degs};
    /// assert_approx_eq!(degs(180.0).to_rads(), core::f32::consts::PI);
    /// ```
    pub const fn to_rads(self) -> f32 {
        self.0
    }
    /// Returns the value of `self` in degrees.
    pub fn to_degs(self) -> f32 {
        self.0 / RADS_PER_DEG
    }

    /// Returns `self` clamped to the range `min..=max`.
    ///
    /// # Examples
    /// ```
    /// # use lumibox_core::math::angle::degs;
    /// let (min, max) = (degs(-89.0), degs(89.0));
    ///
    /// assert_eq!(degs(100.0).clamp(min, max), max);
    /// assert_eq!(degs(30.0).clamp(min, max), degs(30.0));
    /// ```
    #[must_use]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self(self.0.clamp(min.0, max.0))
    }

    /// Returns the sine of `self`.
    pub fn sin(self) -> f32 {
        fp::sin(self.0)
    }
    /// Returns the cosine of `self`.
    pub fn cos(self) -> f32 {
        fp::cos(self.0)
    }
    /// Returns the tangent of `self`.
    pub fn tan(self) -> f32 {
        fp::tan(self.0)
    }
    /// Returns both the sine and the cosine of `self`.
    pub fn sin_cos(self) -> (f32, f32) {
        (self.sin(), self.cos())
    }
}

impl Add for Angle {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}
impl Sub for Angle {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}
impl AddAssign for Angle {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}
impl SubAssign for Angle {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}
impl Mul<f32> for Angle {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self(self.0 * rhs)
    }
}
impl Neg for Angle {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl ApproxEq for Angle {
    fn approx_eq_eps(&self, other: &Self, eps: &Self) -> bool {
        self.0.approx_eq_eps(&other.0, &eps.0)
    }
    fn relative_epsilon() -> Self {
        Self(f32::relative_epsilon())
    }
}

impl Debug for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Angle({}°)", self.to_degs())
    }
}

impl Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.to_degs(), f)?;
        f.write_str("°")
    }
}
