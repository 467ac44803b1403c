//! Real vectors tagged with the space they belong to.

use core::array;
use core::fmt::{self, Debug, Formatter};
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Index, Mul, Neg, Sub, SubAssign};

use super::approx::ApproxEq;
use super::float::fp;

/// A generic vector type.
///
/// # Type parameters
/// * `Repr`: the representation of the components of `Self`.
/// * `Space`: the space or coordinate basis that `Self` is an element of,
///   such as model, world, or view space. Vectors in different spaces
///   cannot be mixed without an explicit [`to`][Vector::to].
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound(
        serialize = "Repr: serde::Serialize",
        deserialize = "Repr: serde::Deserialize<'de>"
    ))
)]
pub struct Vector<Repr, Space = ()>(
    pub Repr,
    #[cfg_attr(feature = "serde", serde(skip))] PhantomData<Space>,
);

/// A 2-vector with `f32` components.
pub type Vec2<Basis = ()> = Vector<[f32; 2], Basis>;
/// A 3-vector with `f32` components.
pub type Vec3<Basis = ()> = Vector<[f32; 3], Basis>;
/// A 4-vector with `f32` components, used for homogeneous coordinates.
pub type Vec4<Basis = ()> = Vector<[f32; 4], Basis>;

/// Returns a new 2-vector with components `x` and `y`.
#[inline]
pub const fn vec2<B>(x: f32, y: f32) -> Vec2<B> {
    Vector([x, y], PhantomData)
}
/// Returns a new 3-vector with components `x`, `y`, and `z`.
#[inline]
pub const fn vec3<B>(x: f32, y: f32, z: f32) -> Vec3<B> {
    Vector([x, y, z], PhantomData)
}
/// Returns a new 4-vector with components `x`, `y`, `z`, and `w`.
#[inline]
pub const fn vec4<B>(x: f32, y: f32, z: f32, w: f32) -> Vec4<B> {
    Vector([x, y, z, w], PhantomData)
}

impl<Repr, Sp> Vector<Repr, Sp> {
    /// Returns a new vector with representation `repr`.
    #[inline]
    pub const fn new(repr: Repr) -> Self {
        Self(repr, PhantomData)
    }
}

impl<B, const N: usize> Vector<[f32; N], B> {
    /// Returns the zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self::new([0.0; N])
    }

    /// Returns `self` reinterpreted as a vector in another space.
    #[inline]
    pub fn to<C>(self) -> Vector<[f32; N], C> {
        Vector::new(self.0)
    }

    /// Returns the dot product of `self` and `other`.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        let mut res = 0.0;
        for i in 0..N {
            res += self.0[i] * other.0[i];
        }
        res
    }

    /// Returns the Euclidean length of `self`.
    #[inline]
    pub fn len(&self) -> f32 {
        fp::sqrt(self.dot(self))
    }

    /// Returns `self` scaled to unit length.
    ///
    /// The zero vector has no direction, so normalizing it returns the zero
    /// vector rather than a vector of NaNs.
    ///
    /// # Examples
    /// ```
    /// use lumibox_core::math::{vec3, Vec3};
    ///
    /// let v: Vec3 = vec3(3.0, 0.0, 4.0);
    /// assert_eq!(v.normalize(), vec3(0.6, 0.0, 0.8));
    /// assert_eq!(Vec3::<()>::zero().normalize(), Vec3::zero());
    /// ```
    #[must_use]
    pub fn normalize(&self) -> Self {
        let len = self.len();
        if len == 0.0 {
            Self::zero()
        } else {
            Self::new(array::from_fn(|i| self.0[i] / len))
        }
    }

    /// Linearly interpolates between `self` and `other`.
    ///
    /// if `t` = 0, returns `self`; if `t` = 1, returns `other`.
    #[inline]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self::new(array::from_fn(|i| {
            self.0[i] + (other.0[i] - self.0[i]) * t
        }))
    }

    /// Returns whether every component of `self` is finite.
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }
}

impl<B> Vec2<B> {
    /// Returns the x component of `self`.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.0[0]
    }
    /// Returns the y component of `self`.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.0[1]
    }
}

impl<B> Vec3<B> {
    /// Unit vector codirectional with the positive x-axis.
    pub const X: Self = vec3(1.0, 0.0, 0.0);
    /// Unit vector codirectional with the positive y-axis.
    pub const Y: Self = vec3(0.0, 1.0, 0.0);
    /// Unit vector codirectional with the positive z-axis.
    pub const Z: Self = vec3(0.0, 0.0, 1.0);

    /// Returns the x component of `self`.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.0[0]
    }
    /// Returns the y component of `self`.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.0[1]
    }
    /// Returns the z component of `self`.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.0[2]
    }

    /// Returns the cross product of `self` and `other`.
    ///
    /// # Examples
    /// ```
    /// use lumibox_core::math::{vec3, Vec3};
    ///
    /// assert_eq!(Vec3::<()>::X.cross(&Vec3::Y), Vec3::Z);
    /// assert_eq!(Vec3::<()>::Y.cross(&Vec3::X), -Vec3::<()>::Z);
    /// ```
    pub fn cross(&self, other: &Self) -> Self {
        let [a, b, c] = self.0;
        let [d, e, f] = other.0;
        vec3(b * f - c * e, c * d - a * f, a * e - b * d)
    }
}

impl<B> Vec4<B> {
    /// Returns the x component of `self`.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.0[0]
    }
    /// Returns the y component of `self`.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.0[1]
    }
    /// Returns the z component of `self`.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.0[2]
    }
    /// Returns the w component of `self`.
    #[inline]
    pub const fn w(&self) -> f32 {
        self.0[3]
    }
}

//
// Operator impls
//

impl<B, const N: usize> Add for Vector<[f32; N], B> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(array::from_fn(|i| self.0[i] + rhs.0[i]))
    }
}
impl<B, const N: usize> Sub for Vector<[f32; N], B> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(array::from_fn(|i| self.0[i] - rhs.0[i]))
    }
}
impl<B, const N: usize> Mul<f32> for Vector<[f32; N], B> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.0.map(|c| c * rhs))
    }
}
impl<B, const N: usize> Mul<Vector<[f32; N], B>> for f32 {
    type Output = Vector<[f32; N], B>;
    #[inline]
    fn mul(self, rhs: Vector<[f32; N], B>) -> Self::Output {
        rhs * self
    }
}
impl<B, const N: usize> Neg for Vector<[f32; N], B> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(self.0.map(|c| -c))
    }
}
impl<B, const N: usize> AddAssign for Vector<[f32; N], B> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
impl<B, const N: usize> SubAssign for Vector<[f32; N], B> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
impl<R: Index<usize>, B> Index<usize> for Vector<R, B> {
    type Output = R::Output;
    #[inline]
    fn index(&self, i: usize) -> &Self::Output {
        &self.0[i]
    }
}

//
// Foreign trait impls
//

// Manual impls to avoid bounds on the space type

impl<R: Clone, B> Clone for Vector<R, B> {
    fn clone(&self) -> Self {
        Self::new(self.0.clone())
    }
}
impl<R: Copy, B> Copy for Vector<R, B> {}

impl<R: PartialEq, B> PartialEq for Vector<R, B> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<R: Default, B> Default for Vector<R, B> {
    fn default() -> Self {
        Self::new(R::default())
    }
}

impl<R: Debug, B> Debug for Vector<R, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Vec{:?}", self.0)
    }
}

impl<R, B> From<R> for Vector<R, B> {
    #[inline]
    fn from(repr: R) -> Self {
        Self::new(repr)
    }
}

impl<B, const N: usize> ApproxEq<Self, f32> for Vector<[f32; N], B> {
    fn approx_eq_eps(&self, other: &Self, eps: &f32) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
    fn relative_epsilon() -> f32 {
        f32::relative_epsilon()
    }
}
