//! Linear algebra and other useful mathematics.
//!
//! Includes [vectors][self::vec], [matrices][mat], [colors][color] and
//! [angles][angle], as well as utilities such as approximate equality
//! comparisons.
//!
//! Vectors are tagged with a type that represents the *space* they're
//! embedded in, and values in different spaces cannot be mixed without
//! explicit conversion. Matrices, similarly, are tagged by both source and
//! destination space, and can only be applied to matching vectors.

pub use {
    angle::{degs, rads, Angle},
    approx::ApproxEq,
    color::{rgb, rgba, Color, Color3, Color4},
    mat::{
        chain, look_at, perspective, rotate_x, rotate_y, rotate_z, scale,
        translate, viewport, Mat4, Mat4x4, ProjMat4,
    },
    vec::{vec2, vec3, vec4, Vec2, Vec3, Vec4, Vector},
};

pub mod angle;
pub mod approx;
pub mod color;
pub mod float;
pub mod mat;
pub mod vec;

/// Linearly interpolates between two values.
///
/// if `t` = 0, returns `from`; if `t` = 1, returns `to`.
///
/// # Examples
/// ```
/// use lumibox_core::math::lerp;
///
/// assert_eq!(lerp(0.25, 1.0, 5.0), 2.0);
/// ```
#[inline]
pub fn lerp(t: f32, from: f32, to: f32) -> f32 {
    from + (to - from) * t
}

/// Clamps `x` to the unit interval [0, 1]. Non-finite values map to zero.
///
/// # Examples
/// ```
/// use lumibox_core::math::clamp_unit;
///
/// assert_eq!(clamp_unit(1.5), 1.0);
/// assert_eq!(clamp_unit(-0.5), 0.0);
/// assert_eq!(clamp_unit(f32::NAN), 0.0);
/// ```
#[inline]
pub fn clamp_unit(x: f32) -> f32 {
    if x.is_finite() { x.clamp(0.0, 1.0) } else { 0.0 }
}
