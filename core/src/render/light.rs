//! Light sources

use crate::math::{vec3, Vec3};

use super::View;

/// A directional light source "at infinity", so that the light rays arrive
/// parallel and the direction of the light is the same for every point.
///
/// Surfaces are lit with Lambertian diffuse shading on top of a constant
/// ambient term, so that faces turned away from the light never go fully
/// black.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Light<B = View> {
    dir: Vec3<B>,
    /// Minimum brightness of any surface, in [0, 1].
    pub ambient: f32,
}

impl<B> Light<B> {
    /// Default ambient brightness.
    pub const AMBIENT: f32 = 0.4;

    /// Creates a directional light pointing towards `dir`.
    ///
    /// `dir` is normalized; a zero vector yields a light that only
    /// contributes the ambient term.
    pub fn directional(dir: Vec3<B>) -> Self {
        Self {
            dir: dir.normalize(),
            ambient: Self::AMBIENT,
        }
    }

    /// Returns the unit direction towards the light.
    #[inline]
    pub fn dir(&self) -> Vec3<B> {
        self.dir
    }

    /// Returns the diffuse intensity, max(0, `n` · dir), of a surface with
    /// unit normal `n`.
    #[inline]
    pub fn lambert(&self, n: &Vec3<B>) -> f32 {
        n.dot(&self.dir).max(0.0)
    }

    /// Returns the total brightness of a surface with unit normal `n`,
    /// between [`ambient`][Self::ambient] and 1.
    ///
    /// # Examples
    /// ```
    /// use lumibox_core::assert_approx_eq;
    /// use lumibox_core::math::vec3;
    /// use lumibox_core::render::light::Light;
    /// use lumibox_core::render::View;
    ///
    /// let l = Light::<View>::directional(vec3(0.0, 0.0, -2.0));
    /// assert_approx_eq!(l.brightness(&vec3(0.0, 0.0, -1.0)), 1.0);
    /// assert_eq!(l.brightness(&vec3(0.0, 0.0, 1.0)), 0.4);
    /// ```
    pub fn brightness(&self, n: &Vec3<B>) -> f32 {
        self.ambient + (1.0 - self.ambient) * self.lambert(n)
    }
}

impl<B> Default for Light<B> {
    /// Returns a light from above and behind the default camera.
    fn default() -> Self {
        Self::directional(vec3(1.0, 12.0, 12.0))
    }
}
