//! Floating-point compatibility API.
//!
//! Most floating-point functions are unavailable in `no_std`. This module
//! provides the functions needed by the crate using either `std`, the `libm`
//! crate, or the `micromath` crate, depending on which feature is enabled.
//! The chosen implementation is re-exported as [`fp`].

#[cfg(feature = "std")]
pub mod stdlib {
    #[inline]
    pub fn sqrt(x: f32) -> f32 {
        x.sqrt()
    }
    #[inline]
    pub fn powf(x: f32, y: f32) -> f32 {
        x.powf(y)
    }
    #[inline]
    pub fn floor(x: f32) -> f32 {
        x.floor()
    }
    #[inline]
    pub fn round(x: f32) -> f32 {
        x.round()
    }
    #[inline]
    pub fn rem_euclid(x: f32, m: f32) -> f32 {
        x.rem_euclid(m)
    }
    #[inline]
    pub fn sin(x: f32) -> f32 {
        x.sin()
    }
    #[inline]
    pub fn cos(x: f32) -> f32 {
        x.cos()
    }
    #[inline]
    pub fn tan(x: f32) -> f32 {
        x.tan()
    }
}

#[cfg(feature = "libm")]
pub mod libm {
    pub use libm::floorf as floor;
    pub use libm::powf;
    pub use libm::roundf as round;
    pub use libm::sqrtf as sqrt;

    pub use libm::cosf as cos;
    pub use libm::sinf as sin;
    pub use libm::tanf as tan;

    pub use super::fallback::rem_euclid;
}

#[cfg(feature = "mm")]
pub mod mm {
    use micromath::F32Ext as mm;

    #[inline]
    pub fn floor(x: f32) -> f32 {
        mm::floor(x)
    }
    #[inline]
    pub fn round(x: f32) -> f32 {
        mm::round(x)
    }
    #[inline]
    pub fn rem_euclid(x: f32, m: f32) -> f32 {
        mm::rem_euclid(x, m)
    }
    /// Returns the approximate square root of `x`.
    #[inline]
    pub fn sqrt(x: f32) -> f32 {
        if x == 0.0 {
            return 0.0;
        }
        let y = mm::sqrt(x);
        // Two rounds of Newton's method
        let y = 0.5 * (y + (x / y));
        0.5 * (y + (x / y))
    }
    #[inline]
    pub fn powf(x: f32, y: f32) -> f32 {
        mm::powf(x, y)
    }
    #[inline]
    pub fn sin(x: f32) -> f32 {
        mm::sin(x)
    }
    #[inline]
    pub fn cos(x: f32) -> f32 {
        mm::cos(x)
    }
    #[inline]
    pub fn tan(x: f32) -> f32 {
        mm::tan(x)
    }
}

pub mod fallback {
    /// Returns the least non-negative remainder of `x` (mod `m`).
    #[inline]
    pub fn rem_euclid(x: f32, m: f32) -> f32 {
        let r = x % m;
        r + if r < 0.0 { abs(m) } else { 0.0 }
    }
    /// Returns the absolute value of `x`.
    #[inline]
    pub fn abs(x: f32) -> f32 {
        f32::from_bits(x.to_bits() & 0x7FFF_FFFF)
    }
}

pub use fallback::abs;

#[cfg(feature = "std")]
pub use stdlib as fp;

#[cfg(all(feature = "libm", not(feature = "std")))]
pub use self::libm as fp;

#[cfg(all(feature = "mm", not(feature = "std"), not(feature = "libm")))]
pub use mm as fp;

#[cfg(test)]
mod tests {
    use core::f32::consts::*;

    use super::*;
    use crate::assert_approx_eq;

    #[test]
    fn fp_functions() {
        assert_eq!(fp::floor(1.5), 1.0);
        assert_eq!(fp::floor(-1.1), -2.0);
        assert_eq!(fp::round(127.5), 128.0);
        assert_eq!(fp::round(-0.4), 0.0);

        assert_approx_eq!(fp::rem_euclid(-30.0, 360.0), 330.0);
        assert_approx_eq!(fp::rem_euclid(725.0, 360.0), 5.0);

        assert_approx_eq!(fp::sqrt(9.0), 3.0);
        assert_eq!(fp::sqrt(0.0), 0.0);
        assert_approx_eq!(fp::powf(3.0, 2.0), 9.0);

        assert_approx_eq!(fp::sin(FRAC_PI_6), 0.5);
        assert_approx_eq!(fp::cos(PI), -1.0);
        assert_approx_eq!(fp::tan(FRAC_PI_4), 1.0);
    }

    #[test]
    fn fallback_functions() {
        use fallback as fb;
        assert_approx_eq!(fb::rem_euclid(1.6, 0.5), 0.1);
        assert_approx_eq!(fb::rem_euclid(-1.6, 0.5), 0.4);
        assert_eq!(fb::abs(-2.5), 2.5);
        assert_eq!(fb::abs(2.5), 2.5);
    }
}
