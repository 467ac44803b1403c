//! Frontends for driving `lumibox` scenes interactively.
//!
//! [`input`] turns raw mouse and touch state into the normalized events
//! consumed by the rig, and [`raster`] draws shaded faces into a plain
//! `0x00_RR_GG_BB` pixel buffer. With the `minifb` feature, [`minifb`]
//! provides a window and a main loop tying the two together.

use std::time::Duration;

use lumibox_core::rig::Rig;

pub mod input;
pub mod raster;

#[cfg(feature = "minifb")]
pub mod minifb;

/// Width and height of a window or buffer, in pixels.
pub type Dims = (u32, u32);

/// Common window sizes.
pub mod dims {
    use super::Dims;

    pub const SVGA_800_600: Dims = (800, 600);
}

/// Per-frame state. The window run method passes an instance of `Frame`
/// to the callback function on every iteration of the main loop.
pub struct Frame<'a, Win> {
    /// Elapsed time since the start of the first frame.
    pub t: Duration,
    /// Elapsed time since the start of the previous frame.
    pub dt: Duration,
    /// Pixel buffer in which to draw, in row-major order.
    pub buf: &'a mut [u32],
    /// Reference to the window object.
    pub win: &'a Win,
    /// The rig after this frame's input has been applied.
    pub rig: &'a Rig,
}
