//! Core functionality of the `lumibox` project.
//!
//! Projects simple solid geometry (boxes) onto a 2D drawing surface using
//! matrix transforms, flat Lambertian shading, and painter's-algorithm depth
//! ordering. Includes a strongly typed math library, a CSS-style color
//! pipeline with OKLCH support, and an interaction rig that turns pointer
//! and wheel input into orbit, pan, zoom, and light-direction changes.
//!
//! # Crate features
//!
//! * `std`:
//!   Uses the floating-point functions of `std`. Enabled by default.
//!
//!   If this feature is disabled, the crate only depends on `alloc`.
//!
//! * `libm`:
//!   Provides software implementations of floating-point functions via the
//!   [libm](https://crates.io/crates/libm) crate.
//!
//! * `mm`:
//!   Provides fast approximate implementations of floating-point functions
//!   via the [micromath](https://crates.io/crates/micromath) crate.
//!
//! * `serde`:
//!   Derives `Serialize` and `Deserialize` for configuration types.
//!
//! One of `std`, `libm`, or `mm` must be enabled.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;
extern crate core;

#[cfg(not(feature = "fp"))]
compile_error!("one of the `std`, `libm`, or `mm` features must be enabled");

pub mod color;
pub mod geom;
pub mod math;
pub mod render;
pub mod rig;

pub mod prelude {
    pub use crate::math::{
        angle::{degs, rads, Angle},
        color::{rgb, rgba, Color3, Color4},
        mat::{
            chain, look_at, perspective, rotate_x, rotate_y, rotate_z, scale,
            translate, viewport, Mat4, Mat4x4, ProjMat4,
        },
        vec::{vec2, vec3, Vec2, Vec3, Vector},
    };

    pub use crate::color::{normalize_color, ColorError, ColorValue};
    pub use crate::geom::{Cuboid, QuadMesh};
    pub use crate::render::{
        cam::Camera, light::Light, shade::shade_faces, shade::Face,
        shade::Scene, Model, Proj, Screen, View, World,
    };
    pub use crate::rig::{Button, Event, Mode, PointerSample, Rig, Settings};
}
