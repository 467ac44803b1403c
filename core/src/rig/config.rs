//! Rig configuration.

use crate::math::{degs, vec3, Angle, Vec3};
use crate::render::{View, World};

/// Size and field of view of the drawing surface.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Settings {
    /// Width of the surface in surface units.
    pub width: f32,
    /// Height of the surface in surface units.
    pub height: f32,
    /// Vertical angle of view.
    pub fov: Angle,
}

/// Camera placement relative to the pan point.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CameraState {
    /// Distance of the eye behind the pan point along z. Always positive.
    pub distance: f32,
    /// Pan offset of both the eye and the target.
    pub pan: Vec3<World>,
    /// Rotation about the x axis.
    pub pitch: Angle,
    /// Rotation about the y axis.
    pub yaw: Angle,
}

/// Placement of the light direction disk on the drawing surface.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LightDisk {
    /// Distance of the disk center from the right edge of the surface.
    pub margin: f32,
    /// Distance of the disk center from the top edge of the surface.
    pub top: f32,
    /// Radius of the disk.
    pub radius: f32,
}

/// Numeric conventions of the interaction rig.
///
/// The defaults give a camera 400 units behind a pan point at
/// (152, -60, 79), tilted down 16.5° and turned 50.5°, with light from the
/// upper left.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RigConfig {
    /// Camera state restored by a reset.
    pub camera: CameraState,
    /// Light direction restored by a reset, normalized on use.
    pub light_dir: Vec3<View>,
    /// Orbit rotation per pointer pixel.
    pub orbit_per_px: Angle,
    /// Largest pitch magnitude, keeping the camera off the poles.
    pub pitch_limit: Angle,
    /// Smallest camera distance.
    pub min_distance: f32,
    /// Largest camera distance.
    pub max_distance: f32,
    /// Smallest zoom step.
    pub zoom_step: f32,
    /// Zoom step as a fraction of the current distance.
    pub zoom_ratio: f32,
    /// Height of the eye above the pan point.
    pub eye_height: f32,
    /// Height of the target above the pan point.
    pub target_height: f32,
    /// Light direction disk.
    pub light_disk: LightDisk,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            fov: degs(60.0),
        }
    }
}

impl Default for LightDisk {
    fn default() -> Self {
        Self {
            margin: 100.0,
            top: 100.0,
            radius: 60.0,
        }
    }
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            camera: CameraState {
                distance: 400.0,
                pan: vec3(152.0, -60.0, 79.0),
                pitch: degs(-16.5),
                yaw: degs(50.5),
            },
            light_dir: vec3(-0.7, 0.7, 0.0),
            orbit_per_px: degs(0.5),
            pitch_limit: degs(89.0),
            min_distance: 20.0,
            max_distance: 1200.0,
            zoom_step: 6.0,
            zoom_ratio: 0.04,
            eye_height: 25.0,
            target_height: 10.0,
            light_disk: LightDisk::default(),
        }
    }
}
