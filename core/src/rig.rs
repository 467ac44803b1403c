//! Pointer-driven camera and light controls.
//!
//! The [`Rig`] is a small state machine that turns normalized pointer and
//! wheel [events][Event] into camera and light changes:
//!
//! * dragging with the primary button orbits the model,
//! * dragging with the secondary or auxiliary button pans the camera
//!   across the ground plane,
//! * the wheel zooms, and
//! * dragging on the light direction disk steers the light.
//!
//! Eye, target, and the light disk indicator are derived from the current
//! state on every read, so they are never stale.
//!
//! # Examples
//! ```
//! use lumibox_core::rig::{Button, Event, PointerSample, Rig};
//!
//! let mut rig = Rig::default();
//! let at = |x, y| PointerSample { x, y, modifier: false };
//!
//! rig.handle(Event::PointerDown(Button::Primary, at(100.0, 100.0)));
//! rig.handle(Event::PointerMove(at(100.0, 40.0)));
//! rig.handle(Event::PointerUp);
//!
//! // Dragging up by 60 pixels tilts the camera by 30°
//! assert!(rig.settings_changed());
//! assert!((rig.camera_state().pitch.to_degs() - 13.5).abs() < 1e-3);
//! ```

use core::ops::Range;

use log::{debug, trace};

use crate::math::float::fp;
use crate::math::{vec2, vec3, Vec2, Vec3};
use crate::render::cam::{Camera, LookAt};
use crate::render::light::Light;
use crate::render::{Screen, View, World};

pub use config::{CameraState, LightDisk, RigConfig, Settings};
pub use event::{Button, Event, EventSource, PointerSample, Session};

mod config;
mod event;

/// The interaction mode of a [`Rig`]. Modes are mutually exclusive.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Mode {
    #[default]
    Idle,
    /// Dragging rotates the model.
    Orbiting,
    /// Dragging moves the camera across the ground plane.
    Panning,
    /// Dragging steers the light direction.
    LightDragging,
}

/// Bounding rectangle of the drawing surface in device coordinates.
///
/// Pointer positions are mapped from this rectangle to surface units
/// given by the [`Settings`] width and height.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SurfaceRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Camera and light state together with the pointer interaction that
/// mutates it.
#[derive(Clone, Debug)]
pub struct Rig {
    config: RigConfig,
    settings: Settings,
    surface: SurfaceRect,
    camera: CameraState,
    light_dir: Vec3<View>,
    mode: Mode,
    last: Vec2,
}

/// Returns the point on a disk of the given center and radius that
/// represents the light direction `dir`.
///
/// The disk shows the light sphere seen from the front, with up on screen
/// being up in view space.
///
/// # Examples
/// ```
/// use lumibox_core::math::vec2;
/// use lumibox_core::math::vec3;
/// use lumibox_core::rig::light_dir_to_disk;
///
/// let dot = light_dir_to_disk(&vec3(0.5, 0.25, 0.0), vec2(100.0, 100.0), 8.0);
/// assert_eq!(dot, vec2(104.0, 98.0));
/// ```
pub fn light_dir_to_disk(
    dir: &Vec3<View>,
    center: Vec2<Screen>,
    radius: f32,
) -> Vec2<Screen> {
    vec2(center.x() + dir.x() * radius, center.y() - dir.y() * radius)
}

/// Returns the light direction picked by a pointer at offset `(dx, dy)`
/// from the center of a disk of the given radius, with y pointing up.
///
/// Offsets outside the disk are clamped to its edge. The z component is
/// positive, or negative if `back` is set.
pub fn disk_to_light_dir(dx: f32, dy: f32, radius: f32, back: bool) -> Vec3<View> {
    let dist = fp::sqrt(dx * dx + dy * dy);
    let (x, y) = if dist > 1e-6 {
        let clamped = dist.min(radius);
        (dx / dist * clamped, dy / dist * clamped)
    } else {
        (0.0, 0.0)
    };
    let (nx, ny) = (x / radius, y / radius);
    let nz = fp::sqrt((1.0 - nx * nx - ny * ny).max(0.0));
    let nz = if back { -nz } else { nz };
    vec3(nx, ny, nz).normalize()
}

//
// Inherent impls
//

impl Rig {
    /// Creates a rig in its default state, using the given conventions and
    /// surface settings. The surface rectangle is set to the settings size
    /// at the origin.
    pub fn new(config: RigConfig, settings: Settings) -> Self {
        Self {
            config,
            settings,
            surface: SurfaceRect::from(settings),
            camera: config.camera,
            light_dir: config.light_dir.normalize(),
            mode: Mode::Idle,
            last: Vec2::zero(),
        }
    }

    /// Returns the current interaction mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the current camera state.
    pub fn camera_state(&self) -> CameraState {
        self.camera
    }

    /// Returns the current unit light direction.
    pub fn light_dir(&self) -> Vec3<View> {
        self.light_dir
    }

    /// Returns the current light source.
    pub fn light(&self) -> Light<View> {
        Light::directional(self.light_dir)
    }

    /// Returns the rig conventions.
    pub fn config(&self) -> &RigConfig {
        &self.config
    }

    /// Returns the current surface settings.
    pub fn settings(&self) -> Settings {
        self.settings
    }

    /// Replaces the surface settings. The surface rectangle is left as is.
    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    /// Sets the device-space bounding rectangle of the drawing surface.
    pub fn set_surface(&mut self, surface: SurfaceRect) {
        self.surface = surface;
    }

    //
    // Derived values
    //

    /// Returns the eye position: `distance` units behind and `eye_height`
    /// units above the pan point.
    pub fn eye(&self) -> Vec3<World> {
        let CameraState { distance, pan, .. } = self.camera;
        vec3(
            pan.x(),
            self.config.eye_height + pan.y(),
            -distance + pan.z(),
        )
    }

    /// Returns the look-at target: `target_height` units above the pan
    /// point.
    pub fn target(&self) -> Vec3<World> {
        let pan = self.camera.pan;
        vec3(pan.x(), self.config.target_height + pan.y(), pan.z())
    }

    /// Returns the world up direction.
    pub fn up(&self) -> Vec3<World> {
        Vec3::Y
    }

    /// Returns the center of the light direction disk in surface units.
    pub fn light_disk_center(&self) -> Vec2<Screen> {
        let disk = self.config.light_disk;
        vec2(self.settings.width - disk.margin, disk.top)
    }

    /// Returns the radius of the light direction disk in surface units.
    pub fn light_disk_radius(&self) -> f32 {
        self.config.light_disk.radius
    }

    /// Returns the position of the light indicator dot on the disk.
    pub fn light_disk_dot(&self) -> Vec2<Screen> {
        light_dir_to_disk(
            &self.light_dir,
            self.light_disk_center(),
            self.light_disk_radius(),
        )
    }

    /// Returns whether the device-space point `(x, y)` is on the light
    /// direction disk.
    pub fn hits_light_disk(&self, x: f32, y: f32) -> bool {
        let Some(p) = self.to_surface(x, y) else {
            return false;
        };
        let d = p - self.light_disk_center();
        d.len() <= self.light_disk_radius()
    }

    /// Returns whether the camera or light differs from the defaults.
    pub fn settings_changed(&self) -> bool {
        self.camera != self.config.camera
            || self.light_dir != self.config.light_dir.normalize()
    }

    /// Builds the per-frame camera snapshot from the current state.
    pub fn camera(&self, near_far: Range<f32>) -> Camera<LookAt> {
        let Settings { width, height, fov } = self.settings;
        Camera::new((width, height))
            .transform(LookAt {
                eye: self.eye(),
                target: self.target(),
                up: self.up(),
            })
            .rotate(self.camera.pitch, self.camera.yaw)
            .perspective(fov, near_far)
    }

    //
    // Mutation
    //

    /// Restores the default camera and light state, and ends any drag.
    pub fn reset_settings(&mut self) {
        self.camera = self.config.camera;
        self.light_dir = self.config.light_dir.normalize();
        self.set_mode(Mode::Idle);
    }

    /// Handles a single input event.
    pub fn handle(&mut self, ev: Event) {
        match ev {
            Event::PointerDown(btn, p) => self.on_pointer_down(btn, p),
            Event::LightPointerDown(p) => self.on_light_pointer_down(p),
            Event::PointerMove(p) => self.on_pointer_move(p),
            Event::PointerUp | Event::PointerLeave => self.release(),
            Event::Wheel(delta) => self.on_wheel(delta),
        }
    }

    fn on_pointer_down(&mut self, btn: Button, p: PointerSample) {
        if !is_finite(&p) {
            trace!("ignoring non-finite pointer down {p:?}");
            return;
        }
        if self.mode == Mode::LightDragging {
            return;
        }
        self.set_mode(match btn {
            Button::Primary => Mode::Orbiting,
            Button::Secondary | Button::Auxiliary => Mode::Panning,
        });
        self.last = vec2(p.x, p.y);
    }

    fn on_light_pointer_down(&mut self, p: PointerSample) {
        if !is_finite(&p) {
            trace!("ignoring non-finite light pointer down {p:?}");
            return;
        }
        self.set_mode(Mode::LightDragging);
        self.steer_light(&p);
    }

    fn on_pointer_move(&mut self, p: PointerSample) {
        if !is_finite(&p) {
            trace!("ignoring non-finite pointer move {p:?}");
            return;
        }
        let pos = vec2(p.x, p.y);
        let d = pos - self.last;
        match self.mode {
            Mode::Idle => return,
            Mode::Orbiting => self.orbit(d.x(), d.y()),
            Mode::Panning => self.pan(d.x(), d.y()),
            Mode::LightDragging => self.steer_light(&p),
        }
        self.last = pos;
    }

    fn on_wheel(&mut self, delta: f32) {
        if !delta.is_finite() {
            trace!("ignoring non-finite wheel delta {delta}");
            return;
        }
        if delta == 0.0 {
            return;
        }
        let dir = if delta > 0.0 { 1.0 } else { -1.0 };
        let c = &self.config;
        let step = c.zoom_step.max(self.camera.distance * c.zoom_ratio);
        self.camera.distance = (self.camera.distance + dir * step)
            .clamp(c.min_distance, c.max_distance);
    }

    /// Ends any drag in progress.
    pub fn release(&mut self) {
        self.set_mode(Mode::Idle);
    }

    fn orbit(&mut self, dx: f32, dy: f32) {
        let c = &self.config;
        let cam = &mut self.camera;
        cam.yaw -= c.orbit_per_px * dx;
        cam.pitch = (cam.pitch - c.orbit_per_px * dy)
            .clamp(-c.pitch_limit, c.pitch_limit);
    }

    /// Pans by a pointer delta in device pixels, along the ground plane
    /// axes of the current yaw.
    fn pan(&mut self, dx: f32, dy: f32) {
        let s = self.world_units_per_px();
        if !s.is_finite() {
            trace!("ignoring pan on a degenerate surface");
            return;
        }
        let (sin, cos) = self.camera.yaw.sin_cos();
        let (right_x, right_z) = (cos, sin);
        let (fwd_x, fwd_z) = (-sin, cos);

        let pan = self.camera.pan;
        self.camera.pan = vec3(
            pan.x() + -dx * s * right_x + dy * s * fwd_x,
            pan.y(),
            pan.z() + -dx * s * right_z + dy * s * fwd_z,
        );
    }

    /// Returns the height of the view frustum at the current distance,
    /// divided by the surface height.
    fn world_units_per_px(&self) -> f32 {
        let half_fov = self.settings.fov * 0.5;
        2.0 * self.camera.distance * half_fov.tan() / self.settings.height
    }

    fn steer_light(&mut self, p: &PointerSample) {
        let Some(pos) = self.to_surface(p.x, p.y) else {
            trace!("ignoring light drag outside a valid surface");
            return;
        };
        let center = self.light_disk_center();
        let (dx, dy) = (pos.x() - center.x(), center.y() - pos.y());
        let dir = disk_to_light_dir(dx, dy, self.light_disk_radius(), p.modifier);
        if dir.is_finite() {
            self.light_dir = dir;
        }
    }

    /// Maps a device-space point to surface units.
    fn to_surface(&self, x: f32, y: f32) -> Option<Vec2<Screen>> {
        let r = &self.surface;
        let p = vec2(
            (x - r.left) / r.width * self.settings.width,
            (y - r.top) / r.height * self.settings.height,
        );
        p.is_finite().then_some(p)
    }

    fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            debug!("rig mode {:?} -> {mode:?}", self.mode);
            self.mode = mode;
        }
    }
}

fn is_finite(p: &PointerSample) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

//
// Trait impls
//

impl Default for Rig {
    fn default() -> Self {
        Self::new(RigConfig::default(), Settings::default())
    }
}

impl From<Settings> for SurfaceRect {
    fn from(s: Settings) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width: s.width,
            height: s.height,
        }
    }
}
