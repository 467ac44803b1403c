//! Cameras and camera transforms.

use core::ops::Range;

use crate::math::float::abs;
use crate::math::mat::ProjMat4;
use crate::math::{
    chain, look_at, perspective, rotate_x, rotate_y, vec2, vec3, viewport,
    Angle, Mat4, Vec2, Vec3,
};

use super::{Model, Ndc, Screen, View, World};

/// Clip-space `w` magnitudes at or below this are treated as degenerate.
pub const W_EPSILON: f32 = 1e-6;

/// Trait for different modes of camera motion.
pub trait Transform {
    /// Returns the current world-to-view matrix.
    fn world_to_view(&self) -> Mat4<World, View>;
}

/// Camera transform that looks from an eye point towards a target point.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LookAt {
    /// The position of the camera in **world** space.
    pub eye: Vec3<World>,
    /// The point the camera looks at in **world** space.
    pub target: Vec3<World>,
    /// The up direction in **world** space.
    pub up: Vec3<World>,
}

/// Per-frame snapshot of the model, view, projection, and viewport
/// transforms.
///
/// Built once per frame from the camera state and read, never mutated,
/// while shading.
///
/// # Examples
/// ```
/// use lumibox_core::math::{degs, vec3};
/// use lumibox_core::render::cam::{Camera, LookAt};
///
/// let cam = Camera::new((800.0, 600.0))
///     .transform(LookAt {
///         eye: vec3(0.0, 0.0, -10.0),
///         target: vec3(0.0, 0.0, 0.0),
///         up: vec3(0.0, 1.0, 0.0),
///     })
///     .perspective(degs(60.0), 0.1..1000.0);
///
/// // The target projects to the center of the viewport
/// let p = cam.project(&vec3(0.0, 0.0, 0.0));
/// assert!(p.visible);
/// assert_eq!(p.pos, lumibox_core::math::vec2(400.0, 300.0));
/// assert_eq!(p.view_z, 10.0);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Camera<Tf> {
    /// World-to-view transform.
    pub transform: Tf,
    /// Model-to-world transform.
    pub model: Mat4<Model, World>,
    /// Viewport width and height.
    pub dims: (f32, f32),
    /// Projection matrix.
    pub project: ProjMat4<View>,
    /// Viewport matrix.
    pub viewport: Mat4<Ndc, Screen>,
}

/// A model-space point after projection to the screen.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Projected {
    /// Screen position. Zero if not visible.
    pub pos: Vec2<Screen>,
    /// The view-space z, valid even if the point is not visible.
    pub view_z: f32,
    /// Clip-space w.
    pub w: f32,
    /// Whether the perspective divide succeeded.
    pub visible: bool,
}

//
// Inherent impls
//

impl Camera<()> {
    /// Creates a camera with the given viewport width and height.
    pub fn new(dims: (f32, f32)) -> Self {
        Self {
            dims,
            viewport: viewport(0.0, 0.0, dims.0, dims.1),
            ..Self::default()
        }
    }

    /// Sets the world-to-view transform of this camera.
    pub fn transform<T: Transform>(self, tf: T) -> Camera<T> {
        let Self { model, dims, project, viewport, .. } = self;
        Camera {
            transform: tf,
            model,
            dims,
            project,
            viewport,
        }
    }
}

impl<T> Camera<T> {
    /// Sets the model transform to a rotation by `pitch` about the x axis
    /// applied after a rotation by `yaw` about the y axis.
    pub fn rotate(self, pitch: Angle, yaw: Angle) -> Self {
        let model = chain([rotate_x(pitch), rotate_y(yaw)]).to();
        Self { model, ..self }
    }

    /// Sets up perspective projection with the given vertical field of
    /// view and near–far range.
    ///
    /// The aspect ratio is taken from the viewport dimensions.
    pub fn perspective(self, fov: Angle, near_far: Range<f32>) -> Self {
        let aspect = self.dims.0 / self.dims.1;
        Self {
            project: perspective(fov, aspect, near_far),
            ..self
        }
    }
}

impl<T: Transform> Camera<T> {
    /// Returns the composed model and view matrix.
    pub fn model_to_view(&self) -> Mat4<Model, View> {
        self.model.then(&self.transform.world_to_view())
    }

    /// Returns the composed model, view, and projection matrix.
    pub fn model_to_project(&self) -> ProjMat4<Model> {
        self.model_to_view().then_project(&self.project)
    }

    /// Projects a model-space point to the screen.
    ///
    /// If the clip-space w is not finite or too close to zero, the point is
    /// marked not visible and its screen position is zeroed. Its view-space
    /// depth is reported either way, so the point can still be depth sorted.
    pub fn project(&self, v: &Vec3<Model>) -> Projected {
        let view = self.model_to_view().apply(v);
        let clip = self.project.apply(&view);
        let w = clip.w();

        let hidden = Projected {
            pos: vec2(0.0, 0.0),
            view_z: view.z(),
            w,
            visible: false,
        };
        if !w.is_finite() || abs(w) <= W_EPSILON {
            return hidden;
        }
        let ndc = vec3::<Ndc>(clip.x() / w, clip.y() / w, clip.z() / w);
        let pos = self.viewport.apply(&ndc);
        if !pos.is_finite() {
            return hidden;
        }
        Projected {
            pos: vec2(pos.x(), pos.y()),
            visible: true,
            ..hidden
        }
    }
}

//
// Local trait impls
//

impl Transform for LookAt {
    fn world_to_view(&self) -> Mat4<World, View> {
        look_at(&self.eye, &self.target, &self.up)
    }
}

impl Transform for Mat4<World, View> {
    fn world_to_view(&self) -> Mat4<World, View> {
        *self
    }
}
