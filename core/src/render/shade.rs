//! Flat shading and depth ordering of box faces.

use alloc::vec::Vec;

use log::warn;

use crate::color::{normalize_color, ColorValue};
use crate::geom::{Cuboid, QuadMesh};
use crate::math::color::{rgb, Color3};
use crate::math::{vec3, Vec2};

use super::cam::{Camera, Transform};
use super::light::Light;
use super::{Screen, View};

/// Fill color of faces that have no valid color of their own.
pub const DEFAULT_FACE_COLOR: Color3 = rgb(0x1F, 0x77, 0xB4);

/// A shaded face, projected to the screen and ready to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct Face {
    /// Index of the face in the source mesh.
    pub index: usize,
    /// Screen-space corners in winding order.
    pub points: [Vec2<Screen>; 4],
    /// Whether every corner survived the perspective divide.
    pub visible: bool,
    /// Depth key: the view-space z of the farthest corner, negated.
    ///
    /// View z grows away from the camera, so sorting keys in ascending
    /// order puts far faces first. Taking the minimum corner z instead
    /// would draw near faces first.
    pub depth: f32,
    /// Total brightness in [ambient, 1].
    pub brightness: f32,
    /// The fill color, base color scaled by brightness. Always opaque.
    pub color: Color3,
}

/// Scene-wide placement parameters, threaded through box assembly.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Scene {
    /// The y coordinate boxes rest on.
    pub floor_level: f32,
}

/// Projects and shades the faces of `mesh`, returning them ordered from
/// farthest to nearest.
///
/// Face `i` takes its base color from `colors[i]`; missing or invalid
/// entries fall back to [`DEFAULT_FACE_COLOR`]. Alpha is discarded, since
/// faces are composited by draw order rather than blending.
///
/// Each face's depth key is the negated view depth of its farthest corner,
/// so drawing the faces in the returned order paints near faces over far
/// ones. The sort is stable.
pub fn shade_faces<T: Transform>(
    cam: &Camera<T>,
    mesh: &QuadMesh,
    colors: &[ColorValue],
    light: &Light<View>,
) -> Vec<Face> {
    let mv = cam.model_to_view();

    let mut faces: Vec<_> = mesh
        .faces
        .iter()
        .zip(&mesh.normals)
        .enumerate()
        .map(|(i, (quad, n))| {
            let corners = quad.0.map(|j| cam.project(&mesh.verts[j]));
            let depth = corners
                .iter()
                .map(|p| -p.view_z)
                .fold(f32::INFINITY, f32::min);

            let normal = mv.apply_linear(n).normalize();
            let brightness = light.brightness(&normal);

            let base = base_color(colors.get(i), i);
            Face {
                index: i,
                points: corners.map(|p| p.pos),
                visible: corners.iter().all(|p| p.visible),
                depth,
                brightness,
                color: base.scale(brightness),
            }
        })
        .collect();

    faces.sort_by(|a, b| a.depth.total_cmp(&b.depth));
    faces
}

fn base_color(value: Option<&ColorValue>, i: usize) -> Color3 {
    let Some(value) = value else {
        return DEFAULT_FACE_COLOR;
    };
    match normalize_color(*value) {
        Ok(c) => c.to_rgb(),
        Err(e) => {
            warn!("face {i}: {e}; using {DEFAULT_FACE_COLOR}");
            DEFAULT_FACE_COLOR
        }
    }
}

impl Scene {
    /// Returns `cuboid` moved vertically so that its bottom rests on the
    /// floor.
    pub fn place(&self, cuboid: Cuboid) -> Cuboid {
        let o = cuboid.offset;
        let y = self.floor_level + cuboid.height / 2.0;
        cuboid.at(vec3(o.x(), y, o.z()))
    }

    /// Places `cuboid` on the floor and shades its faces.
    ///
    /// See [`shade_faces`] for the meaning of `colors` and the result.
    pub fn cube<T: Transform>(
        &self,
        cuboid: Cuboid,
        cam: &Camera<T>,
        colors: &[ColorValue],
        light: &Light<View>,
    ) -> Vec<Face> {
        shade_faces(cam, &self.place(cuboid).build(), colors, light)
    }
}

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;
    use crate::math::{degs, vec3};
    use crate::render::cam::LookAt;

    use super::*;

    fn cam() -> Camera<LookAt> {
        Camera::new((100.0, 100.0))
            .transform(LookAt {
                eye: vec3(0.0, 0.0, -10.0),
                target: vec3(0.0, 0.0, 0.0),
                up: vec3(0.0, 1.0, 0.0),
            })
            .perspective(degs(60.0), 0.1..100.0)
    }

    fn towards_camera() -> Light<View> {
        Light::directional(vec3(0.0, 0.0, -1.0))
    }

    #[test]
    fn faces_sorted_far_to_near() {
        let mesh = Cuboid::new(1.0, 1.0, 1.0).build();
        let faces = shade_faces(&cam(), &mesh, &[], &towards_camera());

        assert_eq!(faces.len(), 6);
        assert!(faces.windows(2).all(|w| w[0].depth <= w[1].depth));
        // Ties keep mesh order; the face nearest the camera comes last
        let order: Vec<_> = faces.iter().map(|f| f.index).collect();
        assert_eq!(order, [1, 2, 3, 4, 5, 0]);
        assert_approx_eq!(faces[0].depth, -10.5);
        assert_approx_eq!(faces[5].depth, -9.5);
    }

    #[test]
    fn depth_is_negated_farthest_corner() {
        let c = cam().rotate(degs(20.0), degs(35.0));
        let mesh = Cuboid::new(2.0, 1.0, 3.0).build();
        let faces = shade_faces(&c, &mesh, &[], &towards_camera());
        for f in &faces {
            let farthest = mesh.faces[f.index]
                .0
                .iter()
                .map(|&j| c.project(&mesh.verts[j]).view_z)
                .fold(f32::NEG_INFINITY, f32::max);
            assert_eq!(f.depth, -farthest);
        }
    }

    #[test]
    fn rotated_box_is_sorted() {
        let cam = cam().rotate(degs(-16.5), degs(50.5));
        let mesh = Cuboid::new(2.0, 1.0, 3.0).build();
        let faces = shade_faces(&cam, &mesh, &[], &towards_camera());
        assert!(faces.windows(2).all(|w| w[0].depth <= w[1].depth));
        assert!(faces.iter().all(|f| f.visible));
    }

    #[test]
    fn lambert_with_ambient_floor() {
        let mesh = Cuboid::new(1.0, 1.0, 1.0).build();
        let faces = shade_faces(&cam(), &mesh, &[], &towards_camera());
        for f in &faces {
            let expected = if f.index == 0 { 1.0 } else { 0.4 };
            assert_approx_eq!(f.brightness, expected);
        }
    }

    #[test]
    fn colors_are_scaled_and_fall_back() {
        let mesh = Cuboid::new(1.0, 1.0, 1.0).build();
        let colors = [ColorValue::from("#FF000080"), "lch(1 2 3)".into()];
        let faces = shade_faces(&cam(), &mesh, &colors, &towards_camera());

        let by_index = |i| faces.iter().find(|f| f.index == i).unwrap();
        // Full brightness, alpha dropped
        assert_eq!(by_index(0).color, rgb(255, 0, 0));
        // Invalid and missing colors use the default, at ambient brightness
        assert_eq!(by_index(1).color, rgb(12, 47, 72));
        assert_eq!(by_index(5).color, rgb(12, 47, 72));
    }

    #[test]
    fn points_are_projected_corners() {
        let mesh = Cuboid::new(1.0, 1.0, 1.0).build();
        let c = cam();
        let faces = shade_faces(&c, &mesh, &[], &towards_camera());
        let near = faces.last().unwrap();
        for (pt, &j) in near.points.iter().zip(&mesh.faces[0].0) {
            assert_eq!(*pt, c.project(&mesh.verts[j]).pos);
        }
    }

    #[test]
    fn scene_places_box_on_floor() {
        let scene = Scene { floor_level: 5.0 };
        let placed = scene.place(Cuboid::new(1.0, 2.0, 3.0).at(vec3(7.0, -100.0, 9.0)));
        assert_eq!(placed.offset, vec3(7.0, 6.0, 9.0));

        let mesh = placed.build();
        assert!(mesh.verts.iter().all(|v| v.y() >= 5.0));
    }

    #[test]
    fn scene_cube_shades_placed_box() {
        let scene = Scene { floor_level: -0.5 };
        let faces = scene.cube(Cuboid::new(1.0, 1.0, 1.0), &cam(), &[], &towards_camera());
        let direct = shade_faces(
            &cam(),
            &Cuboid::new(1.0, 1.0, 1.0).build(),
            &[],
            &towards_camera(),
        );
        assert_eq!(faces, direct);
    }
}
