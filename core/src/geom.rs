//! Box geometry.

use crate::math::{vec3, Vec3};
use crate::render::Model;

/// Quadrilateral face, defined by four vertex indices in winding order.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub struct Quad<V>(pub [V; 4]);

/// A surface normal in model space.
pub type Normal3 = Vec3<Model>;

/// An axis-aligned box given by its extents and center point.
///
/// # Examples
/// ```
/// use lumibox_core::geom::Cuboid;
/// use lumibox_core::math::vec3;
///
/// let mesh = Cuboid::new(2.0, 4.0, 6.0).build();
/// assert_eq!(mesh.verts[0], vec3(-1.0, -2.0, -3.0));
/// assert_eq!(mesh.verts[6], vec3(1.0, 2.0, 3.0));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Cuboid {
    /// Extent along the x axis.
    pub width: f32,
    /// Extent along the y axis.
    pub height: f32,
    /// Extent along the z axis.
    pub depth: f32,
    /// The center of the box.
    pub offset: Vec3<Model>,
}

/// A closed surface of six quads, one normal per face.
///
/// `faces[i]` has the outward normal `normals[i]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QuadMesh {
    pub verts: [Vec3<Model>; 8],
    pub faces: [Quad<usize>; 6],
    pub normals: [Normal3; 6],
}

impl Cuboid {
    #[rustfmt::skip]
    const CORNERS: [[f32; 3]; 8] = [
        [-1.0, -1.0, -1.0], [1.0, -1.0, -1.0], [1.0, 1.0, -1.0], [-1.0, 1.0, -1.0],
        [-1.0, -1.0,  1.0], [1.0, -1.0,  1.0], [1.0, 1.0,  1.0], [-1.0, 1.0,  1.0],
    ];
    const FACES: [Quad<usize>; 6] = [
        Quad([0, 1, 2, 3]), // -z
        Quad([4, 5, 6, 7]), // +z
        Quad([1, 2, 6, 5]), // +x
        Quad([0, 3, 7, 4]), // -x
        Quad([3, 2, 6, 7]), // +y
        Quad([0, 1, 5, 4]), // -y
    ];
    // Paired with FACES by index; callers match face colors by position.
    const NORMALS: [Normal3; 6] = [
        vec3(0.0, 0.0, -1.0),
        vec3(0.0, 0.0, 1.0),
        vec3(1.0, 0.0, 0.0),
        vec3(-1.0, 0.0, 0.0),
        vec3(0.0, 1.0, 0.0),
        vec3(0.0, -1.0, 0.0),
    ];

    /// Returns a box with the given extents, centered at the origin.
    pub const fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width,
            height,
            depth,
            offset: vec3(0.0, 0.0, 0.0),
        }
    }

    /// Returns `self` moved so that its center is at `offset`.
    #[must_use]
    pub const fn at(self, offset: Vec3<Model>) -> Self {
        Self { offset, ..self }
    }

    /// Builds the vertices, faces, and normals of `self`.
    pub fn build(&self) -> QuadMesh {
        let half: Vec3<Model> = vec3(self.width, self.height, self.depth) * 0.5;
        let verts = Self::CORNERS.map(|[x, y, z]| {
            self.offset + vec3(x * half.x(), y * half.y(), z * half.z())
        });
        QuadMesh {
            verts,
            faces: Self::FACES,
            normals: Self::NORMALS,
        }
    }
}

impl QuadMesh {
    /// Returns the corner positions of face `i`.
    ///
    /// # Panics
    /// If `i` ≥ 6.
    pub fn face_verts(&self, i: usize) -> [Vec3<Model>; 4] {
        self.faces[i].0.map(|j| self.verts[j])
    }
}

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn vertex_order() {
        let m = Cuboid::new(1.0, 1.0, 1.0).build();
        assert_eq!(m.verts[0], vec3(-0.5, -0.5, -0.5));
        assert_eq!(m.verts[1], vec3(0.5, -0.5, -0.5));
        assert_eq!(m.verts[2], vec3(0.5, 0.5, -0.5));
        assert_eq!(m.verts[3], vec3(-0.5, 0.5, -0.5));
        assert_eq!(m.verts[4], vec3(-0.5, -0.5, 0.5));
        assert_eq!(m.verts[7], vec3(-0.5, 0.5, 0.5));
    }

    #[test]
    fn offset_moves_center() {
        let m = Cuboid::new(2.0, 2.0, 2.0).at(vec3(10.0, 20.0, 30.0)).build();
        assert_eq!(m.verts[0], vec3(9.0, 19.0, 29.0));
        assert_eq!(m.verts[6], vec3(11.0, 21.0, 31.0));
    }

    #[test]
    fn normals_are_unit_and_face_outward() {
        let m = Cuboid::new(2.0, 3.0, 4.0).build();
        for (i, n) in m.normals.iter().enumerate() {
            assert_approx_eq!(n.len(), 1.0);

            let center = m
                .face_verts(i)
                .iter()
                .fold(Vec3::zero(), |acc, v| acc + *v)
                * 0.25;
            assert!(center.dot(n) > 0.0, "face {i} normal {n:?} points inward");
        }
    }

    #[test]
    fn faces_are_planar_and_perpendicular_to_normals() {
        let m = Cuboid::new(1.0, 1.0, 1.0).build();
        for (i, n) in m.normals.iter().enumerate() {
            let [a, b, c, d] = m.face_verts(i);
            for edge in [b - a, c - b, d - c, a - d] {
                assert_approx_eq!(edge.dot(n), 0.0);
            }
        }
    }
}
