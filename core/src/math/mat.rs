//! Matrices and linear transforms.
//!
//! Matrices are stored in row-major order and act on column vectors, so in
//! a product `A * B` the transform `B` is applied first. Points are treated
//! as homogeneous with an implicit `w` of 1.

use core::fmt::{self, Debug, Formatter};
use core::marker::PhantomData;
use core::ops::Range;

use super::angle::Angle;
use super::approx::ApproxEq;
use super::vec::{vec3, vec4, Vec3, Vec4};

/// Tag type for a mapping from one real space to another.
pub struct RealToReal<Src, Dst>(PhantomData<(Src, Dst)>);

/// Tag type for a mapping from a real space to projective (clip) space.
pub struct RealToProj<Src>(PhantomData<Src>);

/// Projective (clip) space, the output of a projection matrix.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Proj;

/// A generic matrix type.
///
/// # Type parameters
/// * `Repr`: the representation of the elements of `Self`.
/// * `Map`: the mapping, such as [`RealToReal`], that `Self` represents.
#[repr(transparent)]
pub struct Matrix<Repr, Map>(pub Repr, PhantomData<Map>);

/// A 4×4 matrix with `f32` elements.
pub type Mat4x4<Map = ()> = Matrix<[[f32; 4]; 4], Map>;

/// An affine transform from space `Src` to space `Dst`.
pub type Mat4<Src = (), Dst = Src> = Mat4x4<RealToReal<Src, Dst>>;

/// A projective transform from space `Src` to clip space.
pub type ProjMat4<Src> = Mat4x4<RealToProj<Src>>;

/// A homogeneous vector in clip space.
pub type ProjVec4 = Vec4<Proj>;

impl<M> Mat4x4<M> {
    /// Returns a matrix with the given rows.
    pub const fn new(rows: [[f32; 4]; 4]) -> Self {
        Self(rows, PhantomData)
    }

    /// Returns the 4×4 identity matrix.
    pub const fn identity() -> Self {
        Self::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Returns the row `i` of `self`.
    pub fn row(&self, i: usize) -> [f32; 4] {
        self.0[i]
    }

    /// Returns `self` with the mapping reinterpreted as `N`.
    pub fn to<N>(&self) -> Mat4x4<N> {
        Matrix(self.0, PhantomData)
    }

    /// Returns the product `self * other`, regardless of mapping.
    fn mul_raw<N>(&self, other: &Mat4x4<N>) -> [[f32; 4]; 4] {
        let mut res = [[0.0; 4]; 4];
        for row in 0..4 {
            for col in 0..4 {
                res[row][col] = (0..4)
                    .map(|i| self.0[row][i] * other.0[i][col])
                    .sum();
            }
        }
        res
    }

    /// Multiplies the homogeneous point `(v, 1)` by `self`.
    fn apply_h<B>(&self, v: &Vec3<B>) -> [f32; 4] {
        let v = [v.x(), v.y(), v.z(), 1.0];
        self.0.map(|row| row.iter().zip(&v).map(|(m, c)| m * c).sum())
    }
}

impl<Src, Dst> Mat4<Src, Dst> {
    /// Returns the composite transform that applies `other` first and
    /// then `self`, that is, the matrix product `self * other`.
    pub fn compose<S>(&self, other: &Mat4<S, Src>) -> Mat4<S, Dst> {
        Matrix(self.mul_raw(other), PhantomData)
    }

    /// Returns the composite transform that applies `self` first and
    /// then `other`, that is, the matrix product `other * self`.
    pub fn then<D>(&self, other: &Mat4<Dst, D>) -> Mat4<Src, D> {
        other.compose(self)
    }

    /// Returns the composite transform that applies `self` and then
    /// projects with `proj`.
    pub fn then_project(&self, proj: &ProjMat4<Dst>) -> ProjMat4<Src> {
        Matrix(proj.mul_raw(self), PhantomData)
    }

    /// Maps a point from `Src` to `Dst`, dropping the resulting `w`.
    ///
    /// # Examples
    /// ```
    /// use lumibox_core::math::{translate, vec3, Mat4, Vec3};
    ///
    /// let m: Mat4 = translate(vec3(1.0, 2.0, 3.0));
    /// assert_eq!(m.apply(&vec3(1.0, 0.0, 0.0)), vec3(2.0, 2.0, 3.0));
    /// ```
    pub fn apply(&self, v: &Vec3<Src>) -> Vec3<Dst> {
        let [x, y, z, _] = self.apply_h(v);
        vec3(x, y, z)
    }

    /// Maps a direction from `Src` to `Dst` using only the linear 3×3
    /// part of `self`, ignoring translation.
    pub fn apply_linear(&self, v: &Vec3<Src>) -> Vec3<Dst> {
        let [r0, r1, r2, _] = self.0;
        let dot = |r: [f32; 4]| r[0] * v.x() + r[1] * v.y() + r[2] * v.z();
        vec3(dot(r0), dot(r1), dot(r2))
    }
}

impl<Src> ProjMat4<Src> {
    /// Maps a point from `Src` to homogeneous clip space.
    pub fn apply(&self, v: &Vec3<Src>) -> ProjVec4 {
        let [x, y, z, w] = self.apply_h(v);
        vec4(x, y, z, w)
    }
}

/// Composes matrices left to right by repeated right-multiplication,
/// starting from the identity.
///
/// `chain([a, b, c])` equals `a * b * c`, so when applied to a point,
/// `c` takes effect first.
///
/// # Examples
/// ```
/// use lumibox_core::math::{chain, scale, translate, vec3, Mat4};
///
/// let m: Mat4 = chain([translate(vec3(1.0, 0.0, 0.0)), scale(vec3(2.0, 2.0, 2.0))]);
/// // Scaled first, then translated
/// assert_eq!(m.apply(&vec3(1.0, 1.0, 1.0)), vec3(3.0, 2.0, 2.0));
/// ```
pub fn chain<M>(mats: impl IntoIterator<Item = Mat4x4<M>>) -> Mat4x4<M> {
    mats.into_iter()
        .fold(Mat4x4::identity(), |acc, m| Matrix(acc.mul_raw(&m), PhantomData))
}

/// Returns a matrix applying a translation by `t`.
pub const fn translate(t: Vec3) -> Mat4 {
    let [x, y, z] = t.0;
    Matrix::new([
        [1.0, 0.0, 0.0, x],
        [0.0, 1.0, 0.0, y],
        [0.0, 0.0, 1.0, z],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Returns a matrix applying a per-axis scaling by `s`.
pub const fn scale(s: Vec3) -> Mat4 {
    let [x, y, z] = s.0;
    Matrix::new([
        [x, 0.0, 0.0, 0.0],
        [0.0, y, 0.0, 0.0],
        [0.0, 0.0, z, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Returns a matrix applying a rotation by `a` about the x-axis.
pub fn rotate_x(a: Angle) -> Mat4 {
    let (s, c) = a.sin_cos();
    Matrix::new([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, c, -s, 0.0],
        [0.0, s, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Returns a matrix applying a rotation by `a` about the y-axis.
pub fn rotate_y(a: Angle) -> Mat4 {
    let (s, c) = a.sin_cos();
    Matrix::new([
        [c, 0.0, s, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [-s, 0.0, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Returns a matrix applying a rotation by `a` about the z-axis.
pub fn rotate_z(a: Angle) -> Mat4 {
    let (s, c) = a.sin_cos();
    Matrix::new([
        [c, -s, 0.0, 0.0],
        [s, c, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Creates a perspective projection matrix.
///
/// Uses a left-handed depth convention: after the perspective divide, view
/// space depths `near` and `far` map to 0 and 1 respectively, and the `w`
/// of a projected point equals its view-space z.
///
/// # Parameters
/// * `fov`: vertical angle of view.
/// * `aspect`: ratio of viewport width to height.
/// * `near_far`: depth range between the near and far clipping planes.
pub fn perspective<S>(
    fov: Angle,
    aspect: f32,
    near_far: Range<f32>,
) -> ProjMat4<S> {
    let f = 1.0 / (fov * 0.5).tan();
    let Range { start: n, end: far } = near_far;
    Matrix::new([
        [f / aspect, 0.0, 0.0, 0.0],
        [0.0, f, 0.0, 0.0],
        [0.0, 0.0, far / (far - n), -n * far / (far - n)],
        [0.0, 0.0, 1.0, 0.0],
    ])
}

/// Creates a view matrix looking from `eye` towards `target`.
///
/// The rows of the linear part are the camera's right, up, and forward
/// axes, where forward points from `eye` to `target` and right is
/// `up × forward`.
pub fn look_at<W, V>(eye: &Vec3<W>, target: &Vec3<W>, up: &Vec3<W>) -> Mat4<W, V> {
    let fwd = (*target - *eye).normalize();
    let right = up.cross(&fwd).normalize();
    let up = fwd.cross(&right);

    let row = |a: Vec3<W>| [a.x(), a.y(), a.z(), -a.dot(eye)];
    Matrix::new([row(right), row(up), row(fwd), [0.0, 0.0, 0.0, 1.0]])
}

/// Creates a viewport matrix mapping normalized device coordinates to the
/// rectangle bounded by `left`, `top`, `right`, and `bottom`.
///
/// NDC (-1, -1) maps to (`left`, `bottom`) and (1, 1) to (`right`, `top`).
/// With `top` = 0 and `bottom` = height, y grows downward on screen.
pub fn viewport<S, D>(left: f32, top: f32, right: f32, bottom: f32) -> Mat4<S, D> {
    let h = (right - left) / 2.0;
    let v = (top - bottom) / 2.0;
    Matrix::new([
        [h, 0.0, 0.0, h + left],
        [0.0, v, 0.0, bottom + v],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

//
// Foreign trait impls
//

impl<R: Clone, M> Clone for Matrix<R, M> {
    fn clone(&self) -> Self {
        Self(self.0.clone(), PhantomData)
    }
}
impl<R: Copy, M> Copy for Matrix<R, M> {}

impl<R: PartialEq, M> PartialEq for Matrix<R, M> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<M> Default for Mat4x4<M> {
    /// Returns the identity matrix.
    fn default() -> Self {
        Self::identity()
    }
}

impl<M> Debug for Mat4x4<M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix[")?;
        for row in &self.0 {
            writeln!(f, "    {:6.2?}", row)?;
        }
        write!(f, "]")
    }
}

impl<M> ApproxEq<Self, f32> for Mat4x4<M> {
    fn approx_eq_eps(&self, other: &Self, eps: &f32) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
    fn relative_epsilon() -> f32 {
        f32::relative_epsilon()
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use crate::assert_approx_eq;
    use crate::math::angle::degs;

    use super::*;

    #[test]
    fn matrix_debug() {
        let m: Mat4 = Matrix::new([
            [0.0, 1.0, 2.0, 3.0],
            [10.0, 11.0, 12.0, 13.0],
            [20.0, 21.0, 22.0, 23.0],
            [30.0, 31.0, 32.0, 33.0],
        ]);
        let expected = r#"Matrix[
    [  0.00,   1.00,   2.00,   3.00]
    [ 10.00,  11.00,  12.00,  13.00]
    [ 20.00,  21.00,  22.00,  23.00]
    [ 30.00,  31.00,  32.00,  33.00]
]"#;
        assert_eq!(format!("{m:?}"), expected);
    }

    #[test]
    fn identity_is_neutral() {
        let t = translate(vec3(1.0, 2.0, 3.0));
        assert_eq!(t.compose(&Mat4::identity()), t);
        assert_eq!(Mat4::identity().compose(&t), t);
        assert_eq!(Mat4::<()>::default(), Mat4::identity());
    }

    #[test]
    fn scale_and_translate() {
        let v = vec3(0.0, 4.0, -3.0);
        assert_eq!(scale(vec3(1.0, -2.0, 3.0)).apply(&v), vec3(0.0, -8.0, -9.0));
        assert_eq!(translate(vec3(1.0, 2.0, 3.0)).apply(&v), vec3(1.0, 6.0, 0.0));
    }

    #[test]
    fn chain_applies_last_matrix_first() {
        let t = translate(vec3(0.0, 0.0, 5.0));
        let r = rotate_y(degs(90.0));

        let tr: Mat4 = chain([t, r]);
        let rt: Mat4 = chain([r, t]);

        // Rotate x to -z, then translate
        assert_approx_eq!(tr.apply(&Vec3::X), vec3(0.0, 0.0, 4.0));
        // Translate, then rotate +z to +x
        assert_approx_eq!(rt.apply(&Vec3::X), vec3(5.0, 0.0, -1.0));
    }

    #[test]
    fn empty_chain_is_identity() {
        let m: Mat4 = chain([]);
        assert_eq!(m, Mat4::identity());
    }

    #[test]
    fn rotations() {
        assert_approx_eq!(rotate_x(degs(90.0)).apply(&Vec3::Y), Vec3::Z);
        assert_approx_eq!(rotate_y(degs(90.0)).apply(&Vec3::Z), Vec3::X);
        assert_approx_eq!(rotate_z(degs(90.0)).apply(&Vec3::X), Vec3::Y);
    }

    #[test]
    fn perspective_maps_depth_to_unit_range() {
        let p: ProjMat4<()> = perspective(degs(90.0), 2.0, 1.0..101.0);

        let near = p.apply(&vec3(0.0, 0.0, 1.0));
        assert_approx_eq!(near.w(), 1.0);
        assert_approx_eq!(near.z() / near.w(), 0.0);

        let far = p.apply(&vec3(0.0, 0.0, 101.0));
        assert_approx_eq!(far.w(), 101.0);
        assert_approx_eq!(far.z() / far.w(), 1.0);

        // 90° fov means the frustum edge is at y = z
        let edge = p.apply(&vec3(10.0, 10.0, 10.0));
        assert_approx_eq!(edge.y() / edge.w(), 1.0);
        assert_approx_eq!(edge.x() / edge.w(), 0.5);
    }

    #[test]
    fn look_at_moves_eye_to_origin() {
        let eye = vec3(0.0, 0.0, -10.0);
        let m: Mat4 = look_at(&eye, &vec3(0.0, 0.0, 0.0), &Vec3::Y);

        assert_approx_eq!(m.apply(&eye), vec3(0.0, 0.0, 0.0));
        assert_approx_eq!(m.apply(&vec3(0.0, 0.0, 0.0)), vec3(0.0, 0.0, 10.0));
        assert_approx_eq!(m.apply(&vec3(1.0, 0.0, -10.0)), vec3(1.0, 0.0, 0.0));
        assert_approx_eq!(m.apply(&vec3(0.0, 1.0, -10.0)), vec3(0.0, 1.0, 0.0));
    }

    #[test]
    fn linear_part_ignores_translation() {
        let m: Mat4 = chain([translate(vec3(5.0, 5.0, 5.0)), rotate_z(degs(90.0))]);
        assert_approx_eq!(m.apply_linear(&Vec3::X), Vec3::Y);
    }

    #[test]
    fn viewport_flips_y() {
        let m: Mat4 = viewport(0.0, 0.0, 800.0, 600.0);
        assert_eq!(m.apply(&vec3(-1.0, -1.0, 0.0)), vec3(0.0, 600.0, 0.0));
        assert_eq!(m.apply(&vec3(1.0, 1.0, 0.0)), vec3(800.0, 0.0, 0.0));
        assert_eq!(m.apply(&vec3(0.0, 0.0, 0.0)), vec3(400.0, 300.0, 0.0));
    }
}
