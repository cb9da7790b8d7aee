use std::fmt;
use std::ops::{Mul, MulAssign};

use serde::{Deserialize, Serialize};

use super::vec3::Vec3;

/// 4x4 homogeneous transform, column-major: element (col, row) lives at
/// `m[col * 4 + row]`.
///
/// The layout is uploaded to the GPU as-is, so it must never be transposed on
/// the way out.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mat4 {
    pub m: [f32; 16],
}

impl Mat4 {
    pub const IDENTITY: Mat4 = Mat4::from_cols_array([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);

    pub const ZERO: Mat4 = Mat4::from_cols_array([0.0; 16]);

    pub const fn from_cols_array(m: [f32; 16]) -> Self {
        Self { m }
    }

    pub const fn to_cols_array(&self) -> [f32; 16] {
        self.m
    }

    /// The 16 floats in upload order.
    pub fn as_slice(&self) -> &[f32] {
        &self.m
    }

    pub fn get(&self, col: usize, row: usize) -> f32 {
        self.m[col * 4 + row]
    }

    pub fn set(&mut self, col: usize, row: usize, value: f32) {
        self.m[col * 4 + row] = value;
    }

    /// xyz of column `col`
    pub fn axis(&self, col: usize) -> Vec3 {
        Vec3::new(self.get(col, 0), self.get(col, 1), self.get(col, 2))
    }

    pub fn create_translation(t: Vec3) -> Mat4 {
        let mut mat = Mat4::IDENTITY;
        mat.m[12] = t.x;
        mat.m[13] = t.y;
        mat.m[14] = t.z;
        mat
    }

    pub fn create_scale(s: Vec3) -> Mat4 {
        let mut mat = Mat4::IDENTITY;
        mat.m[0] = s.x;
        mat.m[5] = s.y;
        mat.m[10] = s.z;
        mat
    }

    /// Right-hand rotation about +X, radians
    pub fn create_rotation_x(angle: f32) -> Mat4 {
        let (s, c) = angle.sin_cos();
        let mut mat = Mat4::IDENTITY;
        mat.m[5] = c;
        mat.m[6] = s;
        mat.m[9] = -s;
        mat.m[10] = c;
        mat
    }

    pub fn create_rotation_y(angle: f32) -> Mat4 {
        let (s, c) = angle.sin_cos();
        let mut mat = Mat4::IDENTITY;
        mat.m[0] = c;
        mat.m[2] = -s;
        mat.m[8] = s;
        mat.m[10] = c;
        mat
    }

    pub fn create_rotation_z(angle: f32) -> Mat4 {
        let (s, c) = angle.sin_cos();
        let mut mat = Mat4::IDENTITY;
        mat.m[0] = c;
        mat.m[1] = s;
        mat.m[4] = -s;
        mat.m[5] = c;
        mat
    }

    /// Euler rotation from `angles` (radians, `x` = pitch, `y` = yaw, `z` = roll).
    ///
    /// Composed as `Ry(yaw) * Rx(pitch) * Rz(roll)`: roll is applied to the
    /// point first and yaw last. Changing the order changes rendered orientation.
    pub fn create_rotation_xyz(angles: Vec3) -> Mat4 {
        let yaw = Mat4::create_rotation_y(angles.y);
        let pitch = Mat4::create_rotation_x(angles.x);
        let roll = Mat4::create_rotation_z(angles.z);
        yaw * pitch * roll
    }

    /// Right-handed view matrix; the camera looks down -Z in view space.
    ///
    /// The basis vectors go in the rows (glam/GLM layout), so the rotation is
    /// the inverse of the camera's orientation. Writing them as columns would
    /// only place the eye at the origin for axis-aligned views.
    ///
    /// `up` must not be parallel to `target - eye`. In that case the right axis
    /// collapses to zero and the matrix loses its x and y rows; no fallback is
    /// attempted.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
        let z_axis = (eye - target).normalized();
        let x_axis = up.cross(z_axis).normalized();
        // Unit length already when the inputs are sane; left unnormalized so a
        // degenerate basis shows up instead of being papered over.
        let y_axis = z_axis.cross(x_axis);

        Mat4::from_cols_array([
            x_axis.x,
            y_axis.x,
            z_axis.x,
            0.0,
            x_axis.y,
            y_axis.y,
            z_axis.y,
            0.0,
            x_axis.z,
            y_axis.z,
            z_axis.z,
            0.0,
            -x_axis.dot(eye),
            -y_axis.dot(eye),
            -z_axis.dot(eye),
            1.0,
        ])
    }

    /// OpenGL-style perspective projection, depth mapped to [-1, 1].
    ///
    /// `fov` is the vertical field of view in radians. Requires
    /// `0 < near < far`; anything else gives an inverted or singular matrix.
    pub fn create_perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        let tan_half_fov = (fov * 0.5).tan();
        let mut mat = Mat4::ZERO;
        mat.m[0] = 1.0 / (aspect * tan_half_fov);
        mat.m[5] = 1.0 / tan_half_fov;
        mat.m[10] = -(far + near) / (far - near);
        mat.m[11] = -1.0;
        mat.m[14] = -(2.0 * far * near) / (far - near);
        mat
    }

    /// Full homogeneous transform of the point `(p, 1)`. Divide by the
    /// returned `w` for perspective-correct coordinates.
    pub fn transform_point4(&self, p: Vec3) -> [f32; 4] {
        let m = &self.m;
        [
            m[0] * p.x + m[4] * p.y + m[8] * p.z + m[12],
            m[1] * p.x + m[5] * p.y + m[9] * p.z + m[13],
            m[2] * p.x + m[6] * p.y + m[10] * p.z + m[14],
            m[3] * p.x + m[7] * p.y + m[11] * p.z + m[15],
        ]
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Mat4::IDENTITY
    }
}

/// `a * b` applies `b` first, then `a`.
impl Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, b: Mat4) -> Mat4 {
        let mut result = Mat4::ZERO;
        for col in 0..4 {
            for row in 0..4 {
                result.m[col * 4 + row] = (0..4)
                    .map(|k| self.m[k * 4 + row] * b.m[col * 4 + k])
                    .sum();
            }
        }
        result
    }
}

impl MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Mat4) {
        *self = *self * rhs;
    }
}

/// Transforms `v` as a point (`w = 1`) and drops the resulting w; no
/// perspective divide happens here.
impl Mul<Vec3> for Mat4 {
    type Output = Vec3;

    fn mul(self, v: Vec3) -> Vec3 {
        let [x, y, z, _] = self.transform_point4(v);
        Vec3::new(x, y, z)
    }
}

impl From<glam::Mat4> for Mat4 {
    fn from(m: glam::Mat4) -> Self {
        Mat4::from_cols_array(m.to_cols_array())
    }
}

impl From<Mat4> for glam::Mat4 {
    fn from(m: Mat4) -> Self {
        glam::Mat4::from_cols_array(&m.m)
    }
}

// Printed by logical rows even though storage is by column.
impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            if row > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "[ {:7.2} {:7.2} {:7.2} {:7.2} ]",
                self.get(0, row),
                self.get(1, row),
                self.get(2, row),
                self.get(3, row)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn assert_mat_eq(a: &Mat4, b: &Mat4) {
        for i in 0..16 {
            assert!((a.m[i] - b.m[i]).abs() < 1e-5, "index {}: {} vs {}", i, a.m[i], b.m[i]);
        }
    }

    fn assert_vec_eq(a: Vec3, b: Vec3) {
        assert!((a - b).magnitude() < 1e-5, "{} vs {}", a, b);
    }

    #[test]
    fn test_default_is_identity() {
        assert_eq!(Mat4::default(), Mat4::IDENTITY);
    }

    #[test]
    fn test_translation_layout() {
        let t = Mat4::create_translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(&t.m[12..16], &[1.0, 2.0, 3.0, 1.0]);
        assert_eq!(t.get(3, 1), 2.0);
        assert_vec_eq(t * Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_scale() {
        let s = Mat4::create_scale(Vec3::new(2.0, 3.0, 4.0));
        assert_vec_eq(s * Vec3::ONE, Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(s.m[15], 1.0);
    }

    #[test]
    fn test_single_axis_rotations() {
        assert_vec_eq(Mat4::create_rotation_x(FRAC_PI_2) * Vec3::Y, Vec3::Z);
        assert_vec_eq(Mat4::create_rotation_y(FRAC_PI_2) * Vec3::Z, Vec3::X);
        assert_vec_eq(Mat4::create_rotation_z(FRAC_PI_2) * Vec3::X, Vec3::Y);
    }

    #[test]
    fn test_rotation_xyz_order() {
        let angles = Vec3::new(0.3, 1.1, -0.4);
        let expected = Mat4::create_rotation_y(angles.y)
            * Mat4::create_rotation_x(angles.x)
            * Mat4::create_rotation_z(angles.z);
        assert_mat_eq(&Mat4::create_rotation_xyz(angles), &expected);

        let reversed = Mat4::create_rotation_z(angles.z)
            * Mat4::create_rotation_x(angles.x)
            * Mat4::create_rotation_y(angles.y);
        assert!(Mat4::create_rotation_xyz(angles) != reversed);
    }

    #[test]
    fn test_multiplication_applies_right_first() {
        let t = Mat4::create_translation(Vec3::new(10.0, 0.0, 0.0));
        let s = Mat4::create_scale(Vec3::new(2.0, 2.0, 2.0));
        // scale then translate
        assert_vec_eq((t * s) * Vec3::ONE, Vec3::new(12.0, 2.0, 2.0));
        // translate then scale
        assert_vec_eq((s * t) * Vec3::ONE, Vec3::new(22.0, 2.0, 2.0));
    }

    #[test]
    fn test_mul_assign() {
        let mut m = Mat4::create_translation(Vec3::X);
        m *= Mat4::create_translation(Vec3::Y);
        assert_mat_eq(&m, &Mat4::create_translation(Vec3::new(1.0, 1.0, 0.0)));
    }

    #[test]
    fn test_look_at_default_view() {
        let view = Mat4::look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
        assert_mat_eq(&view, &Mat4::create_translation(Vec3::new(0.0, 0.0, -5.0)));
    }

    #[test]
    fn test_look_at_basis_in_rows() {
        let eye = Vec3::new(2.0, 3.0, 4.0);
        let view = Mat4::look_at(eye, Vec3::ZERO, Vec3::Y);
        let back = eye.normalized();
        // third row is the view-space +Z axis, i.e. pointing back at the eye
        assert_vec_eq(Vec3::new(view.get(0, 2), view.get(1, 2), view.get(2, 2)), back);
        assert_vec_eq(view * eye, Vec3::ZERO);
    }

    #[test]
    fn test_look_at_degenerate_up_is_not_zero_matrix() {
        let view = Mat4::look_at(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO, Vec3::Y);
        assert!(view != Mat4::ZERO);
        assert_eq!(view.m[15], 1.0);
    }

    #[test]
    fn test_perspective_entries() {
        let p = Mat4::create_perspective(FRAC_PI_2, 2.0, 1.0, 3.0);
        assert!((p.get(0, 0) - 0.5).abs() < 1e-6);
        assert!((p.get(1, 1) - 1.0).abs() < 1e-6);
        assert!((p.get(2, 2) + 2.0).abs() < 1e-6);
        assert_eq!(p.get(2, 3), -1.0);
        assert!((p.get(3, 2) + 3.0).abs() < 1e-6);
        assert_eq!(p.get(3, 3), 0.0);
    }

    #[test]
    fn test_transform_point4_keeps_w() {
        let p = Mat4::create_perspective(FRAC_PI_2, 1.0, 0.1, 100.0);
        let [_, _, _, w] = p.transform_point4(Vec3::new(0.0, 0.0, -10.0));
        assert!((w - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_display_rows() {
        let t = Mat4::create_translation(Vec3::new(1.0, 2.0, 3.0));
        let text = t.to_string();
        let first = text.lines().next().unwrap();
        assert_eq!(first, "[    1.00    0.00    0.00    1.00 ]");
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn test_bytes_are_column_major() {
        let t = Mat4::create_translation(Vec3::new(7.0, 8.0, 9.0));
        let floats: &[f32] = bytemuck::cast_slice(bytemuck::bytes_of(&t));
        assert_eq!(floats.len(), 16);
        assert_eq!(&floats[12..15], &[7.0, 8.0, 9.0]);
    }
}
