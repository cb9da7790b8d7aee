use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use super::mat4::Mat4;
use super::vec3::Vec3;

/// Magnitude below which `normalize` leaves the quaternion untouched.
///
/// Scaling by `1 / mag` near the origin amplifies rounding noise into an
/// arbitrary orientation, so tiny quaternions are passed through as-is.
pub const NORMALIZE_EPSILON: f32 = 1e-4;

/// Above this `|dot|` the two rotations are close enough that `sin(theta)`
/// in the slerp denominator approaches zero; lerp + normalize takes over.
pub const SLERP_DOT_THRESHOLD: f32 = 0.9995;

/// Quaternion `w + xi + yj + zk`. Only unit quaternions represent rotations.
///
/// Serialized as `[w, x, y, z]`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct Quat {
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Quat {
    pub const IDENTITY: Quat = Quat::new(1.0, 0.0, 0.0, 0.0);

    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, x, y, z }
    }

    /// Rotation of `angle` radians around `axis`. The axis must already be
    /// normalized; it is not checked.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let half = angle * 0.5;
        let s = half.sin();
        Quat::new(half.cos(), axis.x * s, axis.y * s, axis.z * s)
    }

    /// Euler angles (radians, `x` = pitch, `y` = yaw, `z` = roll) composed as
    /// yaw * pitch * roll, matching [`Mat4::create_rotation_xyz`].
    pub fn from_euler_yxz(angles: Vec3) -> Self {
        let yaw = Quat::from_axis_angle(Vec3::Y, angles.y);
        let pitch = Quat::from_axis_angle(Vec3::X, angles.x);
        let roll = Quat::from_axis_angle(Vec3::Z, angles.z);
        yaw * pitch * roll
    }

    pub fn vector(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    pub fn dot(self, other: Quat) -> f32 {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn magnitude(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Normalize in place. Skipped when the magnitude is at or below
    /// [`NORMALIZE_EPSILON`].
    pub fn normalize(&mut self) {
        let mag = self.magnitude();
        if mag > NORMALIZE_EPSILON {
            *self *= 1.0 / mag;
        }
    }

    pub fn normalized(self) -> Quat {
        let mut q = self;
        q.normalize();
        q
    }

    pub fn conjugate(self) -> Quat {
        Quat::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Reverse rotation. The conjugate alone is enough for unit input; the
    /// extra normalize absorbs drift from repeated composition.
    pub fn inverse(self) -> Quat {
        self.conjugate().normalized()
    }

    /// Rotate a vector. Equivalent to `self.to_rotation_matrix() * v` for unit
    /// quaternions.
    pub fn rotate(self, v: Vec3) -> Vec3 {
        let u = self.vector();
        let t = u.cross(v) * 2.0;
        v + t * self.w + u.cross(t)
    }

    /// Rotation matrix for a unit quaternion. Non-unit input gives a scaled,
    /// sheared matrix.
    pub fn to_rotation_matrix(self) -> Mat4 {
        let (w, x, y, z) = (self.w, self.x, self.y, self.z);
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);

        Mat4::from_cols_array([
            1.0 - 2.0 * (yy + zz),
            2.0 * (xy + wz),
            2.0 * (xz - wy),
            0.0,
            2.0 * (xy - wz),
            1.0 - 2.0 * (xx + zz),
            2.0 * (yz + wx),
            0.0,
            2.0 * (xz + wy),
            2.0 * (yz - wx),
            1.0 - 2.0 * (xx + yy),
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        ])
    }

    pub fn slerp(self, end: Quat, t: f32) -> Quat {
        slerp(self, end, t)
    }
}

/// Spherical interpolation between two unit quaternions along the shorter arc.
pub fn slerp(q0: Quat, mut q1: Quat, t: f32) -> Quat {
    let mut cos_theta = q0.dot(q1);

    // q and -q are the same rotation; flip so we take the short way round.
    if cos_theta < 0.0 {
        q1 = -q1;
        cos_theta = -cos_theta;
    }

    if cos_theta > SLERP_DOT_THRESHOLD {
        return (q0 + (q1 - q0) * t).normalized();
    }

    let theta_0 = cos_theta.acos();
    let theta = theta_0 * t;
    let sin_theta = theta.sin();
    let sin_theta_0 = theta_0.sin();

    let s0 = theta.cos() - cos_theta * sin_theta / sin_theta_0;
    let s1 = sin_theta / sin_theta_0;

    q0 * s0 + q1 * s1
}

impl Default for Quat {
    fn default() -> Self {
        Quat::IDENTITY
    }
}

impl Add for Quat {
    type Output = Quat;

    fn add(self, o: Quat) -> Quat {
        Quat::new(self.w + o.w, self.x + o.x, self.y + o.y, self.z + o.z)
    }
}

impl AddAssign for Quat {
    fn add_assign(&mut self, o: Quat) {
        *self = *self + o;
    }
}

impl Sub for Quat {
    type Output = Quat;

    fn sub(self, o: Quat) -> Quat {
        Quat::new(self.w - o.w, self.x - o.x, self.y - o.y, self.z - o.z)
    }
}

impl SubAssign for Quat {
    fn sub_assign(&mut self, o: Quat) {
        *self = *self - o;
    }
}

impl Neg for Quat {
    type Output = Quat;

    fn neg(self) -> Quat {
        Quat::new(-self.w, -self.x, -self.y, -self.z)
    }
}

impl Mul<f32> for Quat {
    type Output = Quat;

    fn mul(self, s: f32) -> Quat {
        Quat::new(self.w * s, self.x * s, self.y * s, self.z * s)
    }
}

impl Mul<Quat> for f32 {
    type Output = Quat;

    fn mul(self, q: Quat) -> Quat {
        q * self
    }
}

impl MulAssign<f32> for Quat {
    fn mul_assign(&mut self, s: f32) {
        *self = *self * s;
    }
}

/// Hamilton product. `q1 * q2` rotates by `q2` first, then by `q1`.
impl Mul for Quat {
    type Output = Quat;

    fn mul(self, q2: Quat) -> Quat {
        let q1 = self;
        Quat::new(
            q1.w * q2.w - q1.x * q2.x - q1.y * q2.y - q1.z * q2.z,
            q1.w * q2.x + q1.x * q2.w + q1.y * q2.z - q1.z * q2.y,
            q1.w * q2.y - q1.x * q2.z + q1.y * q2.w + q1.z * q2.x,
            q1.w * q2.z + q1.x * q2.y - q1.y * q2.x + q1.z * q2.w,
        )
    }
}

impl From<[f32; 4]> for Quat {
    fn from([w, x, y, z]: [f32; 4]) -> Self {
        Quat::new(w, x, y, z)
    }
}

impl From<Quat> for [f32; 4] {
    fn from(q: Quat) -> Self {
        [q.w, q.x, q.y, q.z]
    }
}

impl From<glam::Quat> for Quat {
    fn from(q: glam::Quat) -> Self {
        Quat::new(q.w, q.x, q.y, q.z)
    }
}

impl From<Quat> for glam::Quat {
    fn from(q: Quat) -> Self {
        glam::Quat::from_xyzw(q.x, q.y, q.z, q.w)
    }
}

impl fmt::Display for Quat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quat(w:{}, x:{}, y:{}, z:{})", self.w, self.x, self.y, self.z)
    }
}
