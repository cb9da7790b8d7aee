//! Object placement: position, orientation and scale
use serde::{Deserialize, Serialize};

use crate::math::{degrees_to_radians, Mat4, Quat, Vec3};

/// Rigid transform plus non-uniform scale. Orientation is a unit quaternion,
/// which avoids the gimbal lock of stacked Euler matrices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn new(position: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self { position, rotation, scale }
    }

    pub fn from_position(position: Vec3) -> Self {
        Self { position, ..Self::IDENTITY }
    }

    /// Build from Euler angles in degrees (`x` pitch, `y` yaw, `z` roll),
    /// composed in the same yaw * pitch * roll order as
    /// [`Mat4::create_rotation_xyz`].
    pub fn from_euler_degrees(position: Vec3, angles: Vec3, scale: Vec3) -> Self {
        let radians = Vec3::new(
            degrees_to_radians(angles.x),
            degrees_to_radians(angles.y),
            degrees_to_radians(angles.z),
        );
        Self::new(position, Quat::from_euler_yxz(radians), scale)
    }

    /// Apply `delta` on top of the current orientation (in world space).
    pub fn rotate(&mut self, delta: Quat) {
        self.rotation = (delta * self.rotation).normalized();
    }

    /// Blend toward `target`: lerp position and scale, slerp rotation.
    pub fn interpolate(&self, target: &Transform, t: f32) -> Transform {
        Transform {
            position: self.position + (target.position - self.position) * t,
            rotation: self.rotation.slerp(target.rotation, t),
            scale: self.scale + (target.scale - self.scale) * t,
        }
    }

    /// Model matrix `T * R * S`: scale first, then rotate, then translate.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::create_translation(self.position)
            * self.rotation.to_rotation_matrix()
            * Mat4::create_scale(self.scale)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
