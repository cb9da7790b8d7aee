use serde::{Deserialize, Serialize};

use crate::math::{degrees_to_radians, Vec3};
use crate::transform::Transform;

/// Light source kinds. Discriminants are what the shader switches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightType {
    #[default]
    Point = 0,
    Directional = 1,
    Spot = 2,
    Area = 3,
}

/// Light parameters. Position and orientation come from the owning object's
/// `Transform`; spot cone angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Light {
    #[serde(rename = "type")]
    pub light_type: LightType,
    pub enabled: bool,
    pub color: Vec3,
    pub intensity: f32,
    /// Ignored for directional lights
    pub range: f32,
    pub inner_angle: f32,
    pub outer_angle: f32,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            light_type: LightType::Point,
            enabled: true,
            color: Vec3::ONE,
            intensity: 1.0,
            range: 10.0,
            inner_angle: 15.0,
            outer_angle: 30.0,
        }
    }
}

impl Light {
    pub fn new(light_type: LightType) -> Self {
        Self {
            light_type,
            ..Self::default()
        }
    }

    /// Direction the light points in world space: the transform's rotation
    /// applied to -Z, the same resting direction as the default camera.
    pub fn forward(transform: &Transform) -> Vec3 {
        transform.rotation.rotate(-Vec3::Z).normalized()
    }

    /// Build the GPU block for a light placed by `transform`.
    pub fn uniform(&self, transform: &Transform) -> LightUniform {
        LightUniform {
            position: transform.position.to_array(),
            light_type: self.light_type as u32,
            direction: Light::forward(transform).to_array(),
            intensity: self.intensity,
            color: self.color.to_array(),
            range: self.range,
            // Shaders compare against the cosine, not the angle
            inner_cos: degrees_to_radians(self.inner_angle).cos(),
            outer_cos: degrees_to_radians(self.outer_angle).cos(),
            enabled: self.enabled as u32,
            _pad: 0.0,
        }
    }
}

/// Per-light uniform block (64 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Serialize)]
pub struct LightUniform {
    pub position: [f32; 3],
    pub light_type: u32,
    pub direction: [f32; 3],
    pub intensity: f32,
    pub color: [f32; 3],
    pub range: f32,
    pub inner_cos: f32,
    pub outer_cos: f32,
    pub enabled: u32,
    pub _pad: f32,
}
