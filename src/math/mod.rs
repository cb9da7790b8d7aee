mod mat4;
mod quat;
mod vec3;

pub use mat4::Mat4;
pub use quat::{slerp, Quat, NORMALIZE_EPSILON, SLERP_DOT_THRESHOLD};
pub use vec3::{cross, dot, Vec3};

pub const PI: f32 = std::f32::consts::PI;

pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * PI / 180.0
}

pub fn radians_to_degrees(radians: f32) -> f32 {
    radians * 180.0 / PI
}
