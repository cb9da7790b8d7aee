pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod frame;
pub mod light;
pub mod math;
pub mod scene;
pub mod transform;
pub mod types;

pub use camera::{Camera, CameraMovement};
pub use light::{Light, LightType};
pub use math::{slerp, Mat4, Quat, Vec3};
pub use transform::Transform;
