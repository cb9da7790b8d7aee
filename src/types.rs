use serde::Serialize;

use crate::math::{Mat4, Vec3};

/// Per-object uniform block for the GPU: matrices are column-major, 16 floats
/// each, written without transposition.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Serialize)]
pub struct FrameUniforms {
    pub model: [f32; 16],
    pub view: [f32; 16],
    pub projection: [f32; 16],
    pub view_pos: [f32; 3],
    pub _pad: f32,
}

impl FrameUniforms {
    pub fn new(model: &Mat4, view: &Mat4, projection: &Mat4, view_pos: Vec3) -> Self {
        Self {
            model: model.to_cols_array(),
            view: view.to_cols_array(),
            projection: projection.to_cols_array(),
            view_pos: view_pos.to_array(),
            _pad: 0.0,
        }
    }

    /// `projection * view * model`, the full object-to-clip transform.
    pub fn model_view_projection(&self) -> Mat4 {
        Mat4::from_cols_array(self.projection)
            * Mat4::from_cols_array(self.view)
            * Mat4::from_cols_array(self.model)
    }
}
