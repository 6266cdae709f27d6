//! Camera for Pong game
//!
//! 2D orthographic camera in screen pixels, y pointing down

use glam::{Mat4, Vec3};

/// Camera struct
pub struct Camera {
    pub view: Mat4,
    pub projection: Mat4,
}

impl Camera {
    /// Map `(0, 0)..(width, height)` to the full clip space, top-left origin
    pub fn orthographic(width: f32, height: f32) -> Self {
        let view = Mat4::IDENTITY;
        let projection = Mat4::orthographic_rh(0.0, width, height, 0.0, -1.0, 1.0);

        Self { view, projection }
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection * self.view
    }

    /// Clip-space position of a screen point
    pub fn project(&self, x: f32, y: f32) -> Vec3 {
        self.view_proj().project_point3(Vec3::new(x, y, 0.0))
    }
}

/// Camera uniform data (matches WGSL struct, 256-byte aligned)
#[repr(C, align(256))]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4], // 64 bytes (mat4x4)
    _padding: [f32; 48],      // 192 bytes padding (48 * 4) to reach 256 bytes
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            _padding: [0.0; 48],
        }
    }
}
