//! Camera description shared between the layout calculator and the renderer.

use crate::constants::{CAMERA_FOV_DEG, CAMERA_Z};
use glam::{Mat4, Vec3};

/// Simple right-handed camera with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// The fixed landing-page camera: straight down the Z axis, wide field
    /// of view so the sections tower above and below the viewport.
    pub fn landing(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: 0.1,
            zfar: 2000.0,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> [[f32; 4]; 4] {
        (self.projection_matrix() * self.view_matrix()).to_cols_array_2d()
    }

    /// World-space size of the viewport at the camera's focal plane (the
    /// plane through `target`). Feeds the layout calculator.
    pub fn viewport_size(&self) -> (f32, f32) {
        let distance = (self.eye - self.target).length();
        let height = 2.0 * (self.fovy_radians * 0.5).tan() * distance;
        (height * self.aspect, height)
    }
}
