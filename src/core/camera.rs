// Fixed scene camera used by the point renderer. Kept free of platform APIs
// so the matrix math is host-testable alongside the rest of the core.

use glam::{Mat4, Vec3};

use crate::constants::{CAMERA_FOV_DEG, CAMERA_Z, CAMERA_ZFAR, CAMERA_ZNEAR};

/// Right-handed perspective camera description.
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
    /// Clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// World-to-view transform.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// The backdrop's camera: straight down the -Z axis at the field's center.
pub fn scene_camera(aspect: f32) -> Camera {
    Camera {
        eye: Vec3::new(0.0, 0.0, CAMERA_Z),
        target: Vec3::ZERO,
        up: Vec3::Y,
        aspect,
        fovy_radians: CAMERA_FOV_DEG.to_radians(),
        znear: CAMERA_ZNEAR,
        zfar: CAMERA_ZFAR,
    }
}
