/// Camera — position, orientation and perspective projection.
///
/// Only stores parameters and derives matrices on request; callers move it
/// around through the shared handle the registry hands out.

use glam::{EulerRot, Mat4, Vec3};

pub const DEFAULT_FIELD_OF_VIEW: f32 = 90.0;
pub const DEFAULT_ASPECT_RATIO: f32 = 4.0 / 3.0;
pub const DEFAULT_NEAR_PLANE: f32 = 0.1;
pub const DEFAULT_FAR_PLANE: f32 = 1000.0;

/// Camera creation descriptor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraDesc {
    pub position: Vec3,
    /// Rotation around the X, Y and Z axes, in radians
    pub rotation: Vec3,
    /// Vertical field of view, in degrees
    pub field_of_view: f32,
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraDesc {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            field_of_view: DEFAULT_FIELD_OF_VIEW,
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            near: DEFAULT_NEAR_PLANE,
            far: DEFAULT_FAR_PLANE,
        }
    }
}

impl CameraDesc {
    /// Default projection at a given pose
    pub fn positioned(position: Vec3, rotation: Vec3) -> Self {
        Self { position, rotation, ..Self::default() }
    }

    /// Default pose with a given projection
    pub fn projection(field_of_view: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        Self { field_of_view, aspect_ratio, near, far, ..Self::default() }
    }

    /// Fully specified camera
    pub fn new(position: Vec3, rotation: Vec3, field_of_view: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        Self { position, rotation, field_of_view, aspect_ratio, near, far }
    }
}

/// Camera resource
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    rotation: Vec3,
    field_of_view: f32,
    aspect_ratio: f32,
    near: f32,
    far: f32,
}

impl Camera {
    pub fn from_desc(desc: CameraDesc) -> Self {
        Self {
            position: desc.position,
            rotation: desc.rotation,
            field_of_view: desc.field_of_view,
            aspect_ratio: desc.aspect_ratio,
            near: desc.near,
            far: desc.far,
        }
    }

    // ===== GETTERS =====

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn field_of_view(&self) -> f32 {
        self.field_of_view
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    /// World → view transform
    pub fn view_matrix(&self) -> Mat4 {
        let orientation = Mat4::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z);
        orientation * Mat4::from_translation(-self.position)
    }

    /// OpenGL-style perspective projection
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.field_of_view.to_radians(), self.aspect_ratio, self.near, self.far)
    }

    // ===== SETTERS =====

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn set_rotation(&mut self, rotation: Vec3) {
        self.rotation = rotation;
    }

    /// Move by `offset`, expressed in world space
    pub fn translate(&mut self, offset: Vec3) {
        self.position += offset;
    }

    pub fn set_field_of_view(&mut self, degrees: f32) {
        self.field_of_view = degrees;
    }

    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }

    pub fn set_clip_planes(&mut self, near: f32, far: f32) {
        self.near = near;
        self.far = far;
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
