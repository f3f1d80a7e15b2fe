use glam::{Mat4, Vec3};
use crate::types::CameraUniform;

/// Field of view (degrees) at which one world unit covers one logical pixel
/// on the z = 0 plane, seen from `distance`
pub fn fov_for_viewport_height(viewport_height: f32, distance: f32) -> f32 {
    (2.0 * (viewport_height / (2.0 * distance)).atan()).to_degrees()
}

/// Perspective camera that pans horizontally across the panel strip
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    fov: f32,
    aspect: f32,
    near: f32,
    far: f32,
    projection: Mat4,
    projection_dirty: bool,
}

impl Camera {
    pub fn new(viewport: [f32; 2], distance: f32, near: f32, far: f32) -> Self {
        let mut camera = Self {
            position: Vec3::new(0.0, 0.0, distance),
            fov: fov_for_viewport_height(viewport[1], distance),
            aspect: viewport[0] / viewport[1],
            near,
            far,
            projection: Mat4::IDENTITY,
            projection_dirty: true,
        };
        camera.update_projection_matrix();
        camera
    }

    /// Horizontal pan position
    pub fn x(&self) -> f32 {
        self.position.x
    }

    pub fn set_x(&mut self, x: f32) {
        self.position.x = x;
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Distance from the panel plane
    pub fn distance(&self) -> f32 {
        self.position.z
    }

    /// Recompute fov from the viewport height, keeping vertical framing 1:1
    pub fn fit_viewport_height(&mut self, viewport_height: f32) {
        let fov = fov_for_viewport_height(viewport_height, self.distance());
        if fov != self.fov {
            self.fov = fov;
            self.projection_dirty = true;
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect != self.aspect {
            self.aspect = aspect;
            self.projection_dirty = true;
        }
    }

    pub fn is_projection_dirty(&self) -> bool {
        self.projection_dirty
    }

    /// Rebuild the projection matrix if fov or aspect changed
    pub fn update_projection_matrix(&mut self) {
        if self.projection_dirty {
            self.projection =
                Mat4::perspective_rh(self.fov.to_radians(), self.aspect, self.near, self.far);
            self.projection_dirty = false;
        }
    }

    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    /// Looks straight down -Z at the panel plane
    pub fn view(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, Vec3::NEG_Z, Vec3::Y)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view()
    }

    pub fn to_uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.view_projection().to_cols_array_2d(),
        }
    }
}
