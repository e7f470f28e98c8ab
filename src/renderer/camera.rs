//! Perspective camera

use glam::{Mat4, Vec3};

/// Right-handed perspective camera looking at a fixed target
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    /// Vertical field of view in radians
    fov: f32,
    /// Aspect ratio (width / height)
    aspect: f32,
    near: f32,
    far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(3.0, 3.0, 3.0), Vec3::ZERO, 75.0, 1.0)
    }
}

impl Camera {
    pub fn new(position: Vec3, target: Vec3, fov_deg: f32, aspect: f32) -> Self {
        Self {
            position,
            target,
            fov: fov_deg.to_radians(),
            aspect,
            near: 0.1,
            far: 100.0,
        }
    }

    pub fn from_settings(settings: &crate::Settings, width: u32, height: u32) -> Self {
        let mut camera = Self::new(
            Vec3::from(settings.camera_position),
            Vec3::from(settings.camera_target),
            settings.camera_fov_deg,
            1.0,
        );
        camera.resize(width, height);
        camera
    }

    /// Update the projection for a new viewport size (ignores zero sizes)
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_updates_aspect() {
        let mut camera = Camera::default();
        camera.resize(1920, 1080);
        assert!((camera.aspect() - 16.0 / 9.0).abs() < 1e-6);

        // Degenerate sizes are ignored
        camera.resize(0, 1080);
        assert!((camera.aspect() - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn test_target_projects_to_screen_centre() {
        let camera = Camera::default();
        let clip = camera.view_projection_matrix() * camera.target.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-5);
        assert!(ndc.y.abs() < 1e-5);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn test_from_settings() {
        let settings = crate::Settings::default();
        let camera = Camera::from_settings(&settings, 800, 400);
        assert_eq!(camera.position, Vec3::new(3.0, 3.0, 3.0));
        assert!((camera.aspect() - 2.0).abs() < 1e-6);
    }
}
