//! Pinhole camera for primary ray generation.

use crate::Ray;
use toro_core::RenderConfig;
use toro_math::DVec3;

/// Camera looking down +Z with +Y up and +X to the right.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub width: u32,
    pub height: u32,
    /// World-space eye position
    pub pos: DVec3,
    /// Vertical field of view in degrees
    pub field_of_view: f64,
}

impl Camera {
    /// Create a new camera.
    pub fn new(width: u32, height: u32, pos: DVec3, field_of_view: f64) -> Self {
        Self {
            width,
            height,
            pos,
            field_of_view,
        }
    }

    /// Create a camera matching the dimensions of a render configuration.
    pub fn from_config(config: &RenderConfig, pos: DVec3, field_of_view: f64) -> Self {
        Self::new(config.width, config.height, pos, field_of_view)
    }

    /// Generate the primary ray through the centre of pixel (px, py).
    ///
    /// Row 0 is the top of the image.
    pub fn compute_ray(&self, px: u32, py: u32) -> Ray {
        let aspect = self.width as f64 / self.height as f64;
        let half_height = (self.field_of_view.to_radians() / 2.0).tan();
        let half_width = half_height * aspect;

        let ndc_x = 2.0 * (px as f64 + 0.5) / self.width as f64 - 1.0;
        let ndc_y = 1.0 - 2.0 * (py as f64 + 0.5) / self.height as f64;

        let direction = DVec3::new(ndc_x * half_width, ndc_y * half_height, 1.0).normalize();
        Ray::new(self.pos, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::new(64, 64, DVec3::new(0.0, 0.0, -10.0), 60.0)
    }

    #[test]
    fn test_from_config() {
        let config = RenderConfig::new(320, 200);
        let camera = Camera::from_config(&config, DVec3::ZERO, 45.0);
        assert_eq!((camera.width, camera.height), (320, 200));
    }

    #[test]
    fn test_center_ray_points_forward() {
        let ray = camera().compute_ray(32, 32);
        assert_eq!(ray.origin(), DVec3::new(0.0, 0.0, -10.0));
        assert!((ray.direction().length() - 1.0).abs() < 1e-12);
        assert!(ray.direction().z > 0.999);
    }

    #[test]
    fn test_orientation() {
        let camera = camera();
        let top_left = camera.compute_ray(0, 0).direction();
        let bottom_right = camera.compute_ray(63, 63).direction();

        assert!(top_left.x < 0.0 && top_left.y > 0.0);
        assert!(bottom_right.x > 0.0 && bottom_right.y < 0.0);
        // Opposite corners mirror each other
        assert!((top_left.x + bottom_right.x).abs() < 1e-12);
        assert!((top_left.y + bottom_right.y).abs() < 1e-12);
    }

    #[test]
    fn test_vertical_field_of_view() {
        // Edge of the top row sits just inside half the field of view
        let camera = Camera::new(1, 1000, DVec3::ZERO, 90.0);
        let d = camera.compute_ray(0, 0).direction();
        let angle = d.y.atan2(d.z).to_degrees();
        assert!(angle < 45.0 && angle > 44.9);
    }

    #[test]
    fn test_aspect_ratio() {
        let wide = Camera::new(200, 100, DVec3::ZERO, 60.0);
        let right = wide.compute_ray(199, 50).direction();
        let top = wide.compute_ray(100, 0).direction();
        // Horizontal extent is twice the vertical one
        assert!((right.x / right.z - 2.0 * top.y / top.z).abs() < 0.05);
    }

    #[test]
    fn test_deterministic() {
        let camera = camera();
        assert_eq!(camera.compute_ray(17, 5), camera.compute_ray(17, 5));
    }
}
