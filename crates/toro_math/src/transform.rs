// Transform utilities for DMat4
//
// Extends glam::DMat4 with the ray-casting conveniences the torus pipeline needs.
// Note: glam::DMat4 already provides transform_point3(), transform_vector3() and inverse()

use glam::DMat4;
use crate::Ray;

/// Extension trait for DMat4 to provide additional transform utilities
pub trait Mat4Ext {
    /// Transform a ray into another frame.
    ///
    /// The origin is transformed as a point (w=1) and the direction as a vector (w=0).
    /// The direction is not renormalised, so `t` addresses the same point in both frames.
    fn transform_ray(&self, ray: &Ray) -> Ray;

    /// Returns true if the matrix has a finite, non-zero determinant.
    fn is_invertible(&self) -> bool;
}

impl Mat4Ext for DMat4 {
    fn transform_ray(&self, ray: &Ray) -> Ray {
        Ray::new(
            self.transform_point3(ray.origin()),
            self.transform_vector3(ray.direction()),
        )
    }

    fn is_invertible(&self) -> bool {
        let det = self.determinant();
        det.is_finite() && det.abs() > f64::EPSILON
    }
}
