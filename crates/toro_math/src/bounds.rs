use crate::Ray;

/// A sphere centred at the local origin, used to reject rays before the
/// expensive quartic solve.
///
/// The test only proves non-intersection: a ray that passes it may still miss
/// whatever the sphere encloses.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoundingSphere {
    pub radius: f64,
}

impl BoundingSphere {
    /// Create a new bounding sphere.
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Sphere enclosing a torus with the given major and minor radii.
    pub fn for_torus(major_radius: f64, minor_radius: f64) -> Self {
        Self::new(major_radius + minor_radius)
    }

    /// Returns false only if the ray (in the sphere's local frame) cannot
    /// touch the sphere.
    pub fn may_intersect(&self, ray: &Ray) -> bool {
        let r2 = self.radius * self.radius;
        let l = -ray.origin();
        let l2 = l.length_squared();

        // An origin inside the sphere always needs the full test
        if l2 <= r2 {
            return true;
        }

        let tc = l.dot(ray.direction());
        if tc < 0.0 {
            return false;
        }

        let dir2 = ray.direction().length_squared();
        if dir2 == 0.0 {
            return false;
        }
        let d2 = l2 - tc * tc / dir2;
        d2 <= r2
    }
}
