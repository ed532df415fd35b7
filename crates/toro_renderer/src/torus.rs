//! Torus primitive for analytic ray casting.
//!
//! In its local frame a torus lies in the XZ plane, centred at the origin,
//! with its axis of revolution along Y. World-space rays are carried into
//! that frame with the inverse transform and intersected by solving the
//! quartic obtained from the implicit surface
//! `(|p|² + R² − r²)² − 4R²(px² + pz²) = 0`.

use crate::{Color, Ray};
use thiserror::Error;
use toro_math::{
    real_roots, BoundingSphere, DAffine3, DMat4, DVec3, Mat4Ext, Quartic, SolverError, EPSILON,
};

/// Errors that can occur when building a torus.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TorusError {
    #[error("Invalid torus radii: major {major}, minor {minor}")]
    InvalidRadii { major: f64, minor: f64 },

    #[error("Torus transform is not invertible")]
    SingularTransform,
}

pub type TorusResult<T> = Result<T, TorusError>;

/// Nearest forward intersection of a ray with a torus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TorusHit {
    /// World-space point of intersection
    pub point: DVec3,
    /// Ray parameter of the intersection
    pub distance: f64,
}

/// A torus with a world transform and a flat color.
#[derive(Debug, Clone)]
pub struct Torus {
    maj_r: f64,
    min_r: f64,
    trf: DAffine3,
    t: DMat4,
    inv_t: DMat4,
    bound_s: BoundingSphere,
    color: Color,
}

impl Torus {
    /// Create a new torus.
    ///
    /// `major_radius` is the radius of the tube's centre circle,
    /// `minor_radius` the radius of the tube itself.
    pub fn new(major_radius: f64, minor_radius: f64, transform: DAffine3, color: Color) -> Self {
        let t = DMat4::from(transform);
        Self {
            maj_r: major_radius,
            min_r: minor_radius,
            trf: transform,
            t,
            inv_t: t.inverse(),
            bound_s: BoundingSphere::for_torus(major_radius, minor_radius),
            color,
        }
    }

    /// Create a torus, rejecting non-positive radii and singular transforms.
    pub fn try_new(
        major_radius: f64,
        minor_radius: f64,
        transform: DAffine3,
        color: Color,
    ) -> TorusResult<Self> {
        let radii_ok = major_radius.is_finite()
            && minor_radius.is_finite()
            && major_radius > 0.0
            && minor_radius > 0.0;
        if !radii_ok {
            log::warn!(
                "Rejected torus with radii major={} minor={}",
                major_radius,
                minor_radius
            );
            return Err(TorusError::InvalidRadii {
                major: major_radius,
                minor: minor_radius,
            });
        }
        if !DMat4::from(transform).is_invertible() {
            log::warn!("Rejected torus with singular transform {:?}", transform);
            return Err(TorusError::SingularTransform);
        }
        Ok(Self::new(major_radius, minor_radius, transform, color))
    }

    pub fn major_radius(&self) -> f64 {
        self.maj_r
    }

    pub fn minor_radius(&self) -> f64 {
        self.min_r
    }

    /// The transform the torus was created with.
    pub fn transform(&self) -> DAffine3 {
        self.trf
    }

    /// Local-to-world matrix.
    pub fn matrix(&self) -> DMat4 {
        self.t
    }

    /// World-to-local matrix.
    pub fn inverse_matrix(&self) -> DMat4 {
        self.inv_t
    }

    pub fn bounding_sphere(&self) -> BoundingSphere {
        self.bound_s
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Quartic in the ray parameter `t` whose real roots are the
    /// intersections of a local-frame ray with the torus surface.
    pub fn local_quartic(&self, local: &Ray) -> Quartic {
        let o = local.origin();
        let d = local.direction();
        let r2 = self.maj_r * self.maj_r;

        let dd = d.dot(d);
        let od = o.dot(d);
        let k = o.dot(o) + r2 - self.min_r * self.min_r;

        Quartic::new(
            dd * dd,
            4.0 * dd * od,
            4.0 * od * od + 2.0 * dd * k - 4.0 * r2 * (d.x * d.x + d.z * d.z),
            4.0 * od * k - 8.0 * r2 * (o.x * d.x + o.z * d.z),
            k * k - 4.0 * r2 * (o.x * o.x + o.z * o.z),
        )
    }

    /// Find the nearest intersection in front of the ray origin.
    ///
    /// Solver failures are treated as a miss.
    pub fn intersection(&self, ray: &Ray) -> Option<TorusHit> {
        let local = self.inv_t.transform_ray(ray);
        if !self.bound_s.may_intersect(&local) {
            return None;
        }

        let quartic = self.local_quartic(&local);
        let roots = match real_roots(&quartic) {
            Ok(roots) => roots,
            Err(SolverError::Degenerate(err)) => {
                log::error!("{} for ray {:?}", err, ray);
                return None;
            }
            Err(err) => {
                log::debug!("{} for ray {:?}, treating as a miss", err, ray);
                return None;
            }
        };

        let distance = roots
            .into_iter()
            .filter(|&t| t > EPSILON)
            .fold(f64::INFINITY, f64::min);
        if distance == f64::INFINITY {
            return None;
        }

        Some(TorusHit {
            point: ray.at(distance),
            distance,
        })
    }

    /// Unit surface normal at a world-space point on the torus.
    pub fn normal(&self, point: DVec3) -> DVec3 {
        let local = self.inv_t.transform_point3(point);
        // Nearest point on the tube's centre circle
        let on_circle = DVec3::new(local.x, 0.0, local.z).normalize_or_zero() * self.maj_r;
        let on_circle_world = self.t.transform_point3(on_circle);
        (point - on_circle_world).normalize()
    }
}
