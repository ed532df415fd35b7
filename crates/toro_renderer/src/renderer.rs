//! Flat shading of primary rays.
//!
//! Each ray is tested against every torus; the nearest forward hit decides
//! the pixel color. There is no lighting model beyond the torus color.

use crate::{Camera, Color, Ray, Torus, TorusHit};

/// Nearest hit over a list of toruses together with the torus that was hit.
///
/// On equal distances the torus that comes first in the list wins.
pub fn nearest_hit<'a>(ray: &Ray, toruses: &'a [Torus]) -> Option<(&'a Torus, TorusHit)> {
    let mut closest: Option<(&Torus, TorusHit)> = None;

    for torus in toruses {
        if let Some(hit) = torus.intersection(ray) {
            let closer = match &closest {
                Some((_, best)) => hit.distance < best.distance,
                None => true,
            };
            if closer {
                closest = Some((torus, hit));
            }
        }
    }

    closest
}

/// Compute the color seen by a ray, or None if it hits nothing.
pub fn render_ray(ray: &Ray, toruses: &[Torus]) -> Option<Color> {
    nearest_hit(ray, toruses).map(|(torus, _)| torus.color())
}

/// Render a single pixel, falling back to `background` on a miss.
pub fn render_pixel(camera: &Camera, toruses: &[Torus], x: u32, y: u32, background: Color) -> Color {
    let ray = camera.compute_ray(x, y);
    render_ray(&ray, toruses).unwrap_or(background)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;
    use toro_math::{DAffine3, DVec3};

    const RED: Color = Color::new(1.0, 0.0, 0.0);
    const GREEN: Color = Color::new(0.0, 1.0, 0.0);

    fn camera() -> Camera {
        Camera::new(64, 64, DVec3::new(0.0, 0.0, -10.0), 60.0)
    }

    /// Torus turned so its hole faces a camera looking down +Z.
    fn facing_torus(color: Color) -> Torus {
        Torus::new(2.0, 0.5, DAffine3::from_rotation_x(FRAC_PI_2), color)
    }

    #[test]
    fn test_center_pixel_looks_through_hole() {
        let toruses = [facing_torus(RED)];
        let ray = camera().compute_ray(32, 32);
        assert!(toruses[0].intersection(&ray).is_none());
        assert_eq!(render_ray(&ray, &toruses), None);
    }

    #[test]
    fn test_tube_pixel_hits() {
        let toruses = [facing_torus(RED)];
        let camera = camera();

        // Pixel columns 43 and 20 look at the tube right and left of the hole
        for x in [43, 20] {
            let ray = camera.compute_ray(x, 32);
            let hit = toruses[0].intersection(&ray).expect("ray should hit the tube");
            assert!(hit.distance > 0.0);
            assert_eq!(render_ray(&ray, &toruses), Some(RED));
        }
    }

    #[test]
    fn test_corner_pixel_misses() {
        let toruses = [facing_torus(RED)];
        let ray = camera().compute_ray(0, 0);
        assert_eq!(render_ray(&ray, &toruses), None);
    }

    #[test]
    fn test_edge_on_torus_center_hits_near_tube() {
        let toruses = [Torus::new(2.0, 0.5, DAffine3::IDENTITY, RED)];
        let ray = camera().compute_ray(32, 32);
        let hit = toruses[0].intersection(&ray).expect("edge-on torus blocks the centre");
        assert!((hit.distance - 7.5).abs() < 0.05);
    }

    #[test]
    fn test_nearest_torus_wins() {
        let near = Torus::new(
            2.0,
            0.5,
            DAffine3::from_translation(DVec3::new(0.0, 0.0, -3.0)),
            GREEN,
        );
        let far = Torus::new(2.0, 0.5, DAffine3::IDENTITY, RED);
        let ray = Ray::new(DVec3::new(0.0, 0.0, -10.0), DVec3::Z);

        assert_eq!(render_ray(&ray, &[far.clone(), near.clone()]), Some(GREEN));
        assert_eq!(render_ray(&ray, &[near, far]), Some(GREEN));
    }

    #[test]
    fn test_tie_goes_to_first() {
        let a = Torus::new(2.0, 0.5, DAffine3::IDENTITY, RED);
        let b = Torus::new(2.0, 0.5, DAffine3::IDENTITY, GREEN);
        let ray = Ray::new(DVec3::new(0.0, 0.0, -10.0), DVec3::Z);

        assert_eq!(render_ray(&ray, &[a.clone(), b.clone()]), Some(RED));
        assert_eq!(render_ray(&ray, &[b, a]), Some(GREEN));
    }

    #[test]
    fn test_render_pixel_background() {
        let background = Color::new(0.1, 0.2, 0.3);
        assert_eq!(render_pixel(&camera(), &[], 5, 5, background), background);

        let toruses = [facing_torus(RED)];
        assert_eq!(render_pixel(&camera(), &toruses, 32, 32, background), background);
        assert_eq!(render_pixel(&camera(), &toruses, 43, 32, background), RED);
    }
}
