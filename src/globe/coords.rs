//! Pure lat/lon -> sphere math. Free of ECS state so it can be unit-tested
//! directly; both landmark placement and camera fly-to targets go through
//! these functions.

use std::f32::consts::PI;

use bevy::prelude::Vec3;

const DEG_TO_RAD: f32 = PI / 180.0;

/// World position for a latitude/longitude pair on a sphere centred at the
/// origin. `height_offset` is added to the radius along the surface normal,
/// so the result always sits at `radius + height_offset` from the centre.
pub fn position_on_sphere(lat: f32, lon: f32, radius: f32, height_offset: f32) -> Vec3 {
    let phi = (90.0 - lat) * DEG_TO_RAD;
    let theta = (lon + 180.0) * DEG_TO_RAD;
    let r = radius + height_offset;

    Vec3::new(
        r * phi.sin() * theta.cos(),
        r * phi.cos(),
        r * phi.sin() * theta.sin(),
    )
}

/// Euler angles (XYZ order) that stand an object upright on the sphere's
/// surface at the given coordinates: tilt to the surface normal, spin for
/// longitude, no roll.
pub fn surface_orientation(lat: f32, lon: f32) -> Vec3 {
    let phi = (90.0 - lat) * DEG_TO_RAD;
    let theta = (lon + 180.0) * DEG_TO_RAD;

    Vec3::new(-phi + PI / 2.0, theta, 0.0)
}

/// Hermite easing `t^2 (3 - 2t)`: zero velocity at both endpoints. The one
/// easing curve every camera glide uses.
pub fn smoothstep(t: f32) -> f32 { t * t * 2.0f32.mul_add(-t, 3.0) }

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn north_pole_is_straight_up() {
        let p = position_on_sphere(90.0, 0.0, 2.2, 0.0);
        assert!(p.x.abs() < EPS, "x was {}", p.x);
        assert!(p.z.abs() < EPS, "z was {}", p.z);
        assert!((p.y - 2.2).abs() < EPS);
    }

    #[test]
    fn south_pole_is_straight_down() {
        let p = position_on_sphere(-90.0, 0.0, 2.2, 0.0);
        assert!(p.x.abs() < 1e-4);
        assert!(p.z.abs() < 1e-4);
        assert!((p.y + 2.2).abs() < EPS);
    }

    #[test]
    fn equator_prime_meridian() {
        // phi = 90deg, theta = 180deg: x = -r, y = 0, z ~ 0.
        let p = position_on_sphere(0.0, 0.0, 2.2, 0.0);
        assert!((p.x + 2.2).abs() < EPS);
        assert!(p.y.abs() < EPS);
        assert!(p.z.abs() < 1e-4);
    }

    #[test]
    fn height_offset_extends_the_radius() {
        for (lat, lon) in [(12.5, 40.0), (-33.0, 151.0), (51.5, -0.1), (85.8, 130.2)] {
            let p = position_on_sphere(lat, lon, 2.2, 0.35);
            assert!(
                (p.length() - 2.55).abs() < 1e-4,
                "|p| = {} at ({lat}, {lon})",
                p.length()
            );
        }
    }

    #[test]
    fn surface_orientation_at_equator_is_level() {
        let rot = surface_orientation(0.0, 0.0);
        assert!(rot.x.abs() < EPS);
        assert!((rot.y - PI).abs() < EPS);
        assert!(rot.z.abs() < EPS);
    }

    #[test]
    fn smoothstep_endpoints_and_midpoint() {
        assert_eq!(smoothstep(0.0), 0.0);
        assert_eq!(smoothstep(1.0), 1.0);
        assert!((smoothstep(0.5) - 0.5).abs() < EPS);
    }

    #[test]
    fn smoothstep_is_monotonic() {
        let mut last = 0.0;
        for i in 1..=100 {
            let v = smoothstep(i as f32 / 100.0);
            assert!(v > last, "not increasing at step {i}");
            last = v;
        }
    }
}
