//! A loose belt of rocks around the globe. Placement is rejection-sampled
//! so nothing spawns inside the landmark zone.

use std::f32::consts::TAU;

use bevy::prelude::*;
use rand::{Rng, RngExt};

const ROCK_COUNT: usize = 40;
const BELT_INNER: f32 = 18.0;
const BELT_OUTER: f32 = 78.0;
/// Keep-out sphere around the globe and its landmarks.
const CLEARANCE: f32 = 14.0;
const MAX_TRIES: usize = 400;
const SCALE_MIN: f32 = 0.08;
const SCALE_MAX: f32 = 0.43;

#[derive(Component)]
pub struct Asteroid;

/// Samples a belt position outside the clearance sphere. Returns `None`
/// after too many rejected tries, which only happens with a degenerate
/// config.
pub fn belt_position(rng: &mut impl Rng) -> Option<Vec3> {
    for _ in 0..MAX_TRIES {
        let radius = rng.random_range(BELT_INNER..BELT_OUTER);
        let theta = rng.random_range(0.0..TAU);
        let polar = (2.0f32.mul_add(rng.random::<f32>(), -1.0)).acos();
        let candidate = Vec3::new(
            radius * theta.cos() * polar.sin(),
            radius * polar.cos() * 0.4,
            radius * theta.sin() * polar.sin(),
        );
        if candidate.length() >= CLEARANCE {
            return Some(candidate);
        }
    }
    None
}

pub fn spawn_asteroids(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mesh = meshes.add(
        Sphere::new(1.0)
            .mesh()
            .ico(1)
            .unwrap_or_else(|_| Sphere::new(1.0).mesh().uv(8, 6)),
    );
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.45, 0.43, 0.41),
        perceptual_roughness: 1.0,
        ..default()
    });

    let mut rng = rand::rng();
    for _ in 0..ROCK_COUNT {
        let Some(position) = belt_position(&mut rng) else {
            continue;
        };
        let scale = rng.random_range(SCALE_MIN..SCALE_MAX);
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            rng.random_range(0.0..TAU),
            rng.random_range(0.0..TAU),
            rng.random_range(0.0..TAU),
        );
        commands.spawn((
            Asteroid,
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(position)
                .with_rotation(rotation)
                .with_scale(Vec3::splat(scale)),
        ));
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn belt_positions_clear_the_globe_zone() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..200 {
            let p = belt_position(&mut rng).unwrap();
            assert!(p.length() >= CLEARANCE);
        }
    }

    #[test]
    fn belt_positions_stay_inside_the_outer_radius() {
        let mut rng = StdRng::seed_from_u64(19);
        for _ in 0..200 {
            let p = belt_position(&mut rng).unwrap();
            assert!(p.length() <= BELT_OUTER + 1e-3);
        }
    }
}
