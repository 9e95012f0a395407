//! Letter flight during the explosion. Integration runs on a fixed
//! per-frame step rather than wall-clock delta so the scatter reads the
//! same on every machine.

use bevy::prelude::*;
use rand::{Rng, RngExt};

use super::typewriter::Letter;
use crate::state::IntroPhase;

pub const ASSUMED_FPS: f32 = 60.0;
pub const SIM_STEP: f32 = 1.0 / ASSUMED_FPS;

const SPEED_MIN: f32 = 0.8;
const SPEED_MAX: f32 = 2.3;
const ANGULAR_LIMIT: f32 = 0.03;

/// Per-letter flight state. `rotation` accumulates in Euler angles, one
/// angular step per rendered frame.
#[derive(Component, Debug)]
pub struct Flight {
    pub velocity:         Vec3,
    pub angular_velocity: Vec3,
    pub rotation:         Vec3,
}

/// Normalizes `v`, falling back to +X for degenerate samples.
pub fn unit_direction(v: Vec3) -> Vec3 {
    v.try_normalize().unwrap_or(Vec3::X)
}

/// Draws a random outward flight: uniform direction from a centered cube,
/// speed and per-axis tumble from fixed ranges.
pub fn sample_flight(rng: &mut impl Rng) -> Flight {
    let direction = unit_direction(Vec3::new(
        rng.random::<f32>() - 0.5,
        rng.random::<f32>() - 0.5,
        rng.random::<f32>() - 0.5,
    ));
    let speed = rng.random_range(SPEED_MIN..SPEED_MAX);
    let angular_velocity = Vec3::new(
        rng.random_range(-ANGULAR_LIMIT..ANGULAR_LIMIT),
        rng.random_range(-ANGULAR_LIMIT..ANGULAR_LIMIT),
        rng.random_range(-ANGULAR_LIMIT..ANGULAR_LIMIT),
    );
    Flight {
        velocity: direction * speed,
        angular_velocity,
        rotation: Vec3::ZERO,
    }
}

/// Gives every letter its flight vector. The `Without<Flight>` filter makes
/// re-entry harmless; letters already in flight keep their vectors.
pub fn ignite_letters(
    mut commands: Commands,
    letters: Query<Entity, (With<Letter>, Without<Flight>)>,
) {
    let mut rng = rand::rng();
    let mut count = 0;
    for entity in &letters {
        commands.entity(entity).insert(sample_flight(&mut rng));
        count += 1;
    }
    debug!("ignited {count} letters");
}

/// One fixed step per rendered frame: position by `SIM_STEP`, tumble by raw
/// angular velocity. Keeps running through `Complete` so letters drift off
/// screen during the linger.
pub fn integrate_flight(mut letters: Query<(&mut Flight, &mut Transform), With<Letter>>) {
    for (mut flight, mut transform) in &mut letters {
        transform.translation += flight.velocity * SIM_STEP;
        let step = flight.angular_velocity;
        flight.rotation += step;
        transform.rotation =
            Quat::from_euler(EulerRot::XYZ, flight.rotation.x, flight.rotation.y, flight.rotation.z);
    }
}

pub fn in_flight_phase(phase: Res<State<IntroPhase>>) -> bool {
    matches!(phase.get(), IntroPhase::Exploding | IntroPhase::Complete)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn sampled_speed_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let flight = sample_flight(&mut rng);
            let speed = flight.velocity.length();
            assert!(
                speed > SPEED_MIN - 1e-3 && speed < SPEED_MAX + 1e-3,
                "speed {speed}"
            );
        }
    }

    #[test]
    fn sampled_tumble_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let flight = sample_flight(&mut rng);
            for component in flight.angular_velocity.to_array() {
                assert!((-ANGULAR_LIMIT..ANGULAR_LIMIT).contains(&component));
            }
        }
    }

    #[test]
    fn sampled_directions_are_unit_length() {
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..200 {
            let flight = sample_flight(&mut rng);
            let speed = flight.velocity.length();
            let direction = flight.velocity / speed;
            assert!((direction.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn degenerate_direction_falls_back_to_x() {
        assert_eq!(unit_direction(Vec3::ZERO), Vec3::X);
        assert_eq!(unit_direction(Vec3::splat(1e-30)), Vec3::X);
    }

    #[test]
    fn fixed_step_is_frame_rate_independent_of_delta() {
        // Two seconds of assumed frames moves a letter by exactly
        // velocity * 2, regardless of real elapsed time.
        let velocity = Vec3::new(1.5, -0.3, 0.7);
        let mut translation = Vec3::ZERO;
        for _ in 0..(ASSUMED_FPS as usize * 2) {
            translation += velocity * SIM_STEP;
        }
        assert!((translation - velocity * 2.0).length() < 1e-4);
    }
}
