//! Background starfield: emissive spheres scattered on a spherical shell,
//! slowly rotating around the vertical axis.

use std::f32::consts::TAU;

use bevy::prelude::*;
use bevy_inspector_egui::inspector_options::std_options::NumberDisplay;
use bevy_inspector_egui::prelude::*;
use bevy_inspector_egui::quick::ResourceInspectorPlugin;
use rand::{Rng, RngExt};

use crate::schedule::SceneSet;

pub struct StarsPlugin;

impl Plugin for StarsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<StarConfig>()
            .init_resource::<StarSpin>()
            .add_plugins(
                ResourceInspectorPlugin::<StarConfig>::default()
                    .run_if(bevy::input::common_conditions::input_toggle_active(
                        false,
                        KeyCode::F3,
                    )),
            )
            .add_systems(Startup, spawn_stars)
            .add_systems(Update, rotate_stars.in_set(SceneSet::EntityUpdates));
    }
}

#[derive(Resource, Reflect, InspectorOptions, Debug, PartialEq, Clone, Copy)]
#[reflect(Resource, InspectorOptions)]
pub struct StarConfig {
    pub star_count:             usize,
    /// Shell the stars live on, well outside every decorative prop.
    pub shell_inner_radius:     f32,
    pub shell_outer_radius:     f32,
    #[inspector(min = 0.01, max = 0.5, display = NumberDisplay::Slider)]
    pub star_radius_min:        f32,
    #[inspector(min = 0.01, max = 0.5, display = NumberDisplay::Slider)]
    pub star_radius_max:        f32,
    /// Emissive channel range sampled per star.
    pub color_start:            f32,
    pub color_end:              f32,
    /// Chance a star samples from the brighter white band instead.
    #[inspector(min = 0.0, max = 1.0, display = NumberDisplay::Slider)]
    pub white_probability:      f32,
    #[inspector(min = 0.0, max = 1.0, display = NumberDisplay::Slider)]
    pub white_start_ratio:      f32,
    /// Full revolutions take this long. Values under a second disable it.
    pub rotation_cycle_minutes: f32,
    pub rotation_axis:          Vec3,
}

impl Default for StarConfig {
    fn default() -> Self {
        Self {
            star_count:             2200,
            shell_inner_radius:     80.0,
            shell_outer_radius:     140.0,
            star_radius_min:        0.04,
            star_radius_max:        0.16,
            color_start:            0.2,
            color_end:              4.0,
            white_probability:      0.85,
            white_start_ratio:      0.7,
            rotation_cycle_minutes: 18.0,
            rotation_axis:          Vec3::Y,
        }
    }
}

/// Original shell placement, kept so the spin can be re-applied to a fixed
/// point instead of accumulating error into the transform.
#[derive(Reflect, Component, Default)]
pub struct Star {
    position: Vec3,
}

/// Accumulated shell rotation. Starts at identity.
#[derive(Resource, Default)]
struct StarSpin {
    accumulated: Quat,
}

/// Spawn stars with all components at once to avoid archetype changes after
/// spawn.
fn spawn_stars(
    mut commands: Commands,
    config: Res<StarConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    debug!("spawning {} stars", config.star_count);
    let mesh = meshes.add(Sphere::new(1.));
    let mut rng = rand::rng();

    for _ in 0..config.star_count {
        let position = shell_position(config.shell_inner_radius, config.shell_outer_radius, &mut rng);
        let radius = rng.random_range(config.star_radius_min..config.star_radius_max);
        let emissive = star_color(&config, &mut rng);

        let material = materials.add(StandardMaterial {
            emissive: LinearRgba::new(emissive.x, emissive.y, emissive.z, emissive.w),
            ..default()
        });

        commands.spawn((
            Star { position },
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material),
            Transform::from_translation(position).with_scale(Vec3::splat(radius)),
        ));
    }
}

/// Uniform random point on a spherical shell via spherical coordinates.
fn shell_position(inner_radius: f32, outer_radius: f32, rng: &mut impl Rng) -> Vec3 {
    let azimuth_norm: f32 = rng.random_range(0.0..1.0);
    let polar_norm: f32 = rng.random_range(0.0..1.0);

    let theta = azimuth_norm * TAU;
    let phi = 2.0f32.mul_add(polar_norm, -1.0).acos();
    let radius = rng.random_range(inner_radius..outer_radius);

    Vec3::new(
        radius * theta.cos() * phi.sin(),
        radius * theta.sin() * phi.sin(),
        radius * phi.cos(),
    )
}

fn star_color(config: &StarConfig, rng: &mut impl Rng) -> Vec4 {
    let end = config.color_end;
    let start = if rng.random::<f32>() < config.white_probability {
        end * config.white_start_ratio
    } else {
        config.color_start
    };

    // Channels sample from 20% above the band floor so no star reads black.
    let floor = (end - start).mul_add(0.2, start);
    Vec4::new(
        rng.random_range(floor..end),
        rng.random_range(floor..end),
        rng.random_range(floor..end),
        rng.random_range(start..end),
    )
}

/// Rotation applied during this frame, or `None` while the configured cycle
/// is too short to be meaningful (under one second).
fn spin_step(config: &StarConfig, delta_secs: f32) -> Option<Quat> {
    let cycle_secs = config.rotation_cycle_minutes * 60.0;
    if cycle_secs < 1.0 {
        return None;
    }
    // Negative for clockwise motion when viewed from above.
    Some(Quat::from_axis_angle(
        config.rotation_axis,
        -TAU * delta_secs / cycle_secs,
    ))
}

fn rotate_stars(
    time: Res<Time>,
    config: Res<StarConfig>,
    mut spin: ResMut<StarSpin>,
    mut stars: Query<(&Star, &mut Transform)>,
) {
    let Some(step) = spin_step(&config, time.delta_secs()) else {
        return;
    };
    spin.accumulated = step * spin.accumulated;

    for (star, mut transform) in &mut stars {
        transform.translation = spin.accumulated * star.position;
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn shell_positions_stay_between_the_radii() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let p = shell_position(80.0, 140.0, &mut rng);
            let r = p.length();
            assert!((80.0..140.0).contains(&r), "radius {r}");
        }
    }

    #[test]
    fn spin_composes_back_to_identity_over_a_full_cycle() {
        let config = StarConfig {
            rotation_cycle_minutes: 1.0,
            ..StarConfig::default()
        };
        // Four quarter-cycle steps add up to one full revolution.
        let step = spin_step(&config, 15.0).unwrap();
        let full = step * step * step * step;
        assert!(full.angle_between(Quat::IDENTITY) < 1e-3);
    }

    #[test]
    fn sub_second_cycles_disable_the_spin() {
        let config = StarConfig {
            rotation_cycle_minutes: 0.01,
            ..StarConfig::default()
        };
        assert!(spin_step(&config, 0.016).is_none());
    }

    #[test]
    fn spin_keeps_stars_on_their_shell() {
        let config = StarConfig::default();
        let step = spin_step(&config, 0.016).unwrap();
        let position = Vec3::new(90.0, 30.0, -40.0);
        assert!(((step * position).length() - position.length()).abs() < 1e-3);
    }

    #[test]
    fn star_colors_meet_the_brightness_floor() {
        let config = StarConfig::default();
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..500 {
            let c = star_color(&config, &mut rng);
            let floor = (config.color_end - config.color_start).mul_add(0.2, config.color_start);
            assert!(c.x.max(c.y).max(c.z) >= floor - 1e-4);
        }
    }
}
