//! Decorative deep-space props, placed from a fixed table. They stream in
//! behind the running scene; only the loading gate waits on assets.

use std::f32::consts::PI;

use bevy::prelude::*;

use crate::asset_loader::SceneAssets;
use crate::traits::TransformExt;

struct PropSpec {
    handle:   fn(&SceneAssets) -> Handle<Scene>,
    position: Vec3,
    rotation: Vec3,
    scale:    f32,
}

const fn prop(
    handle: fn(&SceneAssets) -> Handle<Scene>,
    position: Vec3,
    rotation: Vec3,
    scale: f32,
) -> PropSpec {
    PropSpec {
        handle,
        position,
        rotation,
        scale,
    }
}

#[rustfmt::skip]
fn prop_table() -> Vec<PropSpec> {
    vec![
        prop(|a| a.galaxy.clone(),      Vec3::new(-60.0, 20.0, -90.0),     Vec3::new(12.0, 0.2 * PI, 0.0),          5.0),
        prop(|a| a.gate_galaxy.clone(), Vec3::new(36.0, -12.0, 80.0),      Vec3::new(0.5 * PI, 0.5 * PI, 0.18 * PI), 0.5),
        prop(|a| a.galaxy3.clone(),     Vec3::new(190.0, 80.0, -30.0),     Vec3::new(10.0, 0.2 * PI, 15.0),         0.05),
        prop(|a| a.nebula.clone(),      Vec3::new(-190.0, -100.0, 120.0),  Vec3::ZERO,                              1.0),
        prop(|a| a.nebula2.clone(),     Vec3::new(-190.0, 400.0, 520.0),   Vec3::new(0.3 * PI, 0.2 * PI, 0.3 * PI), 30.0),
        prop(|a| a.planet1.clone(),     Vec3::new(60.0, -10.0, -130.0),    Vec3::ZERO,                              1.5),
        prop(|a| a.planet2.clone(),     Vec3::new(-60.0, -10.0, 150.0),    Vec3::ZERO,                              1.2),
        prop(|a| a.planet3.clone(),     Vec3::new(150.0, -50.0, 20.0),     Vec3::ZERO,                              1.2),
        prop(|a| a.planet4.clone(),     Vec3::new(-160.0, 15.0, 20.0),     Vec3::ZERO,                              0.1),
        prop(|a| a.moon.clone(),        Vec3::new(50.0, 10.0, 40.0),       Vec3::ZERO,                              0.03),
        prop(|a| a.rocket.clone(),      Vec3::new(-40.0, 50.0, 40.0),      Vec3::new(12.0, 1.2 * PI, 0.0),          0.08),
        prop(|a| a.satellite.clone(),   Vec3::new(60.0, 80.0, -75.0),      Vec3::ZERO,                              0.2),
        prop(|a| a.ufo.clone(),         Vec3::new(5.0, -30.0, -80.0),      Vec3::ZERO,                              0.01),
        prop(|a| a.black_hole.clone(),  Vec3::new(0.0, -70.0, 0.0),        Vec3::ZERO,                              2.5),
        prop(|a| a.goose.clone(),       Vec3::new(8.5, 4.2, 12.5),         Vec3::new(0.18 * PI, 0.7 * PI, -0.12 * PI), 0.01),
    ]
}

pub fn spawn_props(mut commands: Commands, assets: Res<SceneAssets>) {
    for spec in prop_table() {
        let rotation =
            Quat::from_euler(EulerRot::XYZ, spec.rotation.x, spec.rotation.y, spec.rotation.z);
        commands.spawn((
            SceneRoot((spec.handle)(&assets)),
            Transform::from_trs(spec.position, rotation, Vec3::splat(spec.scale)),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_prop_sits_outside_the_globe() {
        for spec in prop_table() {
            assert!(spec.position.length() > crate::globe::GLOBE_RADIUS);
        }
    }

    #[test]
    fn prop_scales_are_positive() {
        assert!(prop_table().iter().all(|spec| spec.scale > 0.0));
    }
}
