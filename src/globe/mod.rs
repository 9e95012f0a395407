pub mod coords;
mod landmark;

use bevy::prelude::*;

pub use landmark::{ACCENT, GLOBE_RADIUS, Landmark, NavTarget, Section, landmark_position};
use landmark::{restyle_highlighted_rings, spawn_landmarks};

use crate::asset_loader::SceneAssets;
use crate::schedule::SceneSet;
use crate::traits::TransformExt;

pub struct GlobePlugin;

impl Plugin for GlobePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_globe, spawn_landmarks))
            .add_systems(
                Update,
                restyle_highlighted_rings.in_set(SceneSet::EntityUpdates),
            );
    }
}

/// The globe model's visual centre sits below the origin; landmarks orbit
/// the origin itself, so the two are placed independently.
const GLOBE_MODEL_OFFSET: Vec3 = Vec3::new(0.0, -2.7, 0.0);

fn spawn_globe(mut commands: Commands, assets: Res<SceneAssets>) {
    commands.spawn((
        SceneRoot(assets.globe.clone()),
        Transform::from_trs(GLOBE_MODEL_OFFSET, Quat::IDENTITY, Vec3::splat(GLOBE_RADIUS)),
    ));
}
