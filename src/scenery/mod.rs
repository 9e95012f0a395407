//! Everything decorative around the globe: the starfield shell, the rock
//! belt, the glTF deep-space props, and the lights.

mod asteroids;
mod lights;
mod props;
mod stars;

use bevy::prelude::*;

use asteroids::spawn_asteroids;
use lights::spawn_lights;
use props::spawn_props;
use stars::StarsPlugin;

pub struct SceneryPlugin;

impl Plugin for SceneryPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(StarsPlugin)
            .add_systems(Startup, (spawn_lights, spawn_asteroids, spawn_props));
    }
}
