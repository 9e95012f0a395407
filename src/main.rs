//! Spacefolio - a 3D portfolio globe built with Bevy 0.18
//!
//! A typewriter title, an explosive transition, and a little planet of
//! landmarks you can fly to.

mod asset_loader;
mod camera;
mod despawn;
mod game_input;
mod globe;
mod intro;
mod scenery;
mod schedule;
mod state;
mod traits;
mod ui;

use bevy::input::common_conditions::input_toggle_active;
use bevy::prelude::*;
use bevy_inspector_egui::quick::WorldInspectorPlugin;

use crate::asset_loader::AssetLoaderPlugin;
use crate::camera::CameraPlugin;
use crate::despawn::DespawnPlugin;
use crate::game_input::InputPlugin;
use crate::globe::GlobePlugin;
use crate::intro::IntroPlugin;
use crate::scenery::SceneryPlugin;
use crate::schedule::SchedulePlugin;
use crate::state::StatePlugin;
use crate::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "spacefolio".to_string(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(bevy_egui::EguiPlugin::default())
        .add_plugins(WorldInspectorPlugin::new().run_if(input_toggle_active(false, KeyCode::F12)))
        .add_plugins((
            AssetLoaderPlugin,
            CameraPlugin,
            DespawnPlugin,
            GlobePlugin,
            InputPlugin,
            IntroPlugin,
            SceneryPlugin,
            SchedulePlugin,
            StatePlugin,
            UiPlugin,
        ))
        .run();
}
