use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::intro::TypewriterTiming;
use crate::state::AppState;

pub struct AssetLoaderPlugin;

impl Plugin for AssetLoaderPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AssetsState>()
            .init_resource::<SceneAssets>()
            .add_systems(PreStartup, load_assets)
            .add_systems(
                Update,
                check_asset_loading.run_if(in_state(AssetsState::Loading)),
            );
    }
}

#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum AssetsState {
    #[default]
    Loading,
    Loaded,
}

/// Once the gate assets land, the typewriter starts after this short beat
/// instead of its cold-start fallback.
const INITIAL_DELAY_AFTER_LOAD_MS: f32 = 700.0;

/// Every glTF scene the app places. All models are loaded via scenes so
/// multi-mesh assets come in as one unit.
#[derive(Resource, Clone, Debug, Default)]
pub struct SceneAssets {
    // Loading gate: the app stays on the loading screen until these two are in.
    pub globe:       Handle<Scene>,
    pub gate_galaxy: Handle<Scene>,

    // Landmarks.
    pub house:       Handle<Scene>,
    pub briefcase:   Handle<Scene>,
    pub laptop:      Handle<Scene>,
    pub skis:        Handle<Scene>,
    pub camera_prop: Handle<Scene>,
    pub controller:  Handle<Scene>,
    pub skyscraper:  Handle<Scene>,
    pub headphones:  Handle<Scene>,
    pub spotlight:   Handle<Scene>,

    // Decorative scenery.
    pub galaxy:     Handle<Scene>,
    pub galaxy3:    Handle<Scene>,
    pub nebula:     Handle<Scene>,
    pub nebula2:    Handle<Scene>,
    pub planet1:    Handle<Scene>,
    pub planet2:    Handle<Scene>,
    pub planet3:    Handle<Scene>,
    pub planet4:    Handle<Scene>,
    pub moon:       Handle<Scene>,
    pub rocket:     Handle<Scene>,
    pub satellite:  Handle<Scene>,
    pub ufo:        Handle<Scene>,
    pub black_hole: Handle<Scene>,
    pub goose:      Handle<Scene>,
}

pub fn load_assets(mut scene_assets: ResMut<SceneAssets>, asset_server: Res<AssetServer>) {
    *scene_assets = SceneAssets {
        globe:       asset_server.load("models/earth.glb#Scene0"),
        gate_galaxy: asset_server.load("models/galaxy2.glb#Scene0"),

        house:       asset_server.load("models/House.glb#Scene0"),
        briefcase:   asset_server.load("models/Briefcase.glb#Scene0"),
        laptop:      asset_server.load("models/laptop.glb#Scene0"),
        skis:        asset_server.load("models/skis.glb#Scene0"),
        camera_prop: asset_server.load("models/camera.glb#Scene0"),
        controller:  asset_server.load("models/controller.glb#Scene0"),
        skyscraper:  asset_server.load("models/esb.glb#Scene0"),
        headphones:  asset_server.load("models/headphones.glb#Scene0"),
        spotlight:   asset_server.load("models/spotlight.glb#Scene0"),

        galaxy:     asset_server.load("models/galaxy.glb#Scene0"),
        galaxy3:    asset_server.load("models/galaxy3.glb#Scene0"),
        nebula:     asset_server.load("models/nebula.glb#Scene0"),
        nebula2:    asset_server.load("models/nebula2.glb#Scene0"),
        planet1:    asset_server.load("models/planet1.glb#Scene0"),
        planet2:    asset_server.load("models/planet2.glb#Scene0"),
        planet3:    asset_server.load("models/planet3.glb#Scene0"),
        planet4:    asset_server.load("models/planet4.glb#Scene0"),
        moon:       asset_server.load("models/moon.glb#Scene0"),
        rocket:     asset_server.load("models/rocket.glb#Scene0"),
        satellite:  asset_server.load("models/satellite.glb#Scene0"),
        ufo:        asset_server.load("models/ufo.glb#Scene0"),
        black_hole: asset_server.load("models/black_hole.glb#Scene0"),
        goose:      asset_server.load("models/Goose.glb#Scene0"),
    };
}

/// Polls the two gate assets. When both are in, hands the typewriter its
/// post-load start delay and opens the intro. Decorative props are allowed
/// to stream in behind the running scene.
pub fn check_asset_loading(
    mut next_assets: ResMut<NextState<AssetsState>>,
    mut next_app: ResMut<NextState<AppState>>,
    mut timing: ResMut<TypewriterTiming>,
    asset_server: Res<AssetServer>,
    scene_assets: Res<SceneAssets>,
) {
    let gate_loaded = [scene_assets.globe.id(), scene_assets.gate_galaxy.id()]
        .iter()
        .all(|&id| matches!(asset_server.get_load_state(id), Some(LoadState::Loaded)));

    if gate_loaded {
        info!("gate assets loaded, starting intro");
        timing.initial_delay_ms = Some(INITIAL_DELAY_AFTER_LOAD_MS);
        next_assets.set(AssetsState::Loaded);
        next_app.set(AppState::Intro);
    }
}
