use bevy::camera::visibility::RenderLayers;
use bevy::prelude::*;

use super::config::CameraConfig;
use super::{CameraOrder, OVERLAY_PIXELS_PER_UNIT, RenderLayer};

pub struct CamerasPlugin;

impl Plugin for CamerasPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::BLACK))
            .init_resource::<CameraFocus>()
            .add_systems(Startup, spawn_cameras);
    }
}

/// The camera that renders the 3D scene and that every glide drives.
#[derive(Component)]
pub struct SceneCamera;

/// Orthographic camera for the flying title letters; its projection maps
/// [`OVERLAY_PIXELS_PER_UNIT`] screen pixels to one simulation unit so the
/// letter math stays in world units.
#[derive(Component)]
pub struct OverlayCamera;

/// Current look-at point of the scene camera. Glides interpolate and write
/// it; reset reads it as the start value.
#[derive(Resource, Debug, Default)]
pub struct CameraFocus(pub Vec3);

fn spawn_cameras(mut commands: Commands, config: Res<CameraConfig>) {
    commands.spawn((
        SceneCamera,
        Camera3d::default(),
        Camera {
            order: CameraOrder::Scene.order(),
            ..default()
        },
        Projection::Perspective(PerspectiveProjection {
            fov: config.fov_degrees.to_radians(),
            ..default()
        }),
        Transform::from_translation(config.initial_position).looking_at(Vec3::ZERO, Vec3::Y),
        RenderLayers::from_layers(RenderLayer::Scene.layers()),
    ));

    commands.spawn((
        OverlayCamera,
        Camera2d,
        Camera {
            order: CameraOrder::Overlay.order(),
            clear_color: ClearColorConfig::None,
            ..default()
        },
        Projection::Orthographic(OrthographicProjection {
            scale: 1.0 / OVERLAY_PIXELS_PER_UNIT,
            ..OrthographicProjection::default_2d()
        }),
        RenderLayers::from_layers(RenderLayer::Overlay.layers()),
    ));
}
