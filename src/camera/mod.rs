mod cameras;
mod config;
mod glide;

use bevy::camera::visibility::Layer;
use bevy::prelude::*;

pub use cameras::{CameraFocus, OverlayCamera, SceneCamera};
use cameras::CamerasPlugin;
pub use config::CameraConfig;
use config::CameraConfigPlugin;
pub use glide::{CameraGlide, GlideCompletion};
use glide::GlidePlugin;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(CameraConfigPlugin)
            .add_plugins(CamerasPlugin)
            .add_plugins(GlidePlugin);
    }
}

/// Screen pixels per simulation unit on the letter overlay.
pub const OVERLAY_PIXELS_PER_UNIT: f32 = 60.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraOrder {
    Scene,
    Overlay,
}

impl CameraOrder {
    pub const fn order(self) -> isize {
        match self {
            Self::Scene => 0,
            Self::Overlay => 1,
        }
    }
}

/// Scene camera renders layer 0, the letter overlay renders layer 1.
#[derive(Reflect, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderLayer {
    Scene,
    Overlay,
}

impl RenderLayer {
    pub const fn layers(self) -> &'static [Layer] {
        match self {
            Self::Scene => &[0],
            Self::Overlay => &[1],
        }
    }
}
