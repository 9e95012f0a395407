use bevy::input::common_conditions::input_toggle_active;
use bevy::prelude::*;
use bevy_inspector_egui::inspector_options::std_options::NumberDisplay;
use bevy_inspector_egui::prelude::*;
use bevy_inspector_egui::quick::ResourceInspectorPlugin;

pub struct CameraConfigPlugin;

impl Plugin for CameraConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraConfig>().add_plugins(
            ResourceInspectorPlugin::<CameraConfig>::default()
                .run_if(input_toggle_active(false, KeyCode::F2)),
        );
    }
}

#[derive(Resource, Reflect, InspectorOptions, Debug, PartialEq, Clone, Copy)]
#[reflect(Resource, InspectorOptions)]
pub struct CameraConfig {
    /// Where the camera sits while the title types itself out.
    pub initial_position: Vec3,
    /// Close-up framing the explosion zoom lands on; also the reset target.
    pub home_position:    Vec3,
    pub home_focus:       Vec3,
    #[inspector(min = 20.0, max = 120.0, display = NumberDisplay::Slider)]
    pub fov_degrees:      f32,
    /// Wait after the explosion kicks off before the zoom starts.
    #[inspector(min = 0.0, max = 2.0, display = NumberDisplay::Slider)]
    pub zoom_delay_secs:  f32,
    #[inspector(min = 0.1, max = 5.0, display = NumberDisplay::Slider)]
    pub zoom_duration_secs: f32,
    #[inspector(min = 0.1, max = 5.0, display = NumberDisplay::Slider)]
    pub reset_duration_secs: f32,
    #[inspector(min = 0.1, max = 5.0, display = NumberDisplay::Slider)]
    pub fly_duration_secs: f32,
    /// Radial stand-off from a landmark when flying to it.
    #[inspector(min = 0.5, max = 10.0, display = NumberDisplay::Slider)]
    pub fly_offset:       f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            initial_position:    Vec3::new(0.0, 0.0, 18.0),
            home_position:       Vec3::new(0.0, 0.0, 7.0),
            home_focus:          Vec3::ZERO,
            fov_degrees:         55.0,
            zoom_delay_secs:     0.4,
            zoom_duration_secs:  1.5,
            reset_duration_secs: 1.2,
            fly_duration_secs:   1.2,
            fly_offset:          3.2,
        }
    }
}
