use bevy::prelude::*;

use crate::schedule::SceneSet;
use crate::state::AppState;
use crate::ui::ResetCamera;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                reset_on_key.run_if(in_state(AppState::Interactive)),
                exit_on_esc,
            )
                .in_set(SceneSet::UserInput),
        );
    }
}

fn reset_on_key(keys: Res<ButtonInput<KeyCode>>, mut reset: MessageWriter<ResetCamera>) {
    if keys.just_pressed(KeyCode::KeyR) {
        reset.write(ResetCamera);
    }
}

fn exit_on_esc(keys: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}
