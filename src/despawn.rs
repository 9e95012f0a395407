use bevy::prelude::*;

use crate::intro::{Letter, LetterLinger};
use crate::schedule::SceneSet;

pub struct DespawnPlugin;

impl Plugin for DespawnPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            unmount_letters
                .run_if(resource_exists::<LetterLinger>)
                .in_set(SceneSet::DespawnEntities),
        );
    }
}

/// Uses `try_despawn` because an entity can be queued for despawn more than
/// once in a frame.
pub fn despawn(commands: &mut Commands, entity: Entity) { commands.entity(entity).try_despawn(); }

/// Lets the exploded letters drift for the linger window, then removes them
/// all at once along with the timer.
fn unmount_letters(
    mut commands: Commands,
    time: Res<Time>,
    mut linger: ResMut<LetterLinger>,
    letters: Query<Entity, With<Letter>>,
) {
    if !linger.0.tick(time.delta()).just_finished() {
        return;
    }
    debug!("intro letters despawned");
    for entity in letters.iter() {
        despawn(&mut commands, entity);
    }
    commands.remove_resource::<LetterLinger>();
}
