use bevy::prelude::*;

/// Ordering buckets for the scene's `Update` systems: input is read before
/// anything moves, and despawns land last so no system sees a half-removed
/// entity within the same frame.
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum SceneSet {
    UserInput,
    EntityUpdates,
    DespawnEntities,
}

pub struct SchedulePlugin;

impl Plugin for SchedulePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                SceneSet::UserInput,
                SceneSet::EntityUpdates,
                SceneSet::DespawnEntities,
            )
                .chain(),
        );
    }
}
