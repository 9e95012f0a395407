use bevy::dev_tools::states::*;
use bevy::prelude::*;

pub struct StatePlugin;

impl Plugin for StatePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .init_state::<IntroPhase>()
            .add_systems(
                Update,
                (log_transitions::<AppState>, log_transitions::<IntroPhase>),
            );
    }
}

/// Coarse application state. `Loading` holds until the two gate assets
/// (globe + gate galaxy) are ready; the intro host moves to `Interactive`
/// once the title choreography completes.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Reflect, States)]
pub enum AppState {
    #[default]
    Loading,
    Intro,
    Interactive,
}

/// Stage of the title choreography. Strictly forward-only: each transition
/// happens exactly once per run, in declaration order.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Reflect, States)]
pub enum IntroPhase {
    #[default]
    Typing,
    Pause,
    Exploding,
    Complete,
}

impl IntroPhase {
    /// The only phase this one may advance to. `Complete` is terminal.
    pub const fn successor(self) -> Option<Self> {
        match self {
            Self::Typing => Some(Self::Pause),
            Self::Pause => Some(Self::Exploding),
            Self::Exploding => Some(Self::Complete),
            Self::Complete => None,
        }
    }
}

/// Requests `target` only when it is the immediate successor of the current
/// phase. Anything else would be a skipped or backward transition, which the
/// choreography never performs; such requests are dropped with a warning.
pub fn advance_intro_phase(
    current: &State<IntroPhase>,
    next: &mut NextState<IntroPhase>,
    target: IntroPhase,
) {
    if current.get().successor() == Some(target) {
        next.set(target);
    } else {
        warn!(
            "ignoring intro phase request {:?} -> {:?}",
            current.get(),
            target
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_advance_in_fixed_order() {
        let mut phase = IntroPhase::Typing;
        let mut visited = vec![phase];
        while let Some(next) = phase.successor() {
            phase = next;
            visited.push(phase);
        }
        assert_eq!(
            visited,
            vec![
                IntroPhase::Typing,
                IntroPhase::Pause,
                IntroPhase::Exploding,
                IntroPhase::Complete,
            ]
        );
    }

    #[test]
    fn complete_is_terminal() {
        assert_eq!(IntroPhase::Complete.successor(), None);
    }

    #[test]
    fn no_phase_skips_ahead() {
        assert_ne!(IntroPhase::Typing.successor(), Some(IntroPhase::Exploding));
        assert_ne!(IntroPhase::Pause.successor(), Some(IntroPhase::Complete));
    }
}
