//! The intro choreography: typewriter reveal, a short hold, the letter
//! explosion with its delayed camera zoom, then the handoff to the
//! interactive app.

mod explosion;
mod measure;
mod typewriter;

use bevy::prelude::*;

pub use explosion::ASSUMED_FPS;
use explosion::{ignite_letters, in_flight_phase, integrate_flight};
pub use typewriter::{Letter, TypewriterTiming};
use typewriter::{RevealCursor, advance_reveal, spawn_letters};

use crate::camera::{CameraConfig, CameraFocus, CameraGlide, GlideCompletion, SceneCamera};
use crate::schedule::SceneSet;
use crate::state::{AppState, IntroPhase, advance_intro_phase};

/// Hold between the fully typed title and the explosion kicking off.
const EXPLOSION_HOLD_SECS: f32 = 0.2;
/// Wait into the explosion before the camera zoom starts.
const FLIGHT_SECS: f32 = 2.0;
/// How long exploded letters keep drifting after the intro completes.
const LINGER_SECS: f32 = 2.0;

pub struct IntroPlugin;

impl Plugin for IntroPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TypewriterTiming>()
            .init_resource::<RevealCursor>()
            .init_resource::<IntroProgress>()
            .add_systems(OnEnter(AppState::Intro), spawn_letters)
            .add_systems(OnEnter(IntroPhase::Pause), arm_explosion_hold)
            .add_systems(
                OnEnter(IntroPhase::Exploding),
                (ignite_letters, arm_explosion_clocks),
            )
            .add_systems(OnEnter(IntroPhase::Complete), end_intro)
            .add_systems(
                Update,
                (
                    advance_reveal
                        .run_if(in_state(AppState::Intro).and(in_state(IntroPhase::Typing))),
                    tick_explosion_hold.run_if(resource_exists::<ExplosionHold>),
                    start_zoom_after_delay.run_if(resource_exists::<ZoomDelay>),
                    tick_flight_clock.run_if(resource_exists::<FlightClock>),
                    finish_intro.run_if(in_state(IntroPhase::Exploding)),
                    integrate_flight.run_if(in_flight_phase),
                )
                    .in_set(SceneSet::EntityUpdates),
            );
    }
}

/// Both must flip before the phase machine leaves `Exploding`.
#[derive(Resource, Debug, Default)]
pub struct IntroProgress {
    pub explosion_finished:   bool,
    pub camera_zoom_finished: bool,
}

/// Inserted when the intro completes; letters despawn when it runs out.
#[derive(Resource)]
pub struct LetterLinger(pub Timer);

impl Default for LetterLinger {
    fn default() -> Self {
        Self(Timer::from_seconds(LINGER_SECS, TimerMode::Once))
    }
}

#[derive(Resource)]
struct ExplosionHold(Timer);

#[derive(Resource)]
struct ZoomDelay(Timer);

#[derive(Resource)]
struct FlightClock(Timer);

fn arm_explosion_hold(mut commands: Commands) {
    commands.insert_resource(ExplosionHold(Timer::from_seconds(
        EXPLOSION_HOLD_SECS,
        TimerMode::Once,
    )));
}

fn tick_explosion_hold(
    mut commands: Commands,
    time: Res<Time>,
    mut hold: ResMut<ExplosionHold>,
    phase: Res<State<IntroPhase>>,
    mut next_phase: ResMut<NextState<IntroPhase>>,
) {
    if hold.0.tick(time.delta()).just_finished() {
        commands.remove_resource::<ExplosionHold>();
        advance_intro_phase(&phase, &mut next_phase, IntroPhase::Exploding);
    }
}

fn arm_explosion_clocks(mut commands: Commands, config: Res<CameraConfig>) {
    commands.insert_resource(ZoomDelay(Timer::from_seconds(
        config.zoom_delay_secs,
        TimerMode::Once,
    )));
    commands.insert_resource(FlightClock(Timer::from_seconds(FLIGHT_SECS, TimerMode::Once)));
}

/// Once the post-explosion delay runs out, starts the zoom from wherever the
/// camera currently is down to the home framing.
fn start_zoom_after_delay(
    mut commands: Commands,
    time: Res<Time>,
    mut delay: ResMut<ZoomDelay>,
    config: Res<CameraConfig>,
    focus: Res<CameraFocus>,
    camera: Query<(Entity, &Transform), With<SceneCamera>>,
) {
    if !delay.0.tick(time.delta()).just_finished() {
        return;
    }
    commands.remove_resource::<ZoomDelay>();
    let Ok((entity, transform)) = camera.single() else {
        return;
    };
    commands.entity(entity).insert(CameraGlide::new(
        transform.translation,
        focus.0,
        config.home_position,
        config.home_focus,
        config.zoom_duration_secs,
        GlideCompletion::RevealChrome,
    ));
}

fn tick_flight_clock(
    mut commands: Commands,
    time: Res<Time>,
    mut clock: ResMut<FlightClock>,
    mut progress: ResMut<IntroProgress>,
) {
    if clock.0.tick(time.delta()).just_finished() {
        commands.remove_resource::<FlightClock>();
        progress.explosion_finished = true;
    }
}

/// The explosion phase ends only when both the flight clock and the camera
/// zoom have reported in, in whichever order they land.
fn finish_intro(
    progress: Res<IntroProgress>,
    phase: Res<State<IntroPhase>>,
    mut next_phase: ResMut<NextState<IntroPhase>>,
) {
    if progress.explosion_finished && progress.camera_zoom_finished {
        advance_intro_phase(&phase, &mut next_phase, IntroPhase::Complete);
    }
}

fn end_intro(mut commands: Commands, mut next_app_state: ResMut<NextState<AppState>>) {
    next_app_state.set(AppState::Interactive);
    commands.insert_resource(LetterLinger::default());
}
