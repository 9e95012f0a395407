//! Eased camera interpolation. One `CameraGlide` component on the scene
//! camera drives position (and look-at) toward a captured target; inserting
//! a new glide simply overwrites the old one, so the most recently started
//! animation always wins.

use bevy::prelude::*;
use bevy::ecs::message::Message;

use super::cameras::{CameraFocus, SceneCamera};
use super::config::CameraConfig;
use crate::globe::{Landmark, NavTarget, Section, landmark_position};
use crate::intro::{ASSUMED_FPS, IntroProgress};
use crate::schedule::SceneSet;
use crate::ui::{Chrome, FlyToSection, OpenSection, ResetCamera};

pub struct GlidePlugin;

impl Plugin for GlidePlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<GlideFinished>().add_systems(
            Update,
            (
                (start_reset_glide, start_fly_to_glide).in_set(SceneSet::UserInput),
                (glide_camera, handle_glide_finished)
                    .chain()
                    .in_set(SceneSet::EntityUpdates),
            ),
        );
    }
}

/// What to do once a glide lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlideCompletion {
    /// Explosion zoom finished: show the header/nav and unblock the intro.
    RevealChrome,
    /// Fly-to finished: open this section's modal.
    OpenSection(Section),
    /// Reset has no follow-up.
    None,
}

#[derive(Message)]
pub struct GlideFinished {
    pub completion: GlideCompletion,
}

/// In-flight interpolation. Progress is counted in rendered frames against
/// an assumed 60 fps, not wall-clock time; the divergence under other frame
/// rates is a deliberate property of the choreography.
#[derive(Component)]
pub struct CameraGlide {
    start_translation: Vec3,
    end_translation:   Vec3,
    start_focus:       Vec3,
    end_focus:         Vec3,
    frames_elapsed:    u32,
    total_frames:      u32,
    completion:        GlideCompletion,
}

impl CameraGlide {
    pub fn new(
        start_translation: Vec3,
        start_focus: Vec3,
        end_translation: Vec3,
        end_focus: Vec3,
        duration_secs: f32,
        completion: GlideCompletion,
    ) -> Self {
        Self {
            start_translation,
            end_translation,
            start_focus,
            end_focus,
            frames_elapsed: 0,
            total_frames: (duration_secs * ASSUMED_FPS).round().max(1.0) as u32,
            completion,
        }
    }
}

/// Linear progress for a frame count, clamped to 1.
fn glide_alpha_linear(frames_elapsed: u32, total_frames: u32) -> f32 {
    (frames_elapsed as f32 / total_frames.max(1) as f32).min(1.0)
}

/// Advances the active glide one frame: smoothstep-eased lerp of translation
/// and focus, then re-aim. Removes the component and reports completion when
/// linear progress reaches 1.
fn glide_camera(
    mut commands: Commands,
    mut finished: MessageWriter<GlideFinished>,
    mut focus: ResMut<CameraFocus>,
    mut camera: Single<(Entity, &mut Transform, &mut CameraGlide), With<SceneCamera>>,
) {
    let (entity, ref mut transform, ref mut glide) = *camera;

    glide.frames_elapsed += 1;
    let linear = glide_alpha_linear(glide.frames_elapsed, glide.total_frames);
    let alpha = crate::globe::coords::smoothstep(linear);

    let translation = glide.start_translation.lerp(glide.end_translation, alpha);
    let aim = glide.start_focus.lerp(glide.end_focus, alpha);
    **transform = Transform::from_translation(translation).looking_at(aim, Vec3::Y);
    focus.0 = aim;

    if linear >= 1.0 {
        commands.entity(entity).remove::<CameraGlide>();
        finished.write(GlideFinished {
            completion: glide.completion,
        });
    }
}

fn handle_glide_finished(
    mut finished: MessageReader<GlideFinished>,
    mut chrome: ResMut<Chrome>,
    mut progress: ResMut<IntroProgress>,
    mut open: MessageWriter<OpenSection>,
) {
    for message in finished.read() {
        match message.completion {
            GlideCompletion::RevealChrome => {
                chrome.visible = true;
                progress.camera_zoom_finished = true;
            },
            GlideCompletion::OpenSection(section) => {
                open.write(OpenSection(section));
            },
            GlideCompletion::None => {},
        }
    }
}

/// Glides position and look-at back to the home framing. With no scene
/// camera around this is a silent no-op.
fn start_reset_glide(
    mut commands: Commands,
    mut requests: MessageReader<ResetCamera>,
    config: Res<CameraConfig>,
    focus: Res<CameraFocus>,
    camera: Query<(Entity, &Transform), With<SceneCamera>>,
) {
    if requests.read().next().is_none() {
        return;
    }
    let Ok((entity, transform)) = camera.single() else {
        return;
    };
    commands.entity(entity).insert(CameraGlide::new(
        transform.translation,
        focus.0,
        config.home_position,
        config.home_focus,
        config.reset_duration_secs,
        GlideCompletion::None,
    ));
}

/// Flies to the requested section's landmark, standing off radially by the
/// configured distance, and opens the modal on arrival. Sections without a
/// fly-to target (or a missing camera) open the modal immediately instead.
fn start_fly_to_glide(
    mut commands: Commands,
    mut requests: MessageReader<FlyToSection>,
    mut open: MessageWriter<OpenSection>,
    config: Res<CameraConfig>,
    focus: Res<CameraFocus>,
    landmarks: Query<(&Landmark, &Transform), With<NavTarget>>,
    camera: Query<(Entity, &Transform), With<SceneCamera>>,
) {
    for FlyToSection(section) in requests.read().copied() {
        let target = landmark_position(section, &landmarks);
        let camera = camera.single();

        let (Some(target), Ok((entity, transform))) = (target, camera) else {
            open.write(OpenSection(section));
            continue;
        };

        let outward = target.try_normalize().unwrap_or(Vec3::Z);
        let end = target + outward * config.fly_offset;
        commands.entity(entity).insert(CameraGlide::new(
            transform.translation,
            focus.0,
            end,
            config.home_focus,
            config.fly_duration_secs,
            GlideCompletion::OpenSection(section),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::globe::coords::smoothstep;

    #[test]
    fn glide_starts_at_start_and_ends_at_end() {
        let total = (1.5 * ASSUMED_FPS) as u32;
        assert_eq!(glide_alpha_linear(0, total), 0.0);
        assert_eq!(glide_alpha_linear(total, total), 1.0);
        // Overshooting frames stay clamped.
        assert_eq!(glide_alpha_linear(total + 30, total), 1.0);
    }

    #[test]
    fn eased_progress_is_strictly_increasing() {
        let total = (1.2 * ASSUMED_FPS) as u32;
        let mut last = -1.0;
        for frame in 0..=total {
            let alpha = smoothstep(glide_alpha_linear(frame, total));
            assert!(alpha > last, "alpha regressed at frame {frame}");
            last = alpha;
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn interpolated_value_hits_both_endpoints() {
        let start = Vec3::new(0.0, 0.0, 18.0);
        let end = Vec3::new(0.0, 0.0, 7.0);
        let total = (1.5 * ASSUMED_FPS) as u32;

        let at = |frame| start.lerp(end, smoothstep(glide_alpha_linear(frame, total)));
        assert_eq!(at(0), start);
        assert_eq!(at(total), end);
    }

    #[test]
    fn degenerate_duration_finishes_on_first_frame() {
        let glide = CameraGlide::new(
            Vec3::ZERO,
            Vec3::ZERO,
            Vec3::ONE,
            Vec3::ZERO,
            0.0,
            GlideCompletion::None,
        );
        assert_eq!(glide.total_frames, 1);
        assert_eq!(glide_alpha_linear(1, glide.total_frames), 1.0);
    }

    #[test]
    fn fly_to_without_target_opens_the_modal_immediately() {
        use bevy::ecs::message::Messages;

        let mut app = App::new();
        app.add_message::<FlyToSection>()
            .add_message::<OpenSection>()
            .add_message::<GlideFinished>()
            .init_resource::<CameraFocus>()
            .init_resource::<CameraConfig>()
            .add_systems(Update, start_fly_to_glide);

        // A camera and a hobby landmark both exist, but the landmark is not
        // a nav target, so Hobbies has nothing to fly to.
        app.world_mut()
            .spawn((SceneCamera, Transform::from_xyz(0.0, 0.0, 18.0)));
        app.world_mut().spawn((
            Landmark {
                section: Section::Hobbies,
            },
            Transform::from_xyz(0.0, 2.2, 0.0),
        ));

        app.world_mut()
            .resource_mut::<Messages<FlyToSection>>()
            .write(FlyToSection(Section::Hobbies));
        app.update();

        let opened: Vec<Section> = app
            .world_mut()
            .resource_mut::<Messages<OpenSection>>()
            .drain()
            .map(|OpenSection(section)| section)
            .collect();
        assert_eq!(opened, vec![Section::Hobbies]);

        let mut glides = app.world_mut().query::<&CameraGlide>();
        assert_eq!(glides.iter(app.world()).count(), 0);
    }

    #[test]
    fn finished_glide_removes_itself_and_stops_moving_the_camera() {
        let mut app = App::new();
        app.add_message::<GlideFinished>()
            .init_resource::<CameraFocus>()
            .add_systems(Update, glide_camera);

        let start = Vec3::new(0.0, 0.0, 18.0);
        let end = Vec3::new(0.0, 0.0, 7.0);
        let camera = app
            .world_mut()
            .spawn((
                SceneCamera,
                Transform::from_translation(start),
                CameraGlide::new(
                    start,
                    Vec3::ZERO,
                    end,
                    Vec3::ZERO,
                    2.0 / ASSUMED_FPS,
                    GlideCompletion::None,
                ),
            ))
            .id();

        for _ in 0..4 {
            app.update();
        }

        assert!(app.world().get::<CameraGlide>(camera).is_none());
        let landed = app.world().get::<Transform>(camera).unwrap().translation;
        assert!((landed - end).length() < 1e-4, "landed at {landed}");

        // Extra frames leave the camera where the glide dropped it.
        app.update();
        let after = app.world().get::<Transform>(camera).unwrap().translation;
        assert_eq!(after, landed);
    }
}
