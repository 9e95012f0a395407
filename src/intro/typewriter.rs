//! The letter sequencer: reveals the two title lines one character at a
//! time with naturalistic pacing, then hands the phase machine its first
//! transition after a fixed hold.

use bevy::camera::visibility::RenderLayers;
use bevy::prelude::*;
use rand::RngExt;

use super::measure;
use crate::camera::{OVERLAY_PIXELS_PER_UNIT, RenderLayer};
use crate::globe::ACCENT;
use crate::state::{IntroPhase, advance_intro_phase};

pub const GREETING_PREFIX: &str = "Hi, I'm ";
pub const NAME: &str = "Dominic";
pub const WELCOME: &str = "Welcome to my World.";

/// Index of the first letter after the name; it gets its own long beat.
const POST_NAME_INDEX: usize = 15;
/// Used for the very first letter when the loading gate never reported in.
const FALLBACK_INITIAL_DELAY_MS: f32 = 2200.0;
/// Hold between the last letter and the phase machine leaving `Typing`.
const COMPLETION_HOLD_SECS: f32 = 1.0;

/// Vertical half-gap between the two lines, in simulation units.
const LINE_SPACING: f32 = 3.2;
/// Depth the letters start at, in front of the globe.
const LETTER_DEPTH: f32 = 2.0;
/// Title font sizes in simulation units.
const FONT_SIZE_TOP: f32 = 1.2;
const FONT_SIZE_BOTTOM: f32 = 1.1;
/// Lines wider than this fraction of the viewport are scaled down to fit.
const MAX_VIEWPORT_FRACTION: f32 = 0.9;

/// One-shot handoff from the asset loading gate: set once when the gate
/// assets finish, read once when the first letter is scheduled.
#[derive(Resource, Debug, Default)]
pub struct TypewriterTiming {
    pub initial_delay_ms: Option<f32>,
}

/// One character of the title, addressed by its reveal index. The glyph
/// lives in the `Text2d`, the kerned position in the transform; the cursor's
/// script owns everything else about pacing.
#[derive(Component)]
pub struct Letter {
    pub index: usize,
}

/// Reveal state: the next index to show and the delay running down to it.
/// Letters only ever flip hidden -> visible, strictly in index order.
#[derive(Resource, Default)]
pub struct RevealCursor {
    pub next:   usize,
    pub total:  usize,
    script:     Vec<char>,
    timer:      Timer,
    hold:       Option<Timer>,
}

/// Delay in milliseconds before revealing the letter at `index`.
/// `jitter` is a uniform sample from [0, 1) feeding the default case.
pub fn reveal_delay_ms(
    index: usize,
    glyph: char,
    initial_delay_ms: Option<f32>,
    jitter: f32,
) -> f32 {
    if index == 0 {
        return initial_delay_ms.unwrap_or(FALLBACK_INITIAL_DELAY_MS);
    }
    if index == 3 {
        // Beat after "Hi,".
        return 500.0;
    }
    if index == POST_NAME_INDEX {
        return 1200.0;
    }
    if glyph == ' ' {
        return 120.0;
    }
    if glyph == ',' || glyph == '.' {
        return 250.0;
    }
    35.0f32.mul_add(jitter, 50.0)
}

/// Builds every letter of both lines once measurements are available, and
/// arms the cursor with the first delay. Runs once, on entering the intro.
pub fn spawn_letters(
    mut commands: Commands,
    mut cursor: ResMut<RevealCursor>,
    timing: Res<TypewriterTiming>,
    windows: Query<&Window>,
) {
    let greeting = format!("{GREETING_PREFIX}{NAME}");
    let (top_centers, top_width) = measure::line_layout(&greeting, FONT_SIZE_TOP);
    let (bottom_centers, bottom_width) = measure::line_layout(WELCOME, FONT_SIZE_BOTTOM);
    if top_centers.is_empty() || bottom_centers.is_empty() {
        return;
    }

    // Scale both lines down together if the wider one would overflow.
    let viewport_units = windows
        .single()
        .map_or(32.0, |window| window.width() / OVERLAY_PIXELS_PER_UNIT);
    let max_allowed = viewport_units * MAX_VIEWPORT_FRACTION;
    let fit = (max_allowed / top_width.max(bottom_width).max(f32::EPSILON)).min(1.0);
    let line_spacing = LINE_SPACING * fit;

    let mut script: Vec<char> = Vec::with_capacity(greeting.len() + WELCOME.len());

    // The name on the top line takes the accent color; everything else is
    // plain white.
    let accent_range = GREETING_PREFIX.len()..POST_NAME_INDEX;

    for (text, centers, font_size, y, accented) in [
        (greeting.as_str(), &top_centers, FONT_SIZE_TOP, line_spacing, true),
        (WELCOME, &bottom_centers, FONT_SIZE_BOTTOM, -line_spacing, false),
    ] {
        for (i, glyph) in text.chars().enumerate() {
            let index = script.len();
            script.push(glyph);

            let color = if accented && accent_range.contains(&i) {
                ACCENT
            } else {
                Color::WHITE
            };

            commands.spawn((
                Letter { index },
                Text2d::new(glyph.to_string()),
                TextFont {
                    font_size: font_size * fit * OVERLAY_PIXELS_PER_UNIT,
                    ..default()
                },
                TextColor(color),
                Transform::from_translation(Vec3::new(centers[i] * fit, y, LETTER_DEPTH)),
                Visibility::Hidden,
                RenderLayers::from_layers(RenderLayer::Overlay.layers()),
            ));
        }
    }

    let total = script.len();
    let first_glyph = script[0];
    let first_delay = reveal_delay_ms(0, first_glyph, timing.initial_delay_ms, 0.0);
    *cursor = RevealCursor {
        next: 0,
        total,
        script,
        timer: Timer::from_seconds(first_delay / 1000.0, TimerMode::Once),
        hold: None,
    };
    debug!("typewriter armed: {total} letters, first delay {first_delay} ms");
}

/// Ticks the reveal: shows the next letter when its delay expires, schedules
/// the one after, and once everything is visible runs the completion hold
/// before advancing the phase machine to `Pause`.
pub fn advance_reveal(
    time: Res<Time>,
    mut cursor: ResMut<RevealCursor>,
    timing: Res<TypewriterTiming>,
    mut letters: Query<(&Letter, &mut Visibility)>,
    phase: Res<State<IntroPhase>>,
    mut next_phase: ResMut<NextState<IntroPhase>>,
) {
    if cursor.total == 0 {
        // Letters not constructed yet; nothing to reveal.
        return;
    }

    if cursor.next < cursor.total {
        cursor.timer.tick(time.delta());
        if !cursor.timer.just_finished() {
            return;
        }

        let revealing = cursor.next;
        for (letter, mut visibility) in &mut letters {
            if letter.index == revealing {
                *visibility = Visibility::Visible;
            }
        }
        cursor.next += 1;

        if cursor.next < cursor.total {
            let glyph = cursor.script[cursor.next];
            let jitter = rand::rng().random::<f32>();
            let delay = reveal_delay_ms(cursor.next, glyph, timing.initial_delay_ms, jitter);
            cursor.timer = Timer::from_seconds(delay / 1000.0, TimerMode::Once);
        } else {
            cursor.hold = Some(Timer::from_seconds(COMPLETION_HOLD_SECS, TimerMode::Once));
        }
        return;
    }

    if let Some(hold) = cursor.hold.as_mut() {
        hold.tick(time.delta());
        if hold.just_finished() {
            advance_intro_phase(&phase, &mut next_phase, IntroPhase::Pause);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script() -> Vec<char> {
        format!("{GREETING_PREFIX}{NAME}")
            .chars()
            .chain(WELCOME.chars())
            .collect()
    }

    #[test]
    fn script_is_thirty_five_letters() {
        assert_eq!(script().len(), 35);
        assert_eq!(POST_NAME_INDEX, GREETING_PREFIX.len() + NAME.len());
    }

    #[test]
    fn first_letter_uses_supplied_initial_delay() {
        assert_eq!(reveal_delay_ms(0, 'H', Some(500.0), 0.9), 500.0);
    }

    #[test]
    fn first_letter_falls_back_when_gate_never_fired() {
        assert_eq!(reveal_delay_ms(0, 'H', None, 0.9), FALLBACK_INITIAL_DELAY_MS);
    }

    #[test]
    fn beat_after_hi_comma() {
        let glyphs = script();
        assert_eq!(reveal_delay_ms(3, glyphs[3], Some(500.0), 0.0), 500.0);
    }

    #[test]
    fn spaces_and_punctuation_have_fixed_delays() {
        assert_eq!(reveal_delay_ms(7, ' ', None, 0.5), 120.0);
        assert_eq!(reveal_delay_ms(2, ',', None, 0.5), 250.0);
        assert_eq!(reveal_delay_ms(34, '.', None, 0.5), 250.0);
    }

    #[test]
    fn long_beat_after_the_name_overrides_glyph_rules() {
        let glyphs = script();
        assert_eq!(glyphs[POST_NAME_INDEX], 'W');
        assert_eq!(
            reveal_delay_ms(POST_NAME_INDEX, glyphs[POST_NAME_INDEX], None, 0.5),
            1200.0
        );
    }

    #[test]
    fn default_delay_spans_fifty_to_eighty_five() {
        assert_eq!(reveal_delay_ms(5, 'I', None, 0.0), 50.0);
        let top = reveal_delay_ms(5, 'I', None, 0.999_999);
        assert!((50.0..85.0).contains(&top));
    }

    #[test]
    fn reveal_order_is_a_prefix_of_the_script() {
        // Simulate the cursor: after k reveals the visible set must be
        // exactly [0, k).
        let total = script().len();
        let mut revealed = vec![false; total];
        for next in 0..total {
            revealed[next] = true;
            let visible: Vec<usize> = revealed
                .iter()
                .enumerate()
                .filter_map(|(i, &v)| v.then_some(i))
                .collect();
            assert_eq!(visible, (0..=next).collect::<Vec<_>>());
        }
    }
}
