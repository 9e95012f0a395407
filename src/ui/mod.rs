//! Egui chrome: the loading screen, the header and nav revealed after the
//! intro zoom, and the per-section modals.

use bevy::ecs::message::Message;
use bevy::prelude::*;
use bevy_egui::egui;

use crate::globe::Section;
use crate::schedule::SceneSet;
use crate::state::AppState;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Chrome>()
            .init_resource::<ActiveSection>()
            .add_message::<OpenSection>()
            .add_message::<FlyToSection>()
            .add_message::<ResetCamera>()
            .add_systems(
                Update,
                (
                    draw_loading.run_if(in_state(AppState::Loading)),
                    (draw_chrome, draw_modal, apply_open_section).chain(),
                )
                    .in_set(SceneSet::UserInput),
            );
    }
}

/// Header and nav visibility. Starts hidden and flips on once the intro
/// zoom lands.
#[derive(Resource, Debug, Default)]
pub struct Chrome {
    pub visible: bool,
}

/// The modal currently open, if any.
#[derive(Resource, Debug, Default)]
pub struct ActiveSection(pub Option<Section>);

/// Open this section's modal immediately.
#[derive(Message, Debug, Clone, Copy)]
pub struct OpenSection(pub Section);

/// Glide the camera to this section's landmark, then open its modal.
#[derive(Message, Debug, Clone, Copy)]
pub struct FlyToSection(pub Section);

/// Glide the camera back to the home framing.
#[derive(Message, Debug, Clone, Copy)]
pub struct ResetCamera;

fn apply_open_section(mut requests: MessageReader<OpenSection>, mut active: ResMut<ActiveSection>) {
    for OpenSection(section) in requests.read().copied() {
        active.0 = Some(section);
    }
}

fn draw_loading(mut egui_ctx: Query<&mut bevy_egui::EguiContext>, mut ready: Local<bool>) {
    if !*ready {
        *ready = true;
        return;
    }
    let Ok(mut ctx) = egui_ctx.single_mut() else {
        return;
    };
    let ctx = ctx.get_mut();
    let center = ctx.screen_rect().center();
    let painter = ctx.layer_painter(egui::LayerId::background());
    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        "Loading the Universe...",
        egui::FontId::proportional(22.0),
        egui::Color32::WHITE,
    );
}

fn draw_chrome(
    mut egui_ctx: Query<&mut bevy_egui::EguiContext>,
    chrome: Res<Chrome>,
    mut fly: MessageWriter<FlyToSection>,
    mut reset: MessageWriter<ResetCamera>,
    mut ready: Local<bool>,
) {
    if !*ready {
        *ready = true;
        return;
    }
    if !chrome.visible {
        return;
    }
    let Ok(mut ctx) = egui_ctx.single_mut() else {
        return;
    };

    egui::TopBottomPanel::top("header").show(ctx.get_mut(), |ui| {
        ui.horizontal(|ui| {
            ui.heading("Dominic LDM");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Reset view").clicked() {
                    reset.write(ResetCamera);
                }
                for section in Section::ALL.iter().rev().copied() {
                    if ui.button(section.title()).clicked() {
                        fly.write(FlyToSection(section));
                    }
                }
            });
        });
    });
}

fn draw_modal(
    mut egui_ctx: Query<&mut bevy_egui::EguiContext>,
    mut active: ResMut<ActiveSection>,
    mut ready: Local<bool>,
) {
    if !*ready {
        *ready = true;
        return;
    }
    let Some(section) = active.0 else {
        return;
    };
    let Ok(mut ctx) = egui_ctx.single_mut() else {
        return;
    };

    let mut close = false;
    egui::Window::new(section.title())
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .collapsible(false)
        .resizable(false)
        .show(ctx.get_mut(), |ui| {
            ui.label(section_body(section));
            ui.add_space(8.0);
            if ui.button("Close").clicked() {
                close = true;
            }
        });
    if close {
        active.0 = None;
    }
}

const fn section_body(section: Section) -> &'static str {
    match section {
        Section::About => {
            "Hi, I'm Dominic. I build things for the web and for fun, and this \
             little planet is a tour of both."
        },
        Section::Experience => {
            "Internships and jobs so far: full-stack work, some graphics, and a \
             lot of time spent making tools other people enjoy using."
        },
        Section::Projects => {
            "Selected projects, from weekend experiments to the site you are \
             looking at right now."
        },
        Section::Hobbies => {
            "Off the keyboard: skiing, photography, music, and the occasional \
             video game marathon."
        },
    }
}
