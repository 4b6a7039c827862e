//! Chatbot panel — status card, transcript, technique chips and input bar.

use egui::{self, Align, Layout, RichText, ScrollArea, Stroke, Vec2};
use mindplus_core::status::{is_critical, status_theme};
use mindplus_core::techniques::{TechniqueCatalog, PRESET_PROMPTS};
use mindplus_types::message::ChatMessage;
use mindplus_types::session::SessionPhase;
use crate::state::UiState;
use crate::theme::*;

/// What the user asked for this frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatAction {
    Send(String),
    Reconnect,
    OpenCalm,
}

/// Render the chat panel. Returns an action when the user triggers one.
pub fn chat_panel(ui: &mut egui::Ui, state: &mut UiState, catalog: &TechniqueCatalog) -> Option<ChatAction> {
    let mut action = None;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                // Header
                ui.horizontal(|ui| {
                    ui.heading(RichText::new("MindPlus Companion").color(TEXT_PRIMARY).strong());
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui.button("Calm minute").clicked() {
                            action = Some(ChatAction::OpenCalm);
                        }
                        let phase_color = match state.phase {
                            SessionPhase::Failed(_) => CRITICAL_BORDER,
                            SessionPhase::Ready => TEXT_SECONDARY,
                            _ => ACCENT,
                        };
                        ui.label(RichText::new(state.phase_text()).color(phase_color).small());
                    });
                });

                if matches!(state.phase, SessionPhase::Failed(_)) {
                    ui.horizontal(|ui| {
                        let text = state
                            .error_text
                            .clone()
                            .unwrap_or_else(|| "Could not reach the chat service.".to_string());
                        ui.label(RichText::new(text).color(CRITICAL_BORDER).small());
                        if ui.button("Retry").clicked() {
                            action = Some(ChatAction::Reconnect);
                        }
                    });
                }

                ui.add_space(6.0);
                status_card(ui, state);
                ui.add_space(6.0);

                let available_height = ui.available_height() - 120.0;
                ScrollArea::vertical()
                    .max_height(available_height.max(120.0))
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for message in &state.messages {
                            render_message(ui, message);
                            ui.add_space(6.0);
                        }
                        if state.phase == SessionPhase::Sending {
                            ui.add(egui::Spinner::new());
                        }
                    });

                technique_chips(ui, state, catalog);

                if state.messages.is_empty() {
                    prompt_chips(ui, state);
                }

                ui.add_space(8.0);
                if let Some(text) = input_bar(ui, state) {
                    action = Some(ChatAction::Send(text));
                }
            });
        });

    action
}

fn status_card(ui: &mut egui::Ui, state: &UiState) {
    let theme = status_theme(state.status.overall_status);
    egui::Frame::default()
        .fill(hex_or(theme.background, BG_SURFACE))
        .stroke(Stroke::new(1.0, hex_or(theme.border, BORDER)))
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("Current snapshot").color(TEXT_SECONDARY).small());
            ui.label(RichText::new(state.status_title()).color(TEXT_PRIMARY).strong());
            ui.label(RichText::new(state.status_meta()).color(TEXT_SECONDARY).small());
        });
}

fn render_message(ui: &mut egui::Ui, message: &ChatMessage) {
    let is_user = !message.is_bot();
    let (fill, stroke, label_color, text_color) = if is_user {
        (USER_BUBBLE, Stroke::NONE, USER_LABEL, BG_SURFACE)
    } else if is_critical(message) {
        (CRITICAL_BG, Stroke::new(1.0, CRITICAL_BORDER), TEXT_SECONDARY, TEXT_PRIMARY)
    } else {
        (BOT_BUBBLE, Stroke::NONE, TEXT_SECONDARY, TEXT_PRIMARY)
    };
    let layout = if is_user {
        Layout::right_to_left(Align::TOP)
    } else {
        Layout::left_to_right(Align::TOP)
    };

    ui.with_layout(layout, |ui| {
        let max_width = ui.available_width() * 0.8;
        egui::Frame::default()
            .fill(fill)
            .stroke(stroke)
            .corner_radius(BUBBLE_ROUNDING)
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.set_max_width(max_width);
                ui.vertical(|ui| {
                    ui.label(RichText::new(&message.label).color(label_color).strong().small());
                    ui.label(RichText::new(&message.text).color(text_color));
                });
            });
    });
}

fn technique_chips(ui: &mut egui::Ui, state: &mut UiState, catalog: &TechniqueCatalog) {
    let techniques = state.techniques();
    if techniques.is_empty() {
        return;
    }

    ui.label(RichText::new("Try a technique").color(TEXT_SECONDARY).small());
    ui.horizontal_wrapped(|ui| {
        for name in &techniques {
            let chip = egui::Button::new(RichText::new(name).color(CHIP_TEXT).small())
                .fill(CHIP_BG)
                .corner_radius(BUBBLE_ROUNDING);
            if ui.add(chip).clicked() {
                state.toggle_technique(name);
            }
        }
    });

    if let Some(name) = state.selected_technique.clone() {
        egui::Frame::default()
            .fill(BG_SURFACE)
            .stroke(Stroke::new(1.0, BORDER))
            .corner_radius(PANEL_ROUNDING)
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(&name).color(TEXT_PRIMARY).strong());
                ui.label(RichText::new(catalog.describe(&name)).color(TEXT_SECONDARY));
            });
    }
}

fn prompt_chips(ui: &mut egui::Ui, state: &mut UiState) {
    ui.horizontal_wrapped(|ui| {
        for prompt in PRESET_PROMPTS {
            let chip = egui::Button::new(RichText::new(prompt).color(PROMPT_TEXT).small())
                .fill(PROMPT_BG)
                .corner_radius(BUBBLE_ROUNDING);
            if ui.add(chip).clicked() {
                state.input_text = prompt.to_string();
            }
        }
    });
}

fn input_bar(ui: &mut egui::Ui, state: &mut UiState) -> Option<String> {
    let mut submitted = None;

    ui.horizontal(|ui| {
        let input = egui::TextEdit::singleline(&mut state.input_text)
            .hint_text("Share what's on your mind...")
            .desired_width(ui.available_width() - 70.0)
            .font(egui::FontId::proportional(14.0));
        let response = ui.add(input);

        let send_enabled = state.can_send();
        let send_btn = ui.add_enabled(
            send_enabled,
            egui::Button::new(RichText::new("Send").color(BG_SURFACE))
                .fill(if send_enabled { ACCENT } else { ACCENT_DISABLED })
                .corner_radius(PANEL_ROUNDING)
                .min_size(Vec2::new(60.0, 0.0)),
        );

        let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if enter || send_btn.clicked() {
            submitted = state.take_input();
            response.request_focus();
        }
    });

    submitted
}
