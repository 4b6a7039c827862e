//! Calm-session panel — preset colors, breathing pulse, depletion ring and
//! the affirmation text.

use std::f32::consts::FRAC_PI_2;

use egui::{self, Align2, FontId, Pos2, RichText, Sense, Shape, Stroke, Vec2};
use mindplus_core::animation::{fade_in_opacity, pulse_scale, ring_geometry, ProgressTween};
use mindplus_types::calm::VisualPreset;
use crate::state::UiState;
use crate::theme::*;

pub const RING_SIZE: f32 = 220.0;
pub const RING_THICKNESS: f32 = 8.0;
const ARC_SEGMENTS: usize = 96;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalmAction {
    Pause,
    Resume,
    Restart,
    Close,
}

/// Per-session animation clock
#[derive(Debug, Clone, Copy)]
pub struct CalmAnimation {
    started_at_ms: f64,
    tween: ProgressTween,
}

impl CalmAnimation {
    pub fn new(now_ms: f64) -> Self {
        Self {
            started_at_ms: now_ms,
            tween: ProgressTween::new(1.0),
        }
    }

    pub fn elapsed_ms(&self, now_ms: f64) -> f64 {
        now_ms - self.started_at_ms
    }

    /// Ring progress to draw this frame, easing toward `target`.
    pub fn ring_progress(&mut self, target: f32, now_ms: f64) -> f32 {
        self.tween.retarget(target, now_ms);
        self.tween.value_at(now_ms)
    }
}

pub fn calm_panel(
    ui: &mut egui::Ui,
    preset: &VisualPreset,
    state: &UiState,
    animation: &mut CalmAnimation,
    now_ms: f64,
) -> Option<CalmAction> {
    let mut action = None;
    let background = hex_or(&preset.background_color, BG_PRIMARY);
    let pulse_color = hex_or(&preset.pulse_color, ACCENT);
    let text_color = hex_or(&preset.text_color, TEXT_PRIMARY);
    let elapsed = animation.elapsed_ms(now_ms);
    let opacity = fade_in_opacity(elapsed);

    egui::Frame::default()
        .fill(background)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.set_min_size(ui.available_size());
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.label(RichText::new(&preset.label).color(text_color.gamma_multiply(0.7)).small());
                ui.heading(RichText::new(&preset.title).color(text_color).strong());
                ui.add_space(16.0);

                let progress = animation.ring_progress(state.timer_progress(), now_ms);
                draw_ring(ui, progress, pulse_scale(elapsed), pulse_color, text_color, &state.timer_label());

                ui.label(RichText::new("1-minute calm focus").color(text_color.gamma_multiply(0.7)).small());
                ui.add_space(16.0);
                ui.label(
                    RichText::new(&preset.affirmation_text)
                        .color(text_color.gamma_multiply(opacity))
                        .size(18.0),
                );
                ui.add_space(24.0);

                ui.horizontal(|ui| {
                    let running = state.timer.is_some_and(|t| t.running);
                    if state.timer_finished {
                        if ui.button("Again").clicked() {
                            action = Some(CalmAction::Restart);
                        }
                    } else if running {
                        if ui.button("Pause").clicked() {
                            action = Some(CalmAction::Pause);
                        }
                    } else if ui.button("Resume").clicked() {
                        action = Some(CalmAction::Resume);
                    }
                    if ui.button("Back to chat").clicked() {
                        action = Some(CalmAction::Close);
                    }
                });
            });
        });

    // pulse and fade run continuously
    ui.ctx().request_repaint();
    action
}

fn draw_ring(
    ui: &mut egui::Ui,
    progress: f32,
    pulse: f32,
    ring_color: egui::Color32,
    text_color: egui::Color32,
    label: &str,
) {
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(RING_SIZE), Sense::hover());
    let painter = ui.painter_at(rect);
    let geometry = ring_geometry(RING_SIZE, RING_THICKNESS, progress);
    let center = rect.min + Vec2::splat(geometry.center);

    painter.circle_filled(center, RING_SIZE * 0.25 * pulse, ring_color.gamma_multiply(0.2));
    painter.circle_stroke(
        center,
        geometry.radius,
        Stroke::new(RING_THICKNESS, ring_color.gamma_multiply(0.33)),
    );

    if geometry.sweep > 0.0 {
        let steps = ((ARC_SEGMENTS as f32) * progress).ceil().max(2.0) as usize;
        let points: Vec<Pos2> = (0..=steps)
            .map(|i| {
                // twelve o'clock, clockwise
                let angle = -FRAC_PI_2 + geometry.sweep * (i as f32 / steps as f32);
                center + Vec2::new(angle.cos(), angle.sin()) * geometry.radius
            })
            .collect();
        painter.add(Shape::line(points, Stroke::new(RING_THICKNESS, ring_color)));
    }

    painter.text(center, Align2::CENTER_CENTER, label, FontId::proportional(32.0), text_color);
}
