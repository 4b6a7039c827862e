//! UI theme constants

use egui::{Color32, CornerRadius, Stroke, Vec2};

pub const BG_PRIMARY: Color32 = Color32::from_rgb(249, 250, 251);
pub const BG_SURFACE: Color32 = Color32::from_rgb(255, 255, 255);
pub const BORDER: Color32 = Color32::from_rgb(229, 231, 235);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(17, 24, 39);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(107, 114, 128);
pub const ACCENT: Color32 = Color32::from_rgb(99, 102, 241);
pub const ACCENT_DISABLED: Color32 = Color32::from_rgb(203, 213, 225);
pub const USER_BUBBLE: Color32 = ACCENT;
pub const USER_LABEL: Color32 = Color32::from_rgb(229, 231, 235);
pub const BOT_BUBBLE: Color32 = Color32::from_rgb(241, 245, 249);
pub const CRITICAL_BG: Color32 = Color32::from_rgb(254, 226, 226);
pub const CRITICAL_BORDER: Color32 = Color32::from_rgb(239, 68, 68);
pub const CHIP_BG: Color32 = Color32::from_rgb(219, 234, 254);
pub const CHIP_TEXT: Color32 = Color32::from_rgb(29, 78, 216);
pub const PROMPT_BG: Color32 = Color32::from_rgb(224, 231, 255);
pub const PROMPT_TEXT: Color32 = Color32::from_rgb(55, 48, 163);

pub const PANEL_ROUNDING: CornerRadius = CornerRadius::same(12);
pub const BUBBLE_ROUNDING: CornerRadius = CornerRadius::same(16);
pub const PANEL_PADDING: Vec2 = Vec2::new(16.0, 12.0);

/// Parse `#RRGGBB` (or `RRGGBB`) into a color.
pub fn parse_hex(hex: &str) -> Option<Color32> {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Hex color from a preset or status table, with a fallback for bad input.
pub fn hex_or(hex: &str, fallback: Color32) -> Color32 {
    parse_hex(hex).unwrap_or(fallback)
}

/// Apply the light theme to an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals = egui::Visuals::light();
    style.visuals.panel_fill = BG_PRIMARY;
    style.visuals.window_fill = BG_SURFACE;
    style.visuals.extreme_bg_color = BG_SURFACE;

    style.visuals.widgets.inactive.bg_fill = BG_SURFACE;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    style.visuals.widgets.hovered.bg_fill = BOT_BUBBLE;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    style.visuals.widgets.active.bg_fill = ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, BG_SURFACE);

    style.visuals.selection.bg_fill = ACCENT.linear_multiply(0.3);
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    style.spacing.item_spacing = Vec2::new(8.0, 6.0);

    ctx.set_style(style);
}
