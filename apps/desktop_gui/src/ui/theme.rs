//! Fixed dark theme applied once at startup. There is no runtime toggle.

use egui::{Color32, CornerRadius, Stroke};

pub const ACCENT: Color32 = Color32::from_rgb(99, 102, 241);
pub const PAGE_BACKGROUND: Color32 = Color32::from_rgb(17, 19, 26);
pub const CARD_BACKGROUND: Color32 = Color32::from_rgb(26, 29, 39);
pub const CARD_STROKE: Color32 = Color32::from_rgb(48, 52, 66);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(226, 228, 235);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(148, 153, 168);
pub const BADGE_BACKGROUND: Color32 = Color32::from_rgb(39, 43, 56);
pub const TIMELINE_LINE: Color32 = Color32::from_rgb(45, 48, 66);

pub fn apply(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    let mut visuals = egui::Visuals::dark();

    visuals.panel_fill = PAGE_BACKGROUND;
    visuals.window_fill = CARD_BACKGROUND;
    visuals.faint_bg_color = CARD_BACKGROUND;
    visuals.extreme_bg_color = Color32::from_rgb(12, 14, 19);
    visuals.hyperlink_color = ACCENT;
    visuals.selection.bg_fill = ACCENT.gamma_multiply(0.55);
    visuals.override_text_color = Some(TEXT_PRIMARY);

    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, CARD_STROKE);
    visuals.widgets.inactive.bg_fill = BADGE_BACKGROUND;
    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, CARD_STROKE);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, ACCENT.gamma_multiply(0.8));
    visuals.widgets.active.bg_stroke = Stroke::new(1.2, ACCENT);

    let radius = CornerRadius::same(8);
    visuals.widgets.noninteractive.corner_radius = radius;
    visuals.widgets.inactive.corner_radius = radius;
    visuals.widgets.hovered.corner_radius = radius;
    visuals.widgets.active.corner_radius = radius;
    visuals.widgets.open.corner_radius = radius;

    style.visuals = visuals;
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(12.0, 7.0);
    style.spacing.interact_size = egui::vec2(40.0, 30.0);
    ctx.set_style(style);
}
