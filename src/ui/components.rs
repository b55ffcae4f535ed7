//! Shared UI components.

use eframe::egui::{self, Color32, CornerRadius, Frame, Margin, Response, RichText, Sense, Stroke, Ui};

use crate::models::analytics::Metric;

/// Status indicator colors.
pub mod colors {
    use super::Color32;

    pub const PRIMARY: Color32 = Color32::from_rgb(37, 99, 235);
    pub const SUCCESS: Color32 = Color32::from_rgb(100, 200, 100);
    pub const ERROR: Color32 = Color32::from_rgb(255, 100, 100);
    pub const WARNING: Color32 = Color32::from_rgb(255, 200, 100);
    pub const NEUTRAL: Color32 = Color32::from_rgb(150, 150, 150);
    pub const INFO: Color32 = Color32::from_rgb(100, 150, 230);
    pub const PURPLE: Color32 = Color32::from_rgb(168, 85, 247);
}

/// Parse a `#rrggbb` color, falling back to neutral gray.
pub fn hex_color(hex: &str) -> Color32 {
    Color32::from_hex(hex).unwrap_or(colors::NEUTRAL)
}

/// Render a page header with title and subtitle.
pub fn panel_header(ui: &mut Ui, title: &str, subtitle: &str) {
    ui.heading(RichText::new(title).size(26.0).strong());
    ui.label(RichText::new(subtitle).weak());
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(15.0);
}

/// Rounded card frame used by every panel.
pub fn card_frame(ui: &Ui) -> Frame {
    Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .stroke(ui.style().visuals.widgets.noninteractive.bg_stroke)
        .inner_margin(Margin::same(15))
        .corner_radius(CornerRadius::same(8))
}

/// Filled button for the main action of a panel.
pub fn primary_button_with_icon(ui: &mut Ui, icon: &str, label: &str) -> Response {
    let text = if icon.is_empty() {
        label.to_string()
    } else {
        format!("{icon}  {label}")
    };
    ui.add(
        egui::Button::new(RichText::new(text).color(Color32::WHITE))
            .fill(colors::PRIMARY)
            .min_size(egui::vec2(0.0, 30.0)),
    )
}

/// Plain button with a leading icon.
pub fn styled_button_with_icon(ui: &mut Ui, icon: &str, label: &str) -> Response {
    ui.add(egui::Button::new(format!("{icon}  {label}")).min_size(egui::vec2(0.0, 30.0)))
}

/// Plain button.
pub fn styled_button(ui: &mut Ui, label: &str) -> Response {
    ui.add(egui::Button::new(label).min_size(egui::vec2(0.0, 30.0)))
}

/// Small outline button for per-row actions.
pub fn action_button(ui: &mut Ui, icon: &str, label: &str) -> Response {
    ui.add(egui::Button::new(RichText::new(format!("{icon} {label}")).small()))
}

/// Small red button for destructive per-row actions.
pub fn danger_action_button(ui: &mut Ui, icon: &str, label: &str) -> Response {
    ui.add(
        egui::Button::new(RichText::new(format!("{icon} {label}")).small().color(colors::ERROR))
            .stroke(Stroke::new(1.0, colors::ERROR)),
    )
}

/// Pill-shaped label.
pub fn badge(ui: &mut Ui, text: &str, fill: Color32, text_color: Color32) {
    Frame::new()
        .fill(fill)
        .inner_margin(Margin::symmetric(8, 2))
        .corner_radius(CornerRadius::same(10))
        .show(ui, |ui| {
            ui.label(RichText::new(text).small().color(text_color));
        });
}

/// Outlined pill-shaped label.
pub fn outline_badge(ui: &mut Ui, text: &str) {
    Frame::new()
        .stroke(ui.style().visuals.widgets.noninteractive.bg_stroke)
        .inner_margin(Margin::symmetric(8, 2))
        .corner_radius(CornerRadius::same(10))
        .show(ui, |ui| {
            ui.label(RichText::new(text).small());
        });
}

/// Circle with initials, standing in for a profile picture.
pub fn avatar(ui: &mut Ui, initials: &str, size: f32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(size, size), Sense::hover());
    if ui.is_rect_visible(rect) {
        ui.painter().circle_filled(rect.center(), size / 2.0, colors::PRIMARY);
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            initials,
            egui::FontId::proportional(size * 0.4),
            Color32::WHITE,
        );
    }
}

/// Square icon tile with a colored background.
pub fn icon_tile(ui: &mut Ui, icon: &str, fill: Color32, size: f32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(size, size), Sense::hover());
    if ui.is_rect_visible(rect) {
        ui.painter().rect_filled(rect, 8.0, fill);
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            icon,
            egui::FontId::proportional(size * 0.5),
            Color32::WHITE,
        );
    }
}

/// Render a stat card with title, value, and month-over-month change.
pub fn metric_card(ui: &mut Ui, metric: &Metric, icon: Option<&str>) {
    card_frame(ui).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new(&metric.title).small().weak());
            if let Some(icon) = icon {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let fill = metric.color.as_deref().map(hex_color).unwrap_or(colors::PRIMARY);
                    icon_tile(ui, icon, fill, 34.0);
                });
            }
        });
        ui.label(RichText::new(&metric.value).size(24.0).strong());
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 4.0;
            ui.label(RichText::new(&metric.change).small().color(colors::SUCCESS).strong());
            ui.label(RichText::new("from last month").small().weak());
        });
    });
}

/// Centered message shown when a filtered list is empty.
pub fn empty_state(ui: &mut Ui, message: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.label(RichText::new(message).size(16.0).weak());
        ui.add_space(40.0);
    });
}

/// Form label, red with a marker when a required field is empty.
pub fn field_label(ui: &mut Ui, label: &str, missing: bool) {
    if missing {
        ui.label(RichText::new(format!("{label} *")).color(colors::ERROR));
    } else {
        ui.label(label);
    }
}

/// Number of card columns that fit in the current width.
pub fn card_columns(ui: &Ui, min_card_width: f32, max_columns: usize) -> usize {
    let fit = (ui.available_width() / min_card_width).floor() as usize;
    fit.clamp(1, max_columns)
}
