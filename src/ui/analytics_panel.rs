//! Analytics panel: key metrics, charts, and insights over sample figures.

use std::f32::consts::TAU;

use eframe::egui::{self, Color32, Mesh, Pos2, RichText, Sense, Shape, Stroke, Ui, Vec2};
use egui_phosphor::regular::{MEDAL, TARGET, TREND_UP, USERS};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints};

use crate::models::analytics::{AnalyticsData, InsightTone, StatusSlice};

use super::app::App;
use super::components::{card_columns, card_frame, colors, hex_color, metric_card, panel_header};

const CHART_HEIGHT: f32 = 280.0;

/// Show the analytics panel.
pub fn show(app: &mut App, ui: &mut Ui) {
    let data = &app.analytics;

    panel_header(ui, "Analytics & Reports", "Insights into employee performance and training progress");

    // Key metrics
    let icons = [USERS, TREND_UP, MEDAL, TARGET];
    let columns = card_columns(ui, 220.0, 4);
    for (row_idx, metrics) in data.metrics.chunks(columns).enumerate() {
        ui.columns(columns, |cols| {
            for (i, metric) in metrics.iter().enumerate() {
                metric_card(&mut cols[i], metric, icons.get(row_idx * columns + i).copied());
            }
        });
        ui.add_space(10.0);
    }

    ui.add_space(10.0);

    ui.columns(2, |cols| {
        chart_card(&mut cols[0], "Department Performance", |ui| department_chart(ui, data));
        chart_card(&mut cols[1], "Training Progress", |ui| training_chart(ui, data));
    });

    ui.add_space(10.0);

    ui.columns(2, |cols| {
        chart_card(&mut cols[0], "Employee Status Distribution", |ui| status_pie(ui, data));
        chart_card(&mut cols[1], "Recent Insights", |ui| insights(ui, data));
    });
}

fn chart_card(ui: &mut Ui, title: &str, add_contents: impl FnOnce(&mut Ui)) {
    card_frame(ui).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(RichText::new(title).size(16.0).strong());
        ui.add_space(10.0);
        add_contents(ui);
    });
}

/// Month or department name for an integer axis position.
fn category_label(names: &[String], value: f64) -> String {
    let idx = value.round();
    if (value - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    names.get(idx as usize).cloned().unwrap_or_default()
}

fn department_chart(ui: &mut Ui, data: &AnalyticsData) {
    let names: Vec<String> = data.departments.iter().map(|d| d.name.clone()).collect();

    let employees: Vec<Bar> = data
        .departments
        .iter()
        .enumerate()
        .map(|(i, d)| Bar::new(i as f64 - 0.2, f64::from(d.employees)).width(0.35).name(&d.name))
        .collect();
    let performance: Vec<Bar> = data
        .departments
        .iter()
        .enumerate()
        .map(|(i, d)| Bar::new(i as f64 + 0.2, d.performance).width(0.35).name(&d.name))
        .collect();

    Plot::new("department_performance")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .include_y(0.0)
        .x_axis_formatter(move |mark, _range| category_label(&names, mark.value))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new("Employees", employees).color(colors::PRIMARY));
            plot_ui.bar_chart(BarChart::new("Performance", performance).color(colors::SUCCESS));
        });
}

fn training_chart(ui: &mut Ui, data: &AnalyticsData) {
    let months: Vec<String> = data.training_progress.iter().map(|m| m.month.clone()).collect();

    let completed: Vec<[f64; 2]> = data
        .training_progress
        .iter()
        .enumerate()
        .map(|(i, m)| [i as f64, m.completed])
        .collect();
    let in_progress: Vec<[f64; 2]> = data
        .training_progress
        .iter()
        .enumerate()
        .map(|(i, m)| [i as f64, m.in_progress])
        .collect();

    Plot::new("training_progress")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .include_y(0.0)
        .include_y(100.0)
        .x_axis_formatter(move |mark, _range| category_label(&months, mark.value))
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new("Completed", PlotPoints::from(completed))
                    .color(colors::SUCCESS)
                    .width(2.5),
            );
            plot_ui.line(
                Line::new("In Progress", PlotPoints::from(in_progress))
                    .color(colors::WARNING)
                    .width(2.5),
            );
        });
}

/// Pie chart painted as triangle fans, one per slice, with a percentage
/// label outside each slice.
fn status_pie(ui: &mut Ui, data: &AnalyticsData) {
    let total = data.status_total();
    let (rect, _) = ui.allocate_exact_size(Vec2::new(ui.available_width(), CHART_HEIGHT - 40.0), Sense::hover());
    let center = rect.center();
    let radius = (rect.height() / 2.0 - 24.0).max(10.0);
    let painter = ui.painter_at(rect);

    if total == 0 {
        painter.circle_stroke(center, radius, Stroke::new(1.0, colors::NEUTRAL));
    } else {
        let mut start = -TAU / 4.0;
        for slice in &data.employee_status {
            let share = data.status_share(slice) as f32;
            let sweep = share * TAU;
            if sweep <= 0.0 {
                continue;
            }
            let color = hex_color(&slice.color);
            painter.add(slice_mesh(center, radius, start, sweep, color));

            let mid = start + sweep / 2.0;
            let label_pos = center + Vec2::angled(mid) * (radius + 14.0);
            let align = if mid.cos() >= 0.0 {
                egui::Align2::LEFT_CENTER
            } else {
                egui::Align2::RIGHT_CENTER
            };
            painter.text(
                label_pos,
                align,
                slice_label(slice, share),
                egui::FontId::proportional(12.0),
                ui.visuals().text_color(),
            );

            start += sweep;
        }
    }

    // Legend
    ui.horizontal_wrapped(|ui| {
        for slice in &data.employee_status {
            let (swatch, _) = ui.allocate_exact_size(Vec2::splat(10.0), Sense::hover());
            ui.painter().rect_filled(swatch, 2.0, hex_color(&slice.color));
            ui.label(RichText::new(format!("{} ({})", slice.name, slice.value)).small());
            ui.add_space(8.0);
        }
    });
}

fn slice_label(slice: &StatusSlice, share: f32) -> String {
    format!("{} {:.0}%", slice.name, share * 100.0)
}

fn slice_mesh(center: Pos2, radius: f32, start: f32, sweep: f32, color: Color32) -> Shape {
    let steps = ((sweep / TAU) * 96.0).ceil().max(2.0) as u32;
    let mut mesh = Mesh::default();
    mesh.colored_vertex(center, color);
    for step in 0..=steps {
        let angle = start + sweep * step as f32 / steps as f32;
        mesh.colored_vertex(center + Vec2::angled(angle) * radius, color);
    }
    for step in 1..=steps {
        mesh.add_triangle(0, step, step + 1);
    }
    Shape::mesh(mesh)
}

fn insights(ui: &mut Ui, data: &AnalyticsData) {
    for insight in &data.insights {
        let accent = match insight.tone {
            InsightTone::Positive => colors::SUCCESS,
            InsightTone::Info => colors::INFO,
            InsightTone::Warning => colors::WARNING,
            InsightTone::Highlight => colors::PURPLE,
        };

        egui::Frame::new()
            .fill(accent.gamma_multiply(0.12))
            .stroke(Stroke::new(1.0, accent.gamma_multiply(0.6)))
            .inner_margin(egui::Margin::same(10))
            .corner_radius(egui::CornerRadius::same(6))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.label(RichText::new(&insight.title).strong().color(accent));
                ui.label(RichText::new(&insight.detail).small());
            });
        ui.add_space(8.0);
    }
}
