//! Dashboard panel with stats, recent activity, and quick actions.

use eframe::egui::{self, RichText, Ui};
use egui_phosphor::regular::{BOOK_OPEN, CHART_BAR, FILE_XLS, STAR, TREND_UP, USER_PLUS, USERS};

use crate::models::analytics::ActivityKind;

use super::app::App;
use super::components::{card_columns, card_frame, colors, metric_card, styled_button_with_icon};
use super::forms::{EmployeeForm, TrainingForm};
use super::route::Route;

/// Show the dashboard panel.
///
/// Returns `Some(route)` if navigation is requested.
pub fn show(app: &mut App, ui: &mut Ui) -> Option<Route> {
    let mut next_route = None;

    ui.label(RichText::new("Dashboard").size(26.0).strong());
    ui.label(RichText::new("Welcome back! Here's what's happening with your team today.").weak());
    ui.add_space(20.0);

    // Stat cards row
    let icons = [USERS, BOOK_OPEN, STAR, TREND_UP];
    let columns = card_columns(ui, 220.0, 4);
    for (row_idx, stats) in app.dashboard.stats.chunks(columns).enumerate() {
        ui.columns(columns, |cols| {
            for (i, stat) in stats.iter().enumerate() {
                let icon = icons.get(row_idx * columns + i).copied();
                metric_card(&mut cols[i], stat, icon);
            }
        });
        ui.add_space(10.0);
    }

    ui.add_space(10.0);

    // Two-column layout: Recent Activity | Quick Actions
    ui.columns(2, |cols| {
        card_frame(&cols[0]).show(&mut cols[0], |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(RichText::new("Recent Activities").size(16.0).strong());
            ui.add_space(10.0);

            for activity in &app.dashboard.activities {
                ui.horizontal(|ui| {
                    let (dot, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
                    ui.painter()
                        .circle_filled(dot.center(), 4.0, activity_color(activity.kind));
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&activity.action).strong());
                        ui.label(RichText::new(&activity.employee).weak());
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(&activity.time).small().weak());
                    });
                });
                ui.add_space(8.0);
            }
        });

        card_frame(&cols[1]).show(&mut cols[1], |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(RichText::new("Quick Actions").size(16.0).strong());
            ui.add_space(10.0);

            if quick_action(ui, USER_PLUS, "Add New Employee").clicked() {
                app.employee_form = EmployeeForm::add();
                next_route = Some(Route::Employees);
            }
            ui.add_space(6.0);

            if quick_action(ui, BOOK_OPEN, "Upload Training Material").clicked() {
                app.training_form = TrainingForm::open();
                next_route = Some(Route::Training);
            }
            ui.add_space(6.0);

            ui.add_enabled_ui(!app.is_exporting, |ui| {
                if quick_action(ui, FILE_XLS, "Generate Report").clicked() {
                    app.export_employees();
                }
            });
            ui.add_space(6.0);

            if quick_action(ui, CHART_BAR, "View Analytics").clicked() {
                next_route = Some(Route::Analytics);
            }
        });
    });

    next_route
}

fn quick_action(ui: &mut Ui, icon: &str, label: &str) -> egui::Response {
    ui.scope(|ui| {
        ui.set_min_width(ui.available_width());
        styled_button_with_icon(ui, icon, label)
    })
    .inner
}

fn activity_color(kind: ActivityKind) -> egui::Color32 {
    match kind {
        ActivityKind::Add => colors::SUCCESS,
        ActivityKind::Training => colors::INFO,
        ActivityKind::Update => colors::WARNING,
        ActivityKind::Review => colors::PURPLE,
    }
}
