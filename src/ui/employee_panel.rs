//! Employee management panel with add, edit, remove, and search.

use eframe::egui::{self, Align, Layout, RichText, Ui};
use egui_extras::{Column, TableBuilder};
use egui_phosphor::regular::{ENVELOPE, FILE_XLS, GRID_FOUR, LIST, MAGNIFYING_GLASS, PENCIL, PLUS, TRASH};

use crate::models::employee::{Department, Employee, EmployeeStatus};

use super::app::{App, EmployeeView};
use super::components::{
    action_button, avatar, badge, card_columns, card_frame, colors, danger_action_button, empty_state, field_label,
    outline_badge, panel_header, primary_button_with_icon, styled_button, styled_button_with_icon,
};
use super::forms::EmployeeForm;

/// Per-row button clicked this frame.
enum RowAction {
    Edit(String),
    Delete(String),
}

/// Show the employee panel.
pub fn show(app: &mut App, ui: &mut Ui) {
    panel_header(ui, "Employee Management", "Manage your team members and their information");

    // Toolbar
    ui.horizontal(|ui| {
        if primary_button_with_icon(ui, PLUS, "Add Employee").clicked() {
            app.employee_form = EmployeeForm::add();
        }

        ui.add_space(10.0);

        ui.add_enabled_ui(!app.is_exporting, |ui| {
            if styled_button_with_icon(ui, FILE_XLS, "Export to Excel").clicked() {
                app.export_employees();
            }
        });

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui
                .selectable_label(app.employee_view == EmployeeView::Table, LIST)
                .on_hover_text("Table view")
                .clicked()
            {
                app.employee_view = EmployeeView::Table;
            }
            if ui
                .selectable_label(app.employee_view == EmployeeView::Cards, GRID_FOUR)
                .on_hover_text("Card view")
                .clicked()
            {
                app.employee_view = EmployeeView::Cards;
            }
        });
    });

    ui.add_space(10.0);

    ui.horizontal(|ui| {
        ui.label(MAGNIFYING_GLASS);
        ui.add(
            egui::TextEdit::singleline(&mut app.employee_search)
                .desired_width(320.0)
                .hint_text("Search employees..."),
        );
        if !app.employee_search.is_empty() && styled_button(ui, "Clear").clicked() {
            app.employee_search.clear();
        }
    });

    ui.add_space(15.0);

    let action = {
        let filtered = app.roster.search(&app.employee_search);

        ui.label(
            RichText::new(format!("Showing {} of {} employees", filtered.len(), app.roster.len()))
                .small()
                .weak(),
        );
        ui.add_space(10.0);

        if filtered.is_empty() {
            empty_state(ui, "No employees found matching your search.");
            None
        } else {
            match app.employee_view {
                EmployeeView::Cards => show_cards(ui, &filtered),
                EmployeeView::Table => show_table(ui, &filtered),
            }
        }
    };

    match action {
        Some(RowAction::Edit(id)) => {
            if let Some(emp) = app.roster.get(&id) {
                app.employee_form = EmployeeForm::edit(emp);
            }
        }
        Some(RowAction::Delete(id)) => app.request_delete(&id),
        None => {}
    }

    // Form dialog
    if app.employee_form.is_open {
        show_form_dialog(app, ui.ctx());
    }
}

fn status_badge(ui: &mut Ui, status: EmployeeStatus) {
    if status.is_active() {
        badge(ui, status.label(), colors::PRIMARY, egui::Color32::WHITE);
    } else {
        let (fill, text) = (ui.visuals().faint_bg_color, ui.visuals().text_color());
        badge(ui, status.label(), fill, text);
    }
}

fn row_actions(ui: &mut Ui, emp: &Employee, action: &mut Option<RowAction>) {
    if action_button(ui, PENCIL, "Edit").clicked() {
        *action = Some(RowAction::Edit(emp.id.clone()));
    }
    ui.add_space(4.0);
    if danger_action_button(ui, TRASH, "Delete").clicked() {
        *action = Some(RowAction::Delete(emp.id.clone()));
    }
}

fn show_cards(ui: &mut Ui, employees: &[&Employee]) -> Option<RowAction> {
    let mut action = None;
    let columns = card_columns(ui, 300.0, 3);

    for row in employees.chunks(columns) {
        ui.columns(columns, |cols| {
            for (col, emp) in cols.iter_mut().zip(row) {
                card_frame(col).show(col, |ui| {
                    ui.set_min_width(ui.available_width());

                    ui.horizontal(|ui| {
                        avatar(ui, &emp.initials(), 44.0);
                        ui.vertical(|ui| {
                            ui.label(RichText::new(&emp.name).strong());
                            ui.label(RichText::new(&emp.position).small().weak());
                        });
                        ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                            status_badge(ui, emp.status);
                        });
                    });

                    ui.add_space(8.0);
                    ui.label(RichText::new(format!("{ENVELOPE}  {}", emp.email)).small());
                    ui.add_space(4.0);
                    ui.horizontal(|ui| {
                        if let Some(dept) = emp.department {
                            outline_badge(ui, dept.label());
                        }
                        ui.label(
                            RichText::new(format!("Joined {}", emp.join_date.format("%Y-%m-%d")))
                                .small()
                                .weak(),
                        );
                    });

                    ui.add_space(8.0);
                    ui.horizontal(|ui| row_actions(ui, emp, &mut action));
                });
            }
        });
        ui.add_space(10.0);
    }

    action
}

fn show_table(ui: &mut Ui, employees: &[&Employee]) -> Option<RowAction> {
    let mut action = None;

    TableBuilder::new(ui)
        .id_salt("employees_table")
        .striped(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::auto().at_least(180.0))
        .column(Column::auto().at_least(220.0))
        .column(Column::auto().at_least(160.0))
        .column(Column::auto().at_least(120.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::remainder())
        .header(24.0, |mut header| {
            for title in ["Name", "Email", "Position", "Department", "Status", "Joined", "Actions"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for emp in employees {
                body.row(34.0, |mut row| {
                    row.col(|ui| {
                        avatar(ui, &emp.initials(), 24.0);
                        ui.label(&emp.name);
                    });
                    row.col(|ui| {
                        ui.label(&emp.email);
                    });
                    row.col(|ui| {
                        ui.label(&emp.position);
                    });
                    row.col(|ui| {
                        ui.label(emp.department.map(|d| d.label()).unwrap_or("-"));
                    });
                    row.col(|ui| status_badge(ui, emp.status));
                    row.col(|ui| {
                        ui.label(emp.join_date.format("%Y-%m-%d").to_string());
                    });
                    row.col(|ui| row_actions(ui, emp, &mut action));
                });
            }
        });

    action
}

fn show_form_dialog(app: &mut App, ctx: &egui::Context) {
    let title = if app.employee_form.is_editing() {
        "Edit Employee"
    } else {
        "Add New Employee"
    };
    let highlight = app.employee_form.show_errors;

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .default_width(450.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(10.0);

            let form = &mut app.employee_form;
            egui::Grid::new("emp_form_grid")
                .num_columns(2)
                .spacing([20.0, 10.0])
                .show(ui, |ui| {
                    field_label(ui, "Full Name", highlight && form.name_missing());
                    ui.add(
                        egui::TextEdit::singleline(&mut form.name)
                            .desired_width(250.0)
                            .hint_text("Enter full name"),
                    );
                    ui.end_row();

                    field_label(ui, "Email", highlight && form.email_invalid());
                    ui.add(
                        egui::TextEdit::singleline(&mut form.email)
                            .desired_width(250.0)
                            .hint_text("Enter email address"),
                    );
                    ui.end_row();

                    field_label(ui, "Position", highlight && form.position_missing());
                    ui.add(
                        egui::TextEdit::singleline(&mut form.position)
                            .desired_width(250.0)
                            .hint_text("Enter job position"),
                    );
                    ui.end_row();

                    ui.label("Department");
                    egui::ComboBox::from_id_salt("emp_form_dept")
                        .width(250.0)
                        .selected_text(form.department.map(|d| d.label()).unwrap_or("Select department"))
                        .show_ui(ui, |ui| {
                            for dept in Department::ALL {
                                ui.selectable_value(&mut form.department, Some(dept), dept.label());
                            }
                        });
                    ui.end_row();

                    ui.label("Status");
                    egui::ComboBox::from_id_salt("emp_form_status")
                        .width(250.0)
                        .selected_text(form.status.label())
                        .show_ui(ui, |ui| {
                            for status in EmployeeStatus::ALL {
                                ui.selectable_value(&mut form.status, status, status.label());
                            }
                        });
                    ui.end_row();
                });

            if highlight {
                ui.add_space(8.0);
                let message = if app.employee_form.email_invalid() && !app.employee_form.email_missing() {
                    "Please enter a valid email address."
                } else {
                    "Please fill in all required fields."
                };
                ui.colored_label(colors::ERROR, message);
            }

            ui.add_space(15.0);
            ui.separator();
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if styled_button(ui, "Cancel").clicked() {
                    app.employee_form.reset();
                }

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let label = if app.employee_form.is_editing() {
                        "Update Employee"
                    } else {
                        "Add Employee"
                    };
                    if primary_button_with_icon(ui, "", label).clicked() {
                        app.save_employee_form();
                    }
                });
            });
        });
}
