//! Settings panel for company, security, and notification preferences.

use eframe::egui::{self, RichText, Ui};
use egui_phosphor::regular::{ARROW_COUNTER_CLOCKWISE, FLOPPY_DISK};

use super::app::App;
use super::components::{colors, panel_header, primary_button_with_icon, styled_button_with_icon};

/// Keep only ASCII digits. Returns true if the text changed.
fn digits_only(text: &mut String) -> bool {
    let before = text.len();
    text.retain(|c| c.is_ascii_digit());
    text.len() != before
}

/// Text input for a whole-number setting.
fn numeric_input(ui: &mut Ui, text: &mut String) -> bool {
    let changed = ui.add(egui::TextEdit::singleline(text).desired_width(120.0)).changed();
    if changed {
        digits_only(text);
    }
    changed
}

/// Toggle row with a title and a one-line description.
fn toggle_row(ui: &mut Ui, value: &mut bool, title: &str, description: &str) {
    ui.vertical(|ui| {
        ui.label(title);
        ui.label(RichText::new(description).small().weak());
    });
    ui.checkbox(value, "");
    ui.end_row();
}

/// Show the settings panel.
pub fn show(app: &mut App, ui: &mut Ui) {
    panel_header(ui, "Settings", "Manage your system preferences and configuration");

    let mut numbers_changed = false;
    let mut export_requested = false;
    let exporting = app.is_exporting;

    ui.columns(2, |cols| {
        let form = &mut app.settings_form;

        // General Settings
        cols[0].group(|ui| {
            ui.set_min_width(ui.available_width());
            ui.heading("General Settings");
            ui.add_space(5.0);

            egui::Grid::new("general_settings_grid")
                .num_columns(2)
                .spacing([10.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Company Name:");
                    ui.text_edit_singleline(&mut form.values.company_name);
                    ui.end_row();

                    ui.label("Admin Email:");
                    ui.text_edit_singleline(&mut form.values.admin_email);
                    ui.end_row();

                    ui.label("Company Address:");
                    ui.add(egui::TextEdit::multiline(&mut form.values.company_address).desired_rows(2));
                    ui.end_row();
                });

            ui.add_space(8.0);
            egui::Grid::new("general_toggles_grid")
                .num_columns(2)
                .spacing([40.0, 8.0])
                .show(ui, |ui| {
                    toggle_row(ui, &mut form.values.auto_backup, "Automatic Backups", "Daily system backups");
                    toggle_row(
                        ui,
                        &mut form.values.email_notifications,
                        "Email Notifications",
                        "Send system notifications via email",
                    );
                    toggle_row(ui, &mut form.values.audit_logging, "Audit Logging", "Track all system changes");
                });
        });

        // System Information
        cols[1].group(|ui| {
            ui.set_min_width(ui.available_width());
            ui.heading("System Information");
            ui.add_space(5.0);

            egui::Grid::new("system_info_grid")
                .num_columns(2)
                .spacing([20.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Version:");
                    ui.label(RichText::new(env!("CARGO_PKG_VERSION")).weak());
                    ui.end_row();

                    ui.label("Database Status:");
                    ui.label(RichText::new("Connected").color(colors::SUCCESS));
                    ui.end_row();

                    ui.label("Last Backup:");
                    ui.label(RichText::new("2 hours ago").weak());
                    ui.end_row();

                    ui.label("Storage Used:");
                    ui.label(RichText::new("2.3 GB").weak());
                    ui.end_row();
                });

            ui.add_space(8.0);
            ui.separator();
            ui.add_space(4.0);

            ui.label(RichText::new("Quick Actions").strong());
            ui.add_space(4.0);
            let width = ui.available_width();
            ui.add_enabled_ui(!exporting, |ui| {
                if ui.add_sized([width, 26.0], egui::Button::new("Export Employee Data")).clicked() {
                    export_requested = true;
                }
            });
            if ui.add_sized([width, 26.0], egui::Button::new("Generate System Report")).clicked() {
                tracing::debug!("System report requested");
            }
            if ui.add_sized([width, 26.0], egui::Button::new("Clear Cache")).clicked() {
                tracing::debug!("Cache clear requested");
            }
        });
    });

    ui.add_space(15.0);

    ui.columns(2, |cols| {
        let form = &mut app.settings_form;

        // Security
        cols[0].group(|ui| {
            ui.set_min_width(ui.available_width());
            ui.heading("Security Settings");
            ui.add_space(5.0);

            egui::Grid::new("security_settings_grid")
                .num_columns(2)
                .spacing([40.0, 8.0])
                .show(ui, |ui| {
                    toggle_row(
                        ui,
                        &mut form.values.two_factor,
                        "Two-Factor Authentication",
                        "Require 2FA for all admin accounts",
                    );
                    toggle_row(
                        ui,
                        &mut form.values.session_timeout,
                        "Session Timeout",
                        "Auto logout after inactivity",
                    );

                    ui.label("Session Duration (minutes):");
                    numbers_changed |= numeric_input(ui, &mut form.session_duration_input);
                    ui.end_row();

                    toggle_row(
                        ui,
                        &mut form.values.data_encryption,
                        "Data Encryption",
                        "Encrypt sensitive employee data",
                    );
                    toggle_row(
                        ui,
                        &mut form.values.gdpr_compliance,
                        "GDPR Compliance",
                        "Enable GDPR data protection features",
                    );

                    ui.label("Data Retention (days):");
                    numbers_changed |= numeric_input(ui, &mut form.retention_days_input);
                    ui.end_row();
                });
        });

        // Notifications
        cols[1].group(|ui| {
            ui.set_min_width(ui.available_width());
            ui.heading("Notification Preferences");
            ui.add_space(5.0);

            ui.label(RichText::new("Email Notifications").strong());
            ui.checkbox(&mut form.values.notify_new_employee, "New employee registrations");
            ui.checkbox(&mut form.values.notify_training_complete, "Training completions");
            ui.checkbox(&mut form.values.notify_system_maintenance, "System maintenance");

            ui.add_space(8.0);
            ui.label(RichText::new("System Alerts").strong());
            ui.checkbox(&mut form.values.alert_low_performance, "Low performance alerts");
            ui.checkbox(&mut form.values.alert_training_overdue, "Overdue training reminders");
            ui.checkbox(&mut form.values.alert_review_reminder, "Performance review reminders");
        });
    });

    if numbers_changed {
        app.settings_form.apply_numeric_inputs();
    }
    if export_requested {
        app.export_employees();
    }

    ui.add_space(20.0);

    // Action buttons
    ui.horizontal(|ui| {
        if primary_button_with_icon(ui, FLOPPY_DISK, "Save Changes").clicked() {
            app.save_settings();
        }

        ui.add_space(10.0);

        if styled_button_with_icon(ui, ARROW_COUNTER_CLOCKWISE, "Reset to Defaults").clicked() {
            app.reset_settings();
        }

        if app.settings_form.values != app.config.settings {
            ui.label(RichText::new("(modified)").color(colors::WARNING).italics());
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_only_strips_other_characters() {
        let mut text = "3a0".to_string();
        assert!(digits_only(&mut text));
        assert_eq!(text, "30");

        let mut clean = "2555".to_string();
        assert!(!digits_only(&mut clean));
        assert_eq!(clean, "2555");
    }
}
