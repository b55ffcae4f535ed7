//! Training content catalog: browse, filter, and upload materials.

use eframe::egui::{self, Align, Layout, RichText, Ui};
use egui_phosphor::regular::{CLOCK, FILE_TEXT, FILE_XLS, MAGNIFYING_GLASS, QUESTION, UPLOAD_SIMPLE, VIDEO};

use crate::models::training::{CategoryFilter, MaterialType, TrainingCategory, TrainingMaterial};

use super::app::App;
use super::components::{
    badge, card_columns, card_frame, colors, empty_state, field_label, icon_tile, outline_badge, panel_header,
    primary_button_with_icon, styled_button, styled_button_with_icon,
};
use super::forms::TrainingForm;

fn type_icon(material_type: MaterialType) -> &'static str {
    match material_type {
        MaterialType::Video => VIDEO,
        MaterialType::Document => FILE_TEXT,
        MaterialType::Quiz => QUESTION,
    }
}

fn type_color(material_type: MaterialType) -> egui::Color32 {
    match material_type {
        MaterialType::Video => colors::ERROR,
        MaterialType::Document => colors::INFO,
        MaterialType::Quiz => colors::SUCCESS,
    }
}

/// Show the training panel.
pub fn show(app: &mut App, ui: &mut Ui) {
    panel_header(ui, "Training Content", "Manage training materials and track progress");

    ui.horizontal(|ui| {
        if primary_button_with_icon(ui, UPLOAD_SIMPLE, "Upload Content").clicked() {
            app.training_form = TrainingForm::open();
        }

        ui.add_space(10.0);

        ui.add_enabled_ui(!app.is_exporting, |ui| {
            if styled_button_with_icon(ui, FILE_XLS, "Export to Excel").clicked() {
                app.export_training();
            }
        });
    });

    ui.add_space(10.0);

    // Search and category filter
    ui.horizontal(|ui| {
        ui.label(MAGNIFYING_GLASS);
        ui.add(
            egui::TextEdit::singleline(&mut app.training_search)
                .desired_width(320.0)
                .hint_text("Search training materials..."),
        );

        ui.add_space(20.0);

        egui::ComboBox::from_id_salt("training_category_filter")
            .width(180.0)
            .selected_text(app.training_category.label())
            .show_ui(ui, |ui| {
                for option in CategoryFilter::options() {
                    ui.selectable_value(&mut app.training_category, option, option.label());
                }
            });

        if (!app.training_search.is_empty() || app.training_category != CategoryFilter::All)
            && styled_button(ui, "Clear").clicked()
        {
            app.training_search.clear();
            app.training_category = CategoryFilter::All;
        }
    });

    ui.add_space(15.0);

    let filtered = app.catalog.filter(&app.training_search, app.training_category);
    if filtered.is_empty() {
        empty_state(ui, "No training materials found matching your criteria.");
    } else {
        let columns = card_columns(ui, 300.0, 3);
        for row in filtered.chunks(columns) {
            ui.columns(columns, |cols| {
                for (col, material) in cols.iter_mut().zip(row) {
                    material_card(col, material);
                }
            });
            ui.add_space(10.0);
        }
    }

    if app.training_form.is_open {
        show_upload_dialog(app, ui.ctx());
    }
}

fn material_card(ui: &mut Ui, material: &TrainingMaterial) {
    card_frame(ui).show(ui, |ui| {
        ui.set_min_width(ui.available_width());

        ui.horizontal(|ui| {
            icon_tile(ui, type_icon(material.material_type), type_color(material.material_type), 36.0);
            ui.vertical(|ui| {
                ui.label(RichText::new(&material.title).strong());
                if let Some(category) = material.category {
                    outline_badge(ui, category.as_str());
                }
            });
            ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                badge(ui, material.material_type.label(), type_color(material.material_type), egui::Color32::WHITE);
            });
        });

        ui.add_space(8.0);
        ui.label(RichText::new(&material.description).small().weak());
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("{CLOCK} {}", material.duration)).small());
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(
                    RichText::new(format!("Uploaded {}", material.upload_date.format("%Y-%m-%d")))
                        .small()
                        .weak(),
                );
            });
        });

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new("Completion Rate").small());
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(RichText::new(format!("{}%", material.completion_rate)).small().strong());
            });
        });
        ui.add(egui::ProgressBar::new(material.completion_fraction()).desired_height(6.0));

        ui.add_space(8.0);
        ui.add_enabled_ui(material.content_url.is_some(), |ui| {
            let button = ui.add_sized([ui.available_width(), 28.0], egui::Button::new("View Content"));
            if button.clicked()
                && let Some(url) = &material.content_url
            {
                tracing::debug!("Opening training content: {}", url);
                ui.ctx().open_url(egui::OpenUrl::new_tab(url));
            }
        });
    });
}

fn show_upload_dialog(app: &mut App, ctx: &egui::Context) {
    let highlight = app.training_form.show_errors;

    egui::Window::new("Upload Training Material")
        .collapsible(false)
        .resizable(false)
        .default_width(480.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(10.0);

            let form = &mut app.training_form;
            egui::Grid::new("training_form_grid")
                .num_columns(2)
                .spacing([20.0, 10.0])
                .show(ui, |ui| {
                    field_label(ui, "Title", highlight && form.title_missing());
                    ui.add(
                        egui::TextEdit::singleline(&mut form.title)
                            .desired_width(280.0)
                            .hint_text("Enter training title"),
                    );
                    ui.end_row();

                    ui.label("Description");
                    ui.add(
                        egui::TextEdit::multiline(&mut form.description)
                            .desired_width(280.0)
                            .desired_rows(3)
                            .hint_text("Describe the training content"),
                    );
                    ui.end_row();

                    ui.label("Type");
                    egui::ComboBox::from_id_salt("training_form_type")
                        .width(280.0)
                        .selected_text(form.material_type.label())
                        .show_ui(ui, |ui| {
                            for material_type in MaterialType::ALL {
                                ui.selectable_value(&mut form.material_type, material_type, material_type.label());
                            }
                        });
                    ui.end_row();

                    ui.label("Category");
                    egui::ComboBox::from_id_salt("training_form_category")
                        .width(280.0)
                        .selected_text(form.category.map(|c| c.as_str()).unwrap_or("Select category"))
                        .show_ui(ui, |ui| {
                            for category in TrainingCategory::ALL {
                                ui.selectable_value(&mut form.category, Some(category), category.as_str());
                            }
                        });
                    ui.end_row();

                    field_label(ui, "Duration", highlight && form.duration_missing());
                    ui.add(
                        egui::TextEdit::singleline(&mut form.duration)
                            .desired_width(280.0)
                            .hint_text("e.g., 30 min"),
                    );
                    ui.end_row();

                    ui.label("Content URL");
                    ui.add(
                        egui::TextEdit::singleline(&mut form.content_url)
                            .desired_width(280.0)
                            .hint_text("Optional"),
                    );
                    ui.end_row();
                });

            if highlight {
                ui.add_space(8.0);
                ui.colored_label(colors::ERROR, "Please fill in all required fields.");
            }

            ui.add_space(15.0);
            ui.separator();
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if styled_button(ui, "Cancel").clicked() {
                    app.training_form.reset();
                }

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if primary_button_with_icon(ui, "", "Upload Content").clicked() {
                        app.save_training_form();
                    }
                });
            });
        });
}
