//! Main application state and frame loop.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use eframe::egui::{self, Align, Align2, Color32, Layout, RichText};
use egui_phosphor::regular::{SIDEBAR_SIMPLE, USERS};
use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::export;
use crate::models::{AnalyticsData, CategoryFilter, DashboardData, SampleData};
use crate::store::{EmployeeRoster, TrainingCatalog};

use super::components::colors;
use super::forms::{EmployeeForm, SettingsForm, TrainingForm};
use super::route::Route;
use super::{analytics_panel, dashboard, employee_panel, settings_panel, training_panel};

/// How long a toast stays on screen.
const TOAST_LIFETIME: Duration = Duration::from_secs(4);

/// Sidebar widths when expanded and collapsed.
const SIDEBAR_WIDTH: f32 = 220.0;
const SIDEBAR_COLLAPSED_WIDTH: f32 = 56.0;

/// Messages from background tasks to the UI.
pub enum UiMessage {
    ExportCompleted(PathBuf),
    ExportFailed(String),
}

/// Toast style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Destructive,
}

/// Short-lived notification in the bottom-right corner.
#[derive(Clone, Debug)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub kind: ToastKind,
    pub created: Instant,
}

/// How the employee page lays out the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmployeeView {
    #[default]
    Cards,
    Table,
}

/// Target for delete confirmation dialog.
#[derive(Clone)]
pub struct DeleteTarget {
    pub id: String,
    pub name: String,
}

/// Main application state.
pub struct App {
    // Runtime for background work
    rt: tokio::runtime::Runtime,

    // Message channel for async communication
    tx: mpsc::UnboundedSender<UiMessage>,
    rx: mpsc::UnboundedReceiver<UiMessage>,

    // Navigation
    pub current_route: Route,
    pub sidebar_collapsed: bool,

    // Domain state
    pub roster: EmployeeRoster,
    pub catalog: TrainingCatalog,

    // Display-only datasets
    pub dashboard: DashboardData,
    pub analytics: AnalyticsData,

    // Employee page
    pub employee_search: String,
    pub employee_view: EmployeeView,
    pub employee_form: EmployeeForm,

    // Training page
    pub training_search: String,
    pub training_category: CategoryFilter,
    pub training_form: TrainingForm,

    // Settings page
    pub settings_form: SettingsForm,

    // Configuration
    pub config: AppConfig,

    // Dialogs and notifications
    pub show_delete_confirm: bool,
    pub delete_target: Option<DeleteTarget>,
    pub error_message: Option<String>,
    pub toasts: Vec<Toast>,
    pub is_exporting: bool,
}

impl App {
    pub fn new(
        sample: SampleData,
        config: AppConfig,
        initial_route: Route,
        startup_error: Option<String>,
        rt: tokio::runtime::Runtime,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let settings_form = SettingsForm::new(&config.settings);

        Self {
            rt,
            tx,
            rx,
            current_route: initial_route,
            sidebar_collapsed: config.window.sidebar_collapsed,
            roster: EmployeeRoster::with_employees(sample.employees),
            catalog: TrainingCatalog::with_materials(sample.training),
            dashboard: sample.dashboard,
            analytics: sample.analytics,
            employee_search: String::new(),
            employee_view: EmployeeView::default(),
            employee_form: EmployeeForm::default(),
            training_search: String::new(),
            training_category: CategoryFilter::default(),
            training_form: TrainingForm::default(),
            settings_form,
            config,
            show_delete_confirm: false,
            delete_target: None,
            error_message: startup_error,
            toasts: Vec::new(),
            is_exporting: false,
        }
    }

    /// Queue a toast notification.
    pub fn notify(&mut self, kind: ToastKind, title: impl Into<String>, description: impl Into<String>) {
        self.toasts.push(Toast {
            title: title.into(),
            description: description.into(),
            kind,
            created: Instant::now(),
        });
    }

    /// Navigate to a route.
    pub fn navigate(&mut self, route: Route) {
        if self.current_route != route {
            tracing::debug!("Navigate: {} -> {}", self.current_route.path(), route.path());
            self.current_route = route;
        }
    }

    /// Submit the employee form: edit when a record is being edited, add otherwise.
    pub fn save_employee_form(&mut self) {
        let draft = match self.employee_form.validate() {
            Ok(draft) => draft,
            Err(e) => {
                tracing::debug!("Employee form rejected: {}", e);
                self.employee_form.show_errors = true;
                return;
            }
        };

        match self.employee_form.editing_id.clone() {
            Some(id) => match self.roster.edit(&id, draft) {
                Some(emp) => {
                    let message = format!("{}'s information has been updated.", emp.name);
                    self.notify(ToastKind::Success, "Employee Updated", message);
                }
                None => {
                    self.error_message = Some(AppError::not_found(format!("employee {id}")).to_string());
                }
            },
            None => {
                let emp = self.roster.add(draft);
                let message = format!("{} has been added to the system.", emp.name);
                self.notify(ToastKind::Success, "Employee Added", message);
            }
        }

        self.employee_form.reset();
    }

    /// Ask for confirmation before removing an employee.
    pub fn request_delete(&mut self, id: &str) {
        if let Some(emp) = self.roster.get(id) {
            self.delete_target = Some(DeleteTarget {
                id: emp.id.clone(),
                name: emp.name.clone(),
            });
            self.show_delete_confirm = true;
        }
    }

    /// Execute the confirmed delete operation.
    fn confirm_delete(&mut self) {
        if let Some(target) = self.delete_target.take()
            && let Some(removed) = self.roster.remove(&target.id)
        {
            let message = format!("{} has been removed from the system.", removed.name);
            self.notify(ToastKind::Destructive, "Employee Removed", message);
        }
    }

    /// Submit the training upload form.
    pub fn save_training_form(&mut self) {
        let draft = match self.training_form.validate() {
            Ok(draft) => draft,
            Err(e) => {
                tracing::debug!("Training form rejected: {}", e);
                self.training_form.show_errors = true;
                return;
            }
        };

        let material = self.catalog.add(draft);
        let message = format!("{} has been uploaded successfully.", material.title);
        self.notify(ToastKind::Success, "Training Material Added", message);
        self.training_form.reset();
    }

    /// "Save Changes" on the settings page. Nothing is persisted.
    pub fn save_settings(&mut self) {
        self.settings_form.apply_numeric_inputs();
        tracing::debug!("Settings submitted: {:?}", self.settings_form.values);
    }

    /// Restore the settings form to the configured defaults.
    pub fn reset_settings(&mut self) {
        self.settings_form.reset(&self.config.settings);
    }

    /// Export the roster to Excel.
    pub fn export_employees(&mut self) {
        let Some(path) = export::show_save_dialog(&export::generate_export_filename("employees")) else {
            return;
        };
        let employees = self.roster.employees().to_vec();
        self.spawn_export(path, move |path| export::export_employees_to_excel(&employees, path));
    }

    /// Export the training catalog to Excel.
    pub fn export_training(&mut self) {
        let Some(path) = export::show_save_dialog(&export::generate_export_filename("training")) else {
            return;
        };
        let materials = self.catalog.materials().to_vec();
        self.spawn_export(path, move |path| export::export_training_to_excel(&materials, path));
    }

    /// Run an export on a blocking worker and report back through the channel.
    fn spawn_export<F>(&mut self, path: PathBuf, write: F)
    where
        F: FnOnce(&std::path::Path) -> Result<(), rust_xlsxwriter::XlsxError> + Send + 'static,
    {
        self.is_exporting = true;
        let tx = self.tx.clone();

        self.rt.spawn_blocking(move || match write(&path) {
            Ok(()) => {
                let _ = tx.send(UiMessage::ExportCompleted(path));
            }
            Err(e) => {
                let _ = tx.send(UiMessage::ExportFailed(AppError::from(e).to_string()));
            }
        });
    }

    /// Poll async operation results.
    fn poll_async_results(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                UiMessage::ExportCompleted(path) => {
                    self.is_exporting = false;
                    tracing::info!("Export completed: {}", path.display());
                    self.notify(ToastKind::Success, "Export Complete", format!("Saved to {}", path.display()));
                }
                UiMessage::ExportFailed(e) => {
                    self.is_exporting = false;
                    tracing::error!("Export failed: {}", e);
                    self.error_message = Some(e);
                }
            }
        }
    }

    /// Render top bar with sidebar toggle and page title.
    fn show_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").min_height(40.0).show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                let toggle = ui.button(RichText::new(SIDEBAR_SIMPLE).size(18.0));
                if toggle.on_hover_text("Toggle sidebar").clicked() {
                    self.sidebar_collapsed = !self.sidebar_collapsed;
                }
                ui.add_space(10.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new("Employee Management System").size(18.0).strong());
                    ui.label(RichText::new("Manage your workforce efficiently").small().weak());
                });
            });
        });
    }

    /// Render the navigation sidebar.
    fn show_sidebar(&mut self, ctx: &egui::Context) {
        let width = if self.sidebar_collapsed {
            SIDEBAR_COLLAPSED_WIDTH
        } else {
            SIDEBAR_WIDTH
        };

        egui::SidePanel::left("sidebar")
            .resizable(false)
            .exact_width(width)
            .show(ctx, |ui| {
                ui.add_space(15.0);

                // Brand
                ui.horizontal(|ui| {
                    super::components::icon_tile(ui, USERS, colors::PRIMARY, 32.0);
                    if !self.sidebar_collapsed {
                        ui.vertical(|ui| {
                            ui.label(RichText::new("EMS Pro").size(17.0).strong());
                            ui.label(RichText::new("Professional Edition").small().weak());
                        });
                    }
                });

                ui.add_space(25.0);

                if !self.sidebar_collapsed {
                    ui.label(RichText::new("Navigation").small().weak());
                    ui.add_space(6.0);
                }

                let mut next = None;
                for route in Route::ALL {
                    let active = route.is_active_for(self.current_route.path());
                    let text = if self.sidebar_collapsed {
                        RichText::new(route.icon()).size(18.0)
                    } else {
                        RichText::new(format!("{}   {}", route.icon(), route.title())).size(15.0)
                    };

                    let button = egui::Button::new(text)
                        .selected(active)
                        .frame(active)
                        .min_size(egui::vec2(ui.available_width(), 34.0));
                    let response = ui.add(button);
                    let response = if self.sidebar_collapsed {
                        response.on_hover_text(route.title())
                    } else {
                        response
                    };
                    if response.clicked() {
                        next = Some(route);
                    }
                    ui.add_space(4.0);
                }

                if let Some(route) = next {
                    self.navigate(route);
                }
            });
    }

    /// Render status bar (display only, no interaction).
    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(26.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format!(
                            "{} employees  |  {} training materials",
                            self.roster.len(),
                            self.catalog.len()
                        ))
                        .small()
                        .weak(),
                    );

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if self.is_exporting {
                            ui.label(RichText::new("Exporting...").small());
                            ui.spinner();
                        }
                    });
                });
            });
    }

    /// Render modal dialogs (error, delete confirmation).
    fn show_dialogs(&mut self, ctx: &egui::Context) {
        // Error dialog
        if let Some(ref error) = self.error_message.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::ERROR, error);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.error_message = None;
                    }
                });
        }

        // Delete confirmation dialog
        if self.show_delete_confirm
            && let Some(ref target) = self.delete_target.clone()
        {
            egui::Window::new("Delete Employee")
                .collapsible(false)
                .resizable(false)
                .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(format!("Delete employee '{}'?", target.name));
                    ui.add_space(10.0);
                    ui.horizontal(|ui| {
                        if ui.button("Cancel").clicked() {
                            self.show_delete_confirm = false;
                            self.delete_target = None;
                        }
                        if ui.button(RichText::new("Delete").color(colors::ERROR)).clicked() {
                            self.confirm_delete();
                            self.show_delete_confirm = false;
                            self.delete_target = None;
                        }
                    });
                });
        }
    }

    /// Render live toasts and drop expired ones.
    fn show_toasts(&mut self, ctx: &egui::Context) {
        self.toasts.retain(|t| t.created.elapsed() < TOAST_LIFETIME);
        if self.toasts.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("toasts"))
            .anchor(Align2::RIGHT_BOTTOM, [-16.0, -40.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for toast in &self.toasts {
                    let (fill, text) = match toast.kind {
                        ToastKind::Success => (ui.visuals().window_fill, ui.visuals().text_color()),
                        ToastKind::Destructive => (Color32::from_rgb(185, 28, 28), Color32::WHITE),
                    };
                    egui::Frame::popup(ui.style()).fill(fill).show(ui, |ui| {
                        ui.set_width(300.0);
                        ui.label(RichText::new(&toast.title).strong().color(text));
                        ui.label(RichText::new(&toast.description).color(text));
                    });
                    ui.add_space(6.0);
                }
            });

        ctx.request_repaint_after(Duration::from_millis(250));
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll async results
        self.poll_async_results();

        // Request repaint during async operations
        if self.is_exporting {
            ctx.request_repaint();
        }

        self.show_top_bar(ctx);
        self.show_status_bar(ctx);
        self.show_sidebar(ctx);

        // Modal dialogs (error, delete confirmation)
        self.show_dialogs(ctx);
        self.show_toasts(ctx);

        // Main content
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt(("page", self.current_route.path()))
                .auto_shrink([false, false])
                .show(ui, |ui| match self.current_route {
                    Route::Dashboard => {
                        if let Some(next) = dashboard::show(self, ui) {
                            self.navigate(next);
                        }
                    }
                    Route::Employees => employee_panel::show(self, ui),
                    Route::Training => training_panel::show(self, ui),
                    Route::Analytics => analytics_panel::show(self, ui),
                    Route::Settings => settings_panel::show(self, ui),
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::employee::{EmployeeDraft, EmployeeStatus};

    fn app() -> App {
        let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
        App::new(SampleData::load().unwrap(), AppConfig::default(), Route::Dashboard, None, rt)
    }

    #[test]
    fn test_save_employee_form_adds_when_not_editing() {
        let mut app = app();
        app.employee_form = EmployeeForm::add();
        app.employee_form.name = "Ana Lee".to_string();
        app.employee_form.email = "ana.lee@company.com".to_string();
        app.employee_form.position = "Designer".to_string();

        app.save_employee_form();

        let last = app.roster.employees().last().unwrap();
        assert_eq!(last.name, "Ana Lee");
        assert_eq!(last.status, EmployeeStatus::Active);
        assert!(!app.employee_form.is_open);
        assert_eq!(app.toasts.len(), 1);
        assert_eq!(app.toasts[0].title, "Employee Added");
    }

    #[test]
    fn test_save_employee_form_edits_target() {
        let mut app = app();
        let emp = app.roster.get("3").unwrap().clone();
        app.employee_form = EmployeeForm::edit(&emp);
        app.employee_form.position = "Design Lead".to_string();

        app.save_employee_form();

        assert_eq!(app.roster.len(), 4);
        assert_eq!(app.roster.get("3").unwrap().position, "Design Lead");
        assert_eq!(app.toasts[0].title, "Employee Updated");
    }

    #[test]
    fn test_invalid_form_stays_open() {
        let mut app = app();
        app.employee_form = EmployeeForm::add();

        app.save_employee_form();

        assert!(app.employee_form.is_open);
        assert!(app.employee_form.show_errors);
        assert_eq!(app.roster.len(), 4);
    }

    #[test]
    fn test_edit_of_removed_employee_reports_error() {
        let mut app = app();
        let id = app.roster.add(EmployeeDraft::named("Temp")).id.clone();
        let emp = app.roster.get(&id).unwrap().clone();
        app.employee_form = EmployeeForm::edit(&emp);
        app.employee_form.email = "temp@company.com".to_string();
        app.employee_form.position = "Contractor".to_string();
        app.roster.remove(&id);

        app.save_employee_form();

        let error = app.error_message.as_deref().unwrap();
        assert!(error.starts_with("Not found"), "{error}");
        assert!(error.contains(&id));
        assert_eq!(app.roster.len(), 4);
        assert!(app.toasts.is_empty());
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut app = app();
        app.request_delete("1");
        assert!(app.show_delete_confirm);
        assert_eq!(app.roster.len(), 4);

        app.confirm_delete();
        assert!(app.roster.get("1").is_none());
        assert_eq!(app.toasts[0].kind, ToastKind::Destructive);
    }

    #[test]
    fn test_save_training_form() {
        let mut app = app();
        app.training_form = TrainingForm::open();
        app.training_form.title = "Leadership 101".to_string();
        app.training_form.duration = "30 min".to_string();

        app.save_training_form();

        let last = app.catalog.materials().last().unwrap();
        assert_eq!(last.title, "Leadership 101");
        assert_eq!(last.completion_rate, 0);
        assert!(!app.training_form.is_open);
    }

    #[test]
    fn test_settings_save_changes_nothing_persistent() {
        let mut app = app();
        app.settings_form.values.company_name = "Other Corp".to_string();
        app.save_settings();
        assert_eq!(app.config.settings.company_name, "TechCorp Solutions");

        app.reset_settings();
        assert_eq!(app.settings_form.values.company_name, "TechCorp Solutions");
    }

    #[test]
    fn test_export_messages_update_state() {
        let mut app = app();
        app.is_exporting = true;
        app.tx.send(UiMessage::ExportFailed("disk full".to_string())).unwrap();

        app.poll_async_results();

        assert!(!app.is_exporting);
        assert_eq!(app.error_message.as_deref(), Some("disk full"));
    }
}
