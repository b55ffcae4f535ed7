//! GUI panels and application state.

pub mod analytics_panel;
pub mod app;
pub mod components;
pub mod dashboard;
pub mod employee_panel;
pub mod forms;
pub mod route;
pub mod settings_panel;
pub mod training_panel;

pub use app::App;
pub use route::Route;
