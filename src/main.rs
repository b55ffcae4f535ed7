//! EMS Pro - Desktop employee management dashboard.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use ems_pro as app;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use app::config::{AppConfig, ConfigLoadResult, MIN_WINDOW_SIZE};
use app::models::SampleData;
use app::ui::{App, Route};

/// Desktop dashboard for employees, training content, and analytics.
#[derive(Parser)]
#[command(name = "ems-pro", version)]
struct Cli {
    /// Use config.toml from current directory (dev mode)
    #[arg(long)]
    dev: bool,

    /// Explicit config file path
    #[arg(long, value_name = "PATH", conflicts_with = "dev")]
    config: Option<PathBuf>,

    /// Page to open on startup, by name or path (e.g. "training" or "/training")
    #[arg(long, value_parser = Route::parse_page)]
    page: Option<Route>,
}

/// Initialize console logging, plus a daily rolling file when enabled.
///
/// The returned guard flushes the file writer and must live until exit.
fn init_logging(config: &AppConfig) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    let (file_layer, guard) = if config.logging.file_enabled {
        let appender = tracing_appender::rolling::daily(AppConfig::log_dir(), "ems-pro.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = tracing_subscriber::fmt::layer().with_writer(writer).with_ansi(false);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(file_layer)
        .init();

    guard
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Determine config path based on mode
    let config_path = match (&cli.config, cli.dev) {
        (Some(path), _) => path.clone(),
        (None, true) => PathBuf::from("config.toml"),
        (None, false) => AppConfig::default_path(),
    };

    let (config, startup_error, missing) = match AppConfig::try_load(&config_path) {
        ConfigLoadResult::Loaded(config) => (config, None, false),
        ConfigLoadResult::Missing => (AppConfig::default(), None, true),
        ConfigLoadResult::Invalid(e) => (AppConfig::default(), Some(format!("Invalid config file: {e}")), false),
    };

    let _log_guard = init_logging(&config);

    tracing::info!("EMS Pro {} starting...", env!("CARGO_PKG_VERSION"));
    if cli.dev {
        tracing::info!("Dev mode: loading config from current directory");
    }
    tracing::info!("Config path: {:?}", config_path);

    if missing {
        tracing::info!("Config missing, writing defaults");
        if let Err(e) = config.save(&config_path) {
            tracing::warn!("Could not write default config: {}", e);
        }
    } else if let Some(e) = &startup_error {
        tracing::warn!("{}, using defaults", e);
    } else {
        tracing::info!("Config loaded successfully");
    }

    let sample = SampleData::load().context("Failed to load bundled sample data")?;
    tracing::info!(
        "Loaded {} employees and {} training materials",
        sample.employees.len(),
        sample.training.len()
    );

    // Create tokio runtime for background exports
    let rt = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("EMS Pro")
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size(MIN_WINDOW_SIZE),
        ..Default::default()
    };

    let initial_route = cli.page.unwrap_or_default();

    eframe::run_native(
        "EMS Pro",
        options,
        Box::new(move |cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);

            Ok(Box::new(App::new(sample, config, initial_route, startup_error, rt)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {e}"))
}
