//! Configuration management module.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration load result.
#[derive(Debug)]
pub enum ConfigLoadResult {
    /// Config loaded successfully.
    Loaded(AppConfig),
    /// Config file missing (first run).
    Missing,
    /// Config file exists but invalid.
    Invalid(ConfigError),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Main application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub settings: SettingsDefaults,
}

/// Main window geometry and shell preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub sidebar_collapsed: bool,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Write a daily rolling log file next to the config.
    pub file_enabled: bool,
    /// Default level when RUST_LOG is not set.
    pub level: String,
}

/// Initial values of the settings form.
///
/// The form edits a copy of these; nothing is written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsDefaults {
    pub company_name: String,
    pub admin_email: String,
    pub company_address: String,
    pub auto_backup: bool,
    pub email_notifications: bool,
    pub audit_logging: bool,
    pub two_factor: bool,
    pub session_timeout: bool,
    pub session_duration_minutes: u32,
    pub data_encryption: bool,
    pub gdpr_compliance: bool,
    pub retention_days: u32,
    pub notify_new_employee: bool,
    pub notify_training_complete: bool,
    pub notify_system_maintenance: bool,
    pub alert_low_performance: bool,
    pub alert_training_overdue: bool,
    pub alert_review_reminder: bool,
}

/// Smallest window the layout still renders sensibly in.
pub const MIN_WINDOW_SIZE: [f32; 2] = [900.0, 600.0];

impl AppConfig {
    /// Get config file path in the platform config directory.
    pub fn default_path() -> PathBuf {
        ProjectDirs::from("com", "EMS Pro", "ems-pro")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
            .join("config.toml")
    }

    /// Directory for rolling log files.
    pub fn log_dir() -> PathBuf {
        ProjectDirs::from("com", "EMS Pro", "ems-pro")
            .map(|dirs| dirs.data_local_dir().join("logs"))
            .unwrap_or_else(|| PathBuf::from("logs"))
    }

    /// Attempt to load config with detailed result.
    pub fn try_load(path: &Path) -> ConfigLoadResult {
        if !path.exists() {
            return ConfigLoadResult::Missing;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml(&content) {
                Ok(config) => ConfigLoadResult::Loaded(config),
                Err(e) => ConfigLoadResult::Invalid(e),
            },
            Err(e) => ConfigLoadResult::Invalid(ConfigError::Read(e)),
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width < MIN_WINDOW_SIZE[0] || self.window.height < MIN_WINDOW_SIZE[1] {
            return Err(ConfigError::Validation(format!(
                "Window must be at least {}x{}",
                MIN_WINDOW_SIZE[0], MIN_WINDOW_SIZE[1]
            )));
        }
        if self.logging.level.parse::<tracing::Level>().is_err() {
            return Err(ConfigError::Validation(format!(
                "Unknown log level: {}",
                self.logging.level
            )));
        }
        if !self.settings.admin_email.is_empty() && !self.settings.admin_email.contains('@') {
            return Err(ConfigError::Validation("Admin email must contain '@'".to_string()));
        }
        if self.settings.session_duration_minutes < 1 {
            return Err(ConfigError::Validation(
                "Session duration must be at least 1 minute".to_string(),
            ));
        }
        if self.settings.retention_days < 1 {
            return Err(ConfigError::Validation("Data retention must be at least 1 day".to_string()));
        }
        Ok(())
    }

    /// Save configuration to file, creating the parent directory if needed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 820.0,
            sidebar_collapsed: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file_enabled: true,
            level: "info".to_string(),
        }
    }
}

impl Default for SettingsDefaults {
    fn default() -> Self {
        Self {
            company_name: "TechCorp Solutions".to_string(),
            admin_email: "admin@techcorp.com".to_string(),
            company_address: "123 Business St, Tech City, TC 12345".to_string(),
            auto_backup: true,
            email_notifications: true,
            audit_logging: true,
            two_factor: true,
            session_timeout: true,
            session_duration_minutes: 30,
            data_encryption: true,
            gdpr_compliance: true,
            retention_days: 2555,
            notify_new_employee: true,
            notify_training_complete: true,
            notify_system_maintenance: true,
            alert_low_performance: true,
            alert_training_overdue: true,
            alert_review_reminder: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = AppConfig::default();
        config.window.sidebar_collapsed = true;
        config.settings.company_name = "Acme".to_string();

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed = AppConfig::from_toml(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let parsed = AppConfig::from_toml("[window]\nwidth = 1000.0\nheight = 700.0\nsidebar_collapsed = true\n").unwrap();
        assert!(parsed.window.sidebar_collapsed);
        assert_eq!(parsed.settings, SettingsDefaults::default());
        assert_eq!(parsed.logging, LoggingConfig::default());
    }

    #[test]
    fn test_validation_window_too_small() {
        let mut config = AppConfig::default();
        config.window.width = 320.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_log_level() {
        let mut config = AppConfig::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());

        config.logging.level = "debug".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_admin_email() {
        let mut config = AppConfig::default();
        config.settings.admin_email = "admin.techcorp.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_settings_bounds() {
        let mut config = AppConfig::default();

        config.settings.session_duration_minutes = 0;
        assert!(config.validate().is_err());

        config.settings.session_duration_minutes = 30;
        config.settings.retention_days = 0;
        assert!(config.validate().is_err());

        config.settings.retention_days = 365;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = AppConfig::from_toml("[window\nwidth = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("ems-pro-missing-config-for-test.toml");
        let _ = std::fs::remove_file(&path);
        assert!(matches!(AppConfig::try_load(&path), ConfigLoadResult::Missing));
    }

    #[test]
    fn test_save_then_load() {
        let dir = std::env::temp_dir().join(format!("ems-pro-config-test-{}", std::process::id()));
        let path = dir.join("config.toml");
        let config = AppConfig::default();
        config.save(&path).unwrap();

        match AppConfig::try_load(&path) {
            ConfigLoadResult::Loaded(loaded) => assert_eq!(loaded, config),
            other => panic!("unexpected load result: {other:?}"),
        }
        let _ = std::fs::remove_dir_all(&dir);
    }
}
