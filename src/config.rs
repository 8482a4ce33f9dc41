//! Configuration file support for the color wheel demo.
//!
//! This module provides serialization and deserialization of demo settings.
//! Every field has a default, so a partial (or missing) file is fine.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::CONFIG_FILENAME;

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Demo configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Application name (for identification)
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// User preferences
    #[serde(default)]
    pub preferences: UserPreferences,

    /// Size of the simulated screen
    #[serde(default)]
    pub screen: ScreenConfig,

    /// Color wheel geometry and animation timing
    #[serde(default)]
    pub wheel: WheelConfig,

    /// Where the demo writes its PNG snapshots
    #[serde(default = "default_snapshot_dir")]
    pub snapshot_dir: PathBuf,
}

fn default_app_name() -> String {
    "ColorWheel".to_string()
}

fn default_snapshot_dir() -> PathBuf {
    PathBuf::from("colorwheel-snapshots")
}

/// User preferences section of the config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenConfig {
    #[serde(default = "default_screen_width")]
    pub width: f32,
    #[serde(default = "default_screen_height")]
    pub height: f32,
}

fn default_screen_width() -> f32 {
    400.0
}

fn default_screen_height() -> f32 {
    600.0
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: default_screen_width(),
            height: default_screen_height(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelConfig {
    /// Side of the popup wheel, in pixels
    #[serde(default = "default_wheel_size")]
    pub size: f32,
    /// Side of the trigger button, in pixels
    #[serde(default = "default_button_size")]
    pub button_size: f32,
    #[serde(default = "default_animation_ms")]
    pub appear_ms: u64,
    #[serde(default = "default_animation_ms")]
    pub dismiss_ms: u64,
}

fn default_wheel_size() -> f32 {
    250.0
}

fn default_button_size() -> f32 {
    60.0
}

fn default_animation_ms() -> u64 {
    200
}

impl WheelConfig {
    pub fn appear_duration(&self) -> Duration {
        Duration::from_millis(self.appear_ms)
    }

    pub fn dismiss_duration(&self) -> Duration {
        Duration::from_millis(self.dismiss_ms)
    }
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            size: default_wheel_size(),
            button_size: default_button_size(),
            appear_ms: default_animation_ms(),
            dismiss_ms: default_animation_ms(),
        }
    }
}

impl AppConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            app_name: default_app_name(),
            preferences: UserPreferences::default(),
            screen: ScreenConfig::default(),
            wheel: WheelConfig::default(),
            snapshot_dir: default_snapshot_dir(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject sizes the renderer cannot produce an image for.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sizes = [
            ("screen.width", self.screen.width),
            ("screen.height", self.screen.height),
            ("wheel.size", self.wheel.size),
            ("wheel.button_size", self.wheel.button_size),
        ];
        for (name, value) in sizes {
            if !value.is_finite() || value < 1.0 {
                return Err(ConfigError::Invalid(format!(
                    "{} must be at least 1, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Load configuration from an explicit file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> Option<PathBuf> {
        // Try to use XDG config directory, fall back to home directory
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("colorwheel").join(CONFIG_FILENAME))
        } else {
            dirs::home_dir().map(|home_dir| {
                home_dir
                    .join(".config")
                    .join("colorwheel")
                    .join(CONFIG_FILENAME)
            })
        }
    }

    /// Try to load configuration from the default path.
    /// Returns None if the file doesn't exist or can't be read.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            log::debug!("No config file found at {:?}", path);
            return None;
        }

        match Self::load(&path) {
            Ok(config) => Some(config),
            Err(e) => {
                log::warn!("Failed to load config file {:?}: {}", path, e);
                None
            }
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// I/O error when reading config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A value is out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_preserves_config() {
        let mut config = AppConfig::new();
        config.wheel.size = 320.0;
        config.preferences.log_level = LogLevel::Trace;
        let json = config.to_json().unwrap();
        assert!(json.contains("\"trace\""));
        assert_eq!(AppConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = AppConfig::from_json(r#"{ "version": 1 }"#).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.screen.width, 400.0);
        assert_eq!(config.screen.height, 600.0);
        assert_eq!(config.wheel.size, 250.0);
        assert_eq!(config.wheel.button_size, 60.0);
        assert_eq!(config.wheel.appear_duration(), Duration::from_millis(200));
        assert_eq!(config.snapshot_dir, PathBuf::from("colorwheel-snapshots"));
        assert_eq!(config.preferences.log_level, LogLevel::Info);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config =
            AppConfig::from_json(r#"{ "version": 1, "wheel": { "dismiss_ms": 50 } }"#).unwrap();
        assert_eq!(config.wheel.dismiss_duration(), Duration::from_millis(50));
        assert_eq!(config.wheel.size, 250.0);
    }

    #[test]
    fn test_newer_version_is_rejected() {
        let err = AppConfig::from_json(r#"{ "version": 99 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::VersionTooNew {
                file_version: 99,
                supported_version: CONFIG_VERSION
            }
        ));
    }

    #[test]
    fn test_invalid_sizes_are_rejected() {
        let err = AppConfig::from_json(r#"{ "version": 1, "wheel": { "size": 0.5 } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref msg) if msg.contains("wheel.size")));

        let mut config = AppConfig::new();
        config.screen.height = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(
            AppConfig::from_json("{ not json"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(LogLevel::default().to_level_filter(), log::LevelFilter::Info);
        assert_eq!(LogLevel::Warn.to_level_filter(), log::LevelFilter::Warn);
        let level: LogLevel = serde_json::from_str("\"debug\"").unwrap();
        assert_eq!(level, LogLevel::Debug);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("colorwheel-config-does-not-exist.json");
        assert!(matches!(AppConfig::load(path), Err(ConfigError::IoError(_))));
    }
}
