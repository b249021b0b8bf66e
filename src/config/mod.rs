// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[queue]` - Toast queue sizing
//! - `[toast]` - Toast placement and display durations
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `ICED_TOAST_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.queue.capacity = 5;
//!
//! // Save to the default location
//! config::save_with_override(&config, None).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::queue::QueueCapacity;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums
// =============================================================================

/// Screen edge toasts are anchored to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    Top,
    #[default]
    Bottom,
}

// =============================================================================
// Section Structs
// =============================================================================

/// Toast queue settings. Read once at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueueConfig {
    /// Maximum number of toasts waiting behind the visible one.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

/// Toast presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ToastConfig {
    /// Screen edge the toast is shown at.
    #[serde(default)]
    pub position: ToastPosition,

    /// Override for success toast display time (seconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_secs: Option<u32>,

    /// Override for info toast display time (seconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info_secs: Option<u32>,

    /// Override for warning toast display time (seconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning_secs: Option<u32>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Toast queue settings.
    #[serde(default)]
    pub queue: QueueConfig,

    /// Toast presentation settings.
    #[serde(default)]
    pub toast: ToastConfig,
}

impl Config {
    /// Returns the validated queue capacity.
    #[must_use]
    pub fn queue_capacity(&self) -> QueueCapacity {
        QueueCapacity::new(self.queue.capacity)
    }
}

impl ToastConfig {
    /// Converts a configured seconds value into a clamped duration.
    #[must_use]
    pub fn clamp_secs(secs: u32) -> Duration {
        Duration::from_secs(u64::from(secs.clamp(MIN_TOAST_SECS, MAX_TOAST_SECS)))
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_capacity() -> usize {
    DEFAULT_QUEUE_CAPACITY
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("Settings could not be read, using defaults ({err})")),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to a custom directory, or the default one for `None`.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            queue: QueueConfig { capacity: 4 },
            toast: ToastConfig {
                position: ToastPosition::Top,
                success_secs: Some(2),
                info_secs: None,
                warning_secs: Some(8),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn default_settings_survive_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);

        save_to_path(&Config::default(), &config_path).expect("failed to save config");
        let written = fs::read_to_string(&config_path).expect("failed to read config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert!(written.contains("capacity = 10"));
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_warns_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[queue]\ncapacity = \"many\"")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_missing_file_uses_defaults_silently() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[toast]\nposition = \"top\"").expect("valid toml");
        assert_eq!(config.toast.position, ToastPosition::Top);
        assert_eq!(config.queue.capacity, DEFAULT_QUEUE_CAPACITY);
    }

    #[test]
    fn queue_capacity_is_clamped() {
        let mut config = Config::default();
        assert_eq!(config.queue_capacity().value(), DEFAULT_QUEUE_CAPACITY);

        config.queue.capacity = 0;
        assert_eq!(config.queue_capacity().value(), MIN_QUEUE_CAPACITY);

        config.queue.capacity = 5000;
        assert_eq!(config.queue_capacity().value(), MAX_QUEUE_CAPACITY);
    }

    #[test]
    fn clamp_secs_respects_bounds() {
        assert_eq!(ToastConfig::clamp_secs(0), Duration::from_secs(1));
        assert_eq!(ToastConfig::clamp_secs(4), Duration::from_secs(4));
        assert_eq!(ToastConfig::clamp_secs(600), Duration::from_secs(60));
    }
}
