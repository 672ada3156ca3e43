// SPDX-License-Identifier: MPL-2.0
//! This module handles the launcher's configuration, loaded from a
//! `settings.toml` file.
//!
//! User preferences (theme, language, session) are not stored here; they
//! live in the preference store. This file only tunes how the app starts.
//!
//! # Configuration Sections
//!
//! - `[general]` - Default language
//! - `[appearance]` - Device light/dark polling
//! - `[logging]` - Log filter
//! - `[storage]` - Preference store file name
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with an explicit path
//! 2. Set `ROAMLY_CONFIG_DIR` environment variable (or `--config-dir`)
//! 3. Falls back to platform-specific config directory

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::language::Language;
use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Last-resort UI language code. Must be a supported language.
    #[serde(default = "default_language")]
    pub default_language: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
        }
    }
}

/// Appearance settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AppearanceConfig {
    /// How often to re-read the device light/dark setting.
    #[serde(default = "default_system_poll_interval_ms")]
    pub system_poll_interval_ms: u64,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            system_poll_interval_ms: DEFAULT_SYSTEM_POLL_INTERVAL_MS,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `tracing-subscriber` env-filter directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

/// Preference store settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StorageConfig {
    /// Store file name inside the data directory.
    #[serde(default = "default_store_file")]
    pub file_name: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            file_name: default_store_file(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Launcher configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub appearance: AppearanceConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

impl Config {
    /// The configured default language, or English if it is not supported.
    #[must_use]
    pub fn default_language(&self) -> Language {
        match Language::from_code(&self.general.default_language) {
            Some(language) => language,
            None => {
                tracing::warn!(
                    code = %self.general.default_language,
                    "configured default language is not supported, using {}",
                    Language::DEFAULT
                );
                Language::DEFAULT
            }
        }
    }

    /// The device poll interval, never below [`MIN_SYSTEM_POLL_INTERVAL_MS`].
    #[must_use]
    pub fn system_poll_interval(&self) -> Duration {
        Duration::from_millis(
            self.appearance
                .system_poll_interval_ms
                .max(MIN_SYSTEM_POLL_INTERVAL_MS),
        )
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_system_poll_interval_ms() -> u64 {
    DEFAULT_SYSTEM_POLL_INTERVAL_MS
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

fn default_store_file() -> String {
    DEFAULT_STORE_FILE.to_string()
}

// =============================================================================
// Config Path Resolution
// =============================================================================

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
/// default config with a warning key explaining what went wrong.
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
                    tracing::warn!(path = %path.display(), error = %err, "using default settings");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
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
// Tests
// =============================================================================
