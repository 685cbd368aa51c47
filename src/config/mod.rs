// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[api]` - Remote gallery endpoint, credentials and request budget
//! - `[display]` - Grid layout and image cache size
//! - `[network]` - Reachability probing
//!
//! The theme mode is *not* stored here: it lives in the key-value storage next
//! to the favorites (see [`crate::ui::theming`]).
//!
//! # Environment Overrides
//!
//! The API section can be supplied through the environment, which takes
//! precedence over the file:
//! `GALLERY_API_BASE_URL`, `GALLERY_API_KEY`, `GALLERY_EVENT_ID`.
//! Missing values are reported as a warning, never as a startup failure.
//!
//! # Examples
//!
//! ```no_run
//! use iced_gallery::config;
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Environment variable overriding `api.base_url`.
pub const ENV_API_BASE_URL: &str = "GALLERY_API_BASE_URL";

/// Environment variable overriding `api.api_key`.
pub const ENV_API_KEY: &str = "GALLERY_API_KEY";

/// Environment variable overriding `api.event_id`.
pub const ENV_EVENT_ID: &str = "GALLERY_EVENT_ID";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Remote gallery endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Endpoint URL; query parameters are appended to it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// API key sent as the `key` query parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Event whose images are listed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,

    /// Total budget for one request, in seconds.
    #[serde(
        default = "default_request_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub request_timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            event_id: None,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Returns the names of the settings that are missing or blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let blank = |value: &Option<String>| value.as_deref().is_none_or(|v| v.trim().is_empty());

        let mut missing = Vec::new();
        if blank(&self.base_url) {
            missing.push("base_url");
        }
        if blank(&self.api_key) {
            missing.push("api_key");
        }
        if blank(&self.event_id) {
            missing.push("event_id");
        }
        missing
    }

    /// Request timeout, clamped to the supported range.
    pub fn request_timeout(&self) -> Duration {
        let secs = self
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
            .clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }
}

/// Grid and cache settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Number of masonry columns.
    #[serde(
        default = "default_grid_columns",
        skip_serializing_if = "Option::is_none"
    )]
    pub grid_columns: Option<u16>,

    /// Number of decoded images kept in memory.
    #[serde(
        default = "default_image_cache_entries",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_cache_entries: Option<usize>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            grid_columns: default_grid_columns(),
            image_cache_entries: default_image_cache_entries(),
        }
    }
}

impl DisplayConfig {
    pub fn grid_columns(&self) -> u16 {
        self.grid_columns
            .unwrap_or(DEFAULT_GRID_COLUMNS)
            .clamp(MIN_GRID_COLUMNS, MAX_GRID_COLUMNS)
    }

    pub fn image_cache_entries(&self) -> usize {
        self.image_cache_entries
            .unwrap_or(DEFAULT_IMAGE_CACHE_ENTRIES)
            .clamp(MIN_IMAGE_CACHE_ENTRIES, MAX_IMAGE_CACHE_ENTRIES)
    }
}

/// Reachability probing settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkConfig {
    /// Interval between two probes, in seconds.
    #[serde(
        default = "default_probe_interval_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub probe_interval_secs: Option<u64>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            probe_interval_secs: default_probe_interval_secs(),
        }
    }
}

impl NetworkConfig {
    pub fn probe_interval(&self) -> Duration {
        let secs = self
            .probe_interval_secs
            .unwrap_or(DEFAULT_PROBE_INTERVAL_SECS)
            .clamp(MIN_PROBE_INTERVAL_SECS, MAX_PROBE_INTERVAL_SECS);
        Duration::from_secs(secs)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub network: NetworkConfig,
}

impl Config {
    /// Overlays API settings found through `lookup` (normally the process
    /// environment). Blank values are ignored.
    pub fn apply_env_overrides_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let fetch = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(url) = fetch(ENV_API_BASE_URL) {
            self.api.base_url = Some(url);
        }
        if let Some(key) = fetch(ENV_API_KEY) {
            self.api.api_key = Some(key);
        }
        if let Some(event) = fetch(ENV_EVENT_ID) {
            self.api.event_id = Some(event);
        }
    }

    /// Overlays API settings from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_env_overrides_with(|name| std::env::var(name).ok());
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_request_timeout_secs() -> Option<u64> {
    Some(DEFAULT_REQUEST_TIMEOUT_SECS)
}

fn default_grid_columns() -> Option<u16> {
    Some(DEFAULT_GRID_COLUMNS)
}

fn default_image_cache_entries() -> Option<usize> {
    Some(DEFAULT_IMAGE_CACHE_ENTRIES)
}

fn default_probe_interval_secs() -> Option<u64> {
    Some(DEFAULT_PROBE_INTERVAL_SECS)
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

/// Loads the configuration from the default path, then applies environment
/// overrides.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning i18n key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    let (mut config, warning) = load_with_override(None);
    config.apply_env_overrides();
    (config, warning)
}

/// Loads the configuration from a custom directory. No environment overrides.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("Ignoring unreadable config {}: {err}", path.display());
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
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
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
