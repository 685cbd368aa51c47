// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`ICED_GALLERY_DATA_DIR`, `ICED_GALLERY_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate
//!
//! The data directory holds the key-value storage (favorites, theme preference)
//! and the CBOR application state. The config directory holds `settings.toml`.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "IcedGallery";

/// Sub-directory of the data directory holding one file per storage key.
const STORAGE_SUBDIR: &str = "storage";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "ICED_GALLERY_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_GALLERY_CONFIG_DIR";

/// CLI overrides captured once at startup.
#[derive(Debug, Default)]
struct CliOverrides {
    data_dir: Option<PathBuf>,
    config_dir: Option<PathBuf>,
}

static CLI_OVERRIDES: OnceLock<CliOverrides> = OnceLock::new();

/// Records the `--data-dir` / `--config-dir` CLI arguments.
///
/// Only the first call has an effect; later calls are ignored with a warning
/// so that a stray second initialization cannot redirect storage mid-session.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    let overrides = CliOverrides {
        data_dir: data_dir.map(PathBuf::from),
        config_dir: config_dir.map(PathBuf::from),
    };
    if CLI_OVERRIDES.set(overrides).is_err() {
        log::warn!("CLI path overrides already initialized; ignoring second call");
    }
}

/// Which application directory is being resolved.
#[derive(Debug, Clone, Copy)]
enum DirKind {
    Data,
    Config,
}

impl DirKind {
    fn env_var(self) -> &'static str {
        match self {
            DirKind::Data => ENV_DATA_DIR,
            DirKind::Config => ENV_CONFIG_DIR,
        }
    }

    fn cli_override(self) -> Option<PathBuf> {
        let overrides = CLI_OVERRIDES.get()?;
        match self {
            DirKind::Data => overrides.data_dir.clone(),
            DirKind::Config => overrides.config_dir.clone(),
        }
    }

    fn platform_base(self) -> Option<PathBuf> {
        match self {
            DirKind::Data => dirs::data_dir(),
            DirKind::Config => dirs::config_dir(),
        }
    }
}

fn resolve(kind: DirKind, override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = kind.cli_override() {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(kind.env_var()) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    kind.platform_base().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the application data directory path.
///
/// - Linux: `~/.local/share/IcedGallery/`
/// - macOS: `~/Library/Application Support/IcedGallery/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\IcedGallery\`
///
/// Returns `None` if the data directory cannot be determined (rare edge case).
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Returns the application data directory path with an optional override.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(DirKind::Data, override_path)
}

/// Returns the application config directory path (where `settings.toml` lives).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(DirKind::Config, override_path)
}

/// Returns the directory of the key-value storage, below the data directory.
pub fn get_storage_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    get_app_data_dir_with_override(override_path).map(|mut path| {
        path.push(STORAGE_SUBDIR);
        path
    })
}
