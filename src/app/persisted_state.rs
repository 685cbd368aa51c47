// SPDX-License-Identifier: MPL-2.0
//! Session state persisted in CBOR next to the key-value storage.
//!
//! Unlike `settings.toml`, nothing here is meant to be edited by hand. The
//! file only remembers small conveniences between runs, such as the folder
//! the last image was saved to.

use super::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

const STATE_FILE: &str = "state.cbor";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Initial directory of the next "Save image" dialog.
    #[serde(default)]
    pub last_save_directory: Option<PathBuf>,
}

impl AppState {
    /// Loads the state from the default data directory.
    ///
    /// Never fails: a missing file yields the default state, an unreadable or
    /// corrupt one yields the default state plus a notification key.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        let file = match fs::File::open(&path) {
            Ok(file) => file,
            Err(err) => {
                log::warn!("Cannot open {}: {err}", path.display());
                return (
                    Self::default(),
                    Some("notification-state-read-error".to_string()),
                );
            }
        };

        match ciborium::from_reader(BufReader::new(file)) {
            Ok(state) => (state, None),
            Err(err) => {
                log::warn!("Discarding corrupt {}: {err}", path.display());
                (
                    Self::default(),
                    Some("notification-state-parse-error".to_string()),
                )
            }
        }
    }

    /// Saves the state to the default data directory.
    ///
    /// Returns a notification key when the write failed.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return Some("notification-state-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("notification-state-write-error".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                if ciborium::into_writer(self, BufWriter::new(file)).is_err() {
                    return Some("notification-state-write-error".to_string());
                }
                None
            }
            Err(_) => Some("notification-state-write-error".to_string()),
        }
    }

    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }

    /// Remembers the folder of a saved file. Paths without a parent are ignored.
    pub fn set_last_save_directory_from_file(&mut self, file_path: &Path) {
        if let Some(parent) = file_path.parent() {
            self.last_save_directory = Some(parent.to_path_buf());
        }
    }

    /// Removes the state file from the given data directory, if any.
    pub fn remove_from(base_dir: Option<PathBuf>) {
        if let Some(path) = Self::state_file_path_with_override(base_dir) {
            if path.exists() {
                if let Err(err) = fs::remove_file(&path) {
                    log::warn!("Cannot remove {}: {err}", path.display());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn set_last_save_directory_extracts_parent() {
        let mut state = AppState::default();
        state.set_last_save_directory_from_file(Path::new("/home/user/Pictures/photo.jpg"));
        assert_eq!(
            state.last_save_directory,
            Some(PathBuf::from("/home/user/Pictures"))
        );
    }

    #[test]
    fn set_last_save_directory_ignores_root() {
        let mut state = AppState::default();
        state.set_last_save_directory_from_file(Path::new("/"));
        assert!(state.last_save_directory.is_none());
    }

    #[test]
    fn save_to_and_load_from_custom_directory() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().join("nested");

        let original = AppState {
            last_save_directory: Some(PathBuf::from("/srv/exports")),
        };
        assert!(original.save_to(Some(base_dir.clone())).is_none());
        assert!(base_dir.join(STATE_FILE).exists());

        let (loaded, warning) = AppState::load_from(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded, original);
    }

    #[test]
    fn load_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("create temp dir");
        let (state, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn load_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("create temp dir");
        fs::write(temp_dir.path().join(STATE_FILE), "not cbor at all").expect("write");

        let (state, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert_eq!(warning.as_deref(), Some("notification-state-parse-error"));
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn remove_from_deletes_state_file() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        AppState::default().save_to(Some(base_dir.clone()));

        AppState::remove_from(Some(base_dir.clone()));
        assert!(!base_dir.join(STATE_FILE).exists());
    }
}
