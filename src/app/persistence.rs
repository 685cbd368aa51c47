// SPDX-License-Identifier: MPL-2.0
//! Configuration and session-state persistence.
//!
//! Writes are skipped under `cfg!(test)`: unit tests exercise the in-memory
//! effects and must not touch the user's config or data directories.

use super::persisted_state::AppState;
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use std::path::{Path, PathBuf};
use unic_langid::LanguageIdentifier;

/// Applies the newly selected locale and persists it to `settings.toml`.
///
/// Returns a notification key when the config could not be written.
pub fn apply_language_change(
    i18n: &mut I18n,
    config: &mut Config,
    locale: LanguageIdentifier,
) -> Option<String> {
    i18n.set_locale(locale.clone());
    config.general.language = Some(locale.to_string());

    if cfg!(test) {
        return None;
    }

    save_language(None, config.general.language.clone())
}

/// Writes `language` into the settings file below `base_dir`.
///
/// The file is reloaded so environment overrides are not written back. An
/// unreadable file is left untouched.
fn save_language(base_dir: Option<PathBuf>, language: Option<String>) -> Option<String> {
    let (mut on_disk, warning) = config::load_with_override(base_dir.clone());
    if warning.is_some() {
        log::warn!("Settings file is unreadable, not saving the language");
        return Some("notification-config-save-error".to_string());
    }

    on_disk.general.language = language;
    match config::save_with_override(&on_disk, base_dir) {
        Ok(()) => None,
        Err(err) => {
            log::warn!("Failed to save config: {err}");
            Some("notification-config-save-error".to_string())
        }
    }
}

/// Remembers the folder of a saved image for the next save dialog.
///
/// Returns a notification key when the state could not be written.
pub fn remember_save_directory(app_state: &mut AppState, saved_path: &Path) -> Option<String> {
    app_state.set_last_save_directory_from_file(saved_path);

    if cfg!(test) {
        return None;
    }
    app_state.save()
}

/// Deletes the session state file as part of "reset app".
pub fn forget_app_state(app_state: &mut AppState) {
    *app_state = AppState::default();

    if !cfg!(test) {
        AppState::remove_from(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn language_change_updates_locale_and_config() {
        let mut i18n = I18n::default();
        let mut config = Config::default();
        let fr: LanguageIdentifier = "fr".parse().expect("valid locale");

        assert_eq!(apply_language_change(&mut i18n, &mut config, fr.clone()), None);
        assert_eq!(i18n.current_locale(), &fr);
        assert_eq!(config.general.language.as_deref(), Some("fr"));
    }

    #[test]
    fn save_directory_is_remembered_and_reset() {
        let mut state = AppState::default();
        remember_save_directory(&mut state, Path::new("/tmp/photos/a.jpg"));
        assert_eq!(state.last_save_directory, Some(PathBuf::from("/tmp/photos")));

        forget_app_state(&mut state);
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn language_is_written_to_the_settings_file() {
        let dir = tempdir().expect("create temp dir");
        let mut existing = Config::default();
        existing.api.event_id = Some("evt-1".to_string());
        config::save_with_override(&existing, Some(dir.path().to_path_buf())).expect("write");

        assert_eq!(
            save_language(Some(dir.path().to_path_buf()), Some("fr".to_string())),
            None
        );

        let (saved, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(warning, None);
        assert_eq!(saved.general.language.as_deref(), Some("fr"));
        assert_eq!(saved.api.event_id.as_deref(), Some("evt-1"));
    }

    #[test]
    fn unreadable_settings_file_is_not_overwritten() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("settings.toml");
        let broken = "[api\nbase_url = \"https://gallery.example\"\n";
        fs::write(&path, broken).expect("write");

        assert_eq!(
            save_language(Some(dir.path().to_path_buf()), Some("fr".to_string())),
            Some("notification-config-save-error".to_string())
        );
        assert_eq!(fs::read_to_string(&path).expect("read"), broken);
    }
}
