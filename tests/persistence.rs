// SPDX-License-Identifier: MPL-2.0
//! Favorites, theme mode and settings surviving a restart.

use iced_gallery::app::persisted_state::AppState;
use iced_gallery::config::{self, Config};
use iced_gallery::gallery::source::sample_records;
use iced_gallery::gallery::FavoritesStore;
use iced_gallery::i18n::fluent::I18n;
use iced_gallery::storage::{self, JsonFileStore, KeyValueStore, FAVORITES_KEY, THEME_KEY};
use iced_gallery::ui::theming::{SystemScheme, ThemeMode, ThemeSelector};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::tempdir;

fn file_store(dir: &std::path::Path) -> Arc<dyn KeyValueStore> {
    Arc::new(JsonFileStore::new(dir.join("storage")))
}

#[test]
fn favorites_survive_a_restart_in_insertion_order() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let records = sample_records("r", 3);

    {
        let (mut favorites, warning) = FavoritesStore::load(file_store(dir.path()));
        assert_eq!(warning, None);
        favorites.toggle_favorite(&records[2]).expect("write");
        favorites.toggle_favorite(&records[0]).expect("write");
        favorites.toggle_favorite(&records[1]).expect("write");
        favorites.toggle_favorite(&records[0]).expect("write");
    }

    let (favorites, warning) = FavoritesStore::load(file_store(dir.path()));
    assert_eq!(warning, None);
    let ids: Vec<&str> = favorites.favorites().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["r2", "r1"]);
}

#[test]
fn corrupt_favorites_file_loads_empty_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let store = file_store(dir.path());
    store.set(FAVORITES_KEY, "{not json").expect("write");

    let (favorites, warning) = FavoritesStore::load(store);
    assert!(favorites.is_empty());
    assert!(warning.is_some());
}

#[test]
fn theme_mode_survives_a_restart() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut theme = ThemeSelector::load(file_store(dir.path()), SystemScheme::Light);
    assert_eq!(theme.mode(), ThemeMode::Dark);
    theme.set_theme_mode(ThemeMode::System).expect("write");

    let theme = ThemeSelector::load(file_store(dir.path()), SystemScheme::Light);
    assert_eq!(theme.mode(), ThemeMode::System);
    assert!(!theme.is_dark());
}

#[test]
fn clear_all_removes_every_key() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let store = file_store(dir.path());
    store.set(FAVORITES_KEY, "[]").expect("write");
    store.set(THEME_KEY, "light").expect("write");

    storage::clear_all(store.as_ref())
        .into_result()
        .expect("clear");

    assert_eq!(store.get(FAVORITES_KEY).expect("read"), None);
    assert_eq!(store.get(THEME_KEY).expect("read"), None);
    // Clearing again is not an error.
    storage::clear_all(store.as_ref())
        .into_result()
        .expect("clear twice");
}

#[test]
fn session_state_round_trips_through_data_dir() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let base = Some(dir.path().to_path_buf());

    let mut state = AppState::default();
    state.set_last_save_directory_from_file(&dir.path().join("pictures").join("a.jpg"));
    assert_eq!(state.save_to(base.clone()), None);

    let (loaded, warning) = AppState::load_from(base.clone());
    assert_eq!(warning, None);
    assert_eq!(loaded.last_save_directory, Some(dir.path().join("pictures")));

    AppState::remove_from(base.clone());
    let (loaded, _) = AppState::load_from(base);
    assert_eq!(loaded, AppState::default());
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path: PathBuf = dir.path().join("settings.toml");

    let mut initial = Config::default();
    initial.general.language = Some("en-US".to_string());
    config::save_to_path(&initial, &config_path).expect("Failed to write initial config file");

    let loaded = config::load_from_path(&config_path).expect("load");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
    assert_eq!(i18n.tr("tab-gallery"), "Gallery");

    let mut french = loaded.clone();
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &config_path).expect("write");

    let loaded = config::load_from_path(&config_path).expect("load");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("tab-gallery"), "Galerie");

    // The CLI wins over the file.
    let i18n = I18n::new(Some("en-US".to_string()), &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn api_section_round_trips_and_env_overrides_it() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");
    fs::write(
        &config_path,
        r#"
[api]
base_url = "https://gallery.example/api/list"
event_id = "from-file"

[display]
grid_columns = 4
"#,
    )
    .expect("write");

    let mut config = config::load_from_path(&config_path).expect("load");
    assert_eq!(config.display.grid_columns(), 4);
    assert_eq!(config.api.missing_fields(), ["api_key"]);

    config.apply_env_overrides_with(|name| match name {
        config::ENV_API_KEY => Some("env-key".to_string()),
        config::ENV_EVENT_ID => Some("   ".to_string()),
        _ => None,
    });
    assert_eq!(config.api.api_key.as_deref(), Some("env-key"));
    assert_eq!(config.api.event_id.as_deref(), Some("from-file"));
    assert!(config.api.missing_fields().is_empty());
}

#[test]
fn unreadable_config_falls_back_to_defaults_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[display\ngrid_columns = ").expect("write");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}
