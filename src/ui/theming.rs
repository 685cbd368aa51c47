// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection and the resulting color scheme.
//!
//! The user picks a [`ThemeMode`]; in [`ThemeMode::System`] the platform
//! scheme decides. The selected mode is persisted under [`THEME_KEY`] as a
//! bare `"light"`, `"dark"` or `"system"` string.

use crate::storage::{KeyValueStore, StorageResult, THEME_KEY};
use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
    System,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }

    /// Parses a stored value. Surrounding whitespace and JSON quotes are tolerated.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().trim_matches('"') {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            "system" => Some(ThemeMode::System),
            _ => None,
        }
    }

    /// `System -> Light -> Dark -> System`.
    pub fn next(self) -> Self {
        match self {
            ThemeMode::System => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
        }
    }

    pub fn i18n_key(self) -> &'static str {
        match self {
            ThemeMode::Light => "settings-theme-light",
            ThemeMode::Dark => "settings-theme-dark",
            ThemeMode::System => "settings-theme-system",
        }
    }
}

/// Color scheme reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SystemScheme {
    Light,
    Dark,
    #[default]
    Unspecified,
}

impl SystemScheme {
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => SystemScheme::Light,
            Ok(dark_light::Mode::Dark) => SystemScheme::Dark,
            _ => SystemScheme::Unspecified,
        }
    }

    /// Runs [`SystemScheme::detect`] on the blocking pool; the platform
    /// query can wait on D-Bus.
    pub async fn detect_in_background() -> Self {
        Self::detect_with(Self::detect).await
    }

    async fn detect_with<F>(query: F) -> Self
    where
        F: FnOnce() -> SystemScheme + Send + 'static,
    {
        tokio::task::spawn_blocking(query)
            .await
            .unwrap_or_else(|err| {
                log::warn!("Color scheme detection failed: {err}");
                SystemScheme::Unspecified
            })
    }
}

/// Resolves a mode against the platform scheme.
///
/// An unspecified platform scheme resolves to dark.
pub fn is_dark(mode: ThemeMode, system: SystemScheme) -> bool {
    match mode {
        ThemeMode::Light => false,
        ThemeMode::Dark => true,
        ThemeMode::System => system != SystemScheme::Light,
    }
}

/// Colors of one resolved theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    pub background: Color,
    pub surface: Color,
    pub surface_secondary: Color,
    pub card: Color,
    pub overlay: Color,

    pub text: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,

    pub primary: Color,
    pub error: Color,
    pub warning: Color,
    pub success: Color,
    pub info: Color,

    pub border: Color,
    pub separator: Color,

    pub skeleton: Color,
    pub favorite: Color,
    pub offline_banner: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            background: palette::WHITE,
            surface: palette::SURFACE_LIGHT,
            surface_secondary: palette::SURFACE_SECONDARY_LIGHT,
            card: palette::WHITE,
            overlay: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            },

            text: palette::BLACK,
            text_secondary: palette::TEXT_SECONDARY_LIGHT,
            text_tertiary: palette::TEXT_TERTIARY,

            primary: palette::PRIMARY_LIGHT,
            error: palette::ERROR_LIGHT,
            warning: palette::WARNING,
            success: palette::SUCCESS_LIGHT,
            info: palette::INFO,

            border: palette::BORDER_LIGHT,
            separator: palette::SEPARATOR_LIGHT,

            skeleton: palette::SKELETON_LIGHT,
            favorite: palette::ERROR_LIGHT,
            offline_banner: palette::OFFLINE_BANNER,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            background: palette::BLACK,
            surface: palette::SURFACE_DARK,
            surface_secondary: palette::SURFACE_SECONDARY_DARK,
            card: palette::SURFACE_DARK,
            overlay: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::WHITE
            },

            text: palette::WHITE,
            text_secondary: palette::TEXT_SECONDARY_DARK,
            text_tertiary: palette::TEXT_TERTIARY,

            primary: palette::PRIMARY_DARK,
            error: palette::ERROR_DARK,
            warning: palette::WARNING,
            success: palette::SUCCESS_DARK,
            info: palette::INFO,

            border: palette::BORDER_DARK,
            separator: palette::SEPARATOR_DARK,

            skeleton: palette::SKELETON_DARK,
            favorite: palette::ERROR_DARK,
            offline_banner: palette::OFFLINE_BANNER,
        }
    }

    #[must_use]
    pub fn for_dark(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// Resolved theme: the color table plus the Iced theme built from it.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub iced: Theme,
    pub is_dark: bool,
}

impl AppTheme {
    #[must_use]
    pub fn new(dark: bool) -> Self {
        let colors = ColorScheme::for_dark(dark);
        let iced_palette = iced::theme::Palette {
            background: colors.background,
            text: colors.text,
            primary: colors.primary,
            success: colors.success,
            warning: colors.warning,
            danger: colors.error,
        };
        let name = if dark { "Gallery Dark" } else { "Gallery Light" };

        Self {
            iced: Theme::custom(name, iced_palette),
            colors,
            is_dark: dark,
        }
    }
}

/// Owns the theme mode and keeps it in sync with storage.
pub struct ThemeSelector {
    store: Arc<dyn KeyValueStore>,
    mode: ThemeMode,
    system: SystemScheme,
}

impl std::fmt::Debug for ThemeSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeSelector")
            .field("mode", &self.mode)
            .field("system", &self.system)
            .finish()
    }
}

impl ThemeSelector {
    /// Loads the stored mode. Absent, invalid or unreadable values give [`ThemeMode::Dark`].
    pub fn load(store: Arc<dyn KeyValueStore>, system: SystemScheme) -> Self {
        let mode = match store.get(THEME_KEY) {
            Ok(Some(raw)) => ThemeMode::parse(&raw).unwrap_or_else(|| {
                log::warn!("Ignoring invalid stored theme mode {raw:?}");
                ThemeMode::Dark
            }),
            Ok(None) => ThemeMode::Dark,
            Err(err) => {
                log::warn!("Cannot read stored theme mode: {err}");
                ThemeMode::Dark
            }
        };

        Self {
            store,
            mode,
            system,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn system_scheme(&self) -> SystemScheme {
        self.system
    }

    /// Records a new platform report. Returns whether the resolved theme changed.
    pub fn set_system_scheme(&mut self, system: SystemScheme) -> bool {
        let was_dark = self.is_dark();
        self.system = system;
        was_dark != self.is_dark()
    }

    pub fn is_dark(&self) -> bool {
        is_dark(self.mode, self.system)
    }

    /// Sets and persists the mode.
    ///
    /// The mode changes even if the write fails; the error is returned so the
    /// caller can report it.
    pub fn set_theme_mode(&mut self, mode: ThemeMode) -> StorageResult<()> {
        self.mode = mode;
        self.store.set(THEME_KEY, mode.as_str()).map_err(|err| {
            log::warn!("Failed to persist theme mode: {err}");
            err
        })
    }

    pub fn toggle_theme(&mut self) -> StorageResult<()> {
        self.set_theme_mode(self.mode.next())
    }

    pub fn set_dark(&mut self, dark: bool) -> StorageResult<()> {
        self.set_theme_mode(if dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        })
    }

    /// Returns to the default mode without writing (storage was wiped).
    pub fn forget(&mut self) {
        self.mode = ThemeMode::Dark;
    }

    pub fn palette(&self) -> AppTheme {
        AppTheme::new(self.is_dark())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn selector(stored: Option<&str>, system: SystemScheme) -> (ThemeSelector, Arc<MemoryStore>) {
        let mut store = MemoryStore::new();
        if let Some(value) = stored {
            store = store.with_value(THEME_KEY, value);
        }
        let store = Arc::new(store);
        (ThemeSelector::load(store.clone(), system), store)
    }

    #[tokio::test]
    async fn scheme_query_runs_on_the_blocking_pool() {
        let caller = std::thread::current().id();
        let scheme = SystemScheme::detect_with(move || {
            assert_ne!(std::thread::current().id(), caller);
            SystemScheme::Light
        })
        .await;
        assert_eq!(scheme, SystemScheme::Light);
    }

    #[test]
    fn resolution_table() {
        for system in [SystemScheme::Light, SystemScheme::Dark, SystemScheme::Unspecified] {
            assert!(!is_dark(ThemeMode::Light, system));
            assert!(is_dark(ThemeMode::Dark, system));
        }
        assert!(is_dark(ThemeMode::System, SystemScheme::Dark));
        assert!(!is_dark(ThemeMode::System, SystemScheme::Light));
        assert!(is_dark(ThemeMode::System, SystemScheme::Unspecified));
    }

    #[test]
    fn absent_or_invalid_storage_defaults_to_dark() {
        let (theme, _) = selector(None, SystemScheme::Light);
        assert_eq!(theme.mode(), ThemeMode::Dark);

        let (theme, _) = selector(Some("sepia"), SystemScheme::Light);
        assert_eq!(theme.mode(), ThemeMode::Dark);
        assert!(theme.is_dark());
    }

    #[test]
    fn stored_mode_is_restored() {
        let (theme, _) = selector(Some("system"), SystemScheme::Light);
        assert_eq!(theme.mode(), ThemeMode::System);
        assert!(!theme.is_dark());

        let (theme, _) = selector(Some("\"light\"\n"), SystemScheme::Dark);
        assert_eq!(theme.mode(), ThemeMode::Light);
    }

    #[test]
    fn toggle_cycles_and_persists() {
        let (mut theme, store) = selector(Some("system"), SystemScheme::Dark);

        let mut seen = Vec::new();
        for _ in 0..3 {
            theme.toggle_theme().unwrap();
            seen.push(store.get(THEME_KEY).unwrap().unwrap());
        }
        assert_eq!(seen, vec!["light", "dark", "system"]);
        assert_eq!(theme.mode(), ThemeMode::System);
    }

    #[test]
    fn set_dark_maps_to_explicit_modes() {
        let (mut theme, store) = selector(None, SystemScheme::Unspecified);
        theme.set_dark(false).unwrap();
        assert_eq!(theme.mode(), ThemeMode::Light);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));

        theme.set_dark(true).unwrap();
        assert_eq!(theme.mode(), ThemeMode::Dark);
    }

    #[test]
    fn write_failure_still_changes_mode() {
        let (mut theme, store) = selector(None, SystemScheme::Dark);
        store.set_read_only(true);

        assert!(theme.set_theme_mode(ThemeMode::Light).is_err());
        assert_eq!(theme.mode(), ThemeMode::Light);
    }

    #[test]
    fn system_scheme_change_reports_resolution_change() {
        let (mut theme, _) = selector(Some("system"), SystemScheme::Dark);
        assert!(theme.set_system_scheme(SystemScheme::Light));
        assert!(!theme.set_system_scheme(SystemScheme::Light));

        let (mut theme, _) = selector(Some("dark"), SystemScheme::Dark);
        assert!(!theme.set_system_scheme(SystemScheme::Light));
    }

    #[test]
    fn palette_follows_resolution() {
        let (theme, _) = selector(Some("light"), SystemScheme::Dark);
        let resolved = theme.palette();
        assert!(!resolved.is_dark);
        assert_eq!(resolved.colors, ColorScheme::light());

        let (theme, _) = selector(Some("dark"), SystemScheme::Light);
        assert_eq!(theme.palette().colors.background, palette::BLACK);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&ThemeMode::System).unwrap(), "\"system\"");
        for mode in ThemeMode::ALL {
            assert_eq!(ThemeMode::parse(mode.as_str()), Some(mode));
        }
    }
}
