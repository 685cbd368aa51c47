// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery screens.
//!
//! The `App` struct wires together the domains (pagination, favorites, theme,
//! network, image cache, localization) and translates messages into side
//! effects like storage writes or HTTP requests. Startup loads favorites and
//! the theme mode synchronously so the first frame already shows them.

mod handlers;
mod message;
pub mod paths;
pub mod persisted_state;
mod persistence;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;
pub use subscription::{shortcut_for, Shortcut};

use crate::config::{self, Config};
use crate::gallery::{FavoritesStore, FetchKind, HttpGallerySource, PaginationFetcher};
use crate::i18n::fluent::I18n;
use crate::media::ImageCache;
use crate::network::NetworkMonitor;
use crate::storage::{JsonFileStore, KeyValueStore, MemoryStore};
use crate::ui::favorites;
use crate::ui::masonry::ScrollMetrics;
use crate::ui::notifications::{self, Notification};
use crate::ui::settings;
use crate::ui::theming::{AppTheme, SystemScheme, ThemeMode, ThemeSelector};
use crate::ui::viewer;
use iced::{window, Element, Subscription, Task, Theme};
use persisted_state::AppState;
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    screen: Screen,
    storage: Arc<dyn KeyValueStore>,
    network: NetworkMonitor,
    source: HttpGallerySource,
    fetcher: PaginationFetcher,
    /// Kind of the last failed fetch, re-issued by "retry".
    retry_kind: Option<FetchKind>,
    favorites: FavoritesStore,
    theme: ThemeSelector,
    /// Resolved from `theme` on every mode or platform change.
    palette: AppTheme,
    cache: ImageCache,
    gallery_scroll: ScrollMetrics,
    favorites_scroll: ScrollMetrics,
    favorites_screen: favorites::State,
    settings: settings::State,
    /// Present while the full-screen viewer is open.
    viewer: Option<viewer::State>,
    /// Persisted application state (last save directory).
    app_state: AppState,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("records", &self.fetcher.records().len())
            .field("favorites", &self.favorites.len())
            .field("theme_mode", &self.theme.mode())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 560;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot function; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads config, storage and session state from disk, then starts the
    /// first page fetch and a reachability probe.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();

        let mut storage_warning = None;
        let storage: Arc<dyn KeyValueStore> = match JsonFileStore::open_default() {
            Some(store) => {
                log::debug!("Using storage at {}", store.dir().display());
                Arc::new(store)
            }
            None => {
                log::warn!("No data directory available, favorites will not persist");
                storage_warning = Some("notification-storage-unavailable".to_string());
                Arc::new(MemoryStore::new())
            }
        };

        let (app_state, state_warning) = AppState::load();
        let (mut app, task) =
            Self::from_parts(flags.lang, config, storage, SystemScheme::detect(), app_state);

        for key in [config_warning, storage_warning, state_warning]
            .into_iter()
            .flatten()
        {
            app.notifications.push(Notification::warning(key));
        }

        (app, task)
    }

    /// Builds the application from already loaded parts.
    fn from_parts(
        lang: Option<String>,
        config: Config,
        storage: Arc<dyn KeyValueStore>,
        system: SystemScheme,
        app_state: AppState,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(lang, &config);
        let mut notifications = notifications::Manager::new();

        let missing = config.api.missing_fields();
        if !missing.is_empty() {
            log::warn!("Gallery API settings missing: {}", missing.join(", "));
            notifications.push(
                Notification::warning("notification-config-missing")
                    .with_arg("fields", missing.join(", ")),
            );
        }

        let network = NetworkMonitor::new();
        let source = HttpGallerySource::new(&config.api, network.clone()).unwrap_or_else(|err| {
            log::warn!("Falling back to a default HTTP client: {err}");
            HttpGallerySource::with_client(reqwest::Client::new(), &config.api, network.clone())
        });

        let (favorites, favorites_warning) = FavoritesStore::load(storage.clone());
        if let Some(key) = favorites_warning {
            notifications.push(Notification::warning(key));
        }

        let theme = ThemeSelector::load(storage.clone(), system);
        let palette = theme.palette();

        let mut app = App {
            i18n,
            screen: Screen::Gallery,
            storage,
            network,
            source,
            fetcher: PaginationFetcher::new(),
            retry_kind: None,
            favorites,
            theme,
            palette,
            cache: ImageCache::new(config.display.image_cache_entries()),
            gallery_scroll: ScrollMetrics::default(),
            favorites_scroll: ScrollMetrics::default(),
            favorites_screen: favorites::State::default(),
            settings: settings::State::default(),
            viewer: None,
            app_state,
            notifications,
            config,
        };

        let task = Task::batch([
            update::start_fetch(&mut app.fetcher, &app.source, FetchKind::Initial),
            update::probe_network(&app.config.api),
        ]);

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        let image_title = self
            .viewer
            .as_ref()
            .filter(|_| self.screen == Screen::Viewer)
            .and_then(|viewer| viewer.current().title.clone());

        match image_title {
            Some(title) => format!("{title} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.palette.iced.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
            subscription::create_probe_subscription(self.config.network.probe_interval()),
            subscription::create_system_theme_subscription(
                self.theme.mode() == ThemeMode::System,
            ),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PageFetched { request, result } => {
                return self.handle_page_fetched(request, result)
            }
            Message::ImageFetched { url, result } => return self.handle_image_fetched(url, result),
            Message::SaveCompleted(result) => return self.handle_save_completed(result),
            Message::NetworkProbed(status) => return self.handle_network_probed(status),
            Message::SystemSchemeDetected(scheme) => {
                return self.handle_system_scheme_detected(scheme)
            }
            Message::ProbeNetwork => return update::probe_network(&self.config.api),
            Message::CheckSystemTheme => {
                return Task::perform(
                    SystemScheme::detect_in_background(),
                    Message::SystemSchemeDetected,
                )
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                return Task::none();
            }
            Message::Tick(_instant) => {
                self.notifications.tick();
                return Task::none();
            }
            _ => {}
        }

        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            config: &mut self.config,
            screen: &mut self.screen,
            storage: &self.storage,
            network: &self.network,
            source: &self.source,
            fetcher: &mut self.fetcher,
            retry_kind: &mut self.retry_kind,
            favorites: &mut self.favorites,
            theme: &mut self.theme,
            palette: &mut self.palette,
            cache: &mut self.cache,
            gallery_scroll: &mut self.gallery_scroll,
            favorites_scroll: &mut self.favorites_scroll,
            favorites_screen: &mut self.favorites_screen,
            settings: &mut self.settings,
            viewer: &mut self.viewer,
            app_state: &mut self.app_state,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::Favorites(favorites_message) => {
                update::handle_favorites_message(&mut ctx, favorites_message)
            }
            Message::Settings(settings_message) => {
                update::handle_settings_message(&mut ctx, settings_message)
            }
            Message::Viewer(viewer_message) => {
                update::handle_viewer_message(&mut ctx, viewer_message)
            }
            Message::Shortcut(shortcut) => update::handle_shortcut(&mut ctx, shortcut),
            _ => Task::none(),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            colors: &self.palette.colors,
            theme_mode: self.theme.mode(),
            fetcher: &self.fetcher,
            favorites: &self.favorites,
            cache: &self.cache,
            columns: self.config.display.grid_columns(),
            offline: self.network.is_offline(),
            gallery_scroll: self.gallery_scroll,
            favorites_scroll: self.favorites_scroll,
            favorites_screen: &self.favorites_screen,
            settings: &self.settings,
            viewer: self.viewer.as_ref(),
            event_id: self.source.event_id(),
            notifications: &self.notifications,
        })
    }
}
