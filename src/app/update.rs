// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Component messages are translated here into fetcher transitions, favorites
//! and theme mutations, and the asynchronous tasks they require.

use super::persisted_state::AppState;
use super::subscription::Shortcut;
use super::{persistence, Message, Screen};
use crate::config::{
    ApiConfig, Config, PREVIEW_MARGIN, PROBE_TIMEOUT_SECS, VIEWER_PREFETCH_RADIUS,
};
use crate::gallery::client::download_bytes;
use crate::gallery::{
    FavoritesStore, FetchKind, GallerySource, HttpGallerySource, ImageRecord, PaginationFetcher,
};
use crate::i18n::fluent::I18n;
use crate::media::save::{save_record, DialogLabels};
use crate::media::ImageCache;
use crate::network::{self, NetworkMonitor};
use crate::storage::{self, KeyValueStore, StorageResult, FAVORITES_KEY, THEME_KEY};
use crate::ui::favorites::{self, Event as FavoritesEvent};
use crate::ui::gallery;
use crate::ui::grid::{self, FAVORITES_SCROLL_ID, GALLERY_SCROLL_ID};
use crate::ui::masonry::ScrollMetrics;
use crate::ui::navbar;
use crate::ui::notifications::{self, Notification};
use crate::ui::settings::{self, Event as SettingsEvent};
use crate::ui::theming::{AppTheme, ThemeSelector};
use crate::ui::viewer::{self, Event as ViewerEvent, Origin};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::sync::Arc;
use std::time::Duration;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub config: &'a mut Config,
    pub screen: &'a mut Screen,
    pub storage: &'a Arc<dyn KeyValueStore>,
    pub network: &'a NetworkMonitor,
    pub source: &'a HttpGallerySource,
    pub fetcher: &'a mut PaginationFetcher,
    pub retry_kind: &'a mut Option<FetchKind>,
    pub favorites: &'a mut FavoritesStore,
    pub theme: &'a mut ThemeSelector,
    pub palette: &'a mut AppTheme,
    pub cache: &'a mut ImageCache,
    pub gallery_scroll: &'a mut ScrollMetrics,
    pub favorites_scroll: &'a mut ScrollMetrics,
    pub favorites_screen: &'a mut favorites::State,
    pub settings: &'a mut settings::State,
    pub viewer: &'a mut Option<viewer::State>,
    pub app_state: &'a mut AppState,
    pub notifications: &'a mut notifications::Manager,
}

impl UpdateContext<'_> {
    /// Thumbnails for the part of the current screen's grid that is on screen.
    fn visible_previews(&mut self) -> Task<Message> {
        let (records, scroll) = match *self.screen {
            Screen::Gallery => (self.fetcher.records(), *self.gallery_scroll),
            Screen::Favorites => (self.favorites.favorites(), *self.favorites_scroll),
            Screen::Settings | Screen::Viewer => return Task::none(),
        };
        request_previews(self.cache, self.source, self.network, records, scroll)
    }

    fn viewer_prefetch(&mut self) -> Task<Message> {
        match self.viewer.as_ref() {
            Some(state) => prefetch_viewer(self.cache, self.source, self.network, state),
            None => Task::none(),
        }
    }
}

// =============================================================================
// Tasks
// =============================================================================

/// Begins a fetch of `kind` and performs it. Nothing happens when the fetcher
/// refuses (a request is in flight, or there is no next page).
pub fn start_fetch(
    fetcher: &mut PaginationFetcher,
    source: &HttpGallerySource,
    kind: FetchKind,
) -> Task<Message> {
    let Some(request) = fetcher.begin(kind) else {
        return Task::none();
    };

    let source = source.clone();
    Task::perform(
        async move { source.fetch_page(request.page, request.page_size).await },
        move |result| Message::PageFetched { request, result },
    )
}

/// Downloads every URL of `urls` the cache does not have yet.
pub fn download_images<'r>(
    cache: &mut ImageCache,
    source: &HttpGallerySource,
    network: &NetworkMonitor,
    urls: impl IntoIterator<Item = &'r str>,
) -> Task<Message> {
    if network.is_offline() {
        return Task::none();
    }

    let tasks: Vec<Task<Message>> = urls
        .into_iter()
        .filter(|url| !url.is_empty() && cache.request(url))
        .map(|url| {
            let client = source.client().clone();
            let network = network.clone();
            let url = url.to_string();
            Task::perform(
                async move {
                    let result = download_bytes(&client, &network, &url).await;
                    (url, result)
                },
                |(url, result)| Message::ImageFetched { url, result },
            )
        })
        .collect();

    Task::batch(tasks)
}

/// Thumbnails of the records estimated to be on screen.
pub fn request_previews(
    cache: &mut ImageCache,
    source: &HttpGallerySource,
    network: &NetworkMonitor,
    records: &[ImageRecord],
    scroll: ScrollMetrics,
) -> Task<Message> {
    let range = scroll.visible_range(records.len(), PREVIEW_MARGIN);
    let visible = records.get(range).unwrap_or_default();
    download_images(cache, source, network, visible.iter().map(ImageRecord::preview_url))
}

/// Full-size images around the viewer's current position.
pub fn prefetch_viewer(
    cache: &mut ImageCache,
    source: &HttpGallerySource,
    network: &NetworkMonitor,
    state: &viewer::State,
) -> Task<Message> {
    let urls = state.prefetch_urls(VIEWER_PREFETCH_RADIUS);
    for url in &urls {
        cache.touch(url);
    }
    download_images(cache, source, network, urls.iter().map(String::as_str))
}

/// Probes the API host once. Without a usable base URL there is nothing to probe.
pub fn probe_network(api: &ApiConfig) -> Task<Message> {
    let Some((host, port)) = api.base_url.as_deref().and_then(network::probe_target) else {
        return Task::none();
    };
    Task::perform(
        network::probe(host, port, Duration::from_secs(PROBE_TIMEOUT_SECS)),
        Message::NetworkProbed,
    )
}

// =============================================================================
// Shared actions
// =============================================================================

fn toggle_favorite(ctx: &mut UpdateContext<'_>, record: &ImageRecord) {
    match ctx.favorites.toggle_favorite(record) {
        Ok(now_favorite) => {
            log::debug!("Favorite {} -> {now_favorite}", record.id);
        }
        Err(_) => ctx
            .notifications
            .push(Notification::error("notification-favorite-save-error")),
    }
}

/// Refreshes the cached palette after a mode or platform change.
fn apply_theme_result(ctx: &mut UpdateContext<'_>, result: StorageResult<()>) {
    *ctx.palette = ctx.theme.palette();
    if result.is_err() {
        ctx.notifications
            .push(Notification::warning("notification-theme-save-error"));
    }
}

fn refresh(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.cache.retry_failed();
    start_fetch(ctx.fetcher, ctx.source, FetchKind::Refresh)
}

/// Re-issues the fetch that failed last: the first page when nothing is
/// displayed yet, otherwise the same kind of request.
pub fn handle_retry(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let kind = if ctx.fetcher.records().is_empty() {
        FetchKind::Initial
    } else {
        ctx.retry_kind.unwrap_or(FetchKind::Refresh)
    };
    Task::batch([
        start_fetch(ctx.fetcher, ctx.source, kind),
        probe_network(&ctx.config.api),
    ])
}

fn open_viewer(ctx: &mut UpdateContext<'_>, origin: Origin, index: usize) -> Task<Message> {
    let records = match origin {
        Origin::Gallery => ctx.fetcher.records().to_vec(),
        Origin::Favorites => ctx.favorites.favorites().to_vec(),
    };
    let Some(state) = viewer::State::new(records, index, origin) else {
        return Task::none();
    };

    *ctx.viewer = Some(state);
    *ctx.screen = Screen::Viewer;
    ctx.viewer_prefetch()
}

fn close_viewer(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(state) = ctx.viewer.take() else {
        return Task::none();
    };
    *ctx.screen = match state.origin() {
        Origin::Gallery => Screen::Gallery,
        Origin::Favorites => Screen::Favorites,
    };
    ctx.visible_previews()
}

fn clear_favorites(ctx: &mut UpdateContext<'_>) {
    match ctx.favorites.clear_favorites() {
        Ok(()) => ctx
            .notifications
            .push(Notification::success("notification-favorites-cleared")),
        Err(_) => ctx
            .notifications
            .push(Notification::error("notification-favorite-save-error")),
    }
}

/// Wipes every stored key and returns to a freshly started gallery.
fn reset_app(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let outcome = storage::clear_all(ctx.storage.as_ref());
    // Memory follows storage key by key, even when the reset is partial.
    if outcome.was_removed(FAVORITES_KEY) {
        ctx.favorites.forget();
    }
    if outcome.was_removed(THEME_KEY) {
        ctx.theme.forget();
        *ctx.palette = ctx.theme.palette();
    }
    if let Some(err) = outcome.error {
        log::error!("Reset failed: {err}");
        ctx.notifications
            .push(Notification::error("notification-reset-error"));
        return Task::none();
    }

    ctx.cache.clear();
    ctx.fetcher.reset();
    *ctx.retry_kind = None;
    *ctx.gallery_scroll = ScrollMetrics::default();
    *ctx.favorites_scroll = ScrollMetrics::default();
    *ctx.favorites_screen = favorites::State::default();
    *ctx.viewer = None;
    persistence::forget_app_state(ctx.app_state);

    log::info!("Application data reset");
    ctx.notifications
        .push(Notification::success("notification-reset-success"));
    *ctx.screen = Screen::Gallery;
    start_fetch(ctx.fetcher, ctx.source, FetchKind::Initial)
}

// =============================================================================
// Component handlers
// =============================================================================

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match message {
        navbar::Message::Open(tab) => {
            *ctx.screen = Screen::from(tab);
            ctx.visible_previews()
        }
        navbar::Message::Refresh => refresh(ctx),
        navbar::Message::ToggleTheme => {
            let result = ctx.theme.toggle_theme();
            apply_theme_result(ctx, result);
            Task::none()
        }
    }
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    match message {
        gallery::Message::Retry => handle_retry(ctx),
        gallery::Message::Grid(grid_message) => {
            handle_grid_message(ctx, Origin::Gallery, grid_message)
        }
    }
}

pub fn handle_favorites_message(
    ctx: &mut UpdateContext<'_>,
    message: favorites::Message,
) -> Task<Message> {
    match favorites::update(ctx.favorites_screen, message) {
        FavoritesEvent::None => Task::none(),
        FavoritesEvent::Grid(grid_message) => {
            handle_grid_message(ctx, Origin::Favorites, grid_message)
        }
        FavoritesEvent::ClearAll => {
            clear_favorites(ctx);
            Task::none()
        }
    }
}

fn handle_grid_message(
    ctx: &mut UpdateContext<'_>,
    origin: Origin,
    message: grid::Message,
) -> Task<Message> {
    match message {
        grid::Message::Open(index) => open_viewer(ctx, origin, index),
        grid::Message::ToggleFavorite(index) => {
            let record = match origin {
                Origin::Gallery => ctx.fetcher.records().get(index).cloned(),
                Origin::Favorites => ctx.favorites.favorites().get(index).cloned(),
            };
            if let Some(record) = record {
                toggle_favorite(ctx, &record);
            }
            Task::none()
        }
        grid::Message::Scrolled(metrics) => match origin {
            Origin::Gallery => {
                *ctx.gallery_scroll = metrics;
                let load_more = if metrics.is_near_bottom()
                    && !ctx.fetcher.records().is_empty()
                    && ctx.fetcher.error().is_none()
                {
                    start_fetch(ctx.fetcher, ctx.source, FetchKind::More)
                } else {
                    Task::none()
                };
                Task::batch([load_more, ctx.visible_previews()])
            }
            Origin::Favorites => {
                *ctx.favorites_scroll = metrics;
                ctx.visible_previews()
            }
        },
        grid::Message::BackToTop => {
            let id = match origin {
                Origin::Gallery => GALLERY_SCROLL_ID,
                Origin::Favorites => FAVORITES_SCROLL_ID,
            };
            operation::snap_to(Id::new(id), RelativeOffset { x: 0.0, y: 0.0 })
        }
    }
}

pub fn handle_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: settings::Message,
) -> Task<Message> {
    match settings::update(ctx.settings, message, ctx.favorites.len()) {
        SettingsEvent::None => Task::none(),
        SettingsEvent::ThemeSelected(mode) => {
            let result = ctx.theme.set_theme_mode(mode);
            apply_theme_result(ctx, result);
            Task::none()
        }
        SettingsEvent::LanguageSelected(locale) => {
            if let Some(key) = persistence::apply_language_change(ctx.i18n, ctx.config, locale) {
                ctx.notifications.push(Notification::warning(key));
            }
            Task::none()
        }
        SettingsEvent::NothingToClear => {
            ctx.notifications
                .push(Notification::info("notification-no-favorites"));
            Task::none()
        }
        SettingsEvent::ClearFavorites => {
            clear_favorites(ctx);
            Task::none()
        }
        SettingsEvent::ClearCache => {
            ctx.cache.clear();
            ctx.notifications
                .push(Notification::success("notification-cache-cleared"));
            Task::none()
        }
        SettingsEvent::ResetApp => reset_app(ctx),
    }
}

pub fn handle_viewer_message(
    ctx: &mut UpdateContext<'_>,
    message: viewer::Message,
) -> Task<Message> {
    let Some(state) = ctx.viewer.as_mut() else {
        return Task::none();
    };

    match viewer::update(state, message) {
        ViewerEvent::None => Task::none(),
        ViewerEvent::Navigated => ctx.viewer_prefetch(),
        ViewerEvent::ToggleFavorite => {
            let record = state.current().clone();
            toggle_favorite(ctx, &record);
            Task::none()
        }
        ViewerEvent::Save => {
            state.set_saving(true);
            let record = state.current().clone();
            Task::perform(
                save_record(
                    ctx.source.client().clone(),
                    ctx.network.clone(),
                    record,
                    ctx.app_state.last_save_directory.clone(),
                    DialogLabels::from_i18n(ctx.i18n),
                ),
                Message::SaveCompleted,
            )
        }
        ViewerEvent::Share => {
            let url = state.current().url.clone();
            ctx.notifications
                .push(Notification::success("notification-share-copied"));
            iced::clipboard::write(url)
        }
        ViewerEvent::Close => close_viewer(ctx),
        ViewerEvent::Retry => {
            let url = state.current().url.clone();
            ctx.cache.retry(&url);
            ctx.viewer_prefetch()
        }
    }
}

pub fn handle_shortcut(ctx: &mut UpdateContext<'_>, shortcut: Shortcut) -> Task<Message> {
    let viewer_message = match shortcut {
        Shortcut::Refresh => {
            return if *ctx.screen == Screen::Gallery {
                refresh(ctx)
            } else {
                Task::none()
            };
        }
        Shortcut::Previous => viewer::Message::Previous,
        Shortcut::Next => viewer::Message::Next,
        Shortcut::ToggleFavorite => viewer::Message::ToggleFavorite,
        Shortcut::Save => viewer::Message::Save,
        Shortcut::Close => viewer::Message::Close,
    };

    if *ctx.screen == Screen::Viewer {
        handle_viewer_message(ctx, viewer_message)
    } else {
        Task::none()
    }
}
