// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The viewer takes the whole window; every other screen sits under the
//! navbar. Toasts are stacked on top of whichever screen is shown.

use super::{Message, Screen};
use crate::gallery::{FavoritesStore, PaginationFetcher};
use crate::i18n::fluent::I18n;
use crate::media::ImageCache;
use crate::ui::favorites::{self, State as FavoritesState};
use crate::ui::gallery;
use crate::ui::masonry::ScrollMetrics;
use crate::ui::navbar::{self, Tab};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::settings::{self, State as SettingsState};
use crate::ui::theming::{ColorScheme, ThemeMode};
use crate::ui::viewer;
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub colors: &'a ColorScheme,
    pub theme_mode: ThemeMode,
    pub fetcher: &'a PaginationFetcher,
    pub favorites: &'a FavoritesStore,
    pub cache: &'a ImageCache,
    pub columns: u16,
    pub offline: bool,
    pub gallery_scroll: ScrollMetrics,
    pub favorites_scroll: ScrollMetrics,
    pub favorites_screen: &'a FavoritesState,
    pub settings: &'a SettingsState,
    pub viewer: Option<&'a viewer::State>,
    pub event_id: &'a str,
    pub notifications: &'a Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view = match (ctx.screen, ctx.viewer) {
        (Screen::Viewer, Some(state)) => view_viewer(&ctx, state),
        (Screen::Favorites, _) => with_navbar(&ctx, Tab::Favorites, view_favorites(&ctx)),
        (Screen::Settings, _) => with_navbar(&ctx, Tab::Settings, view_settings(&ctx)),
        // A viewer screen without viewer state falls back to the gallery.
        (Screen::Gallery | Screen::Viewer, _) => {
            with_navbar(&ctx, Tab::Gallery, view_gallery(&ctx))
        }
    };

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n, ctx.colors)
        .map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(current_view)
        .push(toasts)
        .into()
}

fn with_navbar<'a>(
    ctx: &ViewContext<'a>,
    active: Tab,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    let navbar = navbar::view(navbar::ViewContext {
        i18n: ctx.i18n,
        active,
        favorites_count: ctx.favorites.len(),
        theme_mode: ctx.theme_mode,
        busy: ctx.fetcher.is_busy(),
    })
    .map(Message::Navbar);

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(navbar)
        .push(
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .into()
}

fn view_gallery<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    gallery::view(gallery::ViewContext {
        i18n: ctx.i18n,
        colors: ctx.colors,
        fetcher: ctx.fetcher,
        cache: ctx.cache,
        favorites: ctx.favorites,
        columns: ctx.columns,
        offline: ctx.offline,
        scroll: ctx.gallery_scroll,
    })
    .map(Message::Gallery)
}

fn view_favorites<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    favorites::view(favorites::ViewContext {
        i18n: ctx.i18n,
        colors: ctx.colors,
        state: ctx.favorites_screen,
        favorites: ctx.favorites,
        cache: ctx.cache,
        columns: ctx.columns,
        scroll: ctx.favorites_scroll,
    })
    .map(Message::Favorites)
}

fn view_settings<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    settings::view(settings::ViewContext {
        i18n: ctx.i18n,
        colors: ctx.colors,
        state: ctx.settings,
        theme_mode: ctx.theme_mode,
        favorites_count: ctx.favorites.len(),
        cached_images: ctx.cache.len(),
        event_id: ctx.event_id,
    })
    .map(Message::Settings)
}

fn view_viewer<'a>(ctx: &ViewContext<'a>, state: &'a viewer::State) -> Element<'a, Message> {
    viewer::view(viewer::ViewContext {
        i18n: ctx.i18n,
        colors: ctx.colors,
        state,
        cache: ctx.cache,
        is_favorite: ctx.favorites.is_favorite(&state.current().id),
    })
    .map(Message::Viewer)
}
