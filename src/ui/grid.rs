// SPDX-License-Identifier: MPL-2.0
//! Scrollable masonry grid of image tiles, shared by the gallery and
//! favorites screens.
//!
//! Each tile opens the viewer on click and carries a heart overlay that
//! toggles the favorite. Tiles are sized from the record's aspect ratio so the
//! layout does not jump when thumbnails arrive.

use crate::gallery::{FavoritesStore, ImageRecord};
use crate::i18n::fluent::I18n;
use crate::media::{CachedImage, ImageCache};
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::masonry::{self, ScrollMetrics};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::scrollable::Viewport;
use iced::widget::{button, image, text, Column, Container, Id, Row, Scrollable, Stack, Text};
use iced::{alignment, ContentFit, Element, Length, Theme};

pub const GALLERY_SCROLL_ID: &str = "gallery-grid";
pub const FAVORITES_SCROLL_ID: &str = "favorites-grid";

/// Line below the last tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Footer {
    #[default]
    None,
    LoadingMore,
    EndOfList,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Open the viewer on the record at this index.
    Open(usize),
    ToggleFavorite(usize),
    Scrolled(ScrollMetrics),
    BackToTop,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub records: &'a [ImageRecord],
    pub columns: u16,
    pub cache: &'a ImageCache,
    pub favorites: &'a FavoritesStore,
    pub scroll_id: &'static str,
    pub footer: Footer,
    pub show_back_to_top: bool,
}

/// Converts a scrollable viewport into the metrics the screens reason about.
pub fn scroll_metrics(viewport: &Viewport) -> ScrollMetrics {
    ScrollMetrics {
        offset_y: viewport.absolute_offset().y,
        viewport_height: viewport.bounds().height,
        content_height: viewport.content_bounds().height,
    }
}

/// Height of a tile for `record`, before column width scaling.
pub fn tile_height(record: &ImageRecord) -> f32 {
    sizing::TILE_BASE_WIDTH * record.aspect_ratio()
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let layout = masonry::distribute(ctx.records, ctx.columns);

    let mut columns = Row::new().spacing(spacing::GRID_GAP).width(Length::Fill);
    for indices in layout {
        let column = indices
            .into_iter()
            .fold(Column::new().spacing(spacing::GRID_GAP), |column, index| {
                column.push(tile(&ctx, index))
            })
            .width(Length::Fill);
        columns = columns.push(column);
    }

    let mut content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::GRID_GAP)
        .width(Length::Fill)
        .push(columns);

    if let Some(line) = footer(&ctx) {
        content = content.push(line);
    }

    let scrollable = Scrollable::new(content)
        .id(Id::new(ctx.scroll_id))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::Scrolled(scroll_metrics(&viewport)));

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(scrollable);

    if ctx.show_back_to_top {
        let back_to_top = button(Text::new("↑").size(typography::TITLE_SM))
            .on_press(Message::BackToTop)
            .padding([spacing::XS, spacing::SM])
            .style(styles::button::overlay(
                palette::WHITE,
                opacity::OVERLAY_STRONG,
                opacity::OVERLAY_PRESSED,
            ));
        stack = stack.push(
            Container::new(back_to_top)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Bottom)
                .padding(spacing::LG),
        );
    }

    stack.into()
}

fn tile<'a>(ctx: &ViewContext<'a>, index: usize) -> Element<'a, Message> {
    let record = &ctx.records[index];
    let height = Length::Fixed(tile_height(record));

    let picture: Element<'a, Message> = match ctx.cache.lookup(record.preview_url()) {
        CachedImage::Ready(handle) => image(handle)
            .width(Length::Fill)
            .height(height)
            .content_fit(ContentFit::Cover)
            .into(),
        CachedImage::Failed => placeholder(ctx.colors, "⚠", height),
        CachedImage::Loading | CachedImage::Missing => placeholder(ctx.colors, "", height),
    };

    let open = button(picture)
        .on_press(Message::Open(index))
        .padding(0)
        .width(Length::Fill)
        .style(styles::button::tile);

    let is_favorite = ctx.favorites.is_favorite(&record.id);
    let heart_color = if is_favorite {
        ctx.colors.favorite
    } else {
        palette::WHITE
    };
    let heart = button(
        Text::new(if is_favorite { "♥" } else { "♡" })
            .size(sizing::ICON_SM)
            .style(move |_theme: &Theme| text::Style {
                color: Some(heart_color),
            }),
    )
    .on_press(Message::ToggleFavorite(index))
    .padding([spacing::XXS, spacing::XS])
    .style(styles::button::overlay(
        palette::WHITE,
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_STRONG,
    ));

    Stack::new()
        .push(open)
        .push(
            Container::new(heart)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .padding(spacing::XS),
        )
        .into()
}

fn placeholder<'a>(colors: &ColorScheme, glyph: &'static str, height: Length) -> Element<'a, Message> {
    Container::new(Text::new(glyph).size(sizing::ICON_MD))
        .width(Length::Fill)
        .height(height)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::tile_placeholder(colors))
        .into()
}

fn footer<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    let key = match ctx.footer {
        Footer::None => return None,
        Footer::LoadingMore => "grid-loading-more",
        Footer::EndOfList => "grid-end-of-list",
    };
    let color = ctx.colors.text_secondary;

    Some(
        Container::new(
            Text::new(ctx.i18n.tr(key))
                .size(typography::BODY_SM)
                .style(move |_theme: &Theme| text::Style { color: Some(color) }),
        )
        .width(Length::Fill)
        .padding(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .into(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::source::sample_records;
    use crate::storage::MemoryStore;
    use std::sync::Arc;

    #[test]
    fn tile_height_follows_aspect_ratio() {
        let mut record = ImageRecord::new("a", "u");
        assert_eq!(tile_height(&record), sizing::TILE_BASE_WIDTH);

        record.width = Some(400);
        record.height = Some(600);
        assert_eq!(tile_height(&record), sizing::TILE_BASE_WIDTH * 1.5);
    }

    #[test]
    fn grid_view_renders_every_footer() {
        let i18n = I18n::default();
        let colors = ColorScheme::light();
        let records = sample_records("g", 7);
        let cache = ImageCache::new(16);
        let (favorites, _) = FavoritesStore::load(Arc::new(MemoryStore::new()));

        for footer in [Footer::None, Footer::LoadingMore, Footer::EndOfList] {
            let _element = view(ViewContext {
                i18n: &i18n,
                colors: &colors,
                records: &records,
                columns: 3,
                cache: &cache,
                favorites: &favorites,
                scroll_id: GALLERY_SCROLL_ID,
                footer,
                show_back_to_top: footer == Footer::EndOfList,
            });
        }
    }
}
