// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: the paginated event photos in a masonry grid.

use crate::gallery::{FavoritesStore, PaginationFetcher};
use crate::i18n::fluent::I18n;
use crate::media::ImageCache;
use crate::ui::components::{error_message::ErrorMessage, offline_banner, skeleton};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::grid::{self, Footer, GALLERY_SCROLL_ID};
use crate::ui::masonry::ScrollMetrics;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Grid(grid::Message),
    Retry,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub fetcher: &'a PaginationFetcher,
    pub cache: &'a ImageCache,
    pub favorites: &'a FavoritesStore,
    pub columns: u16,
    pub offline: bool,
    pub scroll: ScrollMetrics,
}

/// Footer under the grid for the fetcher's current state.
pub fn footer_for(fetcher: &PaginationFetcher) -> Footer {
    if fetcher.is_loading_more() {
        Footer::LoadingMore
    } else if !fetcher.has_next_page() && !fetcher.records().is_empty() {
        Footer::EndOfList
    } else {
        Footer::None
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new().width(Length::Fill).height(Length::Fill);

    if ctx.offline {
        column = column.push(offline_banner::view(ctx.i18n, ctx.colors));
    }

    column.push(body(&ctx)).into()
}

fn body<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let fetcher = ctx.fetcher;

    if fetcher.records().is_empty() {
        return if fetcher.is_loading() || fetcher.is_refreshing() {
            skeleton::grid(ctx.columns, ctx.colors)
        } else if let Some(error) = fetcher.error() {
            centered(
                ErrorMessage::new(ctx.colors)
                    .title(ctx.i18n.tr("error-title"))
                    .message(ctx.i18n.tr(error.i18n_key()))
                    .action(ctx.i18n.tr("error-retry"), Message::Retry)
                    .view(),
            )
        } else if ctx.offline {
            centered(
                ErrorMessage::new(ctx.colors)
                    .glyph("📵")
                    .title(ctx.i18n.tr("offline-title"))
                    .message(ctx.i18n.tr("offline-message"))
                    .action(ctx.i18n.tr("error-retry"), Message::Retry)
                    .view(),
            )
        } else {
            empty_state(ctx)
        };
    }

    let mut column = Column::new().width(Length::Fill).height(Length::Fill);

    if fetcher.is_refreshing() {
        column = column.push(status_line(ctx, ctx.i18n.tr("gallery-refreshing")));
    }

    if let Some(error) = fetcher.error() {
        column = column.push(inline_error(ctx, ctx.i18n.tr(error.i18n_key())));
    }

    let grid = grid::view(grid::ViewContext {
        i18n: ctx.i18n,
        colors: ctx.colors,
        records: fetcher.records(),
        columns: ctx.columns,
        cache: ctx.cache,
        favorites: ctx.favorites,
        scroll_id: GALLERY_SCROLL_ID,
        footer: footer_for(fetcher),
        show_back_to_top: ctx.scroll.shows_back_to_top(),
    })
    .map(Message::Grid);

    column.push(grid).into()
}

fn centered<'a>(content: Element<'a, Message>) -> Element<'a, Message> {
    Container::new(Container::new(content).max_width(480.0))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG)
        .into()
}

fn empty_state<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let secondary = ctx.colors.text_secondary;
    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(ctx.i18n.tr("gallery-empty-title")).size(typography::TITLE_MD))
        .push(
            Text::new(ctx.i18n.tr("gallery-empty-message"))
                .size(typography::BODY)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(secondary),
                }),
        )
        .push(
            button(Text::new(ctx.i18n.tr("gallery-reload")))
                .on_press(Message::Retry)
                .style(styles::button::secondary),
        );

    centered(content.into())
}

fn status_line<'a>(ctx: &ViewContext<'a>, label: String) -> Element<'a, Message> {
    let color = ctx.colors.text_secondary;
    Container::new(
        Text::new(label)
            .size(typography::BODY_SM)
            .style(move |_theme: &Theme| text::Style { color: Some(color) }),
    )
    .width(Length::Fill)
    .padding(spacing::XS)
    .align_x(alignment::Horizontal::Center)
    .into()
}

/// Compact error strip above a grid that still has records.
fn inline_error<'a>(ctx: &ViewContext<'a>, message: String) -> Element<'a, Message> {
    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(message).size(typography::BODY_SM).width(Length::Fill))
        .push(
            button(Text::new(ctx.i18n.tr("error-retry")).size(typography::BODY_SM))
                .on_press(Message::Retry)
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::primary),
        );

    Container::new(
        Container::new(row)
            .width(Length::Fill)
            .padding([spacing::XS, spacing::MD])
            .style(styles::container::error_box(ctx.colors)),
    )
    .width(Length::Fill)
    .padding(spacing::XS)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GalleryError;
    use crate::gallery::source::sample_records;
    use crate::gallery::{FetchKind, GalleryPage};
    use crate::storage::MemoryStore;
    use std::sync::Arc;

    fn fetcher_with(records: usize, page_size: u32) -> PaginationFetcher {
        let mut fetcher = PaginationFetcher::with_page_size(page_size);
        let request = fetcher.begin(FetchKind::Initial).expect("idle fetcher");
        fetcher.finish(
            &request,
            Ok(GalleryPage::from_records(sample_records("r", records))),
        );
        fetcher
    }

    #[test]
    fn footer_shows_end_of_list_after_short_page() {
        assert_eq!(footer_for(&fetcher_with(3, 10)), Footer::EndOfList);
        assert_eq!(footer_for(&fetcher_with(10, 10)), Footer::None);
    }

    #[test]
    fn footer_shows_loading_more_while_fetching_next_page() {
        let mut fetcher = fetcher_with(10, 10);
        fetcher.begin(FetchKind::More).expect("next page");
        assert_eq!(footer_for(&fetcher), Footer::LoadingMore);
    }

    #[test]
    fn empty_fetcher_has_no_footer() {
        assert_eq!(footer_for(&PaginationFetcher::new()), Footer::None);
    }

    #[test]
    fn gallery_view_renders_each_state() {
        let i18n = I18n::default();
        let colors = ColorScheme::dark();
        let cache = ImageCache::new(16);
        let (favorites, _) = FavoritesStore::load(Arc::new(MemoryStore::new()));

        let mut failed = PaginationFetcher::new();
        let request = failed.begin(FetchKind::Initial).expect("idle fetcher");
        failed.finish(&request, Err(GalleryError::HttpStatus(503)));

        let mut loading = PaginationFetcher::new();
        loading.begin(FetchKind::Initial);

        for (fetcher, offline) in [
            (&failed, false),
            (&loading, false),
            (&PaginationFetcher::new(), true),
            (&fetcher_with(5, 10), false),
        ] {
            let _element = view(ViewContext {
                i18n: &i18n,
                colors: &colors,
                fetcher,
                cache: &cache,
                favorites: &favorites,
                columns: 2,
                offline,
                scroll: ScrollMetrics::default(),
            });
        }
    }
}
