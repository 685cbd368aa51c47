// SPDX-License-Identifier: MPL-2.0
//! Favorites screen: the saved images, with a confirmed "clear all".

use crate::gallery::FavoritesStore;
use crate::i18n::fluent::I18n;
use crate::media::ImageCache;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::grid::{self, Footer, FAVORITES_SCROLL_ID};
use crate::ui::masonry::ScrollMetrics;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, text, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length, Theme};

#[derive(Debug, Clone, Default)]
pub struct State {
    confirm_clear: bool,
}

impl State {
    pub fn is_confirming(&self) -> bool {
        self.confirm_clear
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Grid(grid::Message),
    RequestClear,
    ConfirmClear,
    CancelClear,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Grid(grid::Message),
    ClearAll,
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Grid(grid_message) => Event::Grid(grid_message),
        Message::RequestClear => {
            state.confirm_clear = true;
            Event::None
        }
        Message::CancelClear => {
            state.confirm_clear = false;
            Event::None
        }
        Message::ConfirmClear => {
            if std::mem::take(&mut state.confirm_clear) {
                Event::ClearAll
            } else {
                Event::None
            }
        }
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub state: &'a State,
    pub favorites: &'a FavoritesStore,
    pub cache: &'a ImageCache,
    pub columns: u16,
    pub scroll: ScrollMetrics,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(header(&ctx));

    if ctx.state.confirm_clear && !ctx.favorites.is_empty() {
        column = column.push(confirmation(&ctx));
    }

    if ctx.favorites.is_empty() {
        return column.push(empty_state(&ctx)).into();
    }

    let grid = grid::view(grid::ViewContext {
        i18n: ctx.i18n,
        colors: ctx.colors,
        records: ctx.favorites.favorites(),
        columns: ctx.columns,
        cache: ctx.cache,
        favorites: ctx.favorites,
        scroll_id: FAVORITES_SCROLL_ID,
        footer: Footer::None,
        show_back_to_top: ctx.scroll.shows_back_to_top(),
    })
    .map(Message::Grid);

    column.push(grid).into()
}

fn header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let secondary = ctx.colors.text_secondary;
    let count = ctx.favorites.len().to_string();

    let titles = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(ctx.i18n.tr("favorites-title")).size(typography::TITLE_MD))
        .push(
            Text::new(
                ctx.i18n
                    .tr_with_args("favorites-count", &[("count", count.as_str())]),
            )
            .size(typography::BODY_SM)
            .style(move |_theme: &Theme| text::Style {
                color: Some(secondary),
            }),
        );

    let clear = button(Text::new(ctx.i18n.tr("favorites-clear-all")).size(typography::BODY))
        .on_press_maybe((!ctx.favorites.is_empty()).then_some(Message::RequestClear))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::flat);

    Row::new()
        .padding([spacing::SM, spacing::MD])
        .align_y(alignment::Vertical::Center)
        .push(titles)
        .push(Space::new().width(Length::Fill))
        .push(clear)
        .into()
}

fn confirmation<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let count = ctx.favorites.len().to_string();
    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(ctx.i18n.tr_with_args(
                "settings-confirm-clear-favorites",
                &[("count", count.as_str())],
            ))
            .size(typography::BODY)
            .width(Length::Fill),
        )
        .push(
            button(Text::new(ctx.i18n.tr("dialog-cancel")))
                .on_press(Message::CancelClear)
                .style(styles::button::secondary),
        )
        .push(
            button(Text::new(ctx.i18n.tr("favorites-clear-all")))
                .on_press(Message::ConfirmClear)
                .style(styles::button::danger),
        );

    Container::new(
        Container::new(row)
            .width(Length::Fill)
            .padding(spacing::SM)
            .style(styles::container::error_box(ctx.colors)),
    )
    .width(Length::Fill)
    .padding([0.0, spacing::MD])
    .into()
}

fn empty_state<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let favorite = ctx.colors.favorite;
    let secondary = ctx.colors.text_secondary;

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new("♥")
                .size(sizing::ICON_XL)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(favorite),
                }),
        )
        .push(Text::new(ctx.i18n.tr("favorites-empty-title")).size(typography::TITLE_MD))
        .push(
            Text::new(ctx.i18n.tr("favorites-empty-message"))
                .size(typography::BODY)
                .align_x(alignment::Horizontal::Center)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(secondary),
                }),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG)
        .into()
}
