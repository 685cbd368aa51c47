// SPDX-License-Identifier: MPL-2.0
//! Full-screen image viewer.
//!
//! The viewer works on a snapshot of the list it was opened from (gallery or
//! favorites), so pages arriving or favorites being removed meanwhile do not
//! move the current index.

use crate::gallery::ImageRecord;
use crate::i18n::fluent::I18n;
use crate::media::{viewer_prefetch_urls, CachedImage, ImageCache};
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, image, text, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, Color, ContentFit, Element, Length, Theme};

/// Screen the viewer was opened from, and returns to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Gallery,
    Favorites,
}

#[derive(Debug, Clone)]
pub struct State {
    records: Vec<ImageRecord>,
    index: usize,
    origin: Origin,
    saving: bool,
}

impl State {
    /// Opens on `index`; `None` when it is out of range.
    pub fn new(records: Vec<ImageRecord>, index: usize, origin: Origin) -> Option<Self> {
        if index >= records.len() {
            return None;
        }
        Some(Self {
            records,
            index,
            origin,
            saving: false,
        })
    }

    pub fn current(&self) -> &ImageRecord {
        &self.records[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.records.len()
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn set_saving(&mut self, saving: bool) {
        self.saving = saving;
    }

    /// Full-size URLs to load for the current position, current image first.
    pub fn prefetch_urls(&self, radius: usize) -> Vec<String> {
        let urls: Vec<&str> = self.records.iter().map(|r| r.url.as_str()).collect();
        viewer_prefetch_urls(&urls, self.index, radius)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Previous,
    Next,
    ToggleFavorite,
    Save,
    Share,
    Close,
    Retry,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The current index changed.
    Navigated,
    ToggleFavorite,
    Save,
    Share,
    Close,
    Retry,
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Previous => {
            if state.has_previous() {
                state.index -= 1;
                Event::Navigated
            } else {
                Event::None
            }
        }
        Message::Next => {
            if state.has_next() {
                state.index += 1;
                Event::Navigated
            } else {
                Event::None
            }
        }
        Message::ToggleFavorite => Event::ToggleFavorite,
        Message::Save if state.saving => Event::None,
        Message::Save => Event::Save,
        Message::Share => Event::Share,
        Message::Close => Event::Close,
        Message::Retry => Event::Retry,
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub state: &'a State,
    pub cache: &'a ImageCache,
    pub is_favorite: bool,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let state = ctx.state;

    let layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(picture(&ctx))
        .push(side_buttons(state))
        .push(
            Column::new()
                .width(Length::Fill)
                .height(Length::Fill)
                .push(header(&ctx))
                .push(Space::new().height(Length::Fill))
                .push(footer(&ctx)),
        );

    Container::new(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::viewer_backdrop)
        .into()
}

fn picture<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let record = ctx.state.current();

    let content: Element<'a, Message> = match ctx.cache.lookup(&record.url) {
        CachedImage::Ready(handle) => image(handle)
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain)
            .into(),
        CachedImage::Failed => Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(Text::new(ctx.i18n.tr("viewer-load-error")).size(typography::BODY))
            .push(
                button(Text::new(ctx.i18n.tr("error-retry")))
                    .on_press(Message::Retry)
                    .style(styles::button::primary),
            )
            .into(),
        CachedImage::Loading | CachedImage::Missing => {
            match ctx.cache.lookup(record.preview_url()) {
                CachedImage::Ready(handle) => Stack::new()
                    .push(
                        image(handle)
                            .width(Length::Fill)
                            .height(Length::Fill)
                            .content_fit(ContentFit::Contain)
                            .opacity(opacity::OVERLAY_MEDIUM),
                    )
                    .push(loading_label(ctx))
                    .into(),
                _ => loading_label(ctx),
            }
        }
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding([sizing::NAVBAR_HEIGHT, 0.0])
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn loading_label<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Container::new(Text::new(ctx.i18n.tr("viewer-loading")).size(typography::BODY))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn round_button<'a>(label: &'static str, message: Option<Message>) -> Element<'a, Message> {
    button(
        Text::new(label)
            .size(typography::TITLE_MD)
            .align_x(alignment::Horizontal::Center),
    )
    .on_press_maybe(message)
    .width(Length::Fixed(sizing::ICON_XL))
    .height(Length::Fixed(sizing::ICON_XL))
    .style(styles::button::overlay(
        palette::WHITE,
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_STRONG,
    ))
    .into()
}

fn side_buttons<'a>(state: &State) -> Element<'a, Message> {
    let previous = round_button("‹", state.has_previous().then_some(Message::Previous));
    let next = round_button("›", state.has_next().then_some(Message::Next));

    Container::new(
        Row::new()
            .width(Length::Fill)
            .align_y(alignment::Vertical::Center)
            .push(previous)
            .push(Space::new().width(Length::Fill))
            .push(next),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::MD)
    .align_y(alignment::Vertical::Center)
    .into()
}

fn header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let current = (ctx.state.index() + 1).to_string();
    let total = ctx.state.len().to_string();
    let counter = ctx.i18n.tr_with_args(
        "viewer-counter",
        &[("current", current.as_str()), ("total", total.as_str())],
    );

    let row = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(round_button("✕", Some(Message::Close)))
        .push(
            Container::new(Text::new(counter).size(typography::BODY_LG))
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        )
        .push(Space::new().width(Length::Fixed(sizing::ICON_XL)));

    Container::new(row)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::MD])
        .style(styles::container::viewer_bar)
        .into()
}

fn footer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let record = ctx.state.current();
    let caption_color = Color {
        a: opacity::OVERLAY_HOVER,
        ..palette::WHITE
    };

    let mut info = Column::new().spacing(spacing::XXS).width(Length::Fill);
    if let Some(title) = &record.title {
        info = info.push(Text::new(title.clone()).size(typography::TITLE_SM));
        if let Some(caption) = &record.caption {
            info = info.push(
                Text::new(caption.clone())
                    .size(typography::BODY_SM)
                    .style(move |_theme: &Theme| text::Style {
                        color: Some(caption_color),
                    }),
            );
        }
    }

    let heart_color = if ctx.is_favorite {
        ctx.colors.favorite
    } else {
        palette::WHITE
    };
    let favorite = button(
        Text::new(if ctx.is_favorite { "♥" } else { "♡" })
            .size(typography::TITLE_SM)
            .style(move |_theme: &Theme| text::Style {
                color: Some(heart_color),
            }),
    )
    .on_press(Message::ToggleFavorite)
    .padding([spacing::XS, spacing::SM])
    .style(styles::button::overlay(
        palette::WHITE,
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_STRONG,
    ));

    let save_label = if ctx.state.is_saving() {
        ctx.i18n.tr("viewer-saving")
    } else {
        ctx.i18n.tr("viewer-save")
    };
    let save = button(Text::new(save_label).size(typography::BODY))
        .on_press_maybe((!ctx.state.is_saving()).then_some(Message::Save))
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_STRONG,
        ));

    let share = button(Text::new(ctx.i18n.tr("viewer-share")).size(typography::BODY))
        .on_press(Message::Share)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_STRONG,
        ));

    let actions = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(favorite)
        .push(save)
        .push(share);

    Container::new(
        Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Center)
            .push(info)
            .push(actions),
    )
    .width(Length::Fill)
    .padding([spacing::SM, spacing::MD])
    .style(styles::container::viewer_bar)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::source::sample_records;

    fn state_at(index: usize) -> State {
        State::new(sample_records("v", 3), index, Origin::Gallery).expect("index in range")
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        assert!(State::new(sample_records("v", 3), 3, Origin::Gallery).is_none());
        assert!(State::new(Vec::new(), 0, Origin::Favorites).is_none());
    }

    #[test]
    fn navigation_stops_at_both_ends() {
        let mut state = state_at(0);
        assert_eq!(update(&mut state, Message::Previous), Event::None);
        assert_eq!(state.index(), 0);

        assert_eq!(update(&mut state, Message::Next), Event::Navigated);
        assert_eq!(update(&mut state, Message::Next), Event::Navigated);
        assert_eq!(state.index(), 2);
        assert_eq!(update(&mut state, Message::Next), Event::None);
        assert_eq!(state.current().id, "v2");
    }

    #[test]
    fn save_is_ignored_while_saving() {
        let mut state = state_at(1);
        assert_eq!(update(&mut state, Message::Save), Event::Save);
        state.set_saving(true);
        assert_eq!(update(&mut state, Message::Save), Event::None);
    }

    #[test]
    fn prefetch_starts_with_current_image() {
        let state = state_at(1);
        let urls = state.prefetch_urls(1);
        assert_eq!(urls[0], "https://img.test/v1.jpg");
        assert_eq!(urls.len(), 3);
    }

    #[test]
    fn viewer_view_renders() {
        let i18n = I18n::default();
        let colors = ColorScheme::dark();
        let cache = ImageCache::new(16);
        let mut state = state_at(0);
        state.set_saving(true);

        let _element = view(ViewContext {
            i18n: &i18n,
            colors: &colors,
            state: &state,
            cache: &cache,
            is_favorite: true,
        });
    }
}
