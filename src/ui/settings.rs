// SPDX-License-Identifier: MPL-2.0
//! Settings screen: theme, language, stored data and about.
//!
//! Destructive actions (clearing favorites or the image cache, resetting the
//! app) go through an inline confirmation step held in [`State`].

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::widget::{button, pick_list, radio, rule, text, Column, Container, Row, Scrollable, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::fmt;
use unic_langid::LanguageIdentifier;

/// Destructive actions awaiting confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    ClearFavorites,
    ClearCache,
    ResetApp,
}

impl Confirmation {
    fn prompt_key(self) -> &'static str {
        match self {
            Confirmation::ClearFavorites => "settings-confirm-clear-favorites",
            Confirmation::ClearCache => "settings-confirm-clear-cache",
            Confirmation::ResetApp => "settings-confirm-reset",
        }
    }

    fn confirm_key(self) -> &'static str {
        match self {
            Confirmation::ClearFavorites => "settings-clear-favorites-button",
            Confirmation::ClearCache => "settings-clear-cache-button",
            Confirmation::ResetApp => "settings-reset-button",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct State {
    pending: Option<Confirmation>,
}

impl State {
    pub fn pending(&self) -> Option<Confirmation> {
        self.pending
    }
}

/// A language in the picker, labelled with its localized name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOption {
    pub locale: LanguageIdentifier,
    label: String,
}

impl LanguageOption {
    fn new(locale: &LanguageIdentifier, i18n: &I18n) -> Self {
        let raw = locale.to_string();
        let name = i18n.tr(&format!("language-name-{raw}"));
        let label = if name.starts_with("MISSING:") {
            raw
        } else {
            format!("{name} ({raw})")
        };
        Self {
            locale: locale.clone(),
            label,
        }
    }
}

impl fmt::Display for LanguageOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    ThemeSelected(ThemeMode),
    LanguageSelected(LanguageOption),
    Request(Confirmation),
    Confirm,
    Cancel,
}

/// What the application must do after a settings message.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    ThemeSelected(ThemeMode),
    LanguageSelected(LanguageIdentifier),
    /// Clearing favorites was requested with none stored.
    NothingToClear,
    ClearFavorites,
    ClearCache,
    ResetApp,
}

pub fn update(state: &mut State, message: Message, favorites_count: usize) -> Event {
    match message {
        Message::ThemeSelected(mode) => Event::ThemeSelected(mode),
        Message::LanguageSelected(option) => Event::LanguageSelected(option.locale),
        Message::Request(Confirmation::ClearFavorites) if favorites_count == 0 => {
            state.pending = None;
            Event::NothingToClear
        }
        Message::Request(confirmation) => {
            state.pending = Some(confirmation);
            Event::None
        }
        Message::Cancel => {
            state.pending = None;
            Event::None
        }
        Message::Confirm => match state.pending.take() {
            Some(Confirmation::ClearFavorites) => Event::ClearFavorites,
            Some(Confirmation::ClearCache) => Event::ClearCache,
            Some(Confirmation::ResetApp) => Event::ResetApp,
            None => Event::None,
        },
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub state: &'a State,
    pub theme_mode: ThemeMode,
    pub favorites_count: usize,
    pub cached_images: usize,
    pub event_id: &'a str,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let secondary = ctx.colors.text_secondary;

    let title = Text::new(i18n.tr("settings-title")).size(typography::TITLE_LG);

    let mut content = Column::new()
        .spacing(spacing::LG)
        .width(Length::Fixed(sizing::SETTINGS_WIDTH))
        .push(title)
        .push(section(
            i18n.tr("settings-section-theme"),
            secondary,
            theme_rows(&ctx),
        ))
        .push(section(
            i18n.tr("settings-section-language"),
            secondary,
            language_picker(&ctx),
        ))
        .push(section(
            i18n.tr("settings-section-data"),
            secondary,
            data_rows(&ctx),
        ));

    if let Some(pending) = ctx.state.pending {
        content = content.push(confirmation(&ctx, pending));
    }

    content = content.push(section(
        i18n.tr("settings-section-about"),
        secondary,
        about_rows(&ctx),
    ));

    Scrollable::new(
        Container::new(content)
            .width(Length::Fill)
            .padding(spacing::LG)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn section<'a>(
    heading: String,
    heading_color: Color,
    body: Element<'a, Message>,
) -> Element<'a, Message> {
    let heading = Text::new(heading.to_uppercase())
        .size(typography::CAPTION)
        .style(move |_theme: &Theme| text::Style {
            color: Some(heading_color),
        });

    Column::new()
        .spacing(spacing::XS)
        .push(heading)
        .push(
            Container::new(body)
                .width(Length::Fill)
                .padding(spacing::MD)
                .style(styles::container::panel),
        )
        .into()
}

fn theme_rows<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    ThemeMode::ALL
        .iter()
        .fold(Column::new().spacing(spacing::SM), |column, mode| {
            column.push(radio(
                ctx.i18n.tr(mode.i18n_key()),
                *mode,
                Some(ctx.theme_mode),
                Message::ThemeSelected,
            ))
        })
        .into()
}

fn language_picker<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let options: Vec<LanguageOption> = ctx
        .i18n
        .available_locales
        .iter()
        .map(|locale| LanguageOption::new(locale, ctx.i18n))
        .collect();
    let selected = options
        .iter()
        .find(|option| &option.locale == ctx.i18n.current_locale())
        .cloned();

    pick_list(options, selected, Message::LanguageSelected)
        .padding(spacing::XS)
        .width(Length::Fill)
        .into()
}

fn data_rows<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let count = ctx.favorites_count.to_string();
    let cached = ctx.cached_images.to_string();

    Column::new()
        .spacing(spacing::SM)
        .push(action_row(
            i18n.tr("settings-favorites-label"),
            i18n.tr_with_args("settings-favorites-count", &[("count", count.as_str())]),
            ctx.colors.text_tertiary,
            i18n.tr("settings-clear-favorites-button"),
            Message::Request(Confirmation::ClearFavorites),
        ))
        .push(rule::horizontal(1))
        .push(action_row(
            i18n.tr("settings-cache-label"),
            i18n.tr_with_args("settings-cache-count", &[("count", cached.as_str())]),
            ctx.colors.text_tertiary,
            i18n.tr("settings-clear-cache-button"),
            Message::Request(Confirmation::ClearCache),
        ))
        .push(rule::horizontal(1))
        .push(action_row(
            i18n.tr("settings-reset-label"),
            i18n.tr("settings-reset-description"),
            ctx.colors.text_tertiary,
            i18n.tr("settings-reset-button"),
            Message::Request(Confirmation::ResetApp),
        ))
        .into()
}

fn action_row<'a>(
    title: String,
    description: String,
    description_color: Color,
    button_label: String,
    message: Message,
) -> Element<'a, Message> {
    let labels = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(Text::new(title).size(typography::BODY_LG))
        .push(
            Text::new(description)
                .size(typography::BODY_SM)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(description_color),
                }),
        );

    Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(labels)
        .push(
            button(Text::new(button_label).size(typography::BODY))
                .on_press(message)
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::secondary),
        )
        .into()
}

fn confirmation<'a>(ctx: &ViewContext<'a>, pending: Confirmation) -> Element<'a, Message> {
    let count = ctx.favorites_count.to_string();
    let prompt = ctx
        .i18n
        .tr_with_args(pending.prompt_key(), &[("count", count.as_str())]);

    let buttons = Row::new()
        .spacing(spacing::SM)
        .push(
            button(Text::new(ctx.i18n.tr("dialog-cancel")))
                .on_press(Message::Cancel)
                .style(styles::button::secondary),
        )
        .push(
            button(Text::new(ctx.i18n.tr(pending.confirm_key())))
                .on_press(Message::Confirm)
                .style(styles::button::danger),
        );

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(Text::new(prompt).size(typography::BODY))
            .push(buttons),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::error_box(ctx.colors))
    .into()
}

fn about_rows<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let tertiary = ctx.colors.text_tertiary;
    let version = env!("CARGO_PKG_VERSION");
    let event_id = if ctx.event_id.is_empty() {
        i18n.tr("settings-event-id-unset")
    } else {
        ctx.event_id.to_string()
    };

    let line = move |label: String, value: String| -> Element<'a, Message> {
        Row::new()
            .spacing(spacing::MD)
            .push(Text::new(label).size(typography::BODY).width(Length::Fill))
            .push(
                Text::new(value)
                    .size(typography::BODY)
                    .style(move |_theme: &Theme| text::Style {
                        color: Some(tertiary),
                    }),
            )
            .into()
    };

    let note = move |body: String| -> Element<'a, Message> {
        Text::new(body)
            .size(typography::BODY_SM)
            .style(move |_theme: &Theme| text::Style {
                color: Some(tertiary),
            })
            .into()
    };

    Column::new()
        .spacing(spacing::SM)
        .push(line(i18n.tr("settings-version-label"), version.to_string()))
        .push(line(i18n.tr("settings-event-id-label"), event_id))
        .push(rule::horizontal(1))
        .push(Text::new(i18n.tr("settings-privacy-label")).size(typography::BODY))
        .push(note(i18n.tr("settings-privacy-body")))
        .push(Text::new(i18n.tr("settings-terms-label")).size(typography::BODY))
        .push(note(i18n.tr("settings-terms-body")))
        .into()
}
