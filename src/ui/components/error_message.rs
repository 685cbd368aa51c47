// SPDX-License-Identifier: MPL-2.0
//! Inline error block with an optional retry action.
//!
//! ```ignore
//! ErrorMessage::new(&colors)
//!     .title(i18n.tr("error-title"))
//!     .message(i18n.tr(error.i18n_key()))
//!     .action(i18n.tr("error-retry"), Message::Retry)
//!     .view()
//! ```

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, text, Column, Container, Text};
use iced::{alignment, Color, Element, Length, Theme};

#[derive(Debug, Clone)]
pub struct ErrorMessage<Message> {
    colors: ColorScheme,
    glyph: &'static str,
    title: Option<String>,
    message: Option<String>,
    action_label: Option<String>,
    action_message: Option<Message>,
}

impl<Message: Clone + 'static> ErrorMessage<Message> {
    pub fn new(colors: &ColorScheme) -> Self {
        Self {
            colors: colors.clone(),
            glyph: "⚠",
            title: None,
            message: None,
            action_label: None,
            action_message: None,
        }
    }

    /// Replaces the leading warning sign.
    pub fn glyph(mut self, glyph: &'static str) -> Self {
        self.glyph = glyph;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn action(mut self, label: impl Into<String>, message: Message) -> Self {
        self.action_label = Some(label.into());
        self.action_message = Some(message);
        self
    }

    pub fn view(self) -> Element<'static, Message> {
        let accent = self.colors.error;
        let secondary = self.colors.text_secondary;

        let mut content = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill)
            .push(
                Text::new(self.glyph)
                    .size(sizing::ICON_XL)
                    .style(move |_theme: &Theme| text::Style {
                        color: Some(accent),
                    }),
            );

        if let Some(title) = self.title {
            content = content.push(Text::new(title).size(typography::TITLE_SM));
        }

        if let Some(message) = self.message {
            content = content.push(
                Text::new(message)
                    .size(typography::BODY)
                    .align_x(alignment::Horizontal::Center)
                    .style(move |_theme: &Theme| text::Style {
                        color: Some(secondary),
                    }),
            );
        }

        if let (Some(label), Some(msg)) = (self.action_label, self.action_message) {
            content = content.push(
                button(Text::new(label))
                    .on_press(msg)
                    .padding([spacing::XS, spacing::LG])
                    .style(styles::button::primary),
            );
        }

        Container::new(content)
            .width(Length::Fill)
            .padding(spacing::LG)
            .style(styles::container::error_box(&self.colors))
            .into()
    }

    #[cfg(test)]
    fn accent(&self) -> Color {
        self.colors.error
    }
}
