// SPDX-License-Identifier: MPL-2.0
//! Navigation bar with the three main tabs, a refresh button and the theme
//! toggle. Hidden while the full-screen viewer is open.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Space, Text},
    Element, Length,
};

/// Screens reachable from the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Gallery,
    Favorites,
    Settings,
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Tab,
    pub favorites_count: usize,
    pub theme_mode: ThemeMode,
    /// A gallery fetch is in flight; refresh is disabled.
    pub busy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Open(Tab),
    Refresh,
    ToggleTheme,
}

/// Glyph of the theme toggle for the current mode.
pub fn theme_glyph(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "☀",
        ThemeMode::Dark => "☾",
        ThemeMode::System => "◐",
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let favorites_label = if ctx.favorites_count > 0 {
        let count = ctx.favorites_count.to_string();
        ctx.i18n
            .tr_with_args("tab-favorites-count", &[("count", count.as_str())])
    } else {
        ctx.i18n.tr("tab-favorites")
    };

    let tabs = [
        (Tab::Gallery, ctx.i18n.tr("tab-gallery")),
        (Tab::Favorites, favorites_label),
        (Tab::Settings, ctx.i18n.tr("tab-settings")),
    ];

    let mut row = Row::new()
        .spacing(spacing::XS)
        .padding([0.0, spacing::SM])
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .push(Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_SM))
        .push(Space::new().width(Length::Fixed(spacing::LG)));

    for (tab, label) in tabs {
        row = row.push(
            button(Text::new(label).size(typography::BODY))
                .on_press(Message::Open(tab))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::tab(tab == ctx.active)),
        );
    }

    let refresh = button(Text::new("⟳").size(typography::BODY_LG))
        .on_press_maybe((!ctx.busy && ctx.active == Tab::Gallery).then_some(Message::Refresh))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::flat);

    let theme_toggle = button(Text::new(theme_glyph(ctx.theme_mode)).size(typography::BODY_LG))
        .on_press(Message::ToggleTheme)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::flat);

    row = row
        .push(Space::new().width(Length::Fill))
        .push(refresh)
        .push(theme_toggle);

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::navbar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_view_renders() {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            active: Tab::Gallery,
            favorites_count: 0,
            theme_mode: ThemeMode::Dark,
            busy: false,
        });
    }

    #[test]
    fn navbar_view_renders_with_favorites() {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            active: Tab::Favorites,
            favorites_count: 12,
            theme_mode: ThemeMode::System,
            busy: true,
        });
    }

    #[test]
    fn every_mode_has_a_distinct_glyph() {
        let glyphs: Vec<_> = ThemeMode::ALL.iter().map(|m| theme_glyph(*m)).collect();
        assert_ne!(glyphs[0], glyphs[1]);
        assert_ne!(glyphs[1], glyphs[2]);
        assert_ne!(glyphs[0], glyphs[2]);
    }
}
