// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Settings sections and dialogs.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.weak.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Navbar strip along the top of the window.
pub fn navbar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Full-bleed black backdrop of the viewer.
pub fn viewer_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::BLACK)),
        text_color: Some(Color::WHITE),
        ..Default::default()
    }
}

/// Translucent band behind the viewer header and caption.
pub fn viewer_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..Color::BLACK
        })),
        text_color: Some(Color::WHITE),
        ..Default::default()
    }
}

/// Flat block in the scheme's skeleton color.
pub fn skeleton(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let color = colors.skeleton;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Placeholder behind a tile whose image is not loaded yet.
pub fn tile_placeholder(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.surface;
    let text = colors.text_tertiary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Full-width banner in `color` with white text.
pub fn banner(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        text_color: Some(Color::WHITE),
        ..Default::default()
    }
}

/// Inline error box with an accent border.
pub fn error_box(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let accent = colors.error;
    let background = colors.card;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: accent,
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}
