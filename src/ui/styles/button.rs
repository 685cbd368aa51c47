// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.
//!
//! Colors come from the active theme's palette so every style follows the
//! light/dark switch.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn with_alpha(color: Color, a: f32) -> Color {
    Color { a, ..color }
}

/// Filled button for the main action of a screen.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let (background, shadow) = match status {
        button::Status::Active | button::Status::Pressed => (palette.primary.base.color, shadow::SM),
        button::Status::Hovered => (palette.primary.strong.color, shadow::MD),
        button::Status::Disabled => (
            with_alpha(palette.primary.base.color, opacity::OVERLAY_MEDIUM),
            shadow::NONE,
        ),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette.primary.base.text,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow,
        snap: true,
    }
}

/// Neutral button on a surface.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered => palette.background.strong.color,
        _ => palette.background.weak.color,
    };
    let text_color = match status {
        button::Status::Disabled => with_alpha(palette.background.base.text, opacity::OVERLAY_MEDIUM),
        _ => palette.background.base.text,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Destructive action (clear favorites, reset app).
pub fn danger(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered => palette.danger.strong.color,
        button::Status::Disabled => with_alpha(palette.danger.base.color, opacity::OVERLAY_MEDIUM),
        _ => palette.danger.base.color,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette.danger.base.text,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Navbar tab; `selected` marks the current screen.
pub fn tab(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let palette = theme.extended_palette();
        let text_color = if selected {
            palette.primary.base.color
        } else {
            palette.background.base.text
        };
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => {
                Some(Background::Color(palette.background.weak.color))
            }
            _ => None,
        };

        button::Style {
            background,
            text_color,
            border: Border {
                color: if selected {
                    palette.primary.base.color
                } else {
                    Color::TRANSPARENT
                },
                width: if selected { 1.0 } else { 0.0 },
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Text-only button (toolbar actions, dismiss crosses).
pub fn flat(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered => Some(Background::Color(with_alpha(
            palette.background.strong.color,
            opacity::OVERLAY_MEDIUM,
        ))),
        button::Status::Pressed => Some(Background::Color(palette.background.strong.color)),
        _ => None,
    };
    let text_color = match status {
        button::Status::Disabled => with_alpha(palette.background.base.text, opacity::OVERLAY_MEDIUM),
        _ => palette.background.base.text,
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Grid tile: no chrome, the image is the button.
pub fn tile(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Some(Background::Color(with_alpha(WHITE, opacity::OVERLAY_SUBTLE))),
        _ => None,
    };

    button::Style {
        background,
        text_color: WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Round translucent button drawn over an image.
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            button::Status::Disabled => opacity::OVERLAY_SUBTLE,
            button::Status::Active => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(with_alpha(BLACK, alpha))),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}
