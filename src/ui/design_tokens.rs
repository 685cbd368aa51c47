// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every color, spacing, size and radius used by the gallery UI.

## Organization

- **Palette**: Base colors, one constant per light/dark variant
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_gallery::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let scrim = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::BLACK
};
let gap = spacing::XS;
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Light surfaces
    pub const SURFACE_LIGHT: Color = Color::from_rgb8(245, 245, 245);
    pub const SURFACE_SECONDARY_LIGHT: Color = Color::from_rgb8(249, 249, 249);
    pub const BORDER_LIGHT: Color = Color::from_rgb8(240, 240, 240);
    pub const SEPARATOR_LIGHT: Color = Color::from_rgb8(229, 229, 229);
    pub const SKELETON_LIGHT: Color = Color::from_rgb8(225, 233, 238);

    // Dark surfaces
    pub const SURFACE_DARK: Color = Color::from_rgb8(28, 28, 30);
    pub const SURFACE_SECONDARY_DARK: Color = Color::from_rgb8(31, 31, 31);
    pub const BORDER_DARK: Color = Color::from_rgb8(51, 51, 51);
    pub const SEPARATOR_DARK: Color = Color::from_rgb8(44, 44, 46);
    pub const SKELETON_DARK: Color = Color::from_rgb8(51, 51, 51);

    // Text
    pub const TEXT_SECONDARY_LIGHT: Color = Color::from_rgb8(102, 102, 102);
    pub const TEXT_SECONDARY_DARK: Color = Color::from_rgb8(153, 153, 153);
    pub const TEXT_TERTIARY: Color = Color::from_rgb8(172, 172, 172);

    // Brand
    pub const PRIMARY_LIGHT: Color = Color::from_rgb8(0, 122, 255);
    pub const PRIMARY_DARK: Color = Color::from_rgb8(10, 132, 255);

    // Semantic
    pub const ERROR_LIGHT: Color = Color::from_rgb8(255, 59, 48);
    pub const ERROR_DARK: Color = Color::from_rgb8(255, 69, 58);
    pub const SUCCESS_LIGHT: Color = Color::from_rgb8(52, 199, 89);
    pub const SUCCESS_DARK: Color = Color::from_rgb8(48, 209, 88);
    pub const WARNING: Color = Color::from_rgb8(255, 149, 0);
    pub const INFO: Color = Color::from_rgb8(90, 200, 250);

    /// Offline banner background, identical in both themes.
    pub const OFFLINE_BANNER: Color = Color::from_rgb8(255, 107, 107);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.1;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;

    /// Semi-transparent panels and toasts.
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;

    /// Gap between masonry tiles, both horizontally and vertically.
    pub const GRID_GAP: f32 = XXS;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;

    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const NAVBAR_HEIGHT: f32 = 48.0;

    /// Reference width used to turn an aspect ratio into a tile height.
    pub const TILE_BASE_WIDTH: f32 = 200.0;
    /// Skeleton tile heights, cycled to mimic a masonry layout.
    pub const SKELETON_HEIGHTS: [f32; 4] = [180.0, 240.0, 140.0, 210.0];

    pub const SETTINGS_WIDTH: f32 = 560.0;
    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font sizes, from page titles down to captions.

    pub const TITLE_LG: f32 = 28.0;
    pub const TITLE_MD: f32 = 20.0;
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const BODY_SM: f32 = 13.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::XS, spacing::XXS * 2.0);
    }

    #[test]
    fn skeleton_heights_are_positive() {
        assert!(sizing::SKELETON_HEIGHTS.iter().all(|h| *h > 0.0));
    }
}
