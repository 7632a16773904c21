// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every color, spacing, size and radius used by the page lives here.

## Organization

- **Palette**: The clinic colors (petrol, emerald, coral, pearl) plus semantic colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use essence_clinic::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let label_bg = Color {
    a: opacity::OVERLAY_HOVER,
    ..palette::PETROL_900
};

let padding = spacing::MD; // 16px
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

    // Petrol (deep blue-green, headings and dark surfaces)
    pub const PETROL_100: Color = Color::from_rgb(0.85, 0.91, 0.93);
    pub const PETROL_300: Color = Color::from_rgb(0.55, 0.68, 0.73);
    pub const PETROL_500: Color = Color::from_rgb(0.16, 0.40, 0.48);
    pub const PETROL_600: Color = Color::from_rgb(0.12, 0.33, 0.40);
    pub const PETROL_700: Color = Color::from_rgb(0.09, 0.26, 0.32);
    pub const PETROL_800: Color = Color::from_rgb(0.06, 0.19, 0.24);
    pub const PETROL_900: Color = Color::from_rgb(0.04, 0.13, 0.17);

    // Emerald (brand accent)
    pub const EMERALD_100: Color = Color::from_rgb(0.80, 0.97, 0.94);
    pub const EMERALD_400: Color = Color::from_rgb(0.18, 0.90, 0.80);
    pub const EMERALD_500: Color = Color::from_rgb(0.0, 0.85, 0.75);
    pub const EMERALD_600: Color = Color::from_rgb(0.0, 0.70, 0.62);
    pub const EMERALD_700: Color = Color::from_rgb(0.0, 0.55, 0.49);

    // Coral (calls to action, rating stars)
    pub const CORAL_400: Color = Color::from_rgb(1.0, 0.55, 0.72);
    pub const CORAL_500: Color = Color::from_rgb(1.0, 0.42, 0.62);
    pub const CORAL_600: Color = Color::from_rgb(0.90, 0.32, 0.52);

    // Pearl (light surfaces)
    pub const PEARL_100: Color = Color::from_rgb(0.98, 0.97, 0.95);
    pub const PEARL_200: Color = Color::from_rgb(0.94, 0.93, 0.90);
    pub const PEARL_300: Color = Color::from_rgb(0.86, 0.85, 0.82);
    pub const PEARL_400: Color = Color::from_rgb(0.72, 0.72, 0.70);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;

    /// Content of a section that has not been revealed yet.
    pub const UNREVEALED: f32 = 0.35;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
    pub const SECTION: f32 = 80.0; // 10 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const HEADER_HEIGHT: f32 = 64.0;
    pub const BUTTON_HEIGHT: f32 = 40.0;
    pub const NAV_BUTTON: f32 = 40.0;
    pub const TOAST_WIDTH: f32 = 340.0;
    pub const CARD_IMAGE_HEIGHT: f32 = 180.0;
    pub const AVATAR: f32 = 56.0;
    pub const STEP_BADGE: f32 = 48.0;
    pub const HANDLE_KNOB: f32 = 40.0;
    pub const TOAST_GLYPH: f32 = 24.0;
    pub const ICON_TILE: f32 = 48.0;

    /// Carousel position dots.
    pub const DOT: f32 = 8.0;
    pub const DOT_ACTIVE_WIDTH: f32 = 32.0;

    pub const PROGRESS_TRACK: f32 = 4.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Display: hero heading
    //! - Titles: section and card headings
    //! - Body: paragraphs and form labels
    //! - Caption: badges and small print

    pub const DISPLAY: f32 = 44.0;
    pub const TITLE_LG: f32 = 34.0;
    pub const TITLE_MD: f32 = 22.0;
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY_LG: f32 = 17.0;
    pub const BODY: f32 = 15.0;
    pub const BODY_SM: f32 = 13.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Card outlines, input fields
    pub const WIDTH_SM: f32 = 1.0;

    /// Emphasis borders, toast accents, active step
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 12.0,
    };

    pub const LG: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
        offset: Vector { x: 0.0, y: 10.0 },
        blur_radius: 24.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::SECTION > spacing::XXL);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::UNREVEALED > 0.0 && opacity::UNREVEALED < 1.0);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(sizing::DOT_ACTIVE_WIDTH > sizing::DOT);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn petrol_scale_darkens() {
        assert!(palette::PETROL_100.g > palette::PETROL_500.g);
        assert!(palette::PETROL_500.g > palette::PETROL_900.g);
    }
}
