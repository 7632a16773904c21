// SPDX-License-Identifier: MPL-2.0
//! Light/dark theming built on the clinic palette.

use crate::ui::design_tokens::palette;
use iced::theme::Palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,
    /// Background of the dark bands (technology, contact, footer).
    pub surface_inverse: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_inverse: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_secondary: Color,
    pub accent: Color,

    // Semantic colors
    pub error: Color,
    pub warning: Color,
    pub success: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::PEARL_100,
            surface_secondary: palette::WHITE,
            surface_inverse: palette::PETROL_900,

            text_primary: palette::PETROL_900,
            text_secondary: palette::PETROL_600,
            text_inverse: palette::PEARL_100,

            brand_primary: palette::EMERALD_600,
            brand_secondary: palette::PETROL_600,
            accent: palette::CORAL_500,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::PETROL_900,
            surface_secondary: palette::PETROL_800,
            surface_inverse: palette::PETROL_800,

            text_primary: palette::PEARL_100,
            text_secondary: palette::PEARL_300,
            text_inverse: palette::PEARL_100,

            brand_primary: palette::EMERALD_400,
            brand_secondary: palette::PETROL_300,
            accent: palette::CORAL_400,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
        }
    }

    fn iced_palette(&self) -> Palette {
        Palette {
            background: self.surface_primary,
            text: self.text_primary,
            primary: self.brand_primary,
            success: self.success,
            danger: self.error,
            ..Palette::LIGHT
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // The site is light by default, so detection failures stay light
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }

    /// Next mode in the header toggle cycle: light, dark, system.
    #[must_use]
    pub fn cycle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
            ThemeMode::System => ThemeMode::Light,
        }
    }

    /// i18n key naming this mode on the toggle button.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-mode-light",
            ThemeMode::Dark => "theme-mode-dark",
            ThemeMode::System => "theme-mode-system",
        }
    }
}

/// Theme configuration resolved for the current mode.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
    pub is_dark: bool,
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let is_dark = mode.is_dark();
        let colors = if is_dark {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        };

        Self {
            colors,
            mode,
            is_dark,
        }
    }

    /// Builds the Iced theme carrying the clinic palette.
    #[must_use]
    pub fn to_iced(&self) -> Theme {
        let name = if self.is_dark {
            "Essence Dark"
        } else {
            "Essence Light"
        };
        Theme::custom(name.to_string(), self.colors.iced_palette())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_primary.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface_primary.r < 0.2);
    }

    #[test]
    fn both_themes_use_emerald_brand() {
        // Emerald: green and blue well above red
        for scheme in [ColorScheme::light(), ColorScheme::dark()] {
            assert!(scheme.brand_primary.g > scheme.brand_primary.r);
            assert!(scheme.brand_primary.b > scheme.brand_primary.r);
        }
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn cycle_visits_every_mode() {
        let start = ThemeMode::Light;
        let second = start.cycle();
        let third = second.cycle();
        assert_eq!(second, ThemeMode::Dark);
        assert_eq!(third, ThemeMode::System);
        assert_eq!(third.cycle(), start);
    }

    #[test]
    fn app_theme_matches_explicit_mode() {
        assert!(AppTheme::new(ThemeMode::Dark).is_dark);
        assert!(!AppTheme::new(ThemeMode::Light).is_dark);
    }
}
