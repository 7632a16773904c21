// SPDX-License-Identifier: MPL-2.0
//! Text color styles.
//!
//! Sections that have not been revealed yet render their headings muted; the
//! `revealed` flag threads through every helper that takes it.

use crate::ui::design_tokens::{opacity, palette};
use iced::widget::text;
use iced::{Color, Theme};

fn fade(color: Color, revealed: bool) -> Color {
    if revealed {
        color
    } else {
        Color {
            a: color.a * opacity::UNREVEALED,
            ..color
        }
    }
}

/// Main heading color on page-colored bands.
pub fn heading(revealed: bool) -> impl Fn(&Theme) -> text::Style {
    move |theme: &Theme| text::Style {
        color: Some(fade(theme.extended_palette().background.base.text, revealed)),
    }
}

/// Emerald accent used for the highlighted part of section titles.
pub fn accent(revealed: bool) -> impl Fn(&Theme) -> text::Style {
    move |theme: &Theme| {
        let color = if theme.extended_palette().is_dark {
            palette::EMERALD_400
        } else {
            palette::EMERALD_600
        };
        text::Style {
            color: Some(fade(color, revealed)),
        }
    }
}

/// Secondary paragraph text.
pub fn muted(theme: &Theme) -> text::Style {
    let ext = theme.extended_palette();
    let color = if ext.is_dark {
        palette::PEARL_300
    } else {
        palette::PETROL_600
    };
    text::Style { color: Some(color) }
}

/// Light text on the dark petrol bands.
pub fn on_inverse(revealed: bool) -> impl Fn(&Theme) -> text::Style {
    move |_theme: &Theme| text::Style {
        color: Some(fade(palette::PEARL_100, revealed)),
    }
}

/// Secondary text on the dark petrol bands.
pub fn on_inverse_muted(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(palette::PEARL_300),
    }
}

/// Accent on the dark petrol bands.
pub fn on_inverse_accent(revealed: bool) -> impl Fn(&Theme) -> text::Style {
    move |_theme: &Theme| text::Style {
        color: Some(fade(palette::EMERALD_400, revealed)),
    }
}

/// Inline validation message under a form field.
pub fn field_error(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(palette::CORAL_400),
    }
}

/// Filled (`true`) or empty rating star.
pub fn star(filled: bool) -> impl Fn(&Theme) -> text::Style {
    move |_theme: &Theme| text::Style {
        color: Some(if filled {
            palette::CORAL_500
        } else {
            palette::PEARL_400
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrevealed_heading_is_faded() {
        let shown = heading(true)(&Theme::Light).color.unwrap();
        let hidden = heading(false)(&Theme::Light).color.unwrap();
        assert!(hidden.a < shown.a);
    }

    #[test]
    fn filled_star_is_coral() {
        assert_eq!(star(true)(&Theme::Light).color, Some(palette::CORAL_500));
    }
}
