// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Coral pill used for every "schedule" call to action.
pub fn cta(_theme: &Theme, status: button::Status) -> button::Style {
    let pill = Border {
        radius: radius::FULL.into(),
        ..Default::default()
    };

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::CORAL_500)),
            text_color: WHITE,
            border: pill,
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::CORAL_600)),
            text_color: WHITE,
            border: pill,
            shadow: shadow::LG,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::CORAL_500
            })),
            text_color: Color {
                a: opacity::OVERLAY_HOVER,
                ..WHITE
            },
            border: pill,
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Outlined pill for secondary actions.
pub fn outline(theme: &Theme, status: button::Status) -> button::Style {
    let ext = theme.extended_palette();
    let text_color = ext.background.base.text;
    let border_color = if ext.is_dark {
        palette::PETROL_500
    } else {
        palette::PETROL_300
    };

    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::PETROL_300
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color,
        border: Border {
            color: border_color,
            width: border::WIDTH_MD,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Borderless text button for header navigation.
pub fn nav_link(theme: &Theme, status: button::Status) -> button::Style {
    let ext = theme.extended_palette();
    let (background, text_color) = match status {
        button::Status::Hovered | button::Status::Pressed => (
            Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::EMERALD_500
            })),
            if ext.is_dark {
                palette::EMERALD_400
            } else {
                palette::EMERALD_700
            },
        ),
        _ => (None, ext.background.base.text),
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Round previous/next control of the carousels.
pub fn carousel_arrow(theme: &Theme, status: button::Status) -> button::Style {
    let base = outline(theme, status);
    button::Style {
        border: Border {
            width: border::WIDTH_SM,
            ..base.border
        },
        ..base
    }
}

/// Position indicator of a carousel; the active one is drawn as a wider emerald pill.
pub fn carousel_dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let idle = if theme.extended_palette().is_dark {
            palette::PETROL_600
        } else {
            palette::PETROL_300
        };
        let color = match (active, status) {
            (true, _) => palette::EMERALD_500,
            (false, button::Status::Hovered) => palette::EMERALD_400,
            (false, _) => idle,
        };

        button::Style {
            background: Some(Background::Color(color)),
            text_color: color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Clickable technology step card on the dark band.
pub fn step_card(reached: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let border_color = if reached {
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::EMERALD_500
            }
        } else {
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::PETROL_700
            }
        };
        let alpha = match status {
            button::Status::Hovered => opacity::OVERLAY_HOVER,
            _ => opacity::OVERLAY_MEDIUM,
        };

        button::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..palette::PETROL_800
            })),
            text_color: WHITE,
            border: Border {
                color: border_color,
                width: border::WIDTH_SM,
                radius: radius::LG.into(),
            },
            shadow: if reached { shadow::MD } else { shadow::NONE },
            snap: true,
        }
    }
}

/// Small dismiss button inside toasts.
pub fn dismiss(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::PETROL_300
        })),
        button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::PETROL_300
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color: base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cta_button_uses_coral() {
        let style = cta(&Theme::Light, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::CORAL_500);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn disabled_cta_is_translucent() {
        let style = cta(&Theme::Light, button::Status::Disabled);
        match style.background {
            Some(Background::Color(bg)) => assert!(bg.a < 1.0),
            other => panic!("Expected background color, got {other:?}"),
        }
    }

    #[test]
    fn active_dot_differs_from_idle_dot() {
        let active = carousel_dot(true)(&Theme::Light, button::Status::Active);
        let idle = carousel_dot(false)(&Theme::Light, button::Status::Active);
        assert_ne!(active.background, idle.background);
    }

    #[test]
    fn reached_step_has_emerald_border() {
        let reached = step_card(true)(&Theme::Dark, button::Status::Active);
        let pending = step_card(false)(&Theme::Dark, button::Status::Active);
        assert_ne!(reached.border.color, pending.border.color);
    }
}
