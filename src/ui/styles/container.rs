// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Page background behind light sections.
pub fn page(theme: &Theme) -> container::Style {
    let ext = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(ext.background.base.color)),
        text_color: Some(ext.background.base.text),
        ..Default::default()
    }
}

/// Alternate band for sections that sit between two page-colored ones.
pub fn band(theme: &Theme) -> container::Style {
    let ext = theme.extended_palette();
    let color = if ext.is_dark {
        palette::PETROL_800
    } else {
        palette::WHITE
    };
    container::Style {
        background: Some(Background::Color(color)),
        text_color: Some(ext.background.base.text),
        ..Default::default()
    }
}

/// Dark petrol band used by the technology, contact and footer sections in both modes.
pub fn band_inverse(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PETROL_900)),
        text_color: Some(palette::PEARL_100),
        ..Default::default()
    }
}

/// Header bar. Becomes opaque with a shadow once the page has scrolled.
pub fn header(scrolled: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let ext = theme.extended_palette();
        let base = ext.background.base.color;
        let (alpha, shadow) = if scrolled {
            (opacity::OVERLAY_HOVER + 0.15, shadow::MD)
        } else {
            (opacity::OPAQUE, shadow::NONE)
        };
        container::Style {
            background: Some(Background::Color(Color { a: alpha, ..base })),
            text_color: Some(ext.background.base.text),
            shadow,
            ..Default::default()
        }
    }
}

/// Elevated card on a light band.
pub fn card(theme: &Theme) -> container::Style {
    let ext = theme.extended_palette();
    let (background, outline) = if ext.is_dark {
        (palette::PETROL_800, palette::PETROL_700)
    } else {
        (palette::WHITE, palette::PEARL_300)
    };
    container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(ext.background.base.text),
        border: Border {
            color: outline,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Card emphasised in the middle of the testimonials window.
pub fn card_emphasis(theme: &Theme) -> container::Style {
    let base = card(theme);
    container::Style {
        border: Border {
            color: palette::EMERALD_500,
            width: border::WIDTH_MD,
            ..base.border
        },
        shadow: shadow::LG,
        ..base
    }
}

/// Translucent card on the dark band (contact form, contact info).
pub fn glass(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.1,
            ..palette::WHITE
        })),
        text_color: Some(palette::PEARL_100),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::WHITE
            },
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Small pill with a tinted background.
pub fn badge(tint: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..tint
        })),
        text_color: Some(tint),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..tint
            },
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Solid pill used for "Antes"/"Depois" corner labels and the featured ribbon.
pub fn label_pill(fill: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_HOVER,
            ..fill
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// White knob on the comparison divider.
pub fn divider_knob(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        text_color: Some(palette::PETROL_600),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Circular avatar holding a testimonial's initials.
pub fn avatar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PETROL_500)),
        text_color: Some(palette::WHITE),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::EMERALD_500
            },
            width: border::WIDTH_MD,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Rounded square behind an icon glyph.
pub fn icon_tile(fill: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(fill)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Track (`filled == false`) or filled part of the technology progress bar.
pub fn progress(filled: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(if filled {
            palette::EMERALD_500
        } else {
            palette::PETROL_700
        })),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Placeholder drawn where a catalog image could not be found.
pub fn image_placeholder(theme: &Theme) -> container::Style {
    let ext = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(if ext.is_dark {
            palette::PETROL_700
        } else {
            palette::PEARL_200
        })),
        text_color: Some(palette::PETROL_300),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Toast body with a severity-colored outline.
pub fn toast(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let base = theme.extended_palette().background.base;
        container::Style {
            background: Some(Background::Color(base.color)),
            text_color: Some(base.text),
            border: Border {
                color: accent,
                width: border::WIDTH_MD,
                radius: radius::MD.into(),
            },
            shadow: shadow::MD,
            ..Default::default()
        }
    }
}
