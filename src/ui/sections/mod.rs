// SPDX-License-Identifier: MPL-2.0
//! Page sections, top to bottom.
//!
//! Each module follows the same shape: a `ViewContext` with borrowed data,
//! and, for interactive sections, a `Message`, an `Event` for the parent and
//! an `update` function. Purely presentational sections expose a `view`
//! generic over the parent message type.
//!
//! The app wraps every section in a
//! [`RevealSensor`](crate::ui::widgets::RevealSensor); sections only receive
//! the resulting `revealed` flag.

pub mod blog;
pub mod contact;
pub mod differentials;
pub mod footer;
pub mod header;
pub mod hero;
pub mod results;
pub mod technology;
pub mod testimonials;
pub mod treatments;

use crate::app::config::{CONTENT_MAX_WIDTH, WIDE_LAYOUT_BREAKPOINT};
use crate::content::ImageRef;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{container, image, text, Column, Container, Row, Text};
use iced::{alignment, ContentFit, Element, Length};
use std::path::Path;

/// Scroll targets of the page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    Differentials,
    Treatments,
    Technology,
    Results,
    Testimonials,
    Blog,
    Contact,
    Footer,
}

impl SectionId {
    pub const ALL: [SectionId; 9] = [
        SectionId::Hero,
        SectionId::Differentials,
        SectionId::Treatments,
        SectionId::Technology,
        SectionId::Results,
        SectionId::Testimonials,
        SectionId::Blog,
        SectionId::Contact,
        SectionId::Footer,
    ];

    /// Sections listed in the header and the footer's quick links.
    pub const NAVIGATION: [SectionId; 7] = [
        SectionId::Hero,
        SectionId::Treatments,
        SectionId::Technology,
        SectionId::Results,
        SectionId::Testimonials,
        SectionId::Blog,
        SectionId::Contact,
    ];

    /// i18n key of the navigation label.
    #[must_use]
    pub fn nav_key(self) -> &'static str {
        match self {
            SectionId::Hero => "nav-home",
            SectionId::Differentials => "nav-differentials",
            SectionId::Treatments => "nav-treatments",
            SectionId::Technology => "nav-technology",
            SectionId::Results => "nav-results",
            SectionId::Testimonials => "nav-testimonials",
            SectionId::Blog => "nav-blog",
            SectionId::Contact => "nav-contact",
            SectionId::Footer => "nav-footer",
        }
    }

    /// Position in [`SectionId::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Window-dependent layout decisions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub width: f32,
}

impl PageLayout {
    #[must_use]
    pub fn new(width: f32) -> Self {
        Self { width }
    }

    /// Multi-column layout with side-by-side cards.
    #[must_use]
    pub fn is_wide(self) -> bool {
        self.width >= WIDE_LAYOUT_BREAKPOINT
    }
}

/// Two-tone section title with an optional subtitle, centered.
pub(crate) fn section_heading<'a, Message: 'a>(
    i18n: &I18n,
    prefix_key: &str,
    accent_key: &str,
    subtitle_key: &str,
    revealed: bool,
    inverse: bool,
) -> Element<'a, Message> {
    let title = Row::new()
        .spacing(spacing::XS)
        .push(
            Text::new(i18n.tr(prefix_key))
                .size(typography::TITLE_LG)
                .style(if inverse {
                    boxed_style(styles::text::on_inverse(revealed))
                } else {
                    boxed_style(styles::text::heading(revealed))
                }),
        )
        .push(
            Text::new(i18n.tr(accent_key))
                .size(typography::TITLE_LG)
                .style(if inverse {
                    boxed_style(styles::text::on_inverse_accent(revealed))
                } else {
                    boxed_style(styles::text::accent(revealed))
                }),
        )
        .wrap();

    let subtitle_style: fn(&iced::Theme) -> text::Style = if inverse {
        styles::text::on_inverse_muted
    } else {
        styles::text::muted
    };
    let subtitle = Text::new(i18n.tr(subtitle_key))
        .size(typography::BODY_LG)
        .align_x(alignment::Horizontal::Center)
        .style(subtitle_style);

    Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .width(Length::Fill)
        .push(title)
        .push(subtitle)
        .into()
}

type TextStyleFn<'a> = Box<dyn Fn(&iced::Theme) -> text::Style + 'a>;

fn boxed_style<'a>(style: impl Fn(&iced::Theme) -> text::Style + 'a) -> TextStyleFn<'a> {
    Box::new(style)
}

/// Centers `content` and caps its width, with the vertical section padding.
pub(crate) fn section_body<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    Container::new(
        Container::new(content)
            .max_width(CONTENT_MAX_WIDTH)
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .center_x(Length::Fill)
    .padding([spacing::SECTION, spacing::LG])
    .into()
}

/// Lays children out side by side on wide windows and stacked otherwise.
pub(crate) fn responsive_row<'a, Message: 'a>(
    layout: PageLayout,
    children: Vec<Element<'a, Message>>,
    gap: f32,
) -> Element<'a, Message> {
    if layout.is_wide() {
        Row::with_children(children).spacing(gap).into()
    } else {
        Column::with_children(children).spacing(gap).into()
    }
}

/// Catalog image cropped to fill, or a neutral placeholder when the file is missing.
pub(crate) fn catalog_image<'a, Message: 'a>(
    assets_dir: &Path,
    reference: ImageRef,
    height: impl Into<Length>,
) -> Element<'a, Message> {
    let path = reference.resolve(assets_dir);
    let height = height.into();
    if path.is_file() {
        image(image::Handle::from_path(path))
            .width(Length::Fill)
            .height(height)
            .content_fit(ContentFit::Cover)
            .into()
    } else {
        container(Text::new(reference.0).size(typography::CAPTION))
            .width(Length::Fill)
            .height(height)
            .center_x(Length::Fill)
            .center_y(height)
            .style(styles::container::image_placeholder)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_index_matches_display_order() {
        for (position, section) in SectionId::ALL.iter().enumerate() {
            assert_eq!(section.index(), position);
        }
    }

    #[test]
    fn navigation_starts_at_hero_and_ends_at_contact() {
        assert_eq!(SectionId::NAVIGATION.first(), Some(&SectionId::Hero));
        assert_eq!(SectionId::NAVIGATION.last(), Some(&SectionId::Contact));
    }

    #[test]
    fn breakpoint_is_inclusive() {
        assert!(PageLayout::new(WIDE_LAYOUT_BREAKPOINT).is_wide());
        assert!(!PageLayout::new(WIDE_LAYOUT_BREAKPOINT - 1.0).is_wide());
    }
}
