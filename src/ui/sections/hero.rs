// SPDX-License-Identifier: MPL-2.0
//! Opening section: headline, trust badges and the two entry points.

use super::{catalog_image, responsive_row, section_body, PageLayout, SectionId};
use crate::content::catalog::HERO_IMAGE;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, container, Column, Container, Row, Text},
    Element, Length,
};
use std::path::Path;

const HERO_IMAGE_HEIGHT: f32 = 460.0;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub layout: PageLayout,
    pub assets_dir: &'a Path,
    pub revealed: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(SectionId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ScrollTo(SectionId),
}

#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::Navigate(section) => Event::ScrollTo(section),
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let badges = Row::new()
        .spacing(spacing::XS)
        .push(badge(i18n.tr("hero-badge-experience"), palette::EMERALD_600))
        .push(badge(i18n.tr("hero-badge-smiles"), palette::CORAL_500))
        .push(badge(i18n.tr("hero-badge-3d"), palette::PETROL_500))
        .wrap();

    let title = Column::new()
        .push(
            Text::new(i18n.tr("hero-title"))
                .size(typography::DISPLAY)
                .style(styles::text::heading(ctx.revealed)),
        )
        .push(
            Text::new(i18n.tr("hero-title-accent"))
                .size(typography::DISPLAY)
                .style(styles::text::accent(ctx.revealed)),
        );

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(
            button(Text::new(i18n.tr("hero-cta-primary")).size(typography::BODY))
                .on_press(Message::Navigate(SectionId::Contact))
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::cta),
        )
        .push(
            button(Text::new(i18n.tr("hero-cta-secondary")).size(typography::BODY))
                .on_press(Message::Navigate(SectionId::Treatments))
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::outline),
        )
        .wrap();

    let copy = Column::new()
        .spacing(spacing::LG)
        .width(Length::Fill)
        .push(badges)
        .push(title)
        .push(
            Text::new(i18n.tr("hero-tagline"))
                .size(typography::TITLE_SM)
                .style(styles::text::accent(ctx.revealed)),
        )
        .push(
            Text::new(i18n.tr("hero-body"))
                .size(typography::BODY_LG)
                .style(styles::text::muted),
        )
        .push(actions);

    let mut columns: Vec<Element<'a, Message>> = vec![copy.into()];
    if ctx.layout.is_wide() {
        columns.push(
            Container::new(catalog_image(ctx.assets_dir, HERO_IMAGE, HERO_IMAGE_HEIGHT))
                .width(Length::Fill)
                .style(styles::container::card)
                .into(),
        );
    }

    let explore = button(
        Column::new()
            .align_x(Horizontal::Center)
            .push(Text::new(i18n.tr("hero-explore")).size(typography::CAPTION))
            .push(Text::new("⌄").size(typography::TITLE_SM)),
    )
    .on_press(Message::Navigate(SectionId::Differentials))
    .style(styles::button::nav_link);

    section_body(
        Column::new()
            .spacing(spacing::XXL)
            .align_x(Horizontal::Center)
            .push(responsive_row(ctx.layout, columns, spacing::XXL))
            .push(explore),
    )
}

fn badge<'a>(label: String, tint: iced::Color) -> Element<'a, Message> {
    container(Text::new(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::badge(tint))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_points_scroll_to_their_sections() {
        assert_eq!(
            update(Message::Navigate(SectionId::Contact)),
            Event::ScrollTo(SectionId::Contact)
        );
        assert_eq!(
            update(Message::Navigate(SectionId::Differentials)),
            Event::ScrollTo(SectionId::Differentials)
        );
    }
}
