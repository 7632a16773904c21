// SPDX-License-Identifier: MPL-2.0
//! "Why choose us" cards.

use super::{responsive_row, section_body, section_heading, PageLayout};
use crate::content::Differential;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{container, Column, Container, Text},
    Element, Length,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub layout: PageLayout,
    pub differentials: &'a [Differential],
    pub revealed: bool,
}

pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> = ctx
        .differentials
        .iter()
        .map(|item| card(item, ctx.revealed))
        .collect();

    let content = Column::new()
        .spacing(spacing::XXL)
        .push(section_heading(
            ctx.i18n,
            "differentials-title",
            "differentials-title-accent",
            "differentials-subtitle",
            ctx.revealed,
            false,
        ))
        .push(responsive_row(ctx.layout, cards, spacing::LG));

    Container::new(section_body(content))
        .width(Length::Fill)
        .style(styles::container::band)
        .into()
}

fn card<'a, Message: 'a>(item: &'a Differential, revealed: bool) -> Element<'a, Message> {
    let tile = container(Text::new(item.icon.glyph()).size(typography::TITLE_MD))
        .width(Length::Fixed(sizing::ICON_TILE))
        .height(Length::Fixed(sizing::ICON_TILE))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::icon_tile(palette::EMERALD_600));

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(tile)
            .push(
                Text::new(item.title)
                    .size(typography::TITLE_SM)
                    .style(styles::text::heading(revealed)),
            )
            .push(
                Text::new(item.description)
                    .size(typography::BODY)
                    .align_x(Horizontal::Center)
                    .style(styles::text::muted),
            ),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .style(styles::container::card)
    .into()
}
