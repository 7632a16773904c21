// SPDX-License-Identifier: MPL-2.0
//! Treatment cards.
//!
//! "Learn more" jumps to the contact form and preselects the matching
//! treatment option when there is one.

use super::{catalog_image, responsive_row, section_body, section_heading, PageLayout};
use crate::content::catalog::TREATMENT_OPTIONS;
use crate::content::{Treatment, TreatmentOption};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    widget::{button, container, Column, Container, Row, Stack, Text},
    Element, Length,
};
use std::path::Path;

/// Cards per row on wide windows.
const CARDS_PER_ROW: usize = 2;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub layout: PageLayout,
    pub assets_dir: &'a Path,
    pub treatments: &'a [Treatment],
    pub revealed: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    LearnMore(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Open the contact form, with the option to preselect if any.
    Enquire(Option<TreatmentOption>),
}

#[must_use]
pub fn update(message: Message, treatments: &[Treatment]) -> Event {
    match message {
        Message::LearnMore(id) => {
            let option = treatments
                .iter()
                .find(|t| t.id == id)
                .and_then(|t| TREATMENT_OPTIONS.iter().copied().find(|o| o.label == t.title));
            Event::Enquire(option)
        }
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut grid = Column::new().spacing(spacing::LG);
    let per_row = if ctx.layout.is_wide() { CARDS_PER_ROW } else { 1 };

    for chunk in ctx.treatments.chunks(per_row) {
        let cards: Vec<Element<'a, Message>> = chunk
            .iter()
            .map(|treatment| card(&ctx, treatment))
            .collect();
        grid = grid.push(responsive_row(ctx.layout, cards, spacing::LG));
    }

    let content = Column::new()
        .spacing(spacing::XXL)
        .push(section_heading(
            ctx.i18n,
            "treatments-title",
            "treatments-title-accent",
            "treatments-subtitle",
            ctx.revealed,
            false,
        ))
        .push(grid);

    Container::new(section_body(content))
        .width(Length::Fill)
        .style(styles::container::page)
        .into()
}

fn card<'a>(ctx: &ViewContext<'a>, treatment: &'a Treatment) -> Element<'a, Message> {
    let picture = catalog_image(ctx.assets_dir, treatment.image, sizing::CARD_IMAGE_HEIGHT);
    let picture: Element<'a, Message> = if treatment.featured {
        Stack::new()
            .push(picture)
            .push(
                Container::new(
                    container(Text::new(ctx.i18n.tr("treatments-featured")).size(typography::CAPTION))
                        .padding([spacing::XXS, spacing::SM])
                        .style(styles::container::label_pill(palette::CORAL_500)),
                )
                .padding(spacing::SM),
            )
            .into()
    } else {
        picture
    };

    let services = treatment.services.iter().fold(
        Column::new().spacing(spacing::XXS),
        |column, service| {
            column.push(
                Row::new()
                    .spacing(spacing::XS)
                    .push(Text::new("✓").size(typography::BODY_SM).style(styles::text::accent(true)))
                    .push(Text::new(*service).size(typography::BODY_SM)),
            )
        },
    );

    let body = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::LG)
        .push(
            Text::new(treatment.title)
                .size(typography::TITLE_MD)
                .style(styles::text::heading(ctx.revealed)),
        )
        .push(
            Text::new(treatment.description)
                .size(typography::BODY)
                .style(styles::text::muted),
        )
        .push(services)
        .push(
            button(Text::new(format!("{} →", ctx.i18n.tr("treatments-learn-more"))).size(typography::BODY_SM))
                .on_press(Message::LearnMore(treatment.id))
                .style(styles::button::nav_link),
        );

    Container::new(Column::new().push(picture).push(body))
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}
