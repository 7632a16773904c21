// SPDX-License-Identifier: MPL-2.0
//! Article teasers. The cards are static: there is no article page to open.

use super::{catalog_image, responsive_row, section_body, section_heading, PageLayout};
use crate::content::BlogPost;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{container, Column, Container, Row, Stack, Text},
    Element, Length,
};
use std::path::Path;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub layout: PageLayout,
    pub assets_dir: &'a Path,
    pub posts: &'a [BlogPost],
    pub revealed: bool,
}

pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> = ctx
        .posts
        .iter()
        .map(|post| card(&ctx, post))
        .collect();

    let view_all = container(
        Text::new(format!("{} →", ctx.i18n.tr("blog-view-all")))
            .size(typography::BODY)
            .style(styles::text::heading(ctx.revealed)),
    )
    .padding([spacing::SM, spacing::XL])
    .style(styles::container::badge(palette::PETROL_300));

    let content = Column::new()
        .spacing(spacing::XXL)
        .push(section_heading(
            ctx.i18n,
            "blog-title",
            "blog-title-accent",
            "blog-subtitle",
            ctx.revealed,
            false,
        ))
        .push(responsive_row(ctx.layout, cards, spacing::LG))
        .push(Container::new(view_all).center_x(Length::Fill));

    Container::new(section_body(content))
        .width(Length::Fill)
        .style(styles::container::page)
        .into()
}

fn card<'a, Message: 'a>(ctx: &ViewContext<'a>, post: &'a BlogPost) -> Element<'a, Message> {
    let category = container(Text::new(post.category).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::label_pill(palette::EMERALD_500));

    let cover = Stack::new()
        .push(catalog_image(
            ctx.assets_dir,
            post.image,
            Length::Fixed(sizing::CARD_IMAGE_HEIGHT),
        ))
        .push(
            container(category)
                .width(Length::Fill)
                .padding(spacing::MD)
                .align_x(Horizontal::Left)
                .align_y(Vertical::Top),
        );

    let details = Column::new()
        .spacing(spacing::SM)
        .push(
            Text::new(format!("🗓 {}", post.date_label()))
                .size(typography::BODY_SM)
                .style(styles::text::muted),
        )
        .push(
            Text::new(post.title)
                .size(typography::TITLE_SM)
                .style(styles::text::heading(ctx.revealed)),
        )
        .push(
            Text::new(post.excerpt)
                .size(typography::BODY_SM)
                .style(styles::text::muted),
        )
        .push(
            Row::new().push(
                Text::new(format!("{} →", ctx.i18n.tr("blog-read-more")))
                    .size(typography::BODY_SM)
                    .style(styles::text::accent(true)),
            ),
        );

    Container::new(
        Column::new()
            .push(cover)
            .push(Container::new(details).padding(spacing::LG)),
    )
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}
