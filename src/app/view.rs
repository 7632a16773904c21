// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The header sits above a single scrollable column holding every section.
//! Each section is wrapped in a reveal sensor that reports its first
//! appearance and its position, and toasts float over the whole window.

use super::scroll::PageScroll;
use super::update::SECTION_COUNT;
use super::Message;
use crate::contact::ContactForm;
use crate::content::{BlogPost, ContactInfo, Differential, Treatment};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{Manager, Toast};
use crate::ui::sections::{
    blog, contact, differentials, footer, header, hero, results, technology, testimonials,
    treatments, PageLayout, SectionId,
};
use crate::ui::state::VisibilityLatch;
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use crate::ui::widgets::reveal_sensor;
use iced::{
    widget::{Column, Container, Id, Scrollable, Stack},
    Element, Length,
};
use std::path::Path;

/// Widget id of the page scrollable, target of the scroll operations.
pub const PAGE_SCROLLABLE_ID: &str = "page-scrollable";

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
    pub layout: PageLayout,
    pub scroll: PageScroll,
    pub menu_open: bool,
    pub visibility: &'a [VisibilityLatch; SECTION_COUNT],
    pub assets_dir: &'a Path,
    pub differentials: &'a [Differential],
    pub treatments: &'a [Treatment],
    pub blog_posts: &'a [BlogPost],
    pub contact_info: &'a ContactInfo,
    pub technology: &'a technology::State,
    pub results: &'a results::State,
    pub testimonials: &'a testimonials::State,
    pub contact_form: &'a ContactForm,
    pub notifications: &'a Manager,
    pub year: i32,
}

impl ViewContext<'_> {
    fn revealed(&self, section: SectionId) -> bool {
        self.visibility[section.index()].is_revealed()
    }
}

/// Renders the whole window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header_view = header::view(header::ViewContext {
        i18n: ctx.i18n,
        layout: ctx.layout,
        scrolled: ctx.scroll.is_scrolled(),
        menu_open: ctx.menu_open,
        theme_mode: ctx.theme_mode,
    })
    .map(Message::Header);

    let sections = SectionId::ALL
        .iter()
        .map(|&section| sensed(section, view_section(&ctx, section)));

    let page = Scrollable::new(Column::with_children(sections).width(Length::Fill))
        .id(Id::new(PAGE_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(Message::PageScrolled);

    let body = Container::new(
        Column::new()
            .push(header_view)
            .push(page)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::page);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(body)
        .push(toasts)
        .into()
}

fn sensed(section: SectionId, content: Element<'_, Message>) -> Element<'_, Message> {
    reveal_sensor(content)
        .on_reveal(Message::SectionRevealed(section))
        .on_measure(move |top| Message::SectionMeasured(section, top))
        .into()
}

fn view_section<'a>(ctx: &ViewContext<'a>, section: SectionId) -> Element<'a, Message> {
    let revealed = ctx.revealed(section);
    match section {
        SectionId::Hero => hero::view(hero::ViewContext {
            i18n: ctx.i18n,
            layout: ctx.layout,
            assets_dir: ctx.assets_dir,
            revealed,
        })
        .map(Message::Hero),
        SectionId::Differentials => differentials::view(differentials::ViewContext {
            i18n: ctx.i18n,
            layout: ctx.layout,
            differentials: ctx.differentials,
            revealed,
        }),
        SectionId::Treatments => treatments::view(treatments::ViewContext {
            i18n: ctx.i18n,
            layout: ctx.layout,
            assets_dir: ctx.assets_dir,
            treatments: ctx.treatments,
            revealed,
        })
        .map(Message::Treatments),
        SectionId::Technology => technology::view(technology::ViewContext {
            i18n: ctx.i18n,
            layout: ctx.layout,
            state: ctx.technology,
        })
        .map(Message::Technology),
        SectionId::Results => results::view(results::ViewContext {
            i18n: ctx.i18n,
            assets_dir: ctx.assets_dir,
            state: ctx.results,
        })
        .map(Message::Results),
        SectionId::Testimonials => testimonials::view(testimonials::ViewContext {
            i18n: ctx.i18n,
            layout: ctx.layout,
            state: ctx.testimonials,
        })
        .map(Message::Testimonials),
        SectionId::Blog => blog::view(blog::ViewContext {
            i18n: ctx.i18n,
            layout: ctx.layout,
            assets_dir: ctx.assets_dir,
            posts: ctx.blog_posts,
            revealed,
        }),
        SectionId::Contact => contact::view(contact::ViewContext {
            i18n: ctx.i18n,
            layout: ctx.layout,
            form: ctx.contact_form,
            info: ctx.contact_info,
            revealed,
        })
        .map(Message::Contact),
        SectionId::Footer => footer::view(footer::ViewContext {
            i18n: ctx.i18n,
            layout: ctx.layout,
            info: ctx.contact_info,
            year: ctx.year,
        })
        .map(Message::Footer),
    }
}
