// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers called from
//! `App::update`, one per section plus the page-level bookkeeping.

use super::config::Config;
use super::persistence;
use super::scroll::PageScroll;
use super::view::PAGE_SCROLLABLE_ID;
use super::Message;
use crate::contact::{ContactClient, ContactForm, ContactSubmission};
use crate::content::Treatment;
use crate::error::SubmitError;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Notification};
use crate::ui::sections::{
    contact::{self, Event as ContactEvent},
    footer::{self, Event as FooterEvent},
    header::{self, Event as HeaderEvent},
    hero::{self, Event as HeroEvent},
    results, technology, testimonials,
    treatments::{self, Event as TreatmentsEvent},
    PageLayout, SectionId,
};
use crate::ui::state::VisibilityLatch;
use crate::ui::theming::ThemeMode;
use iced::widget::scrollable::Viewport;
use iced::widget::{operation, Id};
use iced::{Size, Task};

/// Number of page sections, used to size the per-section tables.
pub const SECTION_COUNT: usize = SectionId::ALL.len();

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub config: &'a mut Config,
    pub theme_mode: &'a mut ThemeMode,
    pub menu_open: &'a mut bool,
    pub layout: &'a mut PageLayout,
    pub scroll: &'a mut PageScroll,
    pub section_tops: &'a mut [Option<f32>; SECTION_COUNT],
    pub visibility: &'a mut [VisibilityLatch; SECTION_COUNT],
    pub technology: &'a mut technology::State,
    pub results: &'a mut results::State,
    pub testimonials: &'a mut testimonials::State,
    pub treatments: &'a [Treatment],
    pub contact_form: &'a mut ContactForm,
    pub contact_client: &'a Result<ContactClient, SubmitError>,
    pub notifications: &'a mut notifications::Manager,
}

/// Scrolls the page so `section` sits at the top of the viewport.
///
/// Does nothing until the section has reported where it is.
pub fn scroll_to_section(ctx: &UpdateContext<'_>, section: SectionId) -> Task<Message> {
    match ctx.section_tops[section.index()] {
        Some(top) => {
            tracing::debug!(?section, top, "scrolling to section");
            operation::snap_to(Id::new(PAGE_SCROLLABLE_ID), ctx.scroll.target_for(top))
        }
        None => Task::none(),
    }
}

pub fn handle_header_message(
    ctx: &mut UpdateContext<'_>,
    message: header::Message,
) -> Task<Message> {
    match header::update(message, ctx.menu_open) {
        HeaderEvent::None => Task::none(),
        HeaderEvent::ScrollTo(section) => scroll_to_section(ctx, section),
        HeaderEvent::CycleTheme => {
            let mode = ctx.theme_mode.cycle();
            *ctx.theme_mode = mode;
            persistence::apply_theme_change(ctx.config, mode, ctx.notifications);
            Task::none()
        }
        HeaderEvent::CycleLanguage => {
            if let Some(locale) =
                persistence::next_locale(ctx.i18n.current_locale(), &ctx.i18n.available_locales)
            {
                tracing::info!(%locale, "switching language");
                persistence::apply_language_change(ctx.i18n, ctx.config, locale, ctx.notifications);
            }
            Task::none()
        }
    }
}

pub fn handle_hero_message(ctx: &mut UpdateContext<'_>, message: hero::Message) -> Task<Message> {
    match hero::update(message) {
        HeroEvent::ScrollTo(section) => scroll_to_section(ctx, section),
    }
}

pub fn handle_treatments_message(
    ctx: &mut UpdateContext<'_>,
    message: treatments::Message,
) -> Task<Message> {
    match treatments::update(message, ctx.treatments) {
        TreatmentsEvent::Enquire(option) => {
            if let Some(option) = option {
                ctx.contact_form.select_treatment(option);
            }
            scroll_to_section(ctx, SectionId::Contact)
        }
    }
}

pub fn handle_footer_message(
    ctx: &mut UpdateContext<'_>,
    message: footer::Message,
) -> Task<Message> {
    match footer::update(message) {
        FooterEvent::ScrollTo(section) => scroll_to_section(ctx, section),
        FooterEvent::OpenLink(url) => open_link(url),
    }
}

pub fn handle_contact_message(
    ctx: &mut UpdateContext<'_>,
    message: contact::Message,
) -> Task<Message> {
    match contact::update(ctx.contact_form, message) {
        ContactEvent::None => Task::none(),
        ContactEvent::Submit(submission) => submit_contact(ctx.contact_client, submission),
        ContactEvent::OpenLink(url) => open_link(url),
    }
}

/// Hands a `https:`, `tel:` or `mailto:` link to the desktop's default handler.
pub fn open_link(url: String) -> Task<Message> {
    Task::perform(
        async move {
            let result = open::that_detached(&url);
            (url, result.map_err(|error| error.to_string()))
        },
        |(url, result)| Message::LinkOpened(url, result),
    )
}

pub fn handle_link_opened(url: &str, result: Result<(), String>) {
    match result {
        Ok(()) => tracing::debug!(url, "link handed to the desktop"),
        Err(error) => tracing::warn!(url, %error, "could not open link"),
    }
}

/// Starts the contact request. A client that failed to build reports its
/// error straight back.
fn submit_contact(
    client: &Result<ContactClient, SubmitError>,
    submission: ContactSubmission,
) -> Task<Message> {
    match client {
        Ok(client) => {
            tracing::info!(endpoint = client.endpoint(), "sending contact request");
            let client = client.clone();
            Task::perform(
                async move { client.submit(&submission).await },
                Message::ContactSubmitted,
            )
        }
        Err(error) => Task::done(Message::ContactSubmitted(Err(error.clone()))),
    }
}

pub fn handle_contact_submitted(ctx: &mut UpdateContext<'_>, result: Result<(), SubmitError>) {
    match result {
        Ok(()) => {
            tracing::info!("contact request delivered");
            ctx.contact_form.finish_submit(true);
            ctx.notifications.clear_contact_errors();
            ctx.notifications
                .push(Notification::success("notification-contact-sent"));
        }
        Err(error) => {
            tracing::warn!(%error, "contact request failed");
            ctx.contact_form.finish_submit(false);
            ctx.notifications.push(Notification::error(error.i18n_key()));
        }
    }
}

/// Latches the section as revealed and starts its carousel if it has one.
pub fn handle_section_revealed(ctx: &mut UpdateContext<'_>, section: SectionId) {
    if !ctx.visibility[section.index()].mark() {
        return;
    }
    tracing::debug!(?section, "section revealed");
    match section {
        SectionId::Technology => {
            ctx.technology.reveal();
        }
        SectionId::Results => {
            ctx.results.reveal();
        }
        SectionId::Testimonials => {
            ctx.testimonials.reveal();
        }
        _ => {}
    }
}

pub fn handle_section_measured(ctx: &mut UpdateContext<'_>, section: SectionId, top: f32) {
    ctx.section_tops[section.index()] = Some(top);
}

pub fn handle_page_scrolled(ctx: &mut UpdateContext<'_>, viewport: &Viewport) {
    *ctx.scroll = PageScroll::from_viewport(viewport);
}

pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) {
    let layout = PageLayout::new(size.width);
    if layout.is_wide() != ctx.layout.is_wide() {
        tracing::debug!(width = size.width, wide = layout.is_wide(), "layout changed");
        // The dropdown only exists on narrow layouts
        *ctx.menu_open = false;
    }
    *ctx.layout = layout;
}
