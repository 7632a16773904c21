// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page sections.
//!
//! The `App` struct wires together the catalog, the carousels, the contact
//! form, localization and settings, and translates messages into side
//! effects like config persistence, page scrolling or the contact request.

pub mod config;
mod message;
pub mod paths;
mod persistence;
pub mod scroll;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use view::PAGE_SCROLLABLE_ID;

use crate::contact::{ContactClient, ContactForm};
use crate::content::{catalog, BlogPost, ContactInfo, Differential, Treatment};
use crate::error::SubmitError;
use crate::i18n::fluent::I18n;
use crate::ui::notifications;
use crate::ui::sections::{results, technology, testimonials, PageLayout};
use crate::ui::state::VisibilityLatch;
use crate::ui::theming::{AppTheme, ThemeMode};
use chrono::Datelike;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use scroll::PageScroll;
use std::fmt;
use std::path::PathBuf;
use update::SECTION_COUNT;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    theme_mode: ThemeMode,
    layout: PageLayout,
    scroll: PageScroll,
    /// Whether the narrow-layout dropdown is open.
    menu_open: bool,
    section_tops: [Option<f32>; SECTION_COUNT],
    visibility: [VisibilityLatch; SECTION_COUNT],
    assets_dir: PathBuf,
    differentials: Vec<Differential>,
    treatments: Vec<Treatment>,
    blog_posts: Vec<BlogPost>,
    contact_info: ContactInfo,
    technology: technology::State,
    results: results::State,
    testimonials: testimonials::State,
    contact_form: ContactForm,
    contact_client: Result<ContactClient, SubmitError>,
    year: i32,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("layout", &self.layout)
            .field("contact_submitting", &self.contact_form.is_submitting())
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::DEFAULT_WINDOW_WIDTH, config::DEFAULT_WINDOW_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; the flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::from_config(Config::default(), I18n::default(), None)
    }
}

impl App {
    /// Builds the application state from loaded settings.
    ///
    /// `endpoint` overrides `[contact].endpoint` for this run only; it is
    /// never written back to the settings file.
    fn from_config(config: Config, i18n: I18n, endpoint: Option<String>) -> Self {
        let mut contact_config = config.contact.clone();
        if let Some(endpoint) = endpoint {
            contact_config.endpoint = endpoint;
        }
        let contact_client = ContactClient::from_config(&contact_config);
        if let Err(error) = &contact_client {
            tracing::error!(%error, "contact client unavailable");
        }

        let assets_dir = config
            .content
            .assets_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(config::DEFAULT_ASSETS_DIR));

        Self {
            i18n,
            theme_mode: config.general.theme_mode,
            layout: PageLayout::new(config::DEFAULT_WINDOW_WIDTH),
            scroll: PageScroll::default(),
            menu_open: false,
            section_tops: [None; SECTION_COUNT],
            visibility: [VisibilityLatch::new(); SECTION_COUNT],
            assets_dir,
            differentials: catalog::differentials(),
            treatments: catalog::treatments(),
            blog_posts: catalog::blog_posts(),
            contact_info: catalog::contact_info(),
            technology: technology::new_state(catalog::tech_steps()),
            results: results::State::new(catalog::result_cases()),
            testimonials: testimonials::new_state(catalog::testimonials()),
            contact_form: ContactForm::new(),
            contact_client,
            year: chrono::Local::now().year(),
            notifications: notifications::Manager::new(),
            config,
        }
    }

    /// Initializes application state from the `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        tracing::info!(
            locale = %i18n.current_locale(),
            theme = ?config.general.theme_mode,
            "starting"
        );

        let mut app = Self::from_config(config, i18n, flags.endpoint);

        // Show warnings for config loading issues
        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        AppTheme::new(self.theme_mode).to_iced()
    }

    fn subscription(&self) -> Subscription<Message> {
        let window_sub = subscription::create_window_subscription();
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());
        let carousel_sub = subscription::create_carousel_subscriptions(
            &self.technology,
            &self.results,
            &self.testimonials,
        );

        Subscription::batch([window_sub, tick_sub, carousel_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            config: &mut self.config,
            theme_mode: &mut self.theme_mode,
            menu_open: &mut self.menu_open,
            layout: &mut self.layout,
            scroll: &mut self.scroll,
            section_tops: &mut self.section_tops,
            visibility: &mut self.visibility,
            technology: &mut self.technology,
            results: &mut self.results,
            testimonials: &mut self.testimonials,
            treatments: &self.treatments,
            contact_form: &mut self.contact_form,
            contact_client: &self.contact_client,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Header(header_message) => {
                update::handle_header_message(&mut ctx, header_message)
            }
            Message::Hero(hero_message) => update::handle_hero_message(&mut ctx, hero_message),
            Message::Treatments(treatments_message) => {
                update::handle_treatments_message(&mut ctx, treatments_message)
            }
            Message::Technology(technology_message) => {
                technology::update(ctx.technology, technology_message);
                Task::none()
            }
            Message::Results(results_message) => {
                results::update(ctx.results, results_message);
                Task::none()
            }
            Message::Testimonials(testimonials_message) => {
                testimonials::update(ctx.testimonials, testimonials_message);
                Task::none()
            }
            Message::Contact(contact_message) => {
                update::handle_contact_message(&mut ctx, contact_message)
            }
            Message::Footer(footer_message) => {
                update::handle_footer_message(&mut ctx, footer_message)
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::SectionRevealed(section) => {
                update::handle_section_revealed(&mut ctx, section);
                Task::none()
            }
            Message::SectionMeasured(section, top) => {
                update::handle_section_measured(&mut ctx, section, top);
                Task::none()
            }
            Message::PageScrolled(viewport) => {
                update::handle_page_scrolled(&mut ctx, &viewport);
                Task::none()
            }
            Message::WindowResized(size) => {
                update::handle_window_resized(&mut ctx, size);
                Task::none()
            }
            Message::ContactSubmitted(result) => {
                update::handle_contact_submitted(&mut ctx, result);
                Task::none()
            }
            Message::LinkOpened(url, result) => {
                update::handle_link_opened(&url, result);
                Task::none()
            }
            Message::Tick(instant) => {
                // Tick notification manager to handle auto-dismiss
                ctx.notifications.tick_at(instant);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            theme_mode: self.theme_mode,
            layout: self.layout,
            scroll: self.scroll,
            menu_open: self.menu_open,
            visibility: &self.visibility,
            assets_dir: &self.assets_dir,
            differentials: &self.differentials,
            treatments: &self.treatments,
            blog_posts: &self.blog_posts,
            contact_info: &self.contact_info,
            technology: &self.technology,
            results: &self.results,
            testimonials: &self.testimonials,
            contact_form: &self.contact_form,
            notifications: &self.notifications,
            year: self.year,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::catalog::treatment_option;
    use crate::ui::sections::{contact, header, treatments, SectionId};
    use crate::ui::state::Playback;
    use iced::Size;

    fn fill_contact_form(app: &mut App) {
        let _ = app.update(Message::Contact(contact::Message::NameChanged(
            "Ana Souza".into(),
        )));
        let _ = app.update(Message::Contact(contact::Message::WhatsappChanged(
            "11999998888".into(),
        )));
        let option = treatment_option("clareamento").expect("catalog option");
        let _ = app.update(Message::Contact(contact::Message::TreatmentSelected(option)));
    }

    #[test]
    fn carousels_wait_for_their_section() {
        let mut app = App::default();
        assert!(!app.results.carousel().is_ticking());

        let _ = app.update(Message::Results(results::Message::Tick));
        assert_eq!(app.results.carousel().active_index(), 0);

        let _ = app.update(Message::SectionRevealed(SectionId::Results));
        assert!(app.results.carousel().is_ticking());
        assert!(!app.testimonials.is_ticking());

        let _ = app.update(Message::Results(results::Message::Tick));
        assert_eq!(app.results.carousel().active_index(), 1);
    }

    #[test]
    fn reveal_is_latched_per_section() {
        let mut app = App::default();
        let _ = app.update(Message::SectionRevealed(SectionId::Blog));
        let _ = app.update(Message::SectionRevealed(SectionId::Blog));
        assert!(app.visibility[SectionId::Blog.index()].is_revealed());
        assert!(!app.visibility[SectionId::Hero.index()].is_revealed());
    }

    #[test]
    fn learn_more_preselects_treatment() {
        let mut app = App::default();
        let implant = app
            .treatments
            .iter()
            .find(|t| t.title == "Implantodontia Digital")
            .map(|t| t.id)
            .expect("catalog treatment");

        let _ = app.update(Message::Treatments(treatments::Message::LearnMore(implant)));

        assert_eq!(
            app.contact_form.treatment().map(|o| o.value),
            Some("implantodontia")
        );
    }

    #[test]
    fn successful_submission_resets_form_and_confirms() {
        let mut app = App::default();
        fill_contact_form(&mut app);
        let _ = app.update(Message::Contact(contact::Message::Submit));
        assert!(app.contact_form.is_submitting());

        let _ = app.update(Message::ContactSubmitted(Ok(())));

        assert!(!app.contact_form.is_submitting());
        assert!(app.contact_form.name().is_empty());
        let keys: Vec<&str> = app.notifications.visible().map(|n| n.message_key()).collect();
        assert_eq!(keys, vec!["notification-contact-sent"]);
    }

    #[test]
    fn failed_submission_keeps_form_and_warns() {
        let mut app = App::default();
        fill_contact_form(&mut app);
        let _ = app.update(Message::Contact(contact::Message::Submit));

        let _ = app.update(Message::ContactSubmitted(Err(SubmitError::Status(503))));

        assert!(!app.contact_form.is_submitting());
        assert_eq!(app.contact_form.name(), "Ana Souza");
        let keys: Vec<&str> = app.notifications.visible().map(|n| n.message_key()).collect();
        assert_eq!(keys, vec!["notification-contact-error"]);
    }

    #[test]
    fn short_whatsapp_blocks_submission() {
        let mut app = App::default();
        fill_contact_form(&mut app);
        let _ = app.update(Message::Contact(contact::Message::WhatsappChanged(
            "119999988".into(),
        )));

        let _ = app.update(Message::Contact(contact::Message::Submit));

        assert!(!app.contact_form.is_submitting());
        assert!(app.contact_form.errors().whatsapp.is_some());
    }

    #[test]
    fn theme_toggle_cycles_mode() {
        let mut app = App::default();
        let before = app.theme_mode;
        let _ = app.update(Message::Header(header::Message::CycleTheme));
        assert_eq!(app.theme_mode, before.cycle());
        assert_eq!(app.config.general.theme_mode, app.theme_mode);
    }

    #[test]
    fn narrowing_the_window_switches_layout() {
        let mut app = App::default();
        assert!(app.layout.is_wide());

        let _ = app.update(Message::WindowResized(Size::new(800.0, 700.0)));
        assert!(!app.layout.is_wide());

        let _ = app.update(Message::Header(header::Message::ToggleMenu));
        assert!(app.menu_open);
        let _ = app.update(Message::WindowResized(Size::new(1280.0, 700.0)));
        assert!(!app.menu_open);
    }

    #[test]
    fn results_hover_pauses_until_pointer_leaves() {
        let mut app = App::default();
        let _ = app.update(Message::SectionRevealed(SectionId::Results));
        let _ = app.update(Message::Results(results::Message::PointerEntered));
        assert_eq!(app.results.carousel().playback(), Playback::Paused);

        let _ = app.update(Message::Results(results::Message::PointerLeft));
        assert_eq!(app.results.carousel().playback(), Playback::Playing);
    }

    #[test]
    fn section_positions_are_recorded() {
        let mut app = App::default();
        let _ = app.update(Message::SectionMeasured(SectionId::Contact, 4200.0));
        assert_eq!(app.section_tops[SectionId::Contact.index()], Some(4200.0));
    }
}
