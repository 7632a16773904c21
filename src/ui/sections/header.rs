// SPDX-License-Identifier: MPL-2.0
//! Header bar above the scrolling page.
//!
//! Holds the logo, the section links, the theme and language toggles and
//! the scheduling call to action. On narrow windows the links collapse into
//! a dropdown opened by a menu button.

use super::{PageLayout, SectionId};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Space, Text},
    Element, Length,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub layout: PageLayout,
    /// The page has scrolled past the hero's top edge.
    pub scrolled: bool,
    pub menu_open: bool,
    pub theme_mode: ThemeMode,
}

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(SectionId),
    ToggleMenu,
    CycleTheme,
    CycleLanguage,
    Schedule,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    ScrollTo(SectionId),
    CycleTheme,
    CycleLanguage,
}

/// Process a header message. Any navigation closes the dropdown.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::Navigate(section) => {
            *menu_open = false;
            Event::ScrollTo(section)
        }
        Message::Schedule => {
            *menu_open = false;
            Event::ScrollTo(SectionId::Contact)
        }
        Message::CycleTheme => Event::CycleTheme,
        Message::CycleLanguage => Event::CycleLanguage,
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let wide = ctx.layout.is_wide();

    let logo = button(
        Row::new()
            .spacing(spacing::XXS)
            .push(
                Text::new("Essence")
                    .size(typography::TITLE_MD)
                    .style(styles::text::heading(true)),
            )
            .push(
                Text::new("Clinic")
                    .size(typography::TITLE_MD)
                    .style(styles::text::accent(true)),
            ),
    )
    .on_press(Message::Navigate(SectionId::Hero))
    .padding(spacing::XXS)
    .style(styles::button::nav_link);

    let mut bar = Row::new()
        .spacing(spacing::XS)
        .padding([0.0, spacing::LG])
        .height(Length::Fixed(sizing::HEADER_HEIGHT))
        .align_y(Vertical::Center)
        .push(logo)
        .push(Space::new().width(Length::Fill));

    if wide {
        for section in SectionId::NAVIGATION {
            bar = bar.push(nav_button(ctx.i18n, section));
        }
    }

    bar = bar
        .push(
            button(Text::new(ctx.i18n.tr(ctx.theme_mode.i18n_key())).size(typography::BODY_SM))
                .on_press(Message::CycleTheme)
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::outline),
        )
        .push(
            button(Text::new(ctx.i18n.current_locale().to_string()).size(typography::BODY_SM))
                .on_press(Message::CycleLanguage)
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::outline),
        );

    if wide {
        bar = bar.push(
            button(Text::new(ctx.i18n.tr("header-cta")).size(typography::BODY_SM))
                .on_press(Message::Schedule)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::cta),
        );
    } else {
        let glyph = if ctx.menu_open { "✕" } else { "☰" };
        bar = bar.push(
            button(Text::new(glyph).size(typography::TITLE_SM))
                .on_press(Message::ToggleMenu)
                .width(Length::Fixed(sizing::NAV_BUTTON))
                .style(styles::button::nav_link),
        );
    }

    let mut content = Column::new().width(Length::Fill).push(bar);

    if ctx.menu_open && !wide {
        content = content.push(build_dropdown(ctx.i18n));
    }

    Container::new(content)
        .width(Length::Fill)
        .style(styles::container::header(ctx.scrolled))
        .into()
}

fn nav_button<'a>(i18n: &I18n, section: SectionId) -> Element<'a, Message> {
    button(Text::new(i18n.tr(section.nav_key())).size(typography::BODY_SM))
        .on_press(Message::Navigate(section))
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::nav_link)
        .into()
}

fn build_dropdown<'a>(i18n: &I18n) -> Element<'a, Message> {
    let mut menu = Column::new()
        .spacing(spacing::XXS)
        .padding([spacing::XS, spacing::LG]);

    for section in SectionId::NAVIGATION {
        menu = menu.push(
            button(Text::new(i18n.tr(section.nav_key())).size(typography::BODY))
                .on_press(Message::Navigate(section))
                .width(Length::Fill)
                .padding(spacing::SM)
                .style(styles::button::nav_link),
        );
    }

    menu.push(
        button(Text::new(i18n.tr("header-cta")).size(typography::BODY))
            .on_press(Message::Schedule)
            .width(Length::Fill)
            .padding(spacing::SM)
            .style(styles::button::cta),
    )
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_menu_flips_state() {
        let mut open = false;
        assert_eq!(update(Message::ToggleMenu, &mut open), Event::None);
        assert!(open);
        update(Message::ToggleMenu, &mut open);
        assert!(!open);
    }

    #[test]
    fn navigating_closes_menu() {
        let mut open = true;
        let event = update(Message::Navigate(SectionId::Results), &mut open);
        assert_eq!(event, Event::ScrollTo(SectionId::Results));
        assert!(!open);
    }

    #[test]
    fn schedule_scrolls_to_contact() {
        let mut open = false;
        assert_eq!(
            update(Message::Schedule, &mut open),
            Event::ScrollTo(SectionId::Contact)
        );
    }
}
