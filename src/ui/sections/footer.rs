// SPDX-License-Identifier: MPL-2.0
//! Page footer: brand blurb, quick links, treatments, hours and contact.

use super::{PageLayout, SectionId};
use crate::content::catalog::{SOCIAL_LINKS, TREATMENT_OPTIONS};
use crate::content::{ContactInfo, SocialLink};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::{
    widget::{button, container, Column, Container, Row, Space, Text},
    Element, Length,
};

/// Treatments listed in the footer; the catch-all "other" option is left out.
const FOOTER_TREATMENTS: usize = 5;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub layout: PageLayout,
    pub info: &'a ContactInfo,
    pub year: i32,
}

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(SectionId),
    OpenLink(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ScrollTo(SectionId),
    OpenLink(String),
}

#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::Navigate(section) => Event::ScrollTo(section),
        Message::OpenLink(url) => Event::OpenLink(url),
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let info = ctx.info;

    let socials = SOCIAL_LINKS
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, social| {
            row.push(social_pill(social))
        });

    let brand = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .push(
            Row::new()
                .spacing(spacing::XXS)
                .push(
                    Text::new("Essence")
                        .size(typography::TITLE_MD)
                        .style(styles::text::on_inverse(true)),
                )
                .push(
                    Text::new("Clinic")
                        .size(typography::TITLE_MD)
                        .style(styles::text::on_inverse_accent(true)),
                ),
        )
        .push(
            Text::new(i18n.tr("footer-tagline"))
                .size(typography::BODY_SM)
                .style(styles::text::on_inverse_muted),
        )
        .push(socials);

    let quick_links = SectionId::NAVIGATION.iter().fold(
        column_with_title(i18n, "footer-quick-links"),
        |column, &section| column.push(link(i18n.tr(section.nav_key()), section)),
    );

    let treatments = TREATMENT_OPTIONS
        .iter()
        .take(FOOTER_TREATMENTS)
        .fold(column_with_title(i18n, "footer-treatments"), |column, option| {
            column.push(link(option.label.to_string(), SectionId::Treatments))
        });

    let contact = column_with_title(i18n, "footer-contact")
        .push(line(format!(
            "🕘 {}: {}",
            i18n.tr("footer-hours-weekdays"),
            info.hours.weekdays
        )))
        .push(line(format!(
            "{}: {}",
            i18n.tr("footer-hours-saturday"),
            info.hours.saturday
        )))
        .push(line(format!(
            "{}: {}",
            i18n.tr("footer-hours-sunday"),
            info.hours.sunday
        )))
        .push(line(format!("⌖ {}", info.address)))
        .push(line(format!("☎ {}", info.phone)))
        .push(line(info.whatsapp.to_string()));

    let columns: Vec<Element<'a, Message>> = vec![
        brand.into(),
        quick_links.into(),
        treatments.into(),
        contact.into(),
    ];
    let grid: Element<'a, Message> = if ctx.layout.is_wide() {
        Row::with_children(columns).spacing(spacing::XXL).into()
    } else {
        Column::with_children(columns).spacing(spacing::XL).into()
    };

    let year = ctx.year.to_string();
    let legal = Row::new()
        .spacing(spacing::LG)
        .push(
            Text::new(i18n.tr_with_args("footer-copyright", &[("year", year.as_str())]))
                .size(typography::CAPTION)
                .style(styles::text::on_inverse_muted),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            Text::new(i18n.tr("footer-privacy"))
                .size(typography::CAPTION)
                .style(styles::text::on_inverse_muted),
        )
        .push(
            Text::new(i18n.tr("footer-terms"))
                .size(typography::CAPTION)
                .style(styles::text::on_inverse_muted),
        );

    Container::new(
        Column::new()
            .spacing(spacing::XL)
            .max_width(crate::app::config::CONTENT_MAX_WIDTH)
            .push(grid)
            .push(
                container(Space::new())
                    .width(Length::Fill)
                    .height(Length::Fixed(1.0))
                    .style(styles::container::progress(false)),
            )
            .push(legal),
    )
    .width(Length::Fill)
    .center_x(Length::Fill)
    .padding([spacing::SECTION / 1.25, spacing::LG])
    .style(styles::container::band_inverse)
    .into()
}

fn column_with_title<'a>(i18n: &I18n, key: &str) -> Column<'a, Message> {
    Column::new().spacing(spacing::SM).width(Length::Fill).push(
        Text::new(i18n.tr(key))
            .size(typography::TITLE_SM)
            .style(styles::text::on_inverse(true)),
    )
}

fn link<'a>(label: String, section: SectionId) -> Element<'a, Message> {
    button(
        Text::new(label)
            .size(typography::BODY_SM)
            .style(styles::text::on_inverse_muted),
    )
    .on_press(Message::Navigate(section))
    .padding(0)
    .style(button::text)
    .into()
}

fn social_pill<'a>(social: &SocialLink) -> Element<'a, Message> {
    button(
        container(Text::new(social.name).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::SM])
            .style(styles::container::label_pill(palette::PETROL_700)),
    )
    .on_press(social_message(social))
    .padding(0)
    .style(button::text)
    .into()
}

fn social_message(social: &SocialLink) -> Message {
    Message::OpenLink(social.url.to_string())
}

fn line<'a>(value: String) -> Element<'a, Message> {
    Text::new(value)
        .size(typography::BODY_SM)
        .style(styles::text::on_inverse_muted)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_scroll_to_their_section() {
        assert_eq!(
            update(Message::Navigate(SectionId::Blog)),
            Event::ScrollTo(SectionId::Blog)
        );
    }

    #[test]
    fn footer_lists_every_named_treatment() {
        let listed: Vec<&str> = TREATMENT_OPTIONS
            .iter()
            .take(FOOTER_TREATMENTS)
            .map(|option| option.value)
            .collect();
        assert!(!listed.contains(&"outros"));
        assert_eq!(listed.len(), 5);
    }

    #[test]
    fn social_pills_open_their_profile() {
        let urls: Vec<String> = SOCIAL_LINKS
            .iter()
            .map(|social| match update(social_message(social)) {
                Event::OpenLink(url) => url,
                Event::ScrollTo(section) => panic!("unexpected scroll to {section:?}"),
            })
            .collect();
        assert_eq!(
            urls,
            vec![
                "https://instagram.com",
                "https://facebook.com",
                "https://linkedin.com",
                "https://youtube.com",
            ]
        );
    }
}
