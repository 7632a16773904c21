// SPDX-License-Identifier: MPL-2.0
//! Appointment request form and contact details.
//!
//! The section owns no state of its own: it edits the [`ContactForm`] held by
//! the application and hands a validated [`ContactSubmission`] back through
//! [`Event::Submit`]. The network request happens in the app shell.

use super::{responsive_row, section_body, section_heading, PageLayout};
use crate::contact::{ContactForm, ContactSubmission, Field};
use crate::content::catalog::TREATMENT_OPTIONS;
use crate::content::{ContactInfo, TreatmentOption};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, pick_list, text_input, Column, Container, Row, Text},
    Color, Element, Length,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub layout: PageLayout,
    pub form: &'a ContactForm,
    pub info: &'a ContactInfo,
    pub revealed: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    WhatsappChanged(String),
    TreatmentSelected(TreatmentOption),
    MessageChanged(String),
    Submit,
    /// A contact card was pressed; carries its deep link.
    OpenLink(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// The form passed validation and is now waiting for the request.
    Submit(ContactSubmission),
    OpenLink(String),
}

pub fn update(form: &mut ContactForm, message: Message) -> Event {
    match message {
        Message::NameChanged(value) => form.set_name(value),
        Message::WhatsappChanged(value) => form.set_whatsapp(value),
        Message::TreatmentSelected(option) => form.select_treatment(option),
        Message::MessageChanged(value) => form.set_message(value),
        Message::OpenLink(url) => return Event::OpenLink(url),
        Message::Submit => {
            return match form.begin_submit() {
                Some(submission) => Event::Submit(submission),
                None => {
                    tracing::debug!(errors = ?form.errors(), "contact form not submitted");
                    Event::None
                }
            };
        }
    }
    Event::None
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::XXL)
        .push(section_heading(
            ctx.i18n,
            "contact-title",
            "contact-title-accent",
            "contact-subtitle",
            ctx.revealed,
            true,
        ))
        .push(responsive_row(
            ctx.layout,
            vec![form_card(&ctx), info_column(&ctx)],
            spacing::XL,
        ));

    Container::new(section_body(content))
        .width(Length::Fill)
        .style(styles::container::band_inverse)
        .into()
}

fn form_card<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let form = ctx.form;
    let i18n = ctx.i18n;
    let errors = form.errors();
    let submitting = form.is_submitting();

    let name = text_input(&i18n.tr("contact-placeholder-name"), form.name())
        .on_input(Message::NameChanged)
        .on_submit(Message::Submit)
        .padding(spacing::SM)
        .size(typography::BODY);

    let whatsapp = text_input(&i18n.tr("contact-placeholder-whatsapp"), form.whatsapp())
        .on_input(Message::WhatsappChanged)
        .on_submit(Message::Submit)
        .padding(spacing::SM)
        .size(typography::BODY);

    let treatment = pick_list(
        &TREATMENT_OPTIONS[..],
        form.treatment(),
        Message::TreatmentSelected,
    )
    .placeholder(i18n.tr("contact-placeholder-treatment"))
    .width(Length::Fill)
    .padding(spacing::SM)
    .text_size(typography::BODY);

    let note = text_input(&i18n.tr("contact-placeholder-message"), form.message())
        .on_input(Message::MessageChanged)
        .padding(spacing::SM)
        .size(typography::BODY);

    let submit_label = if submitting {
        i18n.tr("contact-submitting")
    } else {
        format!("🗓 {}", i18n.tr("contact-submit"))
    };
    let submit = button(
        Text::new(submit_label)
            .size(typography::BODY_LG)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .on_press_maybe((!submitting).then_some(Message::Submit))
    .width(Length::Fill)
    .padding([spacing::MD, spacing::LG])
    .style(styles::button::cta);

    let fields = Column::new()
        .spacing(spacing::LG)
        .push(labelled(
            i18n,
            "contact-label-name",
            name,
            errors.get(Field::Name).map(|e| e.i18n_key()),
        ))
        .push(labelled(
            i18n,
            "contact-label-whatsapp",
            whatsapp,
            errors.get(Field::Whatsapp).map(|e| e.i18n_key()),
        ))
        .push(labelled(
            i18n,
            "contact-label-treatment",
            treatment,
            errors.get(Field::Treatment).map(|e| e.i18n_key()),
        ))
        .push(labelled(i18n, "contact-label-message", note, None))
        .push(submit);

    Container::new(fields)
        .padding(spacing::XL)
        .width(Length::FillPortion(3))
        .style(styles::container::glass)
        .into()
}

fn labelled<'a>(
    i18n: &I18n,
    label_key: &str,
    input: impl Into<Element<'a, Message>>,
    error_key: Option<&str>,
) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(i18n.tr(label_key))
                .size(typography::BODY_SM)
                .style(styles::text::on_inverse(true)),
        )
        .push(input);

    if let Some(key) = error_key {
        column = column.push(
            Text::new(i18n.tr(key))
                .size(typography::CAPTION)
                .style(styles::text::field_error),
        );
    }
    column.into()
}

/// One card of the contact details column.
struct InfoEntry {
    glyph: &'static str,
    tint: Color,
    label_key: &'static str,
    value: String,
    link: Option<String>,
}

impl InfoEntry {
    /// Message published when the card is pressed. The address has no link.
    fn on_press(&self) -> Option<Message> {
        self.link.clone().map(Message::OpenLink)
    }
}

fn info_entries(info: &ContactInfo) -> [InfoEntry; 4] {
    [
        InfoEntry {
            glyph: "💬",
            tint: palette::SUCCESS_500,
            label_key: "contact-info-whatsapp",
            value: info.whatsapp.to_string(),
            link: Some(info.whatsapp_link()),
        },
        InfoEntry {
            glyph: "☎",
            tint: palette::EMERALD_500,
            label_key: "contact-info-phone",
            value: info.phone.to_string(),
            link: Some(info.phone_link()),
        },
        InfoEntry {
            glyph: "✉",
            tint: palette::CORAL_500,
            label_key: "contact-info-email",
            value: info.email.to_string(),
            link: Some(info.email_link()),
        },
        InfoEntry {
            glyph: "⌖",
            tint: palette::PETROL_500,
            label_key: "contact-info-address",
            value: info.address.to_string(),
            link: None,
        },
    ]
}

fn info_column<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    info_entries(ctx.info)
        .into_iter()
        .fold(
            Column::new().spacing(spacing::MD).width(Length::FillPortion(2)),
            |column, entry| column.push(info_card(i18n, entry)),
        )
        .into()
}

fn info_card<'a>(i18n: &I18n, entry: InfoEntry) -> Element<'a, Message> {
    let on_press = entry.on_press();

    let tile = container(Text::new(entry.glyph).size(typography::TITLE_SM))
        .center_x(Length::Fixed(sizing::ICON_TILE))
        .center_y(Length::Fixed(sizing::ICON_TILE))
        .style(styles::container::icon_tile(entry.tint));

    let mut details = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(i18n.tr(entry.label_key))
                .size(typography::BODY_SM)
                .style(styles::text::on_inverse_muted),
        )
        .push(
            Text::new(entry.value)
                .size(typography::BODY)
                .style(styles::text::on_inverse(true)),
        );
    if let Some(link) = entry.link {
        details = details.push(
            Text::new(link)
                .size(typography::CAPTION)
                .style(styles::text::on_inverse_accent(true)),
        );
    }

    let card = Container::new(
        Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(tile)
            .push(details),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::glass);

    button(card)
        .on_press_maybe(on_press)
        .padding(0)
        .width(Length::Fill)
        .style(button::text)
        .into()
}
