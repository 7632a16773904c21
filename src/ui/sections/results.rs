// SPDX-License-Identifier: MPL-2.0
//! Before/after results carousel.
//!
//! The active case is shown in a [`CompareSlider`]. The carousel rotates
//! every few seconds, pauses while the pointer is over the card or after the
//! arrows and dots are used, and resumes when the pointer leaves the card.
//! Every change of case puts the divider back in the middle.

use super::{catalog_image, section_body, section_heading};
use crate::app::config::COMPARE_FRAME_HEIGHT;
use crate::content::ComparableCase;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::state::{Advance, Carousel, CarouselBehavior, CompareState, SliderInput};
use crate::ui::styles;
use crate::ui::widgets::CompareSlider;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, mouse_area, Column, Container, Row, Space, Text},
    Element, Length,
};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct State {
    carousel: Carousel<ComparableCase>,
    compare: CompareState,
}

impl State {
    #[must_use]
    pub fn new(cases: Vec<ComparableCase>) -> Self {
        Self {
            carousel: Carousel::new(cases, CarouselBehavior::results()),
            compare: CompareState::new(),
        }
    }

    #[must_use]
    pub fn carousel(&self) -> &Carousel<ComparableCase> {
        &self.carousel
    }

    #[must_use]
    pub fn compare(&self) -> &CompareState {
        &self.compare
    }

    /// Records the first time the section scrolled into view.
    pub fn reveal(&mut self) -> bool {
        self.carousel.reveal()
    }

    fn after_navigation(&mut self, changed: bool) {
        if changed {
            self.compare.reset();
        }
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub assets_dir: &'a Path,
    pub state: &'a State,
}

#[derive(Debug, Clone)]
pub enum Message {
    Previous,
    Next,
    JumpTo(usize),
    Tick,
    PointerEntered,
    PointerLeft,
    Slider(SliderInput),
}

pub fn update(state: &mut State, message: Message) {
    match message {
        Message::Previous => {
            let changed = state.carousel.previous();
            state.after_navigation(changed);
        }
        Message::Next => {
            let changed = state.carousel.next(Advance::Manual);
            state.after_navigation(changed);
        }
        Message::JumpTo(index) => {
            let changed = state.carousel.jump_to(index);
            state.after_navigation(changed);
        }
        Message::Tick => {
            let changed = state.carousel.tick();
            state.after_navigation(changed);
        }
        Message::PointerEntered => state.carousel.pointer_entered(),
        Message::PointerLeft => state.carousel.pointer_left(),
        Message::Slider(input) => {
            state.compare.handle(input);
        }
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let carousel = &ctx.state.carousel;
    let revealed = carousel.is_revealed();

    let mut content = Column::new().spacing(spacing::XXL).push(section_heading(
        ctx.i18n,
        "results-title",
        "results-title-accent",
        "results-subtitle",
        revealed,
        false,
    ));

    if let Some(case) = carousel.active() {
        let card = Container::new(
            Column::new()
                .spacing(spacing::LG)
                .push(compare_slider(&ctx, case))
                .push(case_footer(&ctx, case)),
        )
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::card);

        content = content
            .push(
                mouse_area(card)
                    .on_enter(Message::PointerEntered)
                    .on_exit(Message::PointerLeft),
            )
            .push(dots(carousel.len(), carousel.active_index()));
    }

    Container::new(section_body(content))
        .width(Length::Fill)
        .style(styles::container::band)
        .into()
}

fn compare_slider<'a>(ctx: &ViewContext<'a>, case: &'a ComparableCase) -> Element<'a, Message> {
    let before = catalog_image(ctx.assets_dir, case.before, Length::Fill);
    let after = catalog_image(ctx.assets_dir, case.after, Length::Fill);

    let chrome = Container::new(
        Row::new()
            .push(corner_label(
                ctx.i18n.tr("compare-label-before"),
                palette::PETROL_900,
            ))
            .push(Space::new().width(Length::Fill))
            .push(corner_label(
                ctx.i18n.tr("compare-label-after"),
                palette::EMERALD_600,
            )),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_y(Vertical::Top)
    .padding(spacing::MD);

    let handle = container(
        Text::new("‹ ›")
            .size(typography::BODY)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fixed(sizing::HANDLE_KNOB))
    .height(Length::Fixed(sizing::HANDLE_KNOB))
    .center_x(Length::Fixed(sizing::HANDLE_KNOB))
    .center_y(Length::Fixed(sizing::HANDLE_KNOB))
    .style(styles::container::divider_knob);

    CompareSlider::new(
        before,
        after,
        chrome,
        handle,
        ctx.state.compare.position(),
        Message::Slider,
    )
    .height(Length::Fixed(COMPARE_FRAME_HEIGHT))
    .into()
}

fn corner_label<'a>(label: String, fill: iced::Color) -> Element<'a, Message> {
    container(Text::new(label).size(typography::BODY_SM))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::label_pill(fill))
        .into()
}

fn case_footer<'a>(ctx: &ViewContext<'a>, case: &'a ComparableCase) -> Element<'a, Message> {
    let carousel = &ctx.state.carousel;
    let details = Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .push(
            Text::new(case.title)
                .size(typography::TITLE_MD)
                .style(styles::text::heading(true)),
        )
        .push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(
                    container(Text::new(format!("✦ {}", case.category)).size(typography::CAPTION))
                        .padding([spacing::XXS, spacing::SM])
                        .style(styles::container::badge(palette::EMERALD_600)),
                )
                .push(
                    Text::new(
                        ctx.i18n
                            .tr_with_args("results-duration", &[("duration", case.duration)]),
                    )
                    .size(typography::BODY_SM)
                    .style(styles::text::muted),
                )
                .wrap(),
        );

    let position = (carousel.active_index() + 1).to_string();
    let total = carousel.len().to_string();
    let controls = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(arrow("‹", Message::Previous))
        .push(
            Text::new(ctx.i18n.tr_with_args(
                "carousel-counter",
                &[("current", position.as_str()), ("total", total.as_str())],
            ))
            .size(typography::BODY_SM)
            .style(styles::text::muted),
        )
        .push(arrow("›", Message::Next));

    Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(details)
        .push(controls)
        .into()
}

pub(crate) fn arrow<'a, M: Clone + 'a>(glyph: &'a str, message: M) -> Element<'a, M> {
    button(
        Text::new(glyph)
            .size(typography::TITLE_SM)
            .align_x(Horizontal::Center),
    )
    .on_press(message)
    .width(Length::Fixed(sizing::NAV_BUTTON))
    .height(Length::Fixed(sizing::NAV_BUTTON))
    .style(styles::button::carousel_arrow)
    .into()
}

pub(crate) fn dot_row<'a, M: Clone + 'a>(
    len: usize,
    active: usize,
    on_press: impl Fn(usize) -> M,
) -> Element<'a, M> {
    let dots = (0..len).fold(Row::new().spacing(spacing::XS), |row, index| {
        let is_active = index == active;
        let width = if is_active {
            sizing::DOT_ACTIVE_WIDTH
        } else {
            sizing::DOT
        };
        row.push(
            button(Space::new())
                .on_press(on_press(index))
                .width(Length::Fixed(width))
                .height(Length::Fixed(sizing::DOT))
                .padding(0)
                .style(styles::button::carousel_dot(is_active)),
        )
    });
    Container::new(dots).center_x(Length::Fill).into()
}

fn dots<'a>(len: usize, active: usize) -> Element<'a, Message> {
    dot_row(len, active, Message::JumpTo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::catalog;
    use crate::test_utils::assert_abs_diff_eq;
    use crate::ui::state::{Playback, PointerSample};

    fn revealed() -> State {
        let mut state = State::new(catalog::result_cases());
        state.reveal();
        state
    }

    fn drag_to_quarter(state: &mut State) {
        update(state, Message::Slider(SliderInput::PointerDown));
        update(
            state,
            Message::Slider(SliderInput::PointerMoved(PointerSample::new(25.0, 0.0, 100.0))),
        );
    }

    #[test]
    fn changing_case_recenters_divider() {
        let mut state = revealed();
        drag_to_quarter(&mut state);
        assert_abs_diff_eq!(state.compare().position().value(), 25.0, epsilon = 1e-4);

        update(&mut state, Message::Next);
        assert_abs_diff_eq!(state.compare().position().value(), 50.0);
        assert!(!state.compare().is_dragging());
    }

    #[test]
    fn automatic_rotation_also_recenters() {
        let mut state = revealed();
        drag_to_quarter(&mut state);
        update(&mut state, Message::Tick);
        assert_eq!(state.carousel().active_index(), 1);
        assert_abs_diff_eq!(state.compare().position().value(), 50.0);
    }

    #[test]
    fn jumping_to_current_case_keeps_divider() {
        let mut state = revealed();
        drag_to_quarter(&mut state);
        update(&mut state, Message::JumpTo(0));
        assert_abs_diff_eq!(state.compare().position().value(), 25.0, epsilon = 1e-4);
    }

    #[test]
    fn hover_pauses_and_leaving_resumes() {
        let mut state = revealed();
        update(&mut state, Message::PointerEntered);
        assert_eq!(state.carousel().playback(), Playback::Paused);
        update(&mut state, Message::Tick);
        assert_eq!(state.carousel().active_index(), 0);

        update(&mut state, Message::PointerLeft);
        update(&mut state, Message::Tick);
        assert_eq!(state.carousel().active_index(), 1);
    }
}
