// SPDX-License-Identifier: MPL-2.0
//! Patient testimonials carousel.
//!
//! Wide windows show three consecutive testimonials starting at the active
//! one, with the middle card emphasized. Narrow windows show the active
//! testimonial alone. Using the arrows or dots stops auto-advance for good.

use super::results::{arrow, dot_row};
use super::{section_body, section_heading, PageLayout};
use crate::app::config::TESTIMONIALS_WIDE_WINDOW;
use crate::content::Testimonial;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::{Advance, Carousel, CarouselBehavior};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{container, Column, Container, Row, Space, Text},
    Element, Length,
};

pub type State = Carousel<Testimonial>;

#[must_use]
pub fn new_state(testimonials: Vec<Testimonial>) -> State {
    Carousel::new(testimonials, CarouselBehavior::testimonials())
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub layout: PageLayout,
    pub state: &'a State,
}

#[derive(Debug, Clone)]
pub enum Message {
    Previous,
    Next,
    JumpTo(usize),
    Tick,
}

pub fn update(state: &mut State, message: Message) {
    match message {
        Message::Previous => {
            state.previous();
        }
        Message::Next => {
            state.next(Advance::Manual);
        }
        Message::JumpTo(index) => {
            state.jump_to(index);
        }
        Message::Tick => {
            state.tick();
        }
    }
}

/// Number of cards shown side by side for the given layout.
#[must_use]
pub fn window_size(layout: PageLayout) -> usize {
    if layout.is_wide() {
        TESTIMONIALS_WIDE_WINDOW
    } else {
        1
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let state = ctx.state;
    let revealed = state.is_revealed();

    let mut content = Column::new().spacing(spacing::XXL).push(section_heading(
        ctx.i18n,
        "testimonials-title",
        "testimonials-title-accent",
        "testimonials-subtitle",
        revealed,
        false,
    ));

    if !state.is_empty() {
        let emphasized = window_size(ctx.layout) / 2;
        let cards = state
            .visible_window(window_size(ctx.layout))
            .enumerate()
            .fold(
                Row::new().spacing(spacing::LG).align_y(Vertical::Center),
                |row, (slot, (_, testimonial))| {
                    let emphasis = ctx.layout.is_wide() && slot == emphasized;
                    row.push(card(ctx.i18n, testimonial, emphasis))
                },
            );

        let controls = Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(arrow("‹", Message::Previous))
            .push(dot_row(state.len(), state.active_index(), Message::JumpTo))
            .push(arrow("›", Message::Next));

        content = content
            .push(cards)
            .push(Container::new(controls).center_x(Length::Fill));
    }

    Container::new(section_body(content))
        .width(Length::Fill)
        .style(styles::container::page)
        .into()
}

fn card<'a>(i18n: &I18n, testimonial: &'a Testimonial, emphasis: bool) -> Element<'a, Message> {
    let age = testimonial.age.to_string();

    let avatar = container(
        Text::new(testimonial.initials())
            .size(typography::BODY)
            .align_x(Horizontal::Center),
    )
    .center_x(Length::Fixed(sizing::AVATAR))
    .center_y(Length::Fixed(sizing::AVATAR))
    .style(styles::container::avatar);

    let identity = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(avatar)
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(
                    Text::new(testimonial.name)
                        .size(typography::TITLE_SM)
                        .style(styles::text::heading(true)),
                )
                .push(
                    Text::new(i18n.tr_with_args("testimonial-age", &[("age", age.as_str())]))
                        .size(typography::BODY_SM)
                        .style(styles::text::muted),
                ),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            Text::new("❝")
                .size(typography::TITLE_LG)
                .style(styles::text::accent(false)),
        );

    let stars = (0..Testimonial::MAX_RATING).fold(Row::new().spacing(spacing::XXS), |row, i| {
        row.push(
            Text::new("★")
                .size(typography::BODY)
                .style(styles::text::star(i < testimonial.rating)),
        )
    });

    let body = Column::new()
        .spacing(spacing::MD)
        .push(identity)
        .push(stars)
        .push(Text::new(format!("\u{201c}{}\u{201d}", testimonial.text)).size(typography::BODY))
        .push(
            Text::new(testimonial.treatment)
                .size(typography::BODY_SM)
                .style(styles::text::accent(true)),
        );

    let style = if emphasis {
        styles::container::card_emphasis
    } else {
        styles::container::card
    };

    Container::new(body)
        .padding(spacing::LG)
        .width(Length::FillPortion(1))
        .style(style)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::catalog;
    use crate::ui::state::Playback;

    fn revealed() -> State {
        let mut state = new_state(catalog::testimonials());
        state.reveal();
        state
    }

    #[test]
    fn wide_layout_shows_three_cards() {
        assert_eq!(window_size(PageLayout::new(1280.0)), 3);
        assert_eq!(window_size(PageLayout::new(800.0)), 1);
    }

    #[test]
    fn arrows_stop_rotation_permanently() {
        let mut state = revealed();
        update(&mut state, Message::Next);
        assert_eq!(state.playback(), Playback::Paused);

        update(&mut state, Message::Tick);
        assert_eq!(state.active_index(), 1);
    }

    #[test]
    fn timer_advances_until_interaction() {
        let mut state = revealed();
        update(&mut state, Message::Tick);
        update(&mut state, Message::Tick);
        assert_eq!(state.active_index(), 2);

        update(&mut state, Message::JumpTo(0));
        update(&mut state, Message::Tick);
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn window_wraps_past_the_last_testimonial() {
        let mut state = revealed();
        update(&mut state, Message::Previous);
        let ids: Vec<usize> = state.visible_window(3).map(|(index, _)| index).collect();
        assert_eq!(ids, vec![state.len() - 1, 0, 1]);
    }
}
