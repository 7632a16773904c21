// SPDX-License-Identifier: MPL-2.0
//! Technology stepper on the dark band.
//!
//! Steps advance on their own every few seconds once the section has been
//! seen. Clicking a step selects it without stopping the rotation.

use super::{responsive_row, section_body, section_heading, PageLayout};
use crate::content::TechStep;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::state::{Carousel, CarouselBehavior};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, container, Column, Container, Row, Text},
    Element, Length,
};

pub type State = Carousel<TechStep>;

#[must_use]
pub fn new_state(steps: Vec<TechStep>) -> State {
    Carousel::new(steps, CarouselBehavior::technology())
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub layout: PageLayout,
    pub state: &'a State,
}

#[derive(Debug, Clone)]
pub enum Message {
    Select(usize),
    Tick,
}

pub fn update(state: &mut State, message: Message) {
    match message {
        Message::Select(index) => {
            state.jump_to(index);
        }
        Message::Tick => {
            state.tick();
        }
    }
}

/// Share of the progress bar filled: steps reached over total steps.
#[must_use]
pub fn progress(state: &State) -> f32 {
    if state.is_empty() {
        return 0.0;
    }
    (state.active_index() + 1) as f32 / state.len() as f32
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let state = ctx.state;
    let revealed = state.is_revealed();
    let active = state.active_index();

    let cards: Vec<Element<'a, Message>> = state
        .items()
        .iter()
        .enumerate()
        .map(|(index, step)| step_card(ctx.i18n, index, step, index <= active, revealed))
        .collect();

    let mut content = Column::new().spacing(spacing::XXL).push(section_heading(
        ctx.i18n,
        "technology-title",
        "technology-title-accent",
        "technology-subtitle",
        revealed,
        true,
    ));

    if ctx.layout.is_wide() && !state.is_empty() {
        content = content.push(progress_bar(state));
    }

    content = content.push(responsive_row(ctx.layout, cards, spacing::LG));

    Container::new(section_body(content))
        .width(Length::Fill)
        .style(styles::container::band_inverse)
        .into()
}

fn progress_bar<'a>(state: &State) -> Element<'a, Message> {
    let reached = (state.active_index() + 1) as u16;
    let remaining = state.len() as u16 - reached;

    let mut bar = Row::new().height(Length::Fixed(sizing::PROGRESS_TRACK)).push(
        container(Row::new())
            .width(Length::FillPortion(reached))
            .height(Length::Fill)
            .style(styles::container::progress(true)),
    );
    if remaining > 0 {
        bar = bar.push(
            container(Row::new())
                .width(Length::FillPortion(remaining))
                .height(Length::Fill)
                .style(styles::container::progress(false)),
        );
    }
    bar.into()
}

fn step_card<'a>(
    i18n: &I18n,
    index: usize,
    step: &'a TechStep,
    reached: bool,
    revealed: bool,
) -> Element<'a, Message> {
    let tile_color = if reached {
        palette::EMERALD_600
    } else {
        palette::PETROL_700
    };
    let tile = container(Text::new(step.icon.glyph()).size(typography::TITLE_MD))
        .width(Length::Fixed(sizing::STEP_BADGE))
        .height(Length::Fixed(sizing::STEP_BADGE))
        .center_x(Length::Fixed(sizing::STEP_BADGE))
        .center_y(Length::Fixed(sizing::STEP_BADGE))
        .style(styles::container::icon_tile(tile_color));

    let number = (index + 1).to_string();
    let body = Column::new()
        .spacing(spacing::XS)
        .push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(tile)
                .push(
                    Text::new(i18n.tr_with_args("technology-step", &[("number", number.as_str())]))
                        .size(typography::BODY_SM)
                        .style(styles::text::on_inverse_accent(revealed)),
                ),
        )
        .push(
            Text::new(step.title)
                .size(typography::TITLE_SM)
                .style(styles::text::on_inverse(revealed)),
        )
        .push(
            Text::new(step.description)
                .size(typography::BODY_SM)
                .style(styles::text::on_inverse_muted),
        );

    button(body)
        .on_press(Message::Select(index))
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::button::step_card(reached))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::catalog;
    use crate::test_utils::assert_abs_diff_eq;
    use crate::ui::state::Playback;

    fn revealed_state() -> State {
        let mut state = new_state(catalog::tech_steps());
        state.reveal();
        state
    }

    #[test]
    fn progress_counts_reached_steps() {
        let mut state = revealed_state();
        assert_abs_diff_eq!(progress(&state), 0.25);
        update(&mut state, Message::Select(3));
        assert_abs_diff_eq!(progress(&state), 1.0);
    }

    #[test]
    fn selecting_keeps_rotation_running() {
        let mut state = revealed_state();
        update(&mut state, Message::Select(2));
        assert_eq!(state.playback(), Playback::Playing);

        update(&mut state, Message::Tick);
        assert_eq!(state.active_index(), 3);
        update(&mut state, Message::Tick);
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn empty_stepper_has_no_progress() {
        assert_abs_diff_eq!(progress(&new_state(Vec::new())), 0.0);
    }
}
