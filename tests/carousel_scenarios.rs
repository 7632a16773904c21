// SPDX-License-Identifier: MPL-2.0
//! End-to-end walks through the carousels and the contact form.

use approx::assert_abs_diff_eq;
use essence_clinic::contact::{ContactForm, Field, FieldError};
use essence_clinic::content::catalog;
use essence_clinic::ui::sections::{results, technology, testimonials, PageLayout};
use essence_clinic::ui::state::{Playback, PointerSample, SliderInput};

fn revealed_results() -> results::State {
    let mut state = results::State::new(catalog::result_cases());
    assert!(state.reveal());
    state
}

fn drag_to(state: &mut results::State, percent: f32) {
    results::update(state, results::Message::Slider(SliderInput::PointerDown));
    results::update(
        state,
        results::Message::Slider(SliderInput::PointerMoved(PointerSample::new(
            percent,
            0.0,
            100.0,
        ))),
    );
    results::update(state, results::Message::Slider(SliderInput::PointerUp));
}

#[test]
fn visitor_browses_six_results() {
    let mut state = revealed_results();
    assert_eq!(state.carousel().len(), 6);

    for _ in 0..3 {
        results::update(&mut state, results::Message::Next);
    }
    assert_eq!(state.carousel().active_index(), 3);
    assert_eq!(state.carousel().playback(), Playback::Paused);

    results::update(&mut state, results::Message::Previous);
    assert_eq!(state.carousel().active_index(), 2);

    results::update(&mut state, results::Message::JumpTo(5));
    assert_eq!(state.carousel().active_index(), 5);

    // Ticks are dropped while paused.
    results::update(&mut state, results::Message::Tick);
    assert_eq!(state.carousel().active_index(), 5);

    // Moving the pointer off the card resumes rotation, which wraps around.
    results::update(&mut state, results::Message::PointerEntered);
    results::update(&mut state, results::Message::PointerLeft);
    assert!(state.carousel().is_ticking());
    results::update(&mut state, results::Message::Tick);
    assert_eq!(state.carousel().active_index(), 0);
}

#[test]
fn changing_case_recenters_the_divider() {
    let mut state = revealed_results();
    drag_to(&mut state, 80.0);
    assert_abs_diff_eq!(state.compare().position().value(), 80.0, epsilon = 1e-4);

    results::update(&mut state, results::Message::Next);
    assert_abs_diff_eq!(state.compare().position().value(), 50.0, epsilon = 1e-4);

    drag_to(&mut state, 10.0);
    results::update(&mut state, results::Message::PointerLeft);
    results::update(&mut state, results::Message::Tick);
    assert_abs_diff_eq!(state.compare().position().value(), 50.0, epsilon = 1e-4);
}

#[test]
fn results_do_not_rotate_before_being_seen() {
    let mut state = results::State::new(catalog::result_cases());
    assert!(!state.carousel().is_ticking());
    results::update(&mut state, results::Message::Tick);
    assert_eq!(state.carousel().active_index(), 0);
}

#[test]
fn empty_testimonials_are_inert() {
    let mut state = testimonials::new_state(Vec::new());
    state.reveal();
    assert!(!state.is_ticking());

    for message in [
        testimonials::Message::Next,
        testimonials::Message::Previous,
        testimonials::Message::JumpTo(0),
        testimonials::Message::Tick,
    ] {
        testimonials::update(&mut state, message);
    }
    assert!(state.active().is_none());
    assert_eq!(
        state
            .visible_window(testimonials::window_size(PageLayout::new(1280.0)))
            .count(),
        0
    );
}

#[test]
fn testimonial_dots_stop_rotation_for_good() {
    let mut state = testimonials::new_state(catalog::testimonials());
    state.reveal();
    testimonials::update(&mut state, testimonials::Message::JumpTo(3));
    testimonials::update(&mut state, testimonials::Message::Tick);
    assert_eq!(state.active_index(), 3);
    assert!(!state.is_ticking());
}

#[test]
fn technology_keeps_cycling_after_a_selection() {
    let mut state = technology::new_state(catalog::tech_steps());
    state.reveal();
    technology::update(&mut state, technology::Message::Select(3));
    technology::update(&mut state, technology::Message::Tick);
    assert_eq!(state.active_index(), 0);
    assert!(state.is_ticking());
}

#[test]
fn short_whatsapp_blocks_submission() {
    let mut form = ContactForm::new();
    form.set_name("Maria Silva".to_string());
    form.set_whatsapp("119999999".to_string());
    form.select_treatment(catalog::treatment_option("ortodontia").expect("known option"));

    assert!(form.begin_submit().is_none());
    assert!(!form.is_submitting());
    assert_eq!(form.errors().get(Field::Whatsapp), Some(FieldError::WhatsappTooShort));
    assert_eq!(form.errors().get(Field::Name), None);

    // Errors follow the visitor's edits once a submit was attempted.
    form.set_whatsapp("1199999999".to_string());
    assert!(form.errors().is_empty());
    assert!(form.begin_submit().is_some());
}
