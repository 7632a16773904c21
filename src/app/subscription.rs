// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Carousel timers only exist while their carousel is ticking, so pausing a
//! carousel drops its timer and resuming arms a fresh one with a full
//! interval.

use super::Message;
use crate::ui::sections::{results, technology, testimonials};
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Forwards window resizes so the page can switch between layouts.
pub fn create_window_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}

/// Periodic tick driving toast auto-dismiss, only while toasts exist.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// One timer per carousel that is currently playing and revealed.
pub fn create_carousel_subscriptions(
    technology: &technology::State,
    results: &results::State,
    testimonials: &testimonials::State,
) -> Subscription<Message> {
    let mut timers = Vec::with_capacity(3);

    if technology.is_ticking() {
        timers.push(
            time::every(technology.behavior().interval)
                .map(|_| Message::Technology(technology::Message::Tick)),
        );
    }
    if results.carousel().is_ticking() {
        timers.push(
            time::every(results.carousel().behavior().interval)
                .map(|_| Message::Results(results::Message::Tick)),
        );
    }
    if testimonials.is_ticking() {
        timers.push(
            time::every(testimonials.behavior().interval)
                .map(|_| Message::Testimonials(testimonials::Message::Tick)),
        );
    }

    Subscription::batch(timers)
}
