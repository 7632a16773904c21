// SPDX-License-Identifier: MPL-2.0
//! Auto-rotating carousel state shared by the results, testimonials and
//! technology sections.
//!
//! A carousel owns its items, the active index and a play/pause flag. The
//! timer itself is an Iced subscription that exists only while
//! [`Carousel::is_ticking`] is true, so pausing drops the timer and resuming
//! arms a fresh one. A tick that still arrives after a pause is ignored.
//!
//! What pauses and what resumes differs per section and is described by a
//! [`CarouselBehavior`] value rather than by separate types.

use crate::app::config::{RESULTS_INTERVAL_MS, TECHNOLOGY_INTERVAL_MS, TESTIMONIALS_INTERVAL_MS};
use crate::ui::state::visibility::VisibilityLatch;
use std::time::Duration;

/// Whether the carousel advances on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Playback {
    #[default]
    Playing,
    Paused,
}

/// Who asked for the next item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The visitor pressed a control.
    Manual,
    /// The timer fired.
    Automatic,
}

/// Per-section rules for timing and pausing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselBehavior {
    pub interval: Duration,
    /// Manual navigation (previous, next, jump) pauses auto-advance.
    pub pause_on_manual: bool,
    /// Pointer entering the hover region pauses auto-advance.
    pub pause_on_hover: bool,
    /// Pointer leaving the hover region resumes auto-advance.
    pub resume_on_leave: bool,
}

impl CarouselBehavior {
    /// Before/after results: pauses on any interaction, resumes when the pointer leaves.
    #[must_use]
    pub const fn results() -> Self {
        Self {
            interval: Duration::from_millis(RESULTS_INTERVAL_MS),
            pause_on_manual: true,
            pause_on_hover: true,
            resume_on_leave: true,
        }
    }

    /// Testimonials: manual navigation pauses for good.
    #[must_use]
    pub const fn testimonials() -> Self {
        Self {
            interval: Duration::from_millis(TESTIMONIALS_INTERVAL_MS),
            pause_on_manual: true,
            pause_on_hover: false,
            resume_on_leave: false,
        }
    }

    /// Technology stepper: never stops once started.
    #[must_use]
    pub const fn technology() -> Self {
        Self {
            interval: Duration::from_millis(TECHNOLOGY_INTERVAL_MS),
            pause_on_manual: false,
            pause_on_hover: false,
            resume_on_leave: false,
        }
    }
}

/// Ordered items with an active index and auto-advance state.
///
/// Invariant: when `items` is non-empty, `active < items.len()`.
#[derive(Debug, Clone)]
pub struct Carousel<T> {
    items: Vec<T>,
    active: usize,
    playback: Playback,
    behavior: CarouselBehavior,
    visibility: VisibilityLatch,
}

impl<T> Carousel<T> {
    #[must_use]
    pub fn new(items: Vec<T>, behavior: CarouselBehavior) -> Self {
        Self {
            items,
            active: 0,
            playback: Playback::Playing,
            behavior,
            visibility: VisibilityLatch::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// The item on display, `None` for an empty carousel.
    #[must_use]
    pub fn active(&self) -> Option<&T> {
        self.items.get(self.active)
    }

    #[must_use]
    pub fn playback(&self) -> Playback {
        self.playback
    }

    #[must_use]
    pub fn behavior(&self) -> CarouselBehavior {
        self.behavior
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.visibility.is_revealed()
    }

    /// Whether a timer subscription should exist right now.
    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.playback == Playback::Playing && self.is_revealed() && !self.is_empty()
    }

    /// Moves forward one item, wrapping at the end. Returns `true` when the index changed.
    pub fn next(&mut self, advance: Advance) -> bool {
        if self.is_empty() {
            return false;
        }
        if advance == Advance::Manual {
            self.pause_for_manual();
        }
        let previous = self.active;
        self.active = (self.active + 1) % self.items.len();
        self.active != previous
    }

    /// Moves back one item, wrapping at the start. Returns `true` when the index changed.
    pub fn previous(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        self.pause_for_manual();
        let len = self.items.len();
        let previous = self.active;
        self.active = (self.active + len - 1) % len;
        self.active != previous
    }

    /// Shows the item at `index`. Out-of-range indices are ignored.
    /// Returns `true` when the index changed.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        self.pause_for_manual();
        let previous = self.active;
        self.active = index;
        self.active != previous
    }

    /// Timer callback. Returns `true` when the index changed.
    pub fn tick(&mut self) -> bool {
        if !self.is_ticking() {
            return false;
        }
        self.next(Advance::Automatic)
    }

    pub fn pointer_entered(&mut self) {
        if self.behavior.pause_on_hover {
            self.playback = Playback::Paused;
        }
    }

    pub fn pointer_left(&mut self) {
        if self.behavior.resume_on_leave {
            self.playback = Playback::Playing;
        }
    }

    /// Records that the section scrolled into view. Returns `true` the first time.
    pub fn reveal(&mut self) -> bool {
        self.visibility.mark()
    }

    /// Up to `count` items starting at the active one, wrapping around.
    ///
    /// Never yields more than `len` items, so a short list is not repeated.
    pub fn visible_window(&self, count: usize) -> impl Iterator<Item = (usize, &T)> {
        let len = self.items.len();
        (0..count.min(len)).map(move |offset| {
            let index = (self.active + offset) % len;
            (index, &self.items[index])
        })
    }

    fn pause_for_manual(&mut self) {
        if self.behavior.pause_on_manual {
            self.playback = Playback::Paused;
        }
    }
}
