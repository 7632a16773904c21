// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Pure state machines behind the interactive sections, kept apart from the
//! widgets that draw them so they can be driven directly in tests.

pub mod carousel;
pub mod compare;
pub mod visibility;

pub use carousel::{Advance, Carousel, CarouselBehavior, Playback};
pub use compare::{CompareState, DividerPosition, PointerSample, SliderInput};
pub use visibility::VisibilityLatch;
