// SPDX-License-Identifier: MPL-2.0
//! Before/after comparison state.
//!
//! Tracks where the divider sits (as a percentage of the container width)
//! and whether a mouse drag is in progress. The widget in
//! [`crate::ui::widgets::compare_slider`] only reports raw pointer input;
//! every decision about whether that input moves the divider lives here.

use crate::app::config::DEFAULT_DIVIDER_PERCENT;

/// Divider position in percent, guaranteed to be within `0.0..=100.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividerPosition(f32);

impl DividerPosition {
    pub const MIN: f32 = 0.0;
    pub const MAX: f32 = 100.0;

    /// Creates a position, clamping to the valid range. `NaN` maps to the default.
    #[must_use]
    pub fn new(percent: f32) -> Self {
        if percent.is_nan() {
            return Self::default();
        }
        Self(percent.clamp(Self::MIN, Self::MAX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Width of the "before" layer as a 0.0–1.0 fraction.
    #[must_use]
    pub fn as_fraction(self) -> f32 {
        self.0 / 100.0
    }
}

impl Default for DividerPosition {
    fn default() -> Self {
        Self(DEFAULT_DIVIDER_PERCENT)
    }
}

/// A pointer coordinate together with the container it was measured against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    /// Horizontal pointer coordinate.
    pub x: f32,
    /// Left edge of the container, in the same coordinate space as `x`.
    pub left: f32,
    /// Container width.
    pub width: f32,
}

impl PointerSample {
    #[must_use]
    pub fn new(x: f32, left: f32, width: f32) -> Self {
        Self { x, left, width }
    }

    /// Percentage of the container covered up to the pointer.
    ///
    /// Returns `None` for a zero-width (or otherwise unusable) container so
    /// the caller keeps the previous position.
    #[must_use]
    pub fn percent(&self) -> Option<DividerPosition> {
        if !(self.width > 0.0) || !self.width.is_finite() || !self.x.is_finite() {
            return None;
        }
        Some(DividerPosition::new(
            100.0 * (self.x - self.left) / self.width,
        ))
    }
}

/// Raw input reported by the comparison widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderInput {
    PointerDown,
    PointerMoved(PointerSample),
    PointerUp,
    PointerLeft,
    /// Touch moves update the divider without a preceding press.
    TouchMoved(PointerSample),
}

/// Divider position plus the mouse drag flag.
#[derive(Debug, Clone, Default)]
pub struct CompareState {
    position: DividerPosition,
    dragging: bool,
}

impl CompareState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn position(&self) -> DividerPosition {
        self.position
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Applies one input event. Returns `true` when the divider moved.
    pub fn handle(&mut self, input: SliderInput) -> bool {
        match input {
            SliderInput::PointerDown => {
                self.dragging = true;
                false
            }
            SliderInput::PointerUp | SliderInput::PointerLeft => {
                self.dragging = false;
                false
            }
            SliderInput::PointerMoved(sample) => {
                if !self.dragging {
                    return false;
                }
                self.move_to(sample)
            }
            SliderInput::TouchMoved(sample) => self.move_to(sample),
        }
    }

    /// Puts the divider back in the middle and drops any drag in progress.
    pub fn reset(&mut self) {
        self.position = DividerPosition::default();
        self.dragging = false;
    }

    fn move_to(&mut self, sample: PointerSample) -> bool {
        match sample.percent() {
            Some(position) if position != self.position => {
                self.position = position;
                true
            }
            _ => false,
        }
    }
}
