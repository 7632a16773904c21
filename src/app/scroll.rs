// SPDX-License-Identifier: MPL-2.0
//! Page scroll bookkeeping.
//!
//! The page scrollable reports its viewport on every scroll and each section
//! reports its top edge. Together they turn "go to the contact section" into
//! the relative offset Iced's `snap_to` operation expects.

use iced::widget::scrollable::{RelativeOffset, Viewport};

/// Scroll distance after which the header switches to its solid style.
pub const SCROLLED_THRESHOLD: f32 = 50.0;

/// Last known geometry of the page scrollable.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PageScroll {
    pub offset_y: f32,
    pub viewport_top: f32,
    pub viewport_height: f32,
    pub content_height: f32,
}

impl PageScroll {
    #[must_use]
    pub fn from_viewport(viewport: &Viewport) -> Self {
        let bounds = viewport.bounds();
        Self {
            offset_y: viewport.absolute_offset().y,
            viewport_top: bounds.y,
            viewport_height: bounds.height,
            content_height: viewport.content_bounds().height,
        }
    }

    /// Whether the page has moved far enough for the header to go solid.
    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.offset_y > SCROLLED_THRESHOLD
    }

    /// Offset that brings a section whose top edge sits at `section_top`
    /// to the top of the viewport, as far as the content allows.
    #[must_use]
    pub fn target_for(&self, section_top: f32) -> RelativeOffset {
        RelativeOffset {
            x: 0.0,
            y: scroll_target(
                section_top,
                self.viewport_top,
                self.viewport_height,
                self.content_height,
            ),
        }
    }
}

/// Relative scroll position (0.0 top, 1.0 bottom) that aligns `section_top`
/// with the top of the viewport.
///
/// Content shorter than the viewport cannot scroll and always yields 0.
#[must_use]
pub fn scroll_target(
    section_top: f32,
    viewport_top: f32,
    viewport_height: f32,
    content_height: f32,
) -> f32 {
    let scrollable = content_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    ((section_top - viewport_top) / scrollable).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn first_section_maps_to_top() {
        assert_abs_diff_eq!(scroll_target(64.0, 64.0, 736.0, 6000.0), 0.0);
    }

    #[test]
    fn middle_section_maps_proportionally() {
        // 2632 px of travel, section 1316 px below the viewport top
        let y = scroll_target(1380.0, 64.0, 736.0, 3368.0);
        assert_abs_diff_eq!(y, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn sections_near_the_end_clamp_to_bottom() {
        assert_abs_diff_eq!(scroll_target(5900.0, 64.0, 736.0, 6000.0), 1.0);
    }

    #[test]
    fn short_content_never_scrolls() {
        assert_abs_diff_eq!(scroll_target(400.0, 0.0, 800.0, 600.0), 0.0);
    }

    #[test]
    fn header_goes_solid_past_threshold() {
        let mut scroll = PageScroll::default();
        assert!(!scroll.is_scrolled());
        scroll.offset_y = SCROLLED_THRESHOLD;
        assert!(!scroll.is_scrolled());
        scroll.offset_y = SCROLLED_THRESHOLD + 1.0;
        assert!(scroll.is_scrolled());
    }
}
