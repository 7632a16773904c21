// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration and timing constants.
//!
//! # Categories
//!
//! - **Contact**: submission endpoint and request timeout
//! - **Carousels**: auto-advance intervals per section
//! - **Compare slider**: divider position
//! - **Layout**: window sizes and responsive breakpoints
//! - **Content**: where catalog images are looked up

// ==========================================================================
// Contact Defaults
// ==========================================================================

/// Endpoint receiving contact submissions when nothing else is configured.
pub const DEFAULT_CONTACT_ENDPOINT: &str = "http://localhost:5000/api/contact";

/// Default request timeout for a contact submission (in seconds).
pub const DEFAULT_CONTACT_TIMEOUT_SECS: u64 = 15;

/// Minimum contact request timeout (in seconds).
pub const MIN_CONTACT_TIMEOUT_SECS: u64 = 1;

/// Maximum contact request timeout (in seconds).
pub const MAX_CONTACT_TIMEOUT_SECS: u64 = 120;

/// Minimum number of characters in the visitor's name.
pub const MIN_NAME_CHARS: usize = 2;

/// Minimum number of characters in the WhatsApp number.
pub const MIN_WHATSAPP_CHARS: usize = 10;

// ==========================================================================
// Carousel Defaults
// ==========================================================================

/// Auto-advance interval of the before/after results carousel.
pub const RESULTS_INTERVAL_MS: u64 = 6000;

/// Auto-advance interval of the testimonials carousel.
pub const TESTIMONIALS_INTERVAL_MS: u64 = 5000;

/// Auto-advance interval of the technology stepper.
pub const TECHNOLOGY_INTERVAL_MS: u64 = 3000;

/// Number of testimonial cards shown side by side on wide layouts.
pub const TESTIMONIALS_WIDE_WINDOW: usize = 3;

/// Share of a section's height that must be on screen before it counts as revealed.
pub const REVEAL_THRESHOLD: f32 = 0.2;

// ==========================================================================
// Compare Slider Defaults
// ==========================================================================

/// Divider position (percent) for a freshly displayed case.
pub const DEFAULT_DIVIDER_PERCENT: f32 = 50.0;

/// Width of the divider line in logical pixels.
pub const DIVIDER_WIDTH: f32 = 1.0;

/// Height of the comparison frame in logical pixels.
pub const COMPARE_FRAME_HEIGHT: f32 = 420.0;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Default window width.
pub const DEFAULT_WINDOW_WIDTH: f32 = 1100.0;

/// Default window height.
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

/// Minimum window width.
pub const MIN_WINDOW_WIDTH: f32 = 420.0;

/// Minimum window height.
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// Window width from which multi-column layouts are used.
pub const WIDE_LAYOUT_BREAKPOINT: f32 = 1024.0;

/// Maximum width of the page content column.
pub const CONTENT_MAX_WIDTH: f32 = 1120.0;

// ==========================================================================
// Content Defaults
// ==========================================================================

/// Directory searched for catalog images when `[content].assets_dir` is unset.
pub const DEFAULT_ASSETS_DIR: &str = "assets/images";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_bounds_are_consistent() {
        assert!(MIN_CONTACT_TIMEOUT_SECS <= DEFAULT_CONTACT_TIMEOUT_SECS);
        assert!(DEFAULT_CONTACT_TIMEOUT_SECS <= MAX_CONTACT_TIMEOUT_SECS);
    }

    #[test]
    fn divider_default_is_centered() {
        assert!((DEFAULT_DIVIDER_PERCENT - 50.0).abs() < f32::EPSILON);
    }

    #[test]
    fn minimum_window_fits_inside_default() {
        assert!(MIN_WINDOW_WIDTH <= DEFAULT_WINDOW_WIDTH);
        assert!(MIN_WINDOW_HEIGHT <= DEFAULT_WINDOW_HEIGHT);
    }
}
