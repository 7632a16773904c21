// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Page
//!
//! - [`sections`] - The header and the page sections, top to bottom
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Carousel, before/after divider and reveal state machines
//! - [`widgets`] - Custom Iced widgets (comparison slider, reveal sensor)
//! - [`styles`] - Centralized styling (buttons, containers, text)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod design_tokens;
pub mod notifications;
pub mod sections;
pub mod state;
pub mod styles;
pub mod theming;
pub mod widgets;
