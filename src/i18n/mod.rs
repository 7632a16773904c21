// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! UI chrome is localized with Fluent. Catalog content (treatments,
//! testimonials, articles) is data and stays in the language it was written in.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - `.ftl` translation files embedded at compile time
//! - Runtime language switching
//! - Fallback to the default locale when a language is unavailable

pub mod fluent;
