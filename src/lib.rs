// SPDX-License-Identifier: MPL-2.0
//! `essence_clinic` is the showcase page of an aesthetic and dental clinic,
//! built with the Iced GUI framework.
//!
//! It renders one scrollable page of sections: treatments, an auto-rotating
//! before/after comparison carousel, testimonials, articles and a contact
//! form that posts to a configurable endpoint. Interface text is localized
//! with Fluent and preferences live in a `settings.toml` file.

#![doc(html_root_url = "https://docs.rs/essence_clinic/0.1.0")]

pub mod app;
pub mod contact;
pub mod content;
pub mod error;
pub mod i18n;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
