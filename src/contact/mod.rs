// SPDX-License-Identifier: MPL-2.0
//! Contact form: local validation and the outbound submission.

pub mod client;
pub mod form;

pub use client::ContactClient;
pub use form::{ContactForm, ContactSubmission, Field, FieldError, FieldErrors};
