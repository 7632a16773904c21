// SPDX-License-Identifier: MPL-2.0
//! Contact form state and validation.
//!
//! Fields are validated when the visitor submits. After a first attempt,
//! each edit re-validates the edited field so an error disappears as soon as
//! it is fixed.

use crate::app::config::{MIN_NAME_CHARS, MIN_WHATSAPP_CHARS};
use crate::content::TreatmentOption;
use serde::Serialize;

/// Editable inputs of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Whatsapp,
    Treatment,
    Message,
}

/// A field-level validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    NameTooShort,
    WhatsappTooShort,
    TreatmentMissing,
}

impl FieldError {
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            FieldError::NameTooShort => "contact-error-name",
            FieldError::WhatsappTooShort => "contact-error-whatsapp",
            FieldError::TreatmentMissing => "contact-error-treatment",
        }
    }
}

/// Current error of each validated field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<FieldError>,
    pub whatsapp: Option<FieldError>,
    pub treatment: Option<FieldError>,
}

impl FieldErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.whatsapp.is_none() && self.treatment.is_none()
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Name => self.name,
            Field::Whatsapp => self.whatsapp,
            Field::Treatment => self.treatment,
            Field::Message => None,
        }
    }
}

/// JSON body sent to the contact endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub whatsapp: String,
    pub treatment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    name: String,
    whatsapp: String,
    treatment: Option<TreatmentOption>,
    message: String,
    errors: FieldErrors,
    attempted: bool,
    submitting: bool,
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn whatsapp(&self) -> &str {
        &self.whatsapp
    }

    #[must_use]
    pub fn treatment(&self) -> Option<TreatmentOption> {
        self.treatment
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn errors(&self) -> FieldErrors {
        self.errors
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_name(&mut self, value: String) {
        self.name = value;
        self.revalidate(Field::Name);
    }

    pub fn set_whatsapp(&mut self, value: String) {
        self.whatsapp = value;
        self.revalidate(Field::Whatsapp);
    }

    pub fn select_treatment(&mut self, option: TreatmentOption) {
        self.treatment = Some(option);
        self.revalidate(Field::Treatment);
    }

    pub fn set_message(&mut self, value: String) {
        self.message = value;
    }

    /// Validates every field without touching the stored errors.
    pub fn validate(&self) -> Result<ContactSubmission, FieldErrors> {
        let errors = FieldErrors {
            name: self.check(Field::Name),
            whatsapp: self.check(Field::Whatsapp),
            treatment: self.check(Field::Treatment),
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        let treatment = self.treatment.map(|t| t.value.to_string()).unwrap_or_default();
        let message = self.message.trim();
        Ok(ContactSubmission {
            name: self.name.trim().to_string(),
            whatsapp: self.whatsapp.trim().to_string(),
            treatment,
            message: (!message.is_empty()).then(|| message.to_string()),
        })
    }

    /// Starts a submission.
    ///
    /// Returns the payload to send, or `None` when a submission is already
    /// in flight or a field is invalid (the errors are then shown).
    pub fn begin_submit(&mut self) -> Option<ContactSubmission> {
        if self.submitting {
            return None;
        }
        self.attempted = true;
        match self.validate() {
            Ok(submission) => {
                self.errors = FieldErrors::default();
                self.submitting = true;
                Some(submission)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// Ends the in-flight submission. Success clears the form; failure keeps
    /// what the visitor typed so they can retry.
    pub fn finish_submit(&mut self, succeeded: bool) {
        if succeeded {
            *self = Self::default();
        } else {
            self.submitting = false;
        }
    }

    fn revalidate(&mut self, field: Field) {
        if !self.attempted {
            return;
        }
        let error = self.check(field);
        match field {
            Field::Name => self.errors.name = error,
            Field::Whatsapp => self.errors.whatsapp = error,
            Field::Treatment => self.errors.treatment = error,
            Field::Message => {}
        }
    }

    fn check(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Name => (self.name.trim().chars().count() < MIN_NAME_CHARS)
                .then_some(FieldError::NameTooShort),
            Field::Whatsapp => (self.whatsapp.trim().chars().count() < MIN_WHATSAPP_CHARS)
                .then_some(FieldError::WhatsappTooShort),
            Field::Treatment => self
                .treatment
                .is_none()
                .then_some(FieldError::TreatmentMissing),
            Field::Message => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::catalog::TREATMENT_OPTIONS;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_name("Maria Silva".into());
        form.set_whatsapp("(11) 99999-9999".into());
        form.select_treatment(TREATMENT_OPTIONS[4]);
        form
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = ContactForm::new().validate().unwrap_err();
        assert_eq!(errors.name, Some(FieldError::NameTooShort));
        assert_eq!(errors.whatsapp, Some(FieldError::WhatsappTooShort));
        assert_eq!(errors.treatment, Some(FieldError::TreatmentMissing));
    }

    #[test]
    fn nine_character_whatsapp_is_rejected() {
        let mut form = filled();
        form.set_whatsapp("119999999".into());
        assert!(form.begin_submit().is_none());
        assert_eq!(form.errors().whatsapp, Some(FieldError::WhatsappTooShort));
        assert!(!form.is_submitting());
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        let mut form = filled();
        form.set_name("Íô".into());
        assert!(form.validate().is_ok());
        form.set_name("É".into());
        assert_eq!(form.validate().unwrap_err().name, Some(FieldError::NameTooShort));
    }

    #[test]
    fn valid_form_builds_payload() {
        let mut form = filled();
        let submission = form.begin_submit().expect("valid form");
        assert_eq!(submission.treatment, "clareamento");
        assert_eq!(submission.message, None);
        assert!(form.is_submitting());
    }

    #[test]
    fn empty_message_is_left_out_of_json() {
        let submission = filled().validate().unwrap();
        let json = serde_json::to_value(&submission).unwrap();
        assert!(json.get("message").is_none());
        assert_eq!(json["name"], "Maria Silva");
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let mut form = filled();
        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());
    }

    #[test]
    fn errors_clear_on_edit_after_first_attempt() {
        let mut form = ContactForm::new();
        form.set_name("A".into());
        assert_eq!(form.errors().name, None, "no error before submitting");

        form.begin_submit();
        assert_eq!(form.errors().name, Some(FieldError::NameTooShort));

        form.set_name("Ana".into());
        assert_eq!(form.errors().name, None);
        assert_eq!(form.errors().whatsapp, Some(FieldError::WhatsappTooShort));
    }

    #[test]
    fn success_clears_and_failure_keeps_values() {
        let mut form = filled();
        form.set_message("Quero clarear".into());
        form.begin_submit();
        form.finish_submit(false);
        assert_eq!(form.message(), "Quero clarear");
        assert!(!form.is_submitting());

        form.begin_submit();
        form.finish_submit(true);
        assert_eq!(form.name(), "");
        assert!(form.treatment().is_none());
        assert!(form.errors().is_empty());
    }
}
