// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Submission failures have their own [`SubmitError`]: they travel inside UI
//! messages and end as a notification, never as an [`Error`].

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
}

/// Why a contact submission did not go through.
///
/// Every variant is shown to the visitor as the same generic notice; the
/// distinction only exists for logs and tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The request never produced a response (DNS, refused connection, TLS...).
    #[error("transport failure: {0}")]
    Transport(String),
    /// The endpoint answered with a non-success status.
    #[error("endpoint answered with status {0}")]
    Status(u16),
    /// No answer before the configured timeout.
    #[error("request timed out")]
    Timeout,
    /// The HTTP client could not be built.
    #[error("client setup failed: {0}")]
    Client(String),
}

impl SubmitError {
    /// The i18n key of the notice shown for any failure.
    pub fn i18n_key(&self) -> &'static str {
        "notification-contact-error"
    }
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SubmitError::Timeout
        } else if let Some(status) = err.status() {
            SubmitError::Status(status.as_u16())
        } else if err.is_builder() {
            SubmitError::Client(err.to_string())
        } else {
            SubmitError::Transport(err.to_string())
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn submit_error_display_names_the_status() {
        let err = SubmitError::Status(500);
        assert_eq!(err.to_string(), "endpoint answered with status 500");
    }

    #[test]
    fn every_submit_error_maps_to_the_same_notice() {
        let errors = [
            SubmitError::Transport("refused".into()),
            SubmitError::Status(503),
            SubmitError::Timeout,
            SubmitError::Client("tls".into()),
        ];
        for err in errors {
            assert_eq!(err.i18n_key(), "notification-contact-error");
        }
    }
}
