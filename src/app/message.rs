// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::SubmitError;
use crate::ui::notifications;
use crate::ui::sections::{
    contact, footer, header, hero, results, technology, testimonials, treatments, SectionId,
};
use iced::widget::scrollable::Viewport;
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level section messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    Hero(hero::Message),
    Treatments(treatments::Message),
    Technology(technology::Message),
    Results(results::Message),
    Testimonials(testimonials::Message),
    Contact(contact::Message),
    Footer(footer::Message),
    Notification(notifications::NotificationMessage),
    /// A section scrolled into view for the first time.
    SectionRevealed(SectionId),
    /// A section's top edge, in page coordinates.
    SectionMeasured(SectionId, f32),
    /// The page scrollable moved or changed size.
    PageScrolled(Viewport),
    WindowResized(Size),
    /// Outcome of the contact request.
    ContactSubmitted(Result<(), SubmitError>),
    /// The desktop handler was asked to open a link.
    LinkOpened(String, Result<(), String>),
    Tick(Instant), // Periodic tick for toast auto-dismiss
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `pt-BR`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ESSENCE_CLINIC_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional contact endpoint, replacing `[contact].endpoint`.
    pub endpoint: Option<String>,
}

impl Flags {
    /// Reads the known flags and logs anything it cannot use.
    ///
    /// A flag given without a value (a bare `--endpoint`) is reported and
    /// treated as absent.
    #[must_use]
    pub fn parse(mut args: pico_args::Arguments) -> Self {
        let flags = Self {
            lang: optional_value(&mut args, "--lang"),
            config_dir: optional_value(&mut args, "--config-dir"),
            endpoint: optional_value(&mut args, "--endpoint"),
        };

        let unused = args.finish();
        if !unused.is_empty() {
            tracing::warn!(?unused, "ignoring unrecognized arguments");
        }
        flags
    }
}

fn optional_value(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    args.opt_value_from_str(key).unwrap_or_else(|error| {
        tracing::warn!(flag = key, %error, "ignoring malformed flag");
        None
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn args(values: &[&str]) -> pico_args::Arguments {
        pico_args::Arguments::from_vec(values.iter().map(OsString::from).collect())
    }

    #[test]
    fn reads_every_known_flag() {
        let flags = Flags::parse(args(&[
            "--lang",
            "en-US",
            "--config-dir",
            "/tmp/clinic",
            "--endpoint",
            "http://127.0.0.1:9000/contact",
        ]));
        assert_eq!(flags.lang.as_deref(), Some("en-US"));
        assert_eq!(flags.config_dir.as_deref(), Some("/tmp/clinic"));
        assert_eq!(flags.endpoint.as_deref(), Some("http://127.0.0.1:9000/contact"));
    }

    #[test]
    fn flag_without_value_is_treated_as_absent() {
        let flags = Flags::parse(args(&["--lang", "pt-BR", "--endpoint"]));
        assert_eq!(flags.lang.as_deref(), Some("pt-BR"));
        assert!(flags.endpoint.is_none());
        assert!(flags.config_dir.is_none());
    }

    #[test]
    fn missing_flags_are_none() {
        let flags = Flags::parse(args(&[]));
        assert!(flags.lang.is_none());
        assert!(flags.config_dir.is_none());
        assert!(flags.endpoint.is_none());
    }
}
