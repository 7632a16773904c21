// SPDX-License-Identifier: MPL-2.0
//! Static page content.
//!
//! Everything the sections display that is not UI chrome: treatments, result
//! cases, testimonials, articles and contact details. The records are
//! compiled in (see [`catalog`]) and never change at runtime, so they are
//! plain `&'static str` structs.
//!
//! Images are referenced by file name and resolved against the configured
//! assets directory when the page is drawn.

pub mod catalog;

use chrono::{Datelike, NaiveDate};
use std::path::{Path, PathBuf};

/// File name of a catalog image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRef(pub &'static str);

impl ImageRef {
    /// Full path of the image inside `assets_dir`.
    #[must_use]
    pub fn resolve(self, assets_dir: &Path) -> PathBuf {
        assets_dir.join(self.0)
    }
}

/// Pictogram drawn next to differentials and technology steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Scanner,
    Team,
    Heart,
    Scan,
    Design,
    Precision,
    App,
}

impl Icon {
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Scanner => "◎",
            Icon::Team => "☺",
            Icon::Heart => "♥",
            Icon::Scan => "▣",
            Icon::Design => "✎",
            Icon::Precision => "✛",
            Icon::App => "▯",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Treatment {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: ImageRef,
    pub services: &'static [&'static str],
    /// Rendered with the "most requested" ribbon.
    pub featured: bool,
}

/// One before/after pair shown by the results carousel.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparableCase {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub duration: &'static str,
    pub before: ImageRef,
    pub after: ImageRef,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub id: &'static str,
    pub name: &'static str,
    pub age: u8,
    pub text: &'static str,
    /// Stars out of five.
    pub rating: u8,
    pub treatment: &'static str,
}

impl Testimonial {
    pub const MAX_RATING: u8 = 5;

    /// First letter of each word of the name, used in the avatar.
    #[must_use]
    pub fn initials(&self) -> String {
        initials(self.name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlogPost {
    pub id: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub category: &'static str,
    pub image: ImageRef,
    /// ISO `yyyy-mm-dd`.
    pub date: &'static str,
    pub slug: &'static str,
}

impl BlogPost {
    #[must_use]
    pub fn date_label(&self) -> String {
        date_label(self.date)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TechStep {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Differential {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

/// A selectable value of the contact form's treatment field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreatmentOption {
    /// Value sent to the contact endpoint.
    pub value: &'static str,
    pub label: &'static str,
}

impl std::fmt::Display for TreatmentOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpeningHours {
    pub weekdays: &'static str,
    pub saturday: &'static str,
    pub sunday: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInfo {
    pub whatsapp: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub address: &'static str,
    pub hours: OpeningHours,
}

impl ContactInfo {
    /// `https://wa.me/<digits>` link for the WhatsApp number.
    #[must_use]
    pub fn whatsapp_link(&self) -> String {
        format!("https://wa.me/{}", digits(self.whatsapp))
    }

    /// `tel:<digits>` link for the landline.
    #[must_use]
    pub fn phone_link(&self) -> String {
        format!("tel:{}", digits(self.phone))
    }

    #[must_use]
    pub fn email_link(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

/// First character of every whitespace-separated word.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

/// Keeps only ASCII digits.
#[must_use]
pub fn digits(number: &str) -> String {
    number.chars().filter(char::is_ascii_digit).collect()
}

const MONTHS_PT_BR: [&str; 12] = [
    "jan.", "fev.", "mar.", "abr.", "mai.", "jun.", "jul.", "ago.", "set.", "out.", "nov.", "dez.",
];

/// Renders an ISO date as "5 de dez. de 2024". Unparsable input is returned as is.
#[must_use]
pub fn date_label(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(date) => format!(
            "{} de {} de {}",
            date.day(),
            MONTHS_PT_BR[date.month0() as usize],
            date.year()
        ),
        Err(_) => iso.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_every_word() {
        assert_eq!(initials("Ana Paula Costa"), "APC");
        assert_eq!(initials("  Maria   Silva "), "MS");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn digits_strip_formatting() {
        assert_eq!(digits("+55 11 99999-9999"), "5511999999999");
    }

    #[test]
    fn date_label_uses_portuguese_months() {
        assert_eq!(date_label("2024-12-05"), "5 de dez. de 2024");
        assert_eq!(date_label("2024-11-28"), "28 de nov. de 2024");
    }

    #[test]
    fn unparsable_date_is_shown_verbatim() {
        assert_eq!(date_label("em breve"), "em breve");
    }

    #[test]
    fn image_resolves_inside_assets_dir() {
        let path = ImageRef("a.png").resolve(Path::new("/srv/assets"));
        assert_eq!(path, PathBuf::from("/srv/assets/a.png"));
    }

    #[test]
    fn contact_links_use_digits_only() {
        let info = catalog::contact_info();
        assert_eq!(info.whatsapp_link(), "https://wa.me/5511999999999");
        assert_eq!(info.phone_link(), "tel:551133333333");
    }
}
