// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! The header toggles write the chosen theme mode and language back to
//! `settings.toml`. A failed write keeps the choice for this session and
//! shows a warning toast.

use crate::app::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{Manager, Notification};
use crate::ui::theming::ThemeMode;
use unic_langid::LanguageIdentifier;

/// i18n key of the warning shown when settings cannot be written.
pub const SAVE_ERROR_KEY: &str = "notification-config-save-error";

/// Writes `cfg` to disk, reporting failures through a toast.
///
/// Skipped under test so unit tests never touch the real config directory.
pub fn persist(cfg: &Config, notifications: &mut Manager) {
    if cfg!(test) {
        return;
    }

    if let Err(error) = config::save(cfg) {
        tracing::warn!(%error, "failed to save settings");
        notifications.push(Notification::warning(SAVE_ERROR_KEY));
    }
}

/// Stores the new theme mode and persists it.
pub fn apply_theme_change(cfg: &mut Config, mode: ThemeMode, notifications: &mut Manager) {
    cfg.general.theme_mode = mode;
    persist(cfg, notifications);
}

/// Switches the interface language and persists the choice.
pub fn apply_language_change(
    i18n: &mut I18n,
    cfg: &mut Config,
    locale: LanguageIdentifier,
    notifications: &mut Manager,
) {
    i18n.set_locale(locale.clone());
    cfg.general.language = Some(locale.to_string());
    persist(cfg, notifications);
}

/// Locale following the current one in `available`, wrapping around.
#[must_use]
pub fn next_locale(
    current: &LanguageIdentifier,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    if available.is_empty() {
        return None;
    }
    let next = available
        .iter()
        .position(|locale| locale == current)
        .map_or(0, |index| (index + 1) % available.len());
    available.get(next).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locales() -> Vec<LanguageIdentifier> {
        ["en-US", "pt-BR"]
            .iter()
            .filter_map(|id| id.parse().ok())
            .collect()
    }

    #[test]
    fn next_locale_wraps_around() {
        let available = locales();
        let next = next_locale(&available[1], &available);
        assert_eq!(next.as_ref(), Some(&available[0]));
    }

    #[test]
    fn unknown_locale_starts_from_first() {
        let available = locales();
        let unknown: LanguageIdentifier = "fr".parse().expect("valid id");
        assert_eq!(next_locale(&unknown, &available).as_ref(), Some(&available[0]));
    }

    #[test]
    fn theme_change_updates_config() {
        let mut cfg = Config::default();
        let mut notifications = Manager::new();
        apply_theme_change(&mut cfg, ThemeMode::Dark, &mut notifications);
        assert_eq!(cfg.general.theme_mode, ThemeMode::Dark);
        assert!(!notifications.has_notifications());
    }

    #[test]
    fn language_change_updates_i18n_and_config() {
        let mut cfg = Config::default();
        let mut i18n = I18n::default();
        let mut notifications = Manager::new();
        let english: LanguageIdentifier = "en-US".parse().expect("valid id");

        apply_language_change(&mut i18n, &mut cfg, english.clone(), &mut notifications);

        assert_eq!(i18n.current_locale(), &english);
        assert_eq!(cfg.general.language.as_deref(), Some("en-US"));
    }
}
