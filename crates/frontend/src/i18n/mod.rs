//! Localization behind an explicit context boundary.
//!
//! Components never reach for a global message table: the [`I18n`] handle is
//! provided once at the app root and read with [`use_i18n`]. Reading
//! `messages()` tracks the locale signal, so every label re-renders on a
//! locale switch.

pub mod messages;

use leptos::prelude::*;
use messages::Messages;

const LOCALE_STORAGE_KEY: &str = "locale";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    Ru,
    En,
}

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Locale::Ru => "ru",
            Locale::En => "en",
        }
    }
}

/// Replaces `{name}` placeholders in a message template. Unknown
/// placeholders are left as-is and missing values render as the raw
/// template; a wrong label is better than a panic in a render path.
pub fn interpolate(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (name, value) in vars {
        out = out.replace(&format!("{{{}}}", name), value);
    }
    out
}

/// Localization handle held in the Leptos context.
#[derive(Clone, Copy)]
pub struct I18n {
    locale: RwSignal<Locale>,
}

impl I18n {
    pub fn new() -> Self {
        Self {
            locale: RwSignal::new(detect_initial_locale()),
        }
    }

    /// Current locale (reactive read).
    pub fn locale(&self) -> Locale {
        self.locale.get()
    }

    /// Message table of the current locale (reactive read).
    pub fn messages(&self) -> &'static Messages {
        match self.locale.get() {
            Locale::Ru => &messages::RU,
            Locale::En => &messages::EN,
        }
    }

    pub fn set_locale(&self, locale: Locale) {
        self.locale.set(locale);
        // best-effort persistence; private browsing may reject it
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(LOCALE_STORAGE_KEY, locale.code());
        }
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new()
    }
}

fn detect_initial_locale() -> Locale {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(LOCALE_STORAGE_KEY).ok().flatten());
    match stored.as_deref() {
        Some("en") => Locale::En,
        _ => Locale::Ru,
    }
}

pub fn use_i18n() -> I18n {
    use_context::<I18n>().expect("I18n context not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolate_replaces_named_placeholders() {
        assert_eq!(
            interpolate("Day {day}: {time}", &[("day", "3".into()), ("time", "14:05".into())]),
            "Day 3: 14:05"
        );
    }

    #[test]
    fn interpolate_leaves_unknown_placeholders() {
        assert_eq!(interpolate("VM {type}-{id}", &[("id", "16".into())]), "VM {type}-16");
    }

    #[test]
    fn both_tables_localize_the_other_bucket() {
        assert_ne!(messages::RU.other, messages::EN.other);
    }
}
