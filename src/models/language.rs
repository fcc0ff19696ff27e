//! Supported subtitle languages.
//!
//! The registry is a fixed, ordered list. Every other module refers to a
//! language through the `&'static Language` values defined here.

use crate::Error;
use serde::Serialize;

/// A language: its full English name and ISO 639-2 code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Language {
    pub full_name: &'static str,
    pub iso_name: &'static str,
}

impl Language {
    const fn new(full_name: &'static str, iso_name: &'static str) -> Self {
        Self {
            full_name,
            iso_name,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.full_name, self.iso_name)
    }
}

impl std::str::FromStr for &'static Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        locate_language(s).ok_or_else(|| Error::UnsupportedLanguage(s.to_string()))
    }
}

pub static HEBREW: Language = Language::new("Hebrew", "heb");
pub static ENGLISH: Language = Language::new("English", "eng");
pub static SPANISH: Language = Language::new("Spanish", "spa");
pub static ARABIC: Language = Language::new("Arabic", "ara");
pub static BULGARIAN: Language = Language::new("Bulgarian", "bul");
pub static SLOVAK: Language = Language::new("Slovak", "slo");
pub static TURKISH: Language = Language::new("Turkish", "tur");
pub static CZECH: Language = Language::new("Czech", "cze");
pub static RUSSIAN: Language = Language::new("Russian", "rus");
pub static NORWEGIAN: Language = Language::new("Norwegian", "nor");
pub static SWEDISH: Language = Language::new("Swedish", "swe");
pub static FRENCH: Language = Language::new("French", "fre");
pub static GREEK: Language = Language::new("Greek", "gre");

/// All supported languages, in registry order.
pub static LANGUAGES: &[&Language] = &[
    &HEBREW, &ENGLISH, &SPANISH, &ARABIC, &BULGARIAN, &SLOVAK, &TURKISH, &CZECH, &RUSSIAN,
    &NORWEGIAN, &SWEDISH, &FRENCH, &GREEK,
];

/// Iterate over the registry.
pub fn all_languages() -> impl Iterator<Item = &'static Language> {
    LANGUAGES.iter().copied()
}

/// Locate a language by ISO code or full name (case-insensitive).
pub fn locate_language(value: &str) -> Option<&'static Language> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    all_languages().find(|lang| {
        lang.iso_name.eq_ignore_ascii_case(value) || lang.full_name.eq_ignore_ascii_case(value)
    })
}
