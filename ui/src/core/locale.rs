//! Active language, its text direction, and keyed lookups.
//!
//! `LocaleState` is a plain value: the page root owns exactly one inside a
//! `Signal` and every section reads it while rendering. Direction is never
//! stored, it is derived from the language on every call.

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use fluent::FluentArgs;
use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

use crate::i18n::TranslationSource;

/// Languages the landing page ships translations for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Fa,
    En,
    Ar,
}

impl Language {
    /// Display order of the language menu.
    pub const ALL: [Language; 3] = [Language::Fa, Language::En, Language::Ar];

    /// Language used when the active bundle has no message for a key.
    pub const FALLBACK: Language = Language::En;

    pub fn code(self) -> &'static str {
        match self {
            Language::Fa => "fa",
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    pub fn native_name(self) -> &'static str {
        match self {
            Language::Fa => "فارسی",
            Language::En => "English",
            Language::Ar => "العربية",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Language::Fa => "🇮🇷",
            Language::En => "🇺🇸",
            Language::Ar => "🇸🇦",
        }
    }

    pub fn direction(self) -> TextDirection {
        match self {
            Language::Fa | Language::Ar => TextDirection::Rtl,
            Language::En => TextDirection::Ltr,
        }
    }

    pub fn langid(self) -> LanguageIdentifier {
        self.code()
            .parse()
            .expect("static language codes are valid identifiers")
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Rejected language request. Carries the raw input for logging.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language code `{0}`")]
pub struct UnsupportedLanguage(pub String);

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    /// Accepts bare codes and full tags by primary subtag (`en-US`, `fa_IR`).
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let primary = raw
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == primary)
            .ok_or_else(|| UnsupportedLanguage(raw.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    /// Value for the HTML `dir` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, TextDirection::Rtl)
    }
}

/// The page-wide locale: selected language plus the translation source.
#[derive(Clone)]
pub struct LocaleState {
    language: Language,
    source: Rc<dyn TranslationSource>,
}

impl LocaleState {
    pub fn new(source: Rc<dyn TranslationSource>, language: Language) -> Self {
        Self { language, source }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn direction(&self) -> TextDirection {
        self.language.direction()
    }

    pub fn is_rtl(&self) -> bool {
        self.direction().is_rtl()
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Parse and apply a language code. On error the current language stays.
    pub fn set_language_code(&mut self, code: &str) -> Result<Language, UnsupportedLanguage> {
        let language = code.parse::<Language>()?;
        self.set_language(language);
        Ok(language)
    }

    /// Localized string for a dotted key such as `pricing.title`.
    ///
    /// Lookup order is the active language, then [`Language::FALLBACK`], then
    /// the key itself.
    pub fn t(&self, key: &str) -> String {
        self.resolve(key, None)
    }

    /// Like [`LocaleState::t`] with named Fluent arguments.
    pub fn t_with(&self, key: &str, args: &FluentArgs<'_>) -> String {
        self.resolve(key, Some(args))
    }

    fn resolve(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        [self.language, Language::FALLBACK]
            .into_iter()
            .find_map(|lang| self.source.lookup(lang, key, args))
            .unwrap_or_else(|| {
                tracing::debug!(key, language = %self.language, "missing translation");
                key.to_string()
            })
    }
}

impl PartialEq for LocaleState {
    fn eq(&self, other: &Self) -> bool {
        self.language == other.language && Rc::ptr_eq(&self.source, &other.source)
    }
}

impl fmt::Debug for LocaleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleState")
            .field("language", &self.language)
            .field("direction", &self.direction())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::TableSource;

    fn table() -> Rc<dyn TranslationSource> {
        Rc::new(
            TableSource::default()
                .with(Language::En, "pricing.title", "Pricing")
                .with(Language::Fa, "pricing.title", "قیمت‌گذاری")
                .with(Language::En, "nav.home", "Home"),
        )
    }

    #[test]
    fn direction_is_derived_from_language() {
        for lang in Language::ALL {
            assert_eq!(lang.direction(), lang.direction());
        }
        assert_eq!(Language::Fa.direction(), TextDirection::Rtl);
        assert_eq!(Language::Ar.direction(), TextDirection::Rtl);
        assert_eq!(Language::En.direction(), TextDirection::Ltr);
    }

    #[test]
    fn parses_tags_by_primary_subtag() {
        assert_eq!("en-US".parse::<Language>(), Ok(Language::En));
        assert_eq!("FA".parse::<Language>(), Ok(Language::Fa));
        assert_eq!("ar_SA".parse::<Language>(), Ok(Language::Ar));
        assert!("de".parse::<Language>().is_err());
        assert!("".parse::<Language>().is_err());
    }

    #[test]
    fn unsupported_code_keeps_previous_language() {
        let mut locale = LocaleState::new(table(), Language::En);
        let err = locale.set_language_code("zz-ZZ").unwrap_err();
        assert_eq!(err, UnsupportedLanguage("zz-ZZ".into()));
        assert_eq!(locale.language(), Language::En);
        assert_eq!(locale.direction(), TextDirection::Ltr);
    }

    #[test]
    fn switching_language_flips_direction_with_it() {
        let mut locale = LocaleState::new(table(), Language::En);
        assert_eq!(locale.set_language_code("fa"), Ok(Language::Fa));
        assert_eq!(locale.direction(), TextDirection::Rtl);
        assert_eq!(locale.t("pricing.title"), "قیمت‌گذاری");
    }

    #[test]
    fn lookup_falls_back_to_english_then_key() {
        let locale = LocaleState::new(table(), Language::Ar);
        assert_eq!(locale.t("pricing.title"), "Pricing");
        assert_eq!(locale.t("nav.home"), "Home");
        assert_eq!(locale.t("hero.title"), "hero.title");
    }
}
