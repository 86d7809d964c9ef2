//! Internationalization (i18n) support for `websaz-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (bundle negotiation + asset loading)
//! - `fluent` (message formatting and arguments)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n/
//!   en/websaz-ui.ftl   (fallback/reference)
//!   fa/websaz-ui.ftl
//!   ar/websaz-ui.ftl
//! ```
//!
//! Components look strings up with dotted keys (`pricing.title`). Fluent
//! message ids cannot contain dots, so each dot maps to a dash
//! (`pricing-title`) via [`message_id`].
//!
//! To add a new locale:
//! 1. Add a variant to [`crate::core::locale::Language`].
//! 2. Copy `en/websaz-ui.ftl` to `i18n/<code>/websaz-ui.ftl` and translate the values.
//! 3. Run the tests; the completeness checks list anything missing.
use std::collections::HashMap;

use fluent::FluentArgs;
use i18n_embed::fluent::FluentLanguageLoader;
use rust_embed::Embed;

use crate::core::locale::Language;

/// Fluent "domain" (matches the crate / the FTL filename).
const DOMAIN: &str = "websaz-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Anything that can resolve a dotted key for one language.
///
/// Returns `None` when that language has no message, so callers can chain
/// fallbacks.
pub trait TranslationSource {
    fn lookup(&self, language: Language, key: &str, args: Option<&FluentArgs<'_>>)
        -> Option<String>;
}

/// Translate a dotted key into a Fluent message id.
///
/// Not one-to-one: `a.b-c` and `a-b.c` both become `a-b-c`. Keys must not
/// differ only in where a dash sits relative to a dot; the completeness test
/// checks the keys in use.
pub fn message_id(key: &str) -> String {
    key.replace('.', "-")
}

/// Embedded Fluent bundles, one loader per supported language.
pub struct Catalog {
    loaders: Vec<(Language, FluentLanguageLoader)>,
}

impl Catalog {
    /// Load every embedded bundle. Failures are logged and leave the affected
    /// loader with whatever it managed to load.
    pub fn load() -> Self {
        let loaders = Language::ALL
            .into_iter()
            .map(|language| (language, load_loader(language)))
            .collect();
        Self { loaders }
    }

    fn loader(&self, language: Language) -> Option<&FluentLanguageLoader> {
        self.loaders
            .iter()
            .find(|(lang, _)| *lang == language)
            .map(|(_, loader)| loader)
    }
}

fn load_loader(language: Language) -> FluentLanguageLoader {
    let loader = FluentLanguageLoader::new(DOMAIN, language.langid());
    match i18n_embed::select(&loader, &Localizations, &[language.langid()]) {
        Ok(selected) => tracing::debug!(%language, ?selected, "loaded translation bundle"),
        Err(err) => tracing::warn!(%language, "failed loading translation bundle ({err}); lookups will fall back"),
    }
    // Applies to loaded bundles only, so it has to follow `select`.
    loader.set_use_isolating(false);
    loader
}

impl TranslationSource for Catalog {
    fn lookup(
        &self,
        language: Language,
        key: &str,
        args: Option<&FluentArgs<'_>>,
    ) -> Option<String> {
        let loader = self.loader(language)?;
        let id = message_id(key);
        if !loader.has(&id) {
            return None;
        }
        Some(loader.get_args_fluent(&id, args))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::load()
    }
}

/// In-memory translation table. Handy for tests and previews that want a
/// handful of strings without touching the embedded bundles.
#[derive(Debug, Default, Clone)]
pub struct TableSource {
    entries: HashMap<(Language, String), String>,
}

impl TableSource {
    pub fn with(mut self, language: Language, key: &str, value: &str) -> Self {
        self.entries
            .insert((language, key.to_string()), value.to_string());
        self
    }
}

impl TranslationSource for TableSource {
    fn lookup(
        &self,
        language: Language,
        key: &str,
        _args: Option<&FluentArgs<'_>>,
    ) -> Option<String> {
        self.entries.get(&(language, key.to_string())).cloned()
    }
}

/// List available (embedded) language folders.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}
