//! Languages, localized strings, and the UI translation table.
//!
//! The site is rendered in a fixed set of three languages (`fr`, `en`, `ar`).
//! French is the default: every localized value falls back to its `fr` entry
//! when the requested language is absent. That fallback lives in exactly one
//! place — [`Localized::get`] — so no call site re-implements it.
//!
//! ## Translation table
//!
//! UI strings (navigation labels, section headings, form labels) come from a
//! JSON table of nested objects keyed by dotted paths:
//!
//! ```json
//! {
//!   "nav": {
//!     "galleries": { "fr": "Galeries", "en": "Galleries", "ar": "المعارض" }
//!   }
//! }
//! ```
//!
//! [`Translations::translate`] resolves `"nav.galleries"` for a language.
//! A missing key degrades silently: the raw key string is returned and ends
//! up visible in the output HTML. That is a rendering defect you can see and
//! grep for, not a build failure — content problems abort the build,
//! translation-table gaps do not.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslationError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One of the three supported output languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Fr,
    En,
    Ar,
}

impl Lang {
    /// All supported languages, in output-directory order.
    pub const ALL: [Lang; 3] = [Lang::Fr, Lang::En, Lang::Ar];

    /// The fallback language for every localized value.
    pub const FALLBACK: Lang = Lang::Fr;

    /// Two-letter language code, used for directory names and `lang` attributes.
    pub fn code(self) -> &'static str {
        match self {
            Lang::Fr => "fr",
            Lang::En => "en",
            Lang::Ar => "ar",
        }
    }

    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "fr" => Some(Lang::Fr),
            "en" => Some(Lang::En),
            "ar" => Some(Lang::Ar),
            _ => None,
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A string localized per language.
///
/// Serialized as a plain JSON object (`{"fr": "...", "en": "..."}`). Absent
/// languages fall back to French; a value with no French entry is only
/// resolvable for the languages it actually carries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Localized(BTreeMap<Lang, String>);

impl Localized {
    /// Resolve for `lang`, falling back to French.
    ///
    /// Returns `None` only when both `lang` and the French entry are absent.
    pub fn get(&self, lang: Lang) -> Option<&str> {
        self.0
            .get(&lang)
            .or_else(|| self.0.get(&Lang::FALLBACK))
            .map(String::as_str)
    }

    pub fn insert(&mut self, lang: Lang, value: impl Into<String>) {
        self.0.insert(lang, value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Lang, String)> for Localized {
    fn from_iter<I: IntoIterator<Item = (Lang, String)>>(iter: I) -> Self {
        Localized(iter.into_iter().collect())
    }
}

/// The UI translation table, loaded once per build and threaded by reference
/// through the renderer.
#[derive(Debug, Clone)]
pub struct Translations {
    table: serde_json::Value,
}

impl Translations {
    /// Load the table from a JSON file.
    pub fn load(path: &Path) -> Result<Self, TranslationError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse the table from a JSON string (used for the embedded stock table).
    pub fn from_json(json: &str) -> Result<Self, TranslationError> {
        let table = serde_json::from_str(json)?;
        Ok(Translations { table })
    }

    /// Resolve a dotted key (e.g. `gallery.view_gallery`) for a language.
    ///
    /// Fallback chain: requested language → French → the key literal. Any
    /// missing path segment also yields the key literal.
    pub fn translate(&self, key: &str, lang: Lang) -> String {
        let mut node = &self.table;
        for segment in key.split('.') {
            match node.get(segment) {
                Some(child) => node = child,
                None => return key.to_string(),
            }
        }
        node.get(lang.code())
            .or_else(|| node.get(Lang::FALLBACK.code()))
            .and_then(|v| v.as_str())
            .map(String::from)
            .unwrap_or_else(|| key.to_string())
    }
}
