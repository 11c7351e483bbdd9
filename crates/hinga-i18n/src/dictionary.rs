#![forbid(unsafe_code)]

//! Flat message dictionary with a default-locale fallback chain.

use std::collections::HashMap;

use crate::locale::Locale;

/// Per-locale key→string tables.
///
/// Lookup falls back from the requested locale to [`Locale::DEFAULT`]; a key
/// missing from both is reported as `None` so callers decide how to surface
/// the gap.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    tables: HashMap<Locale, HashMap<String, String>>,
}

impl Dictionary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, locale: Locale, key: impl Into<String>, message: impl Into<String>) {
        self.tables
            .entry(locale)
            .or_default()
            .insert(key.into(), message.into());
    }

    /// Resolve `key` for `locale`, falling back to the default locale.
    #[must_use]
    pub fn get(&self, locale: Locale, key: &str) -> Option<&str> {
        self.lookup(locale, key)
            .or_else(|| self.lookup(Locale::DEFAULT, key))
    }

    /// Like [`Dictionary::get`], but yields the key itself when no table has
    /// it. Screens prefer a visible key over an empty label.
    #[must_use]
    pub fn get_or_key<'a>(&'a self, locale: Locale, key: &'a str) -> &'a str {
        self.get(locale, key).unwrap_or(key)
    }

    fn lookup(&self, locale: Locale, key: &str) -> Option<&str> {
        self.tables
            .get(&locale)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }
}
