//! Localization Catalog
//!
//! An explicit translation table keyed by stable string identifiers,
//! injected into plugins at construction. Lookups fall back to the
//! built-in English default, so an empty catalog is always valid.
//! Templates use a `{0}` placeholder for the single substituted argument.

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    /// Translated text for `key`, or `default` when the catalog has none
    pub fn text<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.entries.get(key).map(String::as_str).unwrap_or(default)
    }

    /// Translated template for `key` with `{0}` replaced by `arg`
    pub fn format(&self, key: &str, default: &str, arg: &str) -> String {
        self.text(key, default).replace("{0}", arg)
    }
}
