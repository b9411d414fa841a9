//! Route label registry.
//!
//! Maps a single path segment (`json-formatter`) to its display label
//! (`JSON Formatter`). Breadcrumb schema, breadcrumb UI and SEO title fallback
//! all read the same [`RouteLabels`] instance, built once from the `[labels]`
//! section of the site config.
//!
//! Unregistered segments fall back to the segment itself with its first
//! character upper-cased: `my-post` → `My-post`. Lookup never fails.

use std::collections::BTreeMap;

/// Immutable segment → label mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteLabels {
    entries: BTreeMap<String, String>,
}

impl RouteLabels {
    pub fn new(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }

    /// Display label for a path segment.
    pub fn label_for(&self, segment: &str) -> String {
        match self.entries.get(segment) {
            Some(label) => label.clone(),
            None => capitalize(segment),
        }
    }

    /// The registered label, if any.
    pub fn get(&self, segment: &str) -> Option<&str> {
        self.entries.get(segment).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for RouteLabels {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Upper-case the first character, leave the rest untouched.
pub fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
