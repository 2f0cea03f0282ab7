use crate::domain::locale::Locale;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Property prefix for localized title variants, e.g. `title.de-ch`.
pub const TITLE_PREFIX: &str = "title.";

/// One raw child record as the backing store yields it: a bag of named
/// properties with arbitrary JSON values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawEntry {
    #[serde(flatten)]
    pub properties: HashMap<String, serde_json::Value>,
}

impl RawEntry {
    pub fn new(properties: HashMap<String, serde_json::Value>) -> Self {
        Self { properties }
    }
}

/// A department entry adapted from one raw child record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Matching identifier, adapted from the raw `value` property.
    pub key: String,
    /// Default display title, adapted from the raw `title` property.
    pub title: String,
    /// Localized title overrides keyed by canonical lowercase tag
    /// (`de`, `de-ch`).
    pub localized_titles: HashMap<String, String>,
    pub phone: String,
    pub email: String,
}

impl Department {
    /// Adapts a raw record into a department.
    ///
    /// Missing or non-scalar properties default to the empty string, so a
    /// malformed record degrades instead of failing the enumeration.
    pub fn from_raw(raw: &RawEntry) -> Self {
        let mut localized_titles = HashMap::new();
        for (name, value) in &raw.properties {
            if let Some(suffix) = name.strip_prefix(TITLE_PREFIX) {
                let tag = Locale::parse(suffix).tag();
                if tag.is_empty() {
                    continue;
                }
                if let Some(text) = scalar_to_string(value) {
                    localized_titles.insert(tag, text);
                }
            }
        }

        Self {
            key: string_property(raw, "value"),
            title: string_property(raw, "title"),
            localized_titles,
            phone: string_property(raw, "phone"),
            email: string_property(raw, "email"),
        }
    }

    /// Resolves the display title for an optional locale.
    ///
    /// Lookup order: `language-region` variant, then the language-only
    /// variant, then the default title. A missing variant is never an
    /// error; it falls through to the next tier.
    pub fn title_for(&self, locale: Option<&Locale>) -> &str {
        // no locale - return default title
        let Some(locale) = locale else {
            return &self.title;
        };

        // no language - return default title
        if locale.language().is_empty() {
            return &self.title;
        }

        let mut localized = None;

        // try a key like title.de-ch
        if locale.region().is_some() {
            localized = self.localized_titles.get(&locale.tag());
        }
        // then just title.de
        if localized.is_none() {
            localized = self.localized_titles.get(locale.language());
        }

        localized.map(String::as_str).unwrap_or(&self.title)
    }
}

fn string_property(raw: &RawEntry, name: &str) -> String {
    raw.properties
        .get(name)
        .and_then(scalar_to_string)
        .unwrap_or_default()
}

// Scalars coerce to their string form the way the host's value map converts
// them; null, arrays and objects have no string rendition.
fn scalar_to_string(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
