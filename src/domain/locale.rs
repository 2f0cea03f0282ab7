use std::fmt;

/// A language (and optional region) identifier, e.g. `de` or `de-CH`.
///
/// Localized title properties are keyed by the canonical lowercase form of
/// this tag (`de`, `de-ch`), so parsing normalizes case and accepts both `-`
/// and `_` as separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    language: String,
    region: Option<String>,
}

impl Locale {
    pub fn new(language: &str, region: Option<&str>) -> Self {
        Self {
            language: language.trim().to_lowercase(),
            region: region
                .map(|r| r.trim().to_lowercase())
                .filter(|r| !r.is_empty()),
        }
    }

    /// Parses tags such as `de`, `de-CH` or `de_CH`.
    ///
    /// Parsing is total: empty or unusable input yields a locale with an
    /// empty language, which resolution treats as "no locale". Subtags
    /// beyond the region are ignored.
    pub fn parse(tag: &str) -> Self {
        let mut parts = tag.trim().split(['-', '_']);
        let language = parts.next().unwrap_or("");
        let region = parts.next();
        Self::new(language, region)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Canonical lowercase tag: `language-region` when a region is present,
    /// the bare language otherwise.
    pub fn tag(&self) -> String {
        match &self.region {
            Some(region) => format!("{}-{}", self.language, region),
            None => self.language.clone(),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}
