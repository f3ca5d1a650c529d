//! Article titles and their normalized forms.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A title exactly as a caller supplied it.
///
/// Response maps are keyed by this form so callers can look up the
/// strings they sent.
pub type ArticleTitle = String;

/// The normalized, redirect-resolved identity of an article.
///
/// Normalization follows the source corpus: underscores become spaces,
/// whitespace runs collapse, and the first character is upper-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalTitle(String);

impl CanonicalTitle {
    /// Normalize a raw title. Returns `None` for blank input.
    pub fn normalize(raw: &str) -> Option<Self> {
        let collapsed = raw
            .replace('_', " ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        let mut chars = collapsed.chars();
        let first = chars.next()?;
        let normalized: String = first.to_uppercase().chain(chars).collect();
        Some(Self(normalized))
    }

    /// Wrap a title that is already canonical (e.g. returned by the source).
    pub fn from_source(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison key, used for alias matching.
    pub fn fold_key(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for CanonicalTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
