//! Persistent cache rows.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::{CanonicalTitle, Category, ClassList};

/// Instance-of classes fetched for a title.
///
/// An empty class list is a valid, cacheable fact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassCacheEntry {
    pub title: CanonicalTitle,
    pub classes: ClassList,
    pub fetched_at: DateTime<Utc>,
}

impl ClassCacheEntry {
    pub fn new(title: CanonicalTitle, classes: ClassList) -> Self {
        Self {
            title,
            classes,
            fetched_at: Utc::now(),
        }
    }

    /// Entries older than `ttl` are treated as absent.
    pub fn is_fresh(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        now - self.fetched_at < ttl
    }
}

/// A resolved category for a title under one blocked set.
///
/// `blocked` is the [`CategorySet::cache_key`](super::CategorySet::cache_key)
/// of the set the category was resolved against; a row never answers for a
/// different set. Only blockable categories are ever stored; see
/// [`CategoryCacheRepository`](crate::repositories::CategoryCacheRepository).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCacheEntry {
    pub title: CanonicalTitle,
    pub blocked: String,
    pub category: Category,
    pub checked_at: DateTime<Utc>,
}

impl CategoryCacheEntry {
    pub fn new(title: CanonicalTitle, blocked: impl Into<String>, category: Category) -> Self {
        Self {
            title,
            blocked: blocked.into(),
            category,
            checked_at: Utc::now(),
        }
    }

    pub fn is_fresh(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        now - self.checked_at < ttl
    }
}
