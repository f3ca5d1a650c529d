//! (title, blocked set) → resolved category cache.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;

use crate::config::Config;
use crate::context::{AppStore, Context};
use crate::di::FromContext;
use crate::models::{CanonicalTitle, Category, CategoryCacheEntry, CategorySet};

/// Read-through access to cached categories.
///
/// A category depends on the blocked set it was resolved against, so rows
/// are scoped by that set and only answer requests for the same set.
///
/// `Unclassified` is never written: a title with no category today may
/// redirect somewhere classifiable tomorrow, and a stored negative would
/// hide that until the row expired.
#[derive(FromContext, Clone)]
pub struct CategoryCacheRepository {
    store: AppStore,
    config: Arc<Config>,
}

impl CategoryCacheRepository {
    pub async fn lookup(
        &self,
        titles: &[CanonicalTitle],
        blocked: &CategorySet,
    ) -> HashMap<CanonicalTitle, Category> {
        if titles.is_empty() {
            return HashMap::new();
        }
        let cutoff = Utc::now() - self.config.resolver.category_ttl();
        match self.store.get_categories(titles, &blocked.cache_key(), cutoff).await {
            Ok(rows) => rows
                .into_iter()
                .filter(|(_, entry)| blocked.contains(entry.category))
                .map(|(title, entry)| (title, entry.category))
                .collect(),
            Err(e) => {
                tracing::warn!(error = %e, "Category cache unavailable, treating as miss");
                HashMap::new()
            }
        }
    }

    /// Record categories resolved against `blocked`, silently skipping
    /// `Unclassified`.
    pub async fn save(&self, blocked: &CategorySet, entries: Vec<(CanonicalTitle, Category)>) {
        let key = blocked.cache_key();
        let rows: Vec<CategoryCacheEntry> = entries
            .into_iter()
            .filter(|(_, category)| category.is_blockable())
            .map(|(title, category)| CategoryCacheEntry::new(title, key.as_str(), category))
            .collect();
        if rows.is_empty() {
            return;
        }
        if let Err(e) = self.store.put_categories(&rows).await {
            tracing::warn!(error = %e, count = rows.len(), "Failed to write category cache");
        }
    }
}
