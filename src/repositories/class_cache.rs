//! Title → instance-of classes cache.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;

use crate::config::Config;
use crate::context::{AppStore, Context};
use crate::di::FromContext;
use crate::models::{CanonicalTitle, ClassCacheEntry, ClassList};

/// Read-through access to cached class lists.
///
/// Store failures never propagate: a failed read is a cache miss and a
/// failed write is logged and dropped.
#[derive(FromContext, Clone)]
pub struct ClassCacheRepository {
    store: AppStore,
    config: Arc<Config>,
}

impl ClassCacheRepository {
    /// Fresh class lists for the given titles. Missing titles are misses.
    pub async fn lookup(&self, titles: &[CanonicalTitle]) -> HashMap<CanonicalTitle, ClassList> {
        if titles.is_empty() {
            return HashMap::new();
        }
        let cutoff = Utc::now() - self.config.resolver.class_ttl();
        match self.store.get_classes(titles, cutoff).await {
            Ok(rows) => rows
                .into_iter()
                .map(|(title, entry)| (title, entry.classes))
                .collect(),
            Err(e) => {
                tracing::warn!(error = %e, "Class cache unavailable, treating as miss");
                HashMap::new()
            }
        }
    }

    /// Record class lists, empty ones included.
    pub async fn save(&self, entries: Vec<(CanonicalTitle, ClassList)>) {
        if entries.is_empty() {
            return;
        }
        let rows: Vec<ClassCacheEntry> = entries
            .into_iter()
            .map(|(title, classes)| ClassCacheEntry::new(title, classes))
            .collect();
        if let Err(e) = self.store.put_classes(&rows).await {
            tracing::warn!(error = %e, count = rows.len(), "Failed to write class cache");
        }
    }
}
