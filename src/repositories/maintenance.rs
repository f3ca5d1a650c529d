//! Cache maintenance used by the `cache` CLI commands.

use std::sync::Arc;

use chrono::Utc;

use crate::config::Config;
use crate::context::{AppStore, Context};
use crate::di::FromContext;
use crate::error::AppError;

/// Bulk operations on both caches. Unlike the read path these report
/// store errors.
#[derive(FromContext, Clone)]
pub struct CacheMaintenanceRepository {
    store: AppStore,
    config: Arc<Config>,
}

impl CacheMaintenanceRepository {
    pub fn new(store: AppStore, config: Arc<Config>) -> Self {
        Self { store, config }
    }

    /// Remove every cached row.
    pub async fn clear(&self) -> Result<u64, AppError> {
        self.store.clear().await
    }

    /// Remove rows older than their table's TTL.
    pub async fn purge_expired(&self) -> Result<u64, AppError> {
        let now = Utc::now();
        self.store
            .purge(
                now - self.config.resolver.class_ttl(),
                now - self.config.resolver.category_ttl(),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CanonicalTitle, Category, CategoryCacheEntry, ClassCacheEntry, ClassList};
    use crate::store::backends::MemoryStore;
    use crate::store::CacheStore;
    use chrono::Duration;

    #[tokio::test]
    async fn test_purge_keeps_fresh_rows() {
        let store = Arc::new(MemoryStore::new());
        let mut stale =
            CategoryCacheEntry::new(CanonicalTitle::from_source("Rome"), "History", Category::History);
        stale.checked_at = Utc::now() - Duration::days(45);
        let fresh =
            CategoryCacheEntry::new(CanonicalTitle::from_source("Paris"), "Geography", Category::Geography);
        store
            .put_categories(&[stale, fresh])
            .await
            .unwrap();
        store
            .put_classes(&[ClassCacheEntry::new(CanonicalTitle::from_source("Paris"), ClassList::new())])
            .await
            .unwrap();

        let repo = CacheMaintenanceRepository::new(store.clone(), Arc::new(Config::default()));
        assert_eq!(repo.purge_expired().await.unwrap(), 1);
        assert_eq!(store.category_count().await, 1);
        assert_eq!(repo.clear().await.unwrap(), 2);
    }
}
