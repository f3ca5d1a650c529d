//! In-process cache store, used when no database is configured.
//!
//! Contents are lost on restart.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::error::AppError;
use crate::models::{CanonicalTitle, CategoryCacheEntry, ClassCacheEntry};
use crate::store::traits::CacheStore;

#[derive(Debug, Default)]
pub struct MemoryStore {
    classes: RwLock<HashMap<CanonicalTitle, ClassCacheEntry>>,
    categories: RwLock<HashMap<(CanonicalTitle, String), CategoryCacheEntry>>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every operation fail, simulating a lost database.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Raw category row for one blocked set, ignoring freshness.
    pub async fn category_row(
        &self,
        title: &CanonicalTitle,
        blocked: &str,
    ) -> Option<CategoryCacheEntry> {
        self.categories
            .read()
            .await
            .get(&(title.clone(), blocked.to_string()))
            .cloned()
    }

    /// Raw class row, ignoring freshness.
    pub async fn class_row(&self, title: &CanonicalTitle) -> Option<ClassCacheEntry> {
        self.classes.read().await.get(title).cloned()
    }

    pub async fn category_count(&self) -> usize {
        self.categories.read().await.len()
    }

    fn check(&self) -> Result<(), AppError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::Store("memory store marked unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn get_classes(
        &self,
        titles: &[CanonicalTitle],
        fresh_since: DateTime<Utc>,
    ) -> Result<HashMap<CanonicalTitle, ClassCacheEntry>, AppError> {
        self.check()?;
        let classes = self.classes.read().await;
        Ok(titles
            .iter()
            .filter_map(|t| classes.get(t))
            .filter(|entry| entry.fetched_at >= fresh_since)
            .map(|entry| (entry.title.clone(), entry.clone()))
            .collect())
    }

    async fn put_classes(&self, entries: &[ClassCacheEntry]) -> Result<(), AppError> {
        self.check()?;
        let mut classes = self.classes.write().await;
        for entry in entries {
            classes.insert(entry.title.clone(), entry.clone());
        }
        Ok(())
    }

    async fn get_categories(
        &self,
        titles: &[CanonicalTitle],
        blocked: &str,
        fresh_since: DateTime<Utc>,
    ) -> Result<HashMap<CanonicalTitle, CategoryCacheEntry>, AppError> {
        self.check()?;
        let categories = self.categories.read().await;
        Ok(titles
            .iter()
            .filter_map(|t| categories.get(&(t.clone(), blocked.to_string())))
            .filter(|entry| entry.checked_at >= fresh_since)
            .map(|entry| (entry.title.clone(), entry.clone()))
            .collect())
    }

    async fn put_categories(&self, entries: &[CategoryCacheEntry]) -> Result<(), AppError> {
        self.check()?;
        let mut categories = self.categories.write().await;
        for entry in entries {
            categories.insert((entry.title.clone(), entry.blocked.clone()), entry.clone());
        }
        Ok(())
    }

    async fn clear(&self) -> Result<u64, AppError> {
        self.check()?;
        let mut classes = self.classes.write().await;
        let mut categories = self.categories.write().await;
        let removed = classes.len() + categories.len();
        classes.clear();
        categories.clear();
        Ok(removed as u64)
    }

    async fn purge(
        &self,
        classes_before: DateTime<Utc>,
        categories_before: DateTime<Utc>,
    ) -> Result<u64, AppError> {
        self.check()?;
        let mut classes = self.classes.write().await;
        let mut categories = self.categories.write().await;
        let before = classes.len() + categories.len();
        classes.retain(|_, entry| entry.fetched_at >= classes_before);
        categories.retain(|_, entry| entry.checked_at >= categories_before);
        Ok((before - classes.len() - categories.len()) as u64)
    }
}
