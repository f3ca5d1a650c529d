//! Core traits for the cache store.
//!
//! - [`CacheStore`] - Required for all cache backends
//! - [`SqlExecutor`] - Optional, for backends that run schema migrations
//! - [`Transaction`] - Transaction lifecycle management
//! - [`StoreClient`] - Connection pool and transaction creation

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::AppError;
use crate::models::{CanonicalTitle, CategoryCacheEntry, ClassCacheEntry};

/// Two keyed tables: title → class list and (title, blocked set) → category.
///
/// Writes are idempotent upserts keyed by those keys (last writer wins).
/// Reads take a freshness cutoff and never return rows older than it.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Class lists for the given titles fetched at or after `fresh_since`.
    async fn get_classes(
        &self,
        titles: &[CanonicalTitle],
        fresh_since: DateTime<Utc>,
    ) -> Result<HashMap<CanonicalTitle, ClassCacheEntry>, AppError>;

    async fn put_classes(&self, entries: &[ClassCacheEntry]) -> Result<(), AppError>;

    /// Categories resolved against the blocked set named `blocked` for the
    /// given titles, checked at or after `fresh_since`.
    async fn get_categories(
        &self,
        titles: &[CanonicalTitle],
        blocked: &str,
        fresh_since: DateTime<Utc>,
    ) -> Result<HashMap<CanonicalTitle, CategoryCacheEntry>, AppError>;

    async fn put_categories(&self, entries: &[CategoryCacheEntry]) -> Result<(), AppError>;

    /// Drop every row from both tables. Returns the number of rows removed.
    async fn clear(&self) -> Result<u64, AppError>;

    /// Drop rows older than the given cutoffs. Returns the number removed.
    async fn purge(
        &self,
        classes_before: DateTime<Utc>,
        categories_before: DateTime<Utc>,
    ) -> Result<u64, AppError>;
}

/// Executes raw SQL. Used by schema migrations.
#[async_trait]
pub trait SqlExecutor: Send + Sync {
    /// Executes one or more statements without returning results.
    async fn execute_sql(&self, sql: &str) -> Result<(), AppError>;

    /// Executes a query and returns all rows.
    async fn query_sql(&self, sql: &str) -> Result<Vec<tokio_postgres::Row>, AppError>;
}

/// Transaction lifecycle management.
#[async_trait]
pub trait Transaction: Send + Sync {
    /// Consumes the transaction, making all changes permanent.
    async fn commit(self) -> Result<(), AppError>;

    /// Consumes the transaction, discarding all changes.
    async fn rollback(self) -> Result<(), AppError>;
}

/// A store client that can begin transactions.
#[async_trait]
pub trait StoreClient: Send + Sync {
    /// The transaction type returned by this client.
    type Tx<'a>: Transaction + SqlExecutor
    where
        Self: 'a;

    /// Begins a new transaction, which must be committed or rolled back.
    async fn begin(&self) -> Result<Self::Tx<'_>, AppError>;
}
