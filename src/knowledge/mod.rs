//! Remote knowledge graph and content-tag interfaces.
//!
//! The pipeline consumes two remote sources:
//!
//! - [`KnowledgeGraph`]: title normalization and redirects, instance-of
//!   classes per entity, subclass-of parents per class, and the transitive
//!   subclass closure used by the offline builder.
//! - [`TagSource`]: the free-text topic tags an article carries, used only by
//!   the keyword fallback.
//!
//! Batch methods accept at most 50 items; [`fetch_in_chunks`] splits larger
//! inputs and runs the chunks concurrently.

pub mod backends;
mod retry;

pub use retry::{Backoff, RetryPolicy};

use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::{CanonicalTitle, ClassId, ClassList};

/// Remote batch ceiling shared by every endpoint.
pub const MAX_BATCH: usize = 50;

/// Knowledge graph lookups.
#[async_trait]
pub trait KnowledgeGraph: Send + Sync {
    /// Map each title that redirects (or normalizes) elsewhere to its target.
    ///
    /// Titles absent from the result resolve to themselves.
    async fn redirects(
        &self,
        titles: &[CanonicalTitle],
    ) -> Result<HashMap<CanonicalTitle, CanonicalTitle>, AppError>;

    /// Instance-of classes per title, in the order the entity declares them.
    ///
    /// Titles without an entity are returned with an empty list.
    async fn instance_classes(
        &self,
        titles: &[CanonicalTitle],
    ) -> Result<HashMap<CanonicalTitle, ClassList>, AppError>;

    /// Direct subclass-of parents per class.
    async fn parent_classes(
        &self,
        classes: &[ClassId],
    ) -> Result<HashMap<ClassId, Vec<ClassId>>, AppError>;

    /// Every class reachable from `root` by subclass-of, `root` included,
    /// truncated to `limit` results.
    async fn descendants(&self, root: &ClassId, limit: u32) -> Result<Vec<ClassId>, AppError>;
}

/// Topic tags of the page a title resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicTags {
    /// The page the tags were read from, after redirects.
    pub page: CanonicalTitle,
    pub tags: Vec<String>,
}

/// Free-text topic tags attached to articles.
#[async_trait]
pub trait TagSource: Send + Sync {
    /// Tags per requested title. Redirects are followed, and the page that
    /// answered is reported alongside its tags.
    async fn tags(
        &self,
        titles: &[CanonicalTitle],
    ) -> Result<HashMap<CanonicalTitle, TopicTags>, AppError>;
}

/// Run `fetch` over `items` in chunks of at most `size`, concurrently, and
/// merge the resulting maps.
///
/// A failed chunk is logged and contributes nothing, so the caller sees a
/// partial result instead of an error.
pub async fn fetch_in_chunks<'a, T, K, V, F, Fut>(
    items: &'a [T],
    size: usize,
    stage: &str,
    fetch: F,
) -> HashMap<K, V>
where
    F: Fn(&'a [T]) -> Fut,
    Fut: Future<Output = Result<HashMap<K, V>, AppError>>,
    K: Eq + Hash,
{
    let size = size.clamp(1, MAX_BATCH);
    let results = futures::future::join_all(items.chunks(size).map(&fetch)).await;

    let mut merged = HashMap::new();
    for result in results {
        match result {
            Ok(map) => merged.extend(map),
            Err(e) => tracing::warn!(stage, error = %e, "Remote batch failed, continuing without it"),
        }
    }
    merged
}
