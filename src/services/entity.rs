//! Title → canonical title → instance-of classes.
//!
//! Pure with respect to the caches: the orchestrator decides what to fetch
//! and what to persist.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::Config;
use crate::context::{AppGraph, Context};
use crate::di::FromContext;
use crate::error::AppError;
use crate::knowledge::fetch_in_chunks;
use crate::models::{CanonicalTitle, ClassList};

#[derive(FromContext, Clone)]
pub struct EntityResolver {
    graph: AppGraph,
    config: Arc<Config>,
}

impl EntityResolver {
    pub fn new(graph: AppGraph, config: Arc<Config>) -> Self {
        Self { graph, config }
    }

    /// Redirect target per title. Titles without a redirect map to
    /// themselves; titles whose lookup failed are absent, since their
    /// target is unknown.
    pub async fn canonical_titles(
        &self,
        titles: &[CanonicalTitle],
    ) -> HashMap<CanonicalTitle, CanonicalTitle> {
        let graph = &self.graph;
        fetch_in_chunks(titles, self.config.remote.batch_size, "redirects", |chunk| async move {
            let redirects = graph.redirects(chunk).await?;
            Ok::<_, AppError>(chunk
                .iter()
                .map(|title| {
                    let target = redirects.get(title).cloned().unwrap_or_else(|| title.clone());
                    (title.clone(), target)
                })
                .collect::<HashMap<_, _>>())
        })
        .await
    }

    /// Declared classes per canonical title.
    ///
    /// A title with no entity comes back with an empty list. A title whose
    /// lookup failed is absent, so the caller can tell "no classes" (a
    /// cacheable fact) from "unknown".
    pub async fn classes(&self, titles: &[CanonicalTitle]) -> HashMap<CanonicalTitle, ClassList> {
        let graph = &self.graph;
        fetch_in_chunks(titles, self.config.remote.batch_size, "instance_classes", |chunk| {
            graph.instance_classes(chunk)
        })
        .await
    }
}
