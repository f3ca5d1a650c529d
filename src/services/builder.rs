//! Offline build of the static class map.
//!
//! For each curated root, in order, the transitive subclass-of closure is
//! fetched and every class in it not already claimed by an earlier root is
//! assigned the root's category. Hand-curated supplements are applied last
//! and override the closure.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::class_map::{RootClass, StaticClassMap};
use crate::config::BuilderConfig;
use crate::context::AppGraph;
use crate::models::{Category, ClassId};

/// Counts reported at the end of a build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Roots queried.
    pub roots: usize,
    /// Classes newly claimed per category by the closure pass.
    pub claimed: BTreeMap<Category, usize>,
    /// Roots whose closure query failed after retries.
    pub failed_roots: Vec<String>,
    /// Supplements that changed or added a mapping.
    pub supplemented: usize,
    pub total: usize,
}

impl BuildStats {
    /// True when no closure query succeeded. The map then holds only
    /// supplements and must not replace a previous artifact.
    pub fn all_roots_failed(&self) -> bool {
        self.roots > 0 && self.failed_roots.len() == self.roots
    }
}

/// Builds a [`StaticClassMap`] from a knowledge graph.
///
/// The graph should carry the builder's linear retry policy; a root whose
/// query still fails contributes nothing and the build continues.
pub struct ClassMapBuilder {
    graph: AppGraph,
    politeness: Duration,
}

impl ClassMapBuilder {
    pub fn new(graph: AppGraph, config: &BuilderConfig) -> Self {
        Self {
            graph,
            politeness: Duration::from_millis(config.politeness_ms),
        }
    }

    pub async fn build(
        &self,
        roots: &[RootClass],
        supplements: &[(&str, Category)],
    ) -> (StaticClassMap, BuildStats) {
        let mut map = StaticClassMap::new();
        let mut stats = BuildStats {
            roots: roots.len(),
            ..BuildStats::default()
        };

        for (index, root) in roots.iter().enumerate() {
            if index > 0 && !self.politeness.is_zero() {
                tokio::time::sleep(self.politeness).await;
            }

            let descendants = match self.graph.descendants(&ClassId::from(root.id), root.limit).await {
                Ok(classes) => classes,
                Err(e) => {
                    tracing::warn!(root = root.id, label = root.label, error = %e, "Closure query failed, skipping root");
                    stats.failed_roots.push(root.id.to_string());
                    Vec::new()
                }
            };

            let found = descendants.len();
            let mut claimed = 0;
            for class in descendants {
                if map.claim(class, root.category) {
                    claimed += 1;
                }
            }
            *stats.claimed.entry(root.category).or_default() += claimed;
            tracing::info!(
                root = root.id,
                label = root.label,
                category = %root.category,
                found,
                claimed,
                "Root processed"
            );
        }

        for (id, category) in supplements {
            if map.assign(ClassId::from(*id), *category) != Some(*category) {
                stats.supplemented += 1;
            }
        }

        stats.total = map.len();
        for (category, count) in map.distribution() {
            tracing::info!(%category, count, "Class map distribution");
        }
        tracing::info!(
            total = stats.total,
            supplemented = stats.supplemented,
            failed_roots = stats.failed_roots.len(),
            "Class map built"
        );
        (map, stats)
    }
}
