//! Bounded breadth-first search up the subclass-of relation.
//!
//! Classes missing from the static class map are resolved to the category
//! of their *shallowest* mapped ancestor. The subclass graph is treated as
//! an arbitrary directed graph: every search keeps its own visited set and
//! stops after `max_depth` levels, so cycles cannot keep it running.
//!
//! Parent edges are memoized at two levels:
//!
//! ```text
//! WalkContext (one request)  →  ParentMemo (shared, bounded, TTL)  →  remote
//! ```
//!
//! A level of every active search is fetched in one batched round, so a
//! request with many unmapped classes makes at most `max_depth` rounds of
//! parent lookups.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use moka::future::Cache;

use crate::config::{Config, ResolverConfig};
use crate::context::{AppClassMap, AppGraph, Context};
use crate::di::FromContext;
use crate::knowledge::fetch_in_chunks;
use crate::models::{Category, CategorySet, ClassId};
use crate::services::chain::{CategoryResolver, Subject};

/// Shared subclass-of edges, bounded by capacity and time to live.
///
/// Only successful lookups are stored, so a remote outage is not remembered
/// as "no parents".
#[derive(Clone)]
pub struct ParentMemo {
    inner: Cache<ClassId, Arc<Vec<ClassId>>>,
}

impl ParentMemo {
    pub fn new(max_capacity: u64, ttl: std::time::Duration) -> Self {
        Self {
            inner: Cache::builder()
                .max_capacity(max_capacity)
                .time_to_live(ttl)
                .build(),
        }
    }

    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(config.memo_capacity, config.memo_ttl())
    }

    pub async fn get(&self, class: &ClassId) -> Option<Arc<Vec<ClassId>>> {
        self.inner.get(class).await
    }

    pub async fn insert(&self, class: ClassId, parents: Vec<ClassId>) {
        self.inner.insert(class, Arc::new(parents)).await;
    }
}

/// A mapped ancestor found by the walker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedAncestor {
    pub class: ClassId,
    pub category: Category,
    /// Subclass-of hops from the starting class.
    pub depth: usize,
}

/// Request-scoped walker state.
#[derive(Debug, Default)]
pub struct WalkContext {
    parents: HashMap<ClassId, Arc<Vec<ClassId>>>,
    resolved: HashMap<ClassId, Option<MappedAncestor>>,
}

impl WalkContext {
    /// The walk outcome for `class`, if it has been walked this request.
    pub fn resolution(&self, class: &ClassId) -> Option<&Option<MappedAncestor>> {
        self.resolved.get(class)
    }
}

/// The levels a single walk explored, for `check-chain`.
#[derive(Debug, Clone)]
pub struct ChainTrace {
    pub start: ClassId,
    /// `levels[0]` holds the parents of `start`, and so on.
    pub levels: Vec<Vec<ClassId>>,
    pub found: Option<MappedAncestor>,
}

struct Search {
    start: ClassId,
    visited: HashSet<ClassId>,
    frontier: Vec<ClassId>,
    levels: Vec<Vec<ClassId>>,
    found: Option<MappedAncestor>,
    done: bool,
}

impl Search {
    fn new(start: ClassId) -> Self {
        Self {
            visited: HashSet::from([start.clone()]),
            frontier: vec![start.clone()],
            start,
            levels: Vec::new(),
            found: None,
            done: false,
        }
    }
}

#[derive(FromContext, Clone)]
pub struct SubclassWalker {
    graph: AppGraph,
    class_map: AppClassMap,
    memo: ParentMemo,
    config: Arc<Config>,
}

impl SubclassWalker {
    pub fn new(graph: AppGraph, class_map: AppClassMap, memo: ParentMemo, config: Arc<Config>) -> Self {
        Self {
            graph,
            class_map,
            memo,
            config,
        }
    }

    /// Walk every class in `starts` not already resolved in `scope`.
    pub async fn walk_all(&self, starts: &[ClassId], scope: &mut WalkContext) {
        let mut seen = HashSet::new();
        let starts: Vec<ClassId> = starts
            .iter()
            .filter(|c| !self.class_map.contains(c) && !scope.resolved.contains_key(*c))
            .filter(|c| seen.insert((*c).clone()))
            .cloned()
            .collect();
        if starts.is_empty() {
            return;
        }

        let searches = self.search(starts.into_iter().map(Search::new).collect(), scope).await;
        for search in searches {
            tracing::debug!(
                class = %search.start,
                levels = search.levels.len(),
                found = ?search.found,
                "Subclass walk finished"
            );
            scope.resolved.insert(search.start, search.found);
        }
    }

    /// Walk a single class and keep every level, for diagnostics.
    pub async fn trace(&self, class: &ClassId) -> ChainTrace {
        if let Some(category) = self.class_map.get(class) {
            return ChainTrace {
                start: class.clone(),
                levels: Vec::new(),
                found: Some(MappedAncestor {
                    class: class.clone(),
                    category,
                    depth: 0,
                }),
            };
        }

        let mut scope = WalkContext::default();
        let mut searches = self.search(vec![Search::new(class.clone())], &mut scope).await;
        match searches.pop() {
            Some(search) => ChainTrace {
                start: search.start,
                levels: search.levels,
                found: search.found,
            },
            None => ChainTrace {
                start: class.clone(),
                levels: Vec::new(),
                found: None,
            },
        }
    }

    async fn search(&self, mut searches: Vec<Search>, scope: &mut WalkContext) -> Vec<Search> {
        let max_depth = self.config.resolver.max_depth;

        for depth in 1..=max_depth {
            let wanted: Vec<ClassId> = searches
                .iter()
                .filter(|s| !s.done)
                .flat_map(|s| s.frontier.iter().cloned())
                .collect::<HashSet<_>>()
                .into_iter()
                .collect();
            if wanted.is_empty() {
                break;
            }
            self.fetch_parents(&wanted, scope).await;

            for search in searches.iter_mut().filter(|s| !s.done) {
                self.advance(search, depth, scope);
            }
        }

        searches
    }

    /// Expand one level. The first mapped parent, in frontier order then
    /// parent order, ends the search.
    fn advance(&self, search: &mut Search, depth: usize, scope: &WalkContext) {
        let mut next = Vec::new();
        let mut found = None;
        'level: for node in &search.frontier {
            let Some(parents) = scope.parents.get(node) else {
                continue;
            };
            for parent in parents.iter() {
                if let Some(category) = self.class_map.get(parent) {
                    next.push(parent.clone());
                    found = Some(MappedAncestor {
                        class: parent.clone(),
                        category,
                        depth,
                    });
                    break 'level;
                }
                if search.visited.insert(parent.clone()) {
                    next.push(parent.clone());
                }
            }
        }

        search.levels.push(next.clone());
        if found.is_some() {
            search.found = found;
            search.frontier.clear();
            search.done = true;
            return;
        }
        search.done = next.is_empty();
        search.frontier = next;
    }

    /// Make parents of `classes` available in `scope`, from the shared
    /// memo where possible and the remote graph otherwise.
    async fn fetch_parents(&self, classes: &[ClassId], scope: &mut WalkContext) {
        let mut missing = Vec::new();
        for class in classes {
            if scope.parents.contains_key(class) {
                continue;
            }
            match self.memo.get(class).await {
                Some(parents) => {
                    scope.parents.insert(class.clone(), parents);
                }
                None => missing.push(class.clone()),
            }
        }
        if missing.is_empty() {
            return;
        }

        let graph = &self.graph;
        let fetched = fetch_in_chunks(
            &missing,
            self.config.remote.batch_size,
            "parent_classes",
            |chunk| graph.parent_classes(chunk),
        )
        .await;

        for class in missing {
            match fetched.get(&class) {
                Some(parents) => {
                    self.memo.insert(class.clone(), parents.clone()).await;
                    scope.parents.insert(class, Arc::new(parents.clone()));
                }
                // Failed this request; not memoized so the next one retries.
                None => {
                    scope.parents.insert(class, Arc::new(Vec::new()));
                }
            }
        }
    }
}

#[async_trait]
impl CategoryResolver for SubclassWalker {
    fn name(&self) -> &'static str {
        "walker"
    }

    async fn prepare(&self, subjects: &mut [Subject], pending: &[usize], scope: &mut WalkContext) {
        let starts: Vec<ClassId> = pending
            .iter()
            .flat_map(|&i| subjects[i].classes.iter().cloned())
            .collect();
        self.walk_all(&starts, scope).await;
    }

    fn resolve(
        &self,
        subject: &mut Subject,
        allowed: &CategorySet,
        scope: &WalkContext,
    ) -> Option<Category> {
        let walked: Vec<Category> = subject
            .classes
            .iter()
            .filter(|class| !self.class_map.contains(class))
            .filter_map(|class| scope.resolution(class).cloned().flatten())
            .map(|ancestor| ancestor.category)
            .collect();
        for category in &walked {
            subject.record(*category);
        }
        walked.into_iter().find(|category| allowed.contains(*category))
    }
}
