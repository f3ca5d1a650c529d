//! In-process knowledge graph for tests, demos and offline runs.
//!
//! Holds a fixed set of redirects, entities, subclass-of edges and tags.
//! Call counters and a failure switch let tests observe how many remote
//! round-trips a pipeline makes and how it behaves when the graph is down.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::AppError;
use crate::knowledge::{KnowledgeGraph, TagSource, TopicTags};
use crate::models::{CanonicalTitle, ClassId, ClassList};

/// Number of calls made to each lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounts {
    pub redirects: usize,
    pub instance_classes: usize,
    pub parent_classes: usize,
    pub descendants: usize,
    pub tags: usize,
}

#[derive(Debug, Default)]
struct Counters {
    redirects: AtomicUsize,
    instance_classes: AtomicUsize,
    parent_classes: AtomicUsize,
    descendants: AtomicUsize,
    tags: AtomicUsize,
}

/// Fixture-backed [`KnowledgeGraph`] and [`TagSource`].
#[derive(Debug, Default)]
pub struct MemoryGraph {
    redirects: HashMap<CanonicalTitle, CanonicalTitle>,
    entities: HashMap<CanonicalTitle, ClassList>,
    parents: HashMap<ClassId, Vec<ClassId>>,
    tags: HashMap<CanonicalTitle, Vec<String>>,
    offline: AtomicBool,
    redirects_offline: AtomicBool,
    counters: Counters,
}

impl MemoryGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_redirect(mut self, from: &str, to: &str) -> Self {
        self.redirects
            .insert(CanonicalTitle::from_source(from), CanonicalTitle::from_source(to));
        self
    }

    pub fn with_entity(mut self, title: &str, classes: &[&str]) -> Self {
        self.entities.insert(
            CanonicalTitle::from_source(title),
            classes.iter().map(|c| ClassId::from(*c)).collect(),
        );
        self
    }

    pub fn with_parents(mut self, class: &str, parents: &[&str]) -> Self {
        self.parents.insert(
            ClassId::from(class),
            parents.iter().map(|p| ClassId::from(*p)).collect(),
        );
        self
    }

    pub fn with_tags(mut self, title: &str, tags: &[&str]) -> Self {
        self.tags.insert(
            CanonicalTitle::from_source(title),
            tags.iter().map(|t| t.to_string()).collect(),
        );
        self
    }

    /// Make every subsequent lookup fail with a 503.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Make only redirect lookups fail, leaving the other endpoints up.
    pub fn set_redirects_offline(&self, offline: bool) {
        self.redirects_offline.store(offline, Ordering::SeqCst);
    }

    pub fn calls(&self) -> CallCounts {
        let c = &self.counters;
        CallCounts {
            redirects: c.redirects.load(Ordering::SeqCst),
            instance_classes: c.instance_classes.load(Ordering::SeqCst),
            parent_classes: c.parent_classes.load(Ordering::SeqCst),
            descendants: c.descendants.load(Ordering::SeqCst),
            tags: c.tags.load(Ordering::SeqCst),
        }
    }

    fn enter(&self, counter: &AtomicUsize, endpoint: &str) -> Result<(), AppError> {
        counter.fetch_add(1, Ordering::SeqCst);
        if self.offline.load(Ordering::SeqCst) {
            return Err(AppError::RemoteStatus {
                endpoint: endpoint.to_string(),
                status: 503,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl KnowledgeGraph for MemoryGraph {
    async fn redirects(
        &self,
        titles: &[CanonicalTitle],
    ) -> Result<HashMap<CanonicalTitle, CanonicalTitle>, AppError> {
        self.enter(&self.counters.redirects, "memory:redirects")?;
        if self.redirects_offline.load(Ordering::SeqCst) {
            return Err(AppError::RemoteStatus {
                endpoint: "memory:redirects".to_string(),
                status: 503,
            });
        }
        Ok(titles
            .iter()
            .filter_map(|t| self.redirects.get(t).map(|to| (t.clone(), to.clone())))
            .collect())
    }

    async fn instance_classes(
        &self,
        titles: &[CanonicalTitle],
    ) -> Result<HashMap<CanonicalTitle, ClassList>, AppError> {
        self.enter(&self.counters.instance_classes, "memory:instance_classes")?;
        Ok(titles
            .iter()
            .map(|t| (t.clone(), self.entities.get(t).cloned().unwrap_or_default()))
            .collect())
    }

    async fn parent_classes(
        &self,
        classes: &[ClassId],
    ) -> Result<HashMap<ClassId, Vec<ClassId>>, AppError> {
        self.enter(&self.counters.parent_classes, "memory:parent_classes")?;
        Ok(classes
            .iter()
            .map(|c| (c.clone(), self.parents.get(c).cloned().unwrap_or_default()))
            .collect())
    }

    async fn descendants(&self, root: &ClassId, limit: u32) -> Result<Vec<ClassId>, AppError> {
        self.enter(&self.counters.descendants, "memory:descendants")?;

        let mut children: HashMap<&ClassId, Vec<&ClassId>> = HashMap::new();
        for (child, parents) in &self.parents {
            for parent in parents {
                children.entry(parent).or_default().push(child);
            }
        }
        for list in children.values_mut() {
            list.sort();
        }

        let limit = limit as usize;
        let mut seen: HashSet<&ClassId> = HashSet::from([root]);
        let mut queue = VecDeque::from([root]);
        let mut out = Vec::new();
        while let Some(class) = queue.pop_front() {
            if out.len() >= limit {
                break;
            }
            out.push(class.clone());
            for &child in children.get(class).into_iter().flatten() {
                if seen.insert(child) {
                    queue.push_back(child);
                }
            }
        }
        Ok(out)
    }
}

#[async_trait]
impl TagSource for MemoryGraph {
    async fn tags(
        &self,
        titles: &[CanonicalTitle],
    ) -> Result<HashMap<CanonicalTitle, TopicTags>, AppError> {
        self.enter(&self.counters.tags, "memory:tags")?;
        Ok(titles
            .iter()
            .filter_map(|t| {
                let page = self.redirects.get(t).unwrap_or(t);
                let tags = self.tags.get(page)?;
                let found = TopicTags {
                    page: page.clone(),
                    tags: tags.clone(),
                };
                Some((t.clone(), found))
            })
            .collect())
    }
}
