//! Per-request classification pipeline.
//!
//! ```text
//! titles ─▶ override ─▶ category cache ─▶ class cache ─▶ redirects
//!        ─▶ override (target) ─▶ class cache (target) ─▶ instance-of
//!        ─▶ direct ─▶ walker ─▶ keyword ─▶ persist
//! ```
//!
//! Every remote or store failure degrades to "no result" for the stage that
//! hit it; only a malformed request is an error.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use crate::config::Config;
use crate::context::Context;
use crate::di::FromContext;
use crate::error::AppError;
use crate::models::{ArticleTitle, CanonicalTitle, Category, CategorySet, ClassList};
use crate::repositories::{CategoryCacheRepository, ClassCacheRepository};
use crate::services::chain::{run_chain, CategoryResolver, Subject};
use crate::services::direct::DirectClassifier;
use crate::services::entity::EntityResolver;
use crate::services::keyword::KeywordClassifier;
use crate::services::walker::{SubclassWalker, WalkContext};

/// Blocked category per input title; `None` means not blocked.
pub type BlockedLinks = BTreeMap<ArticleTitle, Option<Category>>;

#[derive(FromContext, Clone)]
pub struct ResolutionService {
    entity: EntityResolver,
    direct: DirectClassifier,
    walker: SubclassWalker,
    keyword: KeywordClassifier,
    class_cache: ClassCacheRepository,
    category_cache: CategoryCacheRepository,
    config: Arc<Config>,
}

impl ResolutionService {
    /// Classify `titles` against the caller's blocked categories.
    ///
    /// Fails only when `blocked` names an unknown category.
    pub async fn classify<S: AsRef<str>>(
        &self,
        titles: &[ArticleTitle],
        blocked: &[S],
    ) -> Result<BlockedLinks, AppError> {
        let allowed = CategorySet::parse(blocked)?;
        let mut links: BlockedLinks = titles.iter().map(|t| (t.clone(), None)).collect();
        if allowed.is_empty() || titles.is_empty() {
            return Ok(links);
        }

        let targets = self.config.resolver.target_keys();
        let mut order: Vec<CanonicalTitle> = Vec::new();
        let mut inputs: HashMap<CanonicalTitle, Vec<&ArticleTitle>> = HashMap::new();
        for raw in titles {
            let Some(title) = CanonicalTitle::normalize(raw) else {
                continue;
            };
            if targets.contains(&title.fold_key()) {
                tracing::debug!(title = %raw, "Target article, never blocked");
                continue;
            }
            inputs
                .entry(title.clone())
                .or_insert_with(|| {
                    order.push(title);
                    Vec::new()
                })
                .push(raw);
        }

        let decided = self.resolve(&order, &allowed, &targets).await;
        for (title, raws) in inputs {
            if let Some(category) = decided.get(&title) {
                for raw in raws {
                    links.insert(raw.clone(), Some(*category));
                }
            }
        }

        tracing::debug!(
            titles = titles.len(),
            blocked = links.values().filter(|c| c.is_some()).count(),
            "Classified batch"
        );
        Ok(links)
    }

    async fn resolve(
        &self,
        titles: &[CanonicalTitle],
        allowed: &CategorySet,
        targets: &HashSet<String>,
    ) -> HashMap<CanonicalTitle, Category> {
        let mut decided = HashMap::new();
        if titles.is_empty() {
            return decided;
        }

        let cached = self.category_cache.lookup(titles, allowed).await;
        let mut misses = Vec::new();
        for title in titles {
            match cached.get(title) {
                Some(category) => {
                    decided.insert(title.clone(), *category);
                }
                None => misses.push(title.clone()),
            }
        }
        if misses.is_empty() {
            return decided;
        }

        let mut known = self.class_cache.lookup(&misses).await;
        let unknown: Vec<CanonicalTitle> = misses
            .iter()
            .filter(|title| !known.contains_key(*title))
            .cloned()
            .collect();
        let fetched = if unknown.is_empty() {
            Fetched::default()
        } else {
            self.fetch_classes(&unknown, targets).await
        };
        known.extend(fetched.classes);

        let mut keys = Vec::new();
        let mut subjects = Vec::new();
        for title in &misses {
            let Some(classes) = known.remove(title) else {
                continue;
            };
            let resolved = fetched.canonical.get(title).unwrap_or(title).clone();
            let mut subject = Subject::new(resolved, classes);
            subject.unresolved = fetched.unresolved.contains(title);
            keys.push(title.clone());
            subjects.push(subject);
        }

        let chain: [&dyn CategoryResolver; 3] = [&self.direct, &self.walker, &self.keyword];
        let mut scope = WalkContext::default();
        let outcome = run_chain(&chain, &mut subjects, allowed, &mut scope).await;

        let mut writes = Vec::new();
        for ((key, subject), category) in keys.into_iter().zip(&subjects).zip(outcome) {
            let Some(category) = category else {
                continue;
            };
            decided.insert(key.clone(), category);
            if subject.unresolved {
                continue;
            }
            if subject.title != key {
                writes.push((subject.title.clone(), category));
            }
            writes.push((key, category));
        }
        self.category_cache.save(allowed, writes).await;

        decided
    }

    /// Resolve redirects and fetch classes for titles the class cache
    /// missed.
    ///
    /// Titles whose redirect target is the target article are left out and
    /// so stay unblocked. Titles whose redirect lookup failed are classified
    /// from their own entity, if any, and nothing learned about them is
    /// cached.
    async fn fetch_classes(&self, titles: &[CanonicalTitle], targets: &HashSet<String>) -> Fetched {
        let redirects = self.entity.canonical_titles(titles).await;
        let mut out = Fetched::default();
        let mut live: Vec<(CanonicalTitle, CanonicalTitle)> = Vec::new();
        for title in titles {
            match redirects.get(title) {
                None => {
                    tracing::debug!(title = %title, "Redirect unknown, classifying without caching");
                    out.unresolved.insert(title.clone());
                    live.push((title.clone(), title.clone()));
                }
                Some(target) if targets.contains(&target.fold_key()) => {
                    tracing::debug!(title = %title, target = %target, "Redirects to target article, never blocked");
                }
                Some(target) => live.push((title.clone(), target.clone())),
            }
        }

        let redirected: Vec<CanonicalTitle> = live
            .iter()
            .filter(|(title, target)| title != target)
            .map(|(_, target)| target.clone())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let target_hits = self.class_cache.lookup(&redirected).await;

        let to_fetch: Vec<CanonicalTitle> = live
            .iter()
            .map(|(_, target)| target)
            .filter(|target| !target_hits.contains_key(*target))
            .cloned()
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let fetched = self.entity.classes(&to_fetch).await;

        let mut writes: HashMap<CanonicalTitle, ClassList> = HashMap::new();
        for (title, target) in live {
            let cacheable = !out.unresolved.contains(&title);
            let classes = if let Some(classes) = target_hits.get(&target) {
                classes.clone()
            } else if let Some(classes) = fetched.get(&target) {
                if cacheable {
                    writes.insert(target.clone(), classes.clone());
                }
                classes.clone()
            } else {
                // Lookup failed: classify with nothing, cache nothing.
                out.classes.insert(title.clone(), ClassList::new());
                out.canonical.insert(title, target);
                continue;
            };
            if title != target {
                writes.insert(title.clone(), classes.clone());
            }
            out.classes.insert(title.clone(), classes);
            out.canonical.insert(title, target);
        }
        tracing::debug!(
            fetched = to_fetch.len(),
            cached_targets = target_hits.len(),
            unresolved = out.unresolved.len(),
            "Resolved entity classes"
        );
        self.class_cache.save(writes.into_iter().collect()).await;
        out
    }
}

/// Classes learned for class-cache misses.
#[derive(Debug, Default)]
struct Fetched {
    classes: HashMap<CanonicalTitle, ClassList>,
    /// Redirect target per title.
    canonical: HashMap<CanonicalTitle, CanonicalTitle>,
    /// Titles whose redirect lookup failed.
    unresolved: HashSet<CanonicalTitle>,
}
