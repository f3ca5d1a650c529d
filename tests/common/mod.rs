//! Shared fixtures: an in-memory graph and store wired into a `Context`.

#![allow(dead_code)]

use std::sync::Arc;

use basilica::class_map::StaticClassMap;
use basilica::config::Config;
use basilica::context::Context;
use basilica::di::FromRef;
use basilica::knowledge::backends::MemoryGraph;
use basilica::models::{Category, ClassId};
use basilica::services::ResolutionService;
use basilica::store::backends::MemoryStore;

pub struct Harness {
    pub ctx: Context,
    pub graph: Arc<MemoryGraph>,
    pub store: Arc<MemoryStore>,
}

impl Harness {
    pub fn service(&self) -> ResolutionService {
        ResolutionService::from_ref(&self.ctx)
    }

    pub async fn classify(&self, titles: &[&str], blocked: &[&str]) -> Vec<Option<Category>> {
        let titles: Vec<String> = titles.iter().map(|t| t.to_string()).collect();
        let links = self
            .service()
            .classify(&titles, blocked)
            .await
            .expect("classification failed");
        titles.iter().map(|t| links[t]).collect()
    }
}

pub fn class_map() -> StaticClassMap {
    [
        ("Q5", Category::People),
        ("Q198", Category::History),
        ("Q16970", Category::Religion),
        ("Q6256", Category::Geography),
        ("Q43229", Category::Society),
        ("Q3918", Category::Education),
    ]
    .into_iter()
    .map(|(id, category)| (ClassId::from(id), category))
    .collect()
}

/// A small world:
///
/// - `Ada Lovelace` is a human (`Q5`, People)
/// - `Battle of Hastings` is an instance of `Q100`, whose only mapped
///   ancestor is two hops up at `Q198` (History)
/// - `Olympic Games` has no classes and a single non-matching tag
/// - `Basil of Caesarea` is a human and a church (`Q16970`, Religion)
/// - `Lovelace` redirects to `Ada Lovelace`
/// - `Basil of Cesarea` redirects to `Basil of Caesarea`
pub fn world() -> MemoryGraph {
    MemoryGraph::new()
        .with_entity("Ada Lovelace", &["Q5"])
        .with_entity("Battle of Hastings", &["Q100"])
        .with_parents("Q100", &["Q101"])
        .with_parents("Q101", &["Q198"])
        .with_entity("Olympic Games", &[])
        .with_tags("Olympic Games", &["Olympic champion"])
        .with_entity("Basil of Caesarea", &["Q16970", "Q5"])
        .with_redirect("Lovelace", "Ada Lovelace")
        .with_redirect("Basil of Cesarea", "Basil of Caesarea")
}

pub fn harness(graph: MemoryGraph) -> Harness {
    harness_with(graph, Config::default())
}

pub fn harness_with(graph: MemoryGraph, config: Config) -> Harness {
    let graph = Arc::new(graph);
    let store = Arc::new(MemoryStore::new());
    let ctx = Context::new(config, store.clone(), graph.clone(), graph.clone(), class_map());
    Harness { ctx, graph, store }
}
