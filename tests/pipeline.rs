//! End-to-end classification against the in-memory graph and store.

mod common;

use std::sync::Arc;

use basilica::config::Config;
use basilica::di::FromRef;
use basilica::error::AppError;
use basilica::knowledge::backends::MemoryGraph;
use basilica::models::{CanonicalTitle, Category, ClassId};
use basilica::services::SubclassWalker;
use common::{harness, harness_with, world};
use proptest::prelude::*;

fn title(raw: &str) -> CanonicalTitle {
    CanonicalTitle::from_source(raw)
}

mod scenarios {
    use super::*;

    #[tokio::test]
    async fn test_direct_class_blocks() {
        let h = harness(world());
        let result = h.classify(&["Ada Lovelace"], &["People"]).await;
        assert_eq!(result, vec![Some(Category::People)]);
        assert_eq!(h.graph.calls().parent_classes, 0);
    }

    #[tokio::test]
    async fn test_two_hop_ancestor_blocks_after_two_levels() {
        let h = harness(world());
        let result = h.classify(&["Battle of Hastings"], &["History"]).await;
        assert_eq!(result, vec![Some(Category::History)]);
        assert_eq!(h.graph.calls().parent_classes, 2);
    }

    #[tokio::test]
    async fn test_unmatched_tags_stay_unblocked() {
        let h = harness(world());
        let result = h.classify(&["Olympic Games"], &["Geography"]).await;
        assert_eq!(result, vec![None]);
        assert_eq!(h.graph.calls().tags, 1);
    }

    #[tokio::test]
    async fn test_target_alias_overrides_religion() {
        let h = harness(world());
        let result = h.classify(&["Basil of Caesarea"], &["Religion"]).await;
        assert_eq!(result, vec![None]);
        // Overridden before any lookup
        assert_eq!(h.graph.calls(), Default::default());
    }
}

mod override_invariant {
    use super::*;

    #[tokio::test]
    async fn test_every_alias_form_under_every_blocked_set() {
        let h = harness(world());
        let mut blocked_sets: Vec<Vec<&str>> = basilica::models::Category::BLOCKABLE
            .iter()
            .map(|c| vec![c.as_str()])
            .collect();
        blocked_sets.push(
            basilica::models::Category::BLOCKABLE
                .iter()
                .map(|c| c.as_str())
                .collect(),
        );
        let aliases = [
            "Basil of Caesarea",
            "basil_of_caesarea",
            "SAINT BASIL",
            "St. Basil the Great",
            "  Basil   the Great ",
        ];

        for blocked in &blocked_sets {
            let result = h.classify(&aliases, blocked).await;
            assert!(result.iter().all(Option::is_none), "blocked under {:?}", blocked);
        }
    }

    #[tokio::test]
    async fn test_redirect_to_target_is_unblocked() {
        let h = harness(world());
        let result = h.classify(&["Basil of Cesarea"], &["Religion", "People"]).await;
        assert_eq!(result, vec![None]);
        assert!(h.store.class_row(&title("Basil of Cesarea")).await.is_none());
    }
}

mod caching {
    use super::*;

    #[tokio::test]
    async fn test_unclassified_is_never_cached() {
        let h = harness(world());
        assert_eq!(h.classify(&["Olympic Games"], &["Geography"]).await, vec![None]);
        assert_eq!(h.store.category_count().await, 0);

        // The empty class set is cached, the negative is not
        let row = h.store.class_row(&title("Olympic Games")).await.unwrap();
        assert!(row.classes.is_empty());

        assert_eq!(h.classify(&["Olympic Games"], &["Geography"]).await, vec![None]);
        let calls = h.graph.calls();
        assert_eq!(calls.instance_classes, 1);
        assert_eq!(calls.tags, 2);
    }

    #[tokio::test]
    async fn test_category_hit_serves_without_remote_calls() {
        let h = harness(world());
        h.classify(&["Ada Lovelace"], &["People", "History"]).await;
        let before = h.graph.calls();

        // Same set in another order and with duplicates
        assert_eq!(
            h.classify(&["Ada Lovelace"], &["History", "People", "History"]).await,
            vec![Some(Category::People)]
        );
        assert_eq!(h.graph.calls(), before);
        assert_eq!(h.store.category_count().await, 1);
    }

    #[tokio::test]
    async fn test_result_does_not_depend_on_warming_blocked_set() {
        // Religion is declared before History
        let graph = || world().with_entity("Hagia Sophia", &["Q16970", "Q198"]);
        let fresh = harness(graph())
            .classify(&["Hagia Sophia"], &["Religion", "History"])
            .await;
        assert_eq!(fresh, vec![Some(Category::Religion)]);

        let h = harness(graph());
        assert_eq!(
            h.classify(&["Hagia Sophia"], &["History"]).await,
            vec![Some(Category::History)]
        );
        assert_eq!(h.classify(&["Hagia Sophia"], &["Religion", "History"]).await, fresh);

        // Each set keeps its own answer
        assert_eq!(
            h.classify(&["Hagia Sophia"], &["History"]).await,
            vec![Some(Category::History)]
        );
        assert_eq!(
            h.store
                .category_row(&title("Hagia Sophia"), "Religion,History")
                .await
                .unwrap()
                .category,
            Category::Religion
        );
    }

    #[tokio::test]
    async fn test_category_hit_outside_blocked_set_falls_through() {
        let h = harness(world());
        h.classify(&["Ada Lovelace"], &["People"]).await;
        let before = h.graph.calls();

        assert_eq!(h.classify(&["Ada Lovelace"], &["History"]).await, vec![None]);
        // Class cache answers; no new entity lookups
        assert_eq!(h.graph.calls().instance_classes, before.instance_classes);
        assert_eq!(
            h.classify(&["Ada Lovelace"], &["People"]).await,
            vec![Some(Category::People)]
        );
    }

    #[tokio::test]
    async fn test_redirect_caches_both_titles() {
        let h = harness(world());
        assert_eq!(
            h.classify(&["Lovelace"], &["People"]).await,
            vec![Some(Category::People)]
        );
        assert!(h.store.class_row(&title("Lovelace")).await.is_some());
        assert!(h.store.class_row(&title("Ada Lovelace")).await.is_some());
        assert_eq!(
            h.store
                .category_row(&title("Ada Lovelace"), "People")
                .await
                .unwrap()
                .category,
            Category::People
        );

        // The canonical title is now served from cache
        let before = h.graph.calls();
        h.classify(&["Ada Lovelace"], &["People"]).await;
        assert_eq!(h.graph.calls(), before);
    }

    #[tokio::test]
    async fn test_idempotent() {
        let h = harness(world());
        let titles = ["Ada Lovelace", "Battle of Hastings", "Olympic Games", "Lovelace"];
        let first = h.classify(&titles, &["People", "History"]).await;
        let second = h.classify(&titles, &["People", "History"]).await;
        assert_eq!(first, second);
        assert_eq!(
            first,
            vec![
                Some(Category::People),
                Some(Category::History),
                None,
                Some(Category::People)
            ]
        );
    }
}

mod request_shape {
    use super::*;

    #[tokio::test]
    async fn test_empty_inputs_make_no_remote_calls() {
        let h = harness(world());
        assert_eq!(h.classify(&["Ada Lovelace"], &[]).await, vec![None]);
        assert!(h
            .service()
            .classify(&[], &["People"])
            .await
            .unwrap()
            .is_empty());
        assert_eq!(h.graph.calls(), Default::default());
    }

    #[tokio::test]
    async fn test_unknown_blocked_category_is_rejected() {
        let h = harness(world());
        let result = h
            .service()
            .classify(&["Ada Lovelace".to_string()], &["Sports"])
            .await;
        assert!(matches!(result, Err(AppError::UnknownCategory(_))));

        let result = h
            .service()
            .classify(&["Ada Lovelace".to_string()], &["Unclassified"])
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(h.graph.calls(), Default::default());
    }

    #[tokio::test]
    async fn test_response_is_keyed_by_input_strings() {
        let h = harness(world());
        let titles = vec![
            "Ada_Lovelace".to_string(),
            "Ada Lovelace".to_string(),
            "   ".to_string(),
        ];
        let links = h.service().classify(&titles, &["People"]).await.unwrap();
        assert_eq!(links.len(), 3);
        assert_eq!(links["Ada_Lovelace"], Some(Category::People));
        assert_eq!(links["Ada Lovelace"], Some(Category::People));
        assert_eq!(links["   "], None);
        assert_eq!(h.graph.calls().instance_classes, 1);
    }

    #[tokio::test]
    async fn test_large_batches_are_chunked() {
        let mut graph = world();
        for n in 0..120 {
            graph = graph.with_entity(&format!("Person {}", n), &["Q5"]);
        }
        let h = harness(graph);
        let titles: Vec<String> = (0..120).map(|n| format!("Person {}", n)).collect();
        let refs: Vec<&str> = titles.iter().map(String::as_str).collect();

        let result = h.classify(&refs, &["People"]).await;
        assert!(result.iter().all(|c| *c == Some(Category::People)));
        assert_eq!(h.graph.calls().instance_classes, 3);
    }
}

mod resolver_chain {
    use super::*;

    #[tokio::test]
    async fn test_keyword_fallback_blocks_classless_titles() {
        let graph = world()
            .with_entity("Fall of Constantinople", &[])
            .with_tags("Fall of Constantinople", &["Byzantine Empire", "1453 in Europe"]);
        let h = harness(graph);
        assert_eq!(
            h.classify(&["Fall of Constantinople"], &["History"]).await,
            vec![Some(Category::History)]
        );
    }

    #[tokio::test]
    async fn test_keyword_fallback_skipped_when_classes_map() {
        // Mapped to People, so History tags are never consulted
        let graph = world()
            .with_entity("Harold Godwinson", &["Q5"])
            .with_tags("Harold Godwinson", &["11th-century English monarchs", "Battle of Hastings"]);
        let h = harness(graph);
        assert_eq!(h.classify(&["Harold Godwinson"], &["History"]).await, vec![None]);
        assert_eq!(h.graph.calls().tags, 0);
    }

    #[tokio::test]
    async fn test_declared_order_wins_among_allowed() {
        let graph = world().with_entity("Hagia Sophia", &["Q16970", "Q198"]);
        let h = harness(graph);
        assert_eq!(
            h.classify(&["Hagia Sophia"], &["Religion", "History"]).await,
            vec![Some(Category::Religion)]
        );
        assert_eq!(
            h.classify(&["Hagia Sophia"], &["History"]).await,
            vec![Some(Category::History)]
        );
    }

    #[tokio::test]
    async fn test_shallowest_mapped_ancestor_wins() {
        // Q300 reaches Society at depth 4 and History at depth 2
        let graph = world()
            .with_entity("Siege of Acre", &["Q300"])
            .with_parents("Q300", &["Q310", "Q320"])
            .with_parents("Q310", &["Q311"])
            .with_parents("Q311", &["Q312"])
            .with_parents("Q312", &["Q43229"])
            .with_parents("Q320", &["Q198"]);
        let h = harness(graph);
        assert_eq!(
            h.classify(&["Siege of Acre"], &["History", "Society"]).await,
            vec![Some(Category::History)]
        );
        // With History unblocked the walker's answer is filtered out
        assert_eq!(h.classify(&["Siege of Acre"], &["Society"]).await, vec![None]);
    }
}

mod fail_open {
    use super::*;

    #[tokio::test]
    async fn test_remote_outage_yields_unblocked() {
        let h = harness(world());
        h.graph.set_offline(true);
        let result = h
            .classify(&["Ada Lovelace", "Battle of Hastings"], &["People", "History"])
            .await;
        assert_eq!(result, vec![None, None]);

        // Nothing learned during the outage is cached
        assert!(h.store.class_row(&title("Ada Lovelace")).await.is_none());

        h.graph.set_offline(false);
        let result = h.classify(&["Ada Lovelace"], &["People"]).await;
        assert_eq!(result, vec![Some(Category::People)]);
    }

    #[tokio::test]
    async fn test_redirect_outage_keeps_target_unblocked() {
        let graph = world().with_tags("Basil of Caesarea", &["4th-century Christian saints"]);
        let h = harness(graph);
        h.graph.set_redirects_offline(true);

        let result = h
            .classify(&["Basil of Cesarea", "Ada Lovelace"], &["Religion", "People"])
            .await;
        assert_eq!(result, vec![None, Some(Category::People)]);

        // Without a known redirect target nothing about these titles is kept
        assert!(h.store.class_row(&title("Basil of Cesarea")).await.is_none());
        assert!(h.store.class_row(&title("Ada Lovelace")).await.is_none());
        assert_eq!(h.store.category_count().await, 0);
        assert_eq!(h.graph.calls().tags, 0);

        h.graph.set_redirects_offline(false);
        let result = h.classify(&["Basil of Cesarea"], &["Religion", "People"]).await;
        assert_eq!(result, vec![None]);
        assert!(h.store.class_row(&title("Basil of Cesarea")).await.is_none());
    }

    #[tokio::test]
    async fn test_store_outage_degrades_to_remote() {
        let h = harness(world());
        h.store.set_unavailable(true);
        let result = h.classify(&["Ada Lovelace"], &["People"]).await;
        assert_eq!(result, vec![Some(Category::People)]);
    }
}

mod walker_termination {
    use super::*;

    fn walker(graph: MemoryGraph, max_depth: usize) -> (SubclassWalker, Arc<MemoryGraph>) {
        let mut config = Config::default();
        config.resolver.max_depth = max_depth;
        let h = harness_with(graph, config);
        (SubclassWalker::from_ref(&h.ctx), h.graph)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_walk_is_bounded_on_cyclic_graphs(
            edges in proptest::collection::vec((0u8..12, 0u8..12), 0..48),
            max_depth in 3usize..=6,
        ) {
            // Nodes Q9000..Q9011 are unmapped; self-loops and cycles allowed
            let mut parents: std::collections::BTreeMap<u8, Vec<String>> = Default::default();
            for (child, parent) in &edges {
                parents.entry(*child).or_default().push(format!("Q90{:02}", parent));
            }
            let mut graph = MemoryGraph::new();
            for (child, list) in &parents {
                let refs: Vec<&str> = list.iter().map(String::as_str).collect();
                graph = graph.with_parents(&format!("Q90{:02}", child), &refs);
            }

            let (walker, graph) = walker(graph, max_depth);
            let runtime = tokio::runtime::Runtime::new().unwrap();
            let trace = runtime.block_on(walker.trace(&ClassId::from("Q9000")));

            prop_assert!(trace.found.is_none());
            prop_assert!(trace.levels.len() <= max_depth);
            prop_assert!(graph.calls().parent_classes <= max_depth);
        }
    }
}
