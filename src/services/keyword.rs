//! Last-resort classification from an article's topic tags.
//!
//! Low precision by nature: it exists for coverage of titles whose entity
//! carries no usable class data, and false negatives are expected.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::Config;
use crate::context::{AppTags, Context};
use crate::di::FromContext;
use crate::knowledge::fetch_in_chunks;
use crate::models::{CanonicalTitle, Category, CategorySet};
use crate::services::chain::{CategoryResolver, Subject};
use crate::services::walker::WalkContext;

/// Keywords per category, checked in this order.
pub const KEYWORD_TABLE: &[(Category, &[&str])] = &[
    (
        Category::Religion,
        &[
            "church", "saint", "bishop", "christian", "orthodox", "catholic", "theology", "priest",
            "muslim", "buddhist", "jewish", "religion", "religious", "monastery", "pope", "god",
            "jesus", "bible",
        ],
    ),
    (
        Category::History,
        &[
            "empire", "ancient", "war", "century", "dynasty", "medieval", "kingdom", "roman",
            "byzantine", "battle", "civilization", "history", "historical",
        ],
    ),
    (
        Category::People,
        &[
            "born", "died", "people", "person", "living", "deaths", "births", "politician",
            "writer", "artist", "scientist",
        ],
    ),
    (
        Category::Philosophy,
        &["philosophy", "philosopher", "epistemology", "metaphysics", "ethics", "logic"],
    ),
    (
        Category::Culture,
        &[
            "culture", "cultural", "tradition", "customs", "festival", "ceremony", "folklore",
            "mythology",
        ],
    ),
    (
        Category::Education,
        &[
            "university", "school", "college", "education", "academic", "student", "professor",
            "alumni",
        ],
    ),
    (
        Category::Society,
        &["society", "social", "community", "organization", "movement", "group"],
    ),
    (
        Category::Geography,
        &[
            "city", "country", "river", "region", "mountain", "island", "capital", "province",
            "ocean", "sea", "lake", "geography",
        ],
    ),
    (
        Category::Humanities,
        &["humanities", "arts", "literature", "linguistics"],
    ),
    (
        Category::Language,
        &["language", "linguistic", "grammar", "vocabulary", "dialect", "writing"],
    ),
    (
        Category::Government,
        &[
            "government", "politics", "political", "ministry", "parliament", "congress",
            "democracy", "election",
        ],
    ),
    (
        Category::Law,
        &[
            "law", "legal", "court", "judge", "attorney", "legislation", "constitution", "crime",
        ],
    ),
];

/// First allowed category, in table order, with a keyword occurring as a
/// case-insensitive substring of any tag.
pub fn match_keywords<S: AsRef<str>>(tags: &[S], allowed: &CategorySet) -> Option<Category> {
    let lowered: Vec<String> = tags.iter().map(|t| t.as_ref().to_lowercase()).collect();
    KEYWORD_TABLE
        .iter()
        .filter(|(category, _)| allowed.contains(*category))
        .find(|(_, keywords)| {
            lowered
                .iter()
                .any(|tag| keywords.iter().any(|keyword| tag.contains(keyword)))
        })
        .map(|(category, _)| *category)
}

#[derive(FromContext, Clone)]
pub struct KeywordClassifier {
    tags: AppTags,
    config: Arc<Config>,
}

impl KeywordClassifier {
    pub fn new(tags: AppTags, config: Arc<Config>) -> Self {
        Self { tags, config }
    }
}

#[async_trait]
impl CategoryResolver for KeywordClassifier {
    fn name(&self) -> &'static str {
        "keyword"
    }

    /// Fetch tags for pending subjects that carry no class evidence.
    ///
    /// Tags read from a target alias page are discarded: the tag source
    /// follows redirects the entity lookup may not have seen.
    async fn prepare(&self, subjects: &mut [Subject], pending: &[usize], _scope: &mut WalkContext) {
        let wanted: Vec<usize> = pending
            .iter()
            .copied()
            .filter(|&i| {
                let subject = &subjects[i];
                !subject.unresolved && !subject.has_class_evidence() && subject.tags.is_none()
            })
            .collect();
        if wanted.is_empty() {
            return;
        }

        let titles: Vec<CanonicalTitle> = wanted.iter().map(|&i| subjects[i].title.clone()).collect();
        let source = &self.tags;
        let mut fetched = fetch_in_chunks(&titles, self.config.remote.batch_size, "tags", |chunk| {
            source.tags(chunk)
        })
        .await;

        let targets = self.config.resolver.target_keys();
        for i in wanted {
            let subject = &mut subjects[i];
            let tags = match fetched.remove(&subject.title) {
                Some(found) if targets.contains(&found.page.fold_key()) => {
                    tracing::debug!(title = %subject.title, page = %found.page, "Tags belong to target article, ignoring");
                    Vec::new()
                }
                Some(found) => found.tags,
                None => Vec::new(),
            };
            subject.tags = Some(tags);
        }
    }

    fn resolve(
        &self,
        subject: &mut Subject,
        allowed: &CategorySet,
        _scope: &WalkContext,
    ) -> Option<Category> {
        if subject.unresolved || subject.has_class_evidence() {
            return None;
        }
        subject
            .tags
            .as_deref()
            .and_then(|tags| match_keywords(tags, allowed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::backends::MemoryGraph;
    use crate::models::ClassList;

    fn only(category: Category) -> CategorySet {
        [category].into_iter().collect()
    }

    #[test]
    fn test_substring_match_is_case_insensitive() {
        let tags = ["Byzantine Empire"];
        assert_eq!(match_keywords(&tags, &only(Category::History)), Some(Category::History));
    }

    #[test]
    fn test_olympic_champion_matches_nothing() {
        let tags = ["Olympic champion"];
        assert_eq!(match_keywords(&tags, &CategorySet::all()), None);
    }

    #[test]
    fn test_table_order_decides_between_categories() {
        // "church history" hits both Religion and History; Religion is listed first.
        let tags = ["Church history"];
        assert_eq!(match_keywords(&tags, &CategorySet::all()), Some(Category::Religion));
        assert_eq!(match_keywords(&tags, &only(Category::History)), Some(Category::History));
    }

    #[test]
    fn test_filter_excludes_unlisted_categories() {
        let tags = ["Rivers of France"];
        assert_eq!(match_keywords(&tags, &only(Category::Religion)), None);
    }

    fn classifier(graph: MemoryGraph) -> (KeywordClassifier, Arc<MemoryGraph>) {
        let graph = Arc::new(graph);
        (KeywordClassifier::new(graph.clone(), Arc::new(Config::default())), graph)
    }

    async fn run(classifier: &KeywordClassifier, subject: Subject, allowed: &CategorySet) -> Option<Category> {
        let mut subjects = [subject];
        let mut scope = WalkContext::default();
        classifier.prepare(&mut subjects, &[0], &mut scope).await;
        classifier.resolve(&mut subjects[0], allowed, &scope)
    }

    #[tokio::test]
    async fn test_tags_from_target_page_are_ignored() {
        let graph = MemoryGraph::new()
            .with_redirect("Basil of Cesarea", "Basil of Caesarea")
            .with_tags("Basil of Caesarea", &["4th-century Christian saints"]);
        let (keyword, _) = classifier(graph);
        let subject = Subject::new(CanonicalTitle::from_source("Basil of Cesarea"), ClassList::new());
        assert_eq!(run(&keyword, subject, &only(Category::Religion)).await, None);
    }

    #[tokio::test]
    async fn test_unresolved_subject_skips_tag_lookup() {
        let graph = MemoryGraph::new().with_tags("Theodosius", &["Byzantine emperors"]);
        let (keyword, graph) = classifier(graph);
        let mut subject = Subject::new(CanonicalTitle::from_source("Theodosius"), ClassList::new());
        subject.unresolved = true;
        assert_eq!(run(&keyword, subject, &only(Category::History)).await, None);
        assert_eq!(graph.calls().tags, 0);

        let subject = Subject::new(CanonicalTitle::from_source("Theodosius"), ClassList::new());
        assert_eq!(
            run(&keyword, subject, &only(Category::History)).await,
            Some(Category::History)
        );
    }

    #[test]
    fn test_every_blockable_category_has_keywords() {
        for category in Category::BLOCKABLE {
            assert!(KEYWORD_TABLE.iter().any(|(c, words)| *c == category && !words.is_empty()));
        }
    }
}
