//! The ordered resolver chain the orchestrator runs per title.

use async_trait::async_trait;

use crate::models::{CanonicalTitle, Category, CategorySet, ClassList};
use crate::services::walker::WalkContext;

/// One title moving through the chain.
#[derive(Debug, Clone)]
pub struct Subject {
    /// Redirect-resolved title.
    pub title: CanonicalTitle,
    /// Instance-of classes in declared order.
    pub classes: ClassList,
    /// Every category any class maps to, filtered or not, in the order it
    /// was found. Non-empty means the entity carries usable class data.
    pub evidence: Vec<Category>,
    /// Topic tags, fetched only when the keyword stage needs them.
    pub tags: Option<Vec<String>>,
    /// The redirect lookup failed, so `title` may be an alias of any page,
    /// the target article included. Only class evidence may decide it.
    pub unresolved: bool,
}

impl Subject {
    pub fn new(title: CanonicalTitle, classes: ClassList) -> Self {
        Self {
            title,
            classes,
            evidence: Vec::new(),
            tags: None,
            unresolved: false,
        }
    }

    pub fn has_class_evidence(&self) -> bool {
        !self.evidence.is_empty()
    }

    pub(crate) fn record(&mut self, category: Category) {
        if !self.evidence.contains(&category) {
            self.evidence.push(category);
        }
    }
}

/// A stage that may decide a subject's category.
///
/// Stages run in order; a subject leaves the chain at the first stage that
/// returns a category. `prepare` sees every subject still pending so remote
/// lookups can be batched before the per-subject `resolve` calls.
#[async_trait]
pub trait CategoryResolver: Send + Sync {
    fn name(&self) -> &'static str;

    async fn prepare(&self, _subjects: &mut [Subject], _pending: &[usize], _scope: &mut WalkContext) {}

    /// Returns a category in `allowed`, or `None` to pass to the next stage.
    fn resolve(
        &self,
        subject: &mut Subject,
        allowed: &CategorySet,
        scope: &WalkContext,
    ) -> Option<Category>;
}

/// Run `subjects` through `chain`. The result is index-aligned with
/// `subjects`.
pub async fn run_chain(
    chain: &[&dyn CategoryResolver],
    subjects: &mut [Subject],
    allowed: &CategorySet,
    scope: &mut WalkContext,
) -> Vec<Option<Category>> {
    let mut outcome = vec![None; subjects.len()];
    let mut pending: Vec<usize> = (0..subjects.len()).collect();

    for stage in chain {
        if pending.is_empty() {
            break;
        }
        stage.prepare(subjects, &pending, scope).await;

        let mut unresolved = Vec::with_capacity(pending.len());
        for index in pending {
            match stage.resolve(&mut subjects[index], allowed, scope) {
                Some(category) => {
                    tracing::debug!(
                        stage = stage.name(),
                        title = %subjects[index].title,
                        %category,
                        "Resolved"
                    );
                    outcome[index] = Some(category);
                }
                None => unresolved.push(index),
            }
        }
        pending = unresolved;
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Option<Category>, &'static str);

    #[async_trait]
    impl CategoryResolver for Fixed {
        fn name(&self) -> &'static str {
            self.1
        }

        fn resolve(&self, _: &mut Subject, allowed: &CategorySet, _: &WalkContext) -> Option<Category> {
            self.0.filter(|c| allowed.contains(*c))
        }
    }

    #[tokio::test]
    async fn test_first_stage_with_answer_wins() {
        let none = Fixed(None, "none");
        let history = Fixed(Some(Category::History), "history");
        let religion = Fixed(Some(Category::Religion), "religion");
        let chain: [&dyn CategoryResolver; 3] = [&none, &history, &religion];

        let mut subjects = vec![Subject::new(
            CanonicalTitle::from_source("Battle of Hastings"),
            ClassList::new(),
        )];
        let allowed = CategorySet::all();
        let outcome = run_chain(&chain, &mut subjects, &allowed, &mut WalkContext::default()).await;
        assert_eq!(outcome, vec![Some(Category::History)]);
    }

    #[tokio::test]
    async fn test_filtered_answer_falls_through() {
        let history = Fixed(Some(Category::History), "history");
        let religion = Fixed(Some(Category::Religion), "religion");
        let chain: [&dyn CategoryResolver; 2] = [&history, &religion];

        let mut subjects = vec![Subject::new(
            CanonicalTitle::from_source("Hagia Sophia"),
            ClassList::new(),
        )];
        let allowed: CategorySet = [Category::Religion].into_iter().collect();
        let outcome = run_chain(&chain, &mut subjects, &allowed, &mut WalkContext::default()).await;
        assert_eq!(outcome, vec![Some(Category::Religion)]);
    }
}
