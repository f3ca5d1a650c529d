//! Static class map lookup.

use async_trait::async_trait;

use crate::class_map::StaticClassMap;
use crate::context::{AppClassMap, Context};
use crate::di::FromContext;
use crate::models::{Category, CategorySet, ClassId};
use crate::services::chain::{CategoryResolver, Subject};
use crate::services::walker::WalkContext;

/// First class, in declared order, whose mapped category is allowed.
///
/// Declaration order on the source entity is the tie-break, so two edits
/// that reorder the same classes can change the answer.
pub fn classify(map: &StaticClassMap, classes: &[ClassId], allowed: &CategorySet) -> Option<Category> {
    classes
        .iter()
        .filter_map(|class| map.get(class))
        .find(|category| allowed.contains(*category))
}

#[derive(FromContext, Clone)]
pub struct DirectClassifier {
    class_map: AppClassMap,
}

impl DirectClassifier {
    pub fn new(class_map: AppClassMap) -> Self {
        Self { class_map }
    }
}

#[async_trait]
impl CategoryResolver for DirectClassifier {
    fn name(&self) -> &'static str {
        "direct"
    }

    fn resolve(
        &self,
        subject: &mut Subject,
        allowed: &CategorySet,
        _scope: &WalkContext,
    ) -> Option<Category> {
        let mapped: Vec<Category> = subject
            .classes
            .iter()
            .filter_map(|class| self.class_map.get(class))
            .collect();
        for category in mapped {
            subject.record(category);
        }
        classify(&self.class_map, subject.classes.as_slice(), allowed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn map() -> StaticClassMap {
        [
            (ClassId::from("Q5"), Category::People),
            (ClassId::from("Q198"), Category::History),
            (ClassId::from("Q16970"), Category::Religion),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_declared_order_breaks_ties() {
        let classes = [ClassId::from("Q16970"), ClassId::from("Q198")];
        let allowed = CategorySet::all();
        assert_eq!(classify(&map(), &classes, &allowed), Some(Category::Religion));

        let reordered = [ClassId::from("Q198"), ClassId::from("Q16970")];
        assert_eq!(classify(&map(), &reordered, &allowed), Some(Category::History));
    }

    #[test]
    fn test_skips_categories_outside_filter() {
        let classes = [ClassId::from("Q16970"), ClassId::from("Q198")];
        let allowed: CategorySet = [Category::History].into_iter().collect();
        assert_eq!(classify(&map(), &classes, &allowed), Some(Category::History));
    }

    #[test]
    fn test_unmapped_classes_miss() {
        let classes = [ClassId::from("Q999999")];
        assert_eq!(classify(&map(), &classes, &CategorySet::all()), None);
    }

    #[test]
    fn test_evidence_records_filtered_categories() {
        let classifier = DirectClassifier::new(std::sync::Arc::new(map()));
        let mut subject = Subject::new(
            crate::models::CanonicalTitle::from_source("Pope Gregory I"),
            [ClassId::from("Q5")].into_iter().collect(),
        );
        let allowed: CategorySet = [Category::History].into_iter().collect();
        assert_eq!(classifier.resolve(&mut subject, &allowed, &WalkContext::default()), None);
        assert_eq!(subject.evidence, vec![Category::People]);
    }

    proptest! {
        #[test]
        fn prop_every_mapped_class_classifies_to_itself(index in 0usize..3) {
            let map = map();
            let (class, category) = map.iter().nth(index).map(|(c, k)| (c.clone(), k)).unwrap();
            let allowed: CategorySet = [category].into_iter().collect();
            prop_assert_eq!(classify(&map, &[class], &allowed), Some(category));
        }
    }
}
