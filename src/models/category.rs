//! Top-level topic categories a link can be blocked by.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A top-level topic category.
///
/// The set is closed: adding a variant means rebuilding and redeploying the
/// static class map. `Unclassified` is the sentinel for "no discoverable
/// category" and is never blockable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Religion,
    History,
    People,
    Geography,
    Government,
    Law,
    Education,
    Society,
    Culture,
    Language,
    Philosophy,
    Humanities,
    Unclassified,
}

impl Category {
    /// Every category that can appear in a blocked set, in display order.
    pub const BLOCKABLE: [Category; 12] = [
        Category::Religion,
        Category::History,
        Category::People,
        Category::Philosophy,
        Category::Culture,
        Category::Education,
        Category::Society,
        Category::Geography,
        Category::Humanities,
        Category::Language,
        Category::Government,
        Category::Law,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Religion => "Religion",
            Category::History => "History",
            Category::People => "People",
            Category::Geography => "Geography",
            Category::Government => "Government",
            Category::Law => "Law",
            Category::Education => "Education",
            Category::Society => "Society",
            Category::Culture => "Culture",
            Category::Language => "Language",
            Category::Philosophy => "Philosophy",
            Category::Humanities => "Humanities",
            Category::Unclassified => "Unclassified",
        }
    }

    /// Returns true for every category except `Unclassified`.
    pub fn is_blockable(&self) -> bool {
        !matches!(self, Category::Unclassified)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Religion" => Ok(Category::Religion),
            "History" => Ok(Category::History),
            "People" => Ok(Category::People),
            "Geography" => Ok(Category::Geography),
            "Government" => Ok(Category::Government),
            "Law" => Ok(Category::Law),
            "Education" => Ok(Category::Education),
            "Society" => Ok(Category::Society),
            "Culture" => Ok(Category::Culture),
            "Language" => Ok(Category::Language),
            "Philosophy" => Ok(Category::Philosophy),
            "Humanities" => Ok(Category::Humanities),
            "Unclassified" => Ok(Category::Unclassified),
            _ => Err(AppError::UnknownCategory(s.to_string())),
        }
    }
}

/// The set of categories a caller wants blocked.
///
/// Built from request input, so `Unclassified` is rejected here rather than
/// silently carried into the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySet {
    // Sorted, no duplicates
    members: Vec<Category>,
}

impl CategorySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A set containing every blockable category.
    pub fn all() -> Self {
        Self::from_iter(Category::BLOCKABLE)
    }

    /// Parse category names supplied by a caller.
    ///
    /// Fails on the first unknown or non-blockable name.
    pub fn parse<S: AsRef<str>>(names: &[S]) -> Result<Self, AppError> {
        let mut set = Self::new();
        for name in names {
            let category: Category = name.as_ref().trim().parse()?;
            if !category.is_blockable() {
                return Err(AppError::Validation(format!(
                    "'{}' cannot be blocked",
                    category
                )));
            }
            set.insert(category);
        }
        Ok(set)
    }

    pub fn insert(&mut self, category: Category) {
        if let Err(pos) = self.members.binary_search(&category) {
            self.members.insert(pos, category);
        }
    }

    pub fn contains(&self, category: Category) -> bool {
        self.members.binary_search(&category).is_ok()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Category> + '_ {
        self.members.iter().copied()
    }

    /// Stable name of the set, independent of input order and duplicates.
    /// Category cache rows are scoped by it.
    pub fn cache_key(&self) -> String {
        self.members
            .iter()
            .map(Category::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl FromIterator<Category> for CategorySet {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        let mut set = Self::new();
        for category in iter {
            set.insert(category);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trips_through_name() {
        for category in Category::BLOCKABLE {
            let parsed: Category = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_unknown_category_name() {
        let result: Result<Category, _> = "Sports".parse();
        assert!(matches!(result, Err(AppError::UnknownCategory(name)) if name == "Sports"));
    }

    #[test]
    fn test_category_serializes_as_name() {
        let json = serde_json::to_string(&Category::People).unwrap();
        assert_eq!(json, "\"People\"");
    }

    #[test]
    fn test_set_parse_deduplicates() {
        let set = CategorySet::parse(&["History", "People", "History"]).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains(Category::History));
        assert!(set.contains(Category::People));
        assert!(!set.contains(Category::Religion));
    }

    #[test]
    fn test_cache_key_ignores_input_order() {
        let a = CategorySet::parse(&["Religion", "History", "Religion"]).unwrap();
        let b = CategorySet::parse(&["History", "Religion"]).unwrap();
        assert_eq!(a.cache_key(), b.cache_key());
        assert_ne!(a.cache_key(), CategorySet::parse(&["History"]).unwrap().cache_key());
    }

    #[test]
    fn test_set_parse_rejects_unclassified() {
        let result = CategorySet::parse(&["Unclassified"]);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_set_parse_rejects_unknown() {
        assert!(CategorySet::parse(&["Religion", "Astrology"]).is_err());
    }

    #[test]
    fn test_all_excludes_unclassified() {
        let all = CategorySet::all();
        assert_eq!(all.len(), 12);
        assert!(!all.contains(Category::Unclassified));
    }
}
