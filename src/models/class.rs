//! Taxonomy class identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a class node in the external knowledge graph (e.g. `Q5`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassId(String);

impl ClassId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Parse an id from an entity URI or a bare id.
    ///
    /// SPARQL bindings return `http://www.wikidata.org/entity/Q5`; only the
    /// last path segment is kept. Empty input yields `None`.
    pub fn from_uri(uri: &str) -> Option<Self> {
        let id = uri.rsplit('/').next()?.trim();
        if id.is_empty() {
            None
        } else {
            Some(Self(id.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClassId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Instance-of classes of one entity, in the order the source declares them.
///
/// Order is significant: the first class with a known category wins, so two
/// orderings of the same classes may classify differently. Duplicates are
/// dropped, keeping the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassList(Vec<ClassId>);

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, id: ClassId) {
        if !self.0.contains(&id) {
            self.0.push(id);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClassId> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[ClassId] {
        &self.0
    }
}

impl FromIterator<ClassId> for ClassList {
    fn from_iter<I: IntoIterator<Item = ClassId>>(iter: I) -> Self {
        let mut list = Self::new();
        for id in iter {
            list.push(id);
        }
        list
    }
}

impl<'a> IntoIterator for &'a ClassList {
    type Item = &'a ClassId;
    type IntoIter = std::slice::Iter<'a, ClassId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_id_from_uri() {
        let id = ClassId::from_uri("http://www.wikidata.org/entity/Q5").unwrap();
        assert_eq!(id.as_str(), "Q5");
        assert_eq!(ClassId::from_uri("Q198").unwrap().as_str(), "Q198");
        assert!(ClassId::from_uri("http://www.wikidata.org/entity/").is_none());
    }

    #[test]
    fn test_class_list_keeps_declared_order() {
        let list: ClassList = ["Q5", "Q198", "Q5", "Q9174"]
            .into_iter()
            .map(ClassId::from)
            .collect();
        let ids: Vec<_> = list.iter().map(|c| c.as_str()).collect();
        assert_eq!(ids, vec!["Q5", "Q198", "Q9174"]);
    }
}
