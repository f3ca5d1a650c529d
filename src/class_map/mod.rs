//! Static class map: taxonomy class id → top-level category.
//!
//! The map is produced offline by
//! [`ClassMapBuilder`](crate::services::ClassMapBuilder) and loaded read-only
//! at service start. On disk it is a flat JSON object:
//!
//! ```json
//! { "Q5": "People", "Q198": "History", "Q9174": "Religion" }
//! ```

mod roots;
mod supplements;

pub use roots::{RootClass, ROOT_CLASSES};
pub use supplements::SUPPLEMENT_CLASSES;

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use crate::error::AppError;
use crate::models::{Category, ClassId};

/// Immutable-at-request-time lookup table from class id to category.
#[derive(Debug, Clone, Default)]
pub struct StaticClassMap {
    entries: HashMap<ClassId, Category>,
}

impl StaticClassMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// O(1) lookup of a single class id.
    pub fn get(&self, class: &ClassId) -> Option<Category> {
        self.entries.get(class).copied()
    }

    pub fn contains(&self, class: &ClassId) -> bool {
        self.entries.contains_key(class)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ClassId, Category)> {
        self.entries.iter().map(|(id, category)| (id, *category))
    }

    /// Claim a class for a category unless an earlier root already did.
    ///
    /// Returns true if the class was newly claimed.
    pub fn claim(&mut self, class: ClassId, category: Category) -> bool {
        use std::collections::hash_map::Entry;

        match self.entries.entry(class) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(category);
                true
            }
        }
    }

    /// Set a class's category, replacing any earlier claim.
    ///
    /// Returns the previous category, if any.
    pub fn assign(&mut self, class: ClassId, category: Category) -> Option<Category> {
        self.entries.insert(class, category)
    }

    /// Number of classes per category.
    pub fn distribution(&self) -> BTreeMap<Category, usize> {
        let mut counts = BTreeMap::new();
        for category in self.entries.values() {
            *counts.entry(*category).or_insert(0) += 1;
        }
        counts
    }

    /// Parse the flat JSON artifact.
    ///
    /// Entries naming a category outside the closed set are skipped with a
    /// warning rather than failing the whole load.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let raw: HashMap<String, String> = serde_json::from_str(json)?;
        let mut map = Self::new();
        let mut skipped = 0usize;

        for (class, name) in raw {
            match name.parse::<Category>() {
                Ok(category) if category.is_blockable() => {
                    map.entries.insert(ClassId::new(class), category);
                }
                _ => skipped += 1,
            }
        }

        if skipped > 0 {
            tracing::warn!(skipped, "Class map entries with unknown categories were skipped");
        }
        Ok(map)
    }

    /// Serialize to the flat JSON artifact, keys sorted for stable diffs.
    pub fn to_json(&self) -> Result<String, AppError> {
        let sorted: BTreeMap<&str, &str> = self
            .entries
            .iter()
            .map(|(id, category)| (id.as_str(), category.as_str()))
            .collect();
        Ok(serde_json::to_string_pretty(&sorted)?)
    }

    /// Load the artifact from disk.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let json = std::fs::read_to_string(path).map_err(|source| AppError::ClassMapIo {
            path: path.display().to_string(),
            source,
        })?;
        let map = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), classes = map.len(), "Loaded static class map");
        Ok(map)
    }

    /// Write the artifact to disk, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), AppError> {
        let io_err = |source| AppError::ClassMapIo {
            path: path.display().to_string(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(path, self.to_json()?).map_err(io_err)
    }
}

impl FromIterator<(ClassId, Category)> for StaticClassMap {
    fn from_iter<I: IntoIterator<Item = (ClassId, Category)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (class, category) in iter {
            map.claim(class, category);
        }
        map
    }
}
