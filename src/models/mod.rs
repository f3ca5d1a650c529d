//! Domain models for category resolution.

mod cache;
mod category;
mod class;
mod title;

pub use cache::{CategoryCacheEntry, ClassCacheEntry};
pub use category::{Category, CategorySet};
pub use class::{ClassId, ClassList};
pub use title::{ArticleTitle, CanonicalTitle};
