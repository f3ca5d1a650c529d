//! Knowledge graph backends.

pub mod memory;
pub mod wikidata;

pub use memory::{CallCounts, MemoryGraph};
pub use wikidata::WikidataClient;
