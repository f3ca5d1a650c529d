//! Basilica - topic category resolver
//!
//! Decides which top-level topic category an encyclopedia article belongs
//! to, so a navigation game can block links into forbidden categories.
//! Classes come from a knowledge graph: a precomputed static class map
//! answers most lookups, a bounded subclass-of walk covers the rest, and
//! topic-tag keywords are the last resort.

pub mod api;
pub mod class_map;
pub mod cli;
pub mod config;
pub mod context;
pub mod di;
pub mod error;
pub mod knowledge;
pub mod migrations;
pub mod models;
pub mod repositories;
pub mod services;
pub mod store;

// Re-export FromRef at crate root for di-macros generated code
pub use di::FromRef;
