//! Classification services.
//!
//! Services compose repositories and the remote knowledge graph, using the
//! `FromContext` derive macro for dependency injection. The request path is
//! [`ResolutionService`], which runs each title through an ordered chain of
//! [`CategoryResolver`] stages. [`ClassMapBuilder`] is the offline job that
//! produces the static class map those stages read.

mod builder;
mod chain;
mod direct;
mod entity;
mod keyword;
mod resolution;
mod walker;

pub use builder::{BuildStats, ClassMapBuilder};
pub use chain::{run_chain, CategoryResolver, Subject};
pub use direct::{classify, DirectClassifier};
pub use entity::EntityResolver;
pub use keyword::{match_keywords, KeywordClassifier, KEYWORD_TABLE};
pub use resolution::{BlockedLinks, ResolutionService};
pub use walker::{ChainTrace, MappedAncestor, ParentMemo, SubclassWalker, WalkContext};
