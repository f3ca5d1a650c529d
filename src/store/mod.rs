//! Persistent key-value caches keyed by canonical title.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  repositories (TTL + fail-open policy)   │
//! ├──────────────────────────────────────────┤
//! │  CacheStore trait                        │
//! ├─────────────────────┬────────────────────┤
//! │  PostgresStore      │  MemoryStore       │
//! │  (deadpool-postgres)│  (process-local)   │
//! └─────────────────────┴────────────────────┘
//! ```

pub mod backends;
mod traits;

pub use traits::{CacheStore, SqlExecutor, StoreClient, Transaction};
