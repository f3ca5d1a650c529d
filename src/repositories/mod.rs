//! Cache access layer.
//!
//! Repositories apply TTL cutoffs and the fail-open policy on top of the
//! raw [`CacheStore`](crate::store::CacheStore), using the `FromContext`
//! derive macro for dependency injection.

mod category_cache;
mod class_cache;
mod maintenance;

pub use category_cache::CategoryCacheRepository;
pub use class_cache::ClassCacheRepository;
pub use maintenance::CacheMaintenanceRepository;
