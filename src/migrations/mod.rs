//! Schema migrations for the PostgreSQL cache store with version tracking.
//!
//! Migrations are:
//! - **Idempotent**: Use `IF NOT EXISTS` - required for safe retries
//! - **Forward-only**: No rollback support - create compensating migrations if needed
//! - **Version-tracked**: Schema version stored in the `db_schema_version` table
//! - **Applied by `basilica init`**, and on `serve` when a database is configured

pub mod db;
mod runner;
mod traits;

pub use runner::{run_migrations, MigrationResult};
pub use traits::{DbMigration, Migration, Register};
