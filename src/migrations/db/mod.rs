//! Cache-store migrations.

mod m001_cache_tables;
mod m002_category_scope;

pub use m001_cache_tables::M001CacheTables;
pub use m002_category_scope::M002CategoryScope;

use crate::migrations::traits::{DbMigration, Register};

/// Create the database migrations register.
pub fn create_register() -> Register<dyn DbMigration> {
    Register::<dyn DbMigration>::new()
        .register(M001CacheTables)
        .register(M002CategoryScope)
}
