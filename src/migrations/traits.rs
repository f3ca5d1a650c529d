//! Migration traits and registry.

use futures::future::BoxFuture;

use crate::error::AppError;
use crate::store::{SqlExecutor, StoreClient, Transaction as _};

/// Base migration trait with explicit lifetime-bounded future.
/// Uses BoxFuture to avoid `'static` requirements from `#[async_trait]`.
pub trait Migration: Send + Sync {
    type Context: ?Sized + Sync;

    fn id(&self) -> &'static str;
    fn version(&self) -> u32;
    fn description(&self) -> &'static str;
    fn up<'a>(&'a self, ctx: &'a Self::Context) -> BoxFuture<'a, Result<(), AppError>>;
}

pub trait DbMigration: Migration<Context = dyn SqlExecutor + Sync> {}
impl<T: Migration<Context = dyn SqlExecutor + Sync>> DbMigration for T {}

/// Ordered set of migrations.
pub struct Register<T: ?Sized> {
    migrations: Vec<Box<T>>,
}

impl Register<dyn DbMigration> {
    pub fn new() -> Self {
        Self {
            migrations: Vec::new(),
        }
    }

    pub fn register(mut self, migration: impl DbMigration + 'static) -> Self {
        self.migrations.push(Box::new(migration));
        self
    }

    /// Iterate over migrations.
    pub fn iter(&self) -> impl Iterator<Item = &dyn DbMigration> {
        self.migrations.iter().map(|m| m.as_ref())
    }

    /// Highest version known to this register.
    pub fn latest_version(&self) -> u32 {
        self.iter().map(|m| m.version()).max().unwrap_or(0)
    }

    /// Run all pending migrations above `current_version`, each in its own
    /// transaction. Returns the (version, id) pairs applied, in order.
    pub async fn run_pending<C>(
        &self,
        client: &C,
        current_version: u32,
    ) -> Result<Vec<(u32, String)>, AppError>
    where
        C: StoreClient + 'static,
        for<'a> C::Tx<'a>: 'static,
    {
        let mut applied = vec![];

        for migration in &self.migrations {
            if migration.version() <= current_version {
                continue;
            }

            tracing::info!(
                "Applying DB migration {} (v{}): {}",
                migration.id(),
                migration.version(),
                migration.description()
            );

            let txn = client.begin().await?;
            match migration.up(&txn).await {
                Ok(()) => txn.commit().await?,
                Err(e) => {
                    tracing::error!("DB migration {} failed: {}", migration.id(), e);
                    txn.rollback().await?;
                    return Err(e);
                }
            }

            applied.push((migration.version(), migration.id().to_string()));
        }

        Ok(applied)
    }
}

impl Default for Register<dyn DbMigration> {
    fn default() -> Self {
        Self::new()
    }
}
