//! Scope cached categories by the blocked set they were resolved against.

use futures::future::BoxFuture;
use futures::FutureExt;

use crate::error::AppError;
use crate::migrations::Migration;
use crate::store::SqlExecutor;

/// Rebuilds `category_cache` keyed by `(title, blocked)`.
///
/// Existing rows carry no blocked set and are dropped.
pub struct M002CategoryScope;

impl Migration for M002CategoryScope {
    type Context = dyn SqlExecutor + Sync;

    fn id(&self) -> &'static str {
        "db002_category_scope"
    }

    fn version(&self) -> u32 {
        2
    }

    fn description(&self) -> &'static str {
        "Key category cache rows by title and blocked set"
    }

    fn up<'a>(&'a self, ctx: &'a Self::Context) -> BoxFuture<'a, Result<(), AppError>> {
        async move {
            ctx.execute_sql(
                r#"
                DROP TABLE IF EXISTS category_cache;

                CREATE TABLE category_cache (
                    title TEXT NOT NULL,
                    blocked TEXT NOT NULL,
                    category TEXT NOT NULL CHECK (category <> 'Unclassified'),
                    checked_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                    PRIMARY KEY (title, blocked)
                );

                CREATE INDEX IF NOT EXISTS category_cache_checked_at_idx
                ON category_cache (checked_at);
                "#,
            )
            .await
        }
        .boxed()
    }
}
