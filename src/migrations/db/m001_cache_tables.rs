//! Cache tables keyed by canonical title.

use futures::future::BoxFuture;
use futures::FutureExt;

use crate::error::AppError;
use crate::migrations::Migration;
use crate::store::SqlExecutor;

/// Class cache and category cache with freshness indexes.
pub struct M001CacheTables;

impl Migration for M001CacheTables {
    type Context = dyn SqlExecutor + Sync;

    fn id(&self) -> &'static str {
        "db001_cache_tables"
    }

    fn version(&self) -> u32 {
        1
    }

    fn description(&self) -> &'static str {
        "Class cache and category cache tables"
    }

    fn up<'a>(&'a self, ctx: &'a Self::Context) -> BoxFuture<'a, Result<(), AppError>> {
        async move {
            // Empty class lists are stored too: "no classes" is a fact
            ctx.execute_sql(
                r#"
                CREATE TABLE IF NOT EXISTS class_cache (
                    title TEXT PRIMARY KEY,
                    classes JSONB NOT NULL DEFAULT '[]'::jsonb,
                    fetched_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                CREATE INDEX IF NOT EXISTS class_cache_fetched_at_idx
                ON class_cache (fetched_at);
                "#,
            )
            .await?;

            // Only blockable categories; unclassified results are never stored
            ctx.execute_sql(
                r#"
                CREATE TABLE IF NOT EXISTS category_cache (
                    title TEXT PRIMARY KEY,
                    category TEXT NOT NULL CHECK (category <> 'Unclassified'),
                    checked_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                CREATE INDEX IF NOT EXISTS category_cache_checked_at_idx
                ON category_cache (checked_at);
                "#,
            )
            .await?;

            Ok(())
        }
        .boxed()
    }
}
