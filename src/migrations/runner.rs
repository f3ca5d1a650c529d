//! Migration runner with version tracking.

use crate::error::AppError;
use crate::migrations::db;
use crate::store::{SqlExecutor, StoreClient, Transaction};

/// Result of running migrations.
#[derive(Debug, Clone)]
pub struct MigrationResult {
    pub previous_version: u32,
    pub current_version: u32,
    pub applied_migrations: Vec<String>,
}

/// Run all pending cache-store migrations.
pub async fn run_migrations<C>(client: &C) -> Result<MigrationResult, AppError>
where
    C: StoreClient + 'static,
    for<'a> C::Tx<'a>: 'static,
{
    ensure_db_schema_version_table(client).await?;

    let previous_version = get_db_schema_version(client).await?;
    let register = db::create_register();

    let applied = register.run_pending(client, previous_version).await?;

    let mut current_version = previous_version;
    for (version, migration_id) in &applied {
        update_db_schema_version(client, *version, migration_id).await?;
        current_version = *version;
    }

    Ok(MigrationResult {
        previous_version,
        current_version,
        applied_migrations: applied.into_iter().map(|(_, id)| id).collect(),
    })
}

const CREATE_DB_SCHEMA_VERSION_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS db_schema_version (
    id INTEGER PRIMARY KEY DEFAULT 1 CHECK (id = 1),
    version INTEGER NOT NULL DEFAULT 0,
    applied_migrations TEXT[] NOT NULL DEFAULT '{}',
    last_applied_at TIMESTAMPTZ DEFAULT NOW()
);
INSERT INTO db_schema_version (id, version) VALUES (1, 0) ON CONFLICT (id) DO NOTHING;
"#;

async fn ensure_db_schema_version_table<C>(client: &C) -> Result<(), AppError>
where
    C: StoreClient,
{
    let txn = client.begin().await?;
    txn.execute_sql(CREATE_DB_SCHEMA_VERSION_TABLE).await?;
    txn.commit().await?;
    Ok(())
}

async fn get_db_schema_version<C>(client: &C) -> Result<u32, AppError>
where
    C: StoreClient,
{
    let txn = client.begin().await?;
    let rows = txn
        .query_sql("SELECT version FROM db_schema_version WHERE id = 1")
        .await?;
    txn.commit().await?;

    Ok(rows
        .first()
        .and_then(|r| r.try_get::<_, i32>("version").ok())
        .unwrap_or(0) as u32)
}

async fn update_db_schema_version<C>(
    client: &C,
    version: u32,
    migration_id: &str,
) -> Result<(), AppError>
where
    C: StoreClient,
{
    let txn = client.begin().await?;
    let sql = format!(
        "UPDATE db_schema_version SET version = {}, applied_migrations = array_append(applied_migrations, '{}'), last_applied_at = NOW() WHERE id = 1",
        version, migration_id
    );
    txn.execute_sql(&sql).await?;
    txn.commit().await?;
    Ok(())
}
