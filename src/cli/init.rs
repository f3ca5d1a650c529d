//! Init command handler.

use color_eyre::Result;

use crate::config::Config;
use crate::migrations::run_migrations;
use crate::store::backends::PostgresStore;

use super::App;

impl App {
    /// Run the init command to create or migrate the cache tables.
    pub async fn run_init(&self) -> Result<()> {
        let config = Config::load()?;

        let Some(pg) = config.postgres.as_ref() else {
            tracing::warn!("No [postgres] section configured, nothing to initialize");
            return Ok(());
        };

        tracing::info!("Connecting to PostgreSQL cache store");
        let store = PostgresStore::connect(&pg.uri, pg.pool_size)
            .await
            .map_err(|e| color_eyre::eyre::eyre!("Failed to connect: {}", e))?;

        tracing::info!("Running migrations...");
        let result = run_migrations(&store)
            .await
            .map_err(|e| color_eyre::eyre::eyre!("Migration failed: {}", e))?;

        if result.applied_migrations.is_empty() {
            tracing::info!(
                "Cache schema already at v{}, no migrations needed",
                result.current_version
            );
        } else {
            tracing::info!(
                "Migrations complete: v{} -> v{}, applied: {:?}",
                result.previous_version,
                result.current_version,
                result.applied_migrations
            );
        }

        Ok(())
    }
}
