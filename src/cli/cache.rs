//! Cache maintenance subcommands.

use std::sync::Arc;

use clap::Subcommand;
use color_eyre::Result;

use crate::config::Config;
use crate::context::Context;
use crate::repositories::CacheMaintenanceRepository;

#[derive(Subcommand)]
pub enum CacheCommand {
    /// Drop every cached row
    Clear,
    /// Drop rows older than their TTL
    Purge,
}

impl CacheCommand {
    pub async fn run(&self) -> Result<()> {
        let config = Config::load()?;
        config.validate()?;
        if config.postgres.is_none() {
            tracing::warn!("No [postgres] section configured, the memory store is always empty here");
        }
        let store = Context::create_store(&config).await?;
        let repo = CacheMaintenanceRepository::new(store, Arc::new(config));

        let removed = match self {
            CacheCommand::Clear => repo.clear().await?,
            CacheCommand::Purge => repo.purge_expired().await?,
        };
        println!("Removed {} cached rows", removed);
        Ok(())
    }
}
