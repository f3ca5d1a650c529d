//! Application context providing the dependency injection root.

use std::sync::Arc;

use crate::class_map::StaticClassMap;
use crate::config::Config;
use crate::di::Context as ContextDerive;
use crate::error::AppError;
use crate::knowledge::backends::WikidataClient;
use crate::knowledge::{KnowledgeGraph, TagSource};
use crate::migrations::run_migrations;
use crate::services::ParentMemo;
use crate::store::backends::{MemoryStore, PostgresStore};
use crate::store::CacheStore;

/// Title and class caches.
pub type AppStore = Arc<dyn CacheStore>;
/// Remote knowledge graph.
pub type AppGraph = Arc<dyn KnowledgeGraph>;
/// Remote topic tags.
pub type AppTags = Arc<dyn TagSource>;
/// Static class map, read-only after start.
pub type AppClassMap = Arc<StaticClassMap>;

/// Root application context for dependency injection.
///
/// `#[derive(Context)]` generates a `FromRef` implementation for each field,
/// so repositories and services deriving `FromContext` are built directly
/// from it.
#[derive(ContextDerive, Clone)]
pub struct Context {
    pub store: AppStore,
    pub graph: AppGraph,
    pub tags: AppTags,
    pub class_map: AppClassMap,
    /// Subclass-of edges shared across requests.
    pub parent_memo: ParentMemo,
    pub config: Arc<Config>,
}

impl Context {
    /// Assemble a context from explicit parts.
    pub fn new(
        config: Config,
        store: AppStore,
        graph: AppGraph,
        tags: AppTags,
        class_map: StaticClassMap,
    ) -> Self {
        let parent_memo = ParentMemo::from_config(&config.resolver);
        Self {
            store,
            graph,
            tags,
            class_map: Arc::new(class_map),
            parent_memo,
            config: Arc::new(config),
        }
    }

    /// Build the production context: validate config, load the class map,
    /// open the store (migrating PostgreSQL if configured) and the remote
    /// client.
    pub async fn from(config: Config) -> Result<Self, AppError> {
        config.validate()?;

        let class_map = StaticClassMap::load(&config.resolver.class_map_path)?;
        let store = Self::create_store(&config).await?;

        let client = Arc::new(WikidataClient::new(&config.remote)?);
        let graph: AppGraph = client.clone();
        let tags: AppTags = client;

        Ok(Self::new(config, store, graph, tags, class_map))
    }

    /// Open the configured store; the memory store when none is configured.
    pub async fn create_store(config: &Config) -> Result<AppStore, AppError> {
        match &config.postgres {
            Some(pg) => {
                tracing::info!("Connecting to PostgreSQL cache store");
                let store = PostgresStore::connect(&pg.uri, pg.pool_size).await?;
                let result = run_migrations(&store).await?;
                if !result.applied_migrations.is_empty() {
                    tracing::info!(
                        "Cache schema migrated v{} -> v{}: {:?}",
                        result.previous_version,
                        result.current_version,
                        result.applied_migrations
                    );
                }
                Ok(Arc::new(store))
            }
            None => {
                tracing::warn!("No [postgres] section configured, caches are process-local");
                Ok(Arc::new(MemoryStore::new()))
            }
        }
    }
}
