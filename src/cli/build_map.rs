//! Static class map build command handler.

use std::path::Path;
use std::sync::Arc;

use color_eyre::Result;

use crate::class_map::{ROOT_CLASSES, SUPPLEMENT_CLASSES};
use crate::config::Config;
use crate::knowledge::backends::WikidataClient;
use crate::knowledge::RetryPolicy;
use crate::services::ClassMapBuilder;

use super::App;

impl App {
    /// Query every curated root, merge supplements, and write the artifact.
    pub async fn run_build_map(&self, output: Option<&Path>) -> Result<()> {
        let config = Config::load()?;
        let output = output.unwrap_or(config.resolver.class_map_path.as_path());

        let client = WikidataClient::new(&config.remote)?
            .with_retry(RetryPolicy::linear(&config.builder));
        let builder = ClassMapBuilder::new(Arc::new(client), &config.builder);

        tracing::info!("Building class map from {} roots", ROOT_CLASSES.len());
        let (map, stats) = builder.build(ROOT_CLASSES, SUPPLEMENT_CLASSES).await;

        if stats.all_roots_failed() || map.is_empty() {
            return Err(color_eyre::eyre::eyre!(
                "Every root query failed; keeping the existing class map"
            ));
        }
        map.save(output)?;

        for (category, claimed) in &stats.claimed {
            println!("{:<12} {:>7} claimed", category.as_str(), claimed);
        }
        println!("{:<12} {:>7} supplemented", "", stats.supplemented);
        println!("{:<12} {:>7} total -> {}", "", stats.total, output.display());
        if !stats.failed_roots.is_empty() {
            println!("failed roots: {}", stats.failed_roots.join(", "));
        }
        Ok(())
    }
}
