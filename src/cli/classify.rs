//! One-shot classification command handler.

use color_eyre::Result;

use crate::api::CheckResponse;
use crate::config::Config;
use crate::context::Context;
use crate::di::FromRef;
use crate::services::ResolutionService;

use super::App;

impl App {
    /// Classify titles and print the same JSON the HTTP endpoint returns.
    pub async fn run_classify(&self, titles: &[String], blocked: &[String]) -> Result<()> {
        let config = Config::load()?;
        let ctx = Context::from(config).await?;

        let service = ResolutionService::from_ref(&ctx);
        let blocked_links = service.classify(titles, blocked).await?;

        let output = serde_json::to_string_pretty(&CheckResponse { blocked_links })?;
        println!("{}", output);
        Ok(())
    }
}
