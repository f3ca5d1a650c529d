//! Subclass chain diagnostics.

use color_eyre::Result;

use crate::config::Config;
use crate::context::Context;
use crate::di::FromRef;
use crate::models::ClassId;
use crate::services::SubclassWalker;

use super::App;

impl App {
    /// Print each BFS level from `class_id` and the first mapped ancestor.
    pub async fn run_check_chain(&self, class_id: &str) -> Result<()> {
        let config = Config::load()?;
        let ctx = Context::from(config).await?;

        let class = ClassId::from_uri(class_id).unwrap_or_else(|| ClassId::new(class_id));
        let walker = SubclassWalker::from_ref(&ctx);
        let trace = walker.trace(&class).await;

        println!("{}", trace.start);
        for (depth, level) in trace.levels.iter().enumerate() {
            let ids: Vec<&str> = level.iter().map(|c| c.as_str()).collect();
            println!("  depth {}: {}", depth + 1, ids.join(", "));
        }
        match trace.found {
            Some(ancestor) => println!(
                "mapped: {} -> {} (depth {})",
                ancestor.class, ancestor.category, ancestor.depth
            ),
            None => println!(
                "no mapped ancestor within {} levels",
                ctx.config.resolver.max_depth
            ),
        }
        Ok(())
    }
}
