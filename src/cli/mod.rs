//! CLI module for Basilica.
//!
//! Subcommands:
//! - `init`: Create or migrate the cache tables
//! - `serve`: Run the classification HTTP server
//! - `classify`: Classify titles once and print the response
//! - `build-map`: Rebuild the static class map artifact
//! - `check-chain`: Trace the subclass-of walk for one class
//! - `cache`: Clear or purge the caches

mod build_map;
mod cache;
mod check_chain;
mod classify;
mod init;
mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use cache::CacheCommand;

/// Basilica - topic category resolver
#[derive(Parser)]
#[command(name = "basilica")]
#[command(about = "Resolve encyclopedia articles to blockable topic categories")]
#[command(version)]
pub struct App {
    /// Run in verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create or migrate the PostgreSQL cache tables
    Init,

    /// Run the classification HTTP server
    Serve {
        /// Host address to bind to (defaults to [server] host)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (defaults to [server] port)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Classify titles and print the response JSON
    Classify {
        /// Category to block; repeat for several
        #[arg(short, long = "block", required = true)]
        blocked: Vec<String>,

        /// Article titles
        #[arg(required = true)]
        titles: Vec<String>,
    },

    /// Rebuild the static class map from the remote closure queries
    BuildMap {
        /// Output path (defaults to [resolver] class_map_path)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the subclass-of levels walked from a class
    CheckChain {
        /// Class id, e.g. Q12345
        class_id: String,
    },

    /// Cache maintenance
    Cache {
        #[command(subcommand)]
        command: CacheCommand,
    },
}

impl App {
    /// Run the CLI application.
    pub async fn run(self) -> color_eyre::Result<()> {
        match self.command {
            Command::Init => self.run_init().await,
            Command::Serve { ref host, port } => self.run_serve(host.as_deref(), port).await,
            Command::Classify {
                ref blocked,
                ref titles,
            } => self.run_classify(titles, blocked).await,
            Command::BuildMap { ref output } => self.run_build_map(output.as_deref()).await,
            Command::CheckChain { ref class_id } => self.run_check_chain(class_id).await,
            Command::Cache { ref command } => command.run().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_args() {
        let app = App::parse_from([
            "basilica",
            "classify",
            "--block",
            "History",
            "-b",
            "People",
            "Battle of Hastings",
            "Basil of Caesarea",
        ]);
        match app.command {
            Command::Classify { blocked, titles } => {
                assert_eq!(blocked, vec!["History", "People"]);
                assert_eq!(titles, vec!["Battle of Hastings", "Basil of Caesarea"]);
            }
            _ => panic!("expected classify"),
        }
    }

    #[test]
    fn test_verbose_is_global() {
        let app = App::parse_from(["basilica", "cache", "purge", "-v"]);
        assert!(app.verbose);
    }
}
