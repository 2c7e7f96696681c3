//! Command implementations for notesctl CLI

pub mod ping;
pub mod serve;

pub use ping::run_ping;
pub use serve::run_serve;

use anyhow::Result;
use clap::Args;
use notesctl_server::config::{MONGODB_DB, MONGODB_URI};
use notesctl_server::DbConfig;

/// Database connection flags shared by commands that talk to MongoDB
#[derive(Args, Debug, Clone)]
pub struct DbArgs {
    /// MongoDB connection string
    #[arg(long, env = "MONGODB_URI", hide_env_values = true)]
    pub mongodb_uri: Option<String>,

    /// Database name (default: remixdb)
    #[arg(long, env = "MONGODB_DB")]
    pub mongodb_db: Option<String>,
}

impl DbArgs {
    /// Resolve flags (and their env fallbacks) into a validated config.
    pub fn to_config(&self) -> Result<DbConfig> {
        let config = DbConfig::from_lookup(|key| match key {
            MONGODB_URI => self.mongodb_uri.clone(),
            MONGODB_DB => self.mongodb_db.clone(),
            other => std::env::var(other).ok(),
        })?;
        Ok(config)
    }
}
