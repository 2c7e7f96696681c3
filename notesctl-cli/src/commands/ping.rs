//! Connectivity check against the configured MongoDB

use anyhow::{Context, Result};
use clap::Parser;

use notesctl_server::ConnectionProvider;

use super::DbArgs;

/// Arguments for the ping command
#[derive(Parser, Debug)]
pub struct PingArgs {
    #[command(flatten)]
    pub db: DbArgs,
}

/// Connect once and report the result
pub async fn run_ping(args: PingArgs) -> Result<()> {
    let config = args.db.to_config()?;
    let provider = ConnectionProvider::new(config);

    provider
        .database()
        .await
        .context("Failed to connect to MongoDB")?;

    println!("MongoDB reachable (database: {})", provider.config().database);
    Ok(())
}
