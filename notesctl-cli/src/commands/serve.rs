//! HTTP server command
//!
//! Runs the notes server against MongoDB, or against an in-memory store
//! with `--memory`.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use notesctl_server::http::{run_server, ServerConfig};
use notesctl_server::{ConnectionProvider, ItemStore, MemoryItemStore, MongoItemStore};

use super::DbArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:3030)
    #[arg(long, short = 'b', default_value = "127.0.0.1:3030")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Keep items in memory instead of MongoDB (lost on exit)
    #[arg(long)]
    pub memory: bool,

    #[command(flatten)]
    pub db: DbArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let store: Arc<dyn ItemStore> = if args.memory {
        tracing::warn!("Using in-memory store - items are lost on exit");
        Arc::new(MemoryItemStore::new())
    } else {
        // Missing MONGODB_URI stops here, before anything binds
        let config = args.db.to_config()?;
        tracing::info!(database = %config.database, "Using MongoDB store");

        let provider = Arc::new(ConnectionProvider::new(config));
        spawn_warm_up(provider.clone());
        Arc::new(MongoItemStore::new(provider))
    };

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
        request_timeout: Duration::from_secs(args.timeout),
    };

    // Run server (blocks until shutdown)
    run_server(store, config).await.context("Server error")?;

    Ok(())
}

/// Start connecting in the background so the first request does not pay
/// for it. Requests arriving earlier wait on the same attempt.
fn spawn_warm_up(provider: Arc<ConnectionProvider>) {
    tokio::spawn(async move {
        if let Err(e) = provider.database().await {
            tracing::warn!("MongoDB not reachable yet, will retry on first request: {}", e);
        }
    });
}
