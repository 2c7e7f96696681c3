//! notesctl CLI - run and check the notes server
//!
//! - `serve`: HTTP server with the item pages and JSON API
//! - `ping`: verify the MongoDB connection settings
//!
//! A `.env` file in the working directory (or a parent) is loaded before
//! the environment is read.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "notesctl",
    author,
    version,
    about = "Small note-taking web server backed by MongoDB",
    long_about = "List, search, create, edit, and delete short notes through a browser. \
                  Items are stored in the `items` collection of a MongoDB database."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server (item pages, JSON API, health check)
    Serve(commands::serve::ServeArgs),
    /// Check that MongoDB is reachable with the current settings
    Ping(commands::ping::PingArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Must run before clap reads env-backed flags
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Ping(args) => commands::run_ping(args).await?,
    }
    Ok(())
}
