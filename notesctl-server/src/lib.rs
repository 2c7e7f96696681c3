//! notesctl-server: HTTP server for a small note store
//!
//! Lists, searches, creates, edits, and deletes short text records
//! ("items") kept in a MongoDB collection. Pages are plain server-rendered
//! HTML; the same data is also available as JSON under `/api`.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{ConfigError, DbConfig};
pub use db::{ConnectionProvider, DbError, ItemStore, MemoryItemStore, MongoItemStore};
pub use http::{run_server, AppState, ServerConfig, ServerError};
