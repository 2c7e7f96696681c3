//! HTTP server layer
//!
//! Axum server with:
//! - Server-rendered item pages (list/search/create, edit/delete)
//! - JSON item API under `/api`
//! - Request tracing and timeouts
//! - Graceful shutdown

pub mod server;
pub mod error;
pub mod extractors;
pub mod render;
pub mod routes;

pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
pub use error::{ApiError, PageError};
