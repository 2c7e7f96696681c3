//! Connection provider - one MongoDB client per process
//!
//! The first call to [`ConnectionProvider::database`] builds the client and
//! confirms it with a `ping`. Later calls get the same handle back. Callers
//! that arrive while a connection attempt is in flight await that same
//! attempt and share its outcome, success or error.
//!
//! A failed attempt is not memoized: once it settles, the next call starts
//! a fresh one.

use futures::future::{BoxFuture, FutureExt, Shared};
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use tokio::sync::{Mutex, OnceCell};

use crate::config::DbConfig;

/// Connection attempt awaited by every concurrent caller
type Attempt = Shared<BoxFuture<'static, Result<Database, mongodb::error::Error>>>;

/// Lazily connected database handle.
///
/// Build once at startup, wrap in `Arc`, and hand clones to whatever needs
/// the database.
///
/// # Example
///
/// ```ignore
/// let provider = Arc::new(ConnectionProvider::new(DbConfig::from_env()?));
/// let db = provider.database().await?;
/// ```
pub struct ConnectionProvider {
    config: DbConfig,
    database: OnceCell<Database>,
    pending: Mutex<Option<Attempt>>,
}

impl ConnectionProvider {
    /// Create a provider. No I/O happens until the first `database()` call.
    pub fn new(config: DbConfig) -> Self {
        Self {
            config,
            database: OnceCell::new(),
            pending: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &DbConfig {
        &self.config
    }

    /// Whether a connection has been established.
    pub fn is_connected(&self) -> bool {
        self.database.initialized()
    }

    /// Get the database handle, connecting on first use.
    ///
    /// # Errors
    ///
    /// Returns the driver error if the connection string is invalid or the
    /// server does not answer the initial ping.
    pub async fn database(&self) -> Result<&Database, mongodb::error::Error> {
        if let Some(db) = self.database.get() {
            return Ok(db);
        }

        let attempt = self.join_or_start().await;
        let outcome = match attempt.clone().await {
            Ok(db) => Ok(self.database.get_or_init(|| async move { db }).await),
            Err(e) => Err(e),
        };

        // Handle is stored before the attempt is dropped, so no caller
        // can slip in between and start a second connection
        self.finish(&attempt).await;
        outcome
    }

    async fn join_or_start(&self) -> Attempt {
        let mut pending = self.pending.lock().await;
        if let Some(attempt) = pending.as_ref() {
            return attempt.clone();
        }
        // Another caller may have finished while we waited for the lock
        if let Some(db) = self.database.get() {
            return futures::future::ready(Ok(db.clone())).boxed().shared();
        }

        let config = self.config.clone();
        let attempt = async move { establish(&config).await }.boxed().shared();
        *pending = Some(attempt.clone());
        attempt
    }

    async fn finish(&self, attempt: &Attempt) {
        let mut pending = self.pending.lock().await;
        if pending.as_ref().is_some_and(|p| p.ptr_eq(attempt)) {
            *pending = None;
        }
    }
}

async fn establish(config: &DbConfig) -> Result<Database, mongodb::error::Error> {
    tracing::debug!(database = %config.database, "Connecting to MongoDB");

    let mut options = ClientOptions::parse(&config.uri).await?;
    options.app_name = Some(config.app_name.clone());

    let client = Client::with_options(options)?;
    let database = client.database(&config.database);
    database.run_command(doc! { "ping": 1 }).await?;

    tracing::info!(database = %config.database, "MongoDB connection established");
    Ok(database)
}
