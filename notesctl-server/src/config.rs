//! Database configuration - environment loading
//!
//! Configuration is loaded once at startup from environment variables:
//! - `MONGODB_URI`: connection string (required)
//! - `MONGODB_DB`: database name (default: remixdb)
//! - `MONGODB_APP_NAME`: client name reported to the server (default: notesctl)

/// Connection string variable
pub const MONGODB_URI: &str = "MONGODB_URI";

/// Database name variable
pub const MONGODB_DB: &str = "MONGODB_DB";

/// Client application name variable
pub const MONGODB_APP_NAME: &str = "MONGODB_APP_NAME";

/// Database used when `MONGODB_DB` is unset
pub const DEFAULT_DATABASE: &str = "remixdb";

const DEFAULT_APP_NAME: &str = "notesctl";

/// Configuration errors. These are fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Please define the {0} environment variable")]
    MissingVar(&'static str),
}

/// MongoDB connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    /// Connection target, e.g. `mongodb://localhost:27017`
    pub uri: String,
    /// Database holding the `items` collection
    pub database: String,
    pub app_name: String,
}

impl DbConfig {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary variable lookup.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let uri = get(MONGODB_URI).ok_or(ConfigError::MissingVar(MONGODB_URI))?;
        let database = get(MONGODB_DB).unwrap_or_else(|| DEFAULT_DATABASE.to_string());
        let app_name = get(MONGODB_APP_NAME).unwrap_or_else(|| DEFAULT_APP_NAME.to_string());

        Ok(Self {
            uri,
            database,
            app_name,
        })
    }
}
