//! Item storage seam and the MongoDB repository
//!
//! Handlers talk to [`ItemStore`]; the production implementation is
//! [`MongoItemStore`], tests and `--memory` runs use
//! [`MemoryItemStore`](crate::db::MemoryItemStore).

pub mod items;

use async_trait::async_trait;

use crate::models::{Item, ItemDraft, ItemId, SearchTerm};

pub use items::MongoItemStore;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    pub fn item_not_found(id: &ItemId) -> Self {
        Self::NotFound {
            resource: "item",
            id: id.to_string(),
        }
    }
}

/// Persistence operations for items.
///
/// Implementations must be safe to share across concurrent requests.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// List items in insertion order, optionally filtered by name.
    async fn list(&self, search: Option<&SearchTerm>) -> Result<Vec<Item>, DbError>;

    /// Fetch one item. `Ok(None)` when no item has this id.
    async fn get(&self, id: &ItemId) -> Result<Option<Item>, DbError>;

    /// Persist a new item and return it with its assigned id.
    async fn create(&self, draft: ItemDraft) -> Result<Item, DbError>;

    /// Replace name and description of an existing item.
    ///
    /// Returns [`DbError::NotFound`] when the id matches nothing.
    async fn update(&self, id: &ItemId, draft: ItemDraft) -> Result<Item, DbError>;

    /// Remove an item (idempotent). Returns whether anything was deleted.
    async fn delete(&self, id: &ItemId) -> Result<bool, DbError>;

    /// Check that the backing store is reachable.
    async fn ping(&self) -> Result<(), DbError>;
}
