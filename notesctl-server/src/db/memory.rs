//! In-memory [`ItemStore`] for tests and database-less local runs.
//!
//! Items sit in a `BTreeMap` keyed by id behind a tokio `RwLock`. Ids are
//! fresh ObjectIds, which sort by creation time within a process, so map
//! order matches the insertion order the MongoDB store returns.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{DbError, ItemStore};
use crate::models::{Item, ItemDraft, ItemId, SearchTerm};

/// Process-local item store
pub struct MemoryItemStore {
    items: RwLock<BTreeMap<ItemId, Item>>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(BTreeMap::new()),
        }
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

impl Default for MemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn list(&self, search: Option<&SearchTerm>) -> Result<Vec<Item>, DbError> {
        let items = self.items.read().await;
        Ok(items
            .values()
            .filter(|item| search.map_or(true, |term| term.matches(&item.name)))
            .cloned()
            .collect())
    }

    async fn get(&self, id: &ItemId) -> Result<Option<Item>, DbError> {
        Ok(self.items.read().await.get(id).cloned())
    }

    async fn create(&self, draft: ItemDraft) -> Result<Item, DbError> {
        let item = Item::from_draft(ItemId::generate(), draft);
        self.items.write().await.insert(item.id, item.clone());
        Ok(item)
    }

    async fn update(&self, id: &ItemId, draft: ItemDraft) -> Result<Item, DbError> {
        let mut items = self.items.write().await;
        let slot = items.get_mut(id).ok_or_else(|| DbError::item_not_found(id))?;
        *slot = Item::from_draft(*id, draft);
        Ok(slot.clone())
    }

    async fn delete(&self, id: &ItemId) -> Result<bool, DbError> {
        Ok(self.items.write().await.remove(id).is_some())
    }

    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }
}
