//! Item repository on MongoDB
//!
//! Documents live in the `items` collection as
//! `{ _id: ObjectId, name: string, description: string }`. Older documents
//! may lack `description` or hold `null`; reads turn both into `""` and
//! writes always store a string.

use std::sync::Arc;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Document};
use mongodb::Collection;
use serde::{Deserialize, Serialize};

use super::{DbError, ItemStore};
use crate::db::ConnectionProvider;
use crate::models::{Item, ItemDraft, ItemId, SearchTerm};

/// Collection holding item documents
pub const ITEMS_COLLECTION: &str = "items";

/// Item document as stored
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ItemDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    name: String,
    #[serde(default)]
    description: Option<String>,
}

impl From<ItemDocument> for Item {
    fn from(d: ItemDocument) -> Self {
        Self {
            id: ItemId::from(d.id),
            name: d.name,
            description: d.description.unwrap_or_default(),
        }
    }
}

/// Build the name filter for a list query.
fn list_filter(search: Option<&SearchTerm>) -> Document {
    match search {
        Some(term) => doc! {
            "name": { "$regex": term.to_pattern(), "$options": "i" }
        },
        None => doc! {},
    }
}

/// MongoDB-backed item store
#[derive(Clone)]
pub struct MongoItemStore {
    provider: Arc<ConnectionProvider>,
}

impl MongoItemStore {
    pub fn new(provider: Arc<ConnectionProvider>) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &Arc<ConnectionProvider> {
        &self.provider
    }

    async fn collection(&self) -> Result<Collection<ItemDocument>, DbError> {
        let db = self.provider.database().await?;
        Ok(db.collection::<ItemDocument>(ITEMS_COLLECTION))
    }
}

#[async_trait]
impl ItemStore for MongoItemStore {
    async fn list(&self, search: Option<&SearchTerm>) -> Result<Vec<Item>, DbError> {
        let cursor = self
            .collection()
            .await?
            .find(list_filter(search))
            .sort(doc! { "_id": 1 })
            .await?;

        let docs: Vec<ItemDocument> = cursor.try_collect().await?;
        tracing::debug!(count = docs.len(), search = ?search.map(SearchTerm::as_str), "Listed items");

        Ok(docs.into_iter().map(Item::from).collect())
    }

    async fn get(&self, id: &ItemId) -> Result<Option<Item>, DbError> {
        let found = self
            .collection()
            .await?
            .find_one(doc! { "_id": id.as_object_id() })
            .await?;

        Ok(found.map(Item::from))
    }

    async fn create(&self, draft: ItemDraft) -> Result<Item, DbError> {
        let item = Item::from_draft(ItemId::generate(), draft);
        let document = ItemDocument {
            id: item.id.as_object_id(),
            name: item.name.clone(),
            description: Some(item.description.clone()),
        };

        self.collection().await?.insert_one(&document).await?;
        tracing::debug!(id = %item.id, "Created item");

        Ok(item)
    }

    async fn update(&self, id: &ItemId, draft: ItemDraft) -> Result<Item, DbError> {
        let item = Item::from_draft(*id, draft);

        let result = self
            .collection()
            .await?
            .update_one(
                doc! { "_id": id.as_object_id() },
                doc! { "$set": { "name": item.name.as_str(), "description": item.description.as_str() } },
            )
            .await?;

        if result.matched_count == 0 {
            return Err(DbError::item_not_found(id));
        }

        tracing::debug!(id = %id, "Updated item");
        Ok(item)
    }

    async fn delete(&self, id: &ItemId) -> Result<bool, DbError> {
        let result = self
            .collection()
            .await?
            .delete_one(doc! { "_id": id.as_object_id() })
            .await?;

        tracing::debug!(id = %id, deleted = result.deleted_count, "Deleted item");
        Ok(result.deleted_count > 0)
    }

    async fn ping(&self) -> Result<(), DbError> {
        // A cold provider pings while connecting
        let was_connected = self.provider.is_connected();
        let db = self.provider.database().await?;
        if was_connected {
            db.run_command(doc! { "ping": 1 }).await?;
        }
        Ok(())
    }
}
