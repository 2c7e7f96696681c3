//! Item model and its validated parts
//!
//! An item is a named note with an optional description. The id is
//! assigned by the store on creation and never changes.

use std::fmt;

use mongodb::bson::oid::ObjectId;
use serde::{Serialize, Serializer};

use super::ValidationError;

/// Store-assigned item identifier.
///
/// Rendered as the 24-character hex form of a MongoDB ObjectId.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(ObjectId);

impl ItemId {
    /// Allocate a fresh identifier.
    pub fn generate() -> Self {
        Self(ObjectId::new())
    }

    /// Parse the hex form produced by [`ItemId`]'s `Display`.
    ///
    /// # Example
    /// ```
    /// use notesctl_server::models::ItemId;
    ///
    /// assert!(ItemId::parse("65a1f0c2e4b0a1b2c3d4e5f6").is_ok());
    /// assert!(ItemId::parse("not-an-id").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        ObjectId::parse_str(s.trim())
            .map(Self)
            .map_err(|_| ValidationError::InvalidFormat {
                field: "id",
                reason: "must be a 24-character hex object id",
            })
    }

    pub fn as_object_id(&self) -> ObjectId {
        self.0
    }
}

impl From<ObjectId> for ItemId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_hex())
    }
}

impl Serialize for ItemId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_hex())
    }
}

/// Validated item name (non-blank, trimmed)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemName(String);

impl ItemName {
    /// Create a new item name.
    ///
    /// # Rules
    /// - Surrounding whitespace is trimmed
    /// - Must not be empty after trimming
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validated create/update payload.
///
/// The description is always a string here; an absent field becomes `""`
/// so the store never persists a missing description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: ItemName,
    pub description: String,
}

impl ItemDraft {
    /// Validate raw submission fields.
    ///
    /// A missing `name` field is a malformed submission; a present but blank
    /// one is an empty-field error.
    pub fn new(name: Option<&str>, description: Option<&str>) -> Result<Self, ValidationError> {
        let name = ItemName::new(name.ok_or(ValidationError::InvalidForm)?)?;
        let description = description.map(str::trim).unwrap_or_default();

        Ok(Self {
            name,
            description: description.to_owned(),
        })
    }
}

/// A persisted item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
}

impl Item {
    pub fn from_draft(id: ItemId, draft: ItemDraft) -> Self {
        Self {
            id,
            name: draft.name.into_string(),
            description: draft.description,
        }
    }
}
