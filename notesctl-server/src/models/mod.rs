//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod item;
pub mod search;
pub mod intent;

pub use validation::ValidationError;
pub use item::{Item, ItemDraft, ItemId, ItemName};
pub use search::SearchTerm;
pub use intent::Intent;
