//! Database layer - connection provider and item stores
//!
//! # Design Principles
//!
//! - One memoized client per process, shared through `Arc` - no globals
//! - Handlers see only the [`ItemStore`] trait
//! - Every mutation is a single-document operation - no transactions

pub mod memory;
pub mod provider;
pub mod repos;

pub use memory::MemoryItemStore;
pub use provider::ConnectionProvider;
pub use repos::{DbError, ItemStore, MongoItemStore};
