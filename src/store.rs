//! Persistence seam between the handlers and the items table.
//!
//! Handlers are generic over [`Store`] so they can run against DynamoDB in
//! production and against an in-memory map in tests. Every method is a single
//! key-based call; the store gives no atomicity across calls, so a handler
//! that checks existence and then mutates can race with another invocation.

/// DynamoDB-backed store.
pub mod dynamo;

#[cfg(test)]
pub(crate) mod memory;

use crate::{
    Result,
    item::{Item, ItemPatch, Timestamp},
};

use async_trait::async_trait;

/// Item persistence operations.
#[async_trait]
pub trait Store: Send + Sync {
    /// Fetch one item, `None` when absent.
    async fn get_item(&self, id: &str) -> Result<Option<Item>>;

    /// Write an item, replacing any item with the same identifier.
    async fn put_item(&self, item: &Item) -> Result<()>;

    /// Apply a patch and refresh `updated_at`.
    async fn update_item(&self, id: &str, patch: &ItemPatch, updated_at: Timestamp) -> Result<()>;

    /// Remove an item. Removing an absent item is not an error.
    async fn delete_item(&self, id: &str) -> Result<()>;

    /// Every item in the table, in no particular order.
    async fn scan_items(&self) -> Result<Vec<Item>>;
}
