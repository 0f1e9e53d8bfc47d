use async_trait::async_trait;

use crate::item::{Item, ItemKey, Passenger};

use super::Result;

/// Repository for departure items.
///
/// Implementations hold no mutable state besides their client handle and
/// must be safe to share across concurrent requests.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Returns every stored item.
    ///
    /// Missing attributes decode to zero values; a malformed attribute fails
    /// the whole call and no partial result is returned.
    async fn fetch_all(&self) -> Result<Vec<Item>>;

    /// Gets an item by its composite key, failing with `NotFound` if absent.
    async fn get_item(&self, key: &ItemKey) -> Result<Item>;

    /// Stores an item, replacing any record at the same key.
    async fn put_item(&self, item: &Item) -> Result<Item>;

    /// Appends bookings to an existing item and returns the updated item.
    ///
    /// The counter and the list change in a single store operation. An empty
    /// slice leaves both unchanged but still fails with `NotFound` for an
    /// absent key.
    async fn append_passengers(&self, key: &ItemKey, passengers: &[Passenger]) -> Result<Item>;
}
