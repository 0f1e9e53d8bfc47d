//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use departures_core::item::{append_passengers, Item, ItemKey, Passenger};
use departures_core::storage::{ItemRepository, RepositoryError, Result};

/// In-memory storage backend.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    items: Arc<RwLock<HashMap<ItemKey, Item>>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored items.
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }
}

fn not_found(key: &ItemKey) -> RepositoryError {
    RepositoryError::NotFound {
        entity_type: "Item",
        id: key.to_string(),
    }
}

#[async_trait]
impl ItemRepository for InMemoryRepository {
    async fn fetch_all(&self) -> Result<Vec<Item>> {
        let items = self.items.read().await;
        let mut all: Vec<Item> = items.values().cloned().collect();
        // HashMap order is arbitrary; sort by key like a table scan over one partition would.
        all.sort_by(|a, b| (&a.uuid, &a.name).cmp(&(&b.uuid, &b.name)));
        Ok(all)
    }

    async fn get_item(&self, key: &ItemKey) -> Result<Item> {
        let items = self.items.read().await;
        items.get(key).cloned().ok_or_else(|| not_found(key))
    }

    async fn put_item(&self, item: &Item) -> Result<Item> {
        let mut items = self.items.write().await;
        items.insert(item.key(), item.clone());
        Ok(item.clone())
    }

    async fn append_passengers(&self, key: &ItemKey, passengers: &[Passenger]) -> Result<Item> {
        let mut items = self.items.write().await;
        let current = items.remove(key).ok_or_else(|| not_found(key))?;
        let updated = append_passengers(current, passengers);
        items.insert(key.clone(), updated.clone());
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bus(uuid: &str, name: &str) -> Item {
        Item::new(ItemKey::new(uuid, name), "Tokyo", "Osaka", "10:00", 40)
    }

    #[tokio::test]
    async fn test_put_and_get_round_trip() {
        let repo = InMemoryRepository::new();
        let item = bus("t1", "bus-1").with_passengers(
            2,
            vec![Passenger::new("Aiko", "window seat"), Passenger::new("Ren", "")],
        );

        let stored = repo.put_item(&item).await.unwrap();
        let fetched = repo.get_item(&item.key()).await.unwrap();

        assert_eq!(stored, item);
        assert_eq!(fetched, item);
        assert_eq!(fetched.passengers.len(), 2);
    }

    #[tokio::test]
    async fn test_get_nonexistent() {
        let repo = InMemoryRepository::new();

        let err = repo.get_item(&ItemKey::new("t1", "bus-1")).await.unwrap_err();

        assert_eq!(
            err,
            RepositoryError::NotFound {
                entity_type: "Item",
                id: "t1/bus-1".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_put_overwrites_whole_item() {
        let repo = InMemoryRepository::new();
        let original = bus("t1", "bus-1").with_passengers(1, vec![Passenger::new("Aiko", "")]);
        repo.put_item(&original).await.unwrap();

        let replacement = bus("t1", "bus-1");
        repo.put_item(&replacement).await.unwrap();

        let fetched = repo.get_item(&original.key()).await.unwrap();
        assert_eq!(fetched, replacement);
        assert!(fetched.passengers.is_empty());
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_same_uuid_different_name_are_distinct() {
        let repo = InMemoryRepository::new();
        repo.put_item(&bus("t1", "bus-1")).await.unwrap();
        repo.put_item(&bus("t1", "bus-2")).await.unwrap();

        let all = repo.fetch_all().await.unwrap();

        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "bus-1");
        assert_eq!(all[1].name, "bus-2");
    }

    #[tokio::test]
    async fn test_append_passengers_updates_counter_and_list() {
        let repo = InMemoryRepository::new();
        let item = bus("t1", "bus-1").with_passengers(
            2,
            vec![Passenger::new("p0", ""), Passenger::new("p1", "")],
        );
        repo.put_item(&item).await.unwrap();

        let updated = repo
            .append_passengers(
                &item.key(),
                &[Passenger::new("Aiko", ""), Passenger::new("Ren", "")],
            )
            .await
            .unwrap();

        assert_eq!(updated.passenger, 4);
        assert_eq!(updated.passengers.len(), 4);
        assert_eq!(repo.get_item(&item.key()).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_append_nothing_leaves_item_unchanged() {
        let repo = InMemoryRepository::new();
        let item = bus("t1", "bus-1").with_passengers(1, vec![Passenger::new("p0", "")]);
        repo.put_item(&item).await.unwrap();

        let updated = repo.append_passengers(&item.key(), &[]).await.unwrap();

        assert_eq!(updated, item);
    }

    #[tokio::test]
    async fn test_append_to_nonexistent_fails() {
        let repo = InMemoryRepository::new();

        let err = repo
            .append_passengers(&ItemKey::new("t1", "bus-1"), &[Passenger::new("Aiko", "")])
            .await
            .unwrap_err();

        assert!(matches!(err, RepositoryError::NotFound { .. }));
        assert_eq!(repo.len().await, 0);
    }

    #[tokio::test]
    async fn test_concurrent_appends_do_not_lose_updates() {
        let repo = InMemoryRepository::new();
        let item = bus("t1", "bus-1");
        repo.put_item(&item).await.unwrap();

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let repo = repo.clone();
                let key = item.key();
                tokio::spawn(async move {
                    repo.append_passengers(&key, &[Passenger::new(format!("p{i}"), "")])
                        .await
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let fetched = repo.get_item(&item.key()).await.unwrap();
        assert_eq!(fetched.passenger, 20);
        assert_eq!(fetched.passengers.len(), 20);
    }
}
