//! Query and mutation resolvers.
//!
//! Plain async functions over an injected [`ItemRepository`]. Argument shape
//! and presence are checked by the GraphQL executor before these run; the
//! resolvers only enforce domain rules and delegate to the store.

use thiserror::Error;
use tracing::{debug, warn};

use departures_core::item::{IncrementPassengerRequest, Item, ItemError, PutItemRequest};
use departures_core::storage::{
    repository_error_code, ItemRepository, RepositoryError, VALIDATION_ERROR,
};

/// Failure of a resolver call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolverError {
    #[error(transparent)]
    Validation(#[from] ItemError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ResolverError {
    /// Stable error code reported in `extensions.code`.
    pub fn code(&self) -> &'static str {
        match self {
            ResolverError::Validation(_) => VALIDATION_ERROR,
            ResolverError::Repository(err) => repository_error_code(err),
        }
    }

    /// The argument or stored attribute the error refers to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            ResolverError::Validation(err) => Some(err.field()),
            ResolverError::Repository(RepositoryError::Decode { field, .. }) => Some(field.as_str()),
            ResolverError::Repository(_) => None,
        }
    }
}

/// Returns every stored item.
pub async fn all_items(repo: &dyn ItemRepository) -> Result<Vec<Item>, ResolverError> {
    let items = repo.fetch_all().await.map_err(|e| {
        warn!(error = %e, "allItems failed");
        e
    })?;
    debug!(count = items.len(), "allItems resolved");
    Ok(items)
}

/// Validates and stores a complete item, replacing any previous record.
pub async fn put_item(
    repo: &dyn ItemRepository,
    request: PutItemRequest,
) -> Result<Item, ResolverError> {
    let item = request.into_item()?;
    warn_if_overbooked(&item);

    let stored = repo.put_item(&item).await.map_err(|e| {
        warn!(key = %item.key(), error = %e, "putItem failed");
        e
    })?;
    Ok(stored)
}

/// Appends bookings to an existing item and bumps its counter.
pub async fn increment_passenger(
    repo: &dyn ItemRepository,
    request: IncrementPassengerRequest,
) -> Result<Item, ResolverError> {
    let (key, passengers) = request.into_parts()?;

    let updated = repo
        .append_passengers(&key, &passengers)
        .await
        .map_err(|e| {
            warn!(key = %key, error = %e, "incrementPassenger failed");
            e
        })?;
    warn_if_overbooked(&updated);
    Ok(updated)
}

fn warn_if_overbooked(item: &Item) {
    if item.is_overbooked() {
        warn!(
            key = %item.key(),
            capacity = item.capacity,
            passenger = item.passenger,
            "Departure is overbooked"
        );
    }
}

#[cfg(test)]
mod tests {
    use departures_core::item::{ItemKey, Passenger};

    use super::*;
    use crate::storage::InMemoryRepository;

    fn put_request(uuid: &str, name: &str) -> PutItemRequest {
        PutItemRequest {
            uuid: uuid.to_string(),
            name: name.to_string(),
            departure: "Tokyo".to_string(),
            destination: "Osaka".to_string(),
            time: "10:00".to_string(),
            capacity: 40,
            passenger: 0,
            passengers: vec![],
        }
    }

    #[tokio::test]
    async fn test_all_items_empty_store() {
        let repo = InMemoryRepository::new();

        let items = all_items(&repo).await.unwrap();

        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_put_item_stores_and_returns_item() {
        let repo = InMemoryRepository::new();

        let stored = put_item(&repo, put_request("t1", "bus-1")).await.unwrap();

        assert_eq!(stored.capacity, 40);
        assert_eq!(all_items(&repo).await.unwrap(), vec![stored]);
    }

    #[tokio::test]
    async fn test_put_item_validation_skips_store() {
        let repo = InMemoryRepository::new();
        let mut request = put_request("t1", "bus-1");
        request.capacity = -1;

        let err = put_item(&repo, request).await.unwrap_err();

        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert_eq!(err.field(), Some("capacity"));
        assert_eq!(repo.len().await, 0);
    }

    #[tokio::test]
    async fn test_put_item_accepts_overbooking() {
        let repo = InMemoryRepository::new();
        let mut request = put_request("t1", "bus-1");
        request.capacity = 1;
        request.passenger = 3;

        let stored = put_item(&repo, request).await.unwrap();

        assert!(stored.is_overbooked());
    }

    #[tokio::test]
    async fn test_increment_passenger_appends() {
        let repo = InMemoryRepository::new();
        put_item(&repo, put_request("t1", "bus-1")).await.unwrap();

        let request = IncrementPassengerRequest::new(
            ItemKey::new("t1", "bus-1"),
            vec![Passenger::new("Aiko", ""), Passenger::new("Ren", "aisle")],
        );
        let updated = increment_passenger(&repo, request).await.unwrap();

        assert_eq!(updated.passenger, 2);
        assert_eq!(updated.passengers[1], Passenger::new("Ren", "aisle"));
    }

    #[tokio::test]
    async fn test_increment_passenger_not_found() {
        let repo = InMemoryRepository::new();
        let request = IncrementPassengerRequest::new(
            ItemKey::new("t1", "bus-1"),
            vec![Passenger::new("Aiko", "")],
        );

        let err = increment_passenger(&repo, request).await.unwrap_err();

        assert_eq!(err.code(), "NOT_FOUND");
        assert_eq!(err.field(), None);
    }

    #[tokio::test]
    async fn test_increment_passenger_rejects_empty_name() {
        let repo = InMemoryRepository::new();
        let request = IncrementPassengerRequest::new(ItemKey::new("t1", ""), vec![]);

        let err = increment_passenger(&repo, request).await.unwrap_err();

        assert_eq!(err, ResolverError::Validation(ItemError::EmptyKey { field: "name" }));
    }

    #[test]
    fn test_decode_error_reports_field() {
        let err = ResolverError::from(RepositoryError::decode("Capacity", "not a number"));

        assert_eq!(err.code(), "DECODE_ERROR");
        assert_eq!(err.field(), Some("Capacity"));
    }
}
