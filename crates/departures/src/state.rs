//! Application state shared by all request handlers.

use std::sync::Arc;

use departures_core::storage::ItemRepository;

use crate::config::Config;
use crate::graphql::{build_schema, DeparturesSchema};

/// Name of the storage backend compiled into this binary.
#[cfg(feature = "dynamodb")]
pub const BACKEND: &str = "dynamodb";
#[cfg(all(feature = "inmemory", not(feature = "dynamodb")))]
pub const BACKEND: &str = "inmemory";

/// Shared application state.
///
/// Cheap to clone: the schema holds its data behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Executable schema with the item repository attached.
    pub schema: DeparturesSchema,
    /// Storage backend name, reported by `/healthz`.
    pub backend: &'static str,
    /// Table the DynamoDB backend reads and writes; `None` for the in-memory store.
    pub table: Option<String>,
    /// Serve the GraphiQL IDE on `GET /graphql`.
    pub graphiql_enabled: bool,
}

impl AppState {
    pub fn new(repository: Arc<dyn ItemRepository>, config: &Config) -> Self {
        #[cfg(feature = "dynamodb")]
        let table = Some(config.table_name.clone());
        #[cfg(not(feature = "dynamodb"))]
        let table = None;

        Self {
            schema: build_schema(repository),
            backend: BACKEND,
            table,
            graphiql_enabled: config.graphiql_enabled,
        }
    }
}

#[cfg(test)]
impl AppState {
    /// State backed by an empty in-memory store, plus a handle to that store.
    pub fn in_memory() -> (Self, crate::storage::InMemoryRepository) {
        let store = crate::storage::InMemoryRepository::new();
        let state = Self {
            schema: build_schema(Arc::new(store.clone())),
            backend: "inmemory",
            table: None,
            graphiql_enabled: true,
        };
        (state, store)
    }
}
