//! Pure functions for mapping repository errors to query-layer error codes.
//!
//! Resolver failures are reported inside the GraphQL response rather than
//! through HTTP status codes, so each [`RepositoryError`] variant maps to a
//! stable `extensions.code` string instead.

use super::RepositoryError;

/// Code for arguments rejected before any store access.
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
/// Code for a point lookup or update on an absent key.
pub const NOT_FOUND: &str = "NOT_FOUND";
/// Code for stored data that violates the attribute encoding.
pub const DECODE_ERROR: &str = "DECODE_ERROR";
/// Code for connectivity, auth or throttling failures talking to the store.
pub const STORE_ERROR: &str = "STORE_ERROR";

/// Maps a [`RepositoryError`] to its query-layer error code.
///
/// - `NotFound` -> `NOT_FOUND`
/// - `Decode` -> `DECODE_ERROR`
/// - `ConnectionFailed` -> `STORE_ERROR`
/// - `QueryFailed` -> `STORE_ERROR`
///
/// # Examples
///
/// ```
/// use departures_core::storage::{repository_error_code, RepositoryError};
///
/// let error = RepositoryError::NotFound {
///     entity_type: "Item",
///     id: "t1/bus-1".to_string(),
/// };
/// assert_eq!(repository_error_code(&error), "NOT_FOUND");
/// ```
pub fn repository_error_code(error: &RepositoryError) -> &'static str {
    match error {
        RepositoryError::NotFound { .. } => NOT_FOUND,
        RepositoryError::Decode { .. } => DECODE_ERROR,
        RepositoryError::ConnectionFailed(_) => STORE_ERROR,
        RepositoryError::QueryFailed(_) => STORE_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_not_found() {
        let error = RepositoryError::NotFound {
            entity_type: "Item",
            id: "t1/bus-1".to_string(),
        };
        assert_eq!(repository_error_code(&error), NOT_FOUND);
    }

    #[test]
    fn test_decode_maps_to_decode_error() {
        let error = RepositoryError::decode("Passenger", "not a number");
        assert_eq!(repository_error_code(&error), DECODE_ERROR);
    }

    #[test]
    fn test_connection_failed_maps_to_store_error() {
        let error = RepositoryError::ConnectionFailed("dispatch failure".to_string());
        assert_eq!(repository_error_code(&error), STORE_ERROR);
    }

    #[test]
    fn test_query_failed_maps_to_store_error() {
        let error = RepositoryError::QueryFailed("Table not found".to_string());
        assert_eq!(repository_error_code(&error), STORE_ERROR);
    }
}
