use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    /// A stored record violates the attribute encoding (corrupt upstream data).
    #[error("Invalid stored value for {field}: {reason}")]
    Decode { field: String, reason: String },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl RepositoryError {
    pub fn decode(field: impl Into<String>, reason: impl Into<String>) -> Self {
        RepositoryError::Decode {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
