//! Client error types.

use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    ServerError { status: u16, message: String },

    /// The gateway answered with an entry in the `errors` array.
    #[error("{}", format_graphql_error(.code, .field, .message))]
    GraphQL {
        code: Option<String>,
        field: Option<String>,
        message: String,
    },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn format_graphql_error(code: &Option<String>, field: &Option<String>, message: &str) -> String {
    match (code, field) {
        (Some(code), Some(field)) => format!("{code} ({field}): {message}"),
        (Some(code), None) => format!("{code}: {message}"),
        _ => message.to_string(),
    }
}
