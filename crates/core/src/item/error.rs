use thiserror::Error;

/// Errors raised when a put or booking request fails validation.
///
/// Every variant names the argument that was rejected so the caller can
/// report it per field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ItemError {
    #[error("{field} cannot be empty")]
    EmptyKey { field: &'static str },
    #[error("{field} must be a non-negative integer, got {value}")]
    Negative { field: &'static str, value: i64 },
    #[error("{field} must be at most 2147483647, got {value}")]
    TooLarge { field: &'static str, value: i64 },
}

impl ItemError {
    /// The argument name this error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            ItemError::EmptyKey { field }
            | ItemError::Negative { field, .. }
            | ItemError::TooLarge { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_error_display() {
        assert_eq!(
            ItemError::EmptyKey { field: "uuid" }.to_string(),
            "uuid cannot be empty"
        );
        assert_eq!(
            ItemError::Negative {
                field: "capacity",
                value: -3
            }
            .to_string(),
            "capacity must be a non-negative integer, got -3"
        );
    }

    #[test]
    fn test_item_error_field() {
        assert_eq!(ItemError::EmptyKey { field: "name" }.field(), "name");
        assert_eq!(
            ItemError::Negative {
                field: "passenger",
                value: -1
            }
            .field(),
            "passenger"
        );
    }
}
