//! Conversion of resolver failures into GraphQL errors.

use async_graphql::{ErrorExtensionValues, ErrorExtensions, Response};

use departures_core::storage::VALIDATION_ERROR;

use crate::resolvers::ResolverError;

impl ErrorExtensions for ResolverError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| {
            e.set("code", self.code());
            if let Some(field) = self.field() {
                e.set("field", field);
            }
        })
    }
}

/// Tags argument errors raised by the executor like resolver validation errors.
///
/// Missing, unknown and mistyped arguments are rejected before any resolver
/// runs and carry no extensions of their own. Errors that already have
/// extensions are left alone.
pub(crate) fn tag_argument_errors(mut response: Response) -> Response {
    for error in response.errors.iter_mut().filter(|e| e.extensions.is_none()) {
        let argument = argument_name(&error.message).map(str::to_string);
        if argument.is_none() && !error.message.starts_with("Failed to parse") {
            continue;
        }
        let extensions = error
            .extensions
            .get_or_insert_with(ErrorExtensionValues::default);
        extensions.set("code", VALIDATION_ERROR);
        if let Some(field) = argument {
            extensions.set("field", field);
        }
    }
    response
}

/// The argument an executor message names, as in `argument "capacity"`.
fn argument_name(message: &str) -> Option<&str> {
    message
        .split_once("argument \"")
        .and_then(|(_, rest)| rest.split_once('"'))
        .map(|(name, _)| name)
        .filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use async_graphql::{ServerError, Value};

    use super::*;

    fn response_with(errors: Vec<ServerError>) -> Response {
        let mut response = Response::new(Value::Null);
        response.errors = errors;
        response
    }

    #[test]
    fn test_argument_name() {
        assert_eq!(
            argument_name(r#"Field "putItem" argument "capacity" of type "Mutation" is required but not provided"#),
            Some("capacity")
        );
        assert_eq!(
            argument_name(r#"Invalid value for argument "passenger", expected type "Int""#),
            Some("passenger")
        );
        assert_eq!(argument_name("Unknown field \"foo\""), None);
    }

    #[test]
    fn test_missing_argument_is_tagged() {
        let response = tag_argument_errors(response_with(vec![ServerError::new(
            r#"Field "putItem" argument "capacity" of type "Mutation" is required but not provided"#,
            None,
        )]));

        let body = serde_json::to_value(&response).unwrap();
        assert_eq!(body["errors"][0]["extensions"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["errors"][0]["extensions"]["field"], "capacity");
    }

    #[test]
    fn test_existing_extensions_are_kept() {
        let err = ResolverError::from(departures_core::storage::RepositoryError::NotFound {
            entity_type: "Item",
            id: "t1/bus-1".to_string(),
        });
        let response = tag_argument_errors(response_with(vec![err
            .extend()
            .into_server_error(async_graphql::Pos::default())]));

        let body = serde_json::to_value(&response).unwrap();
        assert_eq!(body["errors"][0]["extensions"]["code"], "NOT_FOUND");
    }

    #[test]
    fn test_unrelated_errors_stay_untagged() {
        let response = tag_argument_errors(response_with(vec![ServerError::new(
            r#"Unknown field "seats" on type "Item""#,
            None,
        )]));

        assert!(response.errors[0].extensions.is_none());
    }
}
