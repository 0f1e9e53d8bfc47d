//! HTTP client for the departures gateway.

pub mod health;
pub mod items;
pub mod schema;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};

/// Path of the GraphQL endpoint.
const GRAPHQL_PATH: &str = "/graphql";

/// HTTP client for the departures gateway.
#[derive(Debug, Clone)]
pub struct DeparturesClient {
    client: reqwest::Client,
    base_url: String,
}

/// Body of a GraphQL request.
#[derive(Debug, Serialize)]
struct GraphQLRequest<'a> {
    query: &'a str,
    variables: serde_json::Value,
}

/// Body of a GraphQL response.
#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQLError>,
}

/// One entry of the `errors` array.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQLError {
    pub message: String,
    #[serde(default)]
    pub extensions: Option<serde_json::Value>,
}

impl GraphQLError {
    fn extension(&self, key: &str) -> Option<String> {
        self.extensions
            .as_ref()
            .and_then(|ext| ext.get(key))
            .and_then(|v| v.as_str())
            .map(str::to_string)
    }
}

impl<T> GraphQLResponse<T> {
    /// Returns `data`, or the first reported error.
    pub fn into_data(self) -> Result<T> {
        if let Some(error) = self.errors.into_iter().next() {
            return Err(ClientError::GraphQL {
                code: error.extension("code"),
                field: error.extension("field"),
                message: error.message,
            });
        }
        self.data
            .ok_or_else(|| ClientError::InvalidResponse("response has no data".to_string()))
    }
}

impl DeparturesClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Run a GraphQL document and decode its `data`.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T> {
        let response = self
            .client
            .post(self.url(GRAPHQL_PATH))
            .json(&GraphQLRequest { query, variables })
            .send()
            .await?;
        let body: GraphQLResponse<T> = self.handle_response(response).await?;
        body.into_data()
    }

    /// Handle error responses.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            response.json().await.map_err(ClientError::from)
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = DeparturesClient::new("http://localhost:3000/");
        assert_eq!(client.url(GRAPHQL_PATH), "http://localhost:3000/graphql");
    }

    #[test]
    fn test_into_data_returns_data() {
        let body: GraphQLResponse<serde_json::Value> =
            serde_json::from_value(json!({ "data": { "allItems": [] } })).unwrap();

        assert_eq!(body.into_data().unwrap(), json!({ "allItems": [] }));
    }

    #[test]
    fn test_into_data_surfaces_first_error() {
        let body: GraphQLResponse<serde_json::Value> = serde_json::from_value(json!({
            "data": null,
            "errors": [{
                "message": "Item not found: t1/bus-1",
                "extensions": { "code": "NOT_FOUND" }
            }]
        }))
        .unwrap();

        match body.into_data().unwrap_err() {
            ClientError::GraphQL {
                code,
                field,
                message,
            } => {
                assert_eq!(code.as_deref(), Some("NOT_FOUND"));
                assert_eq!(field, None);
                assert_eq!(message, "Item not found: t1/bus-1");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_into_data_without_data_or_errors() {
        let body: GraphQLResponse<serde_json::Value> =
            serde_json::from_value(json!({ "data": null })).unwrap();

        assert!(matches!(
            body.into_data().unwrap_err(),
            ClientError::InvalidResponse(_)
        ));
    }
}
