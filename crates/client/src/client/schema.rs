//! Schema introspection.

use serde_json::json;

use super::DeparturesClient;
use crate::error::Result;

/// Standard introspection query, trimmed to what schema tooling reads.
pub const INTROSPECTION_QUERY: &str = r#"query IntrospectionQuery {
  __schema {
    queryType { name }
    mutationType { name }
    subscriptionType { name }
    types { ...FullType }
    directives { name description locations args { ...InputValue } }
  }
}

fragment FullType on __Type {
  kind
  name
  description
  fields(includeDeprecated: true) {
    name
    description
    args { ...InputValue }
    type { ...TypeRef }
    isDeprecated
    deprecationReason
  }
  inputFields { ...InputValue }
  interfaces { ...TypeRef }
  enumValues(includeDeprecated: true) { name description isDeprecated deprecationReason }
  possibleTypes { ...TypeRef }
}

fragment InputValue on __InputValue {
  name
  description
  type { ...TypeRef }
  defaultValue
}

fragment TypeRef on __Type {
  kind
  name
  ofType { kind name ofType { kind name ofType { kind name ofType { kind name } } } }
}"#;

impl DeparturesClient {
    /// Fetch the introspection result of the gateway schema.
    pub async fn introspect(&self) -> Result<serde_json::Value> {
        self.execute(INTROSPECTION_QUERY, json!({})).await
    }
}
