//! GraphQL endpoint handlers.

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::graphql::execute;
use crate::state::AppState;

/// POST /graphql - Execute a query or mutation.
///
/// Resolver failures are reported in the `errors` array of a 200 response.
pub async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    execute(&state.schema, req.into_inner()).await.into()
}

/// GET /graphql - GraphiQL IDE, or 404 when disabled.
#[axum::debug_handler]
pub async fn graphiql(State(state): State<AppState>) -> Response {
    if !state.graphiql_enabled {
        return StatusCode::NOT_FOUND.into_response();
    }
    Html(GraphiQLSource::build().endpoint("/graphql").finish()).into_response()
}
