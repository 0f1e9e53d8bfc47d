//! Query and mutation roots.

use std::sync::Arc;

use async_graphql::{
    Context, EmptySubscription, ErrorExtensions, Object, Request, Response, Result, Schema,
};

use departures_core::item::{IncrementPassengerRequest, PutItemRequest};
use departures_core::storage::ItemRepository;

use super::errors::tag_argument_errors;
use super::types::{passengers_from_input, ItemNode, PassengerInput};
use crate::resolvers;

/// The departures GraphQL schema.
pub type DeparturesSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the schema with `repository` as the store every resolver uses.
pub fn build_schema(repository: Arc<dyn ItemRepository>) -> DeparturesSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(repository)
        .finish()
}

/// SDL of the schema, for printing without a store.
pub fn sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}

/// Executes `request`, reporting rejected arguments as `VALIDATION_ERROR`.
pub async fn execute(schema: &DeparturesSchema, request: impl Into<Request>) -> Response {
    tag_argument_errors(schema.execute(request).await)
}

fn repository<'a>(ctx: &Context<'a>) -> Result<&'a Arc<dyn ItemRepository>> {
    ctx.data::<Arc<dyn ItemRepository>>()
}

pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// Every stored departure.
    async fn all_items(&self, ctx: &Context<'_>) -> Result<Vec<ItemNode>> {
        let repo = repository(ctx)?;
        let items = resolvers::all_items(repo.as_ref())
            .await
            .map_err(|e| e.extend())?;
        items
            .into_iter()
            .map(|item| ItemNode::try_from(item).map_err(|e| e.extend()))
            .collect()
    }
}

pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Creates or replaces the departure at `(uuid, name)`.
    #[allow(clippy::too_many_arguments)]
    async fn put_item(
        &self,
        ctx: &Context<'_>,
        uuid: String,
        name: String,
        departure: String,
        destination: String,
        time: String,
        capacity: i32,
        passenger: i32,
        passengers: Option<Vec<PassengerInput>>,
    ) -> Result<ItemNode> {
        let repo = repository(ctx)?;
        let request = PutItemRequest {
            uuid,
            name,
            departure,
            destination,
            time,
            capacity: i64::from(capacity),
            passenger: i64::from(passenger),
            passengers: passengers_from_input(passengers),
        };

        let item = resolvers::put_item(repo.as_ref(), request)
            .await
            .map_err(|e| e.extend())?;
        ItemNode::try_from(item).map_err(|e| e.extend())
    }

    /// Books passengers on an existing departure.
    async fn increment_passenger(
        &self,
        ctx: &Context<'_>,
        uuid: String,
        name: String,
        passengers: Option<Vec<PassengerInput>>,
    ) -> Result<ItemNode> {
        let repo = repository(ctx)?;
        let request = IncrementPassengerRequest {
            uuid,
            name,
            passengers: passengers_from_input(passengers),
        };

        let item = resolvers::increment_passenger(repo.as_ref(), request)
            .await
            .map_err(|e| e.extend())?;
        ItemNode::try_from(item).map_err(|e| e.extend())
    }
}
