//! GraphQL schema for departures.
//!
//! ## Schema
//!
//! - **Queries**: `allItems`
//! - **Mutations**: `putItem`, `incrementPassenger`
//!
//! The schema is built once at startup by [`build_schema`] with the item
//! repository attached as schema data.

mod errors;
mod schema;
mod types;

pub use schema::{build_schema, execute, sdl, DeparturesSchema};
