//! departures_client - CLI client for the departures GraphQL gateway.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::DeparturesClient;
pub use error::{ClientError, Result};
