//! Functional core for the departures gateway.
//!
//! Pure domain types, validation, and the repository contract. Nothing in
//! this crate performs I/O; storage backends and the GraphQL surface live in
//! the `departures` binary crate.

pub mod item;
pub mod storage;
