//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of the item
//! repository using `aws-sdk-dynamodb`. One table holds every item, keyed by
//! `uuid` (partition) and `name` (sort).

mod client;
mod conversions;
mod error;
mod keys;
mod repository;

pub use client::AwsConfig;
pub use repository::DynamoDbRepository;
