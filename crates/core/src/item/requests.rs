//! Request types for the put and booking mutations.
//!
//! These carry arguments exactly as the query layer received them (signed
//! integers, optional passenger lists) and turn them into validated domain
//! values. Following the Functional Core pattern, these are pure data types
//! with no I/O.

use serde::{Deserialize, Serialize};

use super::error::ItemError;
use super::operations::{non_negative, require_key};
use super::types::{Item, ItemKey, Passenger};

/// Arguments of a `putItem` mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PutItemRequest {
    pub uuid: String,
    pub name: String,
    pub departure: String,
    pub destination: String,
    pub time: String,
    pub capacity: i64,
    pub passenger: i64,
    #[serde(default)]
    pub passengers: Vec<Passenger>,
}

impl PutItemRequest {
    /// Validate the arguments and build the item to store.
    ///
    /// The returned item is a full replacement: nothing from a previously
    /// stored record at the same key is merged in.
    pub fn into_item(self) -> Result<Item, ItemError> {
        let key = require_key(&self.uuid, &self.name)?;
        let capacity = non_negative("capacity", self.capacity)?;
        let passenger = non_negative("passenger", self.passenger)?;

        Ok(Item::new(
            key,
            self.departure,
            self.destination,
            self.time,
            capacity,
        )
        .with_passengers(passenger, self.passengers))
    }
}

/// Arguments of an `incrementPassenger` mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncrementPassengerRequest {
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub passengers: Vec<Passenger>,
}

impl IncrementPassengerRequest {
    pub fn new(key: ItemKey, passengers: Vec<Passenger>) -> Self {
        Self {
            uuid: key.uuid,
            name: key.name,
            passengers,
        }
    }

    /// Validate the key and split the request into key and new bookings.
    pub fn into_parts(self) -> Result<(ItemKey, Vec<Passenger>), ItemError> {
        let key = require_key(&self.uuid, &self.name)?;
        Ok((key, self.passengers))
    }
}
