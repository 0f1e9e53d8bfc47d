//! Item queries and mutations.

use serde::Deserialize;
use serde_json::json;

use departures_core::item::{IncrementPassengerRequest, Item, PutItemRequest};

use super::DeparturesClient;
use crate::error::Result;

const ITEM_FIELDS: &str = "uuid name departure destination time capacity passenger passengers { namelist comment }";

fn all_items_query() -> String {
    format!("query AllItems {{ allItems {{ {ITEM_FIELDS} }} }}")
}

fn put_item_mutation() -> String {
    format!(
        "mutation PutItem($uuid: String!, $name: String!, $departure: String!, \
         $destination: String!, $time: String!, $capacity: Int!, $passenger: Int!, \
         $passengers: [PassengerInput!]) {{ \
         putItem(uuid: $uuid, name: $name, departure: $departure, destination: $destination, \
         time: $time, capacity: $capacity, passenger: $passenger, passengers: $passengers) \
         {{ {ITEM_FIELDS} }} }}"
    )
}

fn increment_passenger_mutation() -> String {
    format!(
        "mutation IncrementPassenger($uuid: String!, $name: String!, \
         $passengers: [PassengerInput!]) {{ \
         incrementPassenger(uuid: $uuid, name: $name, passengers: $passengers) \
         {{ {ITEM_FIELDS} }} }}"
    )
}

#[derive(Debug, Deserialize)]
struct AllItemsData {
    #[serde(rename = "allItems")]
    all_items: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct PutItemData {
    #[serde(rename = "putItem")]
    put_item: Item,
}

#[derive(Debug, Deserialize)]
struct IncrementPassengerData {
    #[serde(rename = "incrementPassenger")]
    increment_passenger: Item,
}

impl DeparturesClient {
    /// List every departure.
    pub async fn list_items(&self) -> Result<Vec<Item>> {
        let data: AllItemsData = self.execute(&all_items_query(), json!({})).await?;
        Ok(data.all_items)
    }

    /// Create or replace a departure.
    pub async fn put_item(&self, request: &PutItemRequest) -> Result<Item> {
        let data: PutItemData = self
            .execute(&put_item_mutation(), serde_json::to_value(request)?)
            .await?;
        Ok(data.put_item)
    }

    /// Book passengers on an existing departure.
    pub async fn book_passengers(&self, request: &IncrementPassengerRequest) -> Result<Item> {
        let data: IncrementPassengerData = self
            .execute(
                &increment_passenger_mutation(),
                serde_json::to_value(request)?,
            )
            .await?;
        Ok(data.increment_passenger)
    }
}
