//! DynamoDB repository implementation.
//!
//! Implements `ItemRepository` from `departures_core::storage` using DynamoDB.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;
use tracing::{debug, info, warn};

use departures_core::item::{append_passengers, booking_count, Item, ItemKey, Passenger};
use departures_core::storage::{ItemRepository, RepositoryError, Result};

use super::client::{create_client, AwsConfig};
use super::conversions::{
    attributes_to_item, attributes_to_items, encode_count, item_to_attributes,
    passengers_to_attribute,
};
use super::error::{
    is_put_condition_failed, map_get_item_error, map_put_item_error, map_scan_error,
    map_update_item_error,
};
use super::keys;

/// Increments the counter and appends to the list in one conditional write.
///
/// `if_not_exists` covers records written before either attribute existed.
const APPEND_PASSENGERS_EXPRESSION: &str = "SET #count = if_not_exists(#count, :zero) + :added, \
     #list = list_append(if_not_exists(#list, :empty), :new)";

/// How many times an append retries after a legacy rewrite lost a race.
const LEGACY_REWRITE_ATTEMPTS: usize = 3;

/// Condition guarding a legacy rewrite against concurrent writers.
///
/// The counter and passenger list must still hold exactly what was read:
/// scalar values are compared, absent ones must still be absent. A list
/// already in the native encoding is not compared.
#[derive(Debug, PartialEq)]
struct RewriteGuard {
    expression: String,
    names: Vec<(&'static str, &'static str)>,
    values: Vec<(&'static str, AttributeValue)>,
}

fn rewrite_guard(stored: &HashMap<String, AttributeValue>) -> RewriteGuard {
    let mut clauses = vec!["attribute_exists(#uuid)".to_string()];
    let mut names = vec![("#uuid", keys::UUID)];
    let mut values = Vec::new();

    for (name, placeholder, attribute) in [
        ("#count", ":old_count", keys::PASSENGER),
        ("#list", ":old_list", keys::PASSENGERS),
    ] {
        match stored.get(attribute) {
            None => {
                clauses.push(format!("attribute_not_exists({name})"));
                names.push((name, attribute));
            }
            Some(value @ (AttributeValue::S(_) | AttributeValue::N(_))) => {
                clauses.push(format!("{name} = {placeholder}"));
                names.push((name, attribute));
                values.push((placeholder, value.clone()));
            }
            Some(_) => {}
        }
    }

    RewriteGuard {
        expression: clauses.join(" AND "),
        names,
        values,
    }
}

/// DynamoDB-based repository implementation.
///
/// Holds only the client handle, which is safe for concurrent use.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Builds the client from `config` and wraps it in a repository.
    pub async fn connect(config: &AwsConfig, table_name: impl Into<String>) -> Self {
        let client = create_client(config).await;
        let table_name = table_name.into();
        info!(
            table = %table_name,
            target = %config.target_display(),
            "Connected to DynamoDB"
        );
        Self::new(client, table_name)
    }

    /// Appends in a single conditional `UpdateItem`.
    async fn update_append(&self, key: &ItemKey, passengers: &[Passenger]) -> Result<Item> {
        let result = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .set_key(Some(keys::item_key(key)))
            .update_expression(APPEND_PASSENGERS_EXPRESSION)
            .condition_expression("attribute_exists(#uuid)")
            .expression_attribute_names("#count", keys::PASSENGER)
            .expression_attribute_names("#list", keys::PASSENGERS)
            .expression_attribute_names("#uuid", keys::UUID)
            .expression_attribute_values(":zero", encode_count(0))
            .expression_attribute_values(":added", encode_count(booking_count(passengers)))
            .expression_attribute_values(":empty", AttributeValue::L(Vec::new()))
            .expression_attribute_values(":new", passengers_to_attribute(passengers))
            .return_values(ReturnValue::AllNew)
            .send()
            .await
            .map_err(|e| map_update_item_error(e, "Item", key.to_string()))?;

        let attributes = result.attributes.ok_or_else(|| {
            RepositoryError::QueryFailed("UpdateItem returned no attributes".to_string())
        })?;
        let item = attributes_to_item(&attributes)?;

        debug!(
            table = %self.table_name,
            key = %key,
            added = passengers.len(),
            passenger = item.passenger,
            "Appended passengers"
        );
        Ok(item)
    }

    /// Re-encodes a legacy record with the passengers appended.
    ///
    /// Reads the record, decodes it (legacy encodings included) and writes
    /// it back in the native encoding, guarded by [`rewrite_guard`]. Returns
    /// `None` when another writer changed the record in between.
    async fn rewrite_legacy(
        &self,
        key: &ItemKey,
        passengers: &[Passenger],
    ) -> Result<Option<Item>> {
        let stored = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(keys::item_key(key)))
            .consistent_read(true)
            .send()
            .await
            .map_err(map_get_item_error)?
            .item
            .ok_or_else(|| RepositoryError::NotFound {
                entity_type: "Item",
                id: key.to_string(),
            })?;
        let updated = append_passengers(attributes_to_item(&stored)?, passengers);
        let guard = rewrite_guard(&stored);

        let mut request = self
            .client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item_to_attributes(&updated)))
            .condition_expression(guard.expression);
        for (name, attribute) in guard.names {
            request = request.expression_attribute_names(name, attribute);
        }
        for (placeholder, value) in guard.values {
            request = request.expression_attribute_values(placeholder, value);
        }

        match request.send().await {
            Ok(_) => {
                info!(
                    table = %self.table_name,
                    key = %key,
                    passenger = updated.passenger,
                    "Rewrote legacy item while appending passengers"
                );
                Ok(Some(updated))
            }
            Err(err) if is_put_condition_failed(&err) => Ok(None),
            Err(err) => Err(map_put_item_error(err)),
        }
    }
}

#[async_trait]
impl ItemRepository for DynamoDbRepository {
    async fn fetch_all(&self) -> Result<Vec<Item>> {
        let mut items = Vec::new();
        let mut start_key = None;
        let mut pages = 0usize;

        loop {
            let output = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(map_scan_error)?;
            pages += 1;

            let records = output.items.unwrap_or_default();
            items.extend(attributes_to_items(&records)?);

            start_key = output.last_evaluated_key.filter(|key| !key.is_empty());
            if start_key.is_none() {
                break;
            }
        }

        debug!(table = %self.table_name, pages, count = items.len(), "Scanned items");
        Ok(items)
    }

    async fn get_item(&self, key: &ItemKey) -> Result<Item> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(keys::item_key(key)))
            .consistent_read(true)
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(attributes) => attributes_to_item(&attributes),
            None => Err(RepositoryError::NotFound {
                entity_type: "Item",
                id: key.to_string(),
            }),
        }
    }

    async fn put_item(&self, item: &Item) -> Result<Item> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item_to_attributes(item)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        debug!(
            table = %self.table_name,
            key = %item.key(),
            passengers = item.passengers.len(),
            "Stored item"
        );
        Ok(item.clone())
    }

    async fn append_passengers(&self, key: &ItemKey, passengers: &[Passenger]) -> Result<Item> {
        for attempt in 1..=LEGACY_REWRITE_ATTEMPTS {
            match self.update_append(key, passengers).await {
                Err(RepositoryError::Decode { field, reason }) if field == keys::PASSENGERS => {
                    debug!(key = %key, attempt, %reason, "Append hit a legacy record, rewriting");
                }
                result => return result,
            }
            if let Some(item) = self.rewrite_legacy(key, passengers).await? {
                return Ok(item);
            }
        }

        warn!(key = %key, "Legacy rewrite kept losing to concurrent writers");
        Err(RepositoryError::QueryFailed(format!(
            "Item {key} changed during every legacy rewrite attempt"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legacy_record() -> HashMap<String, AttributeValue> {
        HashMap::from([
            (keys::UUID.to_string(), AttributeValue::S("t1".to_string())),
            (keys::NAME.to_string(), AttributeValue::S("bus-1".to_string())),
            (keys::PASSENGER.to_string(), AttributeValue::S("1".to_string())),
            (
                keys::PASSENGERS.to_string(),
                AttributeValue::S(r#"[{"Namelist":"Aiko","Comment":""}]"#.to_string()),
            ),
        ])
    }

    #[test]
    fn test_rewrite_guard_pins_legacy_values() {
        let guard = rewrite_guard(&legacy_record());

        assert_eq!(
            guard.expression,
            "attribute_exists(#uuid) AND #count = :old_count AND #list = :old_list"
        );
        assert_eq!(
            guard.names,
            vec![
                ("#uuid", "uuid"),
                ("#count", "Passenger"),
                ("#list", "Passengers")
            ]
        );
        assert_eq!(guard.values[0], (":old_count", AttributeValue::S("1".to_string())));
        assert_eq!(guard.values[1].0, ":old_list");
    }

    #[test]
    fn test_rewrite_guard_requires_absent_attributes_to_stay_absent() {
        let mut stored = legacy_record();
        stored.remove(keys::PASSENGER);

        let guard = rewrite_guard(&stored);

        assert_eq!(
            guard.expression,
            "attribute_exists(#uuid) AND attribute_not_exists(#count) AND #list = :old_list"
        );
        assert_eq!(guard.values.len(), 1);
    }

    #[test]
    fn test_rewrite_guard_skips_native_list() {
        let mut stored = legacy_record();
        stored.insert(keys::PASSENGERS.to_string(), AttributeValue::L(Vec::new()));

        let guard = rewrite_guard(&stored);

        assert_eq!(
            guard.expression,
            "attribute_exists(#uuid) AND #count = :old_count"
        );
        assert_eq!(guard.names.len(), 2);
    }

    #[test]
    fn test_legacy_record_decodes_and_appends() {
        let item = attributes_to_item(&legacy_record()).unwrap();

        let updated = append_passengers(item, &[Passenger::new("Ren", "aisle")]);

        assert_eq!(updated.passenger, 2);
        assert_eq!(
            updated.passengers,
            vec![Passenger::new("Aiko", ""), Passenger::new("Ren", "aisle")]
        );
        let encoded = item_to_attributes(&updated);
        assert_eq!(encoded.get(keys::PASSENGER).unwrap().as_n().unwrap(), "2");
        assert_eq!(encoded.get(keys::PASSENGERS).unwrap().as_l().unwrap().len(), 2);
    }
}
