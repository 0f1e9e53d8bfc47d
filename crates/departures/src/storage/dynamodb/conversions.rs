//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! domain types. These are testable in isolation without DynamoDB access.
//!
//! Decoding is lenient about absence and strict about shape: a missing (or
//! `NULL`) attribute decodes to the field's zero value, while an attribute
//! that is present with the wrong kind or a malformed number fails with
//! [`RepositoryError::Decode`] naming the attribute.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use departures_core::item::{Item, Passenger, MAX_COUNT};
use departures_core::storage::RepositoryError;
use serde::Deserialize;

use super::keys;

type Attributes = HashMap<String, AttributeValue>;

// ============================================================================
// Item conversions
// ============================================================================

/// Convert an Item to a DynamoDB item.
///
/// Every attribute is written, including an empty `Passengers` list.
pub fn item_to_attributes(item: &Item) -> Attributes {
    let mut attributes = HashMap::new();

    // Keys
    attributes.insert(keys::UUID.to_string(), AttributeValue::S(item.uuid.clone()));
    attributes.insert(keys::NAME.to_string(), AttributeValue::S(item.name.clone()));

    // Data
    attributes.insert(
        keys::DEPARTURE.to_string(),
        AttributeValue::S(item.departure.clone()),
    );
    attributes.insert(
        keys::DESTINATION.to_string(),
        AttributeValue::S(item.destination.clone()),
    );
    attributes.insert(keys::TIME.to_string(), AttributeValue::S(item.time.clone()));
    attributes.insert(keys::CAPACITY.to_string(), encode_count(item.capacity));
    attributes.insert(keys::PASSENGER.to_string(), encode_count(item.passenger));
    attributes.insert(
        keys::PASSENGERS.to_string(),
        passengers_to_attribute(&item.passengers),
    );

    attributes
}

/// Convert a DynamoDB item to Item.
pub fn attributes_to_item(attributes: &Attributes) -> Result<Item, RepositoryError> {
    Ok(Item {
        uuid: get_string(attributes, keys::UUID)?,
        name: get_string(attributes, keys::NAME)?,
        departure: get_string(attributes, keys::DEPARTURE)?,
        destination: get_string(attributes, keys::DESTINATION)?,
        time: get_string(attributes, keys::TIME)?,
        capacity: get_count(attributes, keys::CAPACITY)?,
        passenger: get_count(attributes, keys::PASSENGER)?,
        passengers: get_passengers(attributes, keys::PASSENGERS)?,
    })
}

/// Convert a page of scanned records, failing on the first bad record.
pub fn attributes_to_items(records: &[Attributes]) -> Result<Vec<Item>, RepositoryError> {
    records.iter().map(attributes_to_item).collect()
}

// ============================================================================
// Passenger conversions
// ============================================================================

/// Convert a Passenger to a DynamoDB map attribute.
pub fn passenger_to_attribute(passenger: &Passenger) -> AttributeValue {
    AttributeValue::M(HashMap::from([
        (
            keys::NAMELIST.to_string(),
            AttributeValue::S(passenger.namelist.clone()),
        ),
        (
            keys::COMMENT.to_string(),
            AttributeValue::S(passenger.comment.clone()),
        ),
    ]))
}

/// Convert passengers to a DynamoDB list of maps.
pub fn passengers_to_attribute(passengers: &[Passenger]) -> AttributeValue {
    AttributeValue::L(passengers.iter().map(passenger_to_attribute).collect())
}

/// Passenger entry as stored by the older JSON-string encoding.
#[derive(Debug, Deserialize)]
struct LegacyPassenger {
    #[serde(rename = "Namelist", alias = "namelist", default)]
    namelist: String,
    #[serde(rename = "Comment", alias = "comment", default)]
    comment: String,
}

/// Decode the `Passengers` attribute.
///
/// Accepts the list-of-maps encoding and the legacy JSON string encoding.
fn get_passengers(attributes: &Attributes, key: &str) -> Result<Vec<Passenger>, RepositoryError> {
    match present(attributes, key) {
        None => Ok(Vec::new()),
        Some(AttributeValue::L(list)) => list
            .iter()
            .enumerate()
            .map(|(index, value)| attribute_to_passenger(key, index, value))
            .collect(),
        Some(AttributeValue::S(json)) if json.trim().is_empty() => Ok(Vec::new()),
        Some(AttributeValue::S(json)) => {
            let legacy: Option<Vec<LegacyPassenger>> = serde_json::from_str(json).map_err(|e| {
                RepositoryError::decode(key, format!("invalid passenger JSON: {e}"))
            })?;
            Ok(legacy
                .unwrap_or_default()
                .into_iter()
                .map(|p| Passenger::new(p.namelist, p.comment))
                .collect())
        }
        Some(other) => Err(kind_mismatch(key, "L", other)),
    }
}

fn attribute_to_passenger(
    key: &str,
    index: usize,
    value: &AttributeValue,
) -> Result<Passenger, RepositoryError> {
    let field = format!("{key}[{index}]");
    match value {
        AttributeValue::M(map) => Ok(Passenger {
            namelist: get_string(map, keys::NAMELIST)
                .map_err(|e| nest_field(&field, e))?,
            comment: get_string(map, keys::COMMENT).map_err(|e| nest_field(&field, e))?,
        }),
        other => Err(kind_mismatch(&field, "M", other)),
    }
}

// ============================================================================
// Numeric encoding
// ============================================================================

/// Encode a counter as a DynamoDB number (base 10, no sign, no leading zeros).
pub fn encode_count(value: u32) -> AttributeValue {
    AttributeValue::N(value.to_string())
}

/// Parse a decimal counter, rejecting anything that is not plain digits.
///
/// Counters are served as GraphQL `Int`, so values above [`MAX_COUNT`] are
/// rejected too.
pub fn parse_count(field: &str, raw: &str) -> Result<u32, RepositoryError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RepositoryError::decode(
            field,
            format!("expected a decimal integer, got {raw:?}"),
        ));
    }
    raw.parse::<u32>()
        .ok()
        .filter(|value| *value <= MAX_COUNT)
        .ok_or_else(|| {
            RepositoryError::decode(field, format!("{raw} is out of range (max {MAX_COUNT})"))
        })
}

// ============================================================================
// Helper functions
// ============================================================================

/// Look up an attribute, treating an explicit `NULL` as absent.
fn present<'a>(attributes: &'a Attributes, key: &str) -> Option<&'a AttributeValue> {
    attributes
        .get(key)
        .filter(|value| !matches!(value, AttributeValue::Null(_)))
}

/// Get a string attribute, empty when missing.
fn get_string(attributes: &Attributes, key: &str) -> Result<String, RepositoryError> {
    match present(attributes, key) {
        None => Ok(String::new()),
        Some(AttributeValue::S(s)) => Ok(s.clone()),
        Some(other) => Err(kind_mismatch(key, "S", other)),
    }
}

/// Get a counter attribute, zero when missing.
///
/// The number may be carried by an `N` attribute or, for records written by
/// older clients, by an `S` attribute holding the same decimal string.
fn get_count(attributes: &Attributes, key: &str) -> Result<u32, RepositoryError> {
    match present(attributes, key) {
        None => Ok(0),
        Some(AttributeValue::N(raw)) | Some(AttributeValue::S(raw)) => parse_count(key, raw),
        Some(other) => Err(kind_mismatch(key, "N", other)),
    }
}

fn kind_mismatch(field: &str, expected: &str, found: &AttributeValue) -> RepositoryError {
    RepositoryError::decode(
        field,
        format!("expected {expected} attribute, found {}", kind_name(found)),
    )
}

/// Prefix the field of a decode error raised inside a nested map.
fn nest_field(parent: &str, err: RepositoryError) -> RepositoryError {
    match err {
        RepositoryError::Decode { field, reason } => {
            RepositoryError::decode(format!("{parent}.{field}"), reason)
        }
        other => other,
    }
}

fn kind_name(value: &AttributeValue) -> &'static str {
    match value {
        AttributeValue::S(_) => "S",
        AttributeValue::N(_) => "N",
        AttributeValue::B(_) => "B",
        AttributeValue::Bool(_) => "BOOL",
        AttributeValue::Null(_) => "NULL",
        AttributeValue::L(_) => "L",
        AttributeValue::M(_) => "M",
        AttributeValue::Ss(_) => "SS",
        AttributeValue::Ns(_) => "NS",
        AttributeValue::Bs(_) => "BS",
        _ => "unknown",
    }
}
