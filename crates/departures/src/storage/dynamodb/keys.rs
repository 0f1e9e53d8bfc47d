//! DynamoDB attribute names and key construction.
//!
//! The table layout predates this service, so attribute names keep their
//! original casing: the key attributes are lower case, data attributes are
//! capitalized. All functions are sync and have no side effects.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use departures_core::item::ItemKey;

// ============================================================================
// Key attributes
// ============================================================================

/// Partition key.
pub const UUID: &str = "uuid";
/// Sort key.
pub const NAME: &str = "name";

// ============================================================================
// Data attributes
// ============================================================================

pub const DEPARTURE: &str = "Departure";
pub const DESTINATION: &str = "Destination";
pub const TIME: &str = "Time";
pub const CAPACITY: &str = "Capacity";
pub const PASSENGER: &str = "Passenger";
pub const PASSENGERS: &str = "Passengers";

// ============================================================================
// Passenger map attributes
// ============================================================================

pub const NAMELIST: &str = "Namelist";
pub const COMMENT: &str = "Comment";

/// Build the primary key map for an item.
pub fn item_key(key: &ItemKey) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (UUID.to_string(), AttributeValue::S(key.uuid.clone())),
        (NAME.to_string(), AttributeValue::S(key.name.clone())),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_key() {
        let key = item_key(&ItemKey::new("t1", "bus-1"));

        assert_eq!(key.len(), 2);
        assert_eq!(key.get("uuid").unwrap().as_s().unwrap(), "t1");
        assert_eq!(key.get("name").unwrap().as_s().unwrap(), "bus-1");
    }
}
