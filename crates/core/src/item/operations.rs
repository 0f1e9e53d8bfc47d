use super::error::ItemError;
use super::types::{Item, ItemKey, Passenger};

/// Builds a storage key, rejecting empty key attributes.
///
/// DynamoDB refuses empty strings in key attributes, so an empty `uuid` or
/// `name` is a caller mistake, not a storage failure.
pub fn require_key(uuid: &str, name: &str) -> Result<ItemKey, ItemError> {
    if uuid.is_empty() {
        return Err(ItemError::EmptyKey { field: "uuid" });
    }
    if name.is_empty() {
        return Err(ItemError::EmptyKey { field: "name" });
    }
    Ok(ItemKey::new(uuid, name))
}

/// Largest counter value, the top of the GraphQL `Int` range.
pub const MAX_COUNT: u32 = i32::MAX as u32;

/// Converts a signed query-layer integer into a counter value.
pub fn non_negative(field: &'static str, value: i64) -> Result<u32, ItemError> {
    let count = u32::try_from(value).map_err(|_| ItemError::Negative { field, value })?;
    if count > MAX_COUNT {
        return Err(ItemError::TooLarge { field, value });
    }
    Ok(count)
}

/// Number of bookings a passenger list adds to the counter.
pub fn booking_count(passengers: &[Passenger]) -> u32 {
    u32::try_from(passengers.len()).map_or(MAX_COUNT, |n| n.min(MAX_COUNT))
}

/// Appends bookings to an item.
///
/// The counter grows by exactly the number of appended passengers and the
/// new passengers land after the existing ones, keeping booking order.
pub fn append_passengers(mut item: Item, passengers: &[Passenger]) -> Item {
    item.passenger = item
        .passenger
        .saturating_add(booking_count(passengers))
        .min(MAX_COUNT);
    item.passengers.extend_from_slice(passengers);
    item
}
