//! GraphQL object and input types.

use async_graphql::{InputObject, SimpleObject};

use departures_core::item::{Item, Passenger};
use departures_core::storage::RepositoryError;

use crate::resolvers::ResolverError;

/// One passenger booking.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Passenger")]
pub struct PassengerNode {
    pub namelist: String,
    pub comment: String,
}

impl From<Passenger> for PassengerNode {
    fn from(p: Passenger) -> Self {
        Self {
            namelist: p.namelist,
            comment: p.comment,
        }
    }
}

/// A scheduled departure and its bookings.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Item")]
pub struct ItemNode {
    pub uuid: String,
    pub name: String,
    pub departure: String,
    pub destination: String,
    pub time: String,
    /// Seat limit.
    pub capacity: i32,
    /// Number of booked passengers.
    pub passenger: i32,
    /// Bookings in booking order.
    pub passengers: Vec<PassengerNode>,
}

/// A counter as a GraphQL `Int`, failing on values the type cannot carry.
fn graphql_int(field: &'static str, value: u32) -> Result<i32, ResolverError> {
    i32::try_from(value).map_err(|_| {
        RepositoryError::decode(field, format!("{value} does not fit a GraphQL Int")).into()
    })
}

impl TryFrom<Item> for ItemNode {
    type Error = ResolverError;

    fn try_from(item: Item) -> Result<Self, Self::Error> {
        Ok(Self {
            capacity: graphql_int("Capacity", item.capacity)?,
            passenger: graphql_int("Passenger", item.passenger)?,
            uuid: item.uuid,
            name: item.name,
            departure: item.departure,
            destination: item.destination,
            time: item.time,
            passengers: item.passengers.into_iter().map(Into::into).collect(),
        })
    }
}

/// A booking supplied to `putItem` or `incrementPassenger`.
///
/// Omitted fields are stored as empty strings.
#[derive(Debug, Clone, Default, InputObject)]
pub struct PassengerInput {
    pub namelist: Option<String>,
    pub comment: Option<String>,
}

impl From<PassengerInput> for Passenger {
    fn from(input: PassengerInput) -> Self {
        Passenger::new(
            input.namelist.unwrap_or_default(),
            input.comment.unwrap_or_default(),
        )
    }
}

/// Converts an optional input list, treating absence as no bookings.
pub(crate) fn passengers_from_input(input: Option<Vec<PassengerInput>>) -> Vec<Passenger> {
    input
        .unwrap_or_default()
        .into_iter()
        .map(Passenger::from)
        .collect()
}
