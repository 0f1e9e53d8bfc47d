use serde::{Deserialize, Serialize};

/// The composite storage key of an [`Item`].
///
/// `uuid` is the partition key and `name` the sort key. The pair is the only
/// way to address a stored item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemKey {
    pub uuid: String,
    pub name: String,
}

impl ItemKey {
    pub fn new(uuid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for ItemKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.uuid, self.name)
    }
}

/// One passenger booking on a departure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    /// Passenger name, or several names for a group booking.
    pub namelist: String,
    /// Free-form note attached to the booking.
    pub comment: String,
}

impl Passenger {
    pub fn new(namelist: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            namelist: namelist.into(),
            comment: comment.into(),
        }
    }
}

/// A scheduled departure with its booked passengers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub uuid: String,
    pub name: String,
    pub departure: String,
    pub destination: String,
    pub time: String,
    /// Seat limit.
    pub capacity: u32,
    /// Running count of booked passengers.
    pub passenger: u32,
    /// Bookings in the order they were made.
    #[serde(default)]
    pub passengers: Vec<Passenger>,
}

impl Item {
    /// Creates an item with no bookings.
    pub fn new(
        key: ItemKey,
        departure: impl Into<String>,
        destination: impl Into<String>,
        time: impl Into<String>,
        capacity: u32,
    ) -> Self {
        Self {
            uuid: key.uuid,
            name: key.name,
            departure: departure.into(),
            destination: destination.into(),
            time: time.into(),
            capacity,
            passenger: 0,
            passengers: Vec::new(),
        }
    }

    /// Sets the passenger counter and list together.
    pub fn with_passengers(mut self, passenger: u32, passengers: Vec<Passenger>) -> Self {
        self.passenger = passenger;
        self.passengers = passengers;
        self
    }

    /// Returns the storage key of this item.
    pub fn key(&self) -> ItemKey {
        ItemKey::new(self.uuid.clone(), self.name.clone())
    }

    /// Returns true when more passengers are booked than there are seats.
    pub fn is_overbooked(&self) -> bool {
        self.passenger > self.capacity
    }
}
