mod error;
mod operations;
mod requests;
mod types;

pub use error::ItemError;
pub use operations::{append_passengers, booking_count, non_negative, require_key, MAX_COUNT};
pub use requests::{IncrementPassengerRequest, PutItemRequest};
pub use types::{Item, ItemKey, Passenger};
