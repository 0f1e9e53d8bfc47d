//! Item CLI commands.

use clap::{Parser, Subcommand};
use departures_core::item::Passenger;

/// Departure item commands.
#[derive(Debug, Parser)]
pub struct ItemsCommand {
    #[command(subcommand)]
    pub action: ItemsAction,
}

/// Available item actions.
#[derive(Debug, Subcommand)]
pub enum ItemsAction {
    /// List all departures.
    List,
    /// Create or replace a departure.
    Put {
        /// Departure identifier (partition key).
        #[arg(long)]
        uuid: String,
        /// Departure name (sort key).
        #[arg(long)]
        name: String,
        #[arg(long)]
        departure: String,
        #[arg(long)]
        destination: String,
        #[arg(long)]
        time: String,
        /// Seat limit.
        #[arg(long, allow_negative_numbers = true)]
        capacity: i64,
        /// Passenger counter (default: number of --passenger-entry values).
        #[arg(long, allow_negative_numbers = true)]
        passenger: Option<i64>,
        /// Booking as NAME or NAME:COMMENT. Repeatable.
        #[arg(long = "passenger-entry", value_parser = parse_passenger_entry)]
        passenger_entries: Vec<Passenger>,
    },
    /// Book passengers on an existing departure.
    Book {
        #[arg(long)]
        uuid: String,
        #[arg(long)]
        name: String,
        /// Booking as NAME or NAME:COMMENT. Repeatable.
        #[arg(long = "passenger-entry", value_parser = parse_passenger_entry, required = true)]
        passenger_entries: Vec<Passenger>,
    },
}

/// Parse `NAME[:COMMENT]` into a passenger. Only the first `:` splits.
pub fn parse_passenger_entry(value: &str) -> Result<Passenger, String> {
    let (namelist, comment) = value.split_once(':').unwrap_or((value, ""));
    if namelist.trim().is_empty() {
        return Err(format!("passenger name is empty in {value:?}"));
    }
    Ok(Passenger::new(namelist, comment))
}
