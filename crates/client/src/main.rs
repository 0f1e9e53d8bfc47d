//! departures-client CLI entry point.

use clap::Parser;
use departures_client::cli::items::ItemsAction;
use departures_client::cli::{Cli, Commands, OutputFormat};
use departures_client::client::DeparturesClient;
use departures_client::output::{format_output, pretty};
use departures_core::item::{IncrementPassengerRequest, ItemKey, PutItemRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = DeparturesClient::new(&cli.base_url);

    match cli.command {
        Commands::Items(items_cmd) => match items_cmd.action {
            ItemsAction::List => {
                let items = client.list_items().await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&items, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_items(&items)),
                }
            }
            ItemsAction::Put {
                uuid,
                name,
                departure,
                destination,
                time,
                capacity,
                passenger,
                passenger_entries,
            } => {
                let passenger = passenger.unwrap_or(passenger_entries.len() as i64);
                let item = client
                    .put_item(&PutItemRequest {
                        uuid,
                        name,
                        departure,
                        destination,
                        time,
                        capacity,
                        passenger,
                        passengers: passenger_entries,
                    })
                    .await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&item, cli.format)),
                    OutputFormat::Pretty => {
                        println!("Stored:\n{}", pretty::format_item(&item))
                    }
                }
            }
            ItemsAction::Book {
                uuid,
                name,
                passenger_entries,
            } => {
                let item = client
                    .book_passengers(&IncrementPassengerRequest::new(
                        ItemKey::new(uuid, name),
                        passenger_entries,
                    ))
                    .await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&item, cli.format)),
                    OutputFormat::Pretty => {
                        println!("Booked:\n{}", pretty::format_item(&item))
                    }
                }
            }
        },
        Commands::Schema(schema_cmd) => {
            let introspection = client.introspect().await?;
            let rendered = serde_json::to_string_pretty(&introspection)?;
            match schema_cmd.output {
                Some(path) => {
                    std::fs::write(&path, rendered)?;
                    if !cli.quiet {
                        println!("Schema written to {}", path.display());
                    }
                }
                None => println!("{}", rendered),
            }
        }
        Commands::Health(_) => {
            let health = client.health().await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&health, cli.format)),
                OutputFormat::Pretty => println!("{}", pretty::format_health(&health)),
            }
        }
    }

    Ok(())
}
