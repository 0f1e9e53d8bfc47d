//! CLI command definitions.

pub mod health;
pub mod items;
pub mod schema;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the departures gateway.
#[derive(Debug, Parser)]
#[command(name = "departures-client")]
#[command(about = "CLI client for the departures GraphQL gateway", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "DEPARTURES_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Departure items and bookings.
    Items(items::ItemsCommand),
    /// Save the gateway schema (introspection result).
    Schema(schema::SchemaCommand),
    /// Server health check.
    Health(health::HealthCommand),
}
