//! Schema CLI command.

use std::path::PathBuf;

use clap::Parser;

/// Fetch the schema by introspection.
#[derive(Debug, Parser)]
pub struct SchemaCommand {
    /// File to write the introspection result to (stdout when omitted).
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}
