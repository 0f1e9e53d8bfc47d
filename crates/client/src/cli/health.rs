//! Health CLI command.

use clap::Parser;

/// Query `/healthz`.
#[derive(Debug, Parser)]
pub struct HealthCommand {}
