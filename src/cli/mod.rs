//! CLI module for sig-reports
//!
//! One-shot commands over the mock backend:
//! - list: one page of filtered, sorted reports
//! - export: the full filtered set as JSON
//! - chips: the active-filter chips for the given flags

mod args;
mod commands;
mod errors;
mod render;

pub use args::{Cli, Command, QueryArgs};
pub use commands::run_command;
pub use errors::{CliError, CliResult};

/// Parses arguments and runs the selected command
pub async fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command).await
}
