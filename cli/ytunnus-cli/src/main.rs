//! ytunnus - CLI for Finnish business IDs
//!
//! Builds, validates, and inspects Y-tunnus identifiers from the shell.

use anyhow::Result;
use clap::Parser;

mod commands;
mod config;
mod error;
mod logging;
mod output;

use commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = cli.run() {
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
