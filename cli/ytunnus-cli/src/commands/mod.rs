//! CLI commands.

mod base;
mod build;
mod multiplier;
mod validate;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::output::OutputFormat;

/// ytunnus - Build and validate Finnish business IDs (Y-tunnus).
#[derive(Debug, Parser)]
#[command(name = "ytunnus")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (text or json). Defaults to $YTUNNUS_FORMAT, then text.
    #[arg(long, global = true)]
    format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Append the check digit to a base number.
    Build(build::BuildCommand),

    /// Check that a business ID has a correct check digit.
    Validate(validate::ValidateCommand),

    /// Print the base number of a business ID.
    Base(base::BaseCommand),

    /// Print a weight from the checksum multiplier table.
    Multiplier(multiplier::MultiplierCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let config = Config::from_env()?;
        crate::logging::init(&config.log_level);

        let format = match self.format.as_deref() {
            Some(flag) => flag.parse::<OutputFormat>()?,
            None => config.format,
        };

        let ctx = CommandContext { format };
        tracing::debug!(format = ?ctx.format, "running command");

        match self.command {
            Commands::Build(cmd) => cmd.run(&ctx),
            Commands::Validate(cmd) => cmd.run(&ctx),
            Commands::Base(cmd) => cmd.run(&ctx),
            Commands::Multiplier(cmd) => cmd.run(&ctx),
            Commands::Version => {
                println!("ytunnus {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub format: OutputFormat,
}
