//! Multiplier command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use super::CommandContext;
use crate::output::print_result;

/// Print a weight from the checksum multiplier table.
#[derive(Debug, Args)]
pub struct MultiplierCommand {
    /// Position in the base number (0-6).
    index: usize,
}

#[derive(Debug, Serialize)]
struct MultiplierOutput {
    index: usize,
    multiplier: u32,
}

impl MultiplierCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let multiplier = ytunnus::multiplier(self.index)?;
        let output = MultiplierOutput {
            index: self.index,
            multiplier,
        };
        print_result(&multiplier.to_string(), &output, ctx.format);
        Ok(())
    }
}
