//! Base command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use super::CommandContext;
use crate::output::print_result;

/// Print the base number of a business ID.
#[derive(Debug, Args)]
pub struct BaseCommand {
    /// Business ID, e.g. 1572860-0.
    #[arg(allow_hyphen_values = true)]
    id: String,
}

#[derive(Debug, Serialize)]
struct BaseOutput<'a> {
    id: &'a str,
    base: &'a str,
}

impl BaseCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let base = ytunnus::get_base_id(&self.id)?;
        print_result(base, &BaseOutput { id: &self.id, base }, ctx.format);
        Ok(())
    }
}
