//! Build command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use super::CommandContext;
use crate::output::{print_result, print_warning};

/// Append the check digit to a base number.
#[derive(Debug, Args)]
pub struct BuildCommand {
    /// Base number (up to 7 digits, zero-padded on the left).
    #[arg(allow_hyphen_values = true)]
    base: String,
}

#[derive(Debug, Serialize)]
struct BuildOutput<'a> {
    base: &'a str,
    business_id: &'a str,
    valid: bool,
}

impl BuildCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let business_id = ytunnus::build_business_id(self.base.as_str())?;
        let valid = ytunnus::is_valid_business_id(business_id.as_str());

        if !valid {
            print_warning(&format!(
                "base {} has no valid check digit; {} is not a usable business ID",
                self.base, business_id
            ));
        }

        let output = BuildOutput {
            base: ytunnus::get_base_id(&business_id)?,
            business_id: &business_id,
            valid,
        };
        print_result(&business_id, &output, ctx.format);
        Ok(())
    }
}
