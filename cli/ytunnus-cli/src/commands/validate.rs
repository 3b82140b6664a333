//! Validate command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use ytunnus::BusinessId;

use super::CommandContext;
use crate::error::CliError;
use crate::output::print_result;

/// Check that a business ID has a correct check digit.
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Business ID, e.g. 1572860-0 (legacy 6-digit bases are accepted).
    #[arg(allow_hyphen_values = true)]
    id: String,
}

#[derive(Debug, Serialize)]
struct ValidateOutput<'a> {
    id: &'a str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    normalized: Option<BusinessId>,
}

impl ValidateCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let valid = ytunnus::is_valid_business_id(self.id.as_str());
        let normalized = valid.then(|| BusinessId::parse(&self.id).ok()).flatten();

        let output = ValidateOutput {
            id: &self.id,
            valid,
            normalized,
        };
        let text = if valid { "valid" } else { "invalid" };
        print_result(text, &output, ctx.format);

        if !valid {
            return Err(CliError::InvalidId { id: self.id }.into());
        }
        Ok(())
    }
}
