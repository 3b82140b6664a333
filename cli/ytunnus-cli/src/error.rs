//! Error handling and display for the CLI.

use colored::Colorize;
use thiserror::Error;
use ytunnus::BusinessIdError;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{id} is not a valid business ID")]
    InvalidId { id: String },

    #[error("unknown output format '{0}' (expected text or json)")]
    UnknownFormat(String),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), err);

    if let Some(id_err) = err.downcast_ref::<BusinessIdError>() {
        match id_err {
            BusinessIdError::InvalidFormat { .. } | BusinessIdError::MissingBaseId => {
                eprintln!(
                    "\n{}",
                    "Hint: A business ID is 7 digits, a dash, and a check digit (1572860-0)."
                        .yellow()
                );
            }
            BusinessIdError::IndexOutOfRange { .. } => {
                eprintln!(
                    "\n{}",
                    "Hint: Multiplier indexes run from 0 to 6.".yellow()
                );
            }
            _ => {}
        }
    }

    if let Some(CliError::InvalidId { id }) = err.downcast_ref::<CliError>() {
        if let Ok(base) = ytunnus::get_base_id(id) {
            if let Ok(expected) = ytunnus::build_business_id(base) {
                eprintln!(
                    "\n{}",
                    format!("Hint: The check digit for base {base} gives {expected}.").yellow()
                );
            }
        }
    }
}
