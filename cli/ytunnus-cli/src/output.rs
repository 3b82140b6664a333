//! Output formatting for CLI commands.

use std::str::FromStr;

use colored::Colorize;
use serde::Serialize;

use crate::error::CliError;

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text, one value per line.
    #[default]
    Text,
    /// A single JSON object.
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(CliError::UnknownFormat(other.to_string())),
        }
    }
}

/// Print a command result: `text` in text mode, `data` as JSON otherwise.
pub fn print_result<T: Serialize>(text: &str, data: &T, format: OutputFormat) {
    match format {
        OutputFormat::Text => println!("{}", text),
        OutputFormat::Json => println!("{}", format_json(data)),
    }
}

/// Print a warning to stderr.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "Warning:".yellow().bold(), message);
}

fn format_json<T: Serialize>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string())
}
