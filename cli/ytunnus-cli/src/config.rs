//! CLI configuration.
//!
//! Everything is env-driven; command-line flags override these values.

use anyhow::{Context, Result};

use crate::output::OutputFormat;

/// CLI configuration (env-driven).
#[derive(Debug, Clone)]
pub struct Config {
    /// Default output format (text or json).
    pub format: OutputFormat,

    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let format: OutputFormat = std::env::var("YTUNNUS_FORMAT")
            .ok()
            .map(|v| v.parse())
            .transpose()
            .context("YTUNNUS_FORMAT must be 'text' or 'json'.")?
            .unwrap_or_default();

        let log_level = std::env::var("YTUNNUS_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Self { format, log_level })
    }
}
