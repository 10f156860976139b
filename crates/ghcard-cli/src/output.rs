//! Output formatting for the CLI.

use anyhow::{Context, Result};
use serde::Serialize;

/// How the card is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Single-line JSON, as posted to the webhook
    #[default]
    Json,
    /// Indented JSON
    Pretty,
    /// YAML, for reading
    Yaml,
}

/// Serialize `value` in the given format.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string(value).context("Failed to serialize to JSON"),
        OutputFormat::Pretty => {
            serde_json::to_string_pretty(value).context("Failed to serialize to JSON")
        }
        OutputFormat::Yaml => serde_yaml::to_string(value).context("Failed to serialize to YAML"),
    }
}
