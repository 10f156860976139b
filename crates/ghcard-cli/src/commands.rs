//! CLI command implementation.

use crate::config::CardConfig;
use crate::output::{self, OutputFormat};
use anyhow::{Context, Result};
use ghcard_core::{CardOptions, process_json};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Read the event from `input` (stdin when `None`), render it and print the
/// card to stdout.
pub fn render(input: Option<&Path>, config: Option<&Path>, format: OutputFormat) -> Result<()> {
    let options = CardConfig::load(config)?.card_options();
    let raw = read_input(input)?;
    let out = card_for(&raw, &options, format)?;
    println!("{out}");
    Ok(())
}

/// Read the raw event document.
fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read event from {}", path.display())),
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read event from stdin")?;
            Ok(raw)
        }
    }
}

/// Turn a raw event document into serialized card text. Blank input is
/// treated as an empty object.
fn card_for(raw: &str, options: &CardOptions, format: OutputFormat) -> Result<String> {
    let raw = if raw.trim().is_empty() { "{}" } else { raw };
    debug!(bytes = raw.len(), "Processing event");

    let card = process_json(raw, options).context("Failed to build card")?;
    output::render(&card, format)
}
