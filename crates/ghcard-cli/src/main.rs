//! ghcard CLI - prints a chat notification card for a GitHub event.
//!
//! Reads the GitHub Actions `github` context as JSON (typically
//! `${{ toJSON(github) }}` piped to stdin) and writes the card JSON to stdout.

mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "ghcard")]
#[command(author, version, about = "Turn a GitHub event into a notification card")]
struct Cli {
    /// Event JSON file (defaults to stdin)
    #[arg(long, short = 'i')]
    input: Option<PathBuf>,

    /// Card config file (YAML)
    #[arg(long, short = 'c', env = "GHCARD_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', default_value = "json")]
    format: output::OutputFormat,
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the card
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    commands::render(cli.input.as_deref(), cli.config.as_deref(), cli.format)
}
