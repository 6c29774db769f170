//! CLI argument parsing for ligne
//!
//! Uses clap for argument parsing. Flags: --format, --quiet,
//! --verbose, --log-level, --log-json; stations are positional.

use clap::Parser;

pub use ligne_core::format::OutputFormat;

/// Ligne - minimum-time route planner for a fixed metro network
#[derive(Parser, Debug)]
#[command(name = "ligne")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Source station (1-14)
    pub source: usize,

    /// Destination station (1-14)
    pub destination: usize,

    /// Output format
    #[arg(long, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable per-iteration search diagnostics
    #[arg(long, short)]
    pub verbose: bool,

    /// Log level filter (trace, debug, info, warn, error)
    #[arg(long, env = "LIGNE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

/// Parse output format from string
fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
