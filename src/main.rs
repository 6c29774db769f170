//! Ligne - minimum-time route planner for a fixed metro network
//!
//! A command-line tool that finds the fastest route between two
//! stations of the 14-station reference network, accounting for the
//! cost of changing lines.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::Cli;
use ligne_core::error::{ExitCode as LigneExitCode, LigneError};
use ligne_core::format::OutputFormat;
use ligne_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version are informational, not errors - let clap handle them
            if matches!(
                err.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            ) {
                err.exit();
            }

            // Anything else is a usage problem. Route it through our own
            // error type so the process exits with 1 rather than clap's
            // default, and `--format json` still gets a structured envelope.
            let usage = LigneError::Usage(err.to_string());
            if argv_format_json {
                eprintln!("{}", usage.to_json());
            } else {
                eprintln!("{usage}");
            }
            return ExitCode::from(usage.exit_code() as u8);
        }
    };

    // Initialize structured logging
    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        // If tracing initialization fails, fall back to stderr
        eprintln!("Warning: Failed to initialize logging: {e}");
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::run(&cli) {
        Ok(()) => ExitCode::from(LigneExitCode::Success as u8),
        Err(e) => {
            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {e}");
            }

            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
