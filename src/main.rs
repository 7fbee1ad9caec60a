//! Digraph - shortest paths in small directed graphs
//!
//! Builds a graph from command-line flags and prints its adjacency lists,
//! a shortest-path tree, or a single shortest path.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use digraph_core::error::{DigraphError, ExitCode as DigraphExitCode};
use digraph_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap fails before `Cli.format` exists, so look at argv directly
            if argv_format_json {
                let error = match err.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    _ => DigraphError::UsageError(err.to_string()),
                };

                eprintln!("{}", error.to_json());
                return ExitCode::from(error.exit_code() as u8);
            }

            err.exit();
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    // Errors use the same resolved format as command output
    let (format, result) = match commands::dispatch::load_config(&cli) {
        Ok(config) => {
            let format = cli.format.unwrap_or(config.output.format);
            (format, commands::dispatch::run(&cli, config, start))
        }
        Err(e) => (cli.format.unwrap_or_default(), Err(e)),
    };

    match result {
        Ok(()) => ExitCode::from(DigraphExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
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
