//! Command dispatch logic for digraph

use std::time::Instant;

use crate::cli::Cli;
use digraph_core::config::DigraphConfig;
use digraph_core::error::Result;
use tracing::debug;

mod command;
mod commands;

pub use command::{Command, CommandContext, NoCommand};

/// Load the `--config` file, or the built-in defaults when none is given
pub fn load_config(cli: &Cli) -> Result<DigraphConfig> {
    match &cli.config {
        Some(path) => DigraphConfig::load(path),
        None => Ok(DigraphConfig::default()),
    }
}

pub fn run(cli: &Cli, config: DigraphConfig, start: Instant) -> Result<()> {
    debug!(elapsed = ?start.elapsed(), "dispatch");

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
