//! Command implementations for all digraph commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{graph, path, tree};
use digraph_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Graph => graph::execute(ctx),
            Commands::Tree { source, search } => tree::execute(ctx, *source, search),
            Commands::Path {
                source,
                target,
                search,
            } => path::execute(ctx, *source, *target, search),
        }
    }
}
