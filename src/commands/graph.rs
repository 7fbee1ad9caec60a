//! `digraph graph` command - print the adjacency lists

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{human, json, write_json};
use digraph_core::error::Result;

/// Execute the graph command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let graph = ctx.build_graph()?;

    let mut out = std::io::stdout().lock();
    match ctx.format() {
        OutputFormat::Json => write_json(&mut out, &json::graph_json(&graph)?)?,
        OutputFormat::Human => human::write_graph(&mut out, &graph)?,
    }

    Ok(())
}
