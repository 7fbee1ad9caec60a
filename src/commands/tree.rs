//! `digraph tree` command - print a shortest-path tree
//!
//! One row per vertex: distance from the source and predecessor on a
//! shortest path.

use crate::cli::{OutputFormat, SearchArgs};
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{human, json, write_json};
use digraph_core::error::Result;
use digraph_core::Vertex;

/// Execute the tree command
pub fn execute(ctx: &CommandContext, source: Vertex, search: &SearchArgs) -> Result<()> {
    let graph = ctx.build_graph()?;
    let tree = ctx.shortest_paths(&graph, source, search)?;

    let mut out = std::io::stdout().lock();
    match ctx.format() {
        OutputFormat::Json => {
            write_json(&mut out, &json::tree_json(&tree, ctx.strategy(search))?)?
        }
        OutputFormat::Human => human::write_tree(&mut out, &tree)?,
    }

    Ok(())
}
