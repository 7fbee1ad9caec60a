//! `digraph path` command - print one shortest path

use crate::cli::{OutputFormat, SearchArgs};
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{human, json, write_json};
use digraph_core::error::Result;
use digraph_core::Vertex;
use tracing::debug;

/// Execute the path command
///
/// An unreachable target is reported, not treated as an error.
pub fn execute(
    ctx: &CommandContext,
    source: Vertex,
    target: Vertex,
    search: &SearchArgs,
) -> Result<()> {
    let graph = ctx.build_graph()?;
    let tree = ctx.shortest_paths(&graph, source, search)?;
    let path = tree.path_to(target)?;

    debug!(source, target, found = path.found, hops = path.hops(), "path");

    let mut out = std::io::stdout().lock();
    match ctx.format() {
        OutputFormat::Json => {
            write_json(&mut out, &json::path_json(&path, tree.algorithm())?)?
        }
        OutputFormat::Human => human::write_path(&mut out, &path)?,
    }

    Ok(())
}
