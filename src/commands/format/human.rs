//! Fixed-width text rendering of graphs, trees and paths

use std::io::Write;

use digraph_core::error::Result;
use digraph_core::{Digraph, PathResult, ShortestPathTree};

const GRAPH_RULE: usize = 66;
const TREE_RULE: usize = 22;

/// Blank separator line of `width` spaces framing a table header
fn write_rule<W: Write>(out: &mut W, width: usize) -> Result<()> {
    writeln!(out, "{:width$}", "", width = width)?;
    Ok(())
}

/// Adjacency lists, one vertex per line: `   1 : ( 2,  1) ( 3,  5)`
pub fn write_graph<W: Write>(out: &mut W, graph: &Digraph) -> Result<()> {
    write_rule(out, GRAPH_RULE)?;
    writeln!(out, "Vertex  adjacency lists")?;
    write_rule(out, GRAPH_RULE)?;

    for v in graph.vertices() {
        write!(out, "{:>4} :", v)?;
        for e in graph.edges_from(v)? {
            write!(out, " ({:>2}, {:>2})", e.to, e.weight)?;
        }
        writeln!(out)?;
    }

    write_rule(out, GRAPH_RULE)
}

/// Tree table; an unreached distance prints as -1 and "no predecessor" as 0
pub fn write_tree<W: Write>(out: &mut W, tree: &ShortestPathTree) -> Result<()> {
    write_rule(out, TREE_RULE)?;
    writeln!(out, "vertex    dist    path")?;
    write_rule(out, TREE_RULE)?;

    for row in tree.rows() {
        let dist = row
            .distance
            .map_or_else(|| "-1".to_string(), |d| d.to_string());
        writeln!(
            out,
            "{:>4} : {:>6}{:>6}",
            row.vertex,
            dist,
            row.predecessor.unwrap_or(0)
        )?;
    }

    write_rule(out, TREE_RULE)
}

/// `Shortest path = 1   2   3   (2)`, or `No path to vertex 4`
pub fn write_path<W: Write>(out: &mut W, path: &PathResult) -> Result<()> {
    match path.distance {
        Some(distance) if path.found => {
            let vertices = path
                .vertices
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join("   ");
            writeln!(out, "Shortest path = {}   ({})", vertices, distance)?;
        }
        _ => writeln!(out, "No path to vertex {}", path.target)?,
    }
    Ok(())
}
