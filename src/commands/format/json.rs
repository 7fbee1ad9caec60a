//! JSON documents for graphs, trees and paths

use digraph_core::error::Result;
use digraph_core::{Algorithm, Digraph, FrontierStrategy, PathResult, ShortestPathTree};
use serde_json::{json, Value};

pub fn graph_json(graph: &Digraph) -> Result<Value> {
    let mut adjacency = Vec::with_capacity(graph.vertex_count());
    for v in graph.vertices() {
        let edges: Vec<Value> = graph
            .edges_from(v)?
            .iter()
            .map(|e| json!({ "to": e.to, "weight": e.weight }))
            .collect();
        adjacency.push(json!({ "vertex": v, "edges": edges }));
    }

    Ok(json!({
        "vertices": graph.vertex_count(),
        "edges": graph.edge_count(),
        "adjacency": adjacency,
    }))
}

/// `strategy` is only reported for Dijkstra trees
pub fn tree_json(tree: &ShortestPathTree, strategy: FrontierStrategy) -> Result<Value> {
    let mut output = json!({
        "source": tree.source(),
        "algorithm": tree.algorithm(),
        "reachable": tree.reachable_count(),
        "rows": tree.rows().collect::<Vec<_>>(),
    });

    if tree.algorithm() == Algorithm::Dijkstra {
        if let Some(obj) = output.as_object_mut() {
            obj.insert("strategy".to_string(), serde_json::to_value(strategy)?);
        }
    }

    Ok(output)
}

pub fn path_json(path: &PathResult, algorithm: Algorithm) -> Result<Value> {
    let mut output = serde_json::to_value(path)?;
    if let Some(obj) = output.as_object_mut() {
        obj.insert("algorithm".to_string(), serde_json::to_value(algorithm)?);
        obj.insert("hops".to_string(), json!(path.hops()));
    }
    Ok(output)
}
