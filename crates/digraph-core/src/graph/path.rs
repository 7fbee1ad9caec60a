//! Path reconstruction from predecessor links

use serde::Serialize;

use crate::graph::types::{Distance, Vertex};

/// Path result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult {
    pub source: Vertex,
    pub target: Vertex,
    pub found: bool,
    /// Vertices from source to target, both included; empty when not found
    pub vertices: Vec<Vertex>,
    /// Hop count or total weight, depending on the algorithm of the tree
    pub distance: Option<Distance>,
}

impl PathResult {
    fn not_found(source: Vertex, target: Vertex) -> Self {
        PathResult {
            source,
            target,
            found: false,
            vertices: Vec::new(),
            distance: None,
        }
    }

    pub fn is_found(&self) -> bool {
        self.found
    }

    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }
}

/// Walk predecessors back from `target` to the source, then reverse.
///
/// `dist` and `pred` hold vertex `v` at slot `v - 1`; `target` must already
/// be validated.
pub(crate) fn reconstruct_path(
    source: Vertex,
    target: Vertex,
    dist: &[Option<Distance>],
    pred: &[Option<Vertex>],
) -> PathResult {
    let Some(distance) = dist[target - 1] else {
        return PathResult::not_found(source, target);
    };

    let mut vertices = vec![target];
    let mut current = target;
    while let Some(prev) = pred[current - 1] {
        vertices.push(prev);
        current = prev;
    }
    vertices.reverse();

    debug_assert_eq!(vertices.first(), Some(&source));

    PathResult {
        source,
        target,
        found: true,
        vertices,
        distance: Some(distance),
    }
}
