//! Shortest-path trees produced by a single-source run

use serde::Serialize;

use crate::ensure_vertex;
use crate::error::Result;
use crate::graph::path::{reconstruct_path, PathResult};
use crate::graph::types::{Algorithm, Distance, Vertex};

/// Distances and predecessors from one source vertex.
///
/// Every run returns a fresh tree, so a tree stays valid after the graph is
/// searched again or mutated; it describes the graph as it was when the run
/// happened.
///
/// For every reachable vertex `v`, following predecessors from `v` ends at
/// the source after `distance(v)` hops (BFS) or with a total weight of
/// `distance(v)` (Dijkstra). Unreached vertices have neither a distance nor
/// a predecessor, and neither does the source's predecessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathTree {
    source: Vertex,
    algorithm: Algorithm,
    /// Slot `v - 1` for vertex `v`; `None` means unreached
    dist: Vec<Option<Distance>>,
    /// Slot `v - 1` for vertex `v`; `None` for the source and unreached vertices
    pred: Vec<Option<Vertex>>,
}

/// One line of a shortest-path tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TreeRow {
    pub vertex: Vertex,
    pub distance: Option<Distance>,
    pub predecessor: Option<Vertex>,
}

impl ShortestPathTree {
    pub(crate) fn new(
        source: Vertex,
        algorithm: Algorithm,
        dist: Vec<Option<Distance>>,
        pred: Vec<Option<Vertex>>,
    ) -> Self {
        debug_assert_eq!(dist.len(), pred.len());
        ShortestPathTree {
            source,
            algorithm,
            dist,
            pred,
        }
    }

    pub fn source(&self) -> Vertex {
        self.source
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn vertex_count(&self) -> usize {
        self.dist.len()
    }

    /// Distance from the source to `v`, `None` if `v` is unreachable
    pub fn distance(&self, v: Vertex) -> Result<Option<Distance>> {
        ensure_vertex!(v, self.vertex_count());
        Ok(self.dist[v - 1])
    }

    /// Predecessor of `v` in the tree, `None` for the source and unreachable vertices
    pub fn predecessor(&self, v: Vertex) -> Result<Option<Vertex>> {
        ensure_vertex!(v, self.vertex_count());
        Ok(self.pred[v - 1])
    }

    pub fn is_reachable(&self, v: Vertex) -> Result<bool> {
        Ok(self.distance(v)?.is_some())
    }

    /// Number of vertices reachable from the source, the source included
    pub fn reachable_count(&self) -> usize {
        self.dist.iter().filter(|d| d.is_some()).count()
    }

    /// Rows for vertices `1..=n`, in order
    pub fn rows(&self) -> impl Iterator<Item = TreeRow> + '_ {
        self.dist
            .iter()
            .zip(&self.pred)
            .enumerate()
            .map(|(i, (&distance, &predecessor))| TreeRow {
                vertex: i + 1,
                distance,
                predecessor,
            })
    }

    /// Shortest path from the source to `target`
    ///
    /// An unreachable target is not an error: the result has `found == false`.
    pub fn path_to(&self, target: Vertex) -> Result<PathResult> {
        ensure_vertex!(target, self.vertex_count());
        Ok(reconstruct_path(
            self.source,
            target,
            &self.dist,
            &self.pred,
        ))
    }
}
