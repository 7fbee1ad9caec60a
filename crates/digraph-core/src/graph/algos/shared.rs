use crate::ensure_vertex;
use crate::error::Result;
use crate::graph::tree::ShortestPathTree;
use crate::graph::types::{Algorithm, Distance, Vertex};
use crate::graph::GraphProvider;

/// Reject a source vertex outside the provider's range
pub fn check_source(provider: &dyn GraphProvider, source: Vertex) -> Result<()> {
    ensure_vertex!(source, provider.vertex_count());
    Ok(())
}

/// Tentative distances and predecessors while an algorithm runs
///
/// Indexed by vertex (1-based); the source starts at distance 0 and every
/// other vertex unreached.
#[derive(Debug)]
pub struct RunState {
    source: Vertex,
    dist: Vec<Option<Distance>>,
    pred: Vec<Option<Vertex>>,
}

impl RunState {
    pub fn new(vertex_count: usize, source: Vertex) -> Self {
        let mut dist = vec![None; vertex_count];
        dist[source - 1] = Some(0);
        Self {
            source,
            dist,
            pred: vec![None; vertex_count],
        }
    }

    pub fn distance(&self, v: Vertex) -> Option<Distance> {
        self.dist[v - 1]
    }

    pub fn is_reached(&self, v: Vertex) -> bool {
        self.dist[v - 1].is_some()
    }

    /// Record `distance` for `v`, reached through `via`
    pub fn settle(&mut self, v: Vertex, distance: Distance, via: Vertex) {
        self.dist[v - 1] = Some(distance);
        self.pred[v - 1] = Some(via);
    }

    pub fn into_tree(self, algorithm: Algorithm) -> ShortestPathTree {
        ShortestPathTree::new(self.source, algorithm, self.dist, self.pred)
    }
}
