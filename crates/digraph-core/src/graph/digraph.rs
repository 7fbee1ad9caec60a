//! Mutable directed graph backed by per-vertex adjacency lists

use crate::ensure_vertex;
use crate::error::{DigraphError, Result};
use crate::graph::algos::{bfs_tree, dijkstra_tree};
use crate::graph::tree::ShortestPathTree;
use crate::graph::types::{Algorithm, Edge, FrontierStrategy, Vertex, Weight};
use crate::graph::GraphProvider;

/// A directed graph over the vertices `1..=n`.
///
/// Each vertex owns the ordered list of its outgoing edges. At most one edge
/// exists per ordered `(from, to)` pair; inserting the same link again only
/// updates its weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digraph {
    /// Outgoing edges, slot `v - 1` for vertex `v`
    table: Vec<Vec<Edge>>,
    n_edges: usize,
}

impl Digraph {
    /// Create a graph with `n` vertices and no edges
    pub fn new(n: usize) -> Result<Self> {
        if n < 1 {
            return Err(DigraphError::EmptyGraph);
        }
        Ok(Digraph {
            table: vec![Vec::new(); n],
            n_edges: 0,
        })
    }

    /// Create a graph with `n` vertices and insert `edges` in order
    pub fn from_edges<I>(edges: I, n: usize) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        let mut graph = Digraph::new(n)?;
        for edge in edges {
            graph.insert_edge(edge.into())?;
        }
        Ok(graph)
    }

    /// Insert `e`, or update the weight of the edge already linking
    /// `e.from -> e.to`
    pub fn insert_edge(&mut self, e: Edge) -> Result<()> {
        self.check_vertex(e.from)?;
        self.check_vertex(e.to)?;

        let list = &mut self.table[e.from - 1];
        match list.iter_mut().find(|ed| e.links_same_vertices(ed)) {
            Some(existing) => {
                tracing::debug!(
                    from = e.from,
                    to = e.to,
                    old_weight = existing.weight,
                    new_weight = e.weight,
                    "update_edge"
                );
                existing.weight = e.weight;
            }
            None => {
                tracing::debug!(from = e.from, to = e.to, weight = e.weight, "insert_edge");
                list.push(e);
                self.n_edges += 1;
            }
        }
        Ok(())
    }

    /// Remove the edge linking `e.from -> e.to`; its weight is not compared.
    ///
    /// Fails with [`DigraphError::EdgeNotFound`] when no such edge exists.
    pub fn remove_edge(&mut self, e: Edge) -> Result<()> {
        self.check_vertex(e.from)?;
        self.check_vertex(e.to)?;

        let list = &mut self.table[e.from - 1];
        let Some(pos) = list.iter().position(|ed| e.links_same_vertices(ed)) else {
            return Err(DigraphError::EdgeNotFound {
                from: e.from,
                to: e.to,
            });
        };

        list.remove(pos);
        self.n_edges -= 1;
        tracing::debug!(from = e.from, to = e.to, "remove_edge");
        Ok(())
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.table.len()
    }

    /// Number of edges
    pub fn edge_count(&self) -> usize {
        self.n_edges
    }

    /// All vertex identifiers, in increasing order
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> {
        1..=self.vertex_count()
    }

    /// Outgoing edges of `v`, in insertion order
    pub fn edges_from(&self, v: Vertex) -> Result<&[Edge]> {
        self.check_vertex(v)?;
        Ok(&self.table[v - 1])
    }

    /// Every edge, grouped by source vertex
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.table.iter().flatten()
    }

    pub fn contains_edge(&self, from: Vertex, to: Vertex) -> Result<bool> {
        Ok(self.edge_weight(from, to)?.is_some())
    }

    /// Weight of the edge `from -> to`, if present
    pub fn edge_weight(&self, from: Vertex, to: Vertex) -> Result<Option<Weight>> {
        self.check_vertex(to)?;
        Ok(self
            .edges_from(from)?
            .iter()
            .find(|e| e.to == to)
            .map(|e| e.weight))
    }

    /// Unweighted single-source shortest paths (breadth-first search)
    pub fn uwsssp(&self, source: Vertex) -> Result<ShortestPathTree> {
        bfs_tree(self, source)
    }

    /// Weighted single-source shortest paths (Dijkstra, linear-scan frontier)
    pub fn pwsssp(&self, source: Vertex) -> Result<ShortestPathTree> {
        self.pwsssp_with(source, FrontierStrategy::LinearScan)
    }

    /// Weighted single-source shortest paths with an explicit frontier strategy
    pub fn pwsssp_with(
        &self,
        source: Vertex,
        strategy: FrontierStrategy,
    ) -> Result<ShortestPathTree> {
        dijkstra_tree(self, source, strategy)
    }

    /// Run `algorithm` from `source`; Dijkstra uses the linear-scan frontier
    pub fn shortest_paths(&self, source: Vertex, algorithm: Algorithm) -> Result<ShortestPathTree> {
        match algorithm {
            Algorithm::Bfs => self.uwsssp(source),
            Algorithm::Dijkstra => self.pwsssp(source),
        }
    }

    fn check_vertex(&self, v: Vertex) -> Result<()> {
        ensure_vertex!(v, self.vertex_count());
        Ok(())
    }
}

impl GraphProvider for Digraph {
    fn vertex_count(&self) -> usize {
        self.table.len()
    }

    fn outbound_edges(&self, v: Vertex) -> &[Edge] {
        &self.table[v - 1]
    }
}
