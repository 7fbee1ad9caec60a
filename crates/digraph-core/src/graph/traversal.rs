use crate::graph::types::{Edge, Vertex};

/// Trait for providing graph adjacency to the shortest-path algorithms
///
/// Implementors expose vertices `1..=vertex_count()`. Callers validate a
/// vertex before asking for its edges, so `outbound_edges` may index
/// directly.
pub trait GraphProvider {
    fn vertex_count(&self) -> usize;
    fn outbound_edges(&self, v: Vertex) -> &[Edge];
}
