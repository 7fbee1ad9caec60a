use crate::error::Result;
use crate::graph::algos::shared::{check_source, RunState};
use crate::graph::tree::ShortestPathTree;
use crate::graph::types::{Algorithm, Vertex};
use crate::graph::GraphProvider;
use std::collections::VecDeque;

/// Build the unweighted shortest-path tree rooted at `source`
///
/// Distances are hop counts; edge weights are ignored. Each vertex is
/// claimed by the first dequeued vertex that reaches it, following
/// adjacency-list order.
#[tracing::instrument(skip(provider), fields(vertices = provider.vertex_count()))]
pub fn bfs_tree(provider: &dyn GraphProvider, source: Vertex) -> Result<ShortestPathTree> {
    check_source(provider, source)?;

    let mut state = RunState::new(provider.vertex_count(), source);
    let mut queue: VecDeque<Vertex> = VecDeque::new();
    queue.push_back(source);

    while let Some(v) = queue.pop_front() {
        let hops = state.distance(v).unwrap_or_default() + 1;

        for edge in provider.outbound_edges(v) {
            let u = edge.to;
            if !state.is_reached(u) {
                state.settle(u, hops, v);
                queue.push_back(u);
            }
        }
    }

    let tree = state.into_tree(Algorithm::Bfs);
    tracing::debug!(reachable = tree.reachable_count(), "bfs_complete");
    Ok(tree)
}
