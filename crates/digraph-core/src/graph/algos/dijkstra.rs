use crate::error::Result;
use crate::graph::algos::shared::{check_source, RunState};
use crate::graph::tree::ShortestPathTree;
use crate::graph::types::{Algorithm, Distance, FrontierStrategy, Vertex};
use crate::graph::GraphProvider;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Min-heap entry for the binary-heap frontier.
///
/// Ordered by distance, then by vertex, so `Reverse<HeapEntry>` pops the
/// lowest-numbered vertex among equal distances, the same choice the linear
/// scan makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HeapEntry {
    pub distance: Distance,
    pub vertex: Vertex,
}

/// Relax every edge leaving the finalized vertex `v`.
///
/// Returns the vertices whose tentative distance improved.
fn relax_outbound(
    provider: &dyn GraphProvider,
    state: &mut RunState,
    done: &[bool],
    v: Vertex,
) -> Vec<(Vertex, Distance)> {
    let Some(base) = state.distance(v) else {
        return Vec::new();
    };

    let mut improved = Vec::new();
    for edge in provider.outbound_edges(v) {
        let u = edge.to;
        if done[u - 1] {
            continue;
        }
        let candidate = base.saturating_add(Distance::from(edge.weight));
        if state.distance(u).is_none_or(|current| candidate < current) {
            state.settle(u, candidate, v);
            improved.push((u, candidate));
        }
    }
    improved
}

/// Closest reached vertex that is not finalized yet.
///
/// Strict `<` keeps the first minimum met, so the lowest index wins ties.
/// `None` once every reachable vertex is done.
fn find_smallest_undone_distance_vertex(state: &RunState, done: &[bool]) -> Option<Vertex> {
    let mut best: Option<(Vertex, Distance)> = None;

    for (i, &is_done) in done.iter().enumerate() {
        let v = i + 1;
        if is_done {
            continue;
        }
        if let Some(d) = state.distance(v) {
            if best.is_none_or(|(_, min)| d < min) {
                best = Some((v, d));
            }
        }
    }

    best.map(|(v, _)| v)
}

fn run_linear_scan(provider: &dyn GraphProvider, state: &mut RunState, source: Vertex) {
    let mut done = vec![false; provider.vertex_count()];
    done[source - 1] = true;
    let mut v = source;

    loop {
        relax_outbound(provider, state, &done, v);

        let Some(next) = find_smallest_undone_distance_vertex(state, &done) else {
            break;
        };
        done[next - 1] = true;
        tracing::trace!(vertex = next, distance = ?state.distance(next), "finalize");
        v = next;
    }
}

fn run_binary_heap(provider: &dyn GraphProvider, state: &mut RunState, source: Vertex) {
    let mut done = vec![false; provider.vertex_count()];
    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();
    heap.push(Reverse(HeapEntry {
        distance: 0,
        vertex: source,
    }));

    while let Some(Reverse(HeapEntry { distance, vertex })) = heap.pop() {
        // Stale entry: the vertex was finalized through a shorter entry
        if done[vertex - 1] {
            continue;
        }
        done[vertex - 1] = true;
        tracing::trace!(vertex, distance, "finalize");

        for (u, candidate) in relax_outbound(provider, state, &done, vertex) {
            heap.push(Reverse(HeapEntry {
                distance: candidate,
                vertex: u,
            }));
        }
    }
}

/// Build the weighted shortest-path tree rooted at `source`
///
/// Weights are unsigned, so the greedy frontier is always correct. See
/// [`FrontierStrategy`] for the two ways of choosing the next vertex; both
/// return the same tree.
#[tracing::instrument(skip(provider, strategy), fields(vertices = provider.vertex_count(), strategy = %strategy))]
pub fn dijkstra_tree(
    provider: &dyn GraphProvider,
    source: Vertex,
    strategy: FrontierStrategy,
) -> Result<ShortestPathTree> {
    check_source(provider, source)?;

    let mut state = RunState::new(provider.vertex_count(), source);
    match strategy {
        FrontierStrategy::LinearScan => run_linear_scan(provider, &mut state, source),
        FrontierStrategy::BinaryHeap => run_binary_heap(provider, &mut state, source),
    }

    let tree = state.into_tree(Algorithm::Dijkstra);
    tracing::debug!(reachable = tree.reachable_count(), "dijkstra_complete");
    Ok(tree)
}

#[cfg(test)]
mod tests;
