use super::*;
use crate::graph::{Digraph, Edge};

const STRATEGIES: [FrontierStrategy; 2] =
    [FrontierStrategy::LinearScan, FrontierStrategy::BinaryHeap];

fn triangle() -> Digraph {
    Digraph::from_edges([(1, 2, 1), (2, 3, 1), (1, 3, 5)], 3).unwrap()
}

/// Test HeapEntry comparison ordering
#[test]
fn test_heap_entry_ordering() {
    let near = HeapEntry {
        distance: 1,
        vertex: 9,
    };
    let far = HeapEntry {
        distance: 2,
        vertex: 1,
    };
    let near_low = HeapEntry {
        distance: 1,
        vertex: 3,
    };

    assert!(near < far);
    assert!(near_low < near);

    let mut heap = BinaryHeap::new();
    heap.push(Reverse(far));
    heap.push(Reverse(near));
    heap.push(Reverse(near_low));
    assert_eq!(heap.pop().map(|Reverse(e)| e), Some(near_low));
    assert_eq!(heap.pop().map(|Reverse(e)| e), Some(near));
    assert_eq!(heap.pop().map(|Reverse(e)| e), Some(far));
}

#[test]
fn test_dijkstra_prefers_cheaper_detour() {
    for strategy in STRATEGIES {
        let tree = dijkstra_tree(&triangle(), 1, strategy).unwrap();

        assert_eq!(tree.distance(1).unwrap(), Some(0));
        assert_eq!(tree.distance(2).unwrap(), Some(1));
        assert_eq!(tree.distance(3).unwrap(), Some(2));
        assert_eq!(tree.predecessor(1).unwrap(), None);
        assert_eq!(tree.predecessor(2).unwrap(), Some(1));
        assert_eq!(tree.predecessor(3).unwrap(), Some(2));

        let path = tree.path_to(3).unwrap();
        assert_eq!(path.vertices, vec![1, 2, 3]);
        assert_eq!(path.distance, Some(2));
    }
}

#[test]
fn test_dijkstra_isolated_vertex_unreached() {
    for strategy in STRATEGIES {
        let g = Digraph::from_edges([(1, 2, 1), (2, 3, 1), (1, 3, 5)], 4).unwrap();
        let tree = dijkstra_tree(&g, 1, strategy).unwrap();

        assert_eq!(tree.distance(4).unwrap(), None);
        assert_eq!(tree.predecessor(4).unwrap(), None);
        assert!(!tree.path_to(4).unwrap().is_found());
    }
}

#[test]
fn test_dijkstra_tie_goes_to_lowest_vertex() {
    // 2 and 3 both sit at distance 1 and both reach 4 at distance 2.
    // Vertex 2 is finalized first, so it claims 4; 3 cannot improve on it.
    let g = Digraph::from_edges([(1, 3, 1), (1, 2, 1), (3, 4, 1), (2, 4, 1)], 4).unwrap();

    for strategy in STRATEGIES {
        let tree = dijkstra_tree(&g, 1, strategy).unwrap();
        assert_eq!(tree.distance(4).unwrap(), Some(2));
        assert_eq!(tree.predecessor(4).unwrap(), Some(2));
    }
}

#[test]
fn test_dijkstra_zero_weight_edges() {
    let g = Digraph::from_edges([(1, 2, 0), (2, 3, 0), (1, 3, 1)], 3).unwrap();

    for strategy in STRATEGIES {
        let tree = dijkstra_tree(&g, 1, strategy).unwrap();
        assert_eq!(tree.distance(3).unwrap(), Some(0));
        assert_eq!(tree.path_to(3).unwrap().vertices, vec![1, 2, 3]);
    }
}

#[test]
fn test_dijkstra_does_not_relax_into_source() {
    let g = Digraph::from_edges([(1, 2, 1), (2, 1, 0)], 2).unwrap();

    for strategy in STRATEGIES {
        let tree = dijkstra_tree(&g, 1, strategy).unwrap();
        assert_eq!(tree.distance(1).unwrap(), Some(0));
        assert_eq!(tree.predecessor(1).unwrap(), None);
    }
}

#[test]
fn test_dijkstra_large_weights_do_not_overflow() {
    let g = Digraph::from_edges(
        [(1, 2, u32::MAX), (2, 3, u32::MAX), (3, 4, u32::MAX)],
        4,
    )
    .unwrap();

    for strategy in STRATEGIES {
        let tree = dijkstra_tree(&g, 1, strategy).unwrap();
        assert_eq!(tree.distance(4).unwrap(), Some(3 * u64::from(u32::MAX)));
    }
}

#[test]
fn test_dijkstra_sees_weight_updates() {
    let mut g = triangle();
    g.insert_edge(Edge::new(1, 3, 1)).unwrap();

    let tree = dijkstra_tree(&g, 1, FrontierStrategy::LinearScan).unwrap();
    assert_eq!(tree.distance(3).unwrap(), Some(1));
    assert_eq!(tree.predecessor(3).unwrap(), Some(1));
}

#[test]
fn test_dijkstra_earlier_tree_survives_mutation() {
    let mut g = triangle();
    let before = dijkstra_tree(&g, 1, FrontierStrategy::LinearScan).unwrap();

    g.remove_edge(Edge::new(2, 3, 0)).unwrap();
    let after = dijkstra_tree(&g, 1, FrontierStrategy::LinearScan).unwrap();

    assert_eq!(before.distance(3).unwrap(), Some(2));
    assert_eq!(after.distance(3).unwrap(), Some(5));
    assert_eq!(after.predecessor(3).unwrap(), Some(1));
}

#[test]
fn test_dijkstra_from_other_source() {
    let tree = dijkstra_tree(&triangle(), 2, FrontierStrategy::BinaryHeap).unwrap();
    assert_eq!(tree.source(), 2);
    assert_eq!(tree.distance(1).unwrap(), None);
    assert_eq!(tree.distance(3).unwrap(), Some(1));
}

#[test]
fn test_dijkstra_rejects_invalid_source() {
    for strategy in STRATEGIES {
        assert!(dijkstra_tree(&triangle(), 0, strategy).is_err());
        assert!(dijkstra_tree(&triangle(), 4, strategy).is_err());
    }
}

#[test]
fn test_strategies_build_identical_trees() {
    let g = Digraph::from_edges(
        [
            (1, 2, 4),
            (1, 3, 2),
            (3, 2, 2),
            (2, 4, 1),
            (3, 4, 3),
            (4, 5, 2),
            (3, 5, 5),
            (5, 6, 0),
            (6, 4, 1),
        ],
        7,
    )
    .unwrap();

    for source in g.vertices() {
        let linear = dijkstra_tree(&g, source, FrontierStrategy::LinearScan).unwrap();
        let heap = dijkstra_tree(&g, source, FrontierStrategy::BinaryHeap).unwrap();
        assert_eq!(linear, heap, "trees differ for source {}", source);
    }
}

#[test]
fn test_find_smallest_undone_distance_vertex() {
    let mut state = RunState::new(4, 1);
    state.settle(3, 5, 1);
    state.settle(4, 5, 1);

    let mut done = vec![true, false, false, false];
    assert_eq!(find_smallest_undone_distance_vertex(&state, &done), Some(3));

    done[2] = true;
    assert_eq!(find_smallest_undone_distance_vertex(&state, &done), Some(4));

    done[3] = true;
    assert_eq!(find_smallest_undone_distance_vertex(&state, &done), None);
}
