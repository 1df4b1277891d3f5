//! Proptest strategies for random graphs

use msa_core::features::arborescence::Graph;
use proptest::prelude::*;

/// Small graphs: up to `max_vertices` vertices, no self-loops, root 0
pub fn small_graph(max_vertices: usize, max_edges: usize) -> impl Strategy<Value = Graph<i64>> {
    (1..=max_vertices).prop_flat_map(move |n| {
        prop::collection::vec((0..n, 0..n, -20i64..50), 0..=max_edges).prop_map(move |edges| {
            Graph::from_edges(n, edges.into_iter().filter(|(src, dst, _)| src != dst))
        })
    })
}

/// Small graph where every vertex is reachable from 0 through a spine of
/// `0 -> 1 -> ... -> n-1`, plus random extra edges
pub fn connected_graph(max_vertices: usize, max_edges: usize) -> impl Strategy<Value = Graph<i64>> {
    (2..=max_vertices).prop_flat_map(move |n| {
        (
            prop::collection::vec(1i64..100, n - 1),
            prop::collection::vec((0..n, 0..n, 1i64..100), 0..=max_edges),
        )
            .prop_map(move |(spine, extra)| {
                let mut graph = Graph::new(n);
                for (i, w) in spine.into_iter().enumerate() {
                    graph.add_edge(i, i + 1, w);
                }
                for (src, dst, w) in extra {
                    if src != dst {
                        graph.add_edge(src, dst, w);
                    }
                }
                graph
            })
    })
}
