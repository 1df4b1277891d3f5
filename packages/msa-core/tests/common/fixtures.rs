//! Hand-checked graphs with known minimum arborescence weights

use msa_core::features::arborescence::{Graph, SolverFactory, SolverKind, Weight};

/// `0 -> 1` with weight 5, root 0 => 5
pub fn single_edge() -> Graph<i64> {
    Graph::from_edges(2, [(0, 1, 5)])
}

/// Vertex 2 has no incoming edge => no arborescence from 0
pub fn unreachable_vertex() -> Graph<i64> {
    Graph::from_edges(3, [(0, 1, 1)])
}

/// Cheap 2-cycle on {1, 2} entered from the root => 11
pub fn two_cycle() -> Graph<i64> {
    Graph::from_edges(3, [(1, 2, 1), (2, 1, 1), (0, 1, 10)])
}

/// Cycle {1, 2, 3} feeding a second cycle {4, 5}; each cycle has two entries
pub fn nested_cycles() -> Graph<i64> {
    Graph::from_edges(
        6,
        [
            (1, 2, 1),
            (2, 3, 1),
            (3, 1, 1),
            (4, 5, 2),
            (5, 4, 2),
            (0, 1, 10),
            (0, 2, 6),
            (3, 4, 9),
            (0, 5, 20),
        ],
    )
}

/// Weight of [`nested_cycles`] rooted at 0
///
/// 0->2 (6) + 2->3 (1) + 3->1 (1) + 3->4 (9) + 4->5 (2)
pub const NESTED_CYCLES_WEIGHT: i64 = 19;

/// Run every registered solver
pub fn solve_all<W: Weight>(graph: &Graph<W>, root: usize) -> Vec<(SolverKind, Option<W>)> {
    SolverKind::ALL
        .iter()
        .map(|&kind| (kind, SolverFactory::create_boxed::<W>(kind).find_arborescence(graph, root)))
        .collect()
}
