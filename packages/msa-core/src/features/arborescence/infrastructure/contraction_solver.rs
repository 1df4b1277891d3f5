//! Chu-Liu/Edmonds Contraction Solver
//!
//! Simple O(V·E) minimum arborescence computation.
//!
//! # Algorithm Overview
//! Each round:
//! 1. Choose the cheapest incoming edge of every vertex (the root gets a
//!    zero-weight self edge)
//! 2. Fail if a non-root vertex has no incoming edge
//! 3. Pay for all chosen edges
//! 4. Find cycles in the chosen-parent graph; if there are none, done
//! 5. Collapse each cycle into one vertex and reweight entering edges by
//!    `w − chosen_weight(dst)`, so the next round only pays the extra cost
//!    of breaking a cycle
//!
//! Every round removes at least one vertex, so there are at most V rounds.
//! Rounds run in a loop that rebinds the working edge list; nothing recurses.
//!
//! # References
//! - Chu, Y. J. & Liu, T. H. "On the Shortest Arborescence of a Directed Graph" (1965)
//! - Edmonds, J. "Optimum Branchings" (1967)

use std::time::Instant;
use tracing::debug;

use crate::features::arborescence::domain::{
    Edge, Graph, SolveResult, SolveStats, VertexId, Weight,
};
use crate::features::arborescence::ports::{ArborescenceSolver, SolverKind};

/// Contraction-based minimum arborescence solver
///
/// # Example
/// ```rust
/// use msa_core::features::arborescence::domain::Graph;
/// use msa_core::features::arborescence::infrastructure::ContractionSolver;
///
/// let graph = Graph::from_edges(3, [(1, 2, 1i64), (2, 1, 1), (0, 1, 10)]);
/// let result = ContractionSolver::new().solve(&graph, 0);
/// assert_eq!(result.weight, Some(11));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ContractionSolver;

impl ContractionSolver {
    pub fn new() -> Self {
        Self
    }

    /// Compute the minimum arborescence weight rooted at `root`
    ///
    /// `graph` is only read; contraction rounds work on a private copy of
    /// its edges.
    pub fn solve<W: Weight>(&self, graph: &Graph<W>, root: VertexId) -> SolveResult<W> {
        let start = Instant::now();
        let mut stats = SolveStats::default();

        let weight = contract(graph, root, &mut stats);

        stats.duration_ms = start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "contraction solver: weight={:?} rounds={} contractions={} ({:.3}ms)",
            weight, stats.rounds, stats.contractions, stats.duration_ms
        );

        SolveResult { weight, stats }
    }
}

impl<W: Weight> ArborescenceSolver<W> for ContractionSolver {
    fn kind(&self) -> SolverKind {
        SolverKind::Contraction
    }

    fn solve(&self, graph: &Graph<W>, root: VertexId) -> SolveResult<W> {
        ContractionSolver::solve(self, graph, root)
    }
}

fn contract<W: Weight>(graph: &Graph<W>, root: VertexId, stats: &mut SolveStats) -> Option<W> {
    let mut n = graph.vertex_count();
    let mut root = root;
    let mut edges: Vec<Edge<W>> = graph
        .edges()
        .iter()
        .filter(|e| !e.is_self_loop())
        .copied()
        .collect();
    let mut total = W::zero();

    loop {
        stats.rounds += 1;
        stats.edges_examined += edges.len();

        // Phase 1: cheapest incoming edge, first seen wins ties
        let mut cheapest: Vec<Option<Edge<W>>> = vec![None; n];
        for edge in &edges {
            match cheapest[edge.dst] {
                Some(best) if best.weight <= edge.weight => {}
                _ => cheapest[edge.dst] = Some(*edge),
            }
        }
        cheapest[root] = Some(Edge::anchor(root));

        // Phase 2: an unreachable vertex means no arborescence
        if let Some(v) = cheapest.iter().position(Option::is_none) {
            debug!(
                "contraction round {}: vertex {} has no incoming edge",
                stats.rounds, v
            );
            return None;
        }
        let chosen: Vec<Edge<W>> = cheapest.into_iter().flatten().collect();

        for edge in &chosen {
            total += edge.weight;
        }

        // Phase 3: cycles of the chosen-parent functional graph
        let mut mark: Vec<Option<VertexId>> = vec![None; n];
        let mut component: Vec<Option<usize>> = vec![None; n];
        let mut next_id = 0usize;

        for v in 0..n {
            if mark[v].is_some() {
                continue;
            }

            let mut cur = v;
            while mark[cur].is_none() {
                mark[cur] = Some(v);
                cur = chosen[cur].src;
            }

            // Ran into an earlier walk, or closed on the root's anchor
            if mark[cur] != Some(v) || cur == root {
                continue;
            }

            let mut u = chosen[cur].src;
            while u != cur {
                component[u] = Some(next_id);
                u = chosen[u].src;
            }
            component[cur] = Some(next_id);
            next_id += 1;
        }

        if next_id == 0 {
            return Some(total);
        }
        stats.contractions += next_id;

        // Phase 4: singleton labels for everything outside a cycle
        let component: Vec<usize> = component
            .into_iter()
            .map(|label| {
                label.unwrap_or_else(|| {
                    let id = next_id;
                    next_id += 1;
                    id
                })
            })
            .collect();

        let root_component = component[root];
        edges = edges
            .iter()
            .filter(|e| component[e.src] != component[e.dst] && component[e.dst] != root_component)
            .map(|e| {
                Edge::new(
                    component[e.src],
                    component[e.dst],
                    e.weight - chosen[e.dst].weight,
                )
            })
            .collect();

        debug!(
            "contraction round {}: {} vertices -> {}, {} edges kept",
            stats.rounds,
            n,
            next_id,
            edges.len()
        );

        n = next_id;
        root = root_component;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(graph: &Graph<i64>, root: VertexId) -> Option<i64> {
        ContractionSolver::new().solve(graph, root).weight
    }

    #[test]
    fn test_single_edge() {
        let graph = Graph::from_edges(2, [(0, 1, 5i64)]);
        assert_eq!(solve(&graph, 0), Some(5));
    }

    #[test]
    fn test_single_vertex() {
        let graph = Graph::<i64>::new(1);
        assert_eq!(solve(&graph, 0), Some(0));
    }

    #[test]
    fn test_unreachable_vertex() {
        let graph = Graph::from_edges(3, [(0, 1, 1i64)]);
        assert_eq!(solve(&graph, 0), None);
    }

    #[test]
    fn test_cycle_is_broken() {
        let graph = Graph::from_edges(3, [(1, 2, 1i64), (2, 1, 1), (0, 1, 10)]);
        let result = ContractionSolver::new().solve(&graph, 0);

        assert_eq!(result.weight, Some(11));
        assert_eq!(result.stats.rounds, 2);
        assert_eq!(result.stats.contractions, 1);
    }

    #[test]
    fn test_cheaper_entry_into_cycle_wins() {
        // cycle 1 <-> 2 (weights 2, 3); entering at 2 is cheaper overall
        let graph = Graph::from_edges(
            3,
            [(1, 2, 2i64), (2, 1, 3), (0, 1, 10), (0, 2, 6)],
        );
        // 0->2 (6) + 2->1 (3) = 9  vs  0->1 (10) + 1->2 (2) = 12
        assert_eq!(solve(&graph, 0), Some(9));
    }

    #[test]
    fn test_nested_cycles() {
        let graph = Graph::from_edges(
            5,
            [
                (0, 1, 9i64),
                (1, 2, 1),
                (2, 3, 1),
                (3, 1, 1),
                (3, 4, 2),
                (4, 3, 1),
                (0, 4, 8),
            ],
        );
        // 0->4 (8) + 4->3 (1) + 3->1 (1) + 1->2 (1) = 11
        assert_eq!(solve(&graph, 0), Some(11));
    }

    #[test]
    fn test_edges_into_root_are_ignored() {
        let graph = Graph::from_edges(3, [(0, 1, 2i64), (1, 2, 2), (2, 0, -50), (1, 0, -7)]);
        assert_eq!(solve(&graph, 0), Some(4));
    }

    #[test]
    fn test_negative_weights() {
        let graph = Graph::from_edges(3, [(0, 1, -3i64), (1, 2, -4), (0, 2, 1)]);
        assert_eq!(solve(&graph, 0), Some(-7));
    }

    #[test]
    fn test_real_weights() {
        let graph = Graph::from_edges(3, [(0, 1, 1.5f64), (1, 2, 0.25), (2, 1, 0.5), (0, 2, 4.0)]);
        let weight = ContractionSolver::new().solve(&graph, 0).weight.unwrap();
        assert!((weight - 1.75).abs() < 1e-12);
    }

    #[test]
    fn test_input_graph_is_untouched() {
        let graph = Graph::from_edges(3, [(1, 2, 1i64), (2, 1, 1), (0, 1, 10)]);
        let before = graph.clone();
        assert_eq!(solve(&graph, 0), solve(&graph, 0));
        assert_eq!(graph, before);
    }

    #[test]
    fn test_self_loops_are_skipped() {
        let graph = Graph::from_edges(3, [(1, 1, -100i64), (0, 1, 4), (1, 2, 3), (2, 2, -1)]);
        assert_eq!(solve(&graph, 0), Some(7));

        let lonely = Graph::from_edges(2, [(1, 1, 1i64)]);
        assert_eq!(solve(&lonely, 0), None);
    }
}
