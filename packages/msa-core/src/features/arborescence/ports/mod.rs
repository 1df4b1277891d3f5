//! Ports (Interfaces) for arborescence solving
//!
//! One behavioral contract, two interchangeable strategies:
//! - **Trait Objects**: runtime selection (`Box<dyn ArborescenceSolver<W>>`)
//! - **Generic Bounds**: compile-time selection (`S: ArborescenceSolver<W>`)
//! - **Factory**: `SolverFactory` maps a [`SolverKind`] to a strategy
//!
//! Every implementation must return the same total weight for the same graph
//! and root, or agree that no arborescence exists.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::features::arborescence::domain::{Graph, SolveResult, VertexId, Weight};
use crate::features::arborescence::infrastructure::{ContractionSolver, GabowSolver};

// ============================================================================
// Core Trait
// ============================================================================

/// Minimum spanning arborescence solver
///
/// # Example (Generic - Zero-cost)
/// ```ignore
/// fn weigh<S: ArborescenceSolver<i64>>(solver: &S, graph: &Graph<i64>) -> Option<i64> {
///     solver.find_arborescence(graph, 0)
/// }
/// ```
pub trait ArborescenceSolver<W: Weight>: Send + Sync {
    /// Which strategy this is
    fn kind(&self) -> SolverKind;

    /// Solve for `root`, returning the weight and run statistics
    ///
    /// Preconditions: `root < graph.vertex_count()`, every edge endpoint is in
    /// range and no edge is a self-loop.
    fn solve(&self, graph: &Graph<W>, root: VertexId) -> SolveResult<W>;

    /// Total weight of the minimum arborescence, `None` if none exists
    fn find_arborescence(&self, graph: &Graph<W>, root: VertexId) -> Option<W> {
        self.solve(graph, root).weight
    }
}

/// Solver strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolverKind {
    /// Chu-Liu/Edmonds contraction, O(V·E)
    Contraction,
    /// Gabow et al. union-find + lazy heap, O(E log V)
    Gabow,
}

impl SolverKind {
    pub const ALL: [SolverKind; 2] = [SolverKind::Contraction, SolverKind::Gabow];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contraction => "contraction",
            Self::Gabow => "gabow",
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Factory Pattern
// ============================================================================

/// Factory for solver strategies
pub struct SolverFactory;

impl SolverFactory {
    /// Create a solver as a trait object (runtime polymorphism)
    pub fn create_boxed<W: Weight>(kind: SolverKind) -> Box<dyn ArborescenceSolver<W>> {
        match kind {
            SolverKind::Contraction => Box::new(ContractionSolver::new()),
            SolverKind::Gabow => Box::new(GabowSolver::new()),
        }
    }
}

// ============================================================================
// Generic helper functions
// ============================================================================

/// Run any solver (compile-time polymorphism)
pub fn run_solver<W: Weight, S: ArborescenceSolver<W>>(
    solver: &S,
    graph: &Graph<W>,
    root: VertexId,
) -> SolveResult<W> {
    solver.solve(graph, root)
}

/// Minimum arborescence weight of `graph` rooted at `root` using `kind`
pub fn find_arborescence<W: Weight>(graph: &Graph<W>, root: VertexId, kind: SolverKind) -> Option<W> {
    SolverFactory::create_boxed(kind).find_arborescence(graph, root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_kinds() {
        for kind in SolverKind::ALL {
            let solver = SolverFactory::create_boxed::<i64>(kind);
            assert_eq!(solver.kind(), kind);
        }
    }

    #[test]
    fn test_strategies_are_interchangeable() {
        let graph = Graph::from_edges(3, [(1, 2, 1i64), (2, 1, 1), (0, 1, 10)]);
        for kind in SolverKind::ALL {
            assert_eq!(find_arborescence(&graph, 0, kind), Some(11), "{kind}");
        }
    }

    #[test]
    fn test_generic_helper() {
        let graph = Graph::from_edges(2, [(0, 1, 5i32)]);
        let result = run_solver(&GabowSolver::new(), &graph, 0);
        assert_eq!(result.weight, Some(5));
        assert!(result.exists());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(SolverKind::Gabow.to_string(), "gabow");
        assert_eq!(SolverKind::Contraction.to_string(), "contraction");
    }
}
