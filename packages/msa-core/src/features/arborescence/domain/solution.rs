//! Solver output

use serde::{Deserialize, Serialize};

/// Outcome of one solver run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveResult<W> {
    /// Total weight of the minimum arborescence, `None` if none exists
    pub weight: Option<W>,

    /// Solver statistics
    pub stats: SolveStats,
}

/// Statistics shared by both solvers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolveStats {
    /// Contraction rounds (contraction solver) or walks started (Gabow)
    pub rounds: usize,
    /// Cycles contracted
    pub contractions: usize,
    /// Edges examined across all rounds, or heap extractions for Gabow
    pub edges_examined: usize,
    pub duration_ms: f64,
}

impl<W> SolveResult<W> {
    #[inline]
    pub fn exists(&self) -> bool {
        self.weight.is_some()
    }
}
