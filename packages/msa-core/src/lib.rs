//! msa-core: minimum spanning arborescence solvers
//!
//! Two interchangeable solvers behind one port, a config-driven analyzer on
//! top, and the union-find and lazy heap they are built from.
//!
//! ```rust
//! use msa_core::{find_arborescence, Graph, SolverKind};
//!
//! let graph = Graph::from_edges(3, [(1, 2, 1i64), (2, 1, 1), (0, 1, 10)]);
//! assert_eq!(find_arborescence(&graph, 0, SolverKind::Gabow), Some(11));
//! assert_eq!(find_arborescence(&graph, 1, SolverKind::Contraction), None);
//! ```

pub mod config;
pub mod errors;
pub mod features;

pub use config::{Preset, SolverConfig, SolverStrategy};
pub use errors::{MsaError, Result};
pub use features::arborescence::{
    find_arborescence, AnalysisResult, ArborescenceAnalyzer, ArborescenceSolver, ContractionSolver,
    Edge, GabowSolver, Graph, SolveResult, SolverKind, VertexId, Weight,
};
