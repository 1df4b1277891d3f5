//! Minimum Spanning Arborescence
//!
//! Given a weighted directed graph and a root, find the minimum total weight
//! of a set of edges in which every non-root vertex has exactly one incoming
//! edge and every vertex is reachable from the root.
//!
//! # Algorithms
//! - **Contraction** (Chu-Liu/Edmonds): O(V·E), repeatedly picks the cheapest
//!   incoming edge per vertex and contracts the cycles this creates
//! - **Gabow**: O(E log V), walks backwards from each vertex using a
//!   union-find over contracted components and lazy mergeable heaps of
//!   incoming edges
//!
//! # Architecture
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │ application   ArborescenceAnalyzer, RandomGraphGenerator  │
//! ├───────────────────────────────────────────────────────────┤
//! │ ports         ArborescenceSolver, SolverKind, Factory     │
//! ├───────────────────────────────────────────────────────────┤
//! │ infrastructure ContractionSolver, GabowSolver,            │
//! │                LazyHeap, DisjointSet                      │
//! ├───────────────────────────────────────────────────────────┤
//! │ domain        Graph, Edge, Weight, SolveResult            │
//! └───────────────────────────────────────────────────────────┘
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::{AnalysisResult, AnalysisStats, ArborescenceAnalyzer, RandomGraphGenerator};
pub use domain::{Edge, Graph, SolveResult, SolveStats, VertexId, Weight};
pub use infrastructure::{ContractionSolver, DisjointSet, GabowSolver, LazyHeap};
pub use ports::{find_arborescence, run_solver, ArborescenceSolver, SolverFactory, SolverKind};
