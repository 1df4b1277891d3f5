//! Domain models for arborescence computation
//!
//! Solver-independent input representation:
//! - Weight: numeric cost abstraction (integer or real)
//! - Edge: directed weighted edge
//! - Graph: immutable-per-solve vertex/edge container
//! - SolveResult: total weight (or none) plus solver statistics

pub mod edge;
pub mod graph;
pub mod solution;
pub mod weight;

pub use edge::{Edge, VertexId};
pub use graph::Graph;
pub use solution::{SolveResult, SolveStats};
pub use weight::Weight;
