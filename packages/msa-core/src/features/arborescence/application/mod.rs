//! Application layer for arborescence computation
//!
//! - **ArborescenceAnalyzer**: config-driven solver selection and cross-checking
//! - **RandomGraphGenerator**: seeded workloads for comparisons and benchmarks

pub mod analyzer;
pub mod generator;

pub use analyzer::{AnalysisResult, AnalysisStats, ArborescenceAnalyzer};
pub use generator::RandomGraphGenerator;
