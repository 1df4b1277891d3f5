//! Error types for msa-core
//!
//! Provides unified error handling across the crate.

use thiserror::Error;

use crate::config::ConfigError;

/// Main error type for arborescence operations
#[derive(Debug, Error)]
pub enum MsaError {
    /// Some vertex cannot be reached from the root
    #[error("No spanning arborescence rooted at vertex {root} exists")]
    NoArborescence { root: usize },

    /// Root index outside `0..vertex_count`
    #[error("Root {root} out of range for graph with {vertex_count} vertices")]
    RootOutOfRange { root: usize, vertex_count: usize },

    /// Edge endpoint outside `0..vertex_count`
    #[error("Edge #{edge} references vertex {vertex}, graph has {vertex_count} vertices")]
    VertexOutOfRange {
        edge: usize,
        vertex: usize,
        vertex_count: usize,
    },

    /// Edge with `src == dst`
    #[error("Edge #{edge} is a self-loop on vertex {vertex}")]
    SelfLoop { edge: usize, vertex: usize },

    /// Cross-check found the two solvers returning different totals
    #[error("Solvers disagree: contraction={contraction}, gabow={gabow}")]
    SolverDisagreement { contraction: String, gabow: String },

    /// Configuration error, including I/O while loading a config file
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl MsaError {
    /// Create a disagreement error from the two solver outcomes
    pub fn disagreement(contraction: impl std::fmt::Debug, gabow: impl std::fmt::Debug) -> Self {
        MsaError::SolverDisagreement {
            contraction: format!("{:?}", contraction),
            gabow: format!("{:?}", gabow),
        }
    }

    /// Whether this error only reports that the graph has no arborescence
    pub fn is_no_arborescence(&self) -> bool {
        matches!(self, MsaError::NoArborescence { .. })
    }
}

/// Result type alias for arborescence operations
pub type Result<T> = std::result::Result<T, MsaError>;
