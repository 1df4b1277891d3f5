//! Solver configuration system
//!
//! Presets, builder overrides and versioned YAML files, all funneling into
//! one validated [`SolverConfig`].

pub mod error;
pub mod preset;
pub mod solver_config;

pub use error::{ConfigError, ConfigResult};
pub use preset::Preset;
pub use solver_config::{
    ConfigFileV1, SolverConfig, SolverConfigPatch, SolverStrategy, SUPPORTED_VERSIONS,
};
