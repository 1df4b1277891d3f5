//! Solver configuration
//!
//! Three levels, most users only need the first:
//! - Preset: `SolverConfig::from_preset(Preset::Fast)`
//! - Builder override: `SolverConfig::default().auto_threshold(500)`
//! - YAML file (schema v1): `SolverConfig::from_yaml("solver.yaml")`
//!
//! ```yaml
//! version: 1
//! preset: balanced
//! overrides:
//!   strategy: crosscheck
//!   tolerance: 1.0e-6
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{ConfigError, ConfigResult};
use super::preset::Preset;
use crate::features::arborescence::ports::SolverKind;

/// Supported YAML schema versions
pub const SUPPORTED_VERSIONS: [u32; 1] = [1];

/// Strategy selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolverStrategy {
    /// Chu-Liu/Edmonds always
    Contraction,

    /// Gabow always
    Gabow,

    /// Contraction below `auto_threshold` edges, Gabow at or above
    Auto,

    /// Run both and require identical totals
    CrossCheck,
}

impl SolverStrategy {
    /// Concrete solver for a graph with `edge_count` edges.
    ///
    /// `None` for [`SolverStrategy::CrossCheck`], which runs every solver.
    pub fn resolve(&self, edge_count: usize, auto_threshold: usize) -> Option<SolverKind> {
        match self {
            Self::Contraction => Some(SolverKind::Contraction),
            Self::Gabow => Some(SolverKind::Gabow),
            Self::Auto if edge_count >= auto_threshold => Some(SolverKind::Gabow),
            Self::Auto => Some(SolverKind::Contraction),
            Self::CrossCheck => None,
        }
    }
}

impl Default for SolverStrategy {
    fn default() -> Self {
        SolverStrategy::Auto
    }
}

/// Arborescence solver configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolverConfig {
    /// Strategy selection
    pub strategy: SolverStrategy,

    /// Auto mode: edge count at or above which Gabow is used
    pub auto_threshold: usize,

    /// Check indices and self-loops before solving
    pub validate_input: bool,

    /// Relative tolerance when cross-checking real-valued totals
    pub tolerance: f64,
}

impl SolverConfig {
    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.auto_threshold == 0 || self.auto_threshold > 100_000_000 {
            return Err(ConfigError::range_with_hint(
                "auto_threshold",
                self.auto_threshold,
                1,
                100_000_000,
                "Auto threshold is an edge count",
            ));
        }

        if !self.tolerance.is_finite() || !(0.0..=1.0).contains(&self.tolerance) {
            return Err(ConfigError::range_with_hint(
                "tolerance",
                self.tolerance,
                0.0,
                1.0,
                "Tolerance is relative to the total weight",
            ));
        }

        Ok(())
    }

    /// Builder: Set strategy
    pub fn strategy(mut self, v: SolverStrategy) -> Self {
        self.strategy = v;
        self
    }

    /// Builder: Set auto_threshold
    pub fn auto_threshold(mut self, v: usize) -> Self {
        self.auto_threshold = v;
        self
    }

    /// Builder: Set validate_input
    pub fn validate_input(mut self, v: bool) -> Self {
        self.validate_input = v;
        self
    }

    /// Builder: Set tolerance
    pub fn tolerance(mut self, v: f64) -> Self {
        self.tolerance = v;
        self
    }

    /// Get preset configuration
    pub fn from_preset(preset: Preset) -> Self {
        match preset {
            Preset::Fast => Self {
                strategy: SolverStrategy::Gabow,
                auto_threshold: 1_000,
                validate_input: false,
                tolerance: 1e-9,
            },
            Preset::Balanced | Preset::Custom => Self {
                strategy: SolverStrategy::Auto,
                auto_threshold: 1_000,
                validate_input: true,
                tolerance: 1e-9,
            },
            Preset::Thorough => Self {
                strategy: SolverStrategy::CrossCheck,
                auto_threshold: 1_000,
                validate_input: true,
                tolerance: 1e-9,
            },
        }
    }

    /// Apply a partial override
    pub fn apply(mut self, patch: &SolverConfigPatch) -> Self {
        if let Some(v) = patch.strategy {
            self.strategy = v;
        }
        if let Some(v) = patch.auto_threshold {
            self.auto_threshold = v;
        }
        if let Some(v) = patch.validate_input {
            self.validate_input = v;
        }
        if let Some(v) = patch.tolerance {
            self.tolerance = v;
        }
        self
    }

    // ═══════════════════════════════════════════════════════════════════════
    // YAML I/O
    // ═══════════════════════════════════════════════════════════════════════

    /// Parse a v1 YAML document, apply its overrides to the preset, validate
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let file: ConfigFileV1 = serde_yaml::from_str(yaml)?;
        if !SUPPORTED_VERSIONS.contains(&file.version) {
            return Err(ConfigError::UnsupportedVersion {
                found: file.version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let preset: Preset = file.preset.parse()?;
        let mut config = Self::from_preset(preset);
        if let Some(patch) = &file.overrides {
            config = config.apply(patch);
        }
        config.validate()?;
        Ok(config)
    }

    /// Load from a YAML file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Export as a v1 YAML document (custom preset + full overrides)
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let file = ConfigFileV1 {
            version: 1,
            preset: Preset::Custom.to_string(),
            overrides: Some(SolverConfigPatch::from(self)),
        };
        Ok(serde_yaml::to_string(&file)?)
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::from_preset(Preset::Balanced)
    }
}

/// Partial configuration; unset fields keep the preset value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolverConfigPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<SolverStrategy>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_threshold: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validate_input: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<f64>,
}

impl From<&SolverConfig> for SolverConfigPatch {
    fn from(config: &SolverConfig) -> Self {
        Self {
            strategy: Some(config.strategy),
            auto_threshold: Some(config.auto_threshold),
            validate_input: Some(config.validate_input),
            tolerance: Some(config.tolerance),
        }
    }
}

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileV1 {
    /// Schema version (always 1 for v1)
    pub version: u32,

    /// Base preset
    pub preset: String,

    /// Fine-grained overrides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<SolverConfigPatch>,
}
