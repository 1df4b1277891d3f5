//! High-Level Arborescence Analyzer
//!
//! Config-driven front door over both solvers:
//! - Optional input validation before solving
//! - Automatic solver selection based on edge count
//! - Cross-checking both solvers against each other
//!
//! # Usage
//! ```rust
//! use msa_core::config::{Preset, SolverConfig};
//! use msa_core::features::arborescence::application::ArborescenceAnalyzer;
//! use msa_core::features::arborescence::domain::Graph;
//!
//! let graph = Graph::from_edges(3, [(0, 1, 2i64), (1, 2, 3), (0, 2, 4)]);
//! let analyzer = ArborescenceAnalyzer::new(SolverConfig::from_preset(Preset::Thorough));
//!
//! let result = analyzer.solve(&graph, 0).unwrap();
//! assert_eq!(result.weight, 5);
//! ```

use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::config::{SolverConfig, SolverStrategy};
use crate::errors::{MsaError, Result};
use crate::features::arborescence::domain::{Graph, SolveStats, VertexId, Weight};
use crate::features::arborescence::ports::{SolverFactory, SolverKind};

/// Analysis result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult<W> {
    /// Total weight of the minimum arborescence
    pub weight: W,

    /// Which strategy actually ran (never `Auto`)
    pub strategy_used: SolverStrategy,

    /// Statistics
    pub stats: AnalysisStats,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisStats {
    pub vertices: usize,
    pub edges: usize,
    pub rounds: usize,
    pub contractions: usize,
    pub edges_examined: usize,
    pub duration_ms: f64,
}

impl AnalysisStats {
    fn absorb(&mut self, stats: &SolveStats) {
        self.rounds += stats.rounds;
        self.contractions += stats.contractions;
        self.edges_examined += stats.edges_examined;
    }
}

/// Arborescence analyzer
#[derive(Debug, Clone, Default)]
pub struct ArborescenceAnalyzer {
    config: SolverConfig,
}

impl ArborescenceAnalyzer {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Build an analyzer, rejecting configurations that fail
    /// [`SolverConfig::validate`]
    pub fn try_new(config: SolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Solve `graph` for `root` with the configured strategy
    ///
    /// Fails with [`MsaError::Config`] when the configuration is out of
    /// range, with [`MsaError::NoArborescence`] when some vertex is
    /// unreachable from `root`, and with [`MsaError::SolverDisagreement`]
    /// when cross-checking finds the solvers apart by more than the
    /// configured tolerance.
    pub fn solve<W: Weight>(&self, graph: &Graph<W>, root: VertexId) -> Result<AnalysisResult<W>> {
        let start = Instant::now();
        self.config.validate()?;

        if self.config.validate_input {
            graph.validate(root)?;
        } else if root >= graph.vertex_count() {
            return Err(MsaError::RootOutOfRange {
                root,
                vertex_count: graph.vertex_count(),
            });
        }

        let edge_count = graph.edge_count();
        let resolved = self.config.strategy.resolve(edge_count, self.config.auto_threshold);
        debug!(
            "analyzer: strategy={:?} edges={} resolved={:?}",
            self.config.strategy, edge_count, resolved
        );

        let mut stats = AnalysisStats {
            vertices: graph.vertex_count(),
            edges: edge_count,
            ..Default::default()
        };

        let (weight, strategy_used) = match resolved {
            Some(kind) => {
                let result = SolverFactory::create_boxed::<W>(kind).solve(graph, root);
                stats.absorb(&result.stats);
                (result.weight, strategy_of(kind))
            }
            None => (self.cross_check(graph, root, &mut stats)?, SolverStrategy::CrossCheck),
        };

        stats.duration_ms = start.elapsed().as_secs_f64() * 1000.0;

        let weight = weight.ok_or(MsaError::NoArborescence { root })?;
        info!(
            "arborescence: weight={} strategy={:?} vertices={} edges={} ({:.3}ms)",
            weight, strategy_used, stats.vertices, stats.edges, stats.duration_ms
        );

        Ok(AnalysisResult {
            weight,
            strategy_used,
            stats,
        })
    }

    /// Run every solver and require matching outcomes
    fn cross_check<W: Weight>(
        &self,
        graph: &Graph<W>,
        root: VertexId,
        stats: &mut AnalysisStats,
    ) -> Result<Option<W>> {
        let contraction = SolverFactory::create_boxed::<W>(SolverKind::Contraction).solve(graph, root);
        let gabow = SolverFactory::create_boxed::<W>(SolverKind::Gabow).solve(graph, root);
        stats.absorb(&contraction.stats);
        stats.absorb(&gabow.stats);

        let agree = match (contraction.weight, gabow.weight) {
            (None, None) => true,
            (Some(a), Some(b)) => a.approx_eq(b, self.config.tolerance),
            _ => false,
        };

        if !agree {
            warn!(
                "cross-check failed: contraction={:?} gabow={:?}",
                contraction.weight, gabow.weight
            );
            return Err(MsaError::disagreement(contraction.weight, gabow.weight));
        }

        Ok(gabow.weight)
    }
}

fn strategy_of(kind: SolverKind) -> SolverStrategy {
    match kind {
        SolverKind::Contraction => SolverStrategy::Contraction,
        SolverKind::Gabow => SolverStrategy::Gabow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigError, Preset};

    fn cycle_graph() -> Graph<i64> {
        Graph::from_edges(3, [(1, 2, 1), (2, 1, 1), (0, 1, 10)])
    }

    #[test]
    fn test_default_analyzer() {
        let result = ArborescenceAnalyzer::default().solve(&cycle_graph(), 0).unwrap();
        assert_eq!(result.weight, 11);
        assert_eq!(result.stats.vertices, 3);
        assert_eq!(result.stats.edges, 3);
    }

    #[test]
    fn test_auto_selects_by_edge_count() {
        let small = ArborescenceAnalyzer::new(SolverConfig::default().auto_threshold(10));
        let result = small.solve(&cycle_graph(), 0).unwrap();
        assert_eq!(result.strategy_used, SolverStrategy::Contraction);

        let large = ArborescenceAnalyzer::new(SolverConfig::default().auto_threshold(3));
        let result = large.solve(&cycle_graph(), 0).unwrap();
        assert_eq!(result.strategy_used, SolverStrategy::Gabow);
    }

    #[test]
    fn test_cross_check_agrees() {
        let analyzer = ArborescenceAnalyzer::new(SolverConfig::from_preset(Preset::Thorough));
        let result = analyzer.solve(&cycle_graph(), 0).unwrap();
        assert_eq!(result.weight, 11);
        assert_eq!(result.strategy_used, SolverStrategy::CrossCheck);
    }

    #[test]
    fn test_cross_check_real_weights() {
        let graph = Graph::from_edges(3, [(0, 1, 0.1f64), (1, 2, 0.2), (0, 2, 0.7)]);
        let analyzer = ArborescenceAnalyzer::new(SolverConfig::from_preset(Preset::Thorough));
        let result = analyzer.solve(&graph, 0).unwrap();
        assert!(result.weight.approx_eq(0.3, 1e-9));
    }

    #[test]
    fn test_unreachable_is_error() {
        let graph = Graph::from_edges(3, [(0, 1, 1i64)]);
        for preset in [Preset::Fast, Preset::Balanced, Preset::Thorough] {
            let analyzer = ArborescenceAnalyzer::new(SolverConfig::from_preset(preset));
            let err = analyzer.solve(&graph, 0).unwrap_err();
            assert!(err.is_no_arborescence(), "{preset}: {err}");
        }
    }

    #[test]
    fn test_validation_rejects_self_loop() {
        let graph = Graph::from_edges(2, [(0, 1, 1i64), (1, 1, 1)]);
        let analyzer = ArborescenceAnalyzer::default();
        assert!(matches!(
            analyzer.solve(&graph, 0),
            Err(MsaError::SelfLoop { edge: 1, vertex: 1 })
        ));
    }

    #[test]
    fn test_out_of_range_config_rejected() {
        let nan = SolverConfig::default().tolerance(f64::NAN);
        assert!(matches!(
            ArborescenceAnalyzer::try_new(nan.clone()),
            Err(MsaError::Config(ConfigError::Range { .. }))
        ));
        assert!(matches!(
            ArborescenceAnalyzer::new(nan).solve(&cycle_graph(), 0),
            Err(MsaError::Config(ConfigError::Range { .. }))
        ));

        let zero = SolverConfig::default().auto_threshold(0);
        assert!(ArborescenceAnalyzer::try_new(zero.clone()).is_err());
        assert!(ArborescenceAnalyzer::new(zero).solve(&cycle_graph(), 0).is_err());

        assert!(ArborescenceAnalyzer::try_new(SolverConfig::default()).is_ok());
    }

    #[test]
    fn test_root_checked_without_validation() {
        let analyzer = ArborescenceAnalyzer::new(SolverConfig::from_preset(Preset::Fast));
        assert!(matches!(
            analyzer.solve(&cycle_graph(), 3),
            Err(MsaError::RootOutOfRange { root: 3, vertex_count: 3 })
        ));
    }
}
