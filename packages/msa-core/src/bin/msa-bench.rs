//! Arborescence solver comparison CLI
//!
//! # Usage
//!
//! ```bash
//! # Run both solvers on 100 random graphs and check they agree
//! cargo run --bin msa-bench --release -- compare --graphs 100 --max-vertices 5000
//!
//! # Time both solvers over a range of sizes, CSV rows on stdout
//! cargo run --bin msa-bench --release -- sweep --vertices 100..=2000 --step 100 > timings.csv
//!
//! # Solve one generated graph through the analyzer
//! cargo run --bin msa-bench --release -- solve --vertices 2000 --preset thorough
//!
//! # Machine-readable output
//! cargo run --bin msa-bench --release -- compare --format json
//! ```
//!
//! Logging honours `RUST_LOG` (e.g. `RUST_LOG=msa_core=debug`).

use clap::{Parser, Subcommand, ValueEnum};
use msa_core::config::{Preset, SolverConfig, SolverStrategy};
use msa_core::features::arborescence::{
    ArborescenceAnalyzer, Graph, RandomGraphGenerator, SolverFactory, SolverKind, Weight,
};
use msa_core::MsaError;
use num_traits::NumCast;
use rand::distributions::uniform::SampleUniform;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "msa-bench")]
#[command(about = "Minimum spanning arborescence - solver comparison and timing", long_about = None)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value = "text", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run both solvers on random graphs and require identical totals
    Compare {
        /// Number of graphs
        #[arg(short, long, default_value = "100")]
        graphs: usize,

        /// Each graph gets a random vertex count in 1..=max-vertices
        #[arg(long, default_value = "1000")]
        max_vertices: usize,

        /// Each vertex gets 0..max-out-degree outgoing edges
        #[arg(long, default_value = "20")]
        max_out_degree: usize,

        /// RNG seed
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Use real-valued weights
        #[arg(long)]
        real: bool,

        /// Lay down a spanning tree from vertex 0 so every graph is solvable
        #[arg(long)]
        reachable: bool,
    },

    /// Time both solvers over a range of vertex counts (CSV output)
    Sweep {
        /// Vertex counts, as `A..=B`
        #[arg(short, long, default_value = "100..=1000", value_parser = parse_vertex_range)]
        vertices: VertexRange,

        /// Step between vertex counts
        #[arg(long, default_value = "100")]
        step: usize,

        /// Graphs per vertex count; timings are averaged
        #[arg(long, default_value = "10")]
        repeats: usize,

        /// Each vertex gets 0..max-out-degree outgoing edges
        #[arg(long, default_value = "20")]
        max_out_degree: usize,

        /// RNG seed
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },

    /// Solve one random graph through the analyzer
    Solve {
        /// Vertex count
        #[arg(short, long, default_value = "1000")]
        vertices: usize,

        /// Each vertex gets 0..max-out-degree outgoing edges
        #[arg(long, default_value = "20")]
        max_out_degree: usize,

        /// Root vertex
        #[arg(short, long, default_value = "0")]
        root: usize,

        /// RNG seed
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Configuration preset
        #[arg(short, long, default_value = "balanced")]
        preset: Preset,

        /// YAML configuration file (takes precedence over --preset)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Strategy override
        #[arg(long, value_enum)]
        strategy: Option<StrategyArg>,

        /// Use real-valued weights
        #[arg(long)]
        real: bool,
    },
}

/// Inclusive vertex-count range parsed from `A..=B`
#[derive(Clone, Copy, Debug)]
struct VertexRange {
    start: usize,
    end: usize,
}

fn parse_vertex_range(s: &str) -> Result<VertexRange, String> {
    let (start, end) = s
        .split_once("..=")
        .ok_or_else(|| format!("expected A..=B, got '{s}'"))?;
    let start: usize = start.trim().parse().map_err(|e| format!("bad start '{start}': {e}"))?;
    let end: usize = end.trim().parse().map_err(|e| format!("bad end '{end}': {e}"))?;
    if start == 0 || start > end {
        return Err(format!("empty or zero-based range {start}..={end}"));
    }
    Ok(VertexRange { start, end })
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    Contraction,
    Gabow,
    Auto,
    Crosscheck,
}

impl From<StrategyArg> for SolverStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Contraction => SolverStrategy::Contraction,
            StrategyArg::Gabow => SolverStrategy::Gabow,
            StrategyArg::Auto => SolverStrategy::Auto,
            StrategyArg::Crosscheck => SolverStrategy::CrossCheck,
        }
    }
}

#[derive(Serialize)]
struct ComparisonRow {
    test: usize,
    vertices: usize,
    edges: usize,
    contraction_ms: f64,
    gabow_ms: f64,
    weight: Option<String>,
}

#[derive(Serialize)]
struct SweepRow {
    vertices: usize,
    edges: usize,
    contraction_ms: f64,
    gabow_ms: f64,
}

#[derive(Serialize)]
struct ComparisonReport {
    seed: u64,
    rows: Vec<ComparisonRow>,
    total_contraction_ms: f64,
    total_gabow_ms: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compare {
            graphs,
            max_vertices,
            max_out_degree,
            seed,
            real,
            reachable,
        } => {
            let mut generator = RandomGraphGenerator::new(seed).max_out_degree(max_out_degree);
            if reachable {
                generator = generator.reachable_from(0);
            }
            let report = if real {
                compare::<f64>(generator, graphs, max_vertices, seed)?
            } else {
                compare::<i64>(generator, graphs, max_vertices, seed)?
            };
            print_comparison(&report, cli.format)?;
        }
        Commands::Sweep {
            vertices,
            step,
            repeats,
            max_out_degree,
            seed,
        } => {
            let generator = RandomGraphGenerator::new(seed)
                .max_out_degree(max_out_degree)
                .reachable_from(0);
            let rows = sweep(generator, vertices, step.max(1), repeats.max(1))?;
            print_sweep(&rows, cli.format)?;
        }
        Commands::Solve {
            vertices,
            max_out_degree,
            root,
            seed,
            preset,
            config,
            strategy,
            real,
        } => {
            let mut solver_config = match config {
                Some(path) => SolverConfig::from_yaml(path)?,
                None => SolverConfig::from_preset(preset),
            };
            if let Some(strategy) = strategy {
                solver_config = solver_config.strategy(strategy.into());
            }
            let analyzer = ArborescenceAnalyzer::try_new(solver_config)?;

            let generator = RandomGraphGenerator::new(seed)
                .vertex_count(vertices)
                .max_out_degree(max_out_degree);
            if real {
                solve::<f64>(&analyzer, generator, root, cli.format)?;
            } else {
                solve::<i64>(&analyzer, generator, root, cli.format)?;
            }
        }
    }

    Ok(())
}

fn compare<W: Weight + NumCast + SampleUniform>(
    mut generator: RandomGraphGenerator,
    graphs: usize,
    max_vertices: usize,
    seed: u64,
) -> Result<ComparisonReport, MsaError> {
    let contraction = SolverFactory::create_boxed::<W>(SolverKind::Contraction);
    let gabow = SolverFactory::create_boxed::<W>(SolverKind::Gabow);

    let mut rows = Vec::with_capacity(graphs);
    for test in 0..graphs {
        let vertices = generator.random_vertex_count(max_vertices);
        let graph: Graph<W> = generator.generate_sized(vertices)?;

        let a = contraction.solve(&graph, 0);
        let b = gabow.solve(&graph, 0);

        let agree = match (a.weight, b.weight) {
            (None, None) => true,
            (Some(x), Some(y)) => x.approx_eq(y, 1e-9),
            _ => false,
        };
        if !agree {
            warn!("test {}: solvers disagree on {} vertices", test, vertices);
            return Err(MsaError::disagreement(a.weight, b.weight));
        }

        rows.push(ComparisonRow {
            test,
            vertices,
            edges: graph.edge_count(),
            contraction_ms: a.stats.duration_ms,
            gabow_ms: b.stats.duration_ms,
            weight: b.weight.map(|w| w.to_string()),
        });
    }

    info!("{} graphs compared, all agree", rows.len());

    Ok(ComparisonReport {
        seed,
        total_contraction_ms: rows.iter().map(|r| r.contraction_ms).sum(),
        total_gabow_ms: rows.iter().map(|r| r.gabow_ms).sum(),
        rows,
    })
}

fn print_comparison(report: &ComparisonReport, format: OutputFormat) -> Result<(), serde_json::Error> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Text => {
            for row in &report.rows {
                println!(
                    "Test {:>4}: V={:<6} E={:<8} | contraction {:>9.3}ms | gabow {:>9.3}ms | weight {}",
                    row.test,
                    row.vertices,
                    row.edges,
                    row.contraction_ms,
                    row.gabow_ms,
                    row.weight.as_deref().unwrap_or("none"),
                );
            }
            println!();
            println!(
                "{} graphs (seed {}): contraction {:.3}ms total, gabow {:.3}ms total",
                report.rows.len(),
                report.seed,
                report.total_contraction_ms,
                report.total_gabow_ms
            );
        }
    }
    Ok(())
}

fn sweep(
    mut generator: RandomGraphGenerator,
    range: VertexRange,
    step: usize,
    repeats: usize,
) -> Result<Vec<SweepRow>, MsaError> {
    let contraction = SolverFactory::create_boxed::<i64>(SolverKind::Contraction);
    let gabow = SolverFactory::create_boxed::<i64>(SolverKind::Gabow);

    let mut rows = Vec::new();
    for vertices in (range.start..=range.end).step_by(step) {
        let mut row = SweepRow {
            vertices,
            edges: 0,
            contraction_ms: 0.0,
            gabow_ms: 0.0,
        };
        for _ in 0..repeats {
            let graph: Graph<i64> = generator.generate_sized(vertices)?;
            let a = contraction.solve(&graph, 0);
            let b = gabow.solve(&graph, 0);
            if a.weight != b.weight {
                warn!("sweep: solvers disagree on {} vertices", vertices);
                return Err(MsaError::disagreement(a.weight, b.weight));
            }
            row.edges += graph.edge_count();
            row.contraction_ms += a.stats.duration_ms;
            row.gabow_ms += b.stats.duration_ms;
        }
        row.edges /= repeats;
        row.contraction_ms /= repeats as f64;
        row.gabow_ms /= repeats as f64;
        info!("sweep: {} vertices done", vertices);
        rows.push(row);
    }
    Ok(rows)
}

fn print_sweep(rows: &[SweepRow], format: OutputFormat) -> Result<(), serde_json::Error> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(rows)?),
        OutputFormat::Text => {
            println!("vertices,edges,contraction_ms,gabow_ms");
            for row in rows {
                println!(
                    "{},{},{:.4},{:.4}",
                    row.vertices, row.edges, row.contraction_ms, row.gabow_ms
                );
            }
        }
    }
    Ok(())
}

fn solve<W: Weight + NumCast + SampleUniform + Serialize>(
    analyzer: &ArborescenceAnalyzer,
    mut generator: RandomGraphGenerator,
    root: usize,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let graph: Graph<W> = generator.generate()?;
    let result = analyzer.solve(&graph, root)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => {
            println!("Weight:       {}", result.weight);
            println!("Strategy:     {:?}", result.strategy_used);
            println!("Vertices:     {}", result.stats.vertices);
            println!("Edges:        {}", result.stats.edges);
            println!("Rounds:       {}", result.stats.rounds);
            println!("Contractions: {}", result.stats.contractions);
            println!("Duration:     {:.3}ms", result.stats.duration_ms);
        }
    }
    Ok(())
}
