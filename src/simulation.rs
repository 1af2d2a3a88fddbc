//! Batch runs of the three solvers on generated graphs.
//!
//! Each job generates one graph for a scenario and size, builds the
//! representation its solver needs, times the solver alone, and reports the
//! solver counters. Jobs are independent and may run on the rayon pool.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::algorithm::{FloydWarshall, ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::generators::{generate, GraphKind};
use crate::graph::{EdgeList, Graph};
use crate::{solve_best_first, solve_dag_recursive, Error, Result};

/// Absolute tolerance for the predecessor-tree check
const TREE_TOLERANCE: f64 = 1e-9;

/// One structural hypothesis paired with its solver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    /// Acyclic graph with negative weights, recursive Bellman
    Dag,
    /// Cyclic graph with non-negative weights, best-first search
    BestFirst,
    /// Cyclic graph with negative weights, Floyd-Warshall row 0
    AllPairs,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [Scenario::Dag, Scenario::BestFirst, Scenario::AllPairs];

    /// 1-based scenario number used in seeds and output
    pub fn id(self) -> u64 {
        match self {
            Scenario::Dag => 1,
            Scenario::BestFirst => 2,
            Scenario::AllPairs => 3,
        }
    }

    pub fn from_id(id: u64) -> Result<Self> {
        Scenario::ALL
            .into_iter()
            .find(|s| s.id() == id)
            .ok_or_else(|| Error::InvalidParameter(format!("unknown scenario {}", id)))
    }

    pub fn name(self) -> &'static str {
        match self {
            Scenario::Dag => "Bellman",
            Scenario::BestFirst => "Dijkstra",
            Scenario::AllPairs => "Floyd",
        }
    }

    pub fn graph_kind(self) -> GraphKind {
        match self {
            Scenario::Dag => GraphKind::Dag,
            Scenario::BestFirst => GraphKind::CyclicNonnegative,
            Scenario::AllPairs => GraphKind::CyclicNegative,
        }
    }

    /// Seed for one job, shifted by scenario and size so every job differs
    pub fn job_seed(self, base_seed: u64, n: usize) -> u64 {
        base_seed
            .wrapping_add(1000 * self.id())
            .wrapping_add(n as u64)
    }
}

/// Configuration for a batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub scenarios: Vec<Scenario>,
    pub sizes: Vec<usize>,
    pub density: f64,
    pub seed: u64,
    /// Run jobs on the rayon thread pool
    pub parallel: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            scenarios: Scenario::ALL.to_vec(),
            sizes: vec![10, 100],
            density: 0.25,
            seed: 42,
            parallel: true,
        }
    }
}

impl SimulationConfig {
    /// Loads a JSON config; missing fields take their default value
    pub fn load(path: &Path) -> Result<Self> {
        let config_error = |message: String| Error::Config {
            path: path.display().to_string(),
            message,
        };
        let raw = fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
        let config: SimulationConfig =
            serde_json::from_str(&raw).map_err(|e| config_error(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.density) {
            return Err(Error::InvalidParameter(format!(
                "density must be within [0, 1], got {}",
                self.density
            )));
        }
        if self.scenarios.is_empty() || self.sizes.is_empty() {
            return Err(Error::InvalidParameter(
                "at least one scenario and one size are required".to_string(),
            ));
        }
        if self.sizes.contains(&0) {
            return Err(Error::InvalidParameter("sizes must be positive".to_string()));
        }
        Ok(())
    }
}

/// Outcome of one `(scenario, size)` job
#[derive(Debug, Clone, Serialize)]
pub struct JobSummary {
    pub scenario: Scenario,
    pub n: usize,
    pub seed: u64,
    pub edges: usize,
    pub negative_edges: usize,
    pub runtime_ms: f64,
    pub reachable: usize,
    /// Solver counters as `(name, value)` pairs
    pub counters: Vec<(&'static str, usize)>,
    /// Only reported by the all-pairs scenario
    pub negative_cycle: Option<bool>,
    /// Every predecessor satisfies `dist[v] == dist[u] + w(u, v)`
    pub consistent: bool,
    pub error: Option<String>,
}

/// Runs one job; failures are recorded in the summary rather than returned
pub fn run_job(scenario: Scenario, n: usize, density: f64, base_seed: u64) -> JobSummary {
    let seed = scenario.job_seed(base_seed, n);
    let mut summary = JobSummary {
        scenario,
        n,
        seed,
        edges: 0,
        negative_edges: 0,
        runtime_ms: 0.0,
        reachable: 0,
        counters: Vec::new(),
        negative_cycle: None,
        consistent: false,
        error: None,
    };

    let edges = match generate(scenario.graph_kind(), n, density, seed) {
        Ok(edges) => edges,
        Err(err) => {
            summary.error = Some(err.to_string());
            return summary;
        }
    };
    let stats = edges.stats();
    summary.edges = stats.edges;
    summary.negative_edges = stats.negative_edges;

    if let Err(err) = solve_scenario(scenario, &edges, &mut summary) {
        summary.error = Some(err.to_string());
    }
    summary
}

fn solve_scenario(scenario: Scenario, edges: &EdgeList<f64>, summary: &mut JobSummary) -> Result<()> {
    match scenario {
        Scenario::Dag => {
            let graph = edges.to_predecessor_list();
            let start = Instant::now();
            let result = solve_dag_recursive(&graph, 0)?;
            summary.runtime_ms = start.elapsed().as_secs_f64() * 1000.0;
            summary.counters = vec![
                ("recursion_calls", result.stats.recursion_calls),
                ("relax_checks", result.stats.relax_checks),
            ];
            record(summary, &result, &graph);
        }
        Scenario::BestFirst => {
            let graph = edges.to_successor_list();
            let start = Instant::now();
            let result = solve_best_first(&graph, 0)?;
            summary.runtime_ms = start.elapsed().as_secs_f64() * 1000.0;
            summary.counters = vec![
                ("relaxations", result.stats.relaxations),
                ("heap_pushes", result.stats.heap_pushes),
                ("heap_pops", result.stats.heap_pops),
            ];
            record(summary, &result, &graph);
        }
        Scenario::AllPairs => {
            let graph = edges.to_cost_matrix();
            let start = Instant::now();
            let result = FloydWarshall::new().compute_shortest_paths(&graph, 0)?;
            summary.runtime_ms = start.elapsed().as_secs_f64() * 1000.0;
            summary.counters = vec![
                ("iterations", result.stats.iterations),
                ("relaxations", result.stats.relaxations),
            ];
            summary.negative_cycle = Some(result.stats.negative_cycle);
            record(summary, &result, &graph);
        }
    }
    Ok(())
}

fn record<S, G: Graph<f64>>(summary: &mut JobSummary, result: &ShortestPathResult<f64, S>, graph: &G) {
    summary.reachable = result.reachable_count();
    summary.consistent = result.is_consistent_with(graph, TREE_TOLERANCE);
}

/// Runs every `(scenario, size)` pair of the config, in config order
pub fn run_all(config: &SimulationConfig) -> Result<Vec<JobSummary>> {
    config.validate()?;

    let jobs: Vec<(Scenario, usize)> = config
        .scenarios
        .iter()
        .flat_map(|&s| config.sizes.iter().map(move |&n| (s, n)))
        .collect();

    let summaries = if config.parallel {
        jobs.par_iter()
            .map(|&(s, n)| run_job(s, n, config.density, config.seed))
            .collect()
    } else {
        jobs.iter()
            .map(|&(s, n)| run_job(s, n, config.density, config.seed))
            .collect()
    };
    Ok(summaries)
}
