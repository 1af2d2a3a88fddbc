use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

use netflow_paths::simulation::{run_all, Scenario, SimulationConfig};

/// Runs the three shortest-path scenarios on generated graphs
#[derive(Parser, Debug)]
#[command(name = "simulate", version)]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Scenario number (1 = DAG, 2 = best-first, 3 = all-pairs), repeatable
    #[arg(long = "scenario", value_parser = clap::value_parser!(u64).range(1..=3))]
    scenarios: Vec<u64>,

    /// Comma-separated graph sizes
    #[arg(long, value_delimiter = ',')]
    sizes: Option<Vec<usize>>,

    /// Edge probability in [0, 1]
    #[arg(long)]
    density: Option<f64>,

    #[arg(long)]
    seed: Option<u64>,

    /// Run jobs one after another instead of on the thread pool
    #[arg(long)]
    sequential: bool,
}

impl Cli {
    fn into_config(self) -> Result<SimulationConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::load(path)?,
            None => SimulationConfig::default(),
        };
        if !self.scenarios.is_empty() {
            config.scenarios = self
                .scenarios
                .iter()
                .map(|&id| Scenario::from_id(id))
                .collect::<netflow_paths::Result<Vec<_>>>()?;
        }
        if let Some(sizes) = self.sizes {
            config.sizes = sizes;
        }
        if let Some(density) = self.density {
            config.density = density;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if self.sequential {
            config.parallel = false;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = Cli::parse().into_config()?;
    log::info!(
        "running {} scenario(s) x {} size(s), density {}, seed {}, parallel {}",
        config.scenarios.len(),
        config.sizes.len(),
        config.density,
        config.seed,
        config.parallel
    );

    let start = Instant::now();
    let summaries = run_all(&config)?;
    let total = start.elapsed();

    println!(
        "{:<4} {:<9} {:>6} {:>8} {:>6} {:>12} {:>9} {:>6} {:<5} {}",
        "sim", "name", "n", "edges", "neg", "runtime(ms)", "reachable", "tree", "negc", "counters"
    );
    println!("{}", "-".repeat(100));

    let mut failures = 0;
    for s in &summaries {
        if let Some(err) = &s.error {
            failures += 1;
            println!("{:<4} {:<9} {:>6} error: {}", s.scenario.id(), s.scenario.name(), s.n, err);
            continue;
        }
        let counters = s
            .counters
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join(" ");
        let negative_cycle = match s.negative_cycle {
            Some(true) => "yes",
            Some(false) => "no",
            None => "-",
        };
        println!(
            "{:<4} {:<9} {:>6} {:>8} {:>6} {:>12.3} {:>9} {:>6} {:<5} {}",
            s.scenario.id(),
            s.scenario.name(),
            s.n,
            s.edges,
            s.negative_edges,
            s.runtime_ms,
            s.reachable,
            if s.consistent { "ok" } else { "BAD" },
            negative_cycle,
            counters
        );
    }

    log::info!("{} job(s) finished in {:?}, {} failed", summaries.len(), total, failures);
    if failures > 0 {
        std::process::exit(1);
    }
    Ok(())
}
