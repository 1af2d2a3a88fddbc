use crate::graph::EdgeList;
use crate::{Error, Result};
use rand::prelude::*;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Probability that a DAG edge weight is negated
const DAG_NEGATIVE_FRACTION: f64 = 0.35;

/// Families of random graphs, one per solver hypothesis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GraphKind {
    /// Acyclic with possibly-negative weights
    Dag,
    /// Cycles with non-negative weights
    CyclicNonnegative,
    /// Cycles with negative weights, no negative cycle
    CyclicNegative,
}

/// Dispatches to the generator matching `kind`
pub fn generate(kind: GraphKind, n: usize, density: f64, seed: u64) -> Result<EdgeList<f64>> {
    match kind {
        GraphKind::Dag => generate_dag_negative_costs(n, density, seed),
        GraphKind::CyclicNonnegative => generate_cyclic_nonnegative(n, density, seed),
        GraphKind::CyclicNegative => generate_cyclic_no_negative_cycles(n, density, seed),
    }
}

fn check_density(density: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&density) {
        return Err(Error::InvalidParameter(format!(
            "density must be within [0, 1], got {}",
            density
        )));
    }
    Ok(())
}

/// Generates a dense DAG with possibly-negative integer weights.
///
/// A chain `i -> i+1` makes every vertex reachable from 0; every other forward
/// pair `i -> j` (`i < j`) is added with probability `density`. Weights are
/// drawn from `[1, 20]` and negated with probability 0.35.
pub fn generate_dag_negative_costs(n: usize, density: f64, seed: u64) -> Result<EdgeList<f64>> {
    check_density(density)?;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = EdgeList::new(n);

    let draw = |rng: &mut StdRng| {
        let w = rng.gen_range(1..=20) as f64;
        if rng.gen_bool(DAG_NEGATIVE_FRACTION) {
            -w
        } else {
            w
        }
    };

    for i in 0..n.saturating_sub(1) {
        let weight = draw(&mut rng);
        graph.add_edge(i, i + 1, weight)?;
    }

    for i in 0..n {
        for j in (i + 2)..n {
            if rng.gen_bool(density) {
                let weight = draw(&mut rng);
                graph.add_edge(i, j, weight)?;
            }
        }
    }

    Ok(graph)
}

/// Generates a directed graph with cycles and weights in `[1, 30]`.
///
/// Same chain as the DAG generator, then any other ordered pair is added with
/// probability `density`.
pub fn generate_cyclic_nonnegative(n: usize, density: f64, seed: u64) -> Result<EdgeList<f64>> {
    check_density(density)?;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = EdgeList::new(n);

    for i in 0..n.saturating_sub(1) {
        let weight = rng.gen_range(1..=30) as f64;
        graph.add_edge(i, i + 1, weight)?;
    }

    for u in 0..n {
        for v in 0..n {
            if u == v || v == u + 1 {
                continue;
            }
            if rng.gen_bool(density) {
                let weight = rng.gen_range(1..=30) as f64;
                graph.add_edge(u, v, weight)?;
            }
        }
    }

    Ok(graph)
}

/// Generates a cyclic graph with negative edges but no negative cycle.
///
/// Each vertex gets a potential `pi` in `[-20, 20]` and each edge a base cost
/// `b` in `[1, 25]`; the weight is `b + pi[v] - pi[u]`. Potentials telescope
/// to zero around any cycle, so every cycle costs the sum of its base costs.
pub fn generate_cyclic_no_negative_cycles(
    n: usize,
    density: f64,
    seed: u64,
) -> Result<EdgeList<f64>> {
    check_density(density)?;
    let mut rng = StdRng::seed_from_u64(seed);
    let potentials: Vec<i64> = (0..n).map(|_| rng.gen_range(-20..=20)).collect();
    let mut graph = EdgeList::new(n);

    let weight = |rng: &mut StdRng, u: usize, v: usize| {
        let base: i64 = rng.gen_range(1..=25);
        (base + potentials[v] - potentials[u]) as f64
    };

    for i in 0..n.saturating_sub(1) {
        let w = weight(&mut rng, i, i + 1);
        graph.add_edge(i, i + 1, w)?;
    }

    for u in 0..n {
        for v in 0..n {
            if u == v || v == u + 1 {
                continue;
            }
            if rng.gen_bool(density) {
                let w = weight(&mut rng, u, v);
                graph.add_edge(u, v, w)?;
            }
        }
    }

    Ok(graph)
}
