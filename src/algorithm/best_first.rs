use std::fmt::Debug;
use log::debug;
use num_traits::{Float, Zero};
use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::MinQueue;
use crate::graph::{Graph, SuccessorList};
use crate::{Error, Result};

/// Counters collected by [`BestFirst`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BestFirstStats {
    /// Successful distance improvements
    pub relaxations: usize,
    pub heap_pushes: usize,
    pub heap_pops: usize,
    /// Pops discarded because their vertex was already finalized
    pub stale_pops: usize,
}

/// Label-setting best-first search (Dijkstra) with a binary heap.
///
/// Requires non-negative weights. By default every edge is checked before the
/// search starts; with upfront validation disabled, a negative edge is only
/// reported when the search is about to relax it.
#[derive(Debug, Clone)]
pub struct BestFirst {
    upfront_validation: bool,
}

impl Default for BestFirst {
    fn default() -> Self {
        BestFirst {
            upfront_validation: true,
        }
    }
}

impl BestFirst {
    /// Creates a new best-first solver instance
    pub fn new() -> Self {
        BestFirst::default()
    }

    /// Scan all edges for negative weights before searching
    pub fn with_upfront_validation(mut self, enabled: bool) -> Self {
        self.upfront_validation = enabled;
        self
    }
}

impl<W> ShortestPathAlgorithm<W, SuccessorList<W>> for BestFirst
where
    W: Float + Zero + Debug + Copy,
{
    type Stats = BestFirstStats;

    fn name(&self) -> &'static str {
        "Best-First (Dijkstra)"
    }

    fn compute_shortest_paths(
        &self,
        graph: &SuccessorList<W>,
        source: usize,
    ) -> Result<ShortestPathResult<W, BestFirstStats>> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }
        if self.upfront_validation {
            graph.validate_non_negative()?;
        }

        let n = graph.vertex_count();

        // Initialize distances and predecessors
        let mut distances = vec![W::infinity(); n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut finalized = vec![false; n];
        let mut stats = BestFirstStats::default();

        distances[source] = W::zero();

        let mut queue = MinQueue::with_capacity(n);
        queue.push(source, OrderedFloat(W::zero()));

        while let Some((u, _)) = queue.pop() {
            // A smaller entry for u was already processed
            if finalized[u] {
                stats.stale_pops += 1;
                continue;
            }
            finalized[u] = true;
            let dist_u = distances[u];

            for &(v, weight) in graph.outgoing(u) {
                if weight < W::zero() {
                    return Err(Error::NegativeWeight {
                        from: u,
                        to: v,
                        weight: weight.to_f64().unwrap_or(f64::NAN),
                    });
                }

                let candidate = dist_u + weight;
                if candidate < distances[v] {
                    distances[v] = candidate;
                    predecessors[v] = Some(u);
                    queue.push(v, OrderedFloat(candidate));
                    stats.relaxations += 1;
                }
            }
        }

        stats.heap_pushes = queue.pushes();
        stats.heap_pops = queue.pops();
        debug!(
            "best-first: {} vertices, {} relaxations, {} stale pops",
            n, stats.relaxations, stats.stale_pops
        );

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
            stats,
        })
    }
}

/// Shortest distances from `root` on a graph with non-negative weights.
///
/// Fails with [`Error::NegativeWeight`] if any edge weight is negative.
pub fn solve_best_first<W>(
    graph: &SuccessorList<W>,
    root: usize,
) -> Result<ShortestPathResult<W, BestFirstStats>>
where
    W: Float + Zero + Debug + Copy,
{
    BestFirst::new().compute_shortest_paths(graph, root)
}
