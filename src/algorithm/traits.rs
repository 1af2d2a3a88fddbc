use std::fmt::Debug;
use num_traits::{Float, Zero};
use crate::graph::Graph;
use crate::algorithm::path::path_from_predecessor;
use crate::Result;

/// Result of a single-source shortest path computation
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W, S>
where
    W: Float + Zero + Debug + Copy,
{
    /// Distances from source to each vertex, `+inf` when unreachable
    pub distances: Vec<W>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,

    /// Solver-specific counters
    pub stats: S,
}

impl<W, S> ShortestPathResult<W, S>
where
    W: Float + Zero + Debug + Copy,
{
    /// Finite distance to `vertex`, `None` when unreachable or out of range
    pub fn distance(&self, vertex: usize) -> Option<W> {
        self.distances.get(vertex).copied().filter(|d| d.is_finite())
    }

    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some()
    }

    /// Number of vertices with a finite distance, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_finite()).count()
    }

    /// Vertex sequence from the source to `target`, empty when unreachable
    pub fn path_to(&self, target: usize) -> Vec<usize> {
        path_from_predecessor(&self.predecessors, self.source, target)
    }

    /// Checks `dist[v] == dist[pred(v)] + w(pred(v), v)` for every vertex with a
    /// predecessor, and that unreachable vertices have none
    pub fn is_consistent_with<G: Graph<W>>(&self, graph: &G, tolerance: W) -> bool {
        self.predecessors.iter().enumerate().all(|(v, pred)| match pred {
            None => v == self.source || !self.distances[v].is_finite(),
            Some(u) => match graph.get_edge_weight(*u, v) {
                Some(w) => (self.distances[*u] + w - self.distances[v]).abs() <= tolerance,
                None => false,
            },
        })
    }
}

/// Trait for single-source shortest path algorithms over a graph representation
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Counters reported alongside the distances
    type Stats;

    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(
        &self,
        graph: &G,
        source: usize,
    ) -> Result<ShortestPathResult<W, Self::Stats>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W, Self::Stats>, target: usize) -> Option<Vec<usize>> {
        let path = result.path_to(target);
        if path.is_empty() {
            None
        } else {
            Some(path)
        }
    }
}
