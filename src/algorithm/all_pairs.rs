use std::fmt::Debug;
use log::{debug, info};
use num_traits::{Float, Zero};
use serde::Serialize;

use crate::algorithm::path::path_from_next_hop;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{CostMatrix, Graph};
use crate::{Error, Result};

/// Counters collected by [`FloydWarshall`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AllPairsStats {
    /// Inner-loop `(i, k, j)` checks performed
    pub iterations: usize,
    /// Successful distance improvements
    pub relaxations: usize,
    /// Some `dist[i][i]` ended up negative
    pub negative_cycle: bool,
}

/// First vertex to move to on the shortest path from `i` to `j`, row-major.
///
/// `None` means there is no path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextHopMatrix {
    n: usize,
    hops: Vec<Option<usize>>,
}

impl NextHopMatrix {
    pub fn vertex_count(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn get(&self, from: usize, to: usize) -> Option<usize> {
        self.hops[from * self.n + to]
    }

    /// Vertex sequence from `from` to `to`, empty when there is no path
    pub fn path(&self, from: usize, to: usize) -> Vec<usize> {
        path_from_next_hop(self, from, to)
    }
}

/// Distance and next-hop matrices for every ordered pair of vertices
#[derive(Debug, Clone)]
pub struct AllPairsResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    n: usize,
    distances: Vec<W>,
    pub next_hop: NextHopMatrix,
    pub stats: AllPairsStats,
}

impl<W> AllPairsResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub fn vertex_count(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn distance(&self, from: usize, to: usize) -> W {
        self.distances[from * self.n + to]
    }

    /// Distances from `from` to every vertex
    pub fn row(&self, from: usize) -> &[W] {
        &self.distances[from * self.n..(from + 1) * self.n]
    }

    pub fn path(&self, from: usize, to: usize) -> Vec<usize> {
        self.next_hop.path(from, to)
    }

    pub fn has_negative_cycle(&self) -> bool {
        self.stats.negative_cycle
    }

    /// Projects one row into a single-source result.
    ///
    /// Predecessors are read off the reconstructed paths: the predecessor of
    /// `v` is the vertex just before `v` on the path from `root`.
    pub fn single_source(&self, root: usize) -> Result<ShortestPathResult<W, AllPairsStats>> {
        if root >= self.n {
            return Err(Error::InvalidVertex(root));
        }

        let distances = self.row(root).to_vec();
        let mut predecessors = vec![None; self.n];
        for (v, pred) in predecessors.iter_mut().enumerate() {
            if v == root || !distances[v].is_finite() {
                continue;
            }
            let path = self.path(root, v);
            if path.len() >= 2 {
                *pred = Some(path[path.len() - 2]);
            }
        }

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source: root,
            stats: self.stats,
        })
    }
}

/// Floyd-Warshall relaxation over a dense cost matrix.
///
/// Negative weights are allowed. A negative cycle does not stop the
/// computation: it is reported through [`AllPairsStats::negative_cycle`] and
/// the distances touching it are meaningless.
#[derive(Debug, Default)]
pub struct FloydWarshall;

impl FloydWarshall {
    pub fn new() -> Self {
        FloydWarshall
    }

    /// Runs the full `O(n^3)` relaxation
    pub fn solve<W>(&self, matrix: &CostMatrix<W>) -> AllPairsResult<W>
    where
        W: Float + Zero + Debug + Copy,
    {
        let n = matrix.vertex_count();
        let mut dist = matrix.as_slice().to_vec();
        let mut next: Vec<Option<usize>> = vec![None; n * n];
        let mut stats = AllPairsStats::default();

        for i in 0..n {
            for j in 0..n {
                if i != j && dist[i * n + j].is_finite() {
                    next[i * n + j] = Some(j);
                }
            }
        }

        // After round k, dist[i][j] is the best path using intermediates <= k
        for k in 0..n {
            for i in 0..n {
                let d_ik = dist[i * n + k];
                if !d_ik.is_finite() {
                    continue;
                }
                let hop_ik = next[i * n + k];
                for j in 0..n {
                    stats.iterations += 1;
                    let d_kj = dist[k * n + j];
                    if !d_kj.is_finite() {
                        continue;
                    }
                    let candidate = d_ik + d_kj;
                    if candidate < dist[i * n + j] {
                        dist[i * n + j] = candidate;
                        next[i * n + j] = hop_ik;
                        stats.relaxations += 1;
                    }
                }
            }
        }

        stats.negative_cycle = (0..n).any(|i| dist[i * n + i] < W::zero());
        if stats.negative_cycle {
            info!("negative cycle detected in {}x{} cost matrix", n, n);
        }
        debug!(
            "floyd-warshall: {} vertices, {} iterations, {} relaxations",
            n, stats.iterations, stats.relaxations
        );

        AllPairsResult {
            n,
            distances: dist,
            next_hop: NextHopMatrix { n, hops: next },
            stats,
        }
    }
}

impl<W> ShortestPathAlgorithm<W, CostMatrix<W>> for FloydWarshall
where
    W: Float + Zero + Debug + Copy,
{
    type Stats = AllPairsStats;

    fn name(&self) -> &'static str {
        "Floyd-Warshall"
    }

    fn compute_shortest_paths(
        &self,
        graph: &CostMatrix<W>,
        source: usize,
    ) -> Result<ShortestPathResult<W, AllPairsStats>> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }
        self.solve(graph).single_source(source)
    }
}

/// All-pairs shortest distances and next hops for a dense cost matrix
pub fn solve_all_pairs<W>(matrix: &CostMatrix<W>) -> AllPairsResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    FloydWarshall::new().solve(matrix)
}
