//! Turning solver state into explicit vertex sequences.

use log::warn;
use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::algorithm::all_pairs::NextHopMatrix;
use crate::graph::Graph;

/// Extra hops tolerated past `n` before a next-hop walk is abandoned
const NEXT_HOP_SLACK: usize = 5;

/// Walks a predecessor vector backward from `target` to `root`.
///
/// Returns `[root]` when `target == root` and an empty path when `target` is
/// unreachable, out of range, or the vector loops without reaching `root`.
pub fn path_from_predecessor(predecessors: &[Option<usize>], root: usize, target: usize) -> Vec<usize> {
    let n = predecessors.len();
    if root >= n || target >= n {
        return Vec::new();
    }
    if target == root {
        return vec![root];
    }

    let mut path = vec![target];
    let mut current = target;
    while current != root {
        match predecessors[current] {
            Some(pred) if pred < n => {
                current = pred;
                path.push(current);
            }
            _ => return Vec::new(),
        }

        if path.len() > n {
            warn!(
                "predecessor walk from {} to {} exceeded {} vertices; vector has a cycle",
                target, root, n
            );
            return Vec::new();
        }
    }

    path.reverse();
    path
}

/// Follows next hops forward from `source` to `target`.
///
/// Returns `[source]` when both are equal and an empty path when there is no
/// route. The walk gives up after `n + 5` hops, which only happens when the
/// matrix is inconsistent (for example after a negative cycle).
pub fn path_from_next_hop(next_hop: &NextHopMatrix, source: usize, target: usize) -> Vec<usize> {
    let n = next_hop.vertex_count();
    if source >= n || target >= n {
        return Vec::new();
    }
    if source == target {
        return vec![source];
    }
    if next_hop.get(source, target).is_none() {
        return Vec::new();
    }

    let mut path = vec![source];
    let mut current = source;
    while current != target {
        match next_hop.get(current, target) {
            Some(hop) => {
                current = hop;
                path.push(hop);
            }
            None => return Vec::new(),
        }

        if path.len() > n + NEXT_HOP_SLACK {
            warn!(
                "next-hop walk from {} to {} exceeded {} hops; matrix is inconsistent",
                source,
                target,
                n + NEXT_HOP_SLACK
            );
            return Vec::new();
        }
    }

    path
}

/// Sums edge weights along `path`; `None` if the path is empty or uses a missing edge
pub fn path_cost<W, G>(graph: &G, path: &[usize]) -> Option<W>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    if path.is_empty() {
        return None;
    }
    path.windows(2).try_fold(W::zero(), |total, hop| {
        graph.get_edge_weight(hop[0], hop[1]).map(|w| total + w)
    })
}
