use crate::graph::traits::Graph;
use crate::graph::EdgeList;
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// Outgoing edges per vertex: `outgoing[u] = [(v, w(u, v)), ...]`
#[derive(Debug, Clone)]
pub struct SuccessorList<W>
where
    W: Float + Zero + Debug + Copy,
{
    outgoing: Vec<Vec<(usize, W)>>,
}

impl<W> SuccessorList<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Builds the list from an edge list, keeping edge insertion order per vertex
    pub fn from_edge_list(edges: &EdgeList<W>) -> Self {
        let mut outgoing = vec![Vec::new(); edges.vertex_count()];
        for edge in edges.iter() {
            outgoing[edge.from].push((edge.to, edge.weight));
        }
        SuccessorList { outgoing }
    }

    /// Wraps caller-built lists after checking every target index and weight
    pub fn from_lists(outgoing: Vec<Vec<(usize, W)>>) -> Result<Self> {
        let n = outgoing.len();
        for (u, edges) in outgoing.iter().enumerate() {
            for &(v, w) in edges {
                if v >= n {
                    return Err(Error::InvalidVertex(v));
                }
                if u == v {
                    return Err(Error::InvalidEdge(u, v));
                }
                if !w.is_finite() {
                    return Err(Error::InvalidWeight { from: u, to: v });
                }
            }
        }
        Ok(SuccessorList { outgoing })
    }

    /// Outgoing edges of `vertex` as `(target, weight)` pairs
    pub fn outgoing(&self, vertex: usize) -> &[(usize, W)] {
        self.outgoing.get(vertex).map(|edges| edges.as_slice()).unwrap_or(&[])
    }

    /// Fails with the first negative edge found, scanning vertices in order
    pub fn validate_non_negative(&self) -> Result<()> {
        for (from, edges) in self.outgoing.iter().enumerate() {
            for &(to, weight) in edges {
                if weight < W::zero() {
                    return Err(Error::NegativeWeight {
                        from,
                        to,
                        weight: weight.to_f64().unwrap_or(f64::NAN),
                    });
                }
            }
        }
        Ok(())
    }
}

impl<W> Graph<W> for SuccessorList<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.outgoing.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing.iter().map(|edges| edges.len()).sum()
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing(from)
            .iter()
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| *weight)
    }
}
