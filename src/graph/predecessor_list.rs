use crate::graph::traits::Graph;
use crate::graph::EdgeList;
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// Incoming edges per vertex: `incoming[v] = [(u, w(u, v)), ...]`
#[derive(Debug, Clone)]
pub struct PredecessorList<W>
where
    W: Float + Zero + Debug + Copy,
{
    incoming: Vec<Vec<(usize, W)>>,
}

impl<W> PredecessorList<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Builds the list from an edge list, keeping edge insertion order per vertex
    pub fn from_edge_list(edges: &EdgeList<W>) -> Self {
        let mut incoming = vec![Vec::new(); edges.vertex_count()];
        for edge in edges.iter() {
            incoming[edge.to].push((edge.from, edge.weight));
        }
        PredecessorList { incoming }
    }

    /// Wraps caller-built lists after checking every source index and weight
    pub fn from_lists(incoming: Vec<Vec<(usize, W)>>) -> Result<Self> {
        let n = incoming.len();
        for (v, edges) in incoming.iter().enumerate() {
            for &(u, w) in edges {
                if u >= n {
                    return Err(Error::InvalidVertex(u));
                }
                if u == v {
                    return Err(Error::InvalidEdge(u, v));
                }
                if !w.is_finite() {
                    return Err(Error::InvalidWeight { from: u, to: v });
                }
            }
        }
        Ok(PredecessorList { incoming })
    }

    /// Incoming edges of `vertex` as `(source, weight)` pairs
    pub fn incoming(&self, vertex: usize) -> &[(usize, W)] {
        self.incoming.get(vertex).map(|edges| edges.as_slice()).unwrap_or(&[])
    }
}

impl<W> Graph<W> for PredecessorList<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.incoming.len()
    }

    fn edge_count(&self) -> usize {
        self.incoming.iter().map(|edges| edges.len()).sum()
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.incoming(to)
            .iter()
            .find(|(source, _)| *source == from)
            .map(|(_, weight)| *weight)
    }
}
