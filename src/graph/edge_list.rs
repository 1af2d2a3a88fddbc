use crate::graph::traits::Graph;
use crate::graph::{CostMatrix, PredecessorList, SuccessorList};
use crate::{Error, Result};
use num_traits::{Float, Zero};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Debug;

/// A directed edge `from -> to` with its cost
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge<W> {
    pub from: usize,
    pub to: usize,
    pub weight: W,
}

/// The edge set every representation is built from.
///
/// Self-loops are rejected and there is at most one edge per ordered pair:
/// inserting `(u, v)` again overwrites the weight but keeps the position of the
/// first insertion, so derived adjacency lists keep a stable order.
#[derive(Debug, Clone)]
pub struct EdgeList<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Number of vertices in the graph
    vertex_count: usize,

    /// Edges in first-insertion order
    edges: Vec<Edge<W>>,

    /// (from, to) -> position in `edges`
    index: HashMap<(usize, usize), usize>,
}

/// Summary of the weights in an edge list
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgeStats<W> {
    pub edges: usize,
    pub negative_edges: usize,
    pub min_weight: Option<W>,
    pub max_weight: Option<W>,
}

impl<W> EdgeList<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates an empty edge list over `vertex_count` vertices
    pub fn new(vertex_count: usize) -> Self {
        EdgeList {
            vertex_count,
            edges: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Builds an edge list from `(from, to, weight)` triples
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut list = EdgeList::new(vertex_count);
        for (from, to, weight) in edges {
            list.add_edge(from, to, weight)?;
        }
        Ok(list)
    }

    /// Adds a directed edge, overwriting the weight of an existing `from -> to` edge
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        if from >= self.vertex_count {
            return Err(Error::InvalidVertex(from));
        }
        if to >= self.vertex_count {
            return Err(Error::InvalidVertex(to));
        }
        if from == to {
            return Err(Error::InvalidEdge(from, to));
        }
        if !weight.is_finite() {
            return Err(Error::InvalidWeight { from, to });
        }

        match self.index.get(&(from, to)) {
            Some(&pos) => self.edges[pos].weight = weight,
            None => {
                self.index.insert((from, to), self.edges.len());
                self.edges.push(Edge { from, to, weight });
            }
        }
        Ok(())
    }

    /// Edges in insertion order
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    pub fn iter(&self) -> impl Iterator<Item = &Edge<W>> + '_ {
        self.edges.iter()
    }

    /// Edge count, negative edge count and weight range
    pub fn stats(&self) -> EdgeStats<W> {
        let mut stats: EdgeStats<W> = EdgeStats {
            edges: self.edges.len(),
            negative_edges: 0,
            min_weight: None,
            max_weight: None,
        };
        for edge in &self.edges {
            if edge.weight < W::zero() {
                stats.negative_edges += 1;
            }
            stats.min_weight = Some(stats.min_weight.map_or(edge.weight, |m| m.min(edge.weight)));
            stats.max_weight = Some(stats.max_weight.map_or(edge.weight, |m| m.max(edge.weight)));
        }
        stats
    }

    pub fn to_predecessor_list(&self) -> PredecessorList<W> {
        PredecessorList::from_edge_list(self)
    }

    pub fn to_successor_list(&self) -> SuccessorList<W> {
        SuccessorList::from_edge_list(self)
    }

    pub fn to_cost_matrix(&self) -> CostMatrix<W> {
        CostMatrix::from_edge_list(self)
    }
}

impl<W> Graph<W> for EdgeList<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.index.get(&(from, to)).map(|&pos| self.edges[pos].weight)
    }
}
