use crate::graph::traits::Graph;
use crate::graph::EdgeList;
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// Dense `n x n` cost matrix stored flat in row-major order.
///
/// The diagonal is zero and a missing edge is `+inf`.
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix<W>
where
    W: Float + Zero + Debug + Copy,
{
    n: usize,
    costs: Vec<W>,
}

impl<W> CostMatrix<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// A matrix with no edges: zero diagonal, `+inf` elsewhere
    pub fn empty(n: usize) -> Self {
        let mut costs = vec![W::infinity(); n * n];
        for i in 0..n {
            costs[i * n + i] = W::zero();
        }
        CostMatrix { n, costs }
    }

    pub fn from_edge_list(edges: &EdgeList<W>) -> Self {
        let mut matrix = CostMatrix::empty(edges.vertex_count());
        for edge in edges.iter() {
            let n = matrix.n;
            matrix.costs[edge.from * n + edge.to] = edge.weight;
        }
        matrix
    }

    /// Builds a matrix from explicit rows; every row must have `rows.len()` entries.
    ///
    /// The diagonal must be zero. Off the diagonal an entry is either a finite
    /// weight or `+inf`; NaN and `-inf` are rejected with [`Error::InvalidWeight`].
    pub fn from_rows(rows: Vec<Vec<W>>) -> Result<Self> {
        let n = rows.len();
        let mut costs = Vec::with_capacity(n * n);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(Error::NotSquare { rows: n, cols: row.len() });
            }
            for (j, &cost) in row.iter().enumerate() {
                let valid = if i == j {
                    cost == W::zero()
                } else {
                    cost.is_finite() || cost == W::infinity()
                };
                if !valid {
                    return Err(Error::InvalidWeight { from: i, to: j });
                }
            }
            costs.extend(row);
        }
        Ok(CostMatrix { n, costs })
    }

    #[inline]
    pub fn get(&self, from: usize, to: usize) -> W {
        self.costs[from * self.n + to]
    }

    /// Costs of every edge leaving `from`
    pub fn row(&self, from: usize) -> &[W] {
        &self.costs[from * self.n..(from + 1) * self.n]
    }

    /// The flat row-major backing storage
    pub fn as_slice(&self) -> &[W] {
        &self.costs
    }
}

impl<W> Graph<W> for CostMatrix<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.n
    }

    fn edge_count(&self) -> usize {
        let n = self.n;
        self.costs
            .iter()
            .enumerate()
            .filter(|(idx, cost)| idx / n != idx % n && cost.is_finite())
            .count()
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        if from == to || from >= self.n || to >= self.n {
            return None;
        }
        let cost = self.get(from, to);
        if cost.is_finite() {
            Some(cost)
        } else {
            None
        }
    }
}
