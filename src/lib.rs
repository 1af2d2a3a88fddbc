//! Netflow Paths - single-source shortest paths under three graph hypotheses
//!
//! Each solver targets one structural assumption about the input graph:
//!
//! * acyclic, possibly-negative weights: memoized recursive relaxation of
//!   Bellman's recurrence over a predecessor list ([`solve_dag_recursive`]);
//! * cyclic, non-negative weights: label-setting best-first search with a
//!   binary heap over a successor list ([`solve_best_first`]);
//! * cyclic with negative weights but no negative cycle: Floyd-Warshall over a
//!   dense cost matrix, with next-hop path reconstruction and negative-cycle
//!   detection ([`solve_all_pairs`]).
//!
//! All three representations are built from the same [`EdgeList`].

pub mod algorithm;
pub mod data_structures;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod graph;
#[cfg(feature = "python")]
mod python;
pub mod simulation;
pub mod web;

pub use algorithm::{
    all_pairs::{solve_all_pairs, AllPairsResult, AllPairsStats, FloydWarshall, NextHopMatrix},
    best_first::{solve_best_first, BestFirst, BestFirstStats},
    dag_recursive::{solve_dag_recursive, DagRecursive, DagStats},
    path::{path_cost, path_from_next_hop, path_from_predecessor},
    ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::{CostMatrix, Edge, EdgeList, Graph, PredecessorList, SuccessorList};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Cycle detected at vertex {vertex}: graph is not acyclic")]
    CycleDetected { vertex: usize },

    #[error("Negative edge weight {weight} on edge {from} -> {to}")]
    NegativeWeight { from: usize, to: usize, weight: f64 },

    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Non-finite weight on edge {from} -> {to}")]
    InvalidWeight { from: usize, to: usize },

    #[error("Cost matrix is not square: {rows} rows, row of length {cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Failed to load config {path}: {message}")]
    Config { path: String, message: String },
}

impl Error {
    /// True when the input violated a structural precondition (acyclicity).
    pub fn is_structural(&self) -> bool {
        matches!(self, Error::CycleDetected { .. })
    }

    /// True when the input itself was rejected (bad weights, indices or shapes).
    pub fn is_invalid_input(&self) -> bool {
        !self.is_structural()
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
