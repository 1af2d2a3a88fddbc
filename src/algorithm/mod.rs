pub mod traits;
pub mod path;
pub mod dag_recursive;
pub mod best_first;
pub mod all_pairs;

pub use all_pairs::{solve_all_pairs, AllPairsResult, AllPairsStats, FloydWarshall, NextHopMatrix};
pub use best_first::{solve_best_first, BestFirst, BestFirstStats};
pub use dag_recursive::{solve_dag_recursive, DagRecursive, DagStats};
pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
