pub mod traits;
pub mod edge_list;
pub mod predecessor_list;
pub mod successor_list;
pub mod cost_matrix;
pub mod generators;

pub use traits::Graph;
pub use edge_list::{Edge, EdgeList, EdgeStats};
pub use predecessor_list::PredecessorList;
pub use successor_list::SuccessorList;
pub use cost_matrix::CostMatrix;
