use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use crate::graph::generators::GraphKind;

/// Represents an edge in the graph for the JSON API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebEdge {
    pub source: usize,
    pub target: usize,
    pub weight: f64,
}

/// Represents a complete graph for the JSON API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebGraph {
    pub vertex_count: usize,
    pub edges: Vec<WebEdge>,
}

/// The solver to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SolverKind {
    Dag,
    BestFirst,
    AllPairs,
}

/// Parameters for graph generation
#[derive(Debug, Deserialize)]
pub struct GraphGenerationRequest {
    pub kind: GraphKind,
    pub vertex_count: usize,
    #[serde(default = "default_density")]
    pub density: f64,
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_density() -> f64 { 0.25 }

/// A generated graph kept by the server
#[derive(Debug, Clone, Serialize)]
pub struct StoredGraph {
    pub id: Uuid,
    pub kind: GraphKind,
    pub seed: u64,
    pub graph: WebGraph,
    pub created_at: DateTime<Utc>,
}

impl StoredGraph {
    pub fn new(kind: GraphKind, seed: u64, graph: WebGraph) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            seed,
            graph,
            created_at: Utc::now(),
        }
    }
}

/// Parameters for a solver run.
///
/// `graph` is required by `/api/solve` and ignored by `/api/solve/:graph_id`.
#[derive(Debug, Deserialize)]
pub struct SolveRequest {
    pub algorithm: SolverKind,
    #[serde(default)]
    pub root: usize,
    #[serde(default)]
    pub graph: Option<WebGraph>,
}

/// Response containing solver results
#[derive(Debug, Clone, Serialize)]
pub struct SolveResponse {
    pub execution_id: Uuid,
    pub algorithm: SolverKind,
    pub root: usize,
    pub execution_time_ms: f64,
    /// `null` for unreachable vertices
    pub distances: Vec<Option<f64>>,
    pub predecessors: Vec<Option<usize>>,
    /// Path from the root to each vertex, empty when unreachable
    pub paths: Vec<Vec<usize>>,
    pub metrics: serde_json::Value,
    pub negative_cycle: bool,
    pub created_at: DateTime<Utc>,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}
