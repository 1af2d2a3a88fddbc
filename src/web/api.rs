use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use log::{debug, info};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::{
    all_pairs::solve_all_pairs, best_first::solve_best_first, dag_recursive::solve_dag_recursive,
};
use crate::graph::generators::generate;
use crate::graph::{EdgeList, Graph};
use crate::web::models::*;
use crate::Error;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub graphs: Arc<Mutex<HashMap<Uuid, StoredGraph>>>,
    /// Oldest graphs are evicted past this count
    pub max_graphs: usize,
    /// Largest vertex count accepted by any endpoint
    pub max_vertices: usize,
}

impl AppState {
    pub fn new(max_graphs: usize, max_vertices: usize) -> Self {
        Self {
            graphs: Arc::new(Mutex::new(HashMap::new())),
            max_graphs,
            max_vertices,
        }
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/graphs/generate", post(generate_graph))
        .route("/api/graphs/:graph_id", get(get_graph))
        .route("/api/solve", post(solve_inline))
        .route("/api/solve/:graph_id", post(solve_stored))
        .route("/api/health", get(health_check))
}

/// Generate and store a random graph
pub async fn generate_graph(
    State(state): State<AppState>,
    Json(request): Json<GraphGenerationRequest>,
) -> Result<Json<StoredGraph>, ApiError> {
    check_size(request.vertex_count, state.max_vertices)?;
    let seed = request.seed.unwrap_or_else(rand::random);
    let edges = generate(request.kind, request.vertex_count, request.density, seed)
        .map_err(bad_request)?;

    let stored = StoredGraph::new(request.kind, seed, to_web_graph(&edges));
    info!(
        "generated {:?} graph {} with {} vertices and {} edges",
        request.kind,
        stored.id,
        edges.vertex_count(),
        edges.edge_count()
    );

    let mut graphs = lock_graphs(&state)?;
    while graphs.len() >= state.max_graphs.max(1) {
        let oldest = graphs
            .values()
            .min_by_key(|g| g.created_at)
            .map(|g| g.id);
        match oldest {
            Some(id) => {
                graphs.remove(&id);
            }
            None => break,
        }
    }
    graphs.insert(stored.id, stored.clone());

    Ok(Json(stored))
}

/// Get a stored graph
pub async fn get_graph(
    State(state): State<AppState>,
    Path(graph_id): Path<Uuid>,
) -> Result<Json<StoredGraph>, ApiError> {
    let graphs = lock_graphs(&state)?;
    match graphs.get(&graph_id) {
        Some(stored) => Ok(Json(stored.clone())),
        None => Err(not_found(graph_id)),
    }
}

/// Solve a graph sent in the request body
pub async fn solve_inline(
    State(state): State<AppState>,
    Json(request): Json<SolveRequest>,
) -> Result<Json<SolveResponse>, ApiError> {
    let graph = request.graph.as_ref().ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "missing_graph".to_string(),
                message: "Request body must include a graph".to_string(),
                details: None,
            }),
        )
    })?;
    check_size(graph.vertex_count, state.max_vertices)?;

    let edges = to_edge_list(graph).map_err(bad_request)?;
    run_solver(request.algorithm, &edges, request.root)
        .map(Json)
        .map_err(bad_request)
}

/// Solve a previously generated graph
pub async fn solve_stored(
    State(state): State<AppState>,
    Path(graph_id): Path<Uuid>,
    Json(request): Json<SolveRequest>,
) -> Result<Json<SolveResponse>, ApiError> {
    let graph = {
        let graphs = lock_graphs(&state)?;
        match graphs.get(&graph_id) {
            Some(stored) => stored.graph.clone(),
            None => return Err(not_found(graph_id)),
        }
    };

    let edges = to_edge_list(&graph).map_err(bad_request)?;
    run_solver(request.algorithm, &edges, request.root)
        .map(Json)
        .map_err(bad_request)
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Runs one solver on an edge list and packages distances, paths and counters
pub fn run_solver(
    algorithm: SolverKind,
    edges: &EdgeList<f64>,
    root: usize,
) -> crate::Result<SolveResponse> {
    let n = edges.vertex_count();
    let start = Instant::now();

    let (distances, predecessors, paths, metrics, negative_cycle) = match algorithm {
        SolverKind::Dag => {
            let result = solve_dag_recursive(&edges.to_predecessor_list(), root)?;
            let paths: Vec<Vec<usize>> = (0..n).map(|v| result.path_to(v)).collect();
            (result.distances, result.predecessors, paths, metrics_of(&result.stats), false)
        }
        SolverKind::BestFirst => {
            let result = solve_best_first(&edges.to_successor_list(), root)?;
            let paths: Vec<Vec<usize>> = (0..n).map(|v| result.path_to(v)).collect();
            (result.distances, result.predecessors, paths, metrics_of(&result.stats), false)
        }
        SolverKind::AllPairs => {
            let all = solve_all_pairs(&edges.to_cost_matrix());
            let result = all.single_source(root)?;
            let paths: Vec<Vec<usize>> = (0..n).map(|v| all.path(root, v)).collect();
            let negative_cycle = all.has_negative_cycle();
            (result.distances, result.predecessors, paths, metrics_of(&all.stats), negative_cycle)
        }
    };

    let execution_time = start.elapsed();
    debug!("{:?} solved {} vertices in {:?}", algorithm, n, execution_time);

    Ok(SolveResponse {
        execution_id: Uuid::new_v4(),
        algorithm,
        root,
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
        distances: distances
            .into_iter()
            .map(|d| if d.is_finite() { Some(d) } else { None })
            .collect(),
        predecessors,
        paths,
        metrics,
        negative_cycle,
        created_at: chrono::Utc::now(),
    })
}

// Helper functions

fn metrics_of<S: Serialize>(stats: &S) -> serde_json::Value {
    serde_json::to_value(stats).unwrap_or(serde_json::Value::Null)
}

fn to_web_graph(edges: &EdgeList<f64>) -> WebGraph {
    WebGraph {
        vertex_count: edges.vertex_count(),
        edges: edges
            .iter()
            .map(|e| WebEdge {
                source: e.from,
                target: e.to,
                weight: e.weight,
            })
            .collect(),
    }
}

fn to_edge_list(graph: &WebGraph) -> crate::Result<EdgeList<f64>> {
    EdgeList::from_edges(
        graph.vertex_count,
        graph.edges.iter().map(|e| (e.source, e.target, e.weight)),
    )
}

fn lock_graphs(
    state: &AppState,
) -> Result<std::sync::MutexGuard<'_, HashMap<Uuid, StoredGraph>>, ApiError> {
    state.graphs.lock().map_err(|_| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "state_poisoned".to_string(),
                message: "Graph store is unavailable".to_string(),
                details: None,
            }),
        )
    })
}

fn check_size(vertex_count: usize, max_vertices: usize) -> Result<(), ApiError> {
    if vertex_count > max_vertices {
        return Err((
            StatusCode::PAYLOAD_TOO_LARGE,
            Json(ErrorResponse {
                error: "graph_too_large".to_string(),
                message: format!(
                    "Graph has {} vertices, limit is {}",
                    vertex_count, max_vertices
                ),
                details: None,
            }),
        ));
    }
    Ok(())
}

fn not_found(graph_id: Uuid) -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "graph_not_found".to_string(),
            message: format!("Graph {} not found", graph_id),
            details: None,
        }),
    )
}

fn bad_request(err: Error) -> ApiError {
    let code = if err.is_structural() {
        "cycle_detected"
    } else {
        "invalid_input"
    };
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: code.to_string(),
            message: err.to_string(),
            details: None,
        }),
    )
}
