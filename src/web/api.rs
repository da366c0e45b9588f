use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::solver::{BmsspSolver, SolveOptions};
use crate::algorithm::traits::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{generators, CsrGraph, GraphInput};
use crate::web::models::*;
use crate::{Error, Result};

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/graphs", post(create_graph))
        .route("/api/graphs/generate", post(generate_graph))
        .route("/api/graphs/:session_id", get(get_graph))
        .route("/api/solve/:session_id", post(solve))
        .route("/api/compare/:session_id", post(compare))
        .route("/api/sessions", get(list_sessions))
        .route("/api/health", get(health_check))
}

fn bad_request(error: &str, message: String) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: error.to_string(),
            message,
        }),
    )
}

fn not_found(session_id: Uuid) -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "session_not_found".to_string(),
            message: format!("No session {}", session_id),
        }),
    )
}

fn domain_error(err: Error) -> ApiError {
    bad_request("invalid_input", err.to_string())
}

fn store(state: &AppState, graph: CsrGraph) -> SessionInfo {
    let session = Session::new(graph);
    let info = session.info();
    let mut sessions = state.sessions.lock().unwrap();
    sessions.insert(session.id, session);
    info
}

fn lookup(state: &AppState, session_id: Uuid) -> std::result::Result<CsrGraph, ApiError> {
    let sessions = state.sessions.lock().unwrap();
    sessions
        .get(&session_id)
        .map(|s| s.graph.clone())
        .ok_or_else(|| not_found(session_id))
}

/// Build a graph from edge-list or adjacency-list input
pub async fn create_graph(
    State(state): State<AppState>,
    Json(input): Json<GraphInput>,
) -> std::result::Result<Json<SessionInfo>, ApiError> {
    let graph = input.build().map_err(domain_error)?;
    Ok(Json(store(&state, graph)))
}

/// Generate a random graph
pub async fn generate_graph(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> std::result::Result<Json<SessionInfo>, ApiError> {
    if request.node_count < 2 {
        return Err(bad_request(
            "invalid_node_count",
            "node_count must be at least 2".to_string(),
        ));
    }
    let input = match request.graph_type.as_str() {
        "sparse" => generators::random_sparse(
            request.node_count,
            request.node_count * request.edges_per_node,
            request.seed,
        ),
        "scale-free" => generators::scale_free(
            request.node_count,
            request.edges_per_node.max(1).min(request.node_count - 1),
            request.seed,
        ),
        "grid" => {
            let side = (request.node_count as f64).sqrt().ceil() as usize;
            generators::grid_2d(side, side)
        }
        other => {
            return Err(bad_request(
                "invalid_graph_type",
                format!("Unknown graph type: {}", other),
            ));
        }
    };
    let graph = input.build().map_err(domain_error)?;
    Ok(Json(store(&state, graph)))
}

/// Get session info for a stored graph
pub async fn get_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> std::result::Result<Json<SessionInfo>, ApiError> {
    let sessions = state.sessions.lock().unwrap();
    match sessions.get(&session_id) {
        Some(session) => Ok(Json(session.info())),
        None => Err(not_found(session_id)),
    }
}

fn run_algorithm(
    graph: &CsrGraph,
    options: &SolveOptions,
    name: &str,
) -> Result<(ShortestPathResult, f64)> {
    let started = Instant::now();
    let result = match name {
        "dijkstra" => Dijkstra::new().solve(graph, options)?,
        _ => BmsspSolver::new().solve(graph, options)?,
    };
    Ok((result, started.elapsed().as_secs_f64() * 1000.0))
}

/// Run one algorithm on a stored graph
pub async fn solve(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SolveRequest>,
) -> std::result::Result<Json<SolveResponse>, ApiError> {
    let graph = lookup(&state, session_id)?;
    let algorithm = request.algorithm.as_deref().unwrap_or("bmssp");
    if algorithm != "bmssp" && algorithm != "dijkstra" {
        return Err(bad_request(
            "invalid_algorithm",
            format!("Unknown algorithm: {}", algorithm),
        ));
    }
    let (result, elapsed_ms) =
        run_algorithm(&graph, &request.options, algorithm).map_err(domain_error)?;
    Ok(Json(SolveResponse::from_result(
        session_id, algorithm, result, elapsed_ms,
    )))
}

/// Run both algorithms and report whether they agree
pub async fn compare(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SolveRequest>,
) -> std::result::Result<Json<CompareResponse>, ApiError> {
    let graph = lookup(&state, session_id)?;
    let (bmssp, bmssp_ms) =
        run_algorithm(&graph, &request.options, "bmssp").map_err(domain_error)?;
    let (dijkstra, dijkstra_ms) =
        run_algorithm(&graph, &request.options, "dijkstra").map_err(domain_error)?;

    let max_abs_diff = bmssp
        .dist
        .iter()
        .zip(dijkstra.dist.iter())
        .map(|(a, b)| {
            if a.is_infinite() && b.is_infinite() {
                0.0
            } else {
                (a - b).abs()
            }
        })
        .fold(0.0f64, f64::max);

    Ok(Json(CompareResponse {
        session_id,
        source: request.options.source,
        bmssp_ms,
        dijkstra_ms,
        max_abs_diff,
        agree: max_abs_diff <= 1e-9,
    }))
}

/// List stored sessions
pub async fn list_sessions(
    State(state): State<AppState>,
) -> Json<Vec<SessionInfo>> {
    let sessions = state.sessions.lock().unwrap();
    let mut infos: Vec<SessionInfo> = sessions.values().map(Session::info).collect();
    infos.sort_by_key(|info| info.created_at);
    Json(infos)
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
