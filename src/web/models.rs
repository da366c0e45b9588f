use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::algorithm::solver::SolveOptions;
use crate::algorithm::traits::ShortestPathResult;
use crate::graph::CsrGraph;

/// A stored graph plus bookkeeping for one API session
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub graph: CsrGraph,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(graph: CsrGraph) -> Self {
        Self {
            id: Uuid::new_v4(),
            graph,
            created_at: Utc::now(),
        }
    }

    pub fn info(&self) -> SessionInfo {
        SessionInfo {
            id: self.id,
            vertex_count: self.graph.vertex_count(),
            edge_count: self.graph.edge_count(),
            directed: self.graph.is_directed(),
            created_at: self.created_at,
        }
    }
}

/// Serializable summary of a session
#[derive(Debug, Clone, Serialize)]
pub struct SessionInfo {
    pub id: Uuid,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub directed: bool,
    pub created_at: DateTime<Utc>,
}

/// Parameters for random graph generation
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub graph_type: String,
    pub node_count: usize,
    #[serde(default = "default_edges_per_node")]
    pub edges_per_node: usize,
    #[serde(default)]
    pub seed: u64,
}

fn default_edges_per_node() -> usize {
    3
}

/// Parameters for a solve call
#[derive(Debug, Deserialize)]
pub struct SolveRequest {
    /// `"bmssp"` (default) or `"dijkstra"`
    #[serde(default)]
    pub algorithm: Option<String>,
    #[serde(flatten)]
    pub options: SolveOptions,
}

/// Response containing the computed distances
#[derive(Debug, Serialize)]
pub struct SolveResponse {
    pub session_id: Uuid,
    pub algorithm: String,
    pub source: usize,
    pub execution_time_ms: f64,
    /// `null` entries mark unreachable vertices
    pub dist: Vec<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pred: Option<Vec<i64>>,
}

impl SolveResponse {
    pub fn from_result(
        session_id: Uuid,
        algorithm: &str,
        result: ShortestPathResult,
        execution_time_ms: f64,
    ) -> Self {
        Self {
            session_id,
            algorithm: algorithm.to_string(),
            source: result.source,
            execution_time_ms,
            dist: result
                .dist
                .into_iter()
                .map(|d| d.is_finite().then_some(d))
                .collect(),
            pred: result.pred,
        }
    }
}

/// Response from running both algorithms on the same query
#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub session_id: Uuid,
    pub source: usize,
    pub bmssp_ms: f64,
    pub dijkstra_ms: f64,
    pub max_abs_diff: f64,
    pub agree: bool,
}

/// Error response for the API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
