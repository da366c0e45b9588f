use crate::graph::CsrGraph;
use crate::Result;

use super::solver::SolveOptions;

/// Result of a shortest path computation
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult {
    /// Source vertex ID
    pub source: usize,

    /// Distance from the source to each vertex; `f64::INFINITY` for
    /// unreachable vertices
    pub dist: Vec<f64>,

    /// Predecessor of each vertex on a shortest path, when requested.
    /// `-1` for the source and for unreachable vertices.
    pub pred: Option<Vec<i64>>,
}

/// Trait for shortest path algorithms over a CSR graph
pub trait ShortestPathAlgorithm {
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Compute shortest paths from `options.source` to all other vertices
    fn solve(&self, graph: &CsrGraph, options: &SolveOptions) -> Result<ShortestPathResult>;
}
