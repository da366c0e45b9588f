use log::debug;
use serde::Deserialize;

use crate::algorithm::bmssp::Bmssp;
use crate::algorithm::relax::SearchState;
use crate::algorithm::traits::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::CsrGraph;
use crate::{Error, Result};

/// Options for a single-source query
#[derive(Debug, Clone, Deserialize)]
pub struct SolveOptions {
    /// Source vertex
    pub source: usize,

    /// Allocate and return the predecessor array
    #[serde(default)]
    pub return_predecessors: bool,

    /// Overrides the computed relaxation depth `k` (clamped to at least 2).
    /// Any legal value yields the same distances.
    #[serde(default)]
    pub k_steps: Option<usize>,

    /// Overrides the computed growth parameter `t` (clamped to at least 1).
    /// Any legal value yields the same distances.
    #[serde(default)]
    pub pivot_factor: Option<usize>,
}

impl SolveOptions {
    pub fn new(source: usize) -> Self {
        SolveOptions {
            source,
            return_predecessors: false,
            k_steps: None,
            pivot_factor: None,
        }
    }

    pub fn with_predecessors(mut self) -> Self {
        self.return_predecessors = true;
        self
    }

    pub(crate) fn validate(&self, graph: &CsrGraph) -> Result<()> {
        if !graph.has_vertex(self.source) {
            return Err(Error::SourceOutOfRange(self.source));
        }
        Ok(())
    }
}

/// Single-source shortest paths via the bounded multi-source recursion
#[derive(Debug, Default)]
pub struct BmsspSolver;

impl BmsspSolver {
    /// Creates a new solver instance
    pub fn new() -> Self {
        BmsspSolver
    }
}

impl ShortestPathAlgorithm for BmsspSolver {
    fn name(&self) -> &'static str {
        "bmssp"
    }

    fn solve(&self, graph: &CsrGraph, options: &SolveOptions) -> Result<ShortestPathResult> {
        options.validate(graph)?;

        let n = graph.vertex_count();
        let derived = Bmssp::new(n);
        let algo = match (options.k_steps, options.pivot_factor) {
            (None, None) => derived,
            (k, t) => Bmssp::with_params(k.unwrap_or(derived.k()), t.unwrap_or(derived.t())),
        };
        let top = algo.top_level(n);

        debug!(
            "solving n={} m={} with k={} t={} from level {}",
            n,
            graph.edge_count(),
            algo.k(),
            algo.t(),
            top
        );

        let mut state = SearchState::new(n, options.source, options.return_predecessors);
        // The top-level frame's return value carries nothing the caller
        // needs; the distances are the output.
        let _ = algo.execute(graph, top, f64::INFINITY, &[options.source], &mut state);

        Ok(ShortestPathResult {
            source: options.source,
            dist: state.dist,
            pred: state.pred,
        })
    }
}

/// Computes shortest paths from `options.source` using the default solver
pub fn shortest_paths(graph: &CsrGraph, options: &SolveOptions) -> Result<ShortestPathResult> {
    BmsspSolver::new().solve(graph, options)
}
