use std::collections::HashSet;

use crate::algorithm::relax::{relax_out_edges, SearchState};
use crate::algorithm::solver::SolveOptions;
use crate::algorithm::traits::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::MinHeap;
use crate::graph::CsrGraph;
use crate::Result;

/// Classic binary-heap Dijkstra. Asymptotically slower than the bounded
/// recursion but simple enough to serve as the equivalence oracle in tests.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl ShortestPathAlgorithm for Dijkstra {
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn solve(&self, graph: &CsrGraph, options: &SolveOptions) -> Result<ShortestPathResult> {
        options.validate(graph)?;

        let n = graph.vertex_count();
        let mut state = SearchState::new(n, options.source, options.return_predecessors);

        let mut heap = MinHeap::new();
        heap.push(options.source, 0.0);
        let mut settled: HashSet<usize> = HashSet::new();

        while let Some((u, du)) = heap.pop() {
            if du > state.dist[u] || !settled.insert(u) {
                continue;
            }
            relax_out_edges(graph, u, &mut state, false, None, |v, nd| {
                heap.push(v, nd);
            });
        }

        Ok(ShortestPathResult {
            source: options.source,
            dist: state.dist,
            pred: state.pred,
        })
    }
}
