use serde::Deserialize;

use crate::graph::csr::CsrGraph;
use crate::{Error, Result};

/// A single weighted edge in edge-list input
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct EdgeSpec {
    pub u: usize,
    pub v: usize,
    pub w: f64,
}

/// One out-edge entry in adjacency-list input
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AdjEntry {
    pub v: usize,
    pub w: f64,
}

fn default_directed() -> bool {
    true
}

/// Graph input accepted at the boundary, in either of the two supported
/// shapes. Deserializes from JSON such as
/// `{"n": 4, "edges": [{"u": 0, "v": 1, "w": 2.0}]}` or
/// `{"n": 2, "adj": [[{"v": 1, "w": 1.0}], []], "directed": false}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum GraphInput {
    EdgeList {
        n: usize,
        edges: Vec<EdgeSpec>,
        #[serde(default = "default_directed")]
        directed: bool,
    },
    AdjacencyList {
        n: usize,
        adj: Vec<Vec<AdjEntry>>,
        #[serde(default = "default_directed")]
        directed: bool,
    },
}

impl GraphInput {
    /// Validates the input and builds the CSR representation.
    ///
    /// Undirected inputs are stored with a reciprocal edge per input edge;
    /// the algorithms never need to know the difference.
    pub fn build(&self) -> Result<CsrGraph> {
        let (n, directed) = match self {
            GraphInput::EdgeList { n, directed, .. } => (*n, *directed),
            GraphInput::AdjacencyList { n, adj, directed } => {
                if adj.len() != *n {
                    return Err(Error::MalformedInput(format!(
                        "adjacency list has {} rows for {} vertices",
                        adj.len(),
                        n
                    )));
                }
                (*n, *directed)
            }
        };

        let mut triples: Vec<(usize, usize, f64)> = Vec::new();
        match self {
            GraphInput::EdgeList { edges, .. } => {
                triples.reserve(edges.len());
                for e in edges {
                    triples.push((e.u, e.v, e.w));
                }
            }
            GraphInput::AdjacencyList { adj, .. } => {
                triples.reserve(adj.iter().map(Vec::len).sum());
                for (u, row) in adj.iter().enumerate() {
                    for e in row {
                        triples.push((u, e.v, e.w));
                    }
                }
            }
        }

        for &(u, v, w) in &triples {
            if u >= n || v >= n {
                return Err(Error::InvalidEdge(u, v));
            }
            if !w.is_finite() || w < 0.0 {
                return Err(Error::InvalidWeight(w));
            }
        }

        if !directed {
            let forward = triples.len();
            triples.reserve(forward);
            for i in 0..forward {
                let (u, v, w) = triples[i];
                triples.push((v, u, w));
            }
        }

        // Counting sort into CSR rows.
        let mut row_ptr = vec![0usize; n + 1];
        for &(u, _, _) in &triples {
            row_ptr[u + 1] += 1;
        }
        for i in 0..n {
            row_ptr[i + 1] += row_ptr[i];
        }
        let m = triples.len();
        let mut cols = vec![0usize; m];
        let mut weights = vec![0.0f64; m];
        let mut cursor = row_ptr.clone();
        for (u, v, w) in triples {
            let slot = cursor[u];
            cols[slot] = v;
            weights[slot] = w;
            cursor[u] += 1;
        }

        Ok(CsrGraph::from_parts(n, directed, row_ptr, cols, weights))
    }
}
