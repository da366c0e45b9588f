//! Single-source shortest paths below the sorting barrier.
//!
//! This library implements the deterministic O(m log^(2/3) n) algorithm for
//! single-source shortest paths on directed graphs with non-negative real
//! edge weights, described in "Breaking the Sorting Barrier for Directed
//! Single-Source Shortest Paths" by Duan, Mao, Mao, Shu and Yin (2025).
//!
//! The crate exposes a CSR graph type built from edge-list or adjacency-list
//! input, the bounded multi-source recursion behind [`BmsspSolver`], and a
//! classic binary-heap [`Dijkstra`] used as a baseline and test oracle.

pub mod algorithm;
pub mod data_structures;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod graph;
pub mod web;

pub use algorithm::solver::{shortest_paths, BmsspSolver, SolveOptions};
pub use algorithm::{Dijkstra, ShortestPathAlgorithm, ShortestPathResult};
/// Re-export main types for convenient use
pub use graph::{CsrGraph, GraphInput};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Edge weight must be finite and non-negative, got {0}")]
    InvalidWeight(f64),

    #[error("Source vertex {0} is outside the graph")]
    SourceOutOfRange(usize),

    #[error("Malformed graph input: {0}")]
    MalformedInput(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
