/// A directed graph in compressed sparse row layout.
///
/// The out-edges of vertex `u` occupy the index range
/// `row_ptr[u]..row_ptr[u + 1]` in `cols` and `weights`. The builder
/// establishes the layout invariants (`row_ptr[0] == 0`,
/// `row_ptr[n] == m`, non-decreasing pointers, endpoints in range, finite
/// non-negative weights); the algorithms assume them without re-checking.
#[derive(Debug, Clone)]
pub struct CsrGraph {
    vertex_count: usize,
    directed: bool,
    row_ptr: Vec<usize>,
    cols: Vec<usize>,
    weights: Vec<f64>,
}

impl CsrGraph {
    pub(crate) fn from_parts(
        vertex_count: usize,
        directed: bool,
        row_ptr: Vec<usize>,
        cols: Vec<usize>,
        weights: Vec<f64>,
    ) -> Self {
        debug_assert_eq!(row_ptr.len(), vertex_count + 1);
        debug_assert_eq!(cols.len(), weights.len());
        debug_assert_eq!(row_ptr.last().copied().unwrap_or(0), cols.len());
        CsrGraph {
            vertex_count,
            directed,
            row_ptr,
            cols,
            weights,
        }
    }

    /// Returns the number of vertices in the graph
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the number of stored edges (reciprocal edges counted twice)
    pub fn edge_count(&self) -> usize {
        self.cols.len()
    }

    /// Returns true if the graph was built as directed
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns true if the vertex exists in the graph
    pub fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count
    }

    /// Returns the out-degree of a vertex
    pub fn out_degree(&self, vertex: usize) -> usize {
        self.row_ptr[vertex + 1] - self.row_ptr[vertex]
    }

    /// Returns an iterator over the `(target, weight)` out-edges of a vertex
    pub fn out_edges(&self, vertex: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let lo = self.row_ptr[vertex];
        let hi = self.row_ptr[vertex + 1];
        self.cols[lo..hi]
            .iter()
            .copied()
            .zip(self.weights[lo..hi].iter().copied())
    }
}
