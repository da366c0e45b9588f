use crate::graph::CsrGraph;

/// Mutable state shared across one whole shortest-path run.
///
/// `dist` is monotonically non-increasing over time and bounded below by the
/// true shortest distance; `pred` is written only on strict improvements, so
/// a finite entry always names the last edge of some witnessed path.
#[derive(Debug)]
pub struct SearchState {
    pub dist: Vec<f64>,
    pub pred: Option<Vec<i64>>,
}

impl SearchState {
    /// Fresh state for a run from `source`: every distance infinite except
    /// the source at zero, predecessors all `-1` when tracked.
    pub fn new(n: usize, source: usize, track_predecessors: bool) -> Self {
        let mut dist = vec![f64::INFINITY; n];
        dist[source] = 0.0;
        let pred = track_predecessors.then(|| vec![-1i64; n]);
        SearchState { dist, pred }
    }

    fn set_pred(&mut self, v: usize, u: usize) {
        if let Some(pred) = self.pred.as_mut() {
            pred[v] = u as i64;
        }
    }
}

/// Walks the out-edges of `u` and tightens `state` where a shorter path
/// appears.
///
/// Edges whose candidate distance reaches `bound` are skipped when a bound
/// is given. The visitor runs for every strict improvement; with `eq_ok` it
/// also runs when the candidate merely matches the current distance, so a
/// vertex already at its final distance can still be handed to the caller
/// for re-classification. Distance and predecessor are never written on an
/// equal candidate.
pub fn relax_out_edges<F>(
    graph: &CsrGraph,
    u: usize,
    state: &mut SearchState,
    eq_ok: bool,
    bound: Option<f64>,
    mut visit: F,
) where
    F: FnMut(usize, f64),
{
    let du = state.dist[u];
    if du.is_infinite() {
        return;
    }
    for (v, w) in graph.out_edges(u) {
        let nd = du + w;
        if let Some(b) = bound {
            if nd >= b {
                continue;
            }
        }
        if nd < state.dist[v] {
            state.dist[v] = nd;
            state.set_pred(v, u);
            visit(v, nd);
        } else if eq_ok && nd == state.dist[v] {
            visit(v, nd);
        }
    }
}
