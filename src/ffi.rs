//! C ABI for callers that hand the graph over as flat edge arrays.

use crate::algorithm::solver::{shortest_paths, SolveOptions};
use crate::graph::{EdgeSpec, GraphInput};

/// Status codes returned by [`bmssp_shortest_paths`]
pub const BMSSP_OK: i32 = 0;
pub const BMSSP_ERR_NULL_POINTER: i32 = -1;
pub const BMSSP_ERR_INVALID_GRAPH: i32 = -2;
pub const BMSSP_ERR_SOLVE: i32 = -3;

/// Computes single-source shortest paths over `m` edges given as parallel
/// `us`/`vs`/`ws` arrays.
///
/// `out_dist` must point at `n` doubles; unreachable vertices are written as
/// infinity. `out_pred` may be null, otherwise it must point at `n` signed
/// integers and receives `-1` for the source and unreachable vertices.
///
/// # Safety
///
/// The caller must uphold the pointer/length contracts above for the whole
/// call.
#[no_mangle]
pub unsafe extern "C" fn bmssp_shortest_paths(
    n: usize,
    m: usize,
    us: *const usize,
    vs: *const usize,
    ws: *const f64,
    directed: bool,
    source: usize,
    out_dist: *mut f64,
    out_pred: *mut i64,
) -> i32 {
    if out_dist.is_null() || (m > 0 && (us.is_null() || vs.is_null() || ws.is_null())) {
        return BMSSP_ERR_NULL_POINTER;
    }

    let edges = if m == 0 {
        Vec::new()
    } else {
        let us = std::slice::from_raw_parts(us, m);
        let vs = std::slice::from_raw_parts(vs, m);
        let ws = std::slice::from_raw_parts(ws, m);
        us.iter()
            .zip(vs)
            .zip(ws)
            .map(|((&u, &v), &w)| EdgeSpec { u, v, w })
            .collect()
    };

    let input = GraphInput::EdgeList { n, edges, directed };
    let graph = match input.build() {
        Ok(graph) => graph,
        Err(_) => return BMSSP_ERR_INVALID_GRAPH,
    };

    let options = SolveOptions {
        source,
        return_predecessors: !out_pred.is_null(),
        k_steps: None,
        pivot_factor: None,
    };
    let result = match shortest_paths(&graph, &options) {
        Ok(result) => result,
        Err(_) => return BMSSP_ERR_SOLVE,
    };

    let dist_out = std::slice::from_raw_parts_mut(out_dist, n);
    dist_out.copy_from_slice(&result.dist);
    if let (false, Some(pred)) = (out_pred.is_null(), result.pred) {
        let pred_out = std::slice::from_raw_parts_mut(out_pred, n);
        pred_out.copy_from_slice(&pred);
    }

    BMSSP_OK
}
