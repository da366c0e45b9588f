use bmssp::graph::{AdjEntry, EdgeSpec, GraphInput};
use bmssp::{shortest_paths, BmsspSolver, CsrGraph, Dijkstra, ShortestPathAlgorithm, SolveOptions};

const EPS: f64 = 1e-12;

fn edge_list(n: usize, edges: &[(usize, usize, f64)]) -> CsrGraph {
    GraphInput::EdgeList {
        n,
        edges: edges
            .iter()
            .map(|&(u, v, w)| EdgeSpec { u, v, w })
            .collect(),
        directed: true,
    }
    .build()
    .unwrap()
}

fn assert_dist(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (v, (&a, &e)) in actual.iter().zip(expected).enumerate() {
        if e.is_infinite() {
            assert!(a.is_infinite(), "vertex {} should be unreachable, got {}", v, a);
        } else {
            assert!((a - e).abs() <= EPS, "vertex {}: {} != {}", v, a, e);
        }
    }
}

fn solve(graph: &CsrGraph, source: usize) -> Vec<f64> {
    shortest_paths(graph, &SolveOptions::new(source)).unwrap().dist
}

#[test]
fn test_diamond_graph() {
    let g = edge_list(4, &[(0, 1, 2.0), (0, 3, 1.0), (1, 2, 1.0), (3, 2, 5.0)]);
    assert_dist(&solve(&g, 0), &[0.0, 2.0, 3.0, 1.0]);
}

#[test]
fn test_two_route_graph() {
    let g = edge_list(
        6,
        &[
            (0, 1, 2.0),
            (0, 2, 3.0),
            (1, 3, 2.0),
            (2, 3, 2.0),
            (3, 4, 1.0),
            (1, 5, 10.0),
        ],
    );
    assert_dist(&solve(&g, 0), &[0.0, 2.0, 3.0, 4.0, 5.0, 12.0]);
}

#[test]
fn test_layered_graph() {
    let g = edge_list(
        10,
        &[
            (0, 1, 4.0),
            (0, 2, 3.0),
            (1, 3, 2.0),
            (1, 4, 7.0),
            (2, 3, 5.0),
            (2, 5, 8.0),
            (3, 6, 6.0),
            (4, 6, 1.0),
            (5, 7, 2.0),
            (6, 8, 3.0),
            (7, 8, 4.0),
            (8, 9, 5.0),
        ],
    );
    assert_dist(
        &solve(&g, 0),
        &[0.0, 4.0, 3.0, 6.0, 11.0, 11.0, 12.0, 13.0, 15.0, 20.0],
    );
}

#[test]
fn test_path_graph() {
    let g = edge_list(3, &[(0, 1, 1.0), (1, 2, 2.0)]);
    assert_dist(&solve(&g, 0), &[0.0, 1.0, 3.0]);
}

#[test]
fn test_disconnected_graph() {
    let g = edge_list(4, &[(0, 1, 1.0)]);
    let result = shortest_paths(&g, &SolveOptions::new(0).with_predecessors()).unwrap();
    assert_dist(&result.dist, &[0.0, 1.0, f64::INFINITY, f64::INFINITY]);

    let pred = result.pred.unwrap();
    assert_eq!(pred[0], -1);
    assert_eq!(pred[1], 0);
    // Unreachable vertices keep the sentinel.
    assert_eq!(pred[2], -1);
    assert_eq!(pred[3], -1);
}

#[test]
fn test_zero_weight_self_loop() {
    let g = GraphInput::AdjacencyList {
        n: 4,
        adj: vec![
            vec![AdjEntry { v: 1, w: 2.0 }, AdjEntry { v: 3, w: 1.0 }],
            vec![AdjEntry { v: 2, w: 1.0 }],
            vec![AdjEntry { v: 2, w: 0.0 }],
            vec![AdjEntry { v: 2, w: 5.0 }],
        ],
        directed: true,
    }
    .build()
    .unwrap();
    assert_dist(&solve(&g, 0), &[0.0, 2.0, 3.0, 1.0]);
}

#[test]
fn test_source_is_zero_with_no_predecessor() {
    let g = edge_list(4, &[(0, 1, 2.0), (1, 2, 2.0), (2, 3, 2.0)]);
    let result = shortest_paths(&g, &SolveOptions::new(0).with_predecessors()).unwrap();
    assert_eq!(result.dist[0], 0.0);
    assert_eq!(result.pred.unwrap()[0], -1);
}

#[test]
fn test_predecessors_close_the_path() {
    let g = edge_list(
        6,
        &[
            (0, 1, 2.0),
            (0, 2, 3.0),
            (1, 3, 2.0),
            (2, 3, 2.0),
            (3, 4, 1.0),
            (1, 5, 10.0),
        ],
    );
    let result = shortest_paths(&g, &SolveOptions::new(0).with_predecessors()).unwrap();
    let pred = result.pred.unwrap();

    for v in 0..g.vertex_count() {
        if v == 0 || result.dist[v].is_infinite() {
            continue;
        }
        let p = pred[v];
        assert!(p >= 0, "vertex {} has no predecessor", v);
        let p = p as usize;
        let closes = g
            .out_edges(p)
            .any(|(to, w)| to == v && (result.dist[p] + w - result.dist[v]).abs() <= EPS);
        assert!(closes, "edge {} -> {} does not close the distance", p, v);
    }
}

#[test]
fn test_both_solvers_agree_on_scenarios() {
    let graphs = vec![
        edge_list(4, &[(0, 1, 2.0), (0, 3, 1.0), (1, 2, 1.0), (3, 2, 5.0)]),
        edge_list(3, &[(0, 1, 1.0), (1, 2, 2.0)]),
        edge_list(4, &[(0, 1, 1.0)]),
    ];
    for g in &graphs {
        let options = SolveOptions::new(0);
        let fast = BmsspSolver::new().solve(g, &options).unwrap();
        let oracle = Dijkstra::new().solve(g, &options).unwrap();
        assert_dist(&fast.dist, &oracle.dist);
    }
}

#[test]
fn test_source_out_of_range_is_rejected() {
    let g = edge_list(3, &[(0, 1, 1.0)]);
    assert!(shortest_paths(&g, &SolveOptions::new(3)).is_err());
    assert!(shortest_paths(&g, &SolveOptions::new(usize::MAX)).is_err());
}
