use bmssp::graph::generators::{grid_2d, random_sparse, scale_free};
use bmssp::graph::{EdgeSpec, GraphInput};
use bmssp::{BmsspSolver, CsrGraph, Dijkstra, ShortestPathAlgorithm, SolveOptions};
use rand::prelude::*;
use rand::rngs::StdRng;

const EPS: f64 = 1e-9;

fn assert_same_dist(fast: &[f64], oracle: &[f64], context: &str) {
    assert_eq!(fast.len(), oracle.len());
    for v in 0..fast.len() {
        let (a, b) = (fast[v], oracle[v]);
        if b.is_infinite() {
            assert!(a.is_infinite(), "{}: vertex {} should be unreachable, got {}", context, v, a);
        } else {
            assert!(
                (a - b).abs() <= EPS,
                "{}: vertex {}: bmssp {} vs dijkstra {}",
                context,
                v,
                a,
                b
            );
        }
    }
}

fn check_invariants(graph: &CsrGraph, source: usize, context: &str) {
    let options = SolveOptions::new(source).with_predecessors();
    let fast = BmsspSolver::new().solve(graph, &options).unwrap();
    let oracle = Dijkstra::new().solve(graph, &options).unwrap();

    assert_same_dist(&fast.dist, &oracle.dist, context);

    // Non-negativity and source anchoring.
    assert_eq!(fast.dist[source], 0.0, "{}", context);
    for &d in &fast.dist {
        assert!(d.is_infinite() || d >= 0.0, "{}", context);
    }

    // Edge feasibility: no edge can shortcut the reported distances.
    for u in 0..graph.vertex_count() {
        if fast.dist[u].is_infinite() {
            continue;
        }
        for (v, w) in graph.out_edges(u) {
            assert!(
                fast.dist[v] <= fast.dist[u] + w + EPS,
                "{}: edge {} -> {} violates the triangle inequality",
                context,
                u,
                v
            );
        }
    }

    // Predecessor coherence.
    let pred = fast.pred.unwrap();
    assert_eq!(pred[source], -1, "{}", context);
    for v in 0..graph.vertex_count() {
        if v == source || fast.dist[v].is_infinite() {
            continue;
        }
        let p = pred[v];
        assert!(p >= 0, "{}: reachable vertex {} lost its predecessor", context, v);
        let p = p as usize;
        let closes = graph
            .out_edges(p)
            .any(|(to, w)| to == v && (fast.dist[p] + w - fast.dist[v]).abs() <= EPS);
        assert!(closes, "{}: predecessor edge {} -> {} is not tight", context, p, v);
    }
}

#[test]
fn test_matches_dijkstra_on_random_sparse() {
    for seed in 0..20u64 {
        let n = 64;
        let graph = random_sparse(n, 512, 0xB0A5 + seed).build().unwrap();
        let source = (seed as usize) % n;
        check_invariants(&graph, source, &format!("sparse seed={}", seed));
    }
}

#[test]
fn test_matches_dijkstra_on_larger_sparse() {
    for seed in 0..4u64 {
        let n = 500;
        let graph = random_sparse(n, 2_000, 0xFA57 + seed).build().unwrap();
        let source = (7 * seed as usize) % n;
        check_invariants(&graph, source, &format!("larger seed={}", seed));
    }
}

#[test]
fn test_matches_dijkstra_on_scale_free() {
    for seed in 0..8u64 {
        let graph = scale_free(120, 3, 0x5CA1E + seed).build().unwrap();
        check_invariants(&graph, 0, &format!("scale-free seed={}", seed));
    }
}

#[test]
fn test_matches_dijkstra_on_grid() {
    let graph = grid_2d(12, 9).build().unwrap();
    check_invariants(&graph, 0, "grid");
    check_invariants(&graph, 57, "grid offset source");
}

#[test]
fn test_matches_dijkstra_with_zero_weights() {
    for seed in 0..10u64 {
        let n = 50;
        let mut rng = StdRng::seed_from_u64(0x2E80 + seed);
        let mut edges = Vec::new();
        for _ in 0..300 {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            if u != v {
                edges.push(EdgeSpec {
                    u,
                    v,
                    w: rng.gen_range(0..3) as f64,
                });
            }
        }
        let graph = GraphInput::EdgeList {
            n,
            edges,
            directed: true,
        }
        .build()
        .unwrap();
        check_invariants(&graph, 0, &format!("zero-weight seed={}", seed));
    }
}

#[test]
fn test_matches_dijkstra_with_many_unreachable() {
    for seed in 0..10u64 {
        // Far fewer edges than vertices guarantees unreachable islands.
        let graph = random_sparse(120, 90, 0xD15C + seed).build().unwrap();
        check_invariants(&graph, 0, &format!("islands seed={}", seed));
    }
}

#[test]
fn test_undirected_input() {
    let graph = GraphInput::EdgeList {
        n: 5,
        edges: vec![
            EdgeSpec { u: 0, v: 1, w: 2.0 },
            EdgeSpec { u: 1, v: 2, w: 2.0 },
            EdgeSpec { u: 3, v: 4, w: 1.0 },
        ],
        directed: false,
    }
    .build()
    .unwrap();
    check_invariants(&graph, 2, "undirected");
}

#[test]
fn test_idempotent_runs() {
    let graph = random_sparse(80, 400, 0x1DE0).build().unwrap();
    let options = SolveOptions::new(3).with_predecessors();
    let first = BmsspSolver::new().solve(&graph, &options).unwrap();
    let second = BmsspSolver::new().solve(&graph, &options).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_parameter_overrides_leave_distances_unchanged() {
    let graph = random_sparse(100, 600, 0x9A12).build().unwrap();
    let baseline = BmsspSolver::new()
        .solve(&graph, &SolveOptions::new(0))
        .unwrap();

    for k_steps in [2, 3, 5] {
        for pivot_factor in [1, 2, 8] {
            let options = SolveOptions {
                source: 0,
                return_predecessors: false,
                k_steps: Some(k_steps),
                pivot_factor: Some(pivot_factor),
            };
            let run = BmsspSolver::new().solve(&graph, &options).unwrap();
            assert_same_dist(
                &run.dist,
                &baseline.dist,
                &format!("k={} t={}", k_steps, pivot_factor),
            );
        }
    }
}
