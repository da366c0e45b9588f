use bmssp::algorithm::bmssp::Bmssp;
use bmssp::algorithm::relax::SearchState;
use bmssp::graph::{EdgeSpec, GraphInput};

fn edge(u: usize, v: usize, w: f64) -> EdgeSpec {
    EdgeSpec { u, v, w }
}

#[test]
fn test_bmssp_base_case() {
    let g = GraphInput::EdgeList {
        n: 5,
        edges: vec![
            edge(0, 1, 1.0),
            edge(1, 2, 1.0),
            edge(0, 2, 3.0),
            edge(2, 3, 1.0),
            edge(1, 3, 4.0),
            edge(3, 4, 1.0),
            edge(0, 4, 10.0),
        ],
        directed: true,
    }
    .build()
    .unwrap();

    let mut state = SearchState::new(g.vertex_count(), 0, true);

    // n = 5 derives k = 2, so the base case settles at most three vertices.
    let algo = Bmssp::new(g.vertex_count());
    assert_eq!(algo.k(), 2);
    let result = algo.execute(&g, 0, f64::INFINITY, &[0], &mut state);

    assert_eq!(result.new_bound, 2.0);
    assert_eq!(result.vertices.len(), 2);
    assert!(result.vertices.contains(&0));
    assert!(result.vertices.contains(&1));
}

#[test]
fn test_base_case_without_truncation_keeps_bound() {
    // Two reachable vertices settle below the k + 1 cap, so the incoming
    // bound is reported back unchanged.
    let g = GraphInput::EdgeList {
        n: 3,
        edges: vec![edge(0, 1, 1.0)],
        directed: true,
    }
    .build()
    .unwrap();

    let mut state = SearchState::new(3, 0, false);
    let algo = Bmssp::with_params(2, 1);
    let result = algo.execute(&g, 0, f64::INFINITY, &[0], &mut state);

    assert_eq!(result.new_bound, f64::INFINITY);
    assert_eq!(result.vertices, vec![0, 1]);
}

#[test]
fn test_base_case_respects_bound() {
    // The edge to vertex 2 lands on the bound and must not be relaxed.
    let g = GraphInput::EdgeList {
        n: 3,
        edges: vec![edge(0, 1, 1.0), edge(1, 2, 1.0)],
        directed: true,
    }
    .build()
    .unwrap();

    let mut state = SearchState::new(3, 0, false);
    let algo = Bmssp::with_params(4, 1);
    let result = algo.execute(&g, 0, 2.0, &[0], &mut state);

    assert_eq!(result.new_bound, 2.0);
    assert_eq!(result.vertices, vec![0, 1]);
    assert!(state.dist[2].is_infinite());
}

#[test]
fn test_base_case_picks_closest_seed() {
    let g = GraphInput::EdgeList {
        n: 4,
        edges: vec![edge(2, 3, 1.0)],
        directed: true,
    }
    .build()
    .unwrap();

    let mut state = SearchState::new(4, 0, false);
    state.dist[1] = 7.0;
    state.dist[2] = 4.0;

    let algo = Bmssp::with_params(2, 1);
    let result = algo.execute(&g, 0, f64::INFINITY, &[1, 2], &mut state);

    // Seed 2 is closer, so the mini-Dijkstra runs from it.
    assert!(result.vertices.contains(&2));
    assert_eq!(state.dist[3], 5.0);
}
