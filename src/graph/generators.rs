use rand::prelude::*;
use rand::rngs::StdRng;
use std::collections::HashSet;

use crate::graph::builder::{EdgeSpec, GraphInput};

/// Generates a uniform random directed graph with `n` vertices and `m`
/// distinct non-self-loop edges, weights drawn from `[1.0, 100.0)`.
pub fn random_sparse(n: usize, m: usize, seed: u64) -> GraphInput {
    assert!(n >= 2, "need at least two vertices");
    let m = m.min(n * (n - 1));
    let mut rng = StdRng::seed_from_u64(seed);
    let mut used = HashSet::new();
    let mut edges = Vec::with_capacity(m);

    while edges.len() < m {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u == v {
            continue;
        }
        if used.insert((u, v)) {
            edges.push(EdgeSpec {
                u,
                v,
                w: rng.gen_range(1.0..100.0),
            });
        }
    }

    GraphInput::EdgeList {
        n,
        edges,
        directed: true,
    }
}

/// Generates a Barabási-Albert scale-free graph with `n` vertices and `m`
/// edges per new vertex, using preferential attachment.
pub fn scale_free(n: usize, m: usize, seed: u64) -> GraphInput {
    assert!(m > 0, "m must be positive");
    assert!(n > m, "n must be greater than m");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::new();

    // Seed clique over the initial m vertices.
    for i in 0..m {
        for j in 0..m {
            if i != j {
                edges.push(EdgeSpec {
                    u: i,
                    v: j,
                    w: rng.gen_range(1.0..100.0),
                });
            }
        }
    }

    let mut degrees = vec![m.saturating_sub(1); m];
    let mut total_degree = m * m.saturating_sub(1);

    for i in m..n {
        let mut attached = HashSet::new();
        while attached.len() < m {
            let mut ticket = rng.gen_range(0..total_degree.max(1));
            let mut target = 0;
            while target + 1 < i && ticket >= degrees[target] {
                ticket -= degrees[target];
                target += 1;
            }
            if target < i && attached.insert(target) {
                edges.push(EdgeSpec {
                    u: i,
                    v: target,
                    w: rng.gen_range(1.0..100.0),
                });
                degrees[target] += 1;
                total_degree += 1;
            }
        }
        degrees.push(m);
        total_degree += m;
    }

    GraphInput::EdgeList {
        n,
        edges,
        directed: true,
    }
}

/// Generates a `width * height` grid with unit-weight edges in the four
/// cardinal directions (both ways, emitted as a directed edge list).
pub fn grid_2d(width: usize, height: usize) -> GraphInput {
    let n = width * height;
    let mut edges = Vec::with_capacity(4 * n);

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            if x + 1 < width {
                edges.push(EdgeSpec {
                    u: vertex,
                    v: vertex + 1,
                    w: 1.0,
                });
                edges.push(EdgeSpec {
                    u: vertex + 1,
                    v: vertex,
                    w: 1.0,
                });
            }
            if y + 1 < height {
                edges.push(EdgeSpec {
                    u: vertex,
                    v: vertex + width,
                    w: 1.0,
                });
                edges.push(EdgeSpec {
                    u: vertex + width,
                    v: vertex,
                    w: 1.0,
                });
            }
        }
    }

    GraphInput::EdgeList {
        n,
        edges,
        directed: true,
    }
}
