use log::{debug, trace};
use std::collections::{HashMap, HashSet};

use crate::algorithm::relax::{relax_out_edges, SearchState};
use crate::data_structures::{MinHeap, PartialSortQueue};
use crate::graph::CsrGraph;

/// Tolerance used only for tight-edge detection in the pivot forest; every
/// other distance comparison in the crate is exact.
pub(crate) const TIGHT_EPS: f64 = 1e-12;

/// The bounded multi-source recursion from the paper.
///
/// `k` caps both the relaxation depth of the pivot search and the number of
/// vertices a base case settles; `t` controls how fast the per-level pull
/// cap of the partial-sorting queue grows.
#[derive(Debug, Clone, Copy)]
pub struct Bmssp {
    k: usize,
    t: usize,
}

/// Result from one recursion frame
#[derive(Debug)]
pub struct BmsspResult {
    /// Effective completion bound: every vertex with a true distance below
    /// it is settled once the frame returns
    pub new_bound: f64,

    /// Vertices completed at or below this level, in ascending id order
    pub vertices: Vec<usize>,
}

impl Bmssp {
    /// Derives `k = max(2, l^(1/3))` and `t = max(1, l^(2/3))` from the
    /// vertex count, with `l = max(1, ln n)`. The floor of two on `k` keeps
    /// base cases from settling a single vertex and stalling on dense
    /// clusters.
    pub fn new(vertex_count: usize) -> Self {
        let ell = (vertex_count.max(2) as f64).ln().max(1.0);
        let k = (ell.powf(1.0 / 3.0).floor() as usize).max(2);
        let t = (ell.powf(2.0 / 3.0).floor() as usize).max(1);
        Bmssp { k, t }
    }

    /// Creates an instance with explicit parameters, clamped into their
    /// legal ranges
    pub fn with_params(k: usize, t: usize) -> Self {
        Bmssp {
            k: k.max(2),
            t: t.max(1),
        }
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn t(&self) -> usize {
        self.t
    }

    /// Top recursion level `L = max(1, ceil(l / t))` for a graph of the
    /// given size
    pub fn top_level(&self, vertex_count: usize) -> usize {
        let ell = (vertex_count.max(2) as f64).ln().max(1.0);
        ((ell / self.t as f64).ceil() as usize).max(1)
    }

    /// Pull cap for the queue at `level`; any choice that is at least four
    /// and grows with the level preserves correctness, this one matches the
    /// paper's block sizing.
    fn pull_cap(&self, level: usize) -> usize {
        let shift = ((level - 1) * self.t.div_ceil(4)).min(20);
        (1usize << shift).max(4)
    }

    /// Executes the recursion at `level` with upper bound `bound` and seed
    /// set `seeds`, tightening `state` in place.
    ///
    /// Returns the effective completion bound and the set of vertices this
    /// frame settled. The top-level caller only cares about the final
    /// `state`.
    pub fn execute(
        &self,
        graph: &CsrGraph,
        level: usize,
        bound: f64,
        seeds: &[usize],
        state: &mut SearchState,
    ) -> BmsspResult {
        if seeds.is_empty() {
            return BmsspResult {
                new_bound: bound,
                vertices: Vec::new(),
            };
        }
        if level == 0 {
            return self.base_case(graph, bound, seeds, state);
        }

        trace!(
            "bmssp level {} with {} seeds, bound {}",
            level,
            seeds.len(),
            bound
        );

        let (pivots, witness) = self.find_pivots(graph, bound, seeds, state);
        // An empty pivot set would stall the frame; fall back to the seeds.
        let pivots = if pivots.is_empty() {
            seeds.to_vec()
        } else {
            pivots
        };

        let mut queue = PartialSortQueue::new(self.pull_cap(level), bound);
        for &x in &pivots {
            queue.insert(x, state.dist[x]);
        }

        let mut completed: HashSet<usize> = HashSet::new();
        while !queue.is_empty() {
            let (band, band_bound) = queue.pull();
            if band.is_empty() {
                break;
            }

            let sub = self.execute(graph, level - 1, band_bound, &band, state);
            completed.extend(sub.vertices.iter().copied());

            // Classify relaxations out of the finished band: back into the
            // queue when they land in [B_i, B), into the prepend buffer when
            // they land in [B'_i, B_i), dropped when already finished under
            // a finer bound.
            let mut carry: Vec<(usize, f64)> = Vec::new();
            for &u in &sub.vertices {
                relax_out_edges(graph, u, state, true, Some(bound), |v, nd| {
                    if nd >= band_bound {
                        queue.insert(v, nd);
                    } else if nd >= sub.new_bound {
                        carry.push((v, nd));
                    }
                });
            }
            // Seeds the recursive call did not finish still belong to a
            // smaller band in front of the queue.
            for &x in &band {
                let dx = state.dist[x];
                if dx >= sub.new_bound && dx < band_bound {
                    carry.push((x, dx));
                }
            }
            queue.batch_prepend(carry);
        }

        // The pivot search only relaxes k rounds deep, so tight chains
        // inside the witness set can be left half-propagated. Finish them
        // before reporting the band complete; skipping this strands
        // reachable vertices at infinity.
        let swept: Vec<usize> = witness
            .iter()
            .copied()
            .filter(|&x| state.dist[x] < bound)
            .collect();
        self.propagate_completion(graph, &swept, bound, state);
        completed.extend(swept.iter().copied());

        let mut vertices: Vec<usize> = completed.into_iter().collect();
        vertices.sort_unstable();
        BmsspResult {
            new_bound: bound,
            vertices,
        }
    }

    /// Level-zero bounded Dijkstra: settles at most `k + 1` vertices below
    /// the bound, then reports how far it truly got.
    fn base_case(
        &self,
        graph: &CsrGraph,
        bound: f64,
        seeds: &[usize],
        state: &mut SearchState,
    ) -> BmsspResult {
        // A multi-vertex seed set degenerates to its closest member here.
        let Some(&start) = seeds
            .iter()
            .min_by(|&&a, &&b| state.dist[a].total_cmp(&state.dist[b]))
        else {
            return BmsspResult {
                new_bound: bound,
                vertices: Vec::new(),
            };
        };

        debug!(
            "base case from vertex {} (dist {}) under bound {}",
            start, state.dist[start], bound
        );

        let mut heap = MinHeap::new();
        heap.push(start, state.dist[start]);
        let mut settled: Vec<usize> = Vec::with_capacity(self.k + 1);
        let mut done: HashSet<usize> = HashSet::new();

        while let Some((u, du)) = heap.pop() {
            if du > state.dist[u] || !done.insert(u) {
                continue;
            }
            settled.push(u);
            if settled.len() == self.k + 1 {
                break;
            }
            relax_out_edges(graph, u, state, false, Some(bound), |v, nd| {
                heap.push(v, nd);
            });
        }

        if settled.len() <= self.k {
            BmsspResult {
                new_bound: bound,
                vertices: settled,
            }
        } else {
            let cutoff = settled
                .iter()
                .map(|&v| state.dist[v])
                .fold(f64::NEG_INFINITY, f64::max);
            let vertices = settled
                .into_iter()
                .filter(|&v| state.dist[v] < cutoff)
                .collect();
            BmsspResult {
                new_bound: cutoff,
                vertices,
            }
        }
    }

    /// Runs up to `k` rounds of bounded relaxation out of `seeds` and keeps
    /// the seeds whose tight subtrees grew to at least `k` vertices.
    ///
    /// Returns `(pivots, witness)` where `witness` is every vertex touched.
    /// If the reachable set explodes past `k * |seeds|` the whole seed set
    /// is returned as pivots: any choice works once the frontier is that
    /// wide.
    fn find_pivots(
        &self,
        graph: &CsrGraph,
        bound: f64,
        seeds: &[usize],
        state: &mut SearchState,
    ) -> (Vec<usize>, Vec<usize>) {
        let mut witness: Vec<usize> = Vec::new();
        let mut in_witness: HashSet<usize> = HashSet::new();
        for &s in seeds {
            if in_witness.insert(s) {
                witness.push(s);
            }
        }
        let mut frontier = witness.clone();

        let cap = self.k.saturating_mul(seeds.len());
        for _ in 0..self.k {
            let mut next: Vec<usize> = Vec::new();
            for &u in &frontier {
                relax_out_edges(graph, u, state, true, Some(bound), |v, _nd| {
                    if in_witness.insert(v) {
                        witness.push(v);
                        next.push(v);
                    }
                });
            }
            if witness.len() > cap {
                trace!(
                    "pivot search exploded to {} vertices from {} seeds",
                    witness.len(),
                    seeds.len()
                );
                return (seeds.to_vec(), witness);
            }
            if next.is_empty() {
                break;
            }
            frontier = next;
        }

        // Tight forest over the witness set: each vertex hangs off the
        // in-neighbor that closes its distance, preferring the parent with
        // the smallest distance. Self-loops never parent.
        let index: HashMap<usize, usize> = witness
            .iter()
            .enumerate()
            .map(|(i, &v)| (v, i))
            .collect();
        let mut parent: Vec<Option<usize>> = vec![None; witness.len()];
        for (ui, &u) in witness.iter().enumerate() {
            let du = state.dist[u];
            if du.is_infinite() {
                continue;
            }
            for (v, w) in graph.out_edges(u) {
                let Some(&vi) = index.get(&v) else { continue };
                if vi == ui {
                    continue;
                }
                if (du + w - state.dist[v]).abs() <= TIGHT_EPS {
                    match parent[vi] {
                        Some(p) if state.dist[witness[p]] <= du => {}
                        _ => parent[vi] = Some(ui),
                    }
                }
            }
        }

        // Subtree sizes accumulate child-before-parent, so walk the
        // distance-sorted order from the far end.
        let mut order: Vec<usize> = (0..witness.len()).collect();
        order.sort_by(|&a, &b| state.dist[witness[a]].total_cmp(&state.dist[witness[b]]));
        let mut size = vec![1usize; witness.len()];
        for &i in order.iter().rev() {
            if let Some(p) = parent[i] {
                size[p] += size[i];
            }
        }

        let mut pivots = Vec::new();
        for &s in seeds {
            let Some(&i) = index.get(&s) else { continue };
            if parent[i].is_none() && size[i] >= self.k {
                pivots.push(s);
            }
        }

        trace!(
            "pivot search kept {} of {} seeds over a witness set of {}",
            pivots.len(),
            seeds.len(),
            witness.len()
        );
        (pivots, witness)
    }

    /// Bounded multi-source Dijkstra seeded with every given vertex at its
    /// current distance
    fn propagate_completion(
        &self,
        graph: &CsrGraph,
        sources: &[usize],
        bound: f64,
        state: &mut SearchState,
    ) {
        if sources.is_empty() {
            return;
        }
        let mut heap = MinHeap::new();
        for &x in sources {
            heap.push(x, state.dist[x]);
        }
        let mut done: HashSet<usize> = HashSet::new();
        while let Some((u, du)) = heap.pop() {
            if du > state.dist[u] || !done.insert(u) {
                continue;
            }
            relax_out_edges(graph, u, state, false, Some(bound), |v, nd| {
                heap.push(v, nd);
            });
        }
    }
}
