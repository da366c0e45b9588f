use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// A min-heap over `(vertex, priority)` pairs for the bounded Dijkstra
/// passes. Wraps the standard binary heap so call sites deal in plain `f64`
/// priorities.
#[derive(Debug, Default)]
pub struct MinHeap {
    heap: BinaryHeap<Reverse<(OrderedFloat<f64>, usize)>>,
}

impl MinHeap {
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinHeap {
            heap: BinaryHeap::new(),
        }
    }

    /// Pushes a vertex with the given priority
    pub fn push(&mut self, vertex: usize, priority: f64) {
        self.heap.push(Reverse((OrderedFloat(priority), vertex)));
    }

    /// Removes and returns the vertex with the smallest priority
    pub fn pop(&mut self) -> Option<(usize, f64)> {
        self.heap
            .pop()
            .map(|Reverse((priority, vertex))| (vertex, priority.0))
    }
}
