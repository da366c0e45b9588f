pub mod min_heap;
pub mod partial_queue;

pub use min_heap::MinHeap;
pub use partial_queue::PartialSortQueue;
