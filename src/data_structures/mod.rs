pub mod indexed_priority_queue;
pub mod priority_queue;
pub mod union_find;

pub use indexed_priority_queue::IndexedPriorityQueue;
pub use priority_queue::MinPriorityQueue;
pub use union_find::UnionFind;
