use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-ordered wrapper around BinaryHeap for queues of keyed items that never
/// change priority once pushed (edges in Kruskal and lazy Prim).
#[derive(Debug, Clone)]
pub struct MinPriorityQueue<V, P>
where
    V: Copy + Debug + Ord,
    P: Copy + Debug + Ord,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> MinPriorityQueue<V, P>
where
    V: Copy + Debug + Ord,
    P: Copy + Debug + Ord,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinPriorityQueue {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an element with the given priority into the priority queue
    pub fn push(&mut self, item: V, priority: P) {
        self.heap.push(Reverse((priority, item)));
    }

    /// Removes the element with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, item))| (item, priority))
    }

    /// Returns the element with the smallest priority without removing it
    pub fn peek(&self) -> Option<(V, P)> {
        self.heap.peek().map(|Reverse((priority, item))| (*item, *priority))
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<V, P> Default for MinPriorityQueue<V, P>
where
    V: Copy + Debug + Ord,
    P: Copy + Debug + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, P> FromIterator<(V, P)> for MinPriorityQueue<V, P>
where
    V: Copy + Debug + Ord,
    P: Copy + Debug + Ord,
{
    fn from_iter<I: IntoIterator<Item = (V, P)>>(iter: I) -> Self {
        MinPriorityQueue {
            heap: iter
                .into_iter()
                .map(|(item, priority)| Reverse((priority, item)))
                .collect(),
        }
    }
}
