use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Min-priority queue with one entry per item and in-place re-prioritisation.
///
/// A binary heap of `(priority, item)` pairs plus an index from each item to its
/// heap slot. `update` moves the existing entry up or down instead of leaving a
/// superseded copy behind, so the heap never holds more entries than there are
/// queued items.
#[derive(Debug, Clone)]
pub struct IndexedPriorityQueue<T, P>
where
    T: Hash + Eq + Clone + Debug,
    P: Ord + Copy + Debug,
{
    /// Heap-ordered entries
    heap: Vec<(P, T)>,

    /// Item -> position in `heap`
    positions: HashMap<T, usize>,
}

impl<T, P> IndexedPriorityQueue<T, P>
where
    T: Hash + Eq + Clone + Debug,
    P: Ord + Copy + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new empty priority queue with room for `capacity` items
    pub fn with_capacity(capacity: usize) -> Self {
        IndexedPriorityQueue {
            heap: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    /// Inserts `item` with `priority`. An item that is already queued keeps a
    /// single entry carrying the new priority.
    pub fn enqueue(&mut self, priority: P, item: T) {
        if self.positions.contains_key(&item) {
            self.update(priority, item);
            return;
        }
        let slot = self.heap.len();
        self.positions.insert(item.clone(), slot);
        self.heap.push((priority, item));
        self.sift_up(slot);
    }

    /// Removes and returns the item with the smallest priority
    pub fn dequeue(&mut self) -> Option<T> {
        self.dequeue_with_priority().map(|(item, _)| item)
    }

    /// Removes and returns the item with the smallest priority along with it
    pub fn dequeue_with_priority(&mut self) -> Option<(T, P)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let (priority, item) = self.heap.pop()?;
        self.positions.remove(&item);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((item, priority))
    }

    /// Sets the priority of `item`, inserting it if absent. Both decreasing and
    /// increasing the priority are allowed.
    pub fn update(&mut self, priority: P, item: T) {
        let slot = match self.positions.get(&item) {
            Some(&slot) => slot,
            None => {
                self.enqueue(priority, item);
                return;
            }
        };
        let previous = self.heap[slot].0;
        self.heap[slot].0 = priority;
        if priority < previous {
            self.sift_up(slot);
        } else {
            self.sift_down(slot);
        }
    }

    /// Returns the minimum entry without removing it
    pub fn peek(&self) -> Option<(&T, P)> {
        self.heap.first().map(|(priority, item)| (item, *priority))
    }

    /// Current priority of a queued item
    pub fn priority(&self, item: &T) -> Option<P> {
        self.positions.get(item).map(|&slot| self.heap[slot].0)
    }

    /// Returns true if `item` is currently queued
    pub fn contains(&self, item: &T) -> bool {
        self.positions.contains_key(item)
    }

    /// Number of queued items
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if no item is queued
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.heap[slot].0 >= self.heap[parent].0 {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let n = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            if left >= n {
                break;
            }
            let right = left + 1;
            let child = if right < n && self.heap[right].0 < self.heap[left].0 {
                right
            } else {
                left
            };
            if self.heap[slot].0 <= self.heap[child].0 {
                break;
            }
            self.swap(slot, child);
            slot = child;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        if let Some(pos) = self.positions.get_mut(&self.heap[a].1) {
            *pos = a;
        }
        if let Some(pos) = self.positions.get_mut(&self.heap[b].1) {
            *pos = b;
        }
    }
}

impl<T, P> Default for IndexedPriorityQueue<T, P>
where
    T: Hash + Eq + Clone + Debug,
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
