use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::{Error, Result};

/// Disjoint-set forest over arbitrary hashable labels.
///
/// Labels are mapped to dense indices in order of first appearance; the forest
/// itself (parents and ranks) only ever sees those indices. `find` compresses
/// the traversed path so every visited node ends up pointing at the root, and
/// `union` attaches the lower-rank root under the higher-rank one.
#[derive(Debug, Clone)]
pub struct UnionFind<T>
where
    T: Hash + Eq + Clone + Debug,
{
    /// Parent of each dense index; roots point at themselves
    parents: Vec<usize>,

    /// Upper bound on the height of the tree rooted at each index
    ranks: Vec<u32>,

    /// Label -> dense index
    encoding: HashMap<T, usize>,

    /// Dense index -> label
    decoding: Vec<T>,

    /// Number of disjoint sets among the encoded labels
    sets: usize,
}

impl<T> UnionFind<T>
where
    T: Hash + Eq + Clone + Debug,
{
    /// Creates an empty structure
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty structure with room for `capacity` labels
    pub fn with_capacity(capacity: usize) -> Self {
        UnionFind {
            parents: Vec::with_capacity(capacity),
            ranks: Vec::with_capacity(capacity),
            encoding: HashMap::with_capacity(capacity),
            decoding: Vec::with_capacity(capacity),
            sets: 0,
        }
    }

    /// Creates a structure with every label encoded as its own singleton set
    pub fn from_labels<I>(labels: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let labels = labels.into_iter();
        let mut uf = Self::with_capacity(labels.size_hint().0);
        for label in labels {
            uf.encode(label);
        }
        uf
    }

    /// Returns the dense index of `label`, assigning the next free one if unseen
    pub fn encode(&mut self, label: T) -> usize {
        if let Some(&idx) = self.encoding.get(&label) {
            return idx;
        }
        let idx = self.decoding.len();
        self.encoding.insert(label.clone(), idx);
        self.decoding.push(label);
        self.parents.push(idx);
        self.ranks.push(0);
        self.sets += 1;
        idx
    }

    /// Returns the label stored at a dense index
    pub fn decode(&self, idx: usize) -> Option<&T> {
        self.decoding.get(idx)
    }

    /// Returns the dense index of an already encoded label
    pub fn index_of(&self, label: &T) -> Option<usize> {
        self.encoding.get(label).copied()
    }

    /// Returns the root index of the set containing `label`
    pub fn find(&mut self, label: &T) -> Result<usize> {
        let idx = self.index_of(label).ok_or(Error::LabelNotFound)?;
        Ok(self.root(idx))
    }

    /// Returns the root index of the set containing the dense index `idx`
    pub fn find_index(&mut self, idx: usize) -> Result<usize> {
        if idx >= self.parents.len() {
            return Err(Error::LabelNotFound);
        }
        Ok(self.root(idx))
    }

    /// Unions the sets of each adjacent pair: `[a, b, c, d]` joins `a` with `b`
    /// and `c` with `d`. Unseen labels are encoded first.
    pub fn union(&mut self, labels: &[T]) {
        for pair in labels.chunks_exact(2) {
            let x = self.encode(pair[0].clone());
            let y = self.encode(pair[1].clone());
            self.link(x, y);
        }
    }

    /// Returns true iff every adjacent pair of `labels` belongs to the same set
    pub fn connected(&mut self, labels: &[T]) -> bool {
        for pair in labels.chunks_exact(2) {
            let x = self.encode(pair[0].clone());
            let y = self.encode(pair[1].clone());
            if self.root(x) != self.root(y) {
                return false;
            }
        }
        true
    }

    /// Joins the sets of two dense indices, returning false if they were
    /// already the same set. Fails with [`Error::LabelNotFound`] if either
    /// index was never assigned.
    pub fn union_indices(&mut self, x: usize, y: usize) -> Result<bool> {
        if x >= self.parents.len() || y >= self.parents.len() {
            return Err(Error::LabelNotFound);
        }
        Ok(self.link(x, y))
    }

    fn link(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.root(x);
        let root_y = self.root(y);
        if root_x == root_y {
            return false;
        }

        match self.ranks[root_x].cmp(&self.ranks[root_y]) {
            std::cmp::Ordering::Greater => self.parents[root_y] = root_x,
            std::cmp::Ordering::Less => self.parents[root_x] = root_y,
            std::cmp::Ordering::Equal => {
                self.parents[root_y] = root_x;
                self.ranks[root_x] += 1;
            }
        }
        self.sets -= 1;
        true
    }

    /// Number of disjoint sets
    pub fn count(&self) -> usize {
        self.sets
    }

    /// Number of encoded labels
    pub fn len(&self) -> usize {
        self.decoding.len()
    }

    /// Returns true if no label has been encoded
    pub fn is_empty(&self) -> bool {
        self.decoding.is_empty()
    }

    fn root(&mut self, idx: usize) -> usize {
        let mut root = idx;
        while self.parents[root] != root {
            root = self.parents[root];
        }

        // Second pass: point the whole chain straight at the root
        let mut current = idx;
        while self.parents[current] != root {
            let next = self.parents[current];
            self.parents[current] = root;
            current = next;
        }
        root
    }
}

impl<T> Default for UnionFind<T>
where
    T: Hash + Eq + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
