use crate::{Error, Result};

/// Adjacency-list storage shared by every graph representation.
///
/// The vertex count is fixed at construction. The edge counter is maintained
/// by the owning graph, since an undirected insertion touches two lists but
/// counts as one edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjacency<T> {
    lists: Vec<Vec<T>>,
    edge_count: usize,
}

impl<T> Adjacency<T> {
    /// Creates `vertices` empty adjacency lists
    pub fn new(vertices: usize) -> Self {
        Adjacency {
            lists: (0..vertices).map(|_| Vec::new()).collect(),
            edge_count: 0,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.lists.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Fails with [`Error::InvalidVertex`] if `vertex` is out of range
    pub fn validate(&self, vertex: usize) -> Result<()> {
        if vertex < self.lists.len() {
            Ok(())
        } else {
            Err(Error::InvalidVertex(vertex))
        }
    }

    /// Appends `entry` to the list of an already validated vertex
    pub fn push(&mut self, vertex: usize, entry: T) {
        self.lists[vertex].push(entry);
    }

    /// Records one edge insertion
    pub fn count_edge(&mut self) {
        self.edge_count += 1;
    }

    /// Panics with the [`Error::InvalidVertex`] message if `vertex` is out of
    /// range
    pub fn assert_vertex(&self, vertex: usize) {
        if vertex >= self.lists.len() {
            panic!("{}", Error::InvalidVertex(vertex));
        }
    }

    /// # Panics
    ///
    /// Panics if `vertex` is out of range.
    pub fn get(&self, vertex: usize) -> &[T] {
        self.assert_vertex(vertex);
        &self.lists[vertex]
    }
}
