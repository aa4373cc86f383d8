use std::collections::VecDeque;

use crate::algorithm::dfs::validate_source;
use crate::graph::Graph;
use crate::{Error, Result};

/// Shortest unweighted paths from one or more sources.
///
/// All sources start at distance 0 in the same frontier, so `dist_to(v)` is
/// the edge count from the nearest source.
#[derive(Debug, Clone)]
pub struct BreadthFirstPaths {
    marked: Vec<bool>,
    /// Previous vertex on a shortest path to each reached vertex
    edge_to: Vec<Option<usize>>,
    dist_to: Vec<Option<usize>>,
}

impl BreadthFirstPaths {
    pub fn new<G: Graph>(graph: &G, source: usize) -> Result<Self> {
        Self::from_sources(graph, &[source])
    }

    pub fn from_sources<G: Graph>(graph: &G, sources: &[usize]) -> Result<Self> {
        if sources.is_empty() {
            return Err(Error::NoSources);
        }
        for &s in sources {
            validate_source(graph, s)?;
        }

        let n = graph.vertex_count();
        let mut marked = vec![false; n];
        let mut edge_to = vec![None; n];
        let mut dist_to = vec![None; n];
        let mut queue = VecDeque::with_capacity(n);

        for &s in sources {
            if !marked[s] {
                marked[s] = true;
                dist_to[s] = Some(0);
                queue.push_back(s);
            }
        }

        while let Some(v) = queue.pop_front() {
            let next = dist_to[v].map_or(0, |d| d + 1);
            for w in graph.neighbors(v) {
                if !marked[w] {
                    marked[w] = true;
                    edge_to[w] = Some(v);
                    dist_to[w] = Some(next);
                    queue.push_back(w);
                }
            }
        }

        log::trace!(
            "BFS from {} source(s) reached {} of {} vertices",
            sources.len(),
            marked.iter().filter(|&&m| m).count(),
            n
        );

        Ok(BreadthFirstPaths {
            marked,
            edge_to,
            dist_to,
        })
    }

    pub fn marked(&self, v: usize) -> bool {
        self.marked[v]
    }

    pub fn has_path_to(&self, v: usize) -> bool {
        self.marked[v]
    }

    /// Number of edges on a shortest path from the nearest source
    pub fn dist_to(&self, v: usize) -> Option<usize> {
        self.dist_to[v]
    }

    /// Shortest path ending at `v`, starting at its nearest source
    pub fn path_to(&self, v: usize) -> Option<Vec<usize>> {
        if !self.has_path_to(v) {
            return None;
        }
        let mut path = vec![v];
        let mut x = v;
        while let Some(prev) = self.edge_to[x] {
            path.push(prev);
            x = prev;
        }
        path.reverse();
        Some(path)
    }
}
