use std::ops::ControlFlow;

use crate::graph::Graph;
use crate::{Error, Result};

/// Step reported by [`depth_first_walk`]
#[derive(Debug, Clone, Copy)]
pub(crate) enum DfsEvent<E> {
    /// First visit of a vertex (preorder position)
    Discover(usize),
    /// Edge leading to an unmarked vertex, reported before that vertex is discovered
    TreeEdge { from: usize, edge: E, to: usize },
    /// Edge leading to an already marked vertex
    NonTreeEdge { from: usize, edge: E, to: usize },
    /// All edges of a vertex have been explored (postorder position)
    Finish(usize),
}

/// Depth-first walk from `root` driven by an explicit stack of
/// `(vertex, next adjacency position)` frames, so the depth of the search is
/// bounded by heap memory rather than the call stack.
///
/// `root` is marked and discovered unconditionally; every other vertex is
/// entered only if unmarked. The walk stops early when `visit` breaks.
pub(crate) fn depth_first_walk<G, F>(
    graph: &G,
    root: usize,
    marked: &mut [bool],
    mut visit: F,
) -> ControlFlow<()>
where
    G: Graph,
    F: FnMut(DfsEvent<G::Edge>) -> ControlFlow<()>,
{
    marked[root] = true;
    visit(DfsEvent::Discover(root))?;

    let mut stack = vec![(root, 0usize)];
    while let Some(frame) = stack.last_mut() {
        let (v, position) = *frame;
        let adj = graph.adj(v);
        if position == adj.len() {
            stack.pop();
            visit(DfsEvent::Finish(v))?;
            continue;
        }
        frame.1 += 1;

        let edge = adj[position];
        let w = graph.head(&edge, v);
        if marked[w] {
            visit(DfsEvent::NonTreeEdge { from: v, edge, to: w })?;
        } else {
            visit(DfsEvent::TreeEdge { from: v, edge, to: w })?;
            marked[w] = true;
            visit(DfsEvent::Discover(w))?;
            stack.push((w, 0));
        }
    }
    ControlFlow::Continue(())
}

pub(crate) fn validate_source<G: Graph>(graph: &G, source: usize) -> Result<()> {
    if graph.has_vertex(source) {
        Ok(())
    } else {
        Err(Error::InvalidVertex(source))
    }
}

/// Vertices reachable from one or more sources
#[derive(Debug, Clone)]
pub struct DepthFirstSearch {
    marked: Vec<bool>,
    count: usize,
}

impl DepthFirstSearch {
    /// Marks every vertex reachable from `source`
    pub fn new<G: Graph>(graph: &G, source: usize) -> Result<Self> {
        Self::from_sources(graph, &[source])
    }

    /// Marks every vertex reachable from any of `sources`. All sources are
    /// marked before the search starts.
    pub fn from_sources<G: Graph>(graph: &G, sources: &[usize]) -> Result<Self> {
        if sources.is_empty() {
            return Err(Error::NoSources);
        }
        for &s in sources {
            validate_source(graph, s)?;
        }

        let mut marked = vec![false; graph.vertex_count()];
        for &s in sources {
            marked[s] = true;
        }
        for &s in sources {
            let _ = depth_first_walk(graph, s, &mut marked, |_| ControlFlow::Continue(()));
        }

        let count = marked.iter().filter(|&&m| m).count();
        Ok(DepthFirstSearch { marked, count })
    }

    /// Returns true if `v` is reachable from a source
    pub fn marked(&self, v: usize) -> bool {
        self.marked[v]
    }

    /// Number of reachable vertices, sources included
    pub fn count(&self) -> usize {
        self.count
    }

    /// True when every vertex was reached; from a single source on an
    /// undirected graph this means the graph is connected
    pub fn is_connected(&self) -> bool {
        self.count == self.marked.len()
    }
}

/// Depth-first paths from a single source
#[derive(Debug, Clone)]
pub struct DepthFirstPaths {
    marked: Vec<bool>,
    /// Previous vertex on the DFS tree path to each reached vertex
    edge_to: Vec<Option<usize>>,
    source: usize,
}

impl DepthFirstPaths {
    pub fn new<G: Graph>(graph: &G, source: usize) -> Result<Self> {
        validate_source(graph, source)?;

        let n = graph.vertex_count();
        let mut marked = vec![false; n];
        let mut edge_to = vec![None; n];
        let _ = depth_first_walk(graph, source, &mut marked, |event| {
            if let DfsEvent::TreeEdge { from, to, .. } = event {
                edge_to[to] = Some(from);
            }
            ControlFlow::Continue(())
        });

        Ok(DepthFirstPaths {
            marked,
            edge_to,
            source,
        })
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn has_path_to(&self, v: usize) -> bool {
        self.marked[v]
    }

    /// Path from the source to `v`, both included
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

/// Preorder and postorder numbering of a full depth-first traversal, starting
/// a new tree at every unmarked vertex in index order
#[derive(Debug, Clone)]
pub struct DepthFirstOrder {
    pre: Vec<usize>,
    post: Vec<usize>,
    preorder: Vec<usize>,
    postorder: Vec<usize>,
}

impl DepthFirstOrder {
    pub fn new<G: Graph>(graph: &G) -> Self {
        Self::with_roots(graph, 0..graph.vertex_count())
    }

    /// Same traversal, but trees are started from `roots` in the given order
    pub(crate) fn with_roots<G, I>(graph: &G, roots: I) -> Self
    where
        G: Graph,
        I: IntoIterator<Item = usize>,
    {
        let n = graph.vertex_count();
        let mut marked = vec![false; n];
        let mut pre = vec![0; n];
        let mut post = vec![0; n];
        let mut preorder = Vec::with_capacity(n);
        let mut postorder = Vec::with_capacity(n);

        for root in roots {
            if marked[root] {
                continue;
            }
            let _ = depth_first_walk(graph, root, &mut marked, |event| {
                match event {
                    DfsEvent::Discover(v) => {
                        pre[v] = preorder.len();
                        preorder.push(v);
                    }
                    DfsEvent::Finish(v) => {
                        post[v] = postorder.len();
                        postorder.push(v);
                    }
                    _ => {}
                }
                ControlFlow::Continue(())
            });
        }

        DepthFirstOrder {
            pre,
            post,
            preorder,
            postorder,
        }
    }

    /// Preorder number of `v`
    pub fn pre(&self, v: usize) -> usize {
        self.pre[v]
    }

    /// Postorder number of `v`
    pub fn post(&self, v: usize) -> usize {
        self.post[v]
    }

    pub fn preorder(&self) -> &[usize] {
        &self.preorder
    }

    pub fn postorder(&self) -> &[usize] {
        &self.postorder
    }

    pub fn reverse_postorder(&self) -> Vec<usize> {
        self.postorder.iter().rev().copied().collect()
    }
}
