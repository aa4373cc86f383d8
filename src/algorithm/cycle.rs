use std::ops::ControlFlow;

use crate::algorithm::dfs::{depth_first_walk, DfsEvent};
use crate::graph::Graph;

/// Cycle detection in an undirected graph.
///
/// The edge back to a vertex's DFS parent is skipped once, so parallel edges
/// and self-loops both count as cycles.
#[derive(Debug, Clone)]
pub struct Cycle {
    cycle: Option<Vec<usize>>,
}

impl Cycle {
    pub fn new<G: Graph>(graph: &G) -> Self {
        let n = graph.vertex_count();
        let mut marked = vec![false; n];
        let mut parent: Vec<Option<usize>> = vec![None; n];
        let mut parent_edge_skipped = vec![false; n];
        let mut cycle = None;

        for root in 0..n {
            if marked[root] {
                continue;
            }
            let flow = depth_first_walk(graph, root, &mut marked, |event| match event {
                DfsEvent::TreeEdge { from, to, .. } => {
                    parent[to] = Some(from);
                    ControlFlow::Continue(())
                }
                DfsEvent::NonTreeEdge { from, to, .. } => {
                    if parent[from] == Some(to) && !parent_edge_skipped[from] {
                        parent_edge_skipped[from] = true;
                        return ControlFlow::Continue(());
                    }
                    // `to` is an ancestor of `from` still on the DFS path
                    let mut path = vec![from];
                    let mut x = from;
                    while x != to {
                        match parent[x] {
                            Some(p) => x = p,
                            None => break,
                        }
                        path.push(x);
                    }
                    path.push(from);
                    cycle = Some(path);
                    ControlFlow::Break(())
                }
                _ => ControlFlow::Continue(()),
            });
            if flow.is_break() {
                break;
            }
        }

        Cycle { cycle }
    }

    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// Vertices of the cycle found, first and last equal
    pub fn cycle(&self) -> Option<&[usize]> {
        self.cycle.as_deref()
    }
}

/// Directed cycle detection, usable on any directed representation.
///
/// A depth-first search tracks which vertices are on the current path; an edge
/// into one of them closes a cycle, which is rebuilt from the tree edges. The
/// search stops at the first cycle found.
#[derive(Debug, Clone)]
pub struct DirectedCycle<E> {
    /// Vertices of the cycle in path order, first and last equal
    cycle: Option<Vec<usize>>,
    /// Edges of the cycle in path order
    cycle_edges: Option<Vec<E>>,
}

impl<E> DirectedCycle<E>
where
    E: Copy + std::fmt::Debug,
{
    pub fn new<G>(graph: &G) -> Self
    where
        G: Graph<Edge = E>,
    {
        let n = graph.vertex_count();
        let mut marked = vec![false; n];
        let mut on_stack = vec![false; n];
        let mut edge_to: Vec<Option<(usize, E)>> = vec![None; n];
        let mut found: Option<(Vec<usize>, Vec<E>)> = None;

        for root in 0..n {
            if marked[root] {
                continue;
            }
            let flow = depth_first_walk(graph, root, &mut marked, |event| {
                match event {
                    DfsEvent::Discover(v) => on_stack[v] = true,
                    DfsEvent::Finish(v) => on_stack[v] = false,
                    DfsEvent::TreeEdge { from, edge, to } => edge_to[to] = Some((from, edge)),
                    DfsEvent::NonTreeEdge { from, edge, to } if on_stack[to] => {
                        found = Some(trace_back(&edge_to, from, edge, to));
                        return ControlFlow::Break(());
                    }
                    DfsEvent::NonTreeEdge { .. } => {}
                }
                ControlFlow::Continue(())
            });
            if flow.is_break() {
                break;
            }
        }

        let (cycle, cycle_edges) = match found {
            Some((vertices, edges)) => {
                log::debug!("directed cycle of length {} found", edges.len());
                (Some(vertices), Some(edges))
            }
            None => (None, None),
        };
        DirectedCycle { cycle, cycle_edges }
    }

    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// Vertices of the cycle in path order, first and last equal
    pub fn cycle(&self) -> Option<&[usize]> {
        self.cycle.as_deref()
    }

    /// Edges of the cycle in path order
    pub fn cycle_edges(&self) -> Option<&[E]> {
        self.cycle_edges.as_deref()
    }
}

/// Walks tree edges back from `from` to `to`, then closes the loop with the
/// back edge `from -> to`
fn trace_back<E: Copy>(
    edge_to: &[Option<(usize, E)>],
    from: usize,
    back_edge: E,
    to: usize,
) -> (Vec<usize>, Vec<E>) {
    let mut vertices = vec![from];
    let mut edges = Vec::new();
    let mut x = from;
    while x != to {
        match edge_to[x] {
            Some((prev, edge)) => {
                edges.push(edge);
                vertices.push(prev);
                x = prev;
            }
            None => break,
        }
    }
    vertices.reverse();
    edges.reverse();
    vertices.push(to);
    edges.push(back_edge);
    (vertices, edges)
}
