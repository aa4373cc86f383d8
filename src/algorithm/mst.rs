//! Minimum spanning forests of edge-weighted undirected graphs.
//!
//! Three independent strategies are provided. On a disconnected graph each
//! one spans every component, and all of them produce the same total weight.

use crate::data_structures::{IndexedPriorityQueue, MinPriorityQueue, UnionFind};
use crate::graph::{Edge, EdgeWeightedGraph, Graph, Weight};

/// Result interface shared by the spanning forest algorithms
pub trait SpanningForest<W>
where
    W: Weight,
{
    /// Edges of the forest
    fn edges(&self) -> &[Edge<W>];

    /// Name of the algorithm
    fn name(&self) -> &'static str;

    /// Total weight of the forest
    fn weight(&self) -> W {
        self.edges()
            .iter()
            .fold(W::zero(), |total, e| total + e.weight())
    }
}

/// Kruskal's algorithm: consume edges by ascending weight and keep those
/// joining two different union-find sets
#[derive(Debug, Clone)]
pub struct KruskalMst<W>
where
    W: Weight,
{
    edges: Vec<Edge<W>>,
}

impl<W> KruskalMst<W>
where
    W: Weight,
{
    pub fn new(graph: &EdgeWeightedGraph<W>) -> Self {
        let target = graph.vertex_count().saturating_sub(1);
        let mut queue: MinPriorityQueue<Edge<W>, W> =
            graph.edges().iter().map(|&e| (e, e.weight())).collect();
        let mut sets = UnionFind::from_labels(0..graph.vertex_count());
        let mut edges = Vec::with_capacity(target);

        while edges.len() < target {
            let Some((e, _)) = queue.pop() else {
                break;
            };
            let v = e.either();
            let w = e.opposite(v);
            if sets.connected(&[v, w]) {
                continue;
            }
            sets.union(&[v, w]);
            edges.push(e);
        }

        log::debug!(
            "Kruskal accepted {} edges, {} trees in forest",
            edges.len(),
            sets.count()
        );
        KruskalMst { edges }
    }
}

impl<W> SpanningForest<W> for KruskalMst<W>
where
    W: Weight,
{
    fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    fn name(&self) -> &'static str {
        "Kruskal"
    }
}

/// Lazy Prim: grow one tree at a time from a queue of crossing edges, skipping
/// edges whose endpoints have both joined the tree when they are popped
#[derive(Debug, Clone)]
pub struct LazyPrimMst<W>
where
    W: Weight,
{
    edges: Vec<Edge<W>>,
}

impl<W> LazyPrimMst<W>
where
    W: Weight,
{
    pub fn new(graph: &EdgeWeightedGraph<W>) -> Self {
        let n = graph.vertex_count();
        let mut marked = vec![false; n];
        let mut queue = MinPriorityQueue::new();
        let mut edges = Vec::with_capacity(n.saturating_sub(1));
        let mut stale = 0usize;

        for source in 0..n {
            if marked[source] {
                continue;
            }
            Self::visit(graph, source, &mut marked, &mut queue);
            while let Some((e, _)) = queue.pop() {
                let v = e.either();
                let w = e.opposite(v);
                if marked[v] && marked[w] {
                    stale += 1;
                    continue;
                }
                edges.push(e);
                if !marked[v] {
                    Self::visit(graph, v, &mut marked, &mut queue);
                }
                if !marked[w] {
                    Self::visit(graph, w, &mut marked, &mut queue);
                }
            }
        }

        log::debug!("lazy Prim accepted {} edges, discarded {} stale", edges.len(), stale);
        LazyPrimMst { edges }
    }

    fn visit(
        graph: &EdgeWeightedGraph<W>,
        v: usize,
        marked: &mut [bool],
        queue: &mut MinPriorityQueue<Edge<W>, W>,
    ) {
        marked[v] = true;
        for e in graph.adj(v) {
            if !marked[e.opposite(v)] {
                queue.push(*e, e.weight());
            }
        }
    }
}

impl<W> SpanningForest<W> for LazyPrimMst<W>
where
    W: Weight,
{
    fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    fn name(&self) -> &'static str {
        "lazy Prim"
    }
}

/// Eager Prim: keep only the lightest known connecting edge per non-tree
/// vertex, re-prioritising it in an indexed priority queue when a lighter
/// one appears
#[derive(Debug, Clone)]
pub struct EagerPrimMst<W>
where
    W: Weight,
{
    edges: Vec<Edge<W>>,
}

impl<W> EagerPrimMst<W>
where
    W: Weight,
{
    pub fn new(graph: &EdgeWeightedGraph<W>) -> Self {
        let n = graph.vertex_count();
        let mut marked = vec![false; n];
        let mut dist_to = vec![W::infinity(); n];
        let mut edge_to: Vec<Option<Edge<W>>> = vec![None; n];
        let mut queue = IndexedPriorityQueue::with_capacity(n);

        for source in 0..n {
            if marked[source] {
                continue;
            }
            dist_to[source] = W::zero();
            queue.enqueue(W::zero(), source);
            while let Some(v) = queue.dequeue() {
                marked[v] = true;
                for e in graph.adj(v) {
                    let w = e.opposite(v);
                    if marked[w] {
                        continue;
                    }
                    // an infinite weight still beats having no candidate at all
                    if edge_to[w].is_none() || e.weight() < dist_to[w] {
                        dist_to[w] = e.weight();
                        edge_to[w] = Some(*e);
                        queue.update(e.weight(), w);
                    }
                }
            }
        }

        let edges: Vec<Edge<W>> = edge_to.into_iter().flatten().collect();
        log::debug!("eager Prim accepted {} edges", edges.len());
        EagerPrimMst { edges }
    }
}

impl<W> SpanningForest<W> for EagerPrimMst<W>
where
    W: Weight,
{
    fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    fn name(&self) -> &'static str {
        "eager Prim"
    }
}
