use std::collections::VecDeque;

use crate::graph::{FlowEdge, FlowNetwork, Weight};
use crate::{Error, Result};

/// Maximum flow / minimum cut by Ford–Fulkerson with shortest augmenting
/// paths.
///
/// The network passed in is left untouched: the algorithm works on its own
/// copy of the edges, whose final flows are exposed through
/// [`FordFulkerson::edges`].
#[derive(Debug, Clone)]
pub struct FordFulkerson<W>
where
    W: Weight,
{
    /// Edge copies carrying the computed flow, indexed by edge id
    edges: Vec<FlowEdge<W>>,

    /// Vertices reachable from the source in the final residual network
    marked: Vec<bool>,

    value: W,
    source: usize,
    sink: usize,
}

impl<W> FordFulkerson<W>
where
    W: Weight,
{
    /// Computes a maximum flow from `source` to `sink`
    pub fn new(network: &FlowNetwork<W>, source: usize, sink: usize) -> Result<Self> {
        let n = network.vertex_count();
        if source >= n {
            return Err(Error::InvalidVertex(source));
        }
        if sink >= n {
            return Err(Error::InvalidVertex(sink));
        }
        if source == sink {
            return Err(Error::SameSourceAndSink(source));
        }

        let mut edges = network.edges().to_vec();
        let mut value = W::zero();
        let mut augmentations = 0usize;
        let mut edge_to: Vec<Option<usize>> = vec![None; n];
        let mut marked = vec![false; n];

        while Self::has_augmenting_path(network, &edges, source, sink, &mut edge_to, &mut marked)? {
            // Bottleneck capacity along the path, walked back from the sink
            let mut bottleneck = W::infinity();
            let mut v = sink;
            while v != source {
                let id = edge_to[v].ok_or(Error::InvalidVertex(v))?;
                bottleneck = std::cmp::min(bottleneck, edges[id].residual_capacity_to(v)?);
                v = edges[id].other(v)?;
            }

            let mut v = sink;
            while v != source {
                let id = edge_to[v].ok_or(Error::InvalidVertex(v))?;
                edges[id].add_residual_flow_to(v, bottleneck)?;
                v = edges[id].other(v)?;
            }

            value = value + bottleneck;
            augmentations += 1;
            log::trace!("augmenting path #{} carries {:?}", augmentations, bottleneck);
        }

        log::debug!(
            "max flow {:?} from {} to {} after {} augmenting paths",
            value,
            source,
            sink,
            augmentations
        );

        Ok(FordFulkerson {
            edges,
            marked,
            value,
            source,
            sink,
        })
    }

    /// Breadth-first search over edges with positive residual capacity in the
    /// direction of travel. Leaves the last edge of each discovered path in
    /// `edge_to` and returns whether the sink was reached.
    fn has_augmenting_path(
        network: &FlowNetwork<W>,
        edges: &[FlowEdge<W>],
        source: usize,
        sink: usize,
        edge_to: &mut [Option<usize>],
        marked: &mut [bool],
    ) -> Result<bool> {
        edge_to.fill(None);
        marked.fill(false);

        let mut queue = VecDeque::new();
        queue.push_back(source);
        marked[source] = true;

        while let Some(v) = queue.pop_front() {
            if marked[sink] {
                break;
            }
            for &id in network.adj(v) {
                let w = edges[id].other(v)?;
                if !marked[w] && edges[id].residual_capacity_to(w)? > W::zero() {
                    edge_to[w] = Some(id);
                    marked[w] = true;
                    queue.push_back(w);
                }
            }
        }
        Ok(marked[sink])
    }

    /// Value of the maximum flow
    pub fn value(&self) -> W {
        self.value
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn sink(&self) -> usize {
        self.sink
    }

    /// True if `v` is on the source side of the minimum cut
    pub fn in_cut(&self, v: usize) -> bool {
        self.marked[v]
    }

    /// Edges with their final flow, indexed by the ids the network assigned
    pub fn edges(&self) -> &[FlowEdge<W>] {
        &self.edges
    }

    /// Flow on the edge with the given id
    pub fn flow_on(&self, id: usize) -> Option<W> {
        self.edges.get(id).map(FlowEdge::flow)
    }

    /// Edges crossing from the source side to the sink side of the minimum
    /// cut; their capacities sum to the flow value
    pub fn min_cut(&self) -> Vec<FlowEdge<W>> {
        self.edges
            .iter()
            .filter(|e| self.marked[e.from()] && !self.marked[e.to()])
            .copied()
            .collect()
    }
}
