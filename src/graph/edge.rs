use std::fmt::{self, Display};

use crate::graph::Weight;
use crate::{Error, Result};

/// Immutable weighted undirected edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge<W> {
    v: usize,
    w: usize,
    weight: W,
}

impl<W> Edge<W>
where
    W: Weight,
{
    pub fn new(v: usize, w: usize, weight: W) -> Self {
        Edge { v, w, weight }
    }

    /// Either endpoint; pair with [`Edge::other`] to get both
    pub fn either(&self) -> usize {
        self.v
    }

    /// Returns the endpoint opposite to `vertex`
    pub fn other(&self, vertex: usize) -> Result<usize> {
        if vertex == self.v {
            Ok(self.w)
        } else if vertex == self.w {
            Ok(self.v)
        } else {
            Err(Error::InvalidEndpoint { vertex })
        }
    }

    pub fn weight(&self) -> W {
        self.weight
    }

    /// Opposite endpoint for a vertex known to be incident
    pub(crate) fn opposite(&self, vertex: usize) -> usize {
        if vertex == self.v {
            self.w
        } else {
            self.v
        }
    }
}

impl<W> Display for Edge<W>
where
    W: Weight + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} {:.5}", self.v, self.w, self.weight)
    }
}

/// Immutable weighted directed edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DirectedEdge<W> {
    from: usize,
    to: usize,
    weight: W,
}

impl<W> DirectedEdge<W>
where
    W: Weight,
{
    pub fn new(from: usize, to: usize, weight: W) -> Self {
        DirectedEdge { from, to, weight }
    }

    /// Origin of the edge
    pub fn from(&self) -> usize {
        self.from
    }

    /// Target of the edge
    pub fn to(&self) -> usize {
        self.to
    }

    pub fn weight(&self) -> W {
        self.weight
    }
}

impl<W> Display for DirectedEdge<W>
where
    W: Weight + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{} {:.5}", self.from, self.to, self.weight)
    }
}

/// Capacitated edge of a flow network.
///
/// Traversing from `from` to `to` is the forward direction, whose residual
/// capacity is `capacity - flow`; traversing back from `to` to `from` can undo
/// at most `flow`. Flow always stays within `0..=capacity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowEdge<W> {
    from: usize,
    to: usize,
    capacity: W,
    flow: W,
}

impl<W> FlowEdge<W>
where
    W: Weight,
{
    /// Creates an edge carrying no flow. The capacity must be finite and
    /// nonnegative.
    pub fn new(from: usize, to: usize, capacity: W) -> Result<Self> {
        if !capacity.is_finite() {
            return Err(Error::NonFiniteCapacity { from, to });
        }
        if capacity < W::zero() {
            return Err(Error::NegativeCapacity { from, to });
        }
        Ok(FlowEdge {
            from,
            to,
            capacity,
            flow: W::zero(),
        })
    }

    pub fn from(&self) -> usize {
        self.from
    }

    pub fn to(&self) -> usize {
        self.to
    }

    pub fn capacity(&self) -> W {
        self.capacity
    }

    pub fn flow(&self) -> W {
        self.flow
    }

    /// Returns the endpoint opposite to `vertex`
    pub fn other(&self, vertex: usize) -> Result<usize> {
        if vertex == self.from {
            Ok(self.to)
        } else if vertex == self.to {
            Ok(self.from)
        } else {
            Err(Error::InvalidEndpoint { vertex })
        }
    }

    /// Residual capacity when traversing the edge towards `vertex`
    pub fn residual_capacity_to(&self, vertex: usize) -> Result<W> {
        if vertex == self.to {
            Ok(self.capacity - self.flow)
        } else if vertex == self.from {
            Ok(self.flow)
        } else {
            Err(Error::InvalidEndpoint { vertex })
        }
    }

    /// Pushes `delta` units of flow towards `vertex`: forward adds flow,
    /// backward cancels it. `delta` must lie within
    /// `0..=residual_capacity_to(vertex)`.
    pub fn add_residual_flow_to(&mut self, vertex: usize, delta: W) -> Result<()> {
        let residual = self.residual_capacity_to(vertex)?;
        if delta < W::zero() || delta > residual {
            return Err(Error::ResidualCapacityExceeded { vertex });
        }

        // Using the whole residual lands exactly on a bound
        let saturated = delta == residual;
        if vertex == self.to {
            self.flow = if saturated { self.capacity } else { self.flow + delta };
        } else {
            self.flow = if saturated { W::zero() } else { self.flow - delta };
        }
        Ok(())
    }
}

impl<W> Display for FlowEdge<W>
where
    W: Weight + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{} {}/{}", self.from, self.to, self.flow, self.capacity)
    }
}
