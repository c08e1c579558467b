use std::fmt::{Debug, Display};

use crate::Node;

/// Edge weights are non-negative integers as in the DIMACS challenge files
pub type Weight = u32;

/// Accumulated weights (path lengths, spanning tree costs)
pub type Cost = u64;

/// We limit the number of arcs to `2^32 - 1`.
/// CHANGE it to `u64` if this does not suffice (the full USA road graph needs ~`2^27`).
pub type NumArcs = u32;

/// An entry in an adjacency list: the target of an arc together with its weight.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeightedArc(pub Node, pub Weight);

impl WeightedArc {
    /// Endpoint the arc points to
    pub fn target(&self) -> Node {
        self.0
    }

    /// Weight of the arc
    pub fn weight(&self) -> Weight {
        self.1
    }
}

impl Display for WeightedArc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "->{}[{}]", self.0, self.1)
    }
}

impl Debug for WeightedArc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

/// An edge is defined by two nodes/endpoints and a weight.
/// It is up to the user whether an edge is directed or not.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeightedEdge(pub Node, pub Node, pub Weight);

impl Display for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})[{}]", self.0, self.1, self.2)
    }
}

impl Debug for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl WeightedEdge {
    /// Weight of the edge
    pub fn weight(&self) -> Weight {
        self.2
    }

    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        WeightedEdge(self.0.min(self.1), self.0.max(self.1), self.2)
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        WeightedEdge(self.1, self.0, self.2)
    }
}

impl From<(Node, Node, Weight)> for WeightedEdge {
    fn from(value: (Node, Node, Weight)) -> Self {
        WeightedEdge(value.0, value.1, value.2)
    }
}

impl From<&(Node, Node, Weight)> for WeightedEdge {
    fn from(value: &(Node, Node, Weight)) -> Self {
        WeightedEdge(value.0, value.1, value.2)
    }
}

impl From<&WeightedEdge> for WeightedEdge {
    fn from(value: &WeightedEdge) -> Self {
        *value
    }
}
