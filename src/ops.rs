/*!
# Graph Operations

Basic traits every graph representation implements. Algorithms in [`crate::algo`] are
written against these traits only, never against a concrete representation.
*/

use std::ops::RangeInclusive;

use crate::{error::*, *};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns the (1-based) range of node ids `1..=n`
    fn vertices(&self) -> RangeInclusive<Node> {
        node_range(self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no arcs)
    fn is_empty(&self) -> bool {
        self.number_of_nodes() == 0
    }

    /// Returns *true* if `u` is a valid node id, ie. `1 <= u <= n`
    fn contains_node(&self, u: Node) -> bool {
        u != RESERVED_NODE && u <= self.number_of_nodes()
    }

    /// Returns [`GraphError::InvalidVertex`] unless `u` is a valid node id
    fn check_node(&self, u: Node) -> Result<()> {
        if self.contains_node(u) {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                vertex: u,
                n: self.number_of_nodes(),
            })
        }
    }

    /// Returns a vector of `n + 1` unset flags, indexable by node id
    fn vertex_flags_unset(&self) -> Vec<bool> {
        vec![false; self.len() + 1]
    }
}

/// Provides getters pertaining to the arc-size of a graph
pub trait GraphArcOrder {
    /// Returns the number of stored (directed) arcs.
    /// An undirected edge accounts for two arcs.
    fn number_of_arcs(&self) -> NumArcs;

    /// Returns *true* if the graph has no arcs
    fn is_singleton(&self) -> bool {
        self.number_of_arcs() == 0
    }
}

/// Traits pertaining getters for weighted adjacency lists
pub trait WeightedAdjacencyList: GraphNodeOrder + GraphArcOrder + Sized {
    /// Returns an iterator over the outgoing arcs of a given vertex in insertion order.
    /// ** Panics if `u > n` **
    fn arcs_of(&self, u: Node) -> impl Iterator<Item = WeightedArc> + '_;

    /// Returns the number of outgoing arcs of `u`
    /// ** Panics if `u > n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns *true* if every arc was inserted together with its reverse,
    /// ie. the graph was built from undirected edges only.
    fn is_symmetric(&self) -> bool;

    /// Returns an iterator over all arcs as `WeightedEdge(source, target, weight)`
    fn arcs(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.vertices().flat_map(move |u| {
            self.arcs_of(u)
                .map(move |WeightedArc(v, w)| WeightedEdge(u, v, w))
        })
    }

    /// Returns an iterator over all undirected edges of a symmetric graph, each
    /// reported exactly once with `u <= v`.
    ///
    /// Loops are stored as two arcs `u -> u` and reported once per insertion.
    /// The result is unspecified for graphs that are not symmetric.
    fn undirected_edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.vertices().flat_map(move |u| {
            let mut loops = 0usize;
            self.arcs_of(u).filter_map(move |WeightedArc(v, w)| {
                if u == v {
                    loops += 1;
                    (loops % 2 == 1).then_some(WeightedEdge(u, v, w))
                } else {
                    (u < v).then_some(WeightedEdge(u, v, w))
                }
            })
        })
    }

    /// Returns the largest out-degree of any vertex (`0` for empty graphs)
    fn max_degree(&self) -> NumNodes {
        self.vertices().map(|u| self.degree_of(u)).max().unwrap_or(0)
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with `n` nodes `1..=n`
    /// ** Aborts if the memory for `n` nodes cannot be allocated **
    fn new(n: NumNodes) -> Self;

    /// Creates an empty graph with `n` nodes `1..=n`.
    /// Returns [`GraphError::TooLarge`] if the memory for `n` nodes cannot be allocated.
    fn try_new(n: NumNodes) -> Result<Self>
    where
        Self: Sized,
    {
        Ok(Self::new(n))
    }
}

/// Provides functions to insert weighted edges
pub trait WeightedEdgeEditing: GraphNodeOrder {
    /// Inserts the single arc `u -> v` with weight `w`.
    /// Returns [`GraphError::InvalidVertex`] if either endpoint is not in `1..=n`
    /// and [`GraphError::TooLarge`] if the arc count would overflow.
    fn try_add_directed_edge(&mut self, u: Node, v: Node, w: Weight) -> Result<()>;

    /// Inserts the arcs `u -> v` and `v -> u`, both with weight `w`.
    /// Returns [`GraphError::InvalidVertex`] if either endpoint is not in `1..=n`
    /// and [`GraphError::TooLarge`] if the arc count would overflow.
    fn try_add_undirected_edge(&mut self, u: Node, v: Node, w: Weight) -> Result<()>;

    /// Inserts the single arc `u -> v` with weight `w`.
    /// ** Panics if `u` or `v` is not in `1..=n` **
    fn add_directed_edge(&mut self, u: Node, v: Node, w: Weight) {
        if let Err(err) = self.try_add_directed_edge(u, v, w) {
            panic!("cannot add arc ({u},{v}): {err}");
        }
    }

    /// Inserts the arcs `u -> v` and `v -> u`, both with weight `w`.
    /// ** Panics if `u` or `v` is not in `1..=n` **
    fn add_undirected_edge(&mut self, u: Node, v: Node, w: Weight) {
        if let Err(err) = self.try_add_undirected_edge(u, v, w) {
            panic!("cannot add edge ({u},{v}): {err}");
        }
    }

    /// Adds all undirected edges of the iterator.
    /// ** Panics if any endpoint is not in `1..=n` **
    fn add_undirected_edges<I, E>(&mut self, edges: I)
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge>,
    {
        for e in edges {
            let WeightedEdge(u, v, w) = e.into();
            self.add_undirected_edge(u, v, w);
        }
    }

    /// Adds all directed edges of the iterator.
    /// ** Panics if any endpoint is not in `1..=n` **
    fn add_directed_edges<I, E>(&mut self, edges: I)
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge>,
    {
        for e in edges {
            let WeightedEdge(u, v, w) = e.into();
            self.add_directed_edge(u, v, w);
        }
    }
}

/// Trait for creating a graph from a list of weighted edges
pub trait GraphFromScratch: GraphNew + WeightedEdgeEditing + Sized {
    /// Creates a graph with `n` nodes where every edge is inserted in both directions.
    /// ** Panics if any endpoint is not in `1..=n` **
    fn from_undirected_edges<I, E>(n: NumNodes, edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge>,
    {
        let mut graph = Self::new(n);
        graph.add_undirected_edges(edges);
        graph
    }

    /// Creates a graph with `n` nodes where every edge is a single arc.
    /// ** Panics if any endpoint is not in `1..=n` **
    fn from_directed_edges<I, E>(n: NumNodes, edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge>,
    {
        let mut graph = Self::new(n);
        graph.add_directed_edges(edges);
        graph
    }
}

impl<G> GraphFromScratch for G where G: GraphNew + WeightedEdgeEditing {}
