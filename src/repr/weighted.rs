use super::*;

/// A weighted graph stored as one arc list per node.
///
/// Slot `0` of the adjacency array exists but is never populated, so node ids
/// can be used as indices directly. The graph can hold directed arcs and
/// undirected edges (stored as two opposite arcs) at the same time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedAdjArray {
    adjacency: Vec<Vec<WeightedArc>>,
    num_arcs: NumArcs,
    symmetric: bool,
}

/// The graph representation produced by the loaders
pub type Graph = WeightedAdjArray;

impl WeightedAdjArray {
    /// Releases excess capacity of all arc lists.
    /// Useful once construction is complete and the graph becomes read-only.
    pub fn shrink_to_fit(&mut self) {
        self.adjacency.iter_mut().for_each(Vec::shrink_to_fit);
    }

    /// Returns the outgoing arcs of `u` as a slice
    /// ** Panics if `u > n` **
    pub fn arcs_slice(&self, u: Node) -> &[WeightedArc] {
        &self.adjacency[u as usize]
    }

    fn check_endpoints(&self, u: Node, v: Node) -> Result<()> {
        self.check_node(u)?;
        self.check_node(v)
    }

    /// Returns the arc count after inserting `additional` arcs
    fn grown_arc_count(&self, additional: NumArcs) -> Result<NumArcs> {
        self.num_arcs
            .checked_add(additional)
            .ok_or_else(|| GraphError::TooLarge {
                reason: format!("more than {} arcs", NumArcs::MAX),
            })
    }
}

impl GraphNew for WeightedAdjArray {
    fn new(n: NumNodes) -> Self {
        Self {
            adjacency: vec![Vec::new(); n as usize + 1],
            num_arcs: 0,
            symmetric: true,
        }
    }

    fn try_new(n: NumNodes) -> Result<Self> {
        let slots = n as usize + 1;

        let mut adjacency = Vec::new();
        adjacency
            .try_reserve_exact(slots)
            .map_err(|err| GraphError::TooLarge {
                reason: format!("cannot allocate {n} nodes: {err}"),
            })?;
        adjacency.resize_with(slots, Vec::new);

        Ok(Self {
            adjacency,
            num_arcs: 0,
            symmetric: true,
        })
    }
}

impl GraphNodeOrder for WeightedAdjArray {
    fn number_of_nodes(&self) -> NumNodes {
        (self.adjacency.len() - 1) as NumNodes
    }
}

impl GraphArcOrder for WeightedAdjArray {
    fn number_of_arcs(&self) -> NumArcs {
        self.num_arcs
    }
}

impl WeightedAdjacencyList for WeightedAdjArray {
    fn arcs_of(&self, u: Node) -> impl Iterator<Item = WeightedArc> + '_ {
        self.adjacency[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.adjacency[u as usize].len() as NumNodes
    }

    fn is_symmetric(&self) -> bool {
        self.symmetric
    }
}

impl WeightedEdgeEditing for WeightedAdjArray {
    fn try_add_directed_edge(&mut self, u: Node, v: Node, w: Weight) -> Result<()> {
        self.check_endpoints(u, v)?;
        let num_arcs = self.grown_arc_count(1)?;

        self.adjacency[u as usize].push(WeightedArc(v, w));
        self.num_arcs = num_arcs;
        self.symmetric = false;
        Ok(())
    }

    fn try_add_undirected_edge(&mut self, u: Node, v: Node, w: Weight) -> Result<()> {
        self.check_endpoints(u, v)?;
        let num_arcs = self.grown_arc_count(2)?;

        self.adjacency[u as usize].push(WeightedArc(v, w));
        self.adjacency[v as usize].push(WeightedArc(u, w));
        self.num_arcs = num_arcs;
        Ok(())
    }
}
