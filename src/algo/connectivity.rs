use super::*;

/// Connectivity of the underlying undirected graph (arc directions are ignored)
pub trait Connectivity: WeightedAdjacencyList {
    /// Returns a [`UnionFind`] whose sets are the connected components
    fn component_union_find(&self) -> UnionFind {
        let mut components = UnionFind::new(self.number_of_nodes());
        for WeightedEdge(u, v, _) in self.arcs() {
            components.union(u, v);
        }
        components
    }

    /// Returns the number of connected components, isolated nodes included
    fn number_of_connected_components(&self) -> NumNodes {
        self.component_union_find().number_of_sets()
    }

    /// Returns *true* if the graph has at most one connected component
    fn is_connected(&self) -> bool {
        self.number_of_connected_components() <= 1
    }

    /// Returns the sizes of all connected components in descending order
    fn component_sizes(&self) -> Vec<NumNodes> {
        let mut components = self.component_union_find();
        let mut sizes: Vec<NumNodes> = vec![0; self.len() + 1];
        for u in self.vertices() {
            sizes[components.find(u) as usize] += 1;
        }

        sizes.retain(|&s| s > 0);
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes
    }
}

impl<G> Connectivity for G where G: WeightedAdjacencyList {}
