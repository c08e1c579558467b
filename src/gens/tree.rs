/*!
# Random Spanning Trees

Generates a random spanning tree on the nodes `1..=n` with uniformly random weights.
It contains exactly `n - 1` edges and is therefore connected. The edges are oriented
away from a designated root (default `1`).

The generator grows the tree with random paths: starting at a random node outside the
tree, it appends random nodes that are not yet on the path until it hits the tree. The
whole path is then attached.

```
use wgraphs::gens::*;

let mut rng = rand::rng();
let edges = RandomSpanningTree::new().nodes(5).weights(1..=9).generate(&mut rng);

assert_eq!(edges.len(), 4);
```
*/

use rand_distr::Distribution;

use super::*;

/// Generator for a random spanning tree with random weights.
#[derive(Debug, Clone)]
pub struct RandomSpanningTree {
    n: NumNodes,
    root: Node,
    weights: RangeInclusive<Weight>,
}

impl Default for RandomSpanningTree {
    fn default() -> Self {
        Self {
            n: 0,
            root: 1,
            weights: 1..=1,
        }
    }
}

impl RandomSpanningTree {
    /// Creates a new generator with `n = 0`, root `1` and unit weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root node of the tree.
    ///
    /// # Panics
    /// Panics if `root` is not in `1..=n` when used in generation (for `n > 0`).
    pub fn root(mut self, root: Node) -> Self {
        self.root = root;
        self
    }
}

impl NumNodesGen for RandomSpanningTree {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl WeightsGen for RandomSpanningTree {
    fn set_weights(&mut self, weights: RangeInclusive<Weight>) {
        self.weights = weights;
    }
}

impl GraphGenerator for RandomSpanningTree {
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = WeightedEdge>
    where
        R: Rng,
    {
        RandomTreeEdges::new(self.n, self.root, weight_distribution(&self.weights), rng)
    }
}

/// Streaming generator behind [`RandomSpanningTree`].
///
/// Yields exactly `n - 1` edges `WeightedEdge(parent, child, weight)`.
pub struct RandomTreeEdges<'a, R>
where
    R: Rng,
{
    rng: &'a mut R,
    node_gen: Uniform<Node>,
    weight_gen: Uniform<Weight>,
    connected: Vec<bool>,
    num_connected: NumNodes,
    on_path: Vec<bool>,
    path: Vec<Node>,
    path_skip: usize,
}

impl<'a, R> RandomTreeEdges<'a, R>
where
    R: Rng,
{
    /// Creates a new tree stream on `n` nodes rooted at `root`.
    ///
    /// # Panics
    /// Panics if `n > 0` and `root` is not in `1..=n`.
    pub fn new(n: NumNodes, root: Node, weight_gen: Uniform<Weight>, rng: &'a mut R) -> Self {
        let mut connected = vec![false; n as usize + 1];
        let mut num_connected = 0;
        if n > 0 {
            assert!(node_range(n).contains(&root), "Root must be a node of the tree!");
            connected[root as usize] = true;
            num_connected = 1;
        }

        Self {
            rng,
            node_gen: Uniform::new_inclusive(1, n.max(1))
                .expect("node range is never empty"),
            weight_gen,
            connected,
            num_connected,
            on_path: vec![false; n as usize + 1],
            path: Vec::new(),
            path_skip: usize::MAX - 1,
        }
    }

    fn all_connected(&self) -> bool {
        self.num_connected as usize + 1 >= self.connected.len()
    }

    fn attach(&mut self, parent: Node, child: Node) -> WeightedEdge {
        WeightedEdge(parent, child, self.weight_gen.sample(self.rng))
    }
}

impl<'a, R> Iterator for RandomTreeEdges<'a, R>
where
    R: Rng,
{
    type Item = WeightedEdge;

    fn next(&mut self) -> Option<Self::Item> {
        // continue attaching the current path from the tree outwards
        if self.path_skip + 1 < self.path.len() {
            self.path_skip += 1;
            let (parent, child) = (self.path[self.path_skip - 1], self.path[self.path_skip]);
            return Some(self.attach(parent, child));
        }

        if self.all_connected() {
            return None;
        }

        self.path_skip = usize::MAX - 1;
        for &u in &self.path {
            self.on_path[u as usize] = false;
        }
        self.path.clear();

        loop {
            let u = self.node_gen.sample(self.rng);

            if self.path.is_empty() && self.connected[u as usize] {
                continue;
            }

            if self.on_path[u as usize] {
                continue;
            }

            self.on_path[u as usize] = true;
            self.path.push(u);

            if self.connected[u as usize] {
                // the path is reversed: path[last] is in the tree, path[0] is the leaf
                self.path.reverse();
                self.path_skip = 1;
                let (parent, child) = (self.path[0], self.path[1]);
                return Some(self.attach(parent, child));
            }

            self.connected[u as usize] = true;
            self.num_connected += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::algo::Connectivity;

    #[test]
    fn trees_are_spanning() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [1 as NumNodes, 2, 5, 50, 300] {
            for _ in 0..5 {
                let edges = RandomSpanningTree::new()
                    .nodes(n)
                    .weights(3..=7)
                    .generate(rng);

                assert_eq!(edges.len(), (n - 1) as usize);
                assert!(edges.iter().all(|e| (3..=7).contains(&e.weight())));
                assert!(edges.iter().all(|e| !e.is_loop()));

                let graph = Graph::from_undirected_edges(n, edges);
                assert!(graph.is_connected());
            }
        }
    }

    #[test]
    fn edges_point_away_from_root() {
        let rng = &mut Pcg64Mcg::seed_from_u64(9);
        let n = 40;

        let edges = RandomSpanningTree::new().nodes(n).root(17).generate(rng);

        let mut reached = vec![false; n as usize + 1];
        reached[17] = true;
        for WeightedEdge(parent, child, _) in edges {
            assert!(reached[parent as usize]);
            assert!(!reached[child as usize]);
            reached[child as usize] = true;
        }
    }

    #[test]
    fn empty_tree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        assert!(RandomSpanningTree::new().nodes(0).generate(rng).is_empty());
    }
}
