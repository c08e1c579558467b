/*!
# Graph Generators

Random weighted graphs for tests and benchmarks. Generators are configured with the
builder pattern and produce either a complete edge list or a lazy stream of edges:

1. Create a generator instance (e.g., `WeightedGnm::new()`).
2. Set parameters using trait methods (e.g., `.nodes(n).weights(1..=100)`).
3. Generate edges via `generate()` or `stream()`.

The [`RandomWeightedGraph`] trait wraps the generators into graph constructors.
All generated edges are undirected and use node ids `1..=n`.

```
use wgraphs::{gens::*, prelude::*};

let mut rng = rand::rng();
let graph = Graph::connected_gnm(&mut rng, 100, 50, 1..=1000);

assert_eq!(graph.number_of_nodes(), 100);
assert_eq!(graph.number_of_arcs(), 2 * (99 + 50));
```
*/

use std::ops::RangeInclusive;

use rand::Rng;
use rand_distr::Uniform;

use crate::prelude::*;

mod gnm;
mod tree;

pub use gnm::*;
pub use tree::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen: Sized {
    /// Sets the number of nodes in the graph generator.
    fn set_nodes(&mut self, n: NumNodes);

    /// Sets the number of nodes in the graph generator.
    fn nodes(mut self, n: NumNodes) -> Self {
        self.set_nodes(n);
        self
    }
}

/// Trait for generators that allow setting the range edge weights are drawn from.
pub trait WeightsGen: Sized {
    /// Sets the (inclusive) range of edge weights.
    fn set_weights(&mut self, weights: RangeInclusive<Weight>);

    /// Sets the (inclusive) range of edge weights.
    fn weights(mut self, weights: RangeInclusive<Weight>) -> Self {
        self.set_weights(weights);
        self
    }
}

/// General trait for a configurable random edge generator.
pub trait GraphGenerator {
    /// Generates a list of random edges.
    fn generate<R>(&self, rng: &mut R) -> Vec<WeightedEdge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = WeightedEdge>
    where
        R: Rng;
}

/// Uniform distribution over a weight range.
///
/// # Panics
/// Panics if the range is empty.
fn weight_distribution(weights: &RangeInclusive<Weight>) -> Uniform<Weight> {
    assert!(!weights.is_empty(), "Weight range must not be empty!");
    Uniform::new_inclusive(*weights.start(), *weights.end())
        .expect("non-empty weight range yields a valid distribution")
}

/// Trait for building full graph instances from the random models of this module.
pub trait RandomWeightedGraph: Sized {
    /// Creates a random spanning tree on `n` nodes.
    fn random_tree<R>(rng: &mut R, n: NumNodes, weights: RangeInclusive<Weight>) -> Self
    where
        R: Rng;

    /// Creates a random `G(n,m)` graph: `m` distinct non-loop edges chosen uniformly.
    /// `m` is capped at `n(n-1)/2`.
    fn gnm<R>(rng: &mut R, n: NumNodes, m: NumArcs, weights: RangeInclusive<Weight>) -> Self
    where
        R: Rng;

    /// Creates a connected graph: a random spanning tree plus `extra` random `G(n,m)` edges.
    /// The result may contain parallel edges.
    fn connected_gnm<R>(
        rng: &mut R,
        n: NumNodes,
        extra: NumArcs,
        weights: RangeInclusive<Weight>,
    ) -> Self
    where
        R: Rng;
}

impl<G> RandomWeightedGraph for G
where
    G: GraphFromScratch,
{
    fn random_tree<R>(rng: &mut R, n: NumNodes, weights: RangeInclusive<Weight>) -> Self
    where
        R: Rng,
    {
        Self::from_undirected_edges(
            n,
            RandomSpanningTree::new()
                .nodes(n)
                .weights(weights)
                .stream(rng),
        )
    }

    fn gnm<R>(rng: &mut R, n: NumNodes, m: NumArcs, weights: RangeInclusive<Weight>) -> Self
    where
        R: Rng,
    {
        Self::from_undirected_edges(
            n,
            WeightedGnm::new()
                .nodes(n)
                .edges(m)
                .weights(weights)
                .stream(rng),
        )
    }

    fn connected_gnm<R>(
        rng: &mut R,
        n: NumNodes,
        extra: NumArcs,
        weights: RangeInclusive<Weight>,
    ) -> Self
    where
        R: Rng,
    {
        let mut graph: Self = Self::random_tree(rng, n, weights.clone());
        graph.add_undirected_edges(
            WeightedGnm::new()
                .nodes(n)
                .edges(extra)
                .weights(weights)
                .generate(rng),
        );
        graph
    }
}
