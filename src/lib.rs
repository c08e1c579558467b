/*!
`wgraphs` is a small graph engine for large **w**eighted road networks given in the
[DIMACS shortest-path challenge](http://www.diag.uniroma1.it/challenge9/) `.gr` format
(optionally gzip-compressed). It computes single-source shortest paths and minimum
spanning trees/forests and reports costs, reachability and timings.

# Representation

We represent **nodes** as `u32` in the range `1..=n` where `n` is the number of nodes in the graph.
Node `0` is reserved, mirroring the 1-based ids of the `.gr` files.
Arcs carry non-negative `u32` weights, accumulated costs are `u64`.

An undirected edge is stored as two opposite arcs, so a graph with `m` undirected edges
reports `2m` arcs. The `.gr` loader inserts every arc line as an undirected edge unless
configured otherwise (see [`io::ArcMode`]).

# Usage

```no_run
use wgraphs::{algo::*, prelude::*};

let graph = wgraphs::io::load_graph("USA-road-d.NY.gr.gz")?;

let distances = graph.dijkstra(1)?;
println!("reachable: {}", distances.reachable_count());
println!("total distance: {}", total_distance(&distances));

println!("kruskal: {}", graph.kruskal_cost());
println!("prim: {}", graph.prim_cost(1)?);
# Ok::<(), wgraphs::GraphError>(())
```

The submodules you probably want to interact with:
- [`prelude`] includes nodes, edges, the basic graph traits and the graph representation,
- [`algo`] includes Dijkstra, Kruskal, Prim, union-find and connectivity helpers,
- [`io`] reads and writes `.gr` files,
- [`gens`] generates random weighted graphs,
- [`analysis`] bundles all algorithms into per-file records with timings.

On a disconnected graph, Kruskal computes a spanning *forest* over all components while
Prim only spans the component of its source vertex. The two costs then legitimately
differ; [`analysis::AnalysisRecord`] exposes reachability and the number of components
next to both costs.
*/

pub mod algo;
pub mod analysis;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod logging;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;

pub use edge::*;
pub use error::{GraphError, Result};
pub use node::*;

/// `wgraphs::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, error::GraphError, node::*, ops::*, repr::*};
}
