/*!
# Graph Algorithms

This module provides the **weighted graph algorithms** built on top of the graph traits in [`crate::ops`].
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use wgraphs::algo::*;
```
and gain access to shortest paths, spanning trees/forests, union-find and connectivity.

Every algorithm is available both as a configurable struct (e.g. [`Dijkstra`], [`Kruskal`], [`Prim`])
and as a trait implemented on every graph (`graph.dijkstra(source)`, `graph.kruskal_cost()`, ...).
Algorithms only ever read the graph; several of them may run on the same graph independently.
*/

mod connectivity;
mod dijkstra;
mod mst;
mod union_find;

use crate::{error::*, ops::*, *};

pub use connectivity::*;
pub use dijkstra::*;
pub use mst::*;
pub use union_find::*;
