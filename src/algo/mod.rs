/*!
# Graph Algorithms

This module provides the **graph algorithms** built on top of the [graph contract](crate::ops).
All algorithms are re-exported at the top level of this module and implemented as traits on
the graphs themselves, so you can simply do:
```rust
use wgraphs::{prelude::*, algo::*};

let graph = AdjList::from_edges(false, [(1, 2), (2, 3)]);
assert_eq!(graph.bfs(1).depth_of(3), Some(2));
```

Single-source algorithms (BFS, DFS, Dijkstra, Prim) produce a [`SpanningTree`] and accept an
optional [`Visitor`] that observes the traversal and may stop it early.
*/

mod all_pairs;
mod coloring;
mod connectivity;
mod shortest_path;
mod spanning_tree;
mod steiner;
mod traversal;
mod visitor;

use crate::{error::*, prelude::*, utils::*};

pub use all_pairs::*;
pub use coloring::*;
pub use connectivity::*;
pub use shortest_path::*;
pub use spanning_tree::*;
pub use steiner::*;
pub use traversal::*;
pub use visitor::*;
