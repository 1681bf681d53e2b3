/*!
`wgraphs` is a small library for **w**eighted graphs: interchangeable storage backends behind
one graph contract together with the classic traversal and optimization algorithms.

# Representation

We represent **vertices** as `u32`. Vertex identifiers are positive and double as storage
indices, the index `0` is reserved and never exists. **Weights** are `f64`.
For **edges**, we use the tuple-structs `Edge(Node, Node)` and `WeightedEdge(Node, Node, Weight)`.

A vertex exists once it was added explicitly or as the endpoint of an edge. Querying an unknown
vertex is never an error: it has no neighbors, degree `0` and no weights.
Invalid input (vertex `0`, non-finite weights, self-loops) and duplicate edges are rejected
silently by returning `false`.

### Directed vs Undirected

- In an **undirected** graph, adding `(u, v)` makes `v` a neighbor of `u` and vice versa,
  both with the same weight. The edge is counted once.
- In a **directed** graph, only `u -> v` is stored.

### Available Representations

See the [`repr`] module:

- [`AdjList`](crate::repr::AdjList): per-vertex linked lists
- [`AdjVector`](crate::repr::AdjVector): per-vertex growable arrays
- [`AdjMatrix`](crate::repr::AdjMatrix): a dense adjacency matrix
- [`DynGraph`](crate::repr::DynGraph): one of the above, selected at runtime

# Usage

- [`prelude`] includes definitions for vertices, edges, the graph contract and all representations,
- [`algo`] includes algorithm traits that are implemented on graphs directly, such as
  `graph.bfs(1)`, `graph.dijkstra(1)?` or `graph.find_clusters()`,
- [`gens`] includes a random `G(n,p)` generator and deterministic substructures,
- [`io`] reads and writes the edge-list format.

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices.

```rust
use wgraphs::{prelude::*, algo::*};

let graph = AdjVector::from_edges(false, [(1, 2, 3.0), (1, 5, 2.0), (2, 3, 1.0), (2, 4, 6.0), (3, 4, 2.0)]);

let tree = graph.dijkstra(1).unwrap();
let path = tree.path_to(4).unwrap();
assert_eq!(path.vertices, vec![1, 2, 3, 4]);
assert_eq!(path.distance, 6.0);

assert_eq!(graph.prim(Some(1)).unwrap().weight(), 8.0);
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod logging;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;

pub use edge::*;
pub use node::*;

/// `wgraphs::prelude` includes definitions for vertices and edges, all graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
