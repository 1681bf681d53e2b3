/*!
# Graph Representations

Three interchangeable storage backends implement the [graph contract](crate::ops):

- [`AdjList`]: one linked list of `(neighbor, weight)` pairs per vertex,
- [`AdjVector`]: one growable array of `(neighbor, weight)` pairs per vertex,
- [`AdjMatrix`]: a dense adjacency matrix (presence bits plus a weight per cell).

All of them are instances of the generic [`Graph`] parameterized by a [`Neighborhood`].
If the backend is only known at runtime (e.g. when chosen on the command line), use
[`DynGraph`] together with a [`Representation`] tag.

[`SubgraphView`] hides a set of vertices of an existing graph without copying it.
*/

use crate::{ops::*, *};

mod dynamic;
mod graph;
mod neighborhood;
mod subgraph;

pub use dynamic::*;
pub use graph::*;
pub use neighborhood::*;
pub use subgraph::*;
