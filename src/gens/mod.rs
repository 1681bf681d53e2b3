/*!
# Graph Generators

This module provides builder-style generators for random weighted graphs and traits to add
deterministic substructures (paths, cycles, cliques, stars) to existing graphs.

The typical usage workflow is:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters using builder methods (e.g., `.nodes(n).prob(p).weights(1.0, 10.0)`).
3. Generate edges via `generate()` or `stream()`.

Alternatively, the [`RandomGraph`] trait builds whole graphs directly:

```rust
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use wgraphs::{prelude::*, gens::*};

let rng = &mut Pcg64Mcg::seed_from_u64(1);
let graph = AdjVector::gnp(rng, 50, 0.1, false);
assert_eq!(graph.number_of_vertices(), 50);
```
*/

use rand::Rng;

use crate::prelude::*;

mod gnp;
mod substructures;

pub use gnp::*;
pub use substructures::*;

/// Trait for generators that allow setting the number of vertices.
pub trait NumNodesGen {
    /// Sets the number of vertices, which are numbered `1..=n`.
    fn nodes(self, n: NumNodes) -> Self;
}

/// Trait for generators that allow setting the average degree.
pub trait AverageDegreeGen {
    /// Set the average degree of this generator.
    fn avg_deg(self, deg: f64) -> Self;
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

/// Trait for building full graph instances from random models.
pub trait RandomGraph: Sized {
    /// Creates a random `G(n,p)` graph on the vertices `1..=n` with unit weights
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64, directed: bool) -> Self
    where
        R: Rng,
    {
        Self::from_gnp(rng, &Gnp::new().nodes(n).prob(p).directed(directed))
    }

    /// Creates a graph from a configured [`Gnp`] generator, including isolated vertices
    fn from_gnp<R>(rng: &mut R, gnp: &Gnp) -> Self
    where
        R: Rng;
}

impl<G> RandomGraph for G
where
    G: GraphEdgeEditing,
{
    fn from_gnp<R>(rng: &mut R, gnp: &Gnp) -> Self
    where
        R: Rng,
    {
        let mut graph = Self::new(gnp.is_directed());
        graph.add_vertices(1..=gnp.number_of_nodes());
        graph.add_edges(gnp.stream(rng));
        graph
    }
}
