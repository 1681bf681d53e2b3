/*!
# Substructure Generators

Adds common motifs with a uniform edge weight to an existing graph:

- **Paths**
- **Cycles**
- **Cliques**
- **Stars**

Every method returns the number of edges actually inserted; edges already present keep their
weight.

# Example

```rust
use wgraphs::{prelude::*, gens::*};

let mut g = AdjVector::undirected();
g.connect_path([1, 2, 3], 1.0);
g.connect_cycle([3, 4, 5], 2.0);
g.connect_clique(&[1, 3, 5], 3.0);

assert_eq!(g.number_of_edges(), 7);
assert_eq!(g.weight(3, 5), Some(2.0));
assert_eq!(g.weight(1, 5), Some(3.0));
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, cliques, stars)
/// inside an already existing graph.
pub trait GeneratorSubstructures {
    /// Connects the given vertices in order with a **simple path**.
    fn connect_path<P>(&mut self, nodes_on_path: P, weight: Weight) -> NumEdges
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given vertices with a **cycle**, closing it from the last vertex back to
    /// the first one. Fewer than three vertices degenerate to a path.
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C, weight: Weight) -> NumEdges
    where
        C: IntoIterator<Item = Node>;

    /// Connects every pair of the given vertices. In directed graphs both directions are added.
    fn connect_clique(&mut self, nodes: &[Node], weight: Weight) -> NumEdges;

    /// Connects `center` to every leaf (from the center in directed graphs).
    fn connect_star<L>(&mut self, center: Node, leaves: L, weight: Weight) -> NumEdges
    where
        L: IntoIterator<Item = Node>;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<P>(&mut self, nodes_on_path: P, weight: Weight) -> NumEdges
    where
        P: IntoIterator<Item = Node>,
    {
        self.add_edges(
            nodes_on_path
                .into_iter()
                .tuple_windows()
                .map(|(u, v)| WeightedEdge(u, v, weight)),
        )
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C, weight: Weight) -> NumEdges
    where
        C: IntoIterator<Item = Node>,
    {
        let nodes = nodes_in_cycle.into_iter().collect_vec();
        let mut added = self.connect_path(nodes.iter().copied(), weight);

        if let [first, _, .., last] = nodes.as_slice() {
            added += self.add_edge(*last, *first, weight) as NumEdges;
        }

        added
    }

    fn connect_clique(&mut self, nodes: &[Node], weight: Weight) -> NumEdges {
        let mut added = 0;
        for (&u, &v) in nodes.iter().tuple_combinations() {
            added += self.add_edge(u, v, weight) as NumEdges;
            added += self.add_edge(v, u, weight) as NumEdges;
        }
        added
    }

    fn connect_star<L>(&mut self, center: Node, leaves: L, weight: Weight) -> NumEdges
    where
        L: IntoIterator<Item = Node>,
    {
        self.add_edges(leaves.into_iter().map(|leaf| WeightedEdge(center, leaf, weight)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_and_cycle() {
        let mut graph = AdjList::undirected();
        assert_eq!(graph.connect_path([1, 2, 3, 4], 2.0), 3);
        assert_eq!(graph.connect_cycle([4, 5, 6], 1.0), 3);
        assert_eq!(graph.number_of_edges(), 6);
        assert_eq!(graph.weight(6, 4), Some(1.0));

        // an existing edge keeps its weight
        assert_eq!(graph.connect_path([2, 1], 7.0), 0);
        assert_eq!(graph.weight(1, 2), Some(2.0));

        // two vertices only form a path
        let mut graph = AdjVector::directed();
        assert_eq!(graph.connect_cycle([1, 2], 1.0), 1);
        assert!(!graph.has_edge(2, 1));
    }

    #[test]
    fn clique() {
        let mut graph = AdjMatrix::undirected();
        assert_eq!(graph.connect_clique(&[1, 2, 3, 4, 5], 1.0), 10);
        assert_eq!(graph.number_of_edges(), 10);

        let mut graph = AdjMatrix::directed();
        assert_eq!(graph.connect_clique(&[1, 2, 3, 4, 5], 1.0), 20);
        assert!(graph.vertices().all(|u| graph.degree_of(u) == 4));
    }

    #[test]
    fn star() {
        let mut graph = AdjVector::directed();
        assert_eq!(graph.connect_star(1, 2..=6, 0.5), 5);
        assert_eq!(graph.degree_of(1), 5);
        assert_eq!(graph.degree_of(2), 0);
        assert_eq!(graph.weight(1, 6), Some(0.5));
    }
}
