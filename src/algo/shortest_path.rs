/*!
# Dijkstra & Prim

Both algorithms grow a tree from a start vertex by repeatedly finalizing the frontier vertex of
smallest key, kept in an [`IndexedHeap`] with decrease-key. They differ only in the key of a
vertex `v` reached from the finalized vertex `u` via an edge of weight `w`:

- Dijkstra: `key[u] + w`, the length of the shortest known path,
- Prim: `w`, the cheapest edge connecting `v` to the tree.
*/

use tracing::debug;

use super::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Relaxation {
    ShortestPath,
    SpanningTree,
}

impl Relaxation {
    fn key(self, key_of_parent: Weight, weight: Weight) -> Weight {
        match self {
            Relaxation::ShortestPath => key_of_parent + weight,
            Relaxation::SpanningTree => weight,
        }
    }
}

/// Best-first search from `start`. `stop` is checked before every pop.
fn best_first<'a, G, V>(
    graph: &'a G,
    start: Node,
    mut visitor: V,
    relaxation: Relaxation,
) -> AlgoResult<SpanningTree<'a, G>>
where
    G: AdjacencyList,
    V: Visitor,
{
    let mut tree = SpanningTree::new(graph, start);
    if !graph.exists(start) {
        return Ok(tree);
    }

    let bound = graph.vertex_bound();
    let mut parents = vec![RESERVED_NODE; bound];
    let mut depths = vec![0; bound];
    let mut heap = IndexedHeap::min();

    parents[start as usize] = start;
    heap.push(start, 0.0);
    visitor.on_vertex_found(start, 0, 0.0);

    while !visitor.stop() {
        let Some((u, key)) = heap.pop() else {
            break;
        };
        let ui = u as usize;
        tree.claim(u, parents[ui], depths[ui]);
        visitor.on_vertex_visited(u, depths[ui], key);

        for (v, w) in graph.neighbors_of(u) {
            if relaxation == Relaxation::ShortestPath && w < 0.0 {
                debug!(u, v, w, "negative edge weight in shortest path search");
                return Err(AlgoError::NegativeWeight { u, v, weight: w });
            }

            if tree.contains(v) {
                continue;
            }

            let vi = v as usize;
            let candidate = relaxation.key(key, w);
            match heap.key_of(&v) {
                Some(current) if candidate < current => {
                    heap.decrease_key(v, candidate);
                }
                Some(_) => continue,
                None => {
                    heap.push(v, candidate);
                    visitor.on_vertex_found(v, depths[ui] + 1, candidate);
                }
            }
            parents[vi] = u;
            depths[vi] = depths[ui] + 1;
        }
    }

    Ok(tree)
}

/// Single-source shortest paths, implemented on every graph
pub trait ShortestPaths: AdjacencyList + Sized {
    /// Computes a shortest-path tree from `start` using Dijkstra's algorithm.
    ///
    /// Fails with [`AlgoError::NegativeWeight`] as soon as an edge of negative weight is
    /// relaxed. A start vertex not in the graph yields an empty tree.
    fn dijkstra(&self, start: Node) -> AlgoResult<SpanningTree<'_, Self>> {
        self.dijkstra_with(start, ())
    }

    /// Like [`ShortestPaths::dijkstra`] reporting to `visitor`, whose `distance` is the final
    /// shortest-path distance on visit and the tentative one on discovery
    fn dijkstra_with<V: Visitor>(&self, start: Node, visitor: V) -> AlgoResult<SpanningTree<'_, Self>> {
        best_first(self, start, visitor, Relaxation::ShortestPath)
    }
}

impl<G: AdjacencyList> ShortestPaths for G {}

/// Minimum spanning trees, implemented on every graph
pub trait MinimumSpanningTree: AdjacencyList + GraphType + Sized {
    /// Computes a minimum spanning tree of the component of `start` using Prim's algorithm.
    /// Without `start`, the smallest vertex is used; an empty graph yields an empty tree.
    ///
    /// Fails with [`AlgoError::DirectedGraph`] for directed graphs.
    fn prim(&self, start: Option<Node>) -> AlgoResult<SpanningTree<'_, Self>> {
        self.prim_with(start, ())
    }

    /// Like [`MinimumSpanningTree::prim`] reporting to `visitor`, whose `distance` is the
    /// weight of the edge connecting a vertex to the tree
    fn prim_with<V: Visitor>(
        &self,
        start: Option<Node>,
        visitor: V,
    ) -> AlgoResult<SpanningTree<'_, Self>> {
        if self.is_directed() {
            return Err(AlgoError::DirectedGraph);
        }

        let start = start
            .or_else(|| self.vertices().next())
            .unwrap_or(RESERVED_NODE);
        best_first(self, start, visitor, Relaxation::SpanningTree)
    }
}

impl<G: AdjacencyList + GraphType> MinimumSpanningTree for G {}
