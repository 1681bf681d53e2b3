/*!
# Breadth- and Depth-First Search

Both searches share one engine parameterized by the frontier container (see [`NodeSequencer`]):
a queue yields BFS, a stack yields DFS. Frontier items are candidate tree edges
`WeightedEdge(parent, vertex, weight)`; the root enters as its own parent.

- **BFS** claims a vertex when it is pushed, so it is enqueued exactly once and its depth is the
  hop distance to the root. Vertices are visited in non-decreasing depth order.
- **DFS** claims a vertex when it is popped. A vertex can be pushed several times before it is
  visited; stale copies are skipped on pop. The resulting tree is *a* valid DFS tree whose shape
  depends on the neighbor order of the backend (the last pushed neighbor is explored first).
*/

use std::collections::VecDeque;

use tracing::trace;

use super::*;

/// Runs a traversal from `start` using `S` as frontier.
/// A start vertex not in the graph yields an empty tree.
pub(crate) fn traverse<'a, G, S, V>(graph: &'a G, start: Node, mut visitor: V) -> SpanningTree<'a, G>
where
    G: AdjacencyList,
    S: NodeSequencer<WeightedEdge>,
    V: Visitor,
{
    let mut tree = SpanningTree::new(graph, start);
    if !graph.exists(start) {
        return tree;
    }

    let mut distances = vec![0.0; graph.vertex_bound()];
    let mut depths = vec![0; graph.vertex_bound()];
    let mut found = graph.vertex_bitset_unset();

    found.set(start as usize, true);
    if S::CLAIM == ClaimPolicy::OnPush {
        tree.claim(start, start, 0);
    }
    visitor.on_vertex_found(start, 0, 0.0);

    let mut frontier = S::init(WeightedEdge(start, start, 0.0));
    while !visitor.stop() {
        let Some(WeightedEdge(parent, u, w)) = frontier.pop() else {
            break;
        };

        let ui = u as usize;
        if S::CLAIM == ClaimPolicy::OnPop {
            if tree.contains(u) {
                continue;
            }

            if parent != u {
                depths[ui] = depths[parent as usize] + 1;
                distances[ui] = distances[parent as usize] + w;
            }
            tree.claim(u, parent, depths[ui]);
        }

        visitor.on_vertex_visited(u, depths[ui], distances[ui]);

        for (v, w) in graph.neighbors_of(u) {
            let vi = v as usize;
            match S::CLAIM {
                ClaimPolicy::OnPush => {
                    if found[vi] {
                        continue;
                    }
                    depths[vi] = depths[ui] + 1;
                    distances[vi] = distances[ui] + w;
                    tree.claim(v, u, depths[vi]);
                }
                ClaimPolicy::OnPop => {
                    if tree.contains(v) {
                        continue;
                    }
                    if found[vi] {
                        frontier.push(WeightedEdge(u, v, w));
                        continue;
                    }
                }
            }

            found.set(vi, true);
            visitor.on_vertex_found(v, depths[ui] + 1, distances[ui] + w);
            frontier.push(WeightedEdge(u, v, w));
        }
    }

    trace!(start, reached = tree.len(), "traversal finished");
    tree
}

/// Breadth- and depth-first search, implemented on every graph
pub trait Traversal: AdjacencyList + Sized {
    /// Runs a breadth-first search from `start`
    fn bfs(&self, start: Node) -> SpanningTree<'_, Self> {
        self.bfs_with(start, ())
    }

    /// Runs a breadth-first search from `start` reporting to `visitor`
    fn bfs_with<V: Visitor>(&self, start: Node, visitor: V) -> SpanningTree<'_, Self> {
        traverse::<_, VecDeque<WeightedEdge>, _>(self, start, visitor)
    }

    /// Runs a depth-first search from `start`
    fn dfs(&self, start: Node) -> SpanningTree<'_, Self> {
        self.dfs_with(start, ())
    }

    /// Runs a depth-first search from `start` reporting to `visitor`
    fn dfs_with<V: Visitor>(&self, start: Node, visitor: V) -> SpanningTree<'_, Self> {
        traverse::<_, Vec<WeightedEdge>, _>(self, start, visitor)
    }
}

impl<G: AdjacencyList> Traversal for G {}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    fn random_graph(rng: &mut impl Rng, n: Node, m: usize, directed: bool) -> AdjVector {
        let mut graph = AdjVector::new(directed);
        graph.add_vertices(1..=n);
        for _ in 0..m {
            let u = rng.random_range(1..=n);
            let v = rng.random_range(1..=n);
            graph.add_edge(u, v, rng.random_range(1..10) as Weight);
        }
        graph
    }

    #[test]
    fn bfs_depths_are_hop_distances() {
        let graph = AdjList::from_edges(false, [(1, 2), (1, 3), (2, 4), (3, 4), (4, 5), (6, 7)]);
        let tree = graph.bfs(1);

        assert_eq!(tree.len(), 5);
        assert_eq!(tree.parent_of(1), None);
        assert_eq!(tree.depth_of(1), Some(0));
        assert_eq!(tree.parent_of(4), Some(2));
        assert_eq!(tree.depth_of(5), Some(3));
        assert!(!tree.contains(6));
    }

    #[test]
    fn bfs_visits_in_depth_order() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);

        for directed in [false, true] {
            let graph = random_graph(rng, 60, 150, directed);
            let mut visited = Vec::new();
            let mut found = Vec::new();
            let tree = graph.bfs_with(
                1,
                Callbacks::new()
                    .on_found(|v, _, _| found.push(v))
                    .on_visited(|v, d, _| visited.push((v, d))),
            );

            assert_eq!(visited.len() as NumNodes, tree.len());
            assert_eq!(visited.iter().map(|(v, _)| *v).collect_vec(), found);
            assert!(visited.iter().tuple_windows().all(|(a, b)| a.1 <= b.1));

            for v in tree.vertices() {
                if let Some(p) = tree.parent_of(v) {
                    assert_eq!(tree.depth_of(v), tree.depth_of(p).map(|d| d + 1));
                    assert!(graph.has_edge(p, v));
                }
            }

            // every edge leaving the tree would otherwise allow a shorter path
            for WeightedEdge(u, v, _) in graph.edges(false) {
                if let (Some(du), Some(dv)) = (tree.depth_of(u), tree.depth_of(v)) {
                    assert!(dv <= du + 1);
                } else {
                    assert!(!tree.contains(u));
                }
            }
        }
    }

    #[test]
    fn dfs_is_valid_tree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(12);

        for directed in [false, true] {
            let graph = random_graph(rng, 60, 120, directed);
            let bfs = graph.bfs(1);

            let mut visit_count = 0;
            let dfs = graph.dfs_with(1, Callbacks::new().on_visited(|_, _, _| visit_count += 1));

            // both searches reach the same vertices
            assert_eq!(dfs.vertices().collect_vec(), bfs.vertices().collect_vec());
            assert_eq!(visit_count, dfs.len());

            for v in dfs.vertices() {
                if let Some(p) = dfs.parent_of(v) {
                    assert!(graph.has_edge(p, v));
                    assert_eq!(dfs.depth_of(v), dfs.depth_of(p).map(|d| d + 1));
                }
                let path = dfs.path_to(v).unwrap();
                assert_eq!(path.vertices[0], 1);
                assert_eq!(path.hops, dfs.depth_of(v).unwrap());
            }
        }
    }

    #[test]
    fn dfs_explores_last_neighbor_first() {
        // neighbors of 1 in insertion order: 2, 3
        let graph = AdjVector::from_edges(false, [(1, 2), (1, 3), (2, 3)]);
        let tree = graph.dfs(1);

        assert_eq!(tree.parent_of(3), Some(1));
        assert_eq!(tree.parent_of(2), Some(3));
        assert_eq!(tree.depth_of(2), Some(2));
    }

    #[test]
    fn dfs_fires_found_once() {
        let graph = AdjVector::from_edges(false, [(1, 2), (1, 3), (2, 3), (3, 4), (2, 4)]);
        let mut found = Vec::new();
        graph.dfs_with(1, Callbacks::new().on_found(|v, _, _| found.push(v)));

        assert_eq!(found.iter().sorted().collect_vec(), vec![&1, &2, &3, &4]);
    }

    #[test]
    fn stop_and_missing_root() {
        let graph = AdjMatrix::from_edges(false, [(1, 2), (2, 3), (3, 4)]);

        // BFS claims the root when pushing it, before the first check; DFS when popping it
        let tree = graph.bfs_with(1, Callbacks::new().stop_when(|| true));
        assert_eq!(tree.vertices().collect_vec(), vec![1]);
        assert!(graph.dfs_with(1, Callbacks::new().stop_when(|| true)).is_empty());

        let mut steps = 0;
        let tree = graph.dfs_with(
            1,
            Callbacks::new().stop_when(|| {
                steps += 1;
                steps > 2
            }),
        );
        assert_eq!(tree.vertices().collect_vec(), vec![1, 2]);

        let tree = graph.bfs(9);
        assert!(tree.is_empty());
        assert_eq!(tree.root(), 9);
        assert_eq!(graph.dfs(0).len(), 0);
    }

    #[test]
    fn callback_distances_are_weighted() {
        let graph = AdjVector::from_edges(false, [(1, 2, 2.5), (2, 3, 1.0)]);
        let mut seen = Vec::new();
        graph.bfs_with(1, Callbacks::new().on_visited(|v, d, dist| seen.push((v, d, dist))));

        assert_eq!(seen, vec![(1, 0, 0.0), (2, 1, 2.5), (3, 2, 3.5)]);
    }
}
