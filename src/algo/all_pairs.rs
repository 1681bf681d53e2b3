use tracing::debug;

use super::*;

/// Distances and first hops between every pair of vertices, as computed by
/// [`AllPairs::floyd_warshall`].
///
/// Internally, vertices are mapped to the compact indices `0..n` in ascending order.
#[derive(Debug, Clone)]
pub struct AllPairsShortestPaths {
    vertices: Vec<Node>,
    /// `indices[v]` is the compact index of `v` (only meaningful if `v` exists)
    indices: Vec<usize>,
    distances: Vec<Weight>,
    /// First hop as compact index, `usize::MAX` if there is none
    next: Vec<usize>,
    average_distance: f64,
}

impl AllPairsShortestPaths {
    fn index_of(&self, v: Node) -> Option<usize> {
        let idx = *self.indices.get(v as usize)?;
        (self.vertices.get(idx) == Some(&v)).then_some(idx)
    }

    fn cell(&self, u: Node, v: Node) -> Option<usize> {
        Some(self.index_of(u)? * self.vertices.len() + self.index_of(v)?)
    }

    /// Returns the length of a shortest path from `u` to `v`: `0` if `u == v`, infinity if `v`
    /// is unreachable and `None` if one of the vertices does not exist
    pub fn distance(&self, u: Node, v: Node) -> Option<Weight> {
        self.cell(u, v).map(|c| self.distances[c])
    }

    /// Returns the vertex following `u` on a shortest path to `v`, or `None` if `u == v` or `v`
    /// is unreachable
    pub fn next_hop(&self, u: Node, v: Node) -> Option<Node> {
        let next = self.next[self.cell(u, v)?];
        self.vertices.get(next).copied()
    }

    /// Reconstructs a shortest path from `u` to `v` (both inclusive) by following next hops.
    /// Returns `None` if `v` is unreachable from `u`.
    pub fn path(&self, u: Node, v: Node) -> Option<Vec<Node>> {
        if !self.distance(u, v)?.is_finite() {
            return None;
        }

        let mut path = vec![u];
        let mut current = u;
        while current != v {
            current = self.next_hop(current, v)?;
            path.push(current);
        }
        Some(path)
    }

    /// Returns the sum of all finite distances between distinct vertices divided by the number
    /// of vertex pairs, `n(n-1)/2` for undirected and `n(n-1)` for directed graphs.
    /// Unreachable pairs thus lower the average. Graphs with fewer than two vertices yield `0`.
    pub fn average_distance(&self) -> f64 {
        self.average_distance
    }

    /// Returns the vertices covered, in ascending order
    pub fn vertices(&self) -> &[Node] {
        &self.vertices
    }
}

/// All-pairs shortest paths, implemented on every graph
pub trait AllPairs: WeightedGraph {
    /// Computes all pairwise shortest paths with the Floyd-Warshall algorithm in `O(n^3)`
    fn floyd_warshall(&self) -> AllPairsShortestPaths {
        let vertices = self.vertices().collect::<Vec<_>>();
        let n = vertices.len();

        let mut indices = vec![0; self.vertex_bound()];
        for (i, &v) in vertices.iter().enumerate() {
            indices[v as usize] = i;
        }

        let mut distances = vec![Weight::INFINITY; n * n];
        let mut next = vec![usize::MAX; n * n];
        for (i, &u) in vertices.iter().enumerate() {
            distances[i * n + i] = 0.0;
            for (v, w) in self.neighbors_of(u) {
                let j = indices[v as usize];
                distances[i * n + j] = w;
                next[i * n + j] = j;
            }
        }

        for k in 0..n {
            for i in 0..n {
                let dik = distances[i * n + k];
                if dik == Weight::INFINITY {
                    continue;
                }
                for j in 0..n {
                    let via = dik + distances[k * n + j];
                    if via < distances[i * n + j] {
                        distances[i * n + j] = via;
                        next[i * n + j] = next[i * n + k];
                    }
                }
            }
        }

        let average_distance = if n < 2 {
            0.0
        } else {
            let sum: Weight = (0..n)
                .flat_map(|i| (0..n).map(move |j| (i, j)))
                .filter(|&(i, j)| if self.is_directed() { i != j } else { i < j })
                .map(|(i, j)| distances[i * n + j])
                .filter(|d| d.is_finite())
                .sum();
            let pairs = (n * (n - 1)) as f64;
            if self.is_directed() { sum / pairs } else { sum / (pairs / 2.0) }
        };

        debug!(vertices = n, average_distance, "floyd-warshall finished");

        AllPairsShortestPaths {
            vertices,
            indices,
            distances,
            next,
            average_distance,
        }
    }
}

impl<G: WeightedGraph> AllPairs for G {}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn example_graph() {
        let graph = AdjVector::from_edges(
            false,
            [(1, 2, 3.0), (1, 5, 2.0), (2, 3, 1.0), (2, 4, 6.0), (3, 4, 2.0)],
        );
        let apsp = graph.floyd_warshall();

        assert_eq!(apsp.distance(1, 4), Some(6.0));
        assert_eq!(apsp.distance(4, 5), Some(8.0));
        assert_eq!(apsp.distance(3, 3), Some(0.0));
        assert_eq!(apsp.distance(1, 6), None);
        assert_eq!(apsp.next_hop(1, 4), Some(2));
        assert_eq!(apsp.next_hop(1, 1), None);
        assert_eq!(apsp.path(1, 4), Some(vec![1, 2, 3, 4]));
        assert_eq!(apsp.path(5, 5), Some(vec![5]));

        // 10 pairs: 3 4 6 2 | 1 3 5 | 2 6 | 8
        assert_eq!(apsp.average_distance(), 4.0);
    }

    #[test]
    fn unreachable_pairs() {
        let graph = AdjList::from_edges(true, [(1, 2, 1.0), (2, 3, 1.0), (4, 3, 5.0)]);
        let apsp = graph.floyd_warshall();

        assert_eq!(apsp.distance(1, 3), Some(2.0));
        assert_eq!(apsp.distance(3, 1), Some(Weight::INFINITY));
        assert_eq!(apsp.next_hop(3, 1), None);
        assert_eq!(apsp.path(3, 1), None);
        assert_eq!(apsp.path(1, 3), Some(vec![1, 2, 3]));

        // finite: 1->2, 1->3, 2->3, 4->3 out of 12 ordered pairs
        assert_eq!(apsp.average_distance(), 9.0 / 12.0);
    }

    #[test]
    fn tiny_graphs() {
        assert_eq!(AdjVector::undirected().floyd_warshall().average_distance(), 0.0);

        let mut graph = AdjVector::undirected();
        graph.add_vertex(7);
        let apsp = graph.floyd_warshall();
        assert_eq!(apsp.distance(7, 7), Some(0.0));
        assert_eq!(apsp.average_distance(), 0.0);
        assert_eq!(apsp.vertices(), &[7]);
    }

    #[test]
    fn agrees_with_dijkstra() {
        let rng = &mut Pcg64Mcg::seed_from_u64(31);
        let mut graph = AdjMatrix::undirected();
        for _ in 0..120 {
            graph.add_edge(
                rng.random_range(1..=35),
                rng.random_range(1..=35),
                rng.random_range(1..30) as Weight,
            );
        }

        let apsp = graph.floyd_warshall();
        for u in graph.vertices() {
            let tree = graph.dijkstra(u).unwrap();
            for v in graph.vertices() {
                let d = apsp.distance(u, v).unwrap();
                assert_eq!(d, apsp.distance(v, u).unwrap());
                match tree.path_to(v) {
                    Some(path) => {
                        assert_eq!(d, path.distance);
                        let hops = apsp.path(u, v).unwrap();
                        let length: Weight = hops
                            .windows(2)
                            .map(|w| graph.weight(w[0], w[1]).unwrap())
                            .sum();
                        assert_eq!(length, d);
                    }
                    None => assert!(d.is_infinite()),
                }
            }
        }
    }
}
