use tracing::debug;

use super::*;

/// An assignment of colors `1, 2, ...` to vertices
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexColoring {
    number_of_colors: NumNodes,
    /// `colors[v]` is the color of `v`, `0` if uncolored
    colors: Vec<NumNodes>,
}

impl VertexColoring {
    /// Creates a coloring without any colored vertex
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns `color` (must be positive) to `v`
    pub fn set_color(&mut self, v: Node, color: NumNodes) {
        debug_assert!(color > 0);
        let idx = v as usize;
        if idx >= self.colors.len() {
            self.colors.resize(idx + 1, 0);
        }
        self.colors[idx] = color;
        self.number_of_colors = self.number_of_colors.max(color);
    }

    /// Returns the color of `v` if it has one
    pub fn color_of(&self, v: Node) -> Option<NumNodes> {
        self.colors.get(v as usize).copied().filter(|&c| c > 0)
    }

    /// Returns the largest color used
    pub fn number_of_colors(&self) -> NumNodes {
        self.number_of_colors
    }

    /// Returns all colored vertices with their color in ascending vertex order
    pub fn colors(&self) -> impl Iterator<Item = (Node, NumNodes)> + '_ {
        self.colors
            .iter()
            .enumerate()
            .filter(|(_, c)| **c > 0)
            .map(|(v, c)| (v as Node, *c))
    }
}

/// Greedy vertex coloring, implemented on every graph
pub trait Coloring: AdjacencyList + Sized {
    /// Colors the graph greedily, one color per round.
    ///
    /// In round `c`, all components are swept breadth-first and every uncolored vertex gets
    /// color `c` unless an adjacent vertex (in either direction) already has it. The first
    /// uncolored vertex of a round is always colored, so at most `max_degree + 1` rounds are
    /// needed.
    fn find_coloring(&self) -> VertexColoring {
        let order = sweep_components(self, ()).concat();
        let mut coloring = VertexColoring {
            number_of_colors: 0,
            colors: vec![0; self.vertex_bound()],
        };

        let mut uncolored = order.len();
        let mut blocked = self.vertex_bitset_unset();
        let mut color = 0;
        while uncolored > 0 {
            color += 1;
            blocked.fill(false);

            for &u in &order {
                if coloring.colors[u as usize] != 0 || blocked[u as usize] {
                    continue;
                }
                if !self.every_neighbor(u, |v, _| coloring.colors[v as usize] != color) {
                    continue;
                }

                coloring.colors[u as usize] = color;
                uncolored -= 1;
                // catches edges pointing towards `u` in directed graphs
                self.for_each_neighbor(u, |v, _| blocked.set(v as usize, true));
            }
        }

        coloring.number_of_colors = color;
        debug!(colors = color, "greedy coloring finished");
        coloring
    }

    /// Returns *true* if every vertex is colored and no edge joins two vertices of the same color
    fn check_coloring(&self, coloring: &VertexColoring) -> bool {
        self.every_vertex(|u| {
            let Some(c) = coloring.color_of(u) else {
                return false;
            };
            self.every_neighbor(u, |v, _| coloring.color_of(v) != Some(c))
        })
    }
}

impl<G: AdjacencyList> Coloring for G {}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn bipartite_and_odd_cycle() {
        let even = AdjVector::from_edges(false, [(1, 2), (2, 3), (3, 4), (4, 1)]);
        let coloring = even.find_coloring();
        assert_eq!(coloring.number_of_colors(), 2);
        assert!(even.check_coloring(&coloring));

        let odd = AdjList::from_edges(false, [(1, 2), (2, 3), (3, 1)]);
        let coloring = odd.find_coloring();
        assert_eq!(coloring.number_of_colors(), 3);
        assert!(odd.check_coloring(&coloring));

        let mut isolated = AdjMatrix::undirected();
        isolated.add_vertices([3, 5]);
        let coloring = isolated.find_coloring();
        assert_eq!(coloring.number_of_colors(), 1);
        assert_eq!(coloring.colors().collect::<Vec<_>>(), vec![(3, 1), (5, 1)]);

        assert_eq!(AdjVector::undirected().find_coloring().number_of_colors(), 0);
    }

    #[test]
    fn invalid_colorings_are_detected() {
        let graph = AdjVector::from_edges(false, [(1, 2), (2, 3)]);

        let mut coloring = VertexColoring::new();
        coloring.set_color(1, 1);
        coloring.set_color(2, 2);
        assert!(!graph.check_coloring(&coloring));

        coloring.set_color(3, 2);
        assert!(!graph.check_coloring(&coloring));

        coloring.set_color(3, 1);
        assert!(graph.check_coloring(&coloring));
        assert_eq!(coloring.color_of(4), None);
    }

    #[test]
    fn random_graphs_are_colored_properly() {
        let rng = &mut Pcg64Mcg::seed_from_u64(41);

        for directed in [false, true] {
            for _ in 0..10 {
                let mut graph = AdjVector::new(directed);
                graph.add_vertices(1..=50);
                for _ in 0..200 {
                    graph.add_unit_edge(rng.random_range(1..=50), rng.random_range(1..=50));
                }

                let coloring = graph.find_coloring();
                assert!(graph.check_coloring(&coloring));
                if !directed {
                    assert!(coloring.number_of_colors() <= graph.max_degree() + 1);
                }
            }
        }
    }
}
