use std::collections::VecDeque;

use tracing::debug;

use super::*;

/// Number and sizes of the connected components of a graph
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ClusterStats {
    /// Number of components
    pub total: NumNodes,
    /// Size of the largest component
    pub biggest: NumNodes,
    /// Size of the smallest component
    pub smallest: NumNodes,
}

/// The longest hop distance between any two vertices of a graph
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Diameter {
    /// Number of edges on the longest shortest path; infinite if the graph is disconnected
    pub size: f64,
    /// Start of a longest shortest path
    pub initial_vertex: Option<Node>,
    /// End of a longest shortest path
    pub last_vertex: Option<Node>,
}

/// Breadth-first sweep over all vertices: starting at the smallest vertex not yet reached, each
/// search collects one component (following out-edges). `visitor` observes every search, depths
/// are relative to the component's first vertex. Returns the components in visiting order;
/// a stopped sweep returns the components completed so far.
pub(crate) fn sweep_components<G, V>(graph: &G, mut visitor: V) -> Vec<Vec<Node>>
where
    G: AdjacencyList,
    V: Visitor,
{
    let mut found = graph.vertex_bitset_unset();
    let mut depths = vec![0; graph.vertex_bound()];
    let mut distances = vec![0.0; graph.vertex_bound()];
    let mut components = Vec::new();
    let mut queue = VecDeque::new();

    for root in graph.vertices() {
        if found[root as usize] {
            continue;
        }

        found.set(root as usize, true);
        visitor.on_vertex_found(root, 0, 0.0);
        queue.push_back(root);

        let mut component = Vec::new();
        while let Some(u) = queue.pop_front() {
            if visitor.stop() {
                return components;
            }

            let ui = u as usize;
            visitor.on_vertex_visited(u, depths[ui], distances[ui]);
            component.push(u);

            for (v, w) in graph.neighbors_of(u) {
                let vi = v as usize;
                if found[vi] {
                    continue;
                }
                found.set(vi, true);
                depths[vi] = depths[ui] + 1;
                distances[vi] = distances[ui] + w;
                visitor.on_vertex_found(v, depths[vi], distances[vi]);
                queue.push_back(v);
            }
        }
        components.push(component);
    }

    components
}

/// Components, diameter and related measures, implemented on every graph
pub trait Connectivity: AdjacencyList + Sized {
    /// Counts the connected components and their extreme sizes.
    /// For directed graphs, components follow out-edges from the smallest unreached vertex.
    fn find_clusters(&self) -> ClusterStats {
        self.find_clusters_with(())
    }

    /// Like [`Connectivity::find_clusters`] reporting every search to `visitor`
    fn find_clusters_with<V: Visitor>(&self, visitor: V) -> ClusterStats {
        let components = sweep_components(self, visitor);
        let stats = ClusterStats {
            total: components.len() as NumNodes,
            biggest: components.iter().map(|c| c.len()).max().unwrap_or(0) as NumNodes,
            smallest: components.iter().map(|c| c.len()).min().unwrap_or(0) as NumNodes,
        };
        debug!(?stats, "clusters found");
        stats
    }

    /// Computes the hop diameter by running a BFS from every vertex.
    ///
    /// If some BFS does not reach all vertices, the diameter is infinite and no endpoints are
    /// reported. A single vertex has diameter `0`, an empty graph has no endpoints.
    fn find_diameter(&self) -> Diameter {
        let mut diameter = Diameter {
            size: 0.0,
            initial_vertex: None,
            last_vertex: None,
        };

        for u in self.vertices() {
            let tree = self.bfs(u);
            if tree.len() < self.number_of_vertices() {
                return Diameter {
                    size: f64::INFINITY,
                    initial_vertex: None,
                    last_vertex: None,
                };
            }

            let (last, eccentricity) = tree
                .vertices()
                .filter_map(|v| Some((v, tree.depth_of(v)?)))
                .fold((u, 0), |best, (v, d)| if d > best.1 { (v, d) } else { best });

            if diameter.initial_vertex.is_none() || eccentricity as f64 > diameter.size {
                diameter = Diameter {
                    size: eccentricity as f64,
                    initial_vertex: Some(u),
                    last_vertex: Some(last),
                };
            }
        }

        diameter
    }
}

impl<G: AdjacencyList> Connectivity for G {}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    fn components(sizes: &[Node]) -> AdjVector {
        let mut graph = AdjVector::undirected();
        let mut next = 1;
        for &size in sizes {
            graph.add_vertex(next);
            for v in next + 1..next + size {
                graph.add_edge(v - 1, v, 1.0);
            }
            next += size;
        }
        graph
    }

    #[test]
    fn cluster_sizes() {
        assert_eq!(
            components(&[5]).find_clusters(),
            ClusterStats {
                total: 1,
                biggest: 5,
                smallest: 5
            }
        );
        assert_eq!(
            components(&[5, 1, 1, 1, 3]).find_clusters(),
            ClusterStats {
                total: 5,
                biggest: 5,
                smallest: 1
            }
        );
        assert_eq!(AdjList::undirected().find_clusters(), ClusterStats::default());
    }

    #[test]
    fn clusters_report_to_visitor() {
        let graph = components(&[3, 2]);
        let mut visited = Vec::new();
        graph.find_clusters_with(Callbacks::new().on_visited(|v, d, _| visited.push((v, d))));
        assert_eq!(visited, vec![(1, 0), (2, 1), (3, 2), (4, 0), (5, 1)]);

        let sweep = sweep_components(&graph, ());
        assert_eq!(sweep, vec![vec![1, 2, 3], vec![4, 5]]);

        let mut steps = 0;
        let partial = sweep_components(
            &graph,
            Callbacks::new().stop_when(|| {
                steps += 1;
                steps > 4
            }),
        );
        assert_eq!(partial, vec![vec![1, 2, 3]]);
    }

    #[test]
    fn diameter() {
        let path = components(&[6]);
        let d = path.find_diameter();
        assert_eq!(d.size, 5.0);
        assert_eq!(
            [d.initial_vertex, d.last_vertex].into_iter().flatten().sorted().collect_vec(),
            vec![1, 6]
        );

        let cycle = AdjMatrix::from_edges(false, [(1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (6, 1)]);
        assert_eq!(cycle.find_diameter().size, 3.0);

        assert!(components(&[3, 1]).find_diameter().size.is_infinite());

        let single = components(&[1]).find_diameter();
        assert_eq!(single.size, 0.0);
        assert_eq!(single.initial_vertex, Some(1));

        let empty = AdjList::undirected().find_diameter();
        assert_eq!(empty.size, 0.0);
        assert_eq!(empty.last_vertex, None);
    }
}
