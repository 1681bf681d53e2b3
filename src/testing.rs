/// Every graph representation is expected to satisfy the same contract; this macro generates
/// a test module checking it for one representation and orientation.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, $directed:literal) => {
        #[cfg(test)]
        mod $env {
            use crate::{ops::*, repr::*, *};
            use fxhash::FxHashMap;
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            /// Creates a list of `m` random weighted edges for vertices `1..=n` (possibly with
            /// duplicates and self-loops) together with the edges a graph must end up storing
            fn random_edges<R: Rng>(
                rng: &mut R,
                n: NumNodes,
                m: usize,
            ) -> (Vec<WeightedEdge>, FxHashMap<Edge, Weight>) {
                let mut expected = FxHashMap::default();
                let edges = (0..m)
                    .map(|_| {
                        let u = rng.random_range(1..=n);
                        let v = rng.random_range(1..=n);
                        let w = rng.random_range(0..100) as Weight;

                        if u != v {
                            let key = if $directed { Edge(u, v) } else { Edge(u, v).normalized() };
                            expected.entry(key).or_insert(w);
                        }
                        WeightedEdge(u, v, w)
                    })
                    .collect_vec();

                (edges, expected)
            }

            #[test]
            fn graph_new() {
                let graph = <$graph>::new($directed);
                assert_eq!(graph.is_directed(), $directed);
                assert_eq!(graph.number_of_vertices(), 0);
                assert_eq!(graph.number_of_edges(), 0);
                assert!(graph.is_empty());
                assert_eq!(graph.vertices().count(), 0);
                assert_eq!(graph.neighbors_of(1).count(), 0);
                assert_eq!(graph.degree_of(1), 0);
                assert_eq!(graph.weight(1, 1), None);
                assert_eq!(graph.random_vertex(&mut Pcg64Mcg::seed_from_u64(1)), None);
            }

            #[test]
            fn add_vertex() {
                let mut graph = <$graph>::new($directed);
                assert!(graph.add_vertex(5));
                assert!(!graph.add_vertex(5));
                assert!(!graph.add_vertex(RESERVED_NODE));
                assert!(graph.add_vertex(2));

                assert_eq!(graph.number_of_vertices(), 2);
                assert_eq!(graph.vertices().collect_vec(), vec![2, 5]);
                assert!(graph.exists(5));
                assert!(!graph.exists(3));
                assert!(!graph.exists(0));
                assert_eq!(graph.weight(5, 5), Some(0.0));
                assert_eq!(graph.degree_of(5), 0);
            }

            #[test]
            fn rejects_invalid_edges() {
                let mut graph = <$graph>::new($directed);
                assert!(!graph.add_edge(0, 1, 1.0));
                assert!(!graph.add_edge(1, 0, 1.0));
                assert!(!graph.add_edge(1, 2, f64::NAN));
                assert!(!graph.add_edge(1, 2, f64::INFINITY));
                assert!(!graph.add_edge(3, 3, 1.0));
                assert!(graph.is_empty());
                assert_eq!(graph.number_of_edges(), 0);

                assert!(graph.add_edge(1, 2, 4.0));
                assert!(!graph.add_edge(1, 2, 7.0));
                assert_eq!(graph.number_of_edges(), 1);
                assert_eq!(graph.degree_of(1), 1);
                assert_eq!(graph.weight(1, 2), Some(4.0));

                // the reverse direction is a duplicate only for undirected graphs
                assert_eq!(graph.add_edge(2, 1, 5.0), $directed);
            }

            #[test]
            fn contract_on_random_graphs() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [10 as NumNodes, 20, 50] {
                    for m in [n * 2, n * 5] {
                        let (edges, expected) = random_edges(rng, n, m as usize);
                        let graph = <$graph>::from_edges($directed, edges.iter());

                        assert_eq!(graph.number_of_edges() as usize, expected.len());

                        let endpoints = expected
                            .keys()
                            .flat_map(|&Edge(u, v)| [u, v])
                            .sorted()
                            .dedup()
                            .collect_vec();
                        assert_eq!(graph.vertices().collect_vec(), endpoints);
                        assert_eq!(graph.number_of_vertices() as usize, endpoints.len());

                        let mut stored = graph
                            .edges(!$directed)
                            .map(|e| (e.edge(), e.weight()))
                            .collect_vec();
                        stored.sort_by_key(|(e, _)| *e);
                        let mut reference = expected.iter().map(|(e, w)| (*e, *w)).collect_vec();
                        reference.sort_by_key(|(e, _)| *e);
                        assert_eq!(stored, reference);

                        for u in graph.vertices() {
                            assert_eq!(graph.degree_of(u) as usize, graph.neighbors_of(u).count());
                            for (v, w) in graph.neighbors_of(u) {
                                assert_eq!(graph.weight(u, v), Some(w));
                                assert!(graph.has_edge(u, v));
                                if !$directed {
                                    assert_eq!(graph.weight(v, u), Some(w));
                                }
                            }
                        }

                        for _ in 0..20 {
                            let u = graph.random_vertex(rng).unwrap();
                            assert!(graph.exists(u));
                        }
                    }
                }
            }

            #[test]
            fn short_circuit_iteration() {
                let mut graph = <$graph>::new($directed);
                graph.add_edges([(1, 2), (1, 3), (1, 4)]);

                let mut seen = 0;
                assert!(!graph.every_neighbor(1, |_, _| {
                    seen += 1;
                    false
                }));
                assert_eq!(seen, 1);

                let mut sum = 0;
                graph.for_each_neighbor(1, |v, _| sum += v);
                assert_eq!(sum, 9);

                let mut visited = Vec::new();
                assert!(!graph.every_vertex(|u| {
                    visited.push(u);
                    u < 2
                }));
                assert_eq!(visited, vec![1, 2]);
            }

            #[test]
            fn degree_statistics() {
                let mut graph = <$graph>::new($directed);
                assert_eq!(graph.calculate_degree_statistics().average_degree, 0.0);

                // star with center 1 and leaves 2..=5
                graph.add_edges([(1, 2), (1, 3), (1, 4), (1, 5)]);
                let stats = graph.calculate_degree_statistics().clone();

                if $directed {
                    assert_eq!(stats.average_degree, 4.0 / 5.0);
                    assert_eq!(stats.probability_of_degree(0), 0.8);
                    assert_eq!(stats.min_degree, 0);
                } else {
                    assert_eq!(stats.average_degree, 8.0 / 5.0);
                    assert_eq!(stats.probability_of_degree(1), 0.8);
                    assert_eq!(stats.min_degree, 1);
                }
                assert_eq!(stats.max_degree, 4);
                assert_eq!(stats.probability_of_degree(4), 0.2);
                assert_eq!(graph.degree_statistics(), &stats);
            }
        }
    };
}

pub(crate) use test_graph_ops;
