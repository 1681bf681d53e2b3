use std::io::Write;

use itertools::Itertools;
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use tempfile::NamedTempFile;
use wgraphs::{algo::*, gens::*, io::*, prelude::*};

const EXAMPLE: &str = "# five vertices\n5\n1 2 3\n1 5 2\n2 3 1\n2 4 6\n3 4 2\n";

fn example_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(EXAMPLE.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const REPRESENTATIONS: [Representation; 3] = [
    Representation::List,
    Representation::Vector,
    Representation::Matrix,
];

#[test]
fn example_on_every_backend() {
    let file = example_file();

    for representation in REPRESENTATIONS {
        let graph = EdgeListReader::new()
            .try_read_dyn_graph_file(representation, file.path())
            .unwrap();
        assert_eq!(graph.representation(), representation);
        assert_eq!(graph.number_of_vertices(), 5);
        assert_eq!(graph.number_of_edges(), 5);

        let tree = graph.dijkstra(1).unwrap();
        let path = tree.path_to(4).unwrap();
        assert_eq!(path.vertices, vec![1, 2, 3, 4]);
        assert_eq!(path.distance, 6.0);
        assert_eq!(path.hops, 3);

        assert_eq!(graph.prim(Some(1)).unwrap().weight(), 8.0);
        assert_eq!(graph.floyd_warshall().average_distance(), 4.0);

        let clusters = graph.find_clusters();
        assert_eq!((clusters.total, clusters.biggest, clusters.smallest), (1, 5, 5));
        assert_eq!(graph.find_diameter().size, 3.0);

        let coloring = graph.find_coloring();
        assert!(graph.check_coloring(&coloring));
        assert!(coloring.number_of_colors() >= 3);

        assert_eq!(graph.steiner_tree_heuristic(1, &[5]).unwrap().weight(), 6.0);
        assert_eq!(graph.steiner_tree_branch_and_bound(&[5]).unwrap().weight(), 6.0);
    }
}

#[test]
fn write_and_reload_random_graph() {
    let rng = &mut Pcg64Mcg::seed_from_u64(7);
    let mut graph = AdjVector::from_gnp(rng, &Gnp::new().nodes(60).prob(0.05).weights(1.0, 9.0));
    graph.add_vertex(75);

    let file = NamedTempFile::new().unwrap();
    graph.try_write_edge_list_file(file.path()).unwrap();
    let reloaded = AdjList::try_read_edge_list_file(file.path()).unwrap();

    assert_eq!(reloaded.number_of_vertices(), graph.number_of_vertices());
    assert_eq!(reloaded.number_of_edges(), graph.number_of_edges());
    assert!(reloaded.exists(75));
    for WeightedEdge(u, v, w) in graph.edges(true) {
        assert_eq!(reloaded.weight(u, v), Some(w));
    }
}

#[test]
fn backends_agree_on_random_graphs() {
    let rng = &mut Pcg64Mcg::seed_from_u64(11);

    for directed in [false, true] {
        let edges = Gnp::new()
            .nodes(40)
            .avg_deg(3.0)
            .weights(0.5, 4.0)
            .directed(directed)
            .generate(rng);

        let graphs = REPRESENTATIONS.map(|representation| {
            let mut graph = DynGraph::with_representation(representation, directed);
            graph.add_vertices(1..=40);
            graph.add_edges(edges.iter().copied());
            graph
        });

        let distances = graphs
            .iter()
            .map(|graph| {
                let tree = graph.dijkstra(1).unwrap();
                (1..=40)
                    .map(|v| tree.path_to(v).map(|p| p.distance))
                    .collect_vec()
            })
            .collect_vec();
        for other in &distances[1..] {
            for (a, b) in other.iter().zip(&distances[0]) {
                match (a, b) {
                    (Some(a), Some(b)) => assert!((a - b).abs() < 1e-9),
                    _ => assert_eq!(a.is_some(), b.is_some()),
                }
            }
        }

        let apsp = graphs[0].floyd_warshall();
        for (v, d) in (1..=40).zip(&distances[0]) {
            match d {
                Some(d) => assert!((apsp.distance(1, v).unwrap() - d).abs() < 1e-9),
                None => assert_eq!(apsp.distance(1, v), Some(f64::INFINITY)),
            }
        }

        assert!(graphs.iter().map(|g| g.find_clusters()).all_equal());
        assert!(graphs.iter().map(|g| g.bfs(1).len()).all_equal());
    }
}

#[test]
fn substructures_build_known_answers() {
    let mut graph = AdjMatrix::undirected();
    graph.connect_cycle(1..=6, 1.0);
    graph.connect_star(7, [1, 3], 10.0);

    assert_eq!(graph.find_diameter().size, 3.0);
    assert_eq!(graph.find_coloring().number_of_colors(), 2);
    assert_eq!(graph.prim(None).unwrap().weight(), 15.0);

    // vertex 7 only helps if its edges are cheaper than the cycle
    assert_eq!(graph.steiner_tree_branch_and_bound(&[7]).unwrap().weight(), 5.0);
}
