/*!
# Graph Contract

The traits in this module form the uniform vertex/edge surface every storage backend
(see [`repr`](crate::repr)) implements. Algorithms are written against these traits only
and never inspect the concrete representation.

Vertices are positive integers; querying an unknown vertex is never an error but yields
empty results (no neighbors, degree `0`, no weight).
*/

use bitvec::vec::BitVec;
use itertools::Itertools;
use rand::Rng;

use crate::*;

/// Provides the orientation of a graph
pub trait GraphType {
    /// Returns *true* if edges are only traversable from source to target
    fn is_directed(&self) -> bool;

    /// Returns *true* if every edge is stored in both directions
    fn is_undirected(&self) -> bool {
        !self.is_directed()
    }
}

/// Provides getters pertaining to the vertex-set of a graph
pub trait GraphNodeOrder {
    /// Returns the number of existing vertices of the graph
    fn number_of_vertices(&self) -> NumNodes;

    /// Returns one past the largest vertex identifier ever added (`0` for an empty graph).
    /// Dense per-vertex arrays of this length can be indexed by any existing vertex.
    fn vertex_bound(&self) -> usize;

    /// Returns *true* if `u` was added to the graph (explicitly or as an edge endpoint)
    fn exists(&self, u: Node) -> bool;

    /// Returns an iterator over all existing vertices in ascending order
    fn vertices(&self) -> impl Iterator<Item = Node> + '_;

    /// Return the number of vertices as usize
    fn len(&self) -> usize {
        self.number_of_vertices() as usize
    }

    /// Returns *true* if the graph has no vertices (and thus no edges)
    fn is_empty(&self) -> bool {
        self.number_of_vertices() == 0
    }

    /// Invokes `f` for every existing vertex in ascending order
    fn for_each_vertex<F: FnMut(Node)>(&self, f: F) {
        self.vertices().for_each(f);
    }

    /// Invokes `f` for every existing vertex in ascending order until `f` returns *false*.
    /// Returns *true* if `f` never returned *false*.
    fn every_vertex<F: FnMut(Node) -> bool>(&self, mut f: F) -> bool {
        self.vertices().all(|u| f(u))
    }

    /// Returns an empty bitset with one entry per vertex index
    fn vertex_bitset_unset(&self) -> BitVec {
        BitVec::repeat(false, self.vertex_bound())
    }

    /// Returns a uniformly chosen existing vertex or `None` if the graph is empty.
    ///
    /// Identifiers are drawn from the index space `1..vertex_bound()` and rejected until an
    /// existing vertex is hit, so the result is uniform over the vertex set even if the
    /// identifiers are sparse.
    fn random_vertex<R: Rng>(&self, rng: &mut R) -> Option<Node> {
        if self.is_empty() {
            return None;
        }

        loop {
            let u = rng.random_range(1..self.vertex_bound()) as Node;
            if self.exists(u) {
                return Some(u);
            }
        }
    }
}

/// Provides getters pertaining to the edge-set of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph (an undirected edge is counted once)
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_edgeless(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over `(neighbor, weight)` pairs of a given vertex.
    /// Unknown vertices have no neighbors.
    ///
    /// Note that for directed graphs, these are the out-neighbors.
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_;

    /// Returns the number of (outgoing) neighbors of `u`, `0` if `u` does not exist
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Invokes `f` for every neighbor of `u`
    fn for_each_neighbor<F: FnMut(Node, Weight)>(&self, u: Node, mut f: F) {
        for (v, w) in self.neighbors_of(u) {
            f(v, w);
        }
    }

    /// Invokes `f` for every neighbor of `u` until `f` returns *false*.
    /// Returns *true* if `f` never returned *false*.
    fn every_neighbor<F: FnMut(Node, Weight) -> bool>(&self, u: Node, mut f: F) -> bool {
        self.neighbors_of(u).all(|(v, w)| f(v, w))
    }

    /// Returns an iterator over the degrees of all vertices in ascending vertex order
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns the minimum degree in the graph
    fn min_degree(&self) -> NumNodes {
        self.degrees().min().unwrap_or(0)
    }

    /// Returns a distribution `(degree, number of vertices)` sorted by degree
    fn degree_distribution(&self) -> Vec<(NumNodes, NumNodes)> {
        let mut distr = self
            .degrees()
            .counts()
            .into_iter()
            .map(|(d, n)| (d, n as NumNodes))
            .collect_vec();
        distr.sort_by_key(|(d, _)| *d);
        distr
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.neighbors_of(u)
            .filter(move |&(v, _)| !only_normalized || u <= v)
            .map(move |(v, w)| WeightedEdge(u, v, w))
    }

    /// Returns an iterator over all edges in the graph.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.vertices()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }
}

/// Trait to test existence of edges and look up their weights
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns the weight of the edge `(u, v)` or `None` if no such edge exists.
    /// By convention `weight(v, v) == Some(0.0)` for every existing vertex `v`.
    fn weight(&self, u: Node, v: Node) -> Option<Weight>;

    /// Returns *true* if the edge `(u, v)` is stored in the graph
    fn has_edge(&self, u: Node, v: Node) -> bool {
        u != v && self.weight(u, v).is_some()
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew: Sized {
    /// Creates an empty graph of the given orientation
    fn new(directed: bool) -> Self;

    /// Creates an empty undirected graph
    fn undirected() -> Self {
        Self::new(false)
    }

    /// Creates an empty directed graph
    fn directed() -> Self {
        Self::new(true)
    }
}

/// Provides functions to insert vertices and edges.
///
/// Invalid input (the reserved vertex `0`, a non-finite weight, a self-loop) and duplicate
/// edges are rejected silently: the graph stays untouched and `false` is returned.
pub trait GraphEdgeEditing: GraphNew {
    /// Adds the vertex `u`. Returns *true* exactly if `u` was not present previously.
    fn add_vertex(&mut self, u: Node) -> bool;

    /// Adds the edge `(u, v)` with weight `weight`, adding missing endpoints.
    /// Undirected graphs store the edge in both directions.
    /// Returns *true* exactly if the edge was inserted.
    fn add_edge(&mut self, u: Node, v: Node, weight: Weight) -> bool;

    /// Adds the edge `(u, v)` with weight `1`
    fn add_unit_edge(&mut self, u: Node, v: Node) -> bool {
        self.add_edge(u, v, 1.0)
    }

    /// Adds all edges in the collection and returns the number of inserted edges
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) -> NumEdges {
        let mut inserted = 0;
        for WeightedEdge(u, v, w) in edges.into_iter().map(|e| e.into()) {
            inserted += self.add_edge(u, v, w) as NumEdges;
        }
        inserted
    }

    /// Adds all vertices in the collection
    fn add_vertices(&mut self, vertices: impl IntoIterator<Item = Node>) {
        for u in vertices {
            self.add_vertex(u);
        }
    }
}

/// A super trait for creating a graph from scratch from a set of edges
pub trait GraphFromScratch {
    /// Create a graph of the given orientation from an iterator over edges
    fn from_edges(directed: bool, edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) -> Self;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(directed: bool, edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) -> Self {
        let mut graph = Self::new(directed);
        graph.add_edges(edges);
        graph
    }
}

/// Cached degree statistics of a graph
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DegreeStatistics {
    /// Mean (out-)degree over all existing vertices
    pub average_degree: f64,
    /// Smallest (out-)degree
    pub min_degree: NumNodes,
    /// Largest (out-)degree
    pub max_degree: NumNodes,
    /// `distribution[d]` is the fraction of vertices with degree `d`
    pub distribution: Vec<f64>,
}

impl DegreeStatistics {
    /// Computes the statistics of `graph` from scratch.
    /// An empty graph yields all-zero statistics.
    pub fn compute<G: AdjacencyList>(graph: &G) -> Self {
        let n = graph.number_of_vertices();
        if n == 0 {
            return Self::default();
        }

        let max_degree = graph.max_degree();
        let mut distribution = vec![0.0; max_degree as usize + 1];
        let mut total: u64 = 0;
        for d in graph.degrees() {
            distribution[d as usize] += 1.0;
            total += d as u64;
        }
        distribution.iter_mut().for_each(|p| *p /= n as f64);

        Self {
            average_degree: total as f64 / n as f64,
            min_degree: graph.min_degree(),
            max_degree,
            distribution,
        }
    }

    /// Returns the fraction of vertices with degree `d`
    pub fn probability_of_degree(&self, d: NumNodes) -> f64 {
        self.distribution.get(d as usize).copied().unwrap_or(0.0)
    }
}

/// Graphs carrying a cache of their [`DegreeStatistics`]
pub trait GraphStatistics: AdjacencyList {
    /// Returns the statistics computed by the last call to
    /// [`GraphStatistics::calculate_degree_statistics`]
    fn degree_statistics(&self) -> &DegreeStatistics;

    /// Recomputes the cached statistics and returns them
    fn calculate_degree_statistics(&mut self) -> &DegreeStatistics;
}

/// Everything the algorithms in [`algo`](crate::algo) need to read from a graph
pub trait WeightedGraph: GraphType + AdjacencyList + AdjacencyTest {}

impl<G> WeightedGraph for G where G: GraphType + AdjacencyList + AdjacencyTest {}
