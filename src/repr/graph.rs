/*!
# Adjacency Graph

[`Graph`] is the storage base shared by every backend: it keeps track of which vertex
identifiers exist, counts vertices and edges, knows its orientation and caches the
degree statistics. The actual adjacency data lives in one [`Neighborhood`] per vertex
index, so the backend is chosen by the `Nbs` type parameter:

- [`AdjList`]: per-vertex linked lists,
- [`AdjVector`]: per-vertex growable arrays,
- [`AdjMatrix`]: dense rows, i.e. an adjacency matrix.

Storage grows on demand: adding vertex `v` makes room for every identifier up to `v`.
*/

use bitvec::vec::BitVec;
use tracing::debug;

use super::*;
use crate::testing::test_graph_ops;

/// A weighted graph storing one [`Neighborhood`] per vertex index.
///
/// Index `0` is reserved and never exists. For undirected graphs every edge is stored in
/// the neighborhoods of both endpoints but counted once.
#[derive(Debug, Clone)]
pub struct Graph<Nbs>
where
    Nbs: Neighborhood,
{
    nbs: Vec<Nbs>,
    existing: BitVec,
    bound: usize,
    num_vertices: NumNodes,
    num_edges: NumEdges,
    directed: bool,
    statistics: DegreeStatistics,
}

/// Graph using linked lists for every neighborhood.
pub type AdjList = Graph<ListNeighborhood>;

/// Graph using growable arrays for every neighborhood.
pub type AdjVector = Graph<VecNeighborhood>;

/// Graph using a dense adjacency matrix.
pub type AdjMatrix = Graph<MatrixNeighborhood>;

impl<Nbs: Neighborhood> Graph<Nbs> {
    /// Creates an empty graph with storage for vertex identifiers up to `capacity`
    pub fn with_capacity(directed: bool, capacity: usize) -> Self {
        let mut graph = Self::new(directed);
        graph.grow_to(capacity + 1);
        graph
    }

    /// Ensures that identifiers below `bound` can be stored
    fn grow_to(&mut self, bound: usize) {
        if bound <= self.nbs.len() {
            return;
        }

        // amortize the cost of widening dense rows
        let capacity = bound.max(2 * self.nbs.len());
        self.existing.resize(capacity, false);
        for nbs in &mut self.nbs {
            nbs.reserve_nodes(capacity);
        }
        self.nbs.resize_with(capacity, || Nbs::new(capacity));
    }

    /// Returns the neighborhood of `u` if `u` exists
    fn neighborhood(&self, u: Node) -> Option<&Nbs> {
        self.exists(u).then(|| &self.nbs[u as usize])
    }
}

impl<Nbs: Neighborhood> GraphType for Graph<Nbs> {
    fn is_directed(&self) -> bool {
        self.directed
    }
}

impl<Nbs: Neighborhood> GraphNodeOrder for Graph<Nbs> {
    fn number_of_vertices(&self) -> NumNodes {
        self.num_vertices
    }

    fn vertex_bound(&self) -> usize {
        self.bound
    }

    fn exists(&self, u: Node) -> bool {
        let u = u as usize;
        u < self.existing.len() && self.existing[u]
    }

    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.existing.iter_ones().map(|u| u as Node)
    }
}

impl<Nbs: Neighborhood> GraphEdgeOrder for Graph<Nbs> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<Nbs: Neighborhood> AdjacencyList for Graph<Nbs> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.neighborhood(u).into_iter().flat_map(|nbs| nbs.neighbors())
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.neighborhood(u).map_or(0, |nbs| nbs.num_of_neighbors())
    }
}

impl<Nbs: Neighborhood> AdjacencyTest for Graph<Nbs> {
    fn weight(&self, u: Node, v: Node) -> Option<Weight> {
        let nbs = self.neighborhood(u)?;
        if u == v {
            Some(0.0)
        } else {
            nbs.weight_of(v)
        }
    }
}

impl<Nbs: Neighborhood> GraphNew for Graph<Nbs> {
    fn new(directed: bool) -> Self {
        Self {
            nbs: Vec::new(),
            existing: BitVec::new(),
            bound: 0,
            num_vertices: 0,
            num_edges: 0,
            directed,
            statistics: DegreeStatistics::default(),
        }
    }
}

impl<Nbs: Neighborhood> GraphEdgeEditing for Graph<Nbs> {
    fn add_vertex(&mut self, u: Node) -> bool {
        if !is_valid_node(u) {
            debug!(vertex = u, "rejected reserved vertex identifier");
            return false;
        }

        let idx = u as usize;
        self.grow_to(idx + 1);
        if self.existing.replace(idx, true) {
            return false;
        }

        self.bound = self.bound.max(idx + 1);
        self.num_vertices += 1;
        true
    }

    fn add_edge(&mut self, u: Node, v: Node, weight: Weight) -> bool {
        if !is_valid_node(u) || !is_valid_node(v) || !is_valid_weight(weight) || u == v {
            debug!(u, v, weight, "rejected invalid edge");
            return false;
        }

        if self.exists(u) && self.nbs[u as usize].has_neighbor(v) {
            return false;
        }

        self.add_vertex(u);
        self.add_vertex(v);

        self.nbs[u as usize].add_neighbor(v, weight);
        if !self.directed {
            self.nbs[v as usize].add_neighbor(u, weight);
        }
        self.num_edges += 1;
        true
    }
}

impl<Nbs: Neighborhood> GraphStatistics for Graph<Nbs> {
    fn degree_statistics(&self) -> &DegreeStatistics {
        &self.statistics
    }

    fn calculate_degree_statistics(&mut self) -> &DegreeStatistics {
        self.statistics = DegreeStatistics::compute(self);
        &self.statistics
    }
}

test_graph_ops!(adj_list_undir, AdjList, false);
test_graph_ops!(adj_list_dir, AdjList, true);
test_graph_ops!(adj_vector_undir, AdjVector, false);
test_graph_ops!(adj_vector_dir, AdjVector, true);
test_graph_ops!(adj_matrix_undir, AdjMatrix, false);
test_graph_ops!(adj_matrix_dir, AdjMatrix, true);
