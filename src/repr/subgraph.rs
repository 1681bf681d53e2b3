use bitvec::vec::BitVec;

use super::*;

/// A read-only view of a graph with some vertices hidden.
///
/// Hidden vertices do not exist in the view and every edge incident to them is skipped.
/// The view borrows the underlying graph, so no adjacency data is copied.
#[derive(Clone)]
pub struct SubgraphView<'a, G> {
    graph: &'a G,
    hidden: BitVec,
    num_hidden: NumNodes,
}

impl<'a, G> SubgraphView<'a, G>
where
    G: GraphNodeOrder,
{
    /// Creates a view showing all vertices of `graph`
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            hidden: graph.vertex_bitset_unset(),
            num_hidden: 0,
        }
    }

    /// Creates a view hiding all vertices in `hidden`
    pub fn without<I>(graph: &'a G, hidden: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        let mut view = Self::new(graph);
        view.hide_all(hidden);
        view
    }

    /// Hides `u`. Returns *true* if `u` was visible before.
    pub fn hide(&mut self, u: Node) -> bool {
        if !self.graph.exists(u) || self.hidden.replace(u as usize, true) {
            return false;
        }
        self.num_hidden += 1;
        true
    }

    /// Hides every vertex in the collection
    pub fn hide_all<I>(&mut self, us: I)
    where
        I: IntoIterator<Item = Node>,
    {
        for u in us {
            self.hide(u);
        }
    }

    /// Makes `u` visible again. Returns *true* if `u` was hidden before.
    pub fn show(&mut self, u: Node) -> bool {
        if !self.is_hidden(u) {
            return false;
        }
        self.hidden.set(u as usize, false);
        self.num_hidden -= 1;
        true
    }

    /// Returns *true* if `u` is a vertex of the underlying graph hidden by the view
    pub fn is_hidden(&self, u: Node) -> bool {
        self.hidden.get(u as usize).is_some_and(|b| *b)
    }

    /// Returns the underlying graph
    pub fn graph(&self) -> &'a G {
        self.graph
    }
}

impl<G: GraphType> GraphType for SubgraphView<'_, G> {
    fn is_directed(&self) -> bool {
        self.graph.is_directed()
    }
}

impl<G: GraphNodeOrder> GraphNodeOrder for SubgraphView<'_, G> {
    fn number_of_vertices(&self) -> NumNodes {
        self.graph.number_of_vertices() - self.num_hidden
    }

    fn vertex_bound(&self) -> usize {
        self.graph.vertex_bound()
    }

    fn exists(&self, u: Node) -> bool {
        self.graph.exists(u) && !self.is_hidden(u)
    }

    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.graph.vertices().filter(|&u| !self.is_hidden(u))
    }
}

impl<G: AdjacencyList> AdjacencyList for SubgraphView<'_, G> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        let visible = !self.is_hidden(u);
        self.graph
            .neighbors_of(u)
            .filter(move |&(v, _)| visible && !self.is_hidden(v))
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.neighbors_of(u).count() as NumNodes
    }
}

impl<G: AdjacencyTest> AdjacencyTest for SubgraphView<'_, G> {
    fn weight(&self, u: Node, v: Node) -> Option<Weight> {
        if self.is_hidden(u) || self.is_hidden(v) {
            None
        } else {
            self.graph.weight(u, v)
        }
    }
}

impl<G: AdjacencyList + GraphType> GraphEdgeOrder for SubgraphView<'_, G> {
    fn number_of_edges(&self) -> NumEdges {
        self.edges(self.is_undirected()).count() as NumEdges
    }
}
