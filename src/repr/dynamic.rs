/*!
# Runtime-selected Representation

[`DynGraph`] wraps one of the three backends, chosen at construction time through a
[`Representation`] tag, and forwards the whole graph contract to it.
*/

use std::{io::ErrorKind, str::FromStr};

use super::*;

/// Identifier for a storage backend
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum Representation {
    /// Per-vertex linked lists, see [`AdjList`]
    List,
    /// Per-vertex growable arrays, see [`AdjVector`]
    #[default]
    Vector,
    /// Dense adjacency matrix, see [`AdjMatrix`]
    Matrix,
}

impl FromStr for Representation {
    type Err = std::io::Error;

    fn from_str(s: &str) -> std::io::Result<Self> {
        match s.to_lowercase().as_str() {
            "list" => Ok(Representation::List),
            "vector" | "vec" => Ok(Representation::Vector),
            "matrix" => Ok(Representation::Matrix),
            _ => Err(std::io::Error::new(
                ErrorKind::InvalidInput,
                format!("Unknown Representation: {s}"),
            )),
        }
    }
}

impl std::fmt::Display for Representation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Representation::List => "list",
            Representation::Vector => "vector",
            Representation::Matrix => "matrix",
        })
    }
}

/// A graph whose backend is selected at runtime
#[derive(Debug, Clone)]
pub enum DynGraph {
    List(AdjList),
    Vector(AdjVector),
    Matrix(AdjMatrix),
}

impl DynGraph {
    /// Creates an empty graph using the given backend
    pub fn with_representation(representation: Representation, directed: bool) -> Self {
        match representation {
            Representation::List => DynGraph::List(AdjList::new(directed)),
            Representation::Vector => DynGraph::Vector(AdjVector::new(directed)),
            Representation::Matrix => DynGraph::Matrix(AdjMatrix::new(directed)),
        }
    }

    /// Returns the tag of the wrapped backend
    pub fn representation(&self) -> Representation {
        match self {
            DynGraph::List(_) => Representation::List,
            DynGraph::Vector(_) => Representation::Vector,
            DynGraph::Matrix(_) => Representation::Matrix,
        }
    }
}

/// Forwards a method call to the wrapped backend
macro_rules! dispatch {
    ($self:expr, $graph:ident => $body:expr) => {
        match $self {
            DynGraph::List($graph) => $body,
            DynGraph::Vector($graph) => $body,
            DynGraph::Matrix($graph) => $body,
        }
    };
}

/// Iterator over one of three backend-specific iterators
pub enum DynIter<L, V, M> {
    List(L),
    Vector(V),
    Matrix(M),
}

impl<T, L, V, M> Iterator for DynIter<L, V, M>
where
    L: Iterator<Item = T>,
    V: Iterator<Item = T>,
    M: Iterator<Item = T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match self {
            DynIter::List(it) => it.next(),
            DynIter::Vector(it) => it.next(),
            DynIter::Matrix(it) => it.next(),
        }
    }
}

impl GraphType for DynGraph {
    fn is_directed(&self) -> bool {
        dispatch!(self, g => g.is_directed())
    }
}

impl GraphNodeOrder for DynGraph {
    fn number_of_vertices(&self) -> NumNodes {
        dispatch!(self, g => g.number_of_vertices())
    }

    fn vertex_bound(&self) -> usize {
        dispatch!(self, g => g.vertex_bound())
    }

    fn exists(&self, u: Node) -> bool {
        dispatch!(self, g => g.exists(u))
    }

    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        match self {
            DynGraph::List(g) => DynIter::List(g.vertices()),
            DynGraph::Vector(g) => DynIter::Vector(g.vertices()),
            DynGraph::Matrix(g) => DynIter::Matrix(g.vertices()),
        }
    }
}

impl GraphEdgeOrder for DynGraph {
    fn number_of_edges(&self) -> NumEdges {
        dispatch!(self, g => g.number_of_edges())
    }
}

impl AdjacencyList for DynGraph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        match self {
            DynGraph::List(g) => DynIter::List(g.neighbors_of(u)),
            DynGraph::Vector(g) => DynIter::Vector(g.neighbors_of(u)),
            DynGraph::Matrix(g) => DynIter::Matrix(g.neighbors_of(u)),
        }
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        dispatch!(self, g => g.degree_of(u))
    }
}

impl AdjacencyTest for DynGraph {
    fn weight(&self, u: Node, v: Node) -> Option<Weight> {
        dispatch!(self, g => g.weight(u, v))
    }
}

impl GraphNew for DynGraph {
    /// Defaults to [`Representation::Vector`]
    fn new(directed: bool) -> Self {
        Self::with_representation(Representation::default(), directed)
    }
}

impl GraphEdgeEditing for DynGraph {
    fn add_vertex(&mut self, u: Node) -> bool {
        dispatch!(self, g => g.add_vertex(u))
    }

    fn add_edge(&mut self, u: Node, v: Node, weight: Weight) -> bool {
        dispatch!(self, g => g.add_edge(u, v, weight))
    }
}

impl GraphStatistics for DynGraph {
    fn degree_statistics(&self) -> &DegreeStatistics {
        dispatch!(self, g => g.degree_statistics())
    }

    fn calculate_degree_statistics(&mut self) -> &DegreeStatistics {
        dispatch!(self, g => g.calculate_degree_statistics())
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn parse_representation() {
        assert_eq!("list".parse::<Representation>().unwrap(), Representation::List);
        assert_eq!("Vector".parse::<Representation>().unwrap(), Representation::Vector);
        assert_eq!("MATRIX".parse::<Representation>().unwrap(), Representation::Matrix);
        assert!("csr".parse::<Representation>().is_err());

        for repr in [Representation::List, Representation::Vector, Representation::Matrix] {
            assert_eq!(repr.to_string().parse::<Representation>().unwrap(), repr);
        }
    }

    #[test]
    fn backends_agree() {
        let edges = [(3, 1, 2.0), (1, 2, 1.0), (2, 5, 4.0), (5, 3, 0.5)];

        let graphs = [Representation::List, Representation::Vector, Representation::Matrix]
            .map(|repr| {
                let mut graph = DynGraph::with_representation(repr, false);
                graph.add_edges(edges);
                assert_eq!(graph.representation(), repr);
                graph
            });

        for graph in &graphs {
            assert_eq!(graph.number_of_vertices(), 4);
            assert_eq!(graph.number_of_edges(), 4);
            assert_eq!(graph.vertices().collect_vec(), vec![1, 2, 3, 5]);
            assert_eq!(graph.weight(3, 5), Some(0.5));
            assert_eq!(
                graph.neighbors_of(1).sorted_by_key(|(v, _)| *v).collect_vec(),
                vec![(2, 1.0), (3, 2.0)]
            );
        }

        // list/vector report insertion order, the matrix ascending order
        assert_eq!(graphs[0].neighbors_of(3).map(|(v, _)| v).collect_vec(), vec![1, 5]);
        assert_eq!(graphs[1].neighbors_of(2).map(|(v, _)| v).collect_vec(), vec![1, 5]);
        assert_eq!(graphs[2].neighbors_of(5).map(|(v, _)| v).collect_vec(), vec![2, 3]);
    }
}
