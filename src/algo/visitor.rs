use super::*;

/// Observer of a single-source traversal.
///
/// `depth` is the number of tree edges between the root and the vertex; `distance` is the
/// algorithm's notion of distance (the summed tree weight for BFS, DFS and Dijkstra, the weight
/// of the connecting edge for Prim). All methods default to no-ops, and `()` is the visitor
/// that observes nothing.
pub trait Visitor {
    /// Called the first time `v` enters the frontier
    fn on_vertex_found(&mut self, _v: Node, _depth: NumNodes, _distance: Weight) {}

    /// Called once `v` leaves the frontier and becomes part of the tree
    fn on_vertex_visited(&mut self, _v: Node, _depth: NumNodes, _distance: Weight) {}

    /// Checked before every frontier element is processed; returning *true* ends the traversal.
    ///
    /// Traversals that claim vertices when they are pushed (BFS) have already put the root into
    /// the tree at the first check, so stopping right away yields a tree holding only the root
    /// although `on_vertex_visited` never fired for it. Traversals claiming on pop (DFS,
    /// Dijkstra, Prim) return an empty tree in that case.
    fn stop(&mut self) -> bool {
        false
    }
}

impl Visitor for () {}

impl<V: Visitor + ?Sized> Visitor for &mut V {
    fn on_vertex_found(&mut self, v: Node, depth: NumNodes, distance: Weight) {
        (**self).on_vertex_found(v, depth, distance)
    }

    fn on_vertex_visited(&mut self, v: Node, depth: NumNodes, distance: Weight) {
        (**self).on_vertex_visited(v, depth, distance)
    }

    fn stop(&mut self) -> bool {
        (**self).stop()
    }
}

type VertexCallback<'a> = Box<dyn FnMut(Node, NumNodes, Weight) + 'a>;

/// A [`Visitor`] assembled from optional closures.
///
/// ```rust
/// use wgraphs::{prelude::*, algo::*};
///
/// let graph = AdjVector::from_edges(false, [(1, 2), (2, 3), (3, 4)]);
/// let mut order = Vec::new();
/// let mut visited = 0;
///
/// graph.bfs_with(
///     1,
///     Callbacks::new()
///         .on_visited(|v, _, _| order.push(v))
///         .stop_when(|| { visited += 1; visited > 2 }),
/// );
/// assert_eq!(order, vec![1, 2]);
/// ```
#[derive(Default)]
pub struct Callbacks<'a> {
    found: Option<VertexCallback<'a>>,
    visited: Option<VertexCallback<'a>>,
    stop: Option<Box<dyn FnMut() -> bool + 'a>>,
}

impl<'a> Callbacks<'a> {
    /// Creates callbacks that do nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the callback for newly found vertices
    pub fn on_found<F: FnMut(Node, NumNodes, Weight) + 'a>(mut self, f: F) -> Self {
        self.found = Some(Box::new(f));
        self
    }

    /// Sets the callback for visited vertices
    pub fn on_visited<F: FnMut(Node, NumNodes, Weight) + 'a>(mut self, f: F) -> Self {
        self.visited = Some(Box::new(f));
        self
    }

    /// Sets the early-termination predicate
    pub fn stop_when<F: FnMut() -> bool + 'a>(mut self, f: F) -> Self {
        self.stop = Some(Box::new(f));
        self
    }
}

impl Visitor for Callbacks<'_> {
    fn on_vertex_found(&mut self, v: Node, depth: NumNodes, distance: Weight) {
        if let Some(f) = self.found.as_mut() {
            f(v, depth, distance);
        }
    }

    fn on_vertex_visited(&mut self, v: Node, depth: NumNodes, distance: Weight) {
        if let Some(f) = self.visited.as_mut() {
            f(v, depth, distance);
        }
    }

    fn stop(&mut self) -> bool {
        self.stop.as_mut().is_some_and(|f| f())
    }
}
