use super::*;

/// A root-to-vertex path reconstructed from a [`SpanningTree`]
#[derive(Debug, Clone, PartialEq)]
pub struct TreePath {
    /// Vertices from the root to the target (both inclusive)
    pub vertices: Vec<Node>,
    /// Sum of the edge weights along the path
    pub distance: Weight,
    /// Number of edges on the path
    pub hops: NumNodes,
}

/// The result of a single-source traversal: parent pointers and depths of every vertex
/// reached from the root.
///
/// A tree borrows the graph it was computed on so it can look up edge weights; it can only be
/// created by the algorithms in this module.
#[derive(Debug, Clone)]
pub struct SpanningTree<'a, G> {
    graph: &'a G,
    root: Node,
    /// `RESERVED_NODE` for vertices not in the tree, the root is its own parent
    parents: Vec<Node>,
    depths: Vec<NumNodes>,
    len: NumNodes,
}

impl<'a, G> SpanningTree<'a, G>
where
    G: GraphNodeOrder,
{
    /// Creates a tree without any vertices yet
    pub(crate) fn new(graph: &'a G, root: Node) -> Self {
        Self {
            graph,
            root,
            parents: vec![RESERVED_NODE; graph.vertex_bound()],
            depths: vec![0; graph.vertex_bound()],
            len: 0,
        }
    }

    /// Adds `v` as a child of `parent`; the root passes itself as parent
    pub(crate) fn claim(&mut self, v: Node, parent: Node, depth: NumNodes) {
        debug_assert!(!self.contains(v));
        self.parents[v as usize] = parent;
        self.depths[v as usize] = depth;
        self.len += 1;
    }
}

impl<'a, G> SpanningTree<'a, G> {
    /// Returns the vertex the traversal started from
    pub fn root(&self) -> Node {
        self.root
    }

    /// Returns the number of vertices in the tree
    pub fn len(&self) -> NumNodes {
        self.len
    }

    /// Returns *true* if the tree has no vertices, i.e. the root did not exist
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns *true* if `v` was reached by the traversal
    pub fn contains(&self, v: Node) -> bool {
        self.parents
            .get(v as usize)
            .is_some_and(|&p| p != RESERVED_NODE)
    }

    /// Returns the parent of `v`, or `None` for the root and vertices not in the tree
    pub fn parent_of(&self, v: Node) -> Option<Node> {
        self.parents
            .get(v as usize)
            .copied()
            .filter(|&p| p != RESERVED_NODE && p != v)
    }

    /// Returns the number of tree edges between the root and `v`
    pub fn depth_of(&self, v: Node) -> Option<NumNodes> {
        self.contains(v).then(|| self.depths[v as usize])
    }

    /// Returns all vertices of the tree in ascending order
    pub fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.parents
            .iter()
            .enumerate()
            .filter(|(_, p)| **p != RESERVED_NODE)
            .map(|(v, _)| v as Node)
    }

    /// Returns the graph the tree was computed on
    pub fn graph(&self) -> &'a G {
        self.graph
    }

    /// Moves the tree onto `graph`, which must contain every tree edge with the same vertex
    /// identifiers (e.g. the full graph underneath a [`SubgraphView`]).
    pub fn rebind<'b, H>(self, graph: &'b H) -> SpanningTree<'b, H> {
        SpanningTree {
            graph,
            root: self.root,
            parents: self.parents,
            depths: self.depths,
            len: self.len,
        }
    }
}

impl<G> SpanningTree<'_, G>
where
    G: AdjacencyTest,
{
    /// Returns all tree edges `(parent, child, weight)` in ascending order of the child
    pub fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.vertices().filter_map(|v| {
            let p = self.parent_of(v)?;
            Some(WeightedEdge(p, v, self.graph.weight(p, v)?))
        })
    }

    /// Returns the sum of all tree edge weights
    pub fn weight(&self) -> Weight {
        self.edges().map(|e| e.weight()).sum()
    }

    /// Returns the number of tree neighbors (parent and children) of every vertex, indexed by vertex
    pub fn tree_degrees(&self) -> Vec<NumNodes> {
        let mut degrees = vec![0; self.parents.len()];
        for v in self.vertices() {
            if let Some(p) = self.parent_of(v) {
                degrees[p as usize] += 1;
                degrees[v as usize] += 1;
            }
        }
        degrees
    }

    /// Reconstructs the path from the root to `v` by following parent pointers.
    /// Returns `None` if `v` is not in the tree.
    pub fn path_to(&self, v: Node) -> Option<TreePath> {
        if !self.contains(v) {
            return None;
        }

        let mut vertices = vec![v];
        let mut distance = 0.0;
        let mut u = v;
        while let Some(p) = self.parent_of(u) {
            distance += self.graph.weight(p, u)?;
            vertices.push(p);
            u = p;
        }
        vertices.reverse();

        Some(TreePath {
            hops: vertices.len() as NumNodes - 1,
            vertices,
            distance,
        })
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn manual_tree() {
        let graph = AdjVector::from_edges(false, [(1, 2, 1.5), (2, 3, 2.0), (1, 4, 4.0), (5, 6, 1.0)]);
        let mut tree = SpanningTree::new(&graph, 1);
        assert!(tree.is_empty());
        assert_eq!(tree.path_to(1), None);

        tree.claim(1, 1, 0);
        tree.claim(2, 1, 1);
        tree.claim(4, 1, 1);
        tree.claim(3, 2, 2);

        assert_eq!(tree.root(), 1);
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.vertices().collect_vec(), vec![1, 2, 3, 4]);
        assert_eq!(tree.parent_of(1), None);
        assert_eq!(tree.parent_of(3), Some(2));
        assert_eq!(tree.parent_of(5), None);
        assert_eq!(tree.depth_of(3), Some(2));
        assert_eq!(tree.depth_of(6), None);
        assert!(!tree.contains(100));

        assert_eq!(
            tree.edges().collect_vec(),
            vec![WeightedEdge(1, 2, 1.5), WeightedEdge(2, 3, 2.0), WeightedEdge(1, 4, 4.0)]
        );
        assert_eq!(tree.weight(), 7.5);
        assert_eq!(tree.tree_degrees()[1..5], [2, 2, 1, 1]);

        assert_eq!(
            tree.path_to(3),
            Some(TreePath {
                vertices: vec![1, 2, 3],
                distance: 3.5,
                hops: 2
            })
        );
        assert_eq!(tree.path_to(1).map(|p| p.hops), Some(0));
        assert_eq!(tree.path_to(5), None);
    }
}
