use std::collections::LinkedList;

use bitvec::vec::BitVec;

use super::*;

/// Trait for methods on the Neighborhood of a specified vertex
pub trait Neighborhood: Clone + std::fmt::Debug {
    /// Creates an empty Neighborhood for vertex identifiers below `bound`
    fn new(bound: usize) -> Self;

    /// Returns the number of neighbors in the Neighborhood
    fn num_of_neighbors(&self) -> NumNodes;

    /// Returns an iterator over all `(neighbor, weight)` pairs in the Neighborhood
    fn neighbors(&self) -> impl Iterator<Item = (Node, Weight)> + '_;

    /// Returns the weight towards `v` if `v` is in the Neighborhood
    fn weight_of(&self, v: Node) -> Option<Weight> {
        self.neighbors().find(|&(u, _)| u == v).map(|(_, w)| w)
    }

    /// Returns *true* if `v` is in the Neighborhood
    fn has_neighbor(&self, v: Node) -> bool {
        self.weight_of(v).is_some()
    }

    /// Tries to add a neighbor to the Neighborhood.
    /// Returns *true* if the vertex was in the Neighborhood before (the weight is kept).
    fn try_add_neighbor(&mut self, v: Node, weight: Weight) -> bool {
        if self.has_neighbor(v) {
            true
        } else {
            self.add_neighbor(v, weight);
            false
        }
    }

    /// Adds a neighbor without checking if it exists beforehand.
    /// For some implementations, this might lead to Multi-Edges
    fn add_neighbor(&mut self, v: Node, weight: Weight);

    /// Informs the Neighborhood that identifiers up to `bound - 1` may now be used.
    /// Only dense representations need to act on this.
    fn reserve_nodes(&mut self, _bound: usize) {}

    /// Removes all neighbors in the Neighborhood
    fn clear(&mut self);
}

/// Neighborhood stored as a linked list; neighbors are reported in insertion order
#[derive(Debug, Clone, Default)]
pub struct ListNeighborhood(LinkedList<(Node, Weight)>);

impl Neighborhood for ListNeighborhood {
    fn new(_bound: usize) -> Self {
        Self::default()
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    fn neighbors(&self) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.0.iter().copied()
    }

    fn add_neighbor(&mut self, v: Node, weight: Weight) {
        self.0.push_back((v, weight));
    }

    fn clear(&mut self) {
        self.0.clear()
    }
}

/// Neighborhood stored as a growable array; neighbors are reported in insertion order
#[derive(Debug, Clone, Default)]
pub struct VecNeighborhood(Vec<(Node, Weight)>);

impl Neighborhood for VecNeighborhood {
    fn new(_bound: usize) -> Self {
        Self::default()
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    fn neighbors(&self) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.0.iter().copied()
    }

    fn add_neighbor(&mut self, v: Node, weight: Weight) {
        self.0.push((v, weight));
    }

    fn clear(&mut self) {
        self.0.clear()
    }
}

impl VecNeighborhood {
    /// Returns a slice-reference of the Neighborhood
    pub fn as_slice(&self) -> &[(Node, Weight)] {
        &self.0
    }
}

/// One row of a dense adjacency matrix: a presence bit and a weight per possible neighbor.
/// Neighbors are reported in ascending order.
#[derive(Debug, Clone, Default)]
pub struct MatrixNeighborhood {
    present: BitVec,
    weights: Vec<Weight>,
    degree: NumNodes,
}

impl Neighborhood for MatrixNeighborhood {
    fn new(bound: usize) -> Self {
        Self {
            present: BitVec::repeat(false, bound),
            weights: vec![0.0; bound],
            degree: 0,
        }
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.degree
    }

    fn neighbors(&self) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.present
            .iter_ones()
            .map(|v| (v as Node, self.weights[v]))
    }

    fn weight_of(&self, v: Node) -> Option<Weight> {
        let v = v as usize;
        (v < self.present.len() && self.present[v]).then(|| self.weights[v])
    }

    fn add_neighbor(&mut self, v: Node, weight: Weight) {
        let idx = v as usize;
        if idx >= self.present.len() {
            self.reserve_nodes(idx + 1);
        }

        if !self.present.replace(idx, true) {
            self.degree += 1;
        }
        self.weights[idx] = weight;
    }

    fn reserve_nodes(&mut self, bound: usize) {
        if bound > self.present.len() {
            self.present.resize(bound, false);
            self.weights.resize(bound, 0.0);
        }
    }

    fn clear(&mut self) {
        self.present.fill(false);
        self.degree = 0;
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    fn check_neighborhood<N: Neighborhood>(sorted: bool) {
        let mut nbs = N::new(4);
        assert_eq!(nbs.num_of_neighbors(), 0);
        assert!(!nbs.try_add_neighbor(3, 1.5));
        assert!(!nbs.try_add_neighbor(1, 2.0));
        assert!(!nbs.try_add_neighbor(7, 0.5));
        assert!(nbs.try_add_neighbor(3, 9.0));

        assert_eq!(nbs.num_of_neighbors(), 3);
        assert_eq!(nbs.weight_of(3), Some(1.5));
        assert_eq!(nbs.weight_of(2), None);
        assert_eq!(nbs.weight_of(100), None);

        let order = nbs.neighbors().map(|(v, _)| v).collect_vec();
        if sorted {
            assert_eq!(order, vec![1, 3, 7]);
        } else {
            assert_eq!(order, vec![3, 1, 7]);
        }

        nbs.clear();
        assert_eq!(nbs.num_of_neighbors(), 0);
        assert_eq!(nbs.neighbors().count(), 0);
    }

    #[test]
    fn list_neighborhood() {
        check_neighborhood::<ListNeighborhood>(false);
    }

    #[test]
    fn vec_neighborhood() {
        check_neighborhood::<VecNeighborhood>(false);
    }

    #[test]
    fn matrix_neighborhood() {
        check_neighborhood::<MatrixNeighborhood>(true);
    }

    #[test]
    fn matrix_row_widens() {
        let mut row = MatrixNeighborhood::new(2);
        row.reserve_nodes(10);
        row.add_neighbor(9, 4.0);
        assert_eq!(row.weight_of(9), Some(4.0));
        assert_eq!(row.num_of_neighbors(), 1);
    }
}
