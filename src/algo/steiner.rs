/*!
# Steiner Trees

Given a set of optional *Steiner vertices*, every other vertex of the graph is a *terminal* that
must be connected. Both algorithms hide Steiner vertices with a [`SubgraphView`] and compute a
minimum spanning tree (Prim) of what remains; a choice is feasible if that tree reaches every
terminal.

- The heuristic starts from the spanning tree of the whole graph and greedily hides one Steiner
  vertex at a time, keeping the removal if the tree stays feasible and does not get heavier.
  After every solve, Steiner vertices that ended up as leaves are hidden as well and the tree is
  recomputed, so no tree it returns has a Steiner leaf.
- The exhaustive search tries every subset of Steiner vertices and keeps the lightest feasible
  tree. It is exponential and limited to [`MAX_EXHAUSTIVE_STEINER_VERTICES`].
*/

use itertools::Itertools;
use tracing::debug;

use super::*;

/// Largest number of Steiner vertices accepted by
/// [`SteinerTree::steiner_tree_branch_and_bound`]
pub const MAX_EXHAUSTIVE_STEINER_VERTICES: usize = 24;

/// Steiner vertices and terminals of a problem instance, both sorted
struct SteinerInstance {
    steiner: Vec<Node>,
    terminals: Vec<Node>,
}

impl SteinerInstance {
    fn new<G: GraphNodeOrder>(graph: &G, steiner: &[Node]) -> Self {
        let steiner = steiner
            .iter()
            .copied()
            .filter(|&s| graph.exists(s))
            .sorted()
            .dedup()
            .collect_vec();
        let terminals = graph
            .vertices()
            .filter(|v| steiner.binary_search(v).is_err())
            .collect_vec();
        Self { steiner, terminals }
    }

    fn is_terminal(&self, v: Node) -> bool {
        self.terminals.binary_search(&v).is_ok()
    }

    /// Computes the spanning tree from `root` with `hidden` removed; `None` if it misses a terminal
    fn solve<'a, G>(
        &self,
        graph: &'a G,
        hidden: &[Node],
        root: Node,
    ) -> AlgoResult<Option<(SpanningTree<'a, G>, Weight)>>
    where
        G: WeightedGraph,
    {
        let view = SubgraphView::without(graph, hidden.iter().copied());
        let tree = view.prim(Some(root))?;
        if !self.terminals.iter().all(|&t| tree.contains(t)) {
            return Ok(None);
        }

        let weight = tree.weight();
        Ok(Some((tree.rebind(graph), weight)))
    }

    /// Like [`SteinerInstance::solve`], but keeps hiding Steiner vertices of degree at most one
    /// in the resulting tree (adding them to `hidden`) until none is left
    fn solve_pruned<'a, G>(
        &self,
        graph: &'a G,
        hidden: &mut Vec<Node>,
        root: Node,
    ) -> AlgoResult<Option<(SpanningTree<'a, G>, Weight)>>
    where
        G: WeightedGraph,
    {
        loop {
            let Some((tree, weight)) = self.solve(graph, hidden, root)? else {
                return Ok(None);
            };

            let degrees = tree.tree_degrees();
            let leaves = self
                .steiner
                .iter()
                .copied()
                .filter(|&s| tree.contains(s) && degrees[s as usize] <= 1)
                .collect_vec();
            if leaves.is_empty() {
                return Ok(Some((tree, weight)));
            }
            hidden.extend(leaves);
        }
    }
}

/// Steiner tree algorithms, implemented on every undirected graph
pub trait SteinerTree: WeightedGraph {
    /// Greedy Steiner tree rooted at `initial` (or at the smallest terminal if `initial` is not
    /// a terminal). Every Steiner vertex of the result has at least two tree neighbors.
    ///
    /// Fails with [`AlgoError::DirectedGraph`] for directed graphs and with
    /// [`AlgoError::DisconnectedTerminals`] if the terminals are not connected. Without
    /// terminals, the tree is empty.
    fn steiner_tree_heuristic(&self, initial: Node, steiner: &[Node]) -> AlgoResult<SpanningTree<'_, Self>> {
        if self.is_directed() {
            return Err(AlgoError::DirectedGraph);
        }

        let instance = SteinerInstance::new(self, steiner);
        let Some(&first) = instance.terminals.first() else {
            return Ok(SpanningTree::new(self, initial));
        };
        let root = if instance.is_terminal(initial) { initial } else { first };

        let mut hidden = Vec::new();
        let (mut best, mut best_weight) = instance
            .solve_pruned(self, &mut hidden, root)?
            .ok_or(AlgoError::DisconnectedTerminals)?;

        loop {
            let mut changed = false;

            for &s in &instance.steiner {
                if !best.contains(s) {
                    continue;
                }

                let mut candidate = hidden.clone();
                candidate.push(s);
                if let Some((tree, weight)) = instance.solve_pruned(self, &mut candidate, root)? {
                    if weight <= best_weight {
                        best = tree;
                        best_weight = weight;
                        hidden = candidate;
                        changed = true;
                    }
                }
            }

            if !changed {
                break;
            }
        }

        debug!(
            weight = best_weight,
            removed = hidden.len(),
            "steiner tree heuristic finished"
        );
        Ok(best)
    }

    /// Lightest Steiner tree over all subsets of `steiner`, rooted at the smallest terminal.
    ///
    /// Fails with [`AlgoError::TooManySteinerVertices`] if more than
    /// [`MAX_EXHAUSTIVE_STEINER_VERTICES`] Steiner vertices exist, and otherwise like
    /// [`SteinerTree::steiner_tree_heuristic`].
    fn steiner_tree_branch_and_bound(&self, steiner: &[Node]) -> AlgoResult<SpanningTree<'_, Self>> {
        if self.is_directed() {
            return Err(AlgoError::DirectedGraph);
        }

        let instance = SteinerInstance::new(self, steiner);
        let k = instance.steiner.len();
        if k > MAX_EXHAUSTIVE_STEINER_VERTICES {
            return Err(AlgoError::TooManySteinerVertices {
                count: k,
                max: MAX_EXHAUSTIVE_STEINER_VERTICES,
            });
        }

        let Some(&root) = instance.terminals.first() else {
            return Ok(SpanningTree::new(self, RESERVED_NODE));
        };

        let mut best: Option<(SpanningTree<'_, Self>, Weight)> = None;
        let mut hidden = Vec::with_capacity(k);
        for included in 0..1u64 << k {
            hidden.clear();
            hidden.extend(
                instance
                    .steiner
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| included & (1 << i) == 0)
                    .map(|(_, &s)| s),
            );

            if let Some((tree, weight)) = instance.solve(self, &hidden, root)? {
                if best.as_ref().is_none_or(|(_, w)| weight < *w) {
                    best = Some((tree, weight));
                }
            }
        }

        let (tree, weight) = best.ok_or(AlgoError::DisconnectedTerminals)?;
        debug!(weight, subsets = 1u64 << k, "exhaustive steiner tree finished");
        Ok(tree)
    }
}

impl<G: WeightedGraph> SteinerTree for G {}
