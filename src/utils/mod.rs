/*!
# Utilities

Container primitives consumed by the algorithms in [`algo`](crate::algo):
- [`NodeSequencer`]: the frontier of a traversal, a FIFO queue for BFS and a LIFO stack for DFS,
- [`IndexedHeap`]: a binary heap with decrease-key used by Dijkstra and Prim.

You probably do not need to interact with this module directly.
*/

mod heap;
mod sequencer;

pub use heap::*;
pub use sequencer::*;

/// Helper trait for probabilities
pub trait Probability {
    /// Returns *true* if the probability is valid (ie. between `0` and `1`)
    fn is_valid_probability(&self) -> bool;
}

impl Probability for f64 {
    fn is_valid_probability(&self) -> bool {
        (0.0..=1.0).contains(self)
    }
}
