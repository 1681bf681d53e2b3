use std::collections::VecDeque;

/// Decides when a traversal settles the tree parent of a vertex
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ClaimPolicy {
    /// A vertex is claimed when it is first pushed; every vertex enters the frontier once
    OnPush,
    /// A vertex is claimed when it is first popped; it may sit in the frontier several times
    /// and later copies are skipped
    OnPop,
}

/// Abstraction for the traversal frontier data structure.
///
/// A `NodeSequencer` stores the "to be visited" items during a traversal.
/// Different implementations determine the traversal order:
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait NodeSequencer<T> {
    /// When vertices are claimed for the spanning tree
    const CLAIM: ClaimPolicy;

    /// Creates a new sequencer initialized with a single item.
    fn init(item: T) -> Self;

    /// Pushes an item into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next item from the frontier.
    fn pop(&mut self) -> Option<T>;
}

impl<T> NodeSequencer<T> for VecDeque<T> {
    const CLAIM: ClaimPolicy = ClaimPolicy::OnPush;

    fn init(item: T) -> Self {
        Self::from(vec![item])
    }
    fn push(&mut self, item: T) {
        self.push_back(item)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
}

impl<T> NodeSequencer<T> for Vec<T> {
    const CLAIM: ClaimPolicy = ClaimPolicy::OnPop;

    fn init(item: T) -> Self {
        vec![item]
    }
    fn push(&mut self, item: T) {
        Vec::push(self, item)
    }
    fn pop(&mut self) -> Option<T> {
        Vec::pop(self)
    }
}
