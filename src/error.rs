//! Errors raised when an algorithm's precondition on its input graph does not hold.
//!
//! Invalid vertices or weights passed to the graph itself are never errors; they are
//! rejected silently by [`GraphEdgeEditing`](crate::ops::GraphEdgeEditing).

use thiserror::Error;

use crate::*;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlgoError {
    /// Shortest-path search reached an edge with negative weight
    #[error("edge ({u}, {v}) has negative weight {weight}")]
    NegativeWeight { u: Node, v: Node, weight: Weight },

    /// The algorithm is only defined for undirected graphs
    #[error("algorithm requires an undirected graph")]
    DirectedGraph,

    /// No tree connects all terminal vertices
    #[error("terminal vertices are not connected")]
    DisconnectedTerminals,

    /// Exhaustive search was asked to enumerate too many subsets
    #[error("{count} Steiner vertices exceed the limit of {max} for exhaustive search")]
    TooManySteinerVertices { count: usize, max: usize },
}

pub type AlgoResult<T> = Result<T, AlgoError>;
