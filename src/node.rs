/*!
# Node Representation

We choose `Node = u32` as almost all use-cases involve less than `2^32` vertices.
Vertices are identified by positive integers which double as storage indices; the
index `0` is reserved and never belongs to a graph. This lets us use `0` as a free
"no vertex" marker in parent arrays and color arrays without wrapping every entry
in an `Option`.
*/

/// Vertices can be any unsigned integer from `1` to `Node::MAX`
pub type Node = u32;

/// Reserved index that never denotes an existing vertex
pub const RESERVED_NODE: Node = 0;

/// There can be at most `2^32 - 1` vertices in a graph!
pub type NumNodes = Node;

/// Edge weights are plain `f64`s; non-finite weights are rejected on insertion
pub type Weight = f64;

/// Returns *true* if `u` can be used as a vertex identifier
#[inline]
pub const fn is_valid_node(u: Node) -> bool {
    u != RESERVED_NODE
}

/// Returns *true* if `w` can be stored as an edge weight
#[inline]
pub fn is_valid_weight(w: Weight) -> bool {
    w.is_finite()
}
