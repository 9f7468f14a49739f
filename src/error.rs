use thiserror::Error;

/// A broken AVL invariant, as reported by [`Tree::check_invariants`][crate::Tree::check_invariants].
///
/// `depth` is the number of edges between the root and the offending node.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantError {
    /// A left subtree holds a value greater than its parent, or a right subtree holds a value
    /// less than its parent.
    #[error("subtree at depth {depth} holds a value on the wrong side of its parent")]
    OutOfOrder {
        /// Depth of the parent whose subtree is out of order.
        depth: usize,
    },

    /// A node's children differ in height by more than one.
    #[error("node at depth {depth} has balance factor {balance_factor}")]
    Unbalanced {
        /// Depth of the unbalanced node.
        depth: usize,
        /// Left height minus right height.
        balance_factor: isize,
    },

    /// A node's cached height disagrees with the heights of its children.
    #[error("node at depth {depth} stores height {stored} but its children imply {computed}")]
    HeightMismatch {
        /// Depth of the node with the stale height.
        depth: usize,
        /// The height cached in the node.
        stored: usize,
        /// The height implied by its children.
        computed: usize,
    },
}
