//! This crate exposes a self-balancing Binary Search Tree (an AVL tree).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value no greater than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value no less than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). BSTs also naturally support sorted
//! iteration by visiting the left subtree, then the subtree root, then the right subtree.
//!
//! ## AVL Trees
//!
//! Inserting values in ascending order into a plain BST builds a linked list with a
//! height of `N`. An AVL tree additionally keeps, for every `Node`, the heights of its
//! two subtrees within one of each other. Whenever an insert or delete breaks that,
//! the offending `Node` is "rotated" with one of its children on the way back up to
//! the root. This limits the height to about `1.44 * lg N`.
//!
//! ```
//! use avl::Tree;
//!
//! let tree: Tree<_> = (0..15).collect();
//!
//! assert_eq!(tree.height(), Some(3));
//! assert_eq!(tree.iter().count(), 15);
//! assert_eq!(tree.check_invariants(), Ok(()));
//! ```

#![deny(missing_docs)]

mod diagram;
mod error;
mod iter;
mod node;
mod tree;

pub use error::InvariantError;
pub use iter::Iter;
pub use node::Node;
pub use tree::Tree;
