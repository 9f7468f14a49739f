//! A self-balancing Binary Search Tree (specifically, an AVL tree) of single values.
//!
//! # Examples
//!
//! ```
//! use avl::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! tree.insert(1);
//! assert!(tree.contains(&1));
//!
//! // Duplicates are allowed and each one is removed separately.
//! tree.insert(1);
//! assert_eq!(tree.len(), 2);
//!
//! // Removing a value returns it.
//! assert_eq!(tree.remove(&1), Some(1));
//! assert!(tree.contains(&1));
//! assert_eq!(tree.remove(&1), Some(1));
//! assert!(!tree.contains(&1));
//!
//! // Removing something that isn't there does nothing.
//! assert_eq!(tree.remove(&1), None);
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::diagram;
use crate::error::InvariantError;
use crate::iter::Iter;
use crate::node::{Link, Node};

/// A self-balancing Binary Search Tree (specifically, an AVL tree). After every [`insert`] and
/// [`remove`] the heights of every node's two subtrees differ by at most one, so searching takes
/// `O(lg N)` comparisons.
///
/// Equal values are allowed. A value equal to an existing one is inserted into that node's right
/// subtree.
///
/// A `Tree` owns all of its nodes and is not internally synchronized. Share it across threads
/// behind a lock (e.g. `Mutex<Tree<T>>`) if it needs to be mutated concurrently. Cloning a `Tree`
/// copies every node.
///
/// [`insert`]: Tree::insert
/// [`remove`]: Tree::remove
#[derive(Clone, Debug)]
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of values in the tree, counting duplicates.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// The root node, if the tree isn't empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// The height of the tree, or `None` if it is empty. A tree with one value has a height of 0.
    pub fn height(&self) -> Option<usize> {
        self.root().map(Node::height)
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        self.root().map(Node::min)
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        self.root().map(Node::max)
    }

    /// Calls `visit` on every value in ascending order.
    pub fn traverse_in_order<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        if let Some(root) = self.root() {
            root.traverse_in_order(visit);
        }
    }

    /// Calls `visit` on every value, each node before its subtrees.
    pub fn traverse_pre_order<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        if let Some(root) = self.root() {
            root.traverse_pre_order(visit);
        }
    }

    /// Calls `visit` on every value, each node after its subtrees.
    pub fn traverse_post_order<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        if let Some(root) = self.root() {
            root.traverse_post_order(visit);
        }
    }

    /// An iterator over the values in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3, 3, 5, 8]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root(), self.len)
    }
}

impl<T: Ord> Tree<T> {
    /// Inserts the given value into the tree. Inserting a value equal to one already in the tree
    /// keeps both.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in 0..15 {
    ///     tree.insert(x);
    /// }
    ///
    /// // Ascending inserts would make a plain BST a linked list.
    /// assert_eq!(tree.height(), Some(3));
    /// ```
    pub fn insert(&mut self, value: T) {
        self.root = Some(insert(self.root.take(), value));
        self.len += 1;
    }

    /// Whether any value in the tree is equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let tree: Tree<_> = [3, 1, 4, 0, 2, 5].into_iter().collect();
    ///
    /// assert!(tree.contains(&5));
    /// assert!(!tree.contains(&9));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right(),
            };
        }

        false
    }

    /// Removes one value equal to `value` from the tree and returns it. If the tree does not
    /// contain such a value, nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree: Tree<_> = [3, 1, 4, 0, 2, 5].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&3), Some(3));
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 4, 5]);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let (root, removed) = remove(self.root.take(), value);
        self.root = root;

        if removed.is_some() {
            self.len -= 1;
        } else {
            debug!(len = self.len, "nothing to remove");
        }
        removed
    }

    /// Walks the whole tree and reports the first node that breaks the ordering, balance, or
    /// height invariants. A tree built only through this type's methods always passes.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        match self.root() {
            Some(root) => check_node(root, 0),
            None => Ok(()),
        }
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => diagram::write_diagram(f, root),
            None => f.write_str("Empty Tree"),
        }
    }
}

/// Inserts `value` into the subtree and returns the subtree's new root.
fn insert<T: Ord>(link: Link<T>, value: T) -> Box<Node<T>> {
    let Some(mut node) = link else {
        return Box::new(Node::new(value));
    };

    if value < node.value {
        node.left = Some(insert(node.left.take(), value));
    } else {
        node.right = Some(insert(node.right.take(), value));
    }

    rebalance(node)
}

/// Removes one value equal to `value` from the subtree. Returns the subtree's new root and the
/// removed value, if one was found.
fn remove<T: Ord>(link: Link<T>, value: &T) -> (Link<T>, Option<T>) {
    let Some(mut node) = link else {
        return (None, None);
    };

    let removed = match value.cmp(&node.value) {
        Ordering::Less => {
            let (new_left, removed) = remove(node.left.take(), value);
            node.left = new_left;
            removed
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, None) => return (None, Some(node.value)),
            (None, Some(right)) => return (Some(right), Some(node.value)),
            (Some(left), None) => return (Some(left), Some(node.value)),

            // With two children we keep this node and overwrite its value with its successor.
            // That is, the smallest value in the right subtree.
            (Some(left), Some(right)) => {
                let (new_right, successor) = take_min(right);
                node.left = Some(left);
                node.right = new_right;
                Some(std::mem::replace(&mut node.value, successor))
            }
        },
        Ordering::Greater => {
            let (new_right, removed) = remove(node.right.take(), value);
            node.right = new_right;
            removed
        }
    };

    (Some(rebalance(node)), removed)
}

/// Detaches the leftmost node of the subtree. Returns what is left of the subtree and the
/// detached value.
fn take_min<T>(mut node: Box<Node<T>>) -> (Link<T>, T) {
    match node.left.take() {
        // The leftmost node has at most a right child, which takes its place.
        None => (node.right.take(), node.value),
        Some(left) => {
            let (new_left, min) = take_min(left);
            node.left = new_left;
            (Some(rebalance(node)), min)
        }
    }
}

/// Restores the AVL invariant at `node` (whose subtrees are already valid AVL trees) and fixes
/// its height.
fn rebalance<T>(node: Box<Node<T>>) -> Box<Node<T>> {
    let mut node = balanced(node);
    node.fix_height();

    // In debug builds, assert that we've restored/maintained the AVL invariant.
    if cfg!(debug_assertions) {
        let balance_factor = node.balance_factor();
        assert!(
            balance_factor.abs() <= 1,
            "rebalanced node has balance factor {balance_factor}"
        );
    }
    node
}

/// Rotates `node` if one of its subtrees is two levels taller than the other.
///
/// See <https://en.wikipedia.org/wiki/AVL_tree#Rebalancing> for terminology.
fn balanced<T>(node: Box<Node<T>>) -> Box<Node<T>> {
    match node.balance_factor() {
        2 => {
            let left_leans_right = node.left().map_or(false, |n| n.balance_factor() < 0);
            trace!(balance_factor = 2, left_leans_right, "rebalancing left-heavy node");
            if left_leans_right {
                rotate_left_right(node)
            } else {
                rotate_right(node)
            }
        }
        -2 => {
            let right_leans_left = node.right().map_or(false, |n| n.balance_factor() > 0);
            trace!(balance_factor = -2, right_leans_left, "rebalancing right-heavy node");
            if right_leans_left {
                rotate_right_left(node)
            } else {
                rotate_left(node)
            }
        }
        _ => node,
    }
}

/// Rotate `node` to the right. This moves the left child up vertically and `node` down
/// vertically. Used to rebalance the tree when the left child is too tall. As such, it must only
/// be called when there _is_ a left child.
///
/// ## Panics
///
/// When called on a node without a left child.
///
/// # Diagram
///
/// ```text
///      node                  pivot
///     /    \                /     \
///  pivot    z   rotate ->  x      node
///   / \                           /  \
///  x   y                         y    z
/// ```
fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut pivot = node.left.take().expect("Rotate right => left child");

    node.left = pivot.right.take();
    // `node` is now below `pivot` so its height has to be fixed first.
    node.fix_height();

    pivot.right = Some(node);
    pivot.fix_height();
    pivot
}

/// Mirror image of [`rotate_right`].
///
/// ## Panics
///
/// When called on a node without a right child.
fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut pivot = node.right.take().expect("Rotate left => right child");

    node.right = pivot.left.take();
    node.fix_height();

    pivot.left = Some(node);
    pivot.fix_height();
    pivot
}

fn rotate_left_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let left = node.left.take().expect("Rotate left-right => left child");
    node.left = Some(rotate_left(left));
    rotate_right(node)
}

fn rotate_right_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let right = node.right.take().expect("Rotate right-left => right child");
    node.right = Some(rotate_right(right));
    rotate_left(node)
}

/// Checks the subtrees of `node` before `node` itself, so the first error found is the deepest
/// one along the leftmost broken path.
fn check_node<T: Ord>(node: &Node<T>, depth: usize) -> Result<(), InvariantError> {
    if let Some(left) = node.left() {
        check_node(left, depth + 1)?;
        if left.max() > &node.value {
            return Err(InvariantError::OutOfOrder { depth });
        }
    }
    if let Some(right) = node.right() {
        check_node(right, depth + 1)?;
        if right.min() < &node.value {
            return Err(InvariantError::OutOfOrder { depth });
        }
    }

    let computed = (node.left_height().max(node.right_height()) + 1) as usize;
    if node.height != computed {
        return Err(InvariantError::HeightMismatch {
            depth,
            stored: node.height,
            computed,
        });
    }

    let balance_factor = node.balance_factor();
    if balance_factor.abs() > 1 {
        return Err(InvariantError::Unbalanced {
            depth,
            balance_factor,
        });
    }

    Ok(())
}
