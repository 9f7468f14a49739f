//! The height-annotated node the [`Tree`][crate::Tree] is built out of.
//!
//! A `Node` only stores data and answers questions about its own shape. It never restructures
//! itself: every mutation (and so every rotation) goes through the `Tree`.

/// An exclusively owned, possibly absent, child.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A `Node` holds one value and up to two children. Values in the left subtree are never greater
/// than `value` and values in the right subtree are never less than it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,

    /// How many edges are on the longest path from this node down to a leaf. A node with no
    /// children has a height of 0.
    pub(crate) height: usize,
}

impl<T> Node<T> {
    /// Construct a new leaf holding `value`.
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            height: 0,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, if there is one.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if there is one.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// The height of the subtree rooted at this node. Leaves have a height of 0.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The height of the left subtree, or -1 if there is no left child.
    pub fn left_height(&self) -> isize {
        link_height(&self.left)
    }

    /// The height of the right subtree, or -1 if there is no right child.
    pub fn right_height(&self) -> isize {
        link_height(&self.right)
    }

    /// The difference in height between the left and right subtrees. Positive means the node is
    /// left-heavy. See [the Wikipedia page][wiki] for more details.
    ///
    /// [wiki]: https://en.wikipedia.org/wiki/AVL_tree#Balance_factor
    pub fn balance_factor(&self) -> isize {
        self.left_height() - self.right_height()
    }

    /// Adjusts the height of `self` to be the max of its children's heights + 1.
    pub(crate) fn fix_height(&mut self) {
        // An absent child counts as -1 so the smallest possible result is 0.
        self.height = (self.left_height().max(self.right_height()) + 1) as usize;
    }

    /// The smallest value in this subtree.
    pub fn min(&self) -> &T {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        &node.value
    }

    /// The largest value in this subtree.
    pub fn max(&self) -> &T {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        &node.value
    }

    /// Visits every value in ascending order: left subtree, then this node, then the right
    /// subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let tree: Tree<_> = [2, 3, 1].into_iter().collect();
    ///
    /// let mut seen = Vec::new();
    /// tree.root().unwrap().traverse_in_order(|v| seen.push(*v));
    /// assert_eq!(seen, [1, 2, 3]);
    /// ```
    pub fn traverse_in_order<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        self.in_order(&mut visit);
    }

    /// Visits this node, then the left subtree, then the right subtree.
    pub fn traverse_pre_order<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        self.pre_order(&mut visit);
    }

    /// Visits the left subtree, then the right subtree, then this node. The root is visited last.
    pub fn traverse_post_order<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        self.post_order(&mut visit);
    }

    fn in_order<F: FnMut(&T)>(&self, visit: &mut F) {
        if let Some(left) = self.left() {
            left.in_order(visit);
        }
        visit(&self.value);
        if let Some(right) = self.right() {
            right.in_order(visit);
        }
    }

    fn pre_order<F: FnMut(&T)>(&self, visit: &mut F) {
        visit(&self.value);
        if let Some(left) = self.left() {
            left.pre_order(visit);
        }
        if let Some(right) = self.right() {
            right.pre_order(visit);
        }
    }

    fn post_order<F: FnMut(&T)>(&self, visit: &mut F) {
        if let Some(left) = self.left() {
            left.post_order(visit);
        }
        if let Some(right) = self.right() {
            right.post_order(visit);
        }
        visit(&self.value);
    }
}

/// The height of a possibly absent subtree. Absent subtrees have a height of -1.
pub(crate) fn link_height<T>(link: &Link<T>) -> isize {
    link.as_ref().map_or(-1, |n| n.height as isize)
}
