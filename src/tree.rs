//! An owned, unbalanced BST. Every node owns its children outright, so
//! restructuring is expressed by passing owned subtrees down and returning
//! the updated subtree back up, rather than by mutating through shared
//! pointers.
//!
//! # Examples
//!
//! ```
//! use simple_bst::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search(&1), None);
//!
//! tree.insert(1);
//! assert_eq!(tree.search(&1), Some(&1));
//!
//! // Inserting the same value again is a silent no-op.
//! tree.insert(1);
//! assert_eq!(tree.len(), 1);
//!
//! // Deleting a missing value is a silent no-op too.
//! tree.delete(&42);
//! tree.delete(&1);
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;

type Link<T> = Option<Box<Node<T>>>;

/// A node owns its value and at most two children. All values reachable
/// through `left` are strictly less than `value`; all values reachable
/// through `right` are strictly greater.
#[derive(Clone)]
struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}

/// A plain Binary Search Tree holding a set of distinct, totally-ordered
/// values. This can be used for inserting, searching, and deleting values
/// and for traversing them in in-, pre-, or post-order.
///
/// The tree never rebalances itself: inserting values in sorted order
/// degenerates it into a linked list with `O(N)` operations. See the
/// [crate documentation](crate) for why that is deliberate.
pub struct BinarySearchTree<T> {
    root: Link<T>,
    /// Number of nodes reachable from `root`, maintained on every
    /// successful insert and delete.
    len: usize,
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for BinarySearchTree<T> {
    // The default drop glue would recurse through the children and can blow
    // the call stack on a degenerate tree, so tear down with a heap stack.
    fn drop(&mut self) {
        let mut stack = Vec::new();
        stack.extend(self.root.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> Clone for BinarySearchTree<T>
where
    T: Clone,
{
    // TODO stack based Clone. Cloning recurses through `Node`'s derived
    // `Clone`, so its depth is the tree height.
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            len: self.len,
        }
    }
}

impl<T> fmt::Debug for BinarySearchTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> BinarySearchTree<T> {
    /// Generates a new, empty tree.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns the number of values stored in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// assert_eq!(tree.len(), 0);
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// // The duplicate insert of 2 didn't count.
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        // Dropping the old tree reuses the iterative teardown in `Drop`.
        *self = Self::new();
    }

    /// Inserts the given value into the tree. If the value is already
    /// present, the tree is left unchanged; duplicates are rejected
    /// silently rather than being an error.
    ///
    /// Descent is an iterative walk down the owned links, so insertion
    /// never risks stack exhaustion even on a degenerate tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// assert_eq!(tree.in_order(), [&1, &2]);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        loop {
            match link {
                None => {
                    *link = Some(Box::new(Node::new(value)));
                    self.len += 1;
                    return;
                }
                Some(node) => match value.cmp(&node.value) {
                    Ordering::Less => link = &mut node.left,
                    Ordering::Equal => return,
                    Ordering::Greater => link = &mut node.right,
                },
            }
        }
    }

    /// Searches for the given value, returning a reference to the stored
    /// value if it is present. This is a pure read; the tree is never
    /// modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.search(&1), Some(&1));
    /// assert_eq!(tree.search(&42), None);
    /// ```
    pub fn search(&self, value: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match value.cmp(&node.value) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Equal => return Some(&node.value),
                Ordering::Greater => current = node.right.as_deref(),
            }
        }
        None
    }

    /// Returns `true` if the given value is stored in the tree.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.search(value).is_some()
    }

    /// Deletes the given value from the tree if it is present; deleting an
    /// absent value is a silent no-op. Deleting the sole remaining value
    /// empties the tree.
    ///
    /// When the matched node has two children, its value is replaced with
    /// its in-order successor (the minimum of the right subtree — never the
    /// left subtree's maximum) and the successor's node is unlinked from
    /// the right subtree.
    ///
    /// Deletion recurses along the descent path, so its stack usage is
    /// `O(height)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_bst::BinarySearchTree;
    ///
    /// let mut tree: BinarySearchTree<_> = [50, 30, 70, 20, 40, 60, 80].into_iter().collect();
    ///
    /// tree.delete(&50);
    ///
    /// // 50's in-order successor, 60, was promoted into its place.
    /// assert_eq!(tree.pre_order()[0], &60);
    /// assert_eq!(tree.in_order(), [&20, &30, &40, &60, &70, &80]);
    /// ```
    pub fn delete(&mut self, value: &T)
    where
        T: Ord,
    {
        let (root, removed) = Self::delete_link(self.root.take(), value);
        self.root = root;
        if removed {
            self.len -= 1;
        }
    }

    /// Deletes `value` from the owned subtree rooted at `link`, returning
    /// the updated subtree and whether a node was removed.
    fn delete_link(link: Link<T>, value: &T) -> (Link<T>, bool)
    where
        T: Ord,
    {
        let Some(mut node) = link else {
            return (None, false);
        };
        match value.cmp(&node.value) {
            Ordering::Less => {
                let (left, removed) = Self::delete_link(node.left.take(), value);
                node.left = left;
                (Some(node), removed)
            }
            Ordering::Greater => {
                let (right, removed) = Self::delete_link(node.right.take(), value);
                node.right = right;
                (Some(node), removed)
            }
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                // No left child: splice in the right child (which may be
                // absent, emptying this slot).
                (None, right) => (right, true),
                // A left child but no right child: splice in the left child.
                (left, None) => (left, true),
                // Two children: promote the in-order successor. The
                // successor is the leftmost node of the right subtree, so
                // unlinking it is always a no-left-child splice.
                (left, Some(right)) => {
                    let (right, successor) = Self::take_min(right);
                    node.value = successor;
                    node.left = left;
                    node.right = right;
                    (Some(node), true)
                }
            },
        }
    }

    /// Unlinks the minimum node of the subtree rooted at `node`, returning
    /// the remaining subtree and the minimum value.
    fn take_min(mut node: Box<Node<T>>) -> (Link<T>, T) {
        match node.left.take() {
            None => {
                let Node { value, right, .. } = *node;
                (right, value)
            }
            Some(left) => {
                let (left, min) = Self::take_min(left);
                node.left = left;
                (Some(node), min)
            }
        }
    }

    /// Returns a reference to the smallest value in the tree, or `None` if
    /// the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_bst::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<_> = [3, 1, 2].into_iter().collect();
    /// assert_eq!(tree.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    /// Returns a reference to the largest value in the tree, or `None` if
    /// the tree is empty.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// Gets the height of the tree: the number of nodes on the longest path
    /// from the root to a leaf. An empty tree has height 0.
    ///
    /// Because the tree never rebalances, the height is a direct record of
    /// how (un)lucky the insertion order was.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_bst::BinarySearchTree;
    ///
    /// // Sorted insertion order builds a right-only chain.
    /// let tree: BinarySearchTree<_> = (1..=10).collect();
    /// assert_eq!(tree.height(), 10);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push((root, 1));
        }
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            if let Some(left) = node.left.as_deref() {
                stack.push((left, depth + 1));
            }
            if let Some(right) = node.right.as_deref() {
                stack.push((right, depth + 1));
            }
        }
        height
    }

    /// Returns an iterator over the values in ascending order.
    ///
    /// The iterator keeps an explicit stack of the unvisited left spine, so
    /// iteration is safe on arbitrarily degenerate trees.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_bst::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<_> = [2, 3, 1].into_iter().collect();
    /// assert!(tree.iter().eq([&1, &2, &3]));
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter {
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Performs an in-order traversal (left, node, right), yielding every
    /// value in strictly ascending order. This ordering is the primary
    /// correctness oracle for the whole structure.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_bst::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<_> = [50, 30, 70, 20, 40].into_iter().collect();
    /// assert_eq!(tree.in_order(), [&20, &30, &40, &50, &70]);
    /// ```
    pub fn in_order(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// Performs a pre-order traversal (node, left, right). The first
    /// element is always the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_bst::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<_> = [50, 30, 70, 20, 40].into_iter().collect();
    /// assert_eq!(tree.pre_order(), [&50, &30, &20, &40, &70]);
    /// ```
    pub fn pre_order(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len);
        let mut stack = Vec::new();
        stack.extend(self.root.as_deref());
        while let Some(node) = stack.pop() {
            values.push(&node.value);
            // Push right first so the left subtree pops first.
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        values
    }

    /// Performs a post-order traversal (left, right, node). The last
    /// element is always the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_bst::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<_> = [50, 30, 70, 20, 40].into_iter().collect();
    /// assert_eq!(tree.post_order(), [&20, &40, &30, &70, &50]);
    /// ```
    pub fn post_order(&self) -> Vec<&T> {
        // A (node, right, left) pre-order reversed is exactly
        // (left, right, node) post-order.
        let mut values = Vec::with_capacity(self.len);
        let mut stack = Vec::new();
        stack.extend(self.root.as_deref());
        while let Some(node) = stack.pop() {
            values.push(&node.value);
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }
        values.reverse();
        values
    }
}

/// An in-order iterator over references to a tree's values.
///
/// Created by [`BinarySearchTree::iter`].
pub struct Iter<'a, T> {
    /// The current node's ancestors-to-visit plus the node itself: the
    /// unvisited left spine, deepest (smallest) on top.
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn push_left_spine(&mut self, mut link: Option<&'a Node<T>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> std::iter::FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A consuming in-order iterator over a tree's values.
///
/// Created by the [`IntoIterator`] impl on [`BinarySearchTree`].
pub struct IntoIter<T> {
    stack: Vec<Box<Node<T>>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    fn push_left_spine(&mut self, mut link: Link<T>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let Node { value, right, .. } = *self.stack.pop()?;
        self.push_left_spine(right);
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> std::iter::FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    // The nodes still on the stack own whole unvisited subtrees; flatten
    // them here instead of letting drop glue recurse through them.
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.stack);
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> IntoIterator for BinarySearchTree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the tree, yielding its values in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_bst::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<_> = [2, 1, 3].into_iter().collect();
    /// let values: Vec<i32> = tree.into_iter().collect();
    /// assert_eq!(values, [1, 2, 3]);
    /// ```
    fn into_iter(mut self) -> Self::IntoIter {
        let mut iter = IntoIter {
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.push_left_spine(self.root.take());
        iter
    }
}

impl<T> Extend<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
