//! An ordered set backed by an unbalanced Binary Search Tree. Every node exclusively owns its
//! children so the tree can never share nodes or form cycles.
//!
//! Nothing rebalances the tree: inserting already sorted values produces a chain whose height is
//! the number of elements. Insertion, lookup, iteration, cloning and dropping all work without
//! recursion so such chains are fine. Removal recurses along the search path.
//!
//! # Examples
//!
//! ```
//! use classic_algos::ordered::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! tree.insert(1);
//! assert!(tree.contains(&1));
//!
//! // Inserting an existing value does nothing.
//! tree.insert(1);
//! assert_eq!(tree.len(), 1);
//!
//! tree.remove(&1);
//! assert!(!tree.contains(&1));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

use log::trace;

/// An owned, possibly empty subtree.
type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree holding unique, totally ordered values.
///
/// For every node, the values in its left subtree are smaller than its own value and the values
/// in its right subtree are larger.
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        release(self.root.take().into_iter().collect());
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root.as_deref().and_then(Node::deep_clone),
            len: self.len,
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Renders the values in ascending order, each followed by a single space.
///
/// ```
/// use classic_algos::ordered::Tree;
///
/// let tree: Tree<_> = [5, 6, 2].into_iter().collect();
/// assert_eq!(tree.to_string(), "2 5 6 ");
///
/// assert_eq!(Tree::<i32>::new().to_string(), "");
/// ```
impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self {
            write!(f, "{} ", value)?;
        }
        Ok(())
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Inserts `value` into the tree. If an equal value is already present the tree is left
    /// unchanged and `value` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_algos::ordered::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(5);
    /// tree.insert(2);
    /// tree.insert(5);
    ///
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&2, &5]);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            match value.cmp(&node.value) {
                Ordering::Less => link = &mut node.left,
                Ordering::Equal => {
                    trace!(target: "ordered", "insert ignored an existing value");
                    return;
                }
                Ordering::Greater => link = &mut node.right,
            }
        }

        *link = Some(Node::new_boxed(value));
        self.len += 1;
    }

    /// Returns `true` if a value equal to `value` is stored in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_algos::ordered::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(34);
    ///
    /// assert!(tree.contains(&34));
    /// assert!(!tree.contains(&99));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            match value.cmp(&node.value) {
                Ordering::Less => link = node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => link = node.right.as_deref(),
            }
        }
        false
    }

    /// Removes the value equal to `value` from the tree. If the tree never contained such a
    /// value, nothing happens.
    ///
    /// A node with two children is not unlinked itself. Instead it takes over the value of its
    /// in-order successor (the smallest value in its right subtree) and the successor's node is
    /// unlinked.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_algos::ordered::Tree;
    ///
    /// let mut tree: Tree<_> = [5, 2, 6].into_iter().collect();
    /// tree.remove(&5);
    ///
    /// // 6 was promoted into the root's position.
    /// assert_eq!(tree.root(), Some(&6));
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&2, &6]);
    ///
    /// // Removing it again is a no-op.
    /// tree.remove(&5);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn remove(&mut self, value: &T)
    where
        T: Ord,
    {
        if Node::remove_from(&mut self.root, value) {
            self.len -= 1;
        } else {
            trace!(target: "ordered", "remove found no matching value");
        }
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        release(self.root.take().into_iter().collect());
        self.len = 0;
    }

    /// The value stored at the root of the tree, if any.
    pub fn root(&self) -> Option<&T> {
        self.root.as_deref().map(|root| &root.value)
    }

    /// The smallest value in the tree.
    ///
    /// ```
    /// use classic_algos::ordered::Tree;
    ///
    /// let tree: Tree<_> = [5, 6, 2, 56].into_iter().collect();
    /// assert_eq!(tree.min(), Some(&2));
    /// assert_eq!(tree.max(), Some(&56));
    /// ```
    pub fn min(&self) -> Option<&T> {
        self.root.as_deref().map(Node::minimum)
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// How many levels are in the tree. An empty tree has a height of 0 and a tree with only a
    /// root has a height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = Vec::new();
        stack.extend(self.root.as_deref().map(|root| (root, 1)));
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }
        height
    }

    /// Iterates over the values in ascending order. Every call starts a fresh traversal.
    ///
    /// ```
    /// use classic_algos::ordered::Tree;
    ///
    /// let tree: Tree<_> = [5, 6, 2, 56, 34, 12, 54, 3].into_iter().collect();
    /// let values: Vec<_> = tree.iter().copied().collect();
    ///
    /// assert_eq!(values, [2, 3, 5, 6, 12, 34, 54, 56]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref(), self.len)
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
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

impl<T> IntoIterator for Tree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter::new(self.root.take(), self.len)
    }
}

/// Drops a forest of nodes one node at a time so that dropping a long chain can't overflow the
/// stack.
fn release<T>(mut stack: Vec<Box<Node<T>>>) {
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    /// Copies the subtree rooted at `self`. Nodes are rebuilt in post-order from a work stack, so
    /// every copied child is waiting on `built` when its parent is rebuilt.
    fn deep_clone(&self) -> Link<T>
    where
        T: Clone,
    {
        let mut pending = vec![(self, false)];
        let mut built: Vec<Box<Self>> = Vec::new();
        while let Some((node, children_built)) = pending.pop() {
            if children_built {
                // The right child was rebuilt last so it sits on top.
                let right = node.right.as_ref().and_then(|_| built.pop());
                let left = node.left.as_ref().and_then(|_| built.pop());
                built.push(Box::new(Self {
                    value: node.value.clone(),
                    left,
                    right,
                }));
            } else {
                pending.push((node, true));
                pending.extend(node.right.as_deref().map(|n| (n, false)));
                pending.extend(node.left.as_deref().map(|n| (n, false)));
            }
        }

        debug_assert_eq!(built.len(), 1);
        built.pop()
    }

    /// The smallest value in this subtree, found by following left children.
    fn minimum(&self) -> &T {
        let mut node = self;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        &node.value
    }

    /// Removes `value` from the subtree in `link` and stores the rebuilt subtree back into
    /// `link`. Returns whether a node was removed.
    fn remove_from(link: &mut Link<T>, value: &T) -> bool
    where
        T: Ord,
    {
        match link.take() {
            Some(node) => {
                let (subtree, removed) = node.remove(value);
                *link = subtree;
                removed
            }
            None => false,
        }
    }

    /// Removes `value` from the subtree rooted at `self` and returns the new root of the subtree.
    fn remove(mut self: Box<Self>, value: &T) -> (Link<T>, bool)
    where
        T: Ord,
    {
        let removed = match value.cmp(&self.value) {
            Ordering::Less => Self::remove_from(&mut self.left, value),
            Ordering::Equal => return (self.unlink(), true),
            Ordering::Greater => Self::remove_from(&mut self.right, value),
        };

        self.check_order();
        (Some(self), removed)
    }

    /// Takes `self` out of the tree and returns what should take its place.
    fn unlink(mut self: Box<Self>) -> Link<T>
    where
        T: Ord,
    {
        match (self.left.take(), self.right.take()) {
            (None, right) => right,
            (Some(left), None) => Some(left),
            (Some(left), Some(right)) => {
                trace!(target: "ordered", "promoting the in-order successor of a removed value");
                let (successor, rest) = right.take_minimum();
                self.value = successor;
                self.left = Some(left);
                self.right = rest;

                self.check_order();
                Some(self)
            }
        }
    }

    /// Detaches the node holding the smallest value of this subtree. Returns that value and what
    /// remains of the subtree. The detached node has no left child so its right child moves up
    /// into its place.
    fn take_minimum(mut self: Box<Self>) -> (T, Link<T>) {
        match self.left.take() {
            Some(left) => {
                let (minimum, rest) = left.take_minimum();
                self.left = rest;
                (minimum, Some(self))
            }
            None => {
                let Self { value, right, .. } = *self;
                (value, right)
            }
        }
    }

    /// In debug builds, asserts that this node's children are ordered around it.
    fn check_order(&self)
    where
        T: Ord,
    {
        if cfg!(debug_assertions) {
            if let Some(left) = self.left.as_deref() {
                assert!(left.value < self.value);
            }
            if let Some(right) = self.right.as_deref() {
                assert!(self.value < right.value);
            }
        }
    }
}

/// A borrowing iterator over the values of a [`Tree`] in ascending order. Created by
/// [`Tree::iter`].
pub struct Iter<'a, T> {
    /// Nodes whose value hasn't been yielded yet but whose left subtree has been.
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

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
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

/// An owning iterator over the values of a [`Tree`] in ascending order.
pub struct IntoIter<T> {
    stack: Vec<Box<Node<T>>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    fn new(root: Link<T>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Link<T>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        release(std::mem::take(&mut self.stack));
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let Node { value, right, .. } = *node;
        self.push_left_spine(right);
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
