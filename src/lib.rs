//! This crate collects classic algorithms, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! The [`ordered`] module holds a Binary Search Tree: a data structure supporting operations to
//! insert, find, and remove stored values. BSTs are typically defined recursively using the
//! notion of a `Node`. A `Node` stores a value and will sometimes have child `Node`s. The most
//! important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). This tree doesn't balance itself so its height
//! depends on insertion order: random insertions give a height around `O(lg N)` while sorted
//! insertions give a height of `N`. BSTs also naturally support sorted iteration by visiting the
//! left subtree, then the subtree root, then the right subtree.
//!
//! ## Sorting and searching
//!
//! The [`sort`] and [`search`] modules hold stateless functions over slices: bubble sort, merge
//! sort and quicksort, and linear and binary search.
//!
//! ## Logging
//!
//! Everything logs its intermediate steps at `trace` level through the [`log`] facade, using the
//! module name as the target. Nothing is printed unless the application installs a logger.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod ordered;
pub mod search;
pub mod sort;

#[cfg(test)]
mod test;

pub use ordered::Tree as OrderedTree;
