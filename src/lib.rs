//! A plain, unbalanced Binary Search Tree (BST) for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! These invariants make searching take `O(height)` (where `height` is
//! defined as the longest path from the root `Node` to a leaf `Node`) and
//! make in-order traversal yield the values in sorted order.
//!
//! ## No balancing
//!
//! This tree performs no rebalancing whatsoever. The height of the tree is
//! determined entirely by insertion order: random-ish orders give a height
//! near `O(lg N)`, while sorted input degenerates the tree into a linked
//! list with `O(N)` operations. That degradation is a documented property
//! of the structure, not a defect. Callers who need guaranteed logarithmic
//! behavior want an AVL or red-black tree instead.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod tree;

pub use tree::{BinarySearchTree, IntoIter, Iter};

#[cfg(test)]
pub(crate) mod test;
