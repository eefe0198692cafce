//! This crate exposes an ordered symbol table built on a Binary Search Tree, along with a few
//! classic collections it is usually taught next to, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)` (where `height` is defined as the longest path from the root `Node`
//! to a leaf `Node`). The [`SymbolTable`] here never rebalances, so its height depends entirely on
//! the order keys arrive in: random orders give `O(lg N)` on average, sorted orders give `O(N)`.
//!
//! ## Order statistics
//!
//! Each `Node` of the [`SymbolTable`] also stores the number of `Node`s in its subtree. This lets
//! the table answer "how many keys are smaller than `k`?" ([`rank`](SymbolTable::rank)) and "which
//! key is `r`-th smallest?" ([`select`](SymbolTable::select)) by walking a single path.
//!
//! ## Peers
//!
//! [`MaxPriorityQueue`], [`Queue`] and [`Stack`] are independent of the table and of each other.
//!
//! ## Errors
//!
//! Looking up something that isn't there gives `None`. Calling an operation whose precondition
//! doesn't hold (the minimum of an empty table, popping an empty stack, selecting a rank past the
//! end) gives an [`Error`].

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod priority_queue;
pub mod queue;
pub mod stack;
pub mod symbol_table;

pub use error::{Error, Result};
pub use priority_queue::MaxPriorityQueue;
pub use queue::Queue;
pub use stack::Stack;
pub use symbol_table::SymbolTable;
