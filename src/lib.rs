#![warn(missing_docs)]

//! This crate provides a binary search tree whose nodes are not linked by
//! references but addressed implicitly by arithmetic position inside a single
//! growable slot array, in the manner of a binary-heap layout. The root lives
//! in slot 0, and the children of slot `i` live in slots `2i + 1` and
//! `2i + 2`, so every structural query (parent, children, siblings,
//! ancestors, common ancestors, leaves, depth, in-order neighbors, and the
//! four classic traversal orders) is computed from index arithmetic and
//! element comparison alone.
//!
//! # Data structures
//!  - [`SlotBst`]: the tree itself, an ordered set with structural queries.
//!  - [`SlotVec`][slot_vec::SlotVec]: the underlying growable store of
//!    optional elements, usable on its own for other implicit layouts.
//!
//! # Shape
//! The tree performs no rebalancing: its shape is a deterministic function of
//! the insertion sequence (and subsequent deletions), which also makes
//! equality structural: two trees are equal iff their occupied slot layouts
//! match. Because a slot index encodes the full root path, storage grows with
//! the *height* of the tree, not just the element count; degenerate
//! insertion orders (e.g. sorted input) are therefore exponentially wasteful,
//! while balanced shapes stay linear.
//!
//! # Deletion
//! Removing an element must keep every surviving element's ancestor chain
//! occupied, since chains are how queries navigate. A removed node with one
//! child has that child's entire subtree relocated one level up; a removed
//! node with two children is refilled with its in-order predecessor. The
//! surviving elements' in-order sequence is never disturbed.
//!
//! # Features
//! The `serde` feature derives `Serialize`/`Deserialize` for both structures.

pub use crate::bst::{Iter, SlotBst};
pub use crate::error::{Result, TreeError};
pub use crate::slot_vec::SlotVec;

pub mod bst;
pub mod error;
pub mod slot_vec;
