//! Error types for tree queries and rejected structural mutations.

use thiserror::Error;

/// Errors returned by structural queries and by mutations the slot layout
/// cannot support.
///
/// Expected, frequent outcomes are not errors: [`add`][crate::SlotBst::add]
/// on a duplicate and [`remove`][crate::SlotBst::remove] of an absent value
/// return `false` instead.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The referenced element does not occupy any slot in the tree.
    #[error("element not found in tree")]
    NotFound,

    /// The operation cannot be performed without violating the ordering or
    /// layout invariants of the tree.
    #[error("unsupported structural operation: {0}")]
    Unsupported(&'static str),
}

/// Result type for tree operations.
pub type Result<T> = std::result::Result<T, TreeError>;
