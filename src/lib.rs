//! Linked Heap - a min-heap stored as an explicit complete binary tree
//!
//! Nodes live in a slot arena and are linked by parent/left/right indices
//! instead of being laid out implicitly in an array. A breadth-first
//! insertion cursor keeps the tree complete: its front is the next parent to
//! receive a child and its back is the most recently inserted leaf, which is
//! the node moved to the root when the minimum is extracted.

pub mod data_structures;
pub mod demo;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod generators;
#[cfg(feature = "python")]
mod python;

/// Re-export main types for convenient use
pub use data_structures::{HeapReport, HeapSnapshot, LinkedMinHeap, NodeId};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("heap is empty")]
    EmptyHeap,

    #[error("node {0} is smaller than its parent")]
    HeapOrderViolation(NodeId),

    #[error("node {0} does not point back to its parent")]
    BrokenParentLink(NodeId),

    #[error("link to vacant node slot {0}")]
    DanglingLink(NodeId),

    #[error("node {0} follows a gap in level order")]
    IncompleteShape(NodeId),

    #[error("expected {expected} reachable nodes, found {found}")]
    CountMismatch { expected: usize, found: usize },

    #[error("insertion cursor does not match the open parents of the tree")]
    CursorMismatch,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
